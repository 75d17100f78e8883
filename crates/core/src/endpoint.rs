//! Endpoint records and the HTTP method classification used for display.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// HTTP verb of a documented endpoint.
///
/// Comparison is case-insensitive; the display form is always uppercase.
/// Unrecognized verbs are kept verbatim (uppercased) in [`HttpMethod::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Other(String),
}

impl HttpMethod {
    /// Uppercase token as displayed in badges and tallies.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match *self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Other(ref raw) => raw,
        }
    }

    /// Badge color for this method.
    #[must_use]
    pub const fn tone(&self) -> BadgeTone {
        match *self {
            Self::Get => BadgeTone::Success,
            Self::Post => BadgeTone::Primary,
            Self::Put => BadgeTone::Warning,
            Self::Delete => BadgeTone::Destructive,
            Self::Other(_) => BadgeTone::Muted,
        }
    }
}

impl From<&str> for HttpMethod {
    fn from(raw: &str) -> Self {
        let upper = raw.trim().to_uppercase();
        match upper.as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            _ => Self::Other(upper),
        }
    }
}

impl From<String> for HttpMethod {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Semantic color of a method badge; the page maps these to theme tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Success,
    Primary,
    Warning,
    Destructive,
    Muted,
}

/// One documented input of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Free-text type label ("string", "number"); never enforced.
    #[serde(rename = "type")]
    pub param_type: String,
    pub required: bool,
    pub description: String,
}

/// A documented API operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Unique across the catalog; also selects the mock response rule.
    pub id: String,
    pub name: String,
    pub method: HttpMethod,
    /// URL template; may embed query placeholders such as `?q=`.
    pub path: String,
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub category: String,
    pub version: String,
    pub author: String,
}

impl Endpoint {
    /// Names of required parameters, in declaration order.
    pub fn required_parameters(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().filter(|p| p.required).map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parse_is_case_insensitive() {
        assert_eq!(HttpMethod::from("get"), HttpMethod::Get);
        assert_eq!(HttpMethod::from("Post"), HttpMethod::Post);
        assert_eq!(HttpMethod::from(" delete "), HttpMethod::Delete);
    }

    #[test]
    fn unknown_method_keeps_uppercased_token() {
        let method = HttpMethod::from("patch");
        assert_eq!(method, HttpMethod::Other("PATCH".to_owned()));
        assert_eq!(method.as_str(), "PATCH");
        assert_eq!(method.tone(), BadgeTone::Muted);
    }

    #[test]
    fn tones_follow_method() {
        assert_eq!(HttpMethod::Get.tone(), BadgeTone::Success);
        assert_eq!(HttpMethod::Post.tone(), BadgeTone::Primary);
        assert_eq!(HttpMethod::Put.tone(), BadgeTone::Warning);
        assert_eq!(HttpMethod::Delete.tone(), BadgeTone::Destructive);
    }

    #[test]
    fn endpoint_deserializes_without_parameters() {
        let json = r#"{
            "id": "ping",
            "name": "Ping",
            "method": "get",
            "path": "/api/ping",
            "description": "Liveness",
            "category": "misc",
            "version": "1.0.0",
            "author": "tests"
        }"#;
        let endpoint: Endpoint = serde_json::from_str(json).unwrap();
        assert!(endpoint.parameters.is_empty());
        assert_eq!(endpoint.method, HttpMethod::Get);
    }

    #[test]
    fn method_serializes_uppercase() {
        let value = serde_json::to_value(HttpMethod::from("put")).unwrap();
        assert_eq!(value, serde_json::json!("PUT"));
    }

    #[test]
    fn parameter_type_uses_wire_name() {
        let param = Parameter {
            name: "q".to_owned(),
            param_type: "string".to_owned(),
            required: true,
            description: "Search query".to_owned(),
        };
        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value["type"], "string");
    }
}
