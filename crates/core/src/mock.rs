//! Mock Response Generator rules.
//!
//! Responses are fabricated from a lookup table keyed by endpoint id, with one
//! fallback handler for every id without a dedicated rule. Nothing here touches
//! the network; latency is added by the service layer.

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::constants::{POWERED_BY, REQUEST_FAILED_MESSAGE};
use crate::error::Result;

/// Parameter form values, keyed by parameter name, in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamValues(Map<String, Value>);

impl ParamValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), Value::String(value.into()));
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Like [`ParamValues::get`] but treats an empty string as absent.
    #[must_use]
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Shallow copy of the values as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.set(name, value);
        }
        params
    }
}

/// Input to a mock handler.
#[derive(Debug, Clone, Copy)]
pub struct MockRequest<'a> {
    pub endpoint_id: &'a str,
    pub params: &'a ParamValues,
    pub now: DateTime<Utc>,
}

impl MockRequest<'_> {
    /// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.now.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Builds the payload for one request. Keys appear in insertion order.
pub type MockHandler = fn(&MockRequest<'_>) -> Result<Map<String, Value>>;

/// Lookup table from endpoint id to response handler, plus a fallback.
#[derive(Clone)]
pub struct MockRules {
    handlers: HashMap<String, MockHandler>,
    fallback: MockHandler,
}

impl std::fmt::Debug for MockRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("MockRules").field("handlers", &ids).finish_non_exhaustive()
    }
}

impl Default for MockRules {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MockRules {
    /// Rules with only the generic echo fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self { handlers: HashMap::new(), fallback: echo_response }
    }

    /// The shipped rules: `hello`, `reverse`, and the echo fallback.
    #[must_use]
    pub fn builtin() -> Self {
        Self::empty().with_handler("hello", hello_response).with_handler("reverse", reverse_response)
    }

    #[must_use]
    pub fn with_handler(mut self, endpoint_id: impl Into<String>, handler: MockHandler) -> Self {
        self.handlers.insert(endpoint_id.into(), handler);
        self
    }

    /// Runs the handler for `request.endpoint_id`, or the fallback.
    pub fn generate(&self, request: &MockRequest<'_>) -> Result<Value> {
        let handler = self.handlers.get(request.endpoint_id).copied().unwrap_or(self.fallback);
        let mut payload = handler(request)?;
        payload.insert("timestamp".to_owned(), Value::String(request.timestamp()));
        payload.insert("powered_by".to_owned(), Value::String(POWERED_BY.to_owned()));
        Ok(Value::Object(payload))
    }
}

/// Payload shown when generation fails.
#[must_use]
pub fn failure_payload() -> Value {
    json!({ "error": REQUEST_FAILED_MESSAGE })
}

/// Renders a payload the way the response panel shows it (2-space indent).
pub fn pretty_json(payload: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(payload)?)
}

fn hello_response(request: &MockRequest<'_>) -> Result<Map<String, Value>> {
    let name = request.params.get_non_empty("name").unwrap_or("World");
    let mut payload = Map::new();
    payload.insert("message".to_owned(), Value::String(format!("Hello, {name}!")));
    Ok(payload)
}

fn reverse_response(request: &MockRequest<'_>) -> Result<Map<String, Value>> {
    let text = request.params.get_non_empty("text").unwrap_or_default();
    let mut payload = Map::new();
    payload.insert("original".to_owned(), Value::String(text.to_owned()));
    payload.insert("reversed".to_owned(), Value::String(text.chars().rev().collect()));
    payload.insert("length".to_owned(), Value::from(text.chars().count()));
    Ok(payload)
}

fn echo_response(request: &MockRequest<'_>) -> Result<Map<String, Value>> {
    let mut payload = Map::new();
    payload.insert("status".to_owned(), Value::String("success".to_owned()));
    payload.insert("data".to_owned(), request.params.to_json());
    Ok(payload)
}
