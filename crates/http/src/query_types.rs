//! Request/query types (Deserialize)

use frn_console_core::ParamValues;
use frn_console_service::CopyTarget;
use serde::Deserialize;

/// `?q=` search text shared by the catalog listings.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SimulateRequest {
    #[serde(default)]
    pub params: ParamValues,
}

#[derive(Debug, Deserialize)]
pub struct SetSearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub endpoint_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SetParamsRequest {
    #[serde(default)]
    pub params: ParamValues,
}

#[derive(Debug, Deserialize)]
pub struct CopyRequest {
    pub target: CopyTarget,
}

#[derive(Debug, Deserialize)]
pub struct SidebarRequest {
    pub open: bool,
}
