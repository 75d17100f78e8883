//! Response types (Serialize)

use frn_console_core::{Category, Endpoint};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub name: &'static str,
    pub version: &'static str,
}

/// Filtered endpoint listing.
#[derive(Debug, Serialize)]
pub struct EndpointListResponse {
    pub query: String,
    pub total: usize,
    pub endpoints: Vec<Endpoint>,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub query: String,
    pub categories: Vec<Category>,
}
