use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use frn_console_core::{Credits, DashboardStats, Endpoint, EndpointQuery};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::SearchQuery;
use crate::response_types::{CategoryListResponse, EndpointListResponse};

pub async fn list_endpoints(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<EndpointListResponse> {
    let catalog = state.catalog();
    let endpoints: Vec<Endpoint> = EndpointQuery::new(&query.q)
        .filter_endpoints(catalog.endpoints())
        .into_iter()
        .cloned()
        .collect();
    Json(EndpointListResponse { query: query.q, total: catalog.len(), endpoints })
}

pub async fn get_endpoint(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Endpoint>, ApiError> {
    state
        .catalog()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("endpoint '{id}' not found")))
}

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<CategoryListResponse> {
    let categories = EndpointQuery::new(&query.q).filter_categories(&state.catalog().categories());
    Json(CategoryListResponse { query: query.q, categories })
}

pub async fn dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardStats> {
    Json(DashboardStats::from_catalog(state.catalog()))
}

pub async fn credits(State(state): State<Arc<AppState>>) -> Json<Credits> {
    Json(Credits::from_catalog(state.catalog()))
}
