use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use frn_console_service::{ServiceError, SimulationOutcome};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::SimulateRequest;

/// Stateless run: waits out the configured latency and returns the mock payload.
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Option<Json<SimulateRequest>>,
) -> Result<Json<SimulationOutcome>, ApiError> {
    if !state.catalog().contains(&id) {
        return Err(ServiceError::UnknownEndpoint(id).into());
    }
    let params = body.map(|Json(request)| request.params).unwrap_or_default();
    let outcome = state.sessions.simulate_once(&id, &params).await;
    Ok(Json(outcome))
}
