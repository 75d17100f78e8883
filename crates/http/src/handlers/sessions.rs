use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use frn_console_core::Notification;
use frn_console_service::{CopyReport, RunReport, SessionView};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{
    CopyRequest, SelectRequest, SetParamsRequest, SetSearchRequest, SidebarRequest,
};

type ViewResult = Result<Json<SessionView>, ApiError>;

pub async fn create_session(State(state): State<Arc<AppState>>) -> (StatusCode, Json<SessionView>) {
    (StatusCode::CREATED, Json(state.sessions.create_session().await))
}

pub async fn get_session(State(state): State<Arc<AppState>>, Path(id): Path<Uuid>) -> ViewResult {
    Ok(Json(state.sessions.view(id).await?))
}

pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.delete_session(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("session not found: {id}")))
    }
}

pub async fn set_search(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetSearchRequest>,
) -> ViewResult {
    Ok(Json(state.sessions.set_search_query(id, req.query).await?))
}

pub async fn toggle_category(
    State(state): State<Arc<AppState>>,
    Path((id, name)): Path<(Uuid, String)>,
) -> ViewResult {
    Ok(Json(state.sessions.toggle_category(id, &name).await?))
}

pub async fn select_endpoint(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectRequest>,
) -> ViewResult {
    Ok(Json(state.sessions.select_endpoint(id, &req.endpoint_id).await?))
}

pub async fn set_params(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetParamsRequest>,
) -> ViewResult {
    Ok(Json(state.sessions.set_params(id, req.params).await?))
}

pub async fn set_sidebar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<SidebarRequest>,
) -> ViewResult {
    Ok(Json(state.sessions.set_sidebar_open(id, req.open).await?))
}

/// Resolves after the simulated latency; a stale result comes back with `applied: false`.
pub async fn run_test(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<RunReport>, ApiError> {
    Ok(Json(state.sessions.run_test(id).await?))
}

pub async fn copy(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<CopyRequest>,
) -> Result<Json<CopyReport>, ApiError> {
    Ok(Json(state.sessions.copy(id, req.target).await?))
}

/// Polling alternative to `/events`: returns and clears the queued toasts.
pub async fn drain_notifications(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    Ok(Json(state.sessions.drain_notifications(id).await?))
}
