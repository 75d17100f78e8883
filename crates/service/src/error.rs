//! Typed error enum for the service layer.
//!
//! Callers match on specific failure modes (unknown session, unknown endpoint,
//! a run already in flight) instead of downcasting opaque errors.

use frn_console_core::CoreError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// No live session with this id (never created, deleted or evicted).
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// The requested endpoint id is not in the catalog.
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// A tester operation was requested while the dashboard is shown.
    #[error("no endpoint selected")]
    NoEndpointSelected,

    /// The tester already has a simulated request pending.
    #[error("request already in flight for endpoint {0}")]
    RequestInFlight(String),

    /// Caller provided invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("core: {0}")]
    Core(#[from] CoreError),

    /// A detached run task panicked or was cancelled at shutdown.
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SessionNotFound(_) | Self::UnknownEndpoint(_))
    }

    /// Whether the request conflicts with state already in progress.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::RequestInFlight(_))
    }
}
