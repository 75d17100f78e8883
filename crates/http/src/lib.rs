//! HTTP API server for the FRN API console.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(unused_results, reason = "Some results are intentionally ignored")]
#![allow(missing_copy_implementations, reason = "Types may grow")]
#![allow(clippy::let_underscore_untyped, reason = "Type is clear from context")]
#![allow(let_underscore_drop, reason = "Intentionally dropping values")]
#![allow(clippy::ref_patterns, reason = "Ref patterns are clearer")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::shadow_reuse, reason = "Shadowing for Arc clones is idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod console;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    Json, Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use frn_console_core::{Catalog, ConsoleConfig, MemoryClipboard, MockRules};
use frn_console_service::{BroadcastNotifier, SessionService, Simulator};

pub use response_types::VersionResponse;

/// Buffered notifications per SSE subscriber before it starts lagging.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Console sessions, simulator and catalog
    pub sessions: Arc<SessionService>,
    /// Broadcast channel for SSE notifications
    pub notifier: Arc<BroadcastNotifier>,
}

impl AppState {
    /// Wires the service layer for `catalog` using `config` timings.
    #[must_use]
    pub fn new(catalog: Catalog, config: &ConsoleConfig) -> Self {
        let notifier = Arc::new(BroadcastNotifier::new(EVENT_CHANNEL_CAPACITY));
        let simulator = Arc::new(Simulator::new(MockRules::builtin(), config.latency));
        let sessions = Arc::new(SessionService::new(
            Arc::new(catalog),
            simulator,
            Arc::clone(&notifier),
            Arc::new(MemoryClipboard::new()),
            config,
        ));
        Self { sessions, notifier }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.sessions.catalog()
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(console::serve_console))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/endpoints", get(handlers::catalog::list_endpoints))
        .route("/api/endpoints/{id}", get(handlers::catalog::get_endpoint))
        .route("/api/categories", get(handlers::catalog::list_categories))
        .route("/api/dashboard", get(handlers::catalog::dashboard))
        .route("/api/credits", get(handlers::catalog::credits))
        .route("/api/simulate/{id}", post(handlers::simulate::simulate))
        .route("/api/sessions", post(handlers::sessions::create_session))
        .route(
            "/api/sessions/{id}",
            get(handlers::sessions::get_session).delete(handlers::sessions::delete_session),
        )
        .route("/api/sessions/{id}/search", put(handlers::sessions::set_search))
        .route(
            "/api/sessions/{id}/categories/{name}/toggle",
            post(handlers::sessions::toggle_category),
        )
        .route("/api/sessions/{id}/select", post(handlers::sessions::select_endpoint))
        .route("/api/sessions/{id}/params", put(handlers::sessions::set_params))
        .route("/api/sessions/{id}/run", post(handlers::sessions::run_test))
        .route("/api/sessions/{id}/copy", post(handlers::sessions::copy))
        .route("/api/sessions/{id}/sidebar", put(handlers::sessions::set_sidebar))
        .route("/api/sessions/{id}/notifications", get(handlers::sessions::drain_notifications))
        .route("/events", get(handlers::events::sse_events))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { name: frn_console_core::CONSOLE_TITLE, version: env!("CARGO_PKG_VERSION") })
}
