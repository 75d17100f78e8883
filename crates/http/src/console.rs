//! Console UI: embedded single-page app served at `/`.
//!
//! The page drives a server-side session through the JSON API:
//! - searchable, collapsible endpoint sidebar
//! - dashboard with method shares and credits
//! - parameter form, simulated run and copy actions
//! - toasts from `/events`
//!
//! Clients without SSE can poll `GET /api/sessions/{id}/notifications`
//! instead; it drains the same toasts from the session's queue.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

/// Embedded HTML for the console page
pub const CONSOLE_HTML: &str = include_str!("console.html");

/// Serve the console HTML page
pub async fn serve_console() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(CONSOLE_HTML))
        .into_response()
}
