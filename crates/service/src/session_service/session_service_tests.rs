use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use frn_console_core::{
    ConsoleConfig, CoreError, MemoryClipboard, MockRules, NotificationKind, Result as CoreResult,
};

use super::*;

struct BrokenClipboard;

#[async_trait]
impl ClipboardSink for BrokenClipboard {
    async fn write_text(&self, _text: &str) -> CoreResult<()> {
        Err(CoreError::Clipboard("permission denied".to_owned()))
    }
}

fn config(latency: Duration, max_sessions: usize) -> ConsoleConfig {
    ConsoleConfig { latency, max_sessions, ..ConsoleConfig::default() }
}

fn service_with(config: &ConsoleConfig, clipboard: Arc<dyn ClipboardSink>) -> SessionService {
    SessionService::new(
        Arc::new(Catalog::builtin()),
        Arc::new(Simulator::new(MockRules::builtin(), config.latency)),
        Arc::new(BroadcastNotifier::new(16)),
        clipboard,
        config,
    )
}

fn instant_service() -> SessionService {
    service_with(&config(Duration::ZERO, 8), Arc::new(MemoryClipboard::new()))
}

#[tokio::test]
async fn new_session_shows_dashboard() {
    let service = instant_service();
    let view = service.create_session().await;
    assert!(view.main.is_dashboard());
    assert!(!view.sidebar_open);
    assert_eq!(view.sidebar.categories.len(), 6);
    assert_eq!(service.session_count().await, 1);
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let service = instant_service();
    let missing = Uuid::new_v4();
    let err = service.view(missing).await.unwrap_err();
    assert!(matches!(err, ServiceError::SessionNotFound(id) if id == missing));
    assert!(err.is_not_found());
    assert!(!service.delete_session(missing).await);
}

#[tokio::test]
async fn deleted_session_is_gone() {
    let service = instant_service();
    let id = service.create_session().await.session_id;
    assert!(service.delete_session(id).await);
    assert!(service.view(id).await.is_err());
}

#[tokio::test]
async fn oldest_session_is_evicted_at_capacity() {
    let service = service_with(&config(Duration::ZERO, 1), Arc::new(MemoryClipboard::new()));
    let first = service.create_session().await.session_id;
    let second = service.create_session().await.session_id;

    assert_eq!(service.session_count().await, 1);
    assert!(service.view(first).await.is_err());
    assert!(service.view(second).await.is_ok());
}

#[tokio::test]
async fn search_and_toggle_shape_the_sidebar() {
    let service = instant_service();
    let id = service.create_session().await.session_id;

    let view = service.set_search_query(id, "lyrics".to_owned()).await.unwrap();
    assert_eq!(view.sidebar.categories.len(), 1);
    assert_eq!(view.sidebar.categories[0].name, "search");
    assert_eq!(view.sidebar.categories[0].endpoint_count, 1);

    let view = service.toggle_category(id, "search").await.unwrap();
    assert!(!view.sidebar.categories[0].expanded);
    assert!(view.sidebar.categories[0].endpoints.is_empty());
}

#[tokio::test]
async fn run_test_applies_hello_response() {
    let service = instant_service();
    let id = service.create_session().await.session_id;
    service.select_endpoint(id, "hello").await.unwrap();
    service.set_params(id, [("name", "Ann")].into_iter().collect()).await.unwrap();

    let report = service.run_test(id).await.unwrap();
    assert!(report.applied);
    assert!(report.outcome.is_success());
    assert_eq!(report.outcome.payload()["message"], "Hello, Ann!");

    let tester = report.session.main.tester().unwrap();
    assert!(!tester.loading);
    assert_eq!(tester.response.as_ref().unwrap()["message"], "Hello, Ann!");

    let toasts = service.drain_notifications(id).await.unwrap();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, NotificationKind::Success);
    assert_eq!(toasts[0].message, "API request successful!");
}

#[tokio::test]
async fn run_test_without_selection_fails() {
    let service = instant_service();
    let id = service.create_session().await.session_id;
    assert!(matches!(service.run_test(id).await, Err(ServiceError::NoEndpointSelected)));
}

#[tokio::test]
async fn selecting_unknown_endpoint_keeps_dashboard() {
    let service = instant_service();
    let id = service.create_session().await.session_id;
    let err = service.select_endpoint(id, "nope").await.unwrap_err();
    assert!(matches!(err, ServiceError::UnknownEndpoint(ref e) if e == "nope"));
    assert!(service.view(id).await.unwrap().main.is_dashboard());
}

#[tokio::test(start_paused = true)]
async fn stale_run_is_discarded_after_reselect() {
    let service = Arc::new(service_with(
        &config(Duration::from_secs(1), 8),
        Arc::new(MemoryClipboard::new()),
    ));
    let id = service.create_session().await.session_id;
    service.select_endpoint(id, "hello").await.unwrap();

    let runner = Arc::clone(&service);
    let pending = tokio::spawn(async move { runner.run_test(id).await });
    for _ in 0..16 {
        let view = service.view(id).await.unwrap();
        if view.main.tester().is_some_and(|t| t.loading) {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert!(service.view(id).await.unwrap().main.tester().unwrap().loading);

    service.select_endpoint(id, "reverse").await.unwrap();
    let report = pending.await.unwrap().unwrap();

    assert!(!report.applied);
    let tester = report.session.main.tester().unwrap();
    assert_eq!(tester.endpoint.id, "reverse");
    assert!(tester.response.is_none());
    assert!(!tester.loading);
    assert!(service.drain_notifications(id).await.unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn second_run_while_loading_conflicts() {
    let service = Arc::new(service_with(
        &config(Duration::from_secs(1), 8),
        Arc::new(MemoryClipboard::new()),
    ));
    let id = service.create_session().await.session_id;
    service.select_endpoint(id, "reverse").await.unwrap();

    let runner = Arc::clone(&service);
    let pending = tokio::spawn(async move { runner.run_test(id).await });
    for _ in 0..16 {
        let view = service.view(id).await.unwrap();
        if view.main.tester().is_some_and(|t| t.loading) {
            break;
        }
        tokio::task::yield_now().await;
    }

    let err = service.run_test(id).await.unwrap_err();
    assert!(err.is_conflict());

    let report = pending.await.unwrap().unwrap();
    assert!(report.applied);
    assert_eq!(report.outcome.payload()["original"], "");
}

#[tokio::test(start_paused = true)]
async fn abandoned_run_still_finishes() {
    let service = service_with(&config(Duration::from_secs(1), 8), Arc::new(MemoryClipboard::new()));
    let id = service.create_session().await.session_id;
    service.select_endpoint(id, "hello").await.unwrap();

    let timed_out = tokio::time::timeout(Duration::from_millis(100), service.run_test(id)).await;
    assert!(timed_out.is_err());
    tokio::time::sleep(Duration::from_secs(5)).await;

    let view = service.view(id).await.unwrap();
    let tester = view.main.tester().unwrap();
    assert!(!tester.loading);
    assert_eq!(tester.response.as_ref().unwrap()["message"], "Hello, World!");

    let report = service.run_test(id).await.unwrap();
    assert!(report.applied);
}

#[tokio::test(start_paused = true)]
async fn copy_path_raises_flag_then_expires() {
    let clipboard = Arc::new(MemoryClipboard::new());
    let service = service_with(&config(Duration::ZERO, 8), Arc::clone(&clipboard) as Arc<dyn ClipboardSink>);
    let id = service.create_session().await.session_id;
    service.select_endpoint(id, "ytsearch").await.unwrap();

    let report = service.copy(id, CopyTarget::Path).await.unwrap();
    assert!(report.copied);
    assert_eq!(report.text, "/api/ytsearch?q=");
    assert_eq!(clipboard.contents().as_deref(), Some("/api/ytsearch?q="));
    assert!(report.session.main.tester().unwrap().copied);

    tokio::time::advance(Duration::from_millis(2000)).await;
    let view = service.view(id).await.unwrap();
    assert!(!view.main.tester().unwrap().copied);

    let toasts = service.drain_notifications(id).await.unwrap();
    assert_eq!(toasts[0].message, "Copied to clipboard!");
}

#[tokio::test]
async fn copy_response_needs_a_response() {
    let service = instant_service();
    let id = service.create_session().await.session_id;
    service.select_endpoint(id, "hello").await.unwrap();
    assert!(matches!(
        service.copy(id, CopyTarget::Response).await,
        Err(ServiceError::InvalidInput(_))
    ));

    service.run_test(id).await.unwrap();
    let report = service.copy(id, CopyTarget::Response).await.unwrap();
    assert!(report.text.starts_with("{\n  \"message\": \"Hello, World!\""));
}

#[tokio::test]
async fn clipboard_failure_is_reported_not_fatal() {
    let service = service_with(&config(Duration::ZERO, 8), Arc::new(BrokenClipboard));
    let id = service.create_session().await.session_id;
    service.select_endpoint(id, "hello").await.unwrap();

    let report = service.copy(id, CopyTarget::Path).await.unwrap();
    assert!(!report.copied);
    assert!(!report.session.main.tester().unwrap().copied);

    let toasts = service.drain_notifications(id).await.unwrap();
    assert_eq!(toasts[0].kind, NotificationKind::Error);
    assert_eq!(toasts[0].message, "Could not copy to clipboard");
    assert!(service.view(id).await.is_ok());
}

#[tokio::test]
async fn selection_closes_sidebar() {
    let service = instant_service();
    let id = service.create_session().await.session_id;
    assert!(service.set_sidebar_open(id, true).await.unwrap().sidebar_open);
    let view = service.select_endpoint(id, "tikdl").await.unwrap();
    assert!(!view.sidebar_open);
}

#[tokio::test]
async fn simulate_once_reverses_text() {
    let service = instant_service();
    let params = [("text", "héllo")].into_iter().collect();
    let outcome = service.simulate_once("reverse", &params).await;
    assert_eq!(outcome.payload()["reversed"], "olléh");
    assert_eq!(outcome.payload()["length"], 5);
}
