//! Session registry and the actions a console page performs on its session.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use frn_console_core::{
    COPIED_TOAST, COPY_FAILED_TOAST, Catalog, ClipboardSink, ConsoleConfig, Notification,
    NotificationKind, ParamValues, pretty_json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

use crate::ServiceError;
use crate::notifier::BroadcastNotifier;
use crate::shell::{ConsoleSession, SessionView};
use crate::simulator::{SimulationOutcome, Simulator};

type SessionMap = RwLock<HashMap<Uuid, ConsoleSession>>;

/// What a copy action puts on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyTarget {
    /// The endpoint's URL template.
    Path,
    /// The last response, pretty-printed.
    Response,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub endpoint_id: String,
    /// False when the user selected another endpoint before the run resolved.
    pub applied: bool,
    pub outcome: SimulationOutcome,
    pub session: SessionView,
}

#[derive(Debug, Clone, Serialize)]
pub struct CopyReport {
    pub copied: bool,
    pub text: String,
    pub session: SessionView,
}

/// Owns every live console session and mediates all state changes.
///
/// The session map lock is never held across the simulated latency or a
/// clipboard write.
pub struct SessionService {
    catalog: Arc<Catalog>,
    simulator: Arc<Simulator>,
    notifier: Arc<BroadcastNotifier>,
    clipboard: Arc<dyn ClipboardSink>,
    sessions: Arc<SessionMap>,
    copied_flash: Duration,
    max_sessions: usize,
}

impl SessionService {
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        simulator: Arc<Simulator>,
        notifier: Arc<BroadcastNotifier>,
        clipboard: Arc<dyn ClipboardSink>,
        config: &ConsoleConfig,
    ) -> Self {
        Self {
            catalog,
            simulator,
            notifier,
            clipboard,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            copied_flash: config.copied_flash,
            max_sessions: config.max_sessions.max(1),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn create_session(&self) -> SessionView {
        let id = Uuid::new_v4();
        let session = ConsoleSession::new(id, &self.catalog);
        let view = session.view(&self.catalog, Instant::now());

        let mut sessions = self.sessions.write().await;
        while sessions.len() >= self.max_sessions {
            let Some(oldest) =
                sessions.values().min_by_key(|s| s.last_seen()).map(ConsoleSession::id)
            else {
                break;
            };
            sessions.remove(&oldest);
            tracing::info!(session_id = %oldest, "evicted least recently used session");
        }
        sessions.insert(id, session);
        tracing::debug!(session_id = %id, live = sessions.len(), "session created");
        view
    }

    pub async fn delete_session(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            tracing::debug!(session_id = %id, "session deleted");
        }
        removed
    }

    pub async fn view(&self, id: Uuid) -> Result<SessionView, ServiceError> {
        self.update(id, |_, _| Ok(())).await
    }

    pub async fn set_search_query(
        &self,
        id: Uuid,
        text: String,
    ) -> Result<SessionView, ServiceError> {
        self.update(id, |session, _| {
            session.browser_mut().set_search_query(text);
            Ok(())
        })
        .await
    }

    pub async fn toggle_category(&self, id: Uuid, name: &str) -> Result<SessionView, ServiceError> {
        self.update(id, |session, _| {
            session.browser_mut().toggle_category(name);
            Ok(())
        })
        .await
    }

    pub async fn select_endpoint(
        &self,
        id: Uuid,
        endpoint_id: &str,
    ) -> Result<SessionView, ServiceError> {
        self.update(id, |session, catalog| session.select(catalog, endpoint_id)).await
    }

    pub async fn set_sidebar_open(&self, id: Uuid, open: bool) -> Result<SessionView, ServiceError> {
        self.update(id, |session, _| {
            session.set_sidebar_open(open);
            Ok(())
        })
        .await
    }

    pub async fn set_params(
        &self,
        id: Uuid,
        params: ParamValues,
    ) -> Result<SessionView, ServiceError> {
        self.update(id, |session, _| session.set_params(params)).await
    }

    /// Runs the simulated request for the session's current endpoint.
    ///
    /// If the user selects another endpoint while the run is pending, the
    /// result is discarded rather than shown on the new endpoint. The run
    /// completes even if the caller stops waiting, so the tester never stays
    /// stuck in the loading state.
    pub async fn run_test(&self, id: Uuid) -> Result<RunReport, ServiceError> {
        let (ticket, params) = self.with_session(id, |session, _| session.begin_run()).await?;
        tracing::info!(session_id = %id, endpoint_id = %ticket.endpoint_id, "running simulated request");

        let sessions = Arc::clone(&self.sessions);
        let catalog = Arc::clone(&self.catalog);
        let simulator = Arc::clone(&self.simulator);
        let notifier = Arc::clone(&self.notifier);

        // Detached so a dropped caller still clears the loading flag.
        let task = tokio::spawn(async move {
            let outcome = simulator.simulate(&ticket.endpoint_id, &params).await;
            let (applied, session) = with_entry(&sessions, &catalog, id, |session, catalog| {
                let applied = session.finish_run(&ticket, outcome.payload().clone());
                if applied {
                    let toast = outcome.notification();
                    notifier.publish(Some(id), &toast);
                    session.push_notification(toast);
                } else {
                    tracing::debug!(
                        session_id = %id,
                        endpoint_id = %ticket.endpoint_id,
                        "discarding stale simulated response"
                    );
                }
                Ok((applied, session.view(catalog, Instant::now())))
            })
            .await?;
            Ok::<_, ServiceError>(RunReport {
                endpoint_id: ticket.endpoint_id,
                applied,
                outcome,
                session,
            })
        });

        task.await?
    }

    /// Copies the endpoint path or the last response to the clipboard.
    ///
    /// Clipboard failures are logged and reported with an error toast; the
    /// session stays usable.
    pub async fn copy(&self, id: Uuid, target: CopyTarget) -> Result<CopyReport, ServiceError> {
        let (text, ticket) = self
            .with_session(id, |session, _| {
                let tester = session.tester().ok_or(ServiceError::NoEndpointSelected)?;
                let text = match target {
                    CopyTarget::Path => tester.endpoint().path.clone(),
                    CopyTarget::Response => {
                        let payload = tester.response().ok_or_else(|| {
                            ServiceError::InvalidInput("no response to copy yet".to_owned())
                        })?;
                        pretty_json(payload)?
                    },
                };
                Ok((text, tester.ticket()))
            })
            .await?;

        let written = self.clipboard.write_text(&text).await;

        let notifier = Arc::clone(&self.notifier);
        let flash = self.copied_flash;
        let (copied, session) = self
            .with_session(id, |session, catalog| {
                let now = Instant::now();
                let toast = match &written {
                    Ok(()) => {
                        if let Ok(tester) = session.tester_mut() {
                            if tester.owns(&ticket) {
                                tester.mark_copied(now + flash);
                            }
                        }
                        Notification::new(NotificationKind::Success, COPIED_TOAST)
                    },
                    Err(e) => {
                        tracing::warn!(session_id = %id, error = %e, "clipboard write failed");
                        Notification::new(NotificationKind::Error, COPY_FAILED_TOAST)
                    },
                };
                notifier.publish(Some(id), &toast);
                session.push_notification(toast);
                Ok((written.is_ok(), session.view(catalog, now)))
            })
            .await?;

        Ok(CopyReport { copied, text, session })
    }

    pub async fn drain_notifications(&self, id: Uuid) -> Result<Vec<Notification>, ServiceError> {
        self.with_session(id, |session, _| Ok(session.drain_notifications())).await
    }

    /// Runs one request outside any session (API and CLI use).
    pub async fn simulate_once(&self, endpoint_id: &str, params: &ParamValues) -> SimulationOutcome {
        let outcome = self.simulator.simulate(endpoint_id, params).await;
        self.notifier.publish(None, &outcome.notification());
        outcome
    }

    async fn with_session<T, F>(&self, id: Uuid, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut ConsoleSession, &Catalog) -> Result<T, ServiceError>,
    {
        with_entry(&self.sessions, &self.catalog, id, f).await
    }

    async fn update<F>(&self, id: Uuid, f: F) -> Result<SessionView, ServiceError>
    where
        F: FnOnce(&mut ConsoleSession, &Catalog) -> Result<(), ServiceError>,
    {
        self.with_session(id, |session, catalog| {
            f(session, catalog)?;
            Ok(session.view(catalog, Instant::now()))
        })
        .await
    }
}

async fn with_entry<T, F>(
    sessions: &SessionMap,
    catalog: &Catalog,
    id: Uuid,
    f: F,
) -> Result<T, ServiceError>
where
    F: FnOnce(&mut ConsoleSession, &Catalog) -> Result<T, ServiceError>,
{
    let mut sessions = sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(ServiceError::SessionNotFound(id))?;
    session.touch(Instant::now());
    f(session, catalog)
}

#[cfg(test)]
mod session_service_tests;
