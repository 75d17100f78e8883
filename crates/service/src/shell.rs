//! Shell: composes the sidebar with either the dashboard or the tester.
//!
//! A `ConsoleSession` is the whole state of one open console. It starts on the
//! dashboard; any selection switches to the tester for that endpoint, and a
//! later selection replaces the tester wholesale.

use std::collections::VecDeque;

use frn_console_core::{Catalog, DashboardStats, Notification, ParamValues};
use serde::Serialize;
use tokio::time::Instant;
use uuid::Uuid;

use crate::ServiceError;
use crate::browser::{BrowserState, SidebarView};
use crate::tester::{RunTicket, TesterState, TesterView};

/// Upper bound on queued toasts per session; oldest are dropped first.
const MAX_PENDING_NOTIFICATIONS: usize = 32;

#[derive(Debug, Clone)]
pub struct ConsoleSession {
    id: Uuid,
    browser: BrowserState,
    tester: Option<TesterState>,
    sidebar_open: bool,
    generation: u64,
    notifications: VecDeque<Notification>,
    last_seen: Instant,
}

impl ConsoleSession {
    #[must_use]
    pub fn new(id: Uuid, catalog: &Catalog) -> Self {
        Self {
            id,
            browser: BrowserState::new(catalog),
            tester: None,
            sidebar_open: false,
            generation: 0,
            notifications: VecDeque::new(),
            last_seen: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn browser(&self) -> &BrowserState {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut BrowserState {
        &mut self.browser
    }

    #[must_use]
    pub fn tester(&self) -> Option<&TesterState> {
        self.tester.as_ref()
    }

    /// The tester, or `NoEndpointSelected` while the dashboard is shown.
    pub fn tester_mut(&mut self) -> Result<&mut TesterState, ServiceError> {
        self.tester.as_mut().ok_or(ServiceError::NoEndpointSelected)
    }

    #[must_use]
    pub fn selected_endpoint(&self) -> Option<&str> {
        self.tester.as_ref().map(|t| t.endpoint().id.as_str())
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    #[must_use]
    pub fn last_seen(&self) -> Instant {
        self.last_seen
    }

    pub fn touch(&mut self, now: Instant) {
        self.last_seen = now;
    }

    /// Switches to the tester for `endpoint_id` with fresh form state and
    /// collapses the compact sidebar. Unknown ids leave the session untouched.
    pub fn select(&mut self, catalog: &Catalog, endpoint_id: &str) -> Result<(), ServiceError> {
        let endpoint = catalog
            .get(endpoint_id)
            .cloned()
            .ok_or_else(|| ServiceError::UnknownEndpoint(endpoint_id.to_owned()))?;
        self.generation += 1;
        if let Some(previous) = self.tester.as_ref().filter(|t| t.is_loading()) {
            tracing::debug!(
                session_id = %self.id,
                endpoint_id = %previous.endpoint().id,
                "selection replaced a tester with a pending run"
            );
        }
        self.tester = Some(TesterState::new(endpoint, self.generation));
        self.sidebar_open = false;
        Ok(())
    }

    pub fn set_params(&mut self, params: ParamValues) -> Result<(), ServiceError> {
        self.tester_mut()?.replace_params(params);
        Ok(())
    }

    /// Starts a run on the current tester; returns its ticket and a snapshot of the form.
    pub fn begin_run(&mut self) -> Result<(RunTicket, ParamValues), ServiceError> {
        let tester = self.tester_mut()?;
        let ticket = tester
            .begin_run()
            .ok_or_else(|| ServiceError::RequestInFlight(tester.endpoint().id.clone()))?;
        Ok((ticket, tester.params().clone()))
    }

    /// Applies a finished run if its tester is still the current one.
    pub fn finish_run(&mut self, ticket: &RunTicket, payload: serde_json::Value) -> bool {
        self.tester.as_mut().is_some_and(|tester| tester.finish_run(ticket, payload))
    }

    pub fn push_notification(&mut self, notification: Notification) {
        if self.notifications.len() == MAX_PENDING_NOTIFICATIONS {
            self.notifications.pop_front();
        }
        self.notifications.push_back(notification);
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }

    #[must_use]
    pub fn view(&self, catalog: &Catalog, now: Instant) -> SessionView {
        let main = match self.tester {
            Some(ref tester) => MainView::Tester(Box::new(tester.view(now))),
            None => MainView::Dashboard(Box::new(DashboardStats::from_catalog(catalog))),
        };
        SessionView {
            session_id: self.id,
            sidebar_open: self.sidebar_open,
            sidebar: self.browser.view(catalog, self.selected_endpoint()),
            main,
            pending_notifications: self.notifications.len(),
        }
    }
}

/// Snapshot of one session for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub sidebar_open: bool,
    pub sidebar: SidebarView,
    pub main: MainView,
    pub pending_notifications: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "snake_case")]
pub enum MainView {
    Dashboard(Box<DashboardStats>),
    Tester(Box<TesterView>),
}

impl MainView {
    #[must_use]
    pub fn is_dashboard(&self) -> bool {
        matches!(self, Self::Dashboard(_))
    }

    #[must_use]
    pub fn tester(&self) -> Option<&TesterView> {
        match *self {
            Self::Tester(ref view) => Some(&**view),
            Self::Dashboard(_) => None,
        }
    }
}
