//! Endpoint Detail & Tester state.
//!
//! One `TesterState` exists per selection. Selecting an endpoint (even the same
//! one again) builds a fresh tester with a new generation, so results of runs
//! issued against an older tester are recognisably stale.

use frn_console_core::{BadgeTone, Endpoint, ParamValues, pretty_json};
use serde::Serialize;
use serde_json::Value;
use tokio::time::Instant;

/// Identifies one simulated run and the tester it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    pub endpoint_id: String,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct TesterState {
    endpoint: Endpoint,
    generation: u64,
    params: ParamValues,
    response: Option<Value>,
    loading: bool,
    copied_until: Option<Instant>,
}

impl TesterState {
    #[must_use]
    pub fn new(endpoint: Endpoint, generation: u64) -> Self {
        Self {
            endpoint,
            generation,
            params: ParamValues::new(),
            response: None,
            loading: false,
            copied_until: None,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn params(&self) -> &ParamValues {
        &self.params
    }

    #[must_use]
    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.set(name, value);
    }

    pub fn replace_params(&mut self, params: ParamValues) {
        self.params = params;
    }

    /// Marks the tester busy and hands out a ticket; `None` while a run is pending.
    pub fn begin_run(&mut self) -> Option<RunTicket> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(self.ticket())
    }

    /// Stores the payload if `ticket` belongs to this tester. Returns whether it was applied.
    pub fn finish_run(&mut self, ticket: &RunTicket, payload: Value) -> bool {
        if !self.owns(ticket) {
            return false;
        }
        self.response = Some(payload);
        self.loading = false;
        true
    }

    #[must_use]
    pub fn owns(&self, ticket: &RunTicket) -> bool {
        ticket.generation == self.generation && ticket.endpoint_id == self.endpoint.id
    }

    #[must_use]
    pub fn ticket(&self) -> RunTicket {
        RunTicket { endpoint_id: self.endpoint.id.clone(), generation: self.generation }
    }

    pub fn mark_copied(&mut self, until: Instant) {
        self.copied_until = Some(until);
    }

    #[must_use]
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    /// Required parameters that are absent or empty; shown as hints, never enforced.
    #[must_use]
    pub fn missing_required(&self) -> Vec<String> {
        self.endpoint
            .required_parameters()
            .filter(|name| self.params.get_non_empty(name).is_none())
            .map(str::to_owned)
            .collect()
    }

    #[must_use]
    pub fn view(&self, now: Instant) -> TesterView {
        let response_pretty = self.response.as_ref().and_then(|payload| {
            pretty_json(payload)
                .map_err(|e| tracing::warn!(error = %e, "failed to render response"))
                .ok()
        });
        TesterView {
            endpoint: self.endpoint.clone(),
            method: self.endpoint.method.as_str().to_owned(),
            tone: self.endpoint.method.tone(),
            params: self.params.clone(),
            missing_required: self.missing_required(),
            loading: self.loading,
            response: self.response.clone(),
            response_pretty,
            copied: self.is_copied(now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TesterView {
    pub endpoint: Endpoint,
    pub method: String,
    pub tone: BadgeTone,
    pub params: ParamValues,
    pub missing_required: Vec<String>,
    pub loading: bool,
    pub response: Option<Value>,
    pub response_pretty: Option<String>,
    pub copied: bool,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use frn_console_core::Catalog;
    use serde_json::json;

    use super::*;

    fn lyrics_tester(generation: u64) -> TesterState {
        let endpoint = Catalog::builtin().get("lyrics").cloned().unwrap();
        TesterState::new(endpoint, generation)
    }

    #[test]
    fn second_begin_is_rejected_while_loading() {
        let mut tester = lyrics_tester(1);
        let ticket = tester.begin_run().unwrap();
        assert!(tester.is_loading());
        assert!(tester.begin_run().is_none());
        assert!(tester.finish_run(&ticket, json!({"ok": true})));
        assert!(!tester.is_loading());
        assert!(tester.begin_run().is_some());
    }

    #[test]
    fn foreign_ticket_is_ignored() {
        let mut tester = lyrics_tester(2);
        tester.begin_run().unwrap();
        let stale = RunTicket { endpoint_id: "lyrics".to_owned(), generation: 1 };
        assert!(!tester.finish_run(&stale, json!({"stale": true})));
        assert!(tester.response().is_none());
        assert!(tester.is_loading());
    }

    #[test]
    fn missing_required_lists_empty_required_params() {
        let mut tester = lyrics_tester(1);
        assert_eq!(tester.missing_required(), vec!["title".to_owned()]);
        tester.set_param("title", "");
        assert_eq!(tester.missing_required(), vec!["title".to_owned()]);
        tester.set_param("title", "Numb");
        assert!(tester.missing_required().is_empty());
    }

    #[test]
    fn copied_flag_expires() {
        let mut tester = lyrics_tester(1);
        let now = Instant::now();
        assert!(!tester.is_copied(now));
        tester.mark_copied(now + Duration::from_secs(2));
        assert!(tester.is_copied(now + Duration::from_secs(1)));
        assert!(!tester.is_copied(now + Duration::from_secs(2)));
    }

    #[test]
    fn view_renders_pretty_response() {
        let mut tester = lyrics_tester(1);
        let ticket = tester.begin_run().unwrap();
        tester.finish_run(&ticket, json!({"status": "success"}));
        let view = tester.view(Instant::now());
        assert_eq!(view.method, "GET");
        assert_eq!(view.tone, BadgeTone::Success);
        assert_eq!(view.response_pretty.as_deref(), Some("{\n  \"status\": \"success\"\n}"));
    }
}
