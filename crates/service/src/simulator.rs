//! Simulated request execution: mock rules behind an artificial latency.

use std::time::Duration;

use chrono::Utc;
use frn_console_core::{
    MockRequest, MockRules, Notification, NotificationKind, ParamValues, REQUEST_FAILED_TOAST,
    REQUEST_SUCCEEDED_TOAST, failure_payload,
};
use serde::Serialize;
use serde_json::Value;

/// Result of one simulated request. Failures still carry a displayable payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "payload", rename_all = "snake_case")]
pub enum SimulationOutcome {
    Success(Value),
    Failure(Value),
}

impl SimulationOutcome {
    #[must_use]
    pub fn payload(&self) -> &Value {
        match *self {
            Self::Success(ref payload) | Self::Failure(ref payload) => payload,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Toast matching this outcome.
    #[must_use]
    pub fn notification(&self) -> Notification {
        if self.is_success() {
            Notification::new(NotificationKind::Success, REQUEST_SUCCEEDED_TOAST)
        } else {
            Notification::new(NotificationKind::Error, REQUEST_FAILED_TOAST)
        }
    }
}

#[derive(Debug, Clone)]
pub struct Simulator {
    rules: MockRules,
    latency: Duration,
}

impl Simulator {
    #[must_use]
    pub const fn new(rules: MockRules, latency: Duration) -> Self {
        Self { rules, latency }
    }

    /// Waits out the artificial latency, then fabricates the response.
    ///
    /// The wait is a timer, so the runtime keeps serving other requests meanwhile.
    pub async fn simulate(&self, endpoint_id: &str, params: &ParamValues) -> SimulationOutcome {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.generate(endpoint_id, params)
    }

    /// Fabricates the response immediately. Generation errors become the failure payload.
    #[must_use]
    pub fn generate(&self, endpoint_id: &str, params: &ParamValues) -> SimulationOutcome {
        let request = MockRequest { endpoint_id, params, now: Utc::now() };
        match self.rules.generate(&request) {
            Ok(payload) => {
                tracing::debug!(endpoint_id, "simulated request succeeded");
                SimulationOutcome::Success(payload)
            },
            Err(e) => {
                tracing::warn!(endpoint_id, error = %e, "simulated request failed");
                SimulationOutcome::Failure(failure_payload())
            },
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(
            MockRules::builtin(),
            Duration::from_millis(frn_console_core::DEFAULT_LATENCY_MS),
        )
    }
}
