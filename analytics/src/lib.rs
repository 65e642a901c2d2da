//! Telemetry collaborator.
//!
//! Fire-and-forget event recording: `record` never blocks, never fails
//! and never reaches back into the caller. When no sink is wired up the
//! no-op implementation silently drops everything, so instrumented code
//! paths need no feature gating.

use serde_json::{json, Value};

/// Event recorder contract. Implementations must be cheap and
/// infallible; a lost event is acceptable, a blocked caller is not.
pub trait Analytics: Send + Sync {
    fn record(&self, event: &str, params: Value);

    /// Virtual page view for client-side navigation.
    fn page_view(&self, path: &str) {
        self.record("page_view", json!({ "page_path": path }));
    }

    fn login(&self, method: &str) {
        self.record("login", json!({ "method": method }));
    }

    fn sign_up(&self, method: &str) {
        self.record("sign_up", json!({ "method": method }));
    }

    fn button_click(&self, button_name: &str, screen_name: &str) {
        self.record(
            "button_click",
            json!({ "button_name": button_name, "screen_name": screen_name }),
        );
    }

    fn feature_opened(&self, feature_name: &str) {
        self.record("feature_opened", json!({ "feature_name": feature_name }));
    }

    /// `status` is "success" or "failure".
    fn form_submitted(&self, form_name: &str, status: &str) {
        self.record(
            "form_submitted",
            json!({ "form_name": form_name, "status": status }),
        );
    }

    fn error_occurred(&self, error_type: &str, screen_name: &str) {
        self.record(
            "error_occurred",
            json!({ "error_type": error_type, "screen_name": screen_name }),
        );
    }
}

/// Sink that writes events to the process log.
pub struct LogSink;

impl Analytics for LogSink {
    fn record(&self, event: &str, params: Value) {
        log::info!(target: "analytics", "Event: {} {}", event, params);
    }
}

/// Sink for when telemetry is unavailable: drops everything.
pub struct NoopSink;

impl Analytics for NoopSink {
    fn record(&self, _event: &str, _params: Value) {}
}
