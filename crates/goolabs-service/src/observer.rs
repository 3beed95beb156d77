//! Observers notified around every façade call

use goolabs_client::Capability;
use goolabs_core::{GoolabsError, LoggingConfig};
use goolabs_telemetry::{append_jsonl, CallOutcome, CallRecord, Paths};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// What an observer learns about a call in progress
#[derive(Debug, Clone, Copy)]
pub struct CallContext<'a> {
    pub call_id: &'a str,
    pub method: &'static str,
    pub capability: Capability,
    pub arguments: &'a Value,
}

/// Hooks run by the façade; the defaults do nothing
pub trait CallObserver: Send + Sync {
    /// Observer name (unique identifier)
    fn name(&self) -> &str;

    /// Disabled observers are never registered
    fn is_enabled(&self) -> bool {
        true
    }

    fn on_call_start(&self, _call: &CallContext<'_>) {}

    /// `result` is the returned record serialized to JSON
    fn on_call_success(&self, _call: &CallContext<'_>, _result: &Value, _elapsed: Duration) {}

    fn on_call_failure(&self, _call: &CallContext<'_>, _error: &GoolabsError, _elapsed: Duration) {}
}

/// Emits one debug event per hook, with the full result payload
#[derive(Debug, Default)]
pub struct TracingObserver;

impl CallObserver for TracingObserver {
    fn name(&self) -> &str {
        "tracing"
    }

    fn on_call_start(&self, call: &CallContext<'_>) {
        debug!(
            call_id = call.call_id,
            capability = %call.capability,
            arguments = %call.arguments,
            "{} started",
            call.method
        );
    }

    fn on_call_success(&self, call: &CallContext<'_>, result: &Value, elapsed: Duration) {
        debug!(
            call_id = call.call_id,
            elapsed_ms = elapsed.as_millis() as u64,
            result = %result,
            "{} returned",
            call.method
        );
    }

    fn on_call_failure(&self, call: &CallContext<'_>, error: &GoolabsError, elapsed: Duration) {
        debug!(
            call_id = call.call_id,
            elapsed_ms = elapsed.as_millis() as u64,
            kind = error.kind(),
            "{} raised {error}",
            call.method
        );
    }
}

/// Appends one [`CallRecord`] per finished call to a JSONL file
#[derive(Debug, Clone)]
pub struct JsonlObserver {
    path: PathBuf,
    enabled: bool,
}

impl JsonlObserver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            enabled: true,
        }
    }

    /// The shared call log, kept only while logging is switched on
    pub fn from_config(paths: &Paths, logging: &LoggingConfig) -> Self {
        Self {
            path: paths.calls_file(),
            enabled: logging.enabled,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(&self, call: &CallContext<'_>, error: Option<&GoolabsError>, elapsed: Duration) {
        let record = CallRecord {
            call_id: call.call_id.to_string(),
            method: call.method.to_string(),
            capability: call.capability.to_string(),
            timestamp: chrono::Utc::now(),
            arguments: call.arguments.clone(),
            outcome: error.map_or(CallOutcome::Ok, CallOutcome::from),
            error: error.map(ToString::to_string),
            duration_ms: elapsed.as_millis() as u64,
        };
        // A broken log never fails the call it describes
        if let Err(e) = append_jsonl(&self.path, &record) {
            warn!(path = %self.path.display(), "could not append call record: {e}");
        }
    }
}

impl CallObserver for JsonlObserver {
    fn name(&self) -> &str {
        "jsonl"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn on_call_success(&self, call: &CallContext<'_>, _result: &Value, elapsed: Duration) {
        self.record(call, None, elapsed);
    }

    fn on_call_failure(&self, call: &CallContext<'_>, error: &GoolabsError, elapsed: Duration) {
        self.record(call, Some(error), elapsed);
    }
}
