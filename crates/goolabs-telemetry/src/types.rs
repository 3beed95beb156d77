//! Call record types

use chrono::{DateTime, Utc};
use goolabs_core::GoolabsError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a façade call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallOutcome {
    Ok,
    InvalidRequest,
    UnexpectedResponse,
    Transport,
    Config,
}

impl From<&GoolabsError> for CallOutcome {
    fn from(error: &GoolabsError) -> Self {
        match error {
            GoolabsError::InvalidRequest(_) => CallOutcome::InvalidRequest,
            GoolabsError::UnexpectedResponse(_) => CallOutcome::UnexpectedResponse,
            GoolabsError::Transport(_) => CallOutcome::Transport,
            GoolabsError::Config(_) => CallOutcome::Config,
        }
    }
}

/// One finished façade call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRecord {
    pub call_id: String,
    pub method: String,
    pub capability: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub arguments: Value,
    pub outcome: CallOutcome,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub duration_ms: u64,
}

impl CallRecord {
    pub fn is_ok(&self) -> bool {
        self.outcome == CallOutcome::Ok
    }
}

/// Time-derived identifier, unique enough within one process
pub fn new_call_id() -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("call_{nanos:x}")
}
