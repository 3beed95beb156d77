//! Call records and their JSONL log

mod io;
mod paths;
mod types;

pub use io::{append_jsonl, read_jsonl};
pub use paths::{Paths, HOME_VAR};
pub use types::{new_call_id, CallOutcome, CallRecord};
