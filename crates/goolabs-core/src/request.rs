//! Checks on caller arguments that run before any encoding

use crate::error::{GoolabsError, Result};

/// Every argument without a default must be a non-empty string
pub fn require_text(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(GoolabsError::invalid_request(format!(
            "parameter '{name}' must be a non-empty string"
        )));
    }
    Ok(())
}

/// [`require_text`] over `(name, value)` pairs, in order
pub fn require_texts(arguments: &[(&str, &str)]) -> Result<()> {
    arguments
        .iter()
        .try_for_each(|(name, value)| require_text(name, value))
}
