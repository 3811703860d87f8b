//! The serialized error record exchanged between services.

use serde::{Deserialize, Serialize};

use super::category::ErrorCategory;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Wire shape of an error: `{"category": ..., "message": ...}`.
///
/// Unknown fields are ignored and a missing category reads as `Unknown`,
/// so payloads from older or newer peers still decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub category: ErrorCategory,
    pub message: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    /// ## Summary
    /// Checks the record against the contract every producer must honor.
    ///
    /// ## Errors
    /// Returns [`CoreError::ContractInvalid`] if the message is blank.
    pub fn validate(&self) -> CoreResult<()> {
        if self.message.trim().is_empty() {
            return Err(CoreError::ContractInvalid(
                "error message must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
