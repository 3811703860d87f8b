//! Category to HTTP status lookup.

use std::collections::HashMap;

use contracts_model::ErrorCategory;
use contracts_model::config::HttpConfig;
use contracts_model::error::{CoreError, CoreResult};
use http::StatusCode;

/// ## Summary
/// Immutable mapping from error category to HTTP status.
///
/// Lookups are total: any category without an entry, `Unknown` and
/// unrecognised labels included, gets the fallback status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTable {
    entries: HashMap<ErrorCategory, StatusCode>,
    fallback: StatusCode,
}

impl StatusTable {
    /// The table every service uses unless configured otherwise.
    #[must_use]
    pub fn standard() -> Self {
        let entries = HashMap::from([
            (ErrorCategory::Database, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorCategory::ServerError, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorCategory::Communication, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorCategory::NotFound, StatusCode::NOT_FOUND),
            (ErrorCategory::InvalidState, StatusCode::CONFLICT),
            (ErrorCategory::LimitExceeded, StatusCode::PAYLOAD_TOO_LARGE),
        ]);

        Self {
            entries,
            fallback: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// An empty table: every category maps to `fallback`.
    #[must_use]
    pub fn empty(fallback: StatusCode) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    /// ## Summary
    /// Builds the standard table with the configured fallback and overrides
    /// applied.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidConfiguration`] if the fallback is not a
    /// 5xx status, or if an override is not a 4xx or 5xx status.
    pub fn from_config(config: &HttpConfig) -> CoreResult<Self> {
        let fallback = parse_status(config.fallback_status)?;
        if !fallback.is_server_error() {
            return Err(CoreError::InvalidConfiguration(format!(
                "fallback status must be 5xx, got {fallback}"
            )));
        }

        let mut table = Self::standard().with_fallback(fallback);

        for entry in &config.status_overrides {
            let status = parse_status(entry.status)?;
            if !status.is_client_error() && !status.is_server_error() {
                return Err(CoreError::InvalidConfiguration(format!(
                    "status for category {} must be 4xx or 5xx, got {status}",
                    entry.category
                )));
            }
            table = table.with_mapping(ErrorCategory::from_label(&entry.category), status);
        }

        Ok(table)
    }

    #[must_use]
    pub fn with_mapping(mut self, category: ErrorCategory, status: StatusCode) -> Self {
        self.entries.insert(category, status);
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: StatusCode) -> Self {
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub fn fallback(&self) -> StatusCode {
        self.fallback
    }

    /// Returns the status for `category`.
    ///
    /// An `Other` label that names a known category is looked up as that
    /// category.
    #[must_use]
    pub fn status_for(&self, category: &ErrorCategory) -> StatusCode {
        let normalized;
        let key = if let ErrorCategory::Other(label) = category {
            normalized = ErrorCategory::from_label(label);
            &normalized
        } else {
            category
        };

        self.entries.get(key).copied().unwrap_or(self.fallback)
    }

    /// Returns the status for a raw category label.
    #[must_use]
    pub fn status_for_label(&self, label: &str) -> StatusCode {
        self.status_for(&ErrorCategory::from_label(label))
    }
}

impl Default for StatusTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn parse_status(code: u16) -> CoreResult<StatusCode> {
    StatusCode::from_u16(code).map_err(|e| {
        CoreError::InvalidConfiguration(format!("invalid HTTP status {code}: {e}"))
    })
}
