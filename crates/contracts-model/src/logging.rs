//! Shared tracing setup for services built on these contracts.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Directive used when the configured level cannot be parsed.
pub const FALLBACK_LEVEL: &str = "info";

/// ## Summary
/// Builds the filter for `level`, falling back to [`FALLBACK_LEVEL`] when
/// the directive is invalid.
#[must_use]
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        tracing::warn!(level = %level, error = %e, "Invalid log level in config, using fallback");
        EnvFilter::new(FALLBACK_LEVEL)
    })
}

/// ## Summary
/// Installs a global fmt subscriber filtered by `config.level`.
///
/// ## Errors
/// Returns an error if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn valid_level_is_kept() {
        let filter = env_filter("debug").to_string();
        assert_eq!(filter, EnvFilter::new("debug").to_string());
        assert_ne!(filter, EnvFilter::new(FALLBACK_LEVEL).to_string());
    }

    #[test]
    fn init_twice_reports_existing_subscriber() {
        let config = LoggingConfig {
            level: "debug".to_string(),
        };

        // Another test may already own the global subscriber.
        drop(init(&config));

        assert!(init(&config).is_err());
    }

    #[test_log::test]
    fn invalid_level_falls_back() {
        assert_eq!(
            env_filter("app=verbose").to_string(),
            EnvFilter::new(FALLBACK_LEVEL).to_string()
        );
    }
}
