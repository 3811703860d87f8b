use thiserror::Error;

/// Errors raised by the contracts library itself, as opposed to the
/// [`StructuredError`](crate::model::StructuredError) values it models.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A model value failed validation.
    #[error("Contract invalid: {0}")]
    ContractInvalid(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
