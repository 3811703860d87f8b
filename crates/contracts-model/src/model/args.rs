//! Argument-list construction of [`StructuredError`].

use super::category::ErrorCategory;
use super::structured::StructuredError;
use crate::error::{CoreError, CoreResult};

/// One argument to [`StructuredError::from_args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorArg {
    /// Appended to the operation trail.
    Operation(String),
    /// Sets the category. The last one wins.
    Category(ErrorCategory),
    /// Sets the message. The last one wins.
    Message(String),
    /// Sets the wrapped cause. At most one is allowed.
    Cause(StructuredError),
}

impl ErrorArg {
    #[must_use]
    pub fn op(name: impl Into<String>) -> Self {
        Self::Operation(name.into())
    }

    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

impl From<ErrorCategory> for ErrorArg {
    fn from(category: ErrorCategory) -> Self {
        Self::Category(category)
    }
}

impl From<StructuredError> for ErrorArg {
    fn from(cause: StructuredError) -> Self {
        Self::Cause(cause)
    }
}

impl StructuredError {
    /// ## Summary
    /// Builds an error from a list of tagged arguments.
    ///
    /// The category defaults to `Unknown`. Without a `Message` argument the
    /// cause's message is reused, so `[op, cause]` re-raises a lower-level
    /// error under a new operation name.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidArgument`] if more than one cause is
    /// given, or if neither a message nor a cause is given.
    pub fn from_args<I>(args: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = ErrorArg>,
    {
        let mut category = ErrorCategory::Unknown;
        let mut message = None;
        let mut ops = Vec::new();
        let mut cause: Option<StructuredError> = None;

        for arg in args {
            match arg {
                ErrorArg::Operation(name) => ops.push(name),
                ErrorArg::Category(value) => category = value,
                ErrorArg::Message(value) => message = Some(value),
                ErrorArg::Cause(value) => {
                    if cause.is_some() {
                        return Err(CoreError::InvalidArgument(
                            "an error can wrap at most one cause".to_string(),
                        ));
                    }
                    cause = Some(value);
                }
            }
        }

        let message = match (message, &cause) {
            (Some(message), _) => message,
            (None, Some(cause)) => cause.message().to_string(),
            (None, None) => {
                return Err(CoreError::InvalidArgument(
                    "either a message or a cause is required".to_string(),
                ));
            }
        };

        Ok(Self::new(category, message, cause).with_ops(ops))
    }
}
