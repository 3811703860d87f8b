//! Translation of structured errors at the HTTP boundary.

use contracts_model::config::HttpConfig;
use contracts_model::error::CoreResult;
use contracts_model::{ErrorCategory, StructuredError};
use http::StatusCode;

use crate::codec::{ErrorCodec, JsonCodec};
use crate::error::RespondError;
use crate::sink::ResponseSink;
use crate::status::StatusTable;

/// Operation name recorded on errors rebuilt from a peer's response.
pub const DECODE_PEER_OP: &str = "decode_peer_error";

/// ## Summary
/// Turns [`StructuredError`] values into responses and peer responses back
/// into errors.
///
/// Only the resolved category (as a status) and the message leave the
/// process. The operation trail and causes are logged, never written.
#[derive(Debug, Clone, Default)]
pub struct BoundaryTranslator<C = JsonCodec> {
    table: StatusTable,
    codec: C,
}

impl BoundaryTranslator<JsonCodec> {
    /// JSON translator using `table`.
    #[must_use]
    pub fn new(table: StatusTable) -> Self {
        Self::with_codec(table, JsonCodec)
    }

    /// ## Summary
    /// JSON translator built from configuration.
    ///
    /// ## Errors
    /// Returns an error if the configured status table is invalid.
    pub fn from_config(config: &HttpConfig) -> CoreResult<Self> {
        Ok(Self::new(StatusTable::from_config(config)?))
    }
}

impl<C: ErrorCodec> BoundaryTranslator<C> {
    #[must_use]
    pub fn with_codec(table: StatusTable, codec: C) -> Self {
        Self { table, codec }
    }

    #[must_use]
    pub fn table(&self) -> &StatusTable {
        &self.table
    }

    /// Returns the status the boundary answers with for `error`.
    #[must_use]
    pub fn status_for(&self, error: &StructuredError) -> StatusCode {
        self.table.status_for(error.category())
    }

    /// ## Summary
    /// Writes `error` to `sink` as a status plus `{category, message}` body.
    ///
    /// Returns the status written.
    ///
    /// ## Errors
    /// - [`RespondError::Encode`] if the body cannot be encoded. A 500 is
    ///   still written, without a body.
    /// - [`RespondError::Write`] if the sink fails.
    pub fn respond<S>(
        &self,
        error: &StructuredError,
        sink: &mut S,
    ) -> Result<StatusCode, RespondError>
    where
        S: ResponseSink + ?Sized,
    {
        let category = error.category();
        let status = self.table.status_for(category);

        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                category = %category,
                ops = %error.operation_trail(),
                error = %error,
                "Responding with server error"
            );
        } else {
            tracing::debug!(
                status = status.as_u16(),
                category = %category,
                ops = %error.operation_trail(),
                "Responding with client error"
            );
        }

        let body = match self.codec.encode(&error.to_body()) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode error body");
                sink.write_response(StatusCode::INTERNAL_SERVER_ERROR, None, &[])?;
                return Err(RespondError::Encode(e));
            }
        };

        sink.write_response(status, Some(self.codec.content_type()), &body)?;
        Ok(status)
    }

    /// ## Summary
    /// Rebuilds an error from the body of a peer's error response.
    ///
    /// Never fails: a body that cannot be decoded, or that breaks the error
    /// contract, yields a new `ServerError` describing the problem.
    #[must_use]
    pub fn decode_peer_error(&self, bytes: &[u8]) -> StructuredError {
        let body = match self.codec.decode(bytes) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    len = bytes.len(),
                    "Failed to decode peer error payload"
                );
                return StructuredError::new(
                    ErrorCategory::ServerError,
                    format!("failed to decode peer error payload: {e}"),
                    None,
                )
                .with_ops([DECODE_PEER_OP]);
            }
        };

        if let Err(e) = body.validate() {
            tracing::warn!(
                error = %e,
                category = %body.category,
                "Peer error payload violates contract"
            );
            return StructuredError::new(
                ErrorCategory::ServerError,
                format!("invalid peer error payload: {e}"),
                None,
            )
            .with_ops([DECODE_PEER_OP]);
        }

        StructuredError::from(body).with_ops([DECODE_PEER_OP])
    }
}

#[cfg(test)]
mod tests;
