//! Error body codecs.

use contracts_model::ErrorBody;

use crate::error::{CodecError, CodecResult};

/// Serializer collaborator used at the boundary.
pub trait ErrorCodec {
    /// Media type written alongside encoded bodies.
    fn content_type(&self) -> &'static str;

    /// ## Errors
    /// Returns [`CodecError::Encode`] if `body` cannot be encoded.
    fn encode(&self, body: &ErrorBody) -> CodecResult<Vec<u8>>;

    /// ## Errors
    /// Returns [`CodecError::Decode`] if `bytes` is not an encoded error body.
    fn decode(&self, bytes: &[u8]) -> CodecResult<ErrorBody>;
}

/// JSON codec backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl ErrorCodec for JsonCodec {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode(&self, body: &ErrorBody) -> CodecResult<Vec<u8>> {
        serde_json::to_vec(body).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<ErrorBody> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use contracts_model::ErrorCategory;

    use super::*;

    #[test]
    fn encodes_two_field_record() {
        let bytes = JsonCodec
            .encode(&ErrorBody::new(ErrorCategory::Database, "connection refused"))
            .unwrap();

        assert_eq!(
            bytes,
            br#"{"category":"Database","message":"connection refused"}"#
        );
    }

    #[test]
    fn decodes_peer_record() {
        let body = JsonCodec
            .decode(br#"{"category":"InvalidState","message":"already running"}"#)
            .unwrap();

        assert_eq!(body, ErrorBody::new(ErrorCategory::InvalidState, "already running"));
    }

    #[test]
    fn decode_reports_malformed_input() {
        let err = JsonCodec.decode(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }
}
