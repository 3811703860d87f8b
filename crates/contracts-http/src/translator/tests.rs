//! Tests for the boundary translator.

use contracts_model::ErrorBody;
use http::Response;
use http::header::CONTENT_TYPE;

use super::*;
use crate::error::{CodecError, CodecResult};

/// Codec whose encoder always fails.
struct BrokenCodec;

impl ErrorCodec for BrokenCodec {
    fn content_type(&self) -> &'static str {
        "application/broken"
    }

    fn encode(&self, _body: &ErrorBody) -> CodecResult<Vec<u8>> {
        Err(CodecError::Encode("encoder offline".to_string()))
    }

    fn decode(&self, _bytes: &[u8]) -> CodecResult<ErrorBody> {
        Err(CodecError::Decode("decoder offline".to_string()))
    }
}

/// Sink that refuses every write.
struct ClosedSink;

impl ResponseSink for ClosedSink {
    fn write_response(
        &mut self,
        _status: StatusCode,
        _content_type: Option<&str>,
        _body: &[u8],
    ) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "connection reset",
        ))
    }
}

fn json_translator() -> BoundaryTranslator {
    BoundaryTranslator::new(StatusTable::standard())
}

#[test_log::test]
fn respond_writes_status_and_body() {
    let translator = json_translator();
    let error = StructuredError::new(ErrorCategory::Database, "connection refused", None)
        .with_ops(["open_pool"]);

    let mut response = Response::new(Vec::new());
    let status = translator.respond(&error, &mut response).unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(
        response.body(),
        br#"{"category":"Database","message":"connection refused"}"#
    );
}

#[test_log::test]
fn respond_never_leaks_trail_or_cause() {
    let translator = json_translator();
    let inner = StructuredError::new(ErrorCategory::NotFound, "row 9 absent in devices", None)
        .with_ops(["select_device"]);
    let error = StructuredError::wrap(inner, "device not found").with_ops(["get_device"]);

    let mut response = Response::new(Vec::new());
    translator.respond(&error, &mut response).unwrap();

    let body = String::from_utf8(response.body().clone()).unwrap();
    assert!(!body.contains("select_device"));
    assert!(!body.contains("get_device"));
    assert!(!body.contains("row 9"));
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test_log::test]
fn encode_failure_writes_fallback_and_reports() {
    let translator = BoundaryTranslator::with_codec(StatusTable::standard(), BrokenCodec);
    let error = StructuredError::new(ErrorCategory::NotFound, "missing", None);

    let mut response = Response::new(Vec::new());
    let err = translator.respond(&error, &mut response).unwrap_err();

    assert!(matches!(err, RespondError::Encode(CodecError::Encode(_))));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body().is_empty());
    assert!(response.headers().get(CONTENT_TYPE).is_none());
}

#[test_log::test]
fn write_failure_is_reported_separately() {
    let translator = json_translator();
    let error = StructuredError::new(ErrorCategory::InvalidState, "already running", None);

    let err = translator.respond(&error, &mut ClosedSink).unwrap_err();

    match err {
        RespondError::Write(io) => assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe),
        RespondError::Encode(e) => panic!("unexpected encode error: {e}"),
    }
}

#[test]
fn status_for_uses_resolved_category() {
    let translator = json_translator();
    let inner = StructuredError::new(ErrorCategory::LimitExceeded, "batch too large", None);
    let outer = StructuredError::wrap(inner, "ingest rejected");

    assert_eq!(translator.status_for(&outer), StatusCode::PAYLOAD_TOO_LARGE);
}

#[test_log::test]
fn peer_payload_is_rebuilt() {
    let translator = json_translator();

    let error = translator
        .decode_peer_error(br#"{"category":"NotFound","message":"user 42 missing"}"#);

    assert_eq!(error.category(), &ErrorCategory::NotFound);
    assert_eq!(error.message(), "user 42 missing");
    assert_eq!(error.operations(), vec![DECODE_PEER_OP]);
}

#[test_log::test]
fn malformed_peer_payload_becomes_server_error() {
    let translator = json_translator();

    let error = translator.decode_peer_error(b"upstream timed out");

    assert_eq!(error.category(), &ErrorCategory::ServerError);
    assert!(error.message().starts_with("failed to decode peer error payload"));
}

#[test_log::test]
fn blank_peer_message_becomes_server_error() {
    let translator = json_translator();

    let error = translator.decode_peer_error(br#"{"category":"Database","message":""}"#);

    assert_eq!(error.category(), &ErrorCategory::ServerError);
    assert!(error.message().starts_with("invalid peer error payload"));
}

#[test]
fn decode_failure_uses_codec() {
    let translator = BoundaryTranslator::with_codec(StatusTable::standard(), BrokenCodec);

    let error = translator.decode_peer_error(br#"{"category":"NotFound","message":"x"}"#);

    assert_eq!(error.category(), &ErrorCategory::ServerError);
    assert!(error.message().contains("decoder offline"));
}

#[test]
fn translator_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BoundaryTranslator>();
    assert_send_sync::<StatusTable>();
}
