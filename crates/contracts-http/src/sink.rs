//! Transport-side output for translated errors.

use http::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderValue};
use http::{Response, StatusCode};

/// ## Summary
/// Capability supplied by the transport layer to write one response.
///
/// `content_type` is `None` when no body is written.
pub trait ResponseSink {
    /// ## Errors
    /// Returns an I/O error if the response cannot be written.
    fn write_response(
        &mut self,
        status: StatusCode,
        content_type: Option<&str>,
        body: &[u8],
    ) -> std::io::Result<()>;
}

impl ResponseSink for Response<Vec<u8>> {
    fn write_response(
        &mut self,
        status: StatusCode,
        content_type: Option<&str>,
        body: &[u8],
    ) -> std::io::Result<()> {
        *self.status_mut() = status;

        let headers = self.headers_mut();
        match content_type {
            Some(value) => {
                let value = HeaderValue::from_str(value)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
                headers.insert(CONTENT_TYPE, value);
            }
            None => {
                headers.remove(CONTENT_TYPE);
            }
        }
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));

        *self.body_mut() = body.to_vec();
        Ok(())
    }
}
