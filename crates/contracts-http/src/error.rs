use thiserror::Error;

/// Failures of the serializer collaborator.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Failures of [`BoundaryTranslator::respond`](crate::BoundaryTranslator::respond).
///
/// These describe the response path itself and are never the error being
/// translated.
#[derive(Error, Debug)]
pub enum RespondError {
    /// The body could not be encoded. A bodiless fallback status was written.
    #[error("Failed to encode error body: {0}")]
    Encode(#[source] CodecError),

    #[error("Failed to write error response: {0}")]
    Write(#[from] std::io::Error),
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;
