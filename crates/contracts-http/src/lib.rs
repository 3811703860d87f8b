//! HTTP boundary for shared error contracts.
//!
//! ## Summary
//! Maps a [`StructuredError`](contracts_model::StructuredError) to a status
//! code and a `{category, message}` body, and rebuilds errors from the
//! bodies peers send back.

pub mod codec;
pub mod error;
pub mod sink;
pub mod status;
pub mod translator;

pub use codec::{ErrorCodec, JsonCodec};
pub use error::{CodecError, RespondError};
pub use sink::ResponseSink;
pub use status::StatusTable;
pub use translator::BoundaryTranslator;
