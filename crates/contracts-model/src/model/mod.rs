pub mod args;
pub mod body;
pub mod category;
pub mod structured;

pub use args::ErrorArg;
pub use body::ErrorBody;
pub use category::ErrorCategory;
pub use structured::{Chain, StructuredError};
