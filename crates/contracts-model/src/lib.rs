//! Shared error contracts.
//!
//! ## Summary
//! A categorized, chainable [`StructuredError`] that every service raises,
//! the [`ErrorBody`] record it serializes to, and the settings consumed by
//! the HTTP boundary.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use model::{ErrorArg, ErrorBody, ErrorCategory, StructuredError};
