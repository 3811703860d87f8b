//! The structured, chainable error shared by every service.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::body::ErrorBody;
use super::category::ErrorCategory;

/// Separator used when rendering an operation trail.
pub const TRAIL_SEPARATOR: &str = " -> ";

/// ## Summary
/// A categorized failure with an optional cause and an operation trail.
///
/// `category` and `message` are safe to hand to a remote caller. The trail
/// and the cause are internal diagnostics: they appear in [`fmt::Display`]
/// output for logs but never in the serialized form.
///
/// Operation names are appended. Within one error they keep insertion
/// order, and across a chain the deepest cause's names come first, so a
/// rendered trail reads from the point of detection outward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredError {
    category: ErrorCategory,
    message: String,
    ops: Vec<String>,
    cause: Option<Box<StructuredError>>,
}

impl StructuredError {
    /// Creates an error. `category` may be `Unknown`, in which case the
    /// resolved category is inherited from `cause`. `category` is stored
    /// [normalized](ErrorCategory::normalized).
    #[must_use]
    pub fn new(
        category: ErrorCategory,
        message: impl Into<String>,
        cause: Option<StructuredError>,
    ) -> Self {
        Self {
            category: category.normalized(),
            message: message.into(),
            ops: Vec::new(),
            cause: cause.map(Box::new),
        }
    }

    /// Wraps `cause` without re-categorizing it.
    #[must_use]
    pub fn wrap(cause: StructuredError, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Unknown, message, Some(cause))
    }

    /// By-value form of [`StructuredError::add_ops`].
    #[must_use]
    pub fn with_ops<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_ops(names);
        self
    }

    /// ## Summary
    /// Appends operation names to this error's trail.
    ///
    /// Names are kept as given; repeated names are not collapsed. Only the
    /// trail is touched.
    pub fn add_ops<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ops.extend(names.into_iter().map(Into::into));
        self
    }

    /// ## Summary
    /// Returns the resolved category: the first category that is not
    /// `Unknown`, walking from this error to its deepest cause. `Unknown`
    /// when nothing in the chain was classified.
    #[must_use]
    pub fn category(&self) -> &ErrorCategory {
        self.chain()
            .map(|err| &err.category)
            .find(|category| !category.is_unknown())
            .unwrap_or(&self.category)
    }

    /// Returns the category assigned to this error alone, ignoring causes.
    #[must_use]
    pub fn explicit_category(&self) -> &ErrorCategory {
        &self.category
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Operation names recorded on this error, excluding its causes.
    #[must_use]
    pub fn own_ops(&self) -> &[String] {
        &self.ops
    }

    /// Operation names of the whole chain, deepest cause first.
    #[must_use]
    pub fn operations(&self) -> Vec<&str> {
        let chain: Vec<&Self> = self.chain().collect();
        chain
            .into_iter()
            .rev()
            .flat_map(|err| err.ops.iter().map(String::as_str))
            .collect()
    }

    /// Renders [`StructuredError::operations`] for logs.
    #[must_use]
    pub fn operation_trail(&self) -> String {
        self.operations().join(TRAIL_SEPARATOR)
    }

    #[must_use]
    pub fn cause(&self) -> Option<&StructuredError> {
        self.cause.as_deref()
    }

    /// Iterates from this error to its deepest cause.
    #[must_use]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Returns the chain depth, counting this error.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Returns the externally visible view: resolved category and message.
    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            category: self.category().clone(),
            message: self.message.clone(),
        }
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trail = self.operation_trail();
        if !trail.is_empty() {
            write!(f, "[{trail}] ")?;
        }
        write!(f, "{}: {}", self.category(), self.message)
    }
}

impl std::error::Error for StructuredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Iterator over a cause chain, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a StructuredError>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a StructuredError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl Serialize for StructuredError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_body().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StructuredError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ErrorBody::deserialize(deserializer).map(Self::from)
    }
}

impl From<ErrorBody> for StructuredError {
    fn from(body: ErrorBody) -> Self {
        Self::new(body.category, body.message, None)
    }
}
