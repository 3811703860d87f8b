//! Error categories.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Semantic classification of a failure.
///
/// Categories are opaque labels, not a hierarchy. `Unknown` is the default
/// and means no category was assigned anywhere along an error's chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ErrorCategory {
    #[default]
    Unknown,
    Database,
    Communication,
    NotFound,
    InvalidState,
    ServerError,
    LimitExceeded,
    /// A label this build does not recognise, typically received from a
    /// newer peer. Kept verbatim so it can be forwarded unchanged.
    ///
    /// Build it with [`ErrorCategory::from_label`]. A hand-built `Other`
    /// that names a known category is folded back by
    /// [`ErrorCategory::normalized`].
    Other(String),
}

impl ErrorCategory {
    /// Every category this build knows about, in declaration order.
    pub const KNOWN: [Self; 7] = [
        Self::Unknown,
        Self::Database,
        Self::Communication,
        Self::NotFound,
        Self::InvalidState,
        Self::ServerError,
        Self::LimitExceeded,
    ];

    /// Returns the wire label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => "Unknown",
            Self::Database => "Database",
            Self::Communication => "Communication",
            Self::NotFound => "NotFound",
            Self::InvalidState => "InvalidState",
            Self::ServerError => "Unknown/Unexpected",
            Self::LimitExceeded => "LimitExceeded",
            Self::Other(label) => label,
        }
    }

    /// ## Summary
    /// Parses a wire label. Never fails: unrecognised labels become
    /// [`ErrorCategory::Other`] and an empty label is `Unknown`.
    ///
    /// `ServerError` is accepted as an alias for its wire label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "" | "Unknown" => Self::Unknown,
            "Database" => Self::Database,
            "Communication" => Self::Communication,
            "NotFound" => Self::NotFound,
            "InvalidState" => Self::InvalidState,
            "Unknown/Unexpected" | "ServerError" => Self::ServerError,
            "LimitExceeded" => Self::LimitExceeded,
            other => Self::Other(other.to_string()),
        }
    }

    /// Re-parses an `Other` label, so `Other("Database")` becomes
    /// `Database`. Other variants are returned unchanged.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Other(label) => Self::from_label(&label),
            other => other,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl Serialize for ErrorCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}
