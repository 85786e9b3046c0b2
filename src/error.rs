//! Error types for elastiq.
//!
//! The builder surface is permissive and never fails: unknown clause kinds
//! and operators are dropped, not reported. Errors only come from the strict
//! parsers (`FromStr`) and from rendering a query document to text.

use thiserror::Error;

/// Errors produced by strict parsing and JSON rendering.
#[derive(Debug, Error)]
pub enum DslError {
    /// A clause kind string outside the four bool buckets.
    #[error("Unknown clause kind '{kind}' (expected must, must_not, should or filter)")]
    UnknownClauseKind {
        /// The rejected text.
        kind: String,
    },

    /// An operator token with no leaf query mapping.
    #[error("Unknown operator '{operator}'")]
    UnknownOperator {
        /// The rejected token.
        operator: String,
    },

    /// serde_json could not render the document.
    #[error("Failed to serialize query: {message}")]
    Serialize {
        /// Underlying serde_json message.
        message: String,
    },
}

impl DslError {
    /// Creates a serialization error.
    #[must_use]
    pub fn serialize(message: impl Into<String>) -> Self {
        Self::Serialize {
            message: message.into(),
        }
    }

    /// Returns true if this error came from one of the strict parsers.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(
            self,
            Self::UnknownClauseKind { .. } | Self::UnknownOperator { .. }
        )
    }

    /// Returns true if this is a serialization error.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialize { .. })
    }
}

impl From<serde_json::Error> for DslError {
    fn from(e: serde_json::Error) -> Self {
        Self::serialize(e.to_string())
    }
}

/// Result type alias for elastiq operations.
pub type DslResult<T> = Result<T, DslError>;
