//! Unified error type for the collection-kit library.
//!
//! The primitives themselves are total and signal "not found" or "absent"
//! with `Option`. Errors only arise when dynamic data has to be checked for
//! the container shape an operation requires.

use thiserror::Error;

/// Unified error type for all collection-kit operations.
///
/// # Example
///
/// ```ignore
/// use collection_kit::{json, Result};
///
/// fn head(value: &serde_json::Value) -> Result<usize> {
///     Ok(json::first_n(value, 3)?.len())
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A sequence-only operation received something other than a sequence.
    #[error("Expected a sequence, got {found}")]
    NotASequence { found: &'static str },

    /// A mapping-only operation received something other than a mapping.
    #[error("Expected a mapping, got {found}")]
    NotAMapping { found: &'static str },
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if a sequence was required.
    pub fn is_not_a_sequence(&self) -> bool {
        matches!(self, Self::NotASequence { .. })
    }

    /// Returns `true` if a mapping was required.
    pub fn is_not_a_mapping(&self) -> bool {
        matches!(self, Self::NotAMapping { .. })
    }

    /// Name of the shape that was actually supplied.
    pub fn found(&self) -> &'static str {
        match self {
            Self::NotASequence { found } | Self::NotAMapping { found } => found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::NotASequence { found: "object" };
        assert_eq!(err.to_string(), "Expected a sequence, got object");
        assert!(err.is_not_a_sequence());
        assert!(!err.is_not_a_mapping());
        assert_eq!(err.found(), "object");

        let err = Error::NotAMapping { found: "null" };
        assert_eq!(err.to_string(), "Expected a mapping, got null");
        assert!(err.is_not_a_mapping());
    }
}
