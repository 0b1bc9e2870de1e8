//! Error types for inferir operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for inferir operations.
///
/// Every failure surfaced by this crate is a validation failure of its
/// inputs: a malformed or incomplete model descriptor, a feature vector
/// that doesn't line up with the descriptor's declared features, or empty
/// sequences where non-empty ones are required. Numeric guard values
/// (zero-norm cosine distance, constant-target R², the Naive Bayes
/// variance floor) are defined results, not errors, and never appear here.
///
/// # Examples
///
/// ```
/// use inferir::error::InferirError;
///
/// let err = InferirError::DimensionMismatch {
///     expected: "features=3".to_string(),
///     actual: "2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum InferirError {
    /// Feature vector or parameter vector doesn't match the declared shape.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Malformed or incomplete input (descriptor fields, non-finite
    /// features, empty training set, empty metric inputs).
    ValidationError {
        /// Validation failure message
        message: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for InferirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferirError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            InferirError::ValidationError { message } => {
                write!(f, "Validation failed: {message}")
            }
            InferirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for InferirError {}

impl From<&str> for InferirError {
    fn from(msg: &str) -> Self {
        InferirError::Other(msg.to_string())
    }
}

impl From<String> for InferirError {
    fn from(msg: String) -> Self {
        InferirError::Other(msg)
    }
}

impl InferirError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a validation error from any displayable message
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::ValidationError {
            message: format!("empty input: {context}"),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for InferirError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<InferirError> for &str {
    fn eq(&self, other: &InferirError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, InferirError>;
