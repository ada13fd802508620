//! Error types for the diff crate.

use std::fmt;

/// Which side of a diff a reconstruction check was made against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The original text (all non-insert spans).
    Source,
    /// The modified text (all non-delete spans).
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Target => f.write_str("target"),
        }
    }
}

/// Errors that can occur when handling diff sequences.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The sequence does not rebuild the text it claims to describe.
    #[error("diff does not reconstruct the {side} text (diverges at char {offset})")]
    Reconstruction {
        /// The side that failed to reconstruct.
        side: Side,
        /// Char offset of the first divergence.
        offset: usize,
    },

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DiffError {
    fn from(e: serde_json::Error) -> Self {
        DiffError::Serialization(e.to_string())
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
