//! Error types for the projection crate.

use selmap_diff::DiffError;

/// Errors that can occur while projecting offsets.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// The diff does not describe the texts it was supplied with.
    #[error("invalid diff sequence: {0}")]
    InvalidDiffSequence(#[from] DiffError),

    /// The offset lies past the end of the source text.
    #[error("offset {offset} out of range for source of {len} chars")]
    OffsetOutOfRange { offset: usize, len: usize },
}

/// Convenience alias for projection results.
pub type ProjectResult<T> = Result<T, ProjectError>;
