//! Character-level diff engine for selmap.
//!
//! Splits two texts into ordered equal / insert / delete spans whose lengths
//! are counted in chars. The spans are the coordinate bridge used by
//! `selmap-project` to carry offsets from one text to the other.
//!
//! # Key Types
//!
//! - [`DiffOp`] / [`DiffKind`] -- A single labeled span
//! - [`DiffSequence`] -- Ordered spans with reconstruction checks and JSON form
//! - [`DiffConfig`] / [`DiffAlgorithm`] -- Engine configuration
//! - [`diff`] / [`diff_with`] -- Compute a sequence from two texts

pub mod engine;
pub mod error;
pub mod op;
pub mod sequence;

pub use engine::{diff, diff_with, DiffAlgorithm, DiffConfig};
pub use error::{DiffError, DiffResult, Side};
pub use op::{DiffKind, DiffOp};
pub use sequence::{DiffSequence, DiffStats};
