//! Offset projection for selmap.
//!
//! Carries carets and selections measured in an original text onto the
//! matching positions of a revised text, using the char-level spans from
//! `selmap-diff`. Offsets inside deleted text collapse onto the point where
//! that text used to be; a selection that collapses this way is reported as
//! a missing span.
//!
//! # Key Types
//!
//! - [`Projector`] -- Projects offsets through a borrowed [`DiffSequence`]
//! - [`Selection`] / [`ProjectedSelection`] -- Source ranges and their projections
//! - [`OffsetPolicy`] -- Clamp or reject offsets past the end of the source
//!
//! [`DiffSequence`]: selmap_diff::DiffSequence

pub mod error;
pub mod projector;
pub mod selection;

pub use error::{ProjectError, ProjectResult};
pub use projector::{project, project_range, OffsetPolicy, Projector};
pub use selection::{ProjectedSelection, Selection};
