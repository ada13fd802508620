//! Offset projection from source coordinates into target coordinates.
//!
//! A single pass over the diff carries two counters: the cursor in the
//! target text and the distance still to travel in the source text. Equal
//! spans advance both, delete spans consume source distance only, and
//! insert spans shift the target cursor only. The pass stops as soon as the
//! offset falls strictly inside an equal or delete span.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use selmap_diff::{DiffKind, DiffOp, DiffSequence};

use crate::error::{ProjectError, ProjectResult};
use crate::selection::{ProjectedSelection, Selection};

/// What to do with an offset past the end of the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetPolicy {
    /// Clamp to the end of the source, which projects to the end of the
    /// target.
    #[default]
    Clamp,
    /// Fail with [`ProjectError::OffsetOutOfRange`].
    Reject,
}

/// Progress of a single projection pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fold {
    Scanning { cursor: usize, remaining: usize },
    Resolved(usize),
}

impl Fold {
    fn start(offset: usize) -> Self {
        Fold::Scanning {
            cursor: 0,
            remaining: offset,
        }
    }

    fn step(self, op: &DiffOp) -> Self {
        let Fold::Scanning { cursor, remaining } = self else {
            return self;
        };
        let len = op.len();
        match op.kind {
            DiffKind::Equal if remaining < len => Fold::Resolved(cursor + remaining),
            DiffKind::Equal => Fold::Scanning {
                cursor: cursor + len,
                remaining: remaining - len,
            },
            // Inside deleted text: collapse onto the point where it used to be.
            DiffKind::Delete if remaining < len => Fold::Resolved(cursor),
            DiffKind::Delete => Fold::Scanning {
                cursor,
                remaining: remaining - len,
            },
            DiffKind::Insert => Fold::Scanning {
                cursor: cursor + len,
                remaining,
            },
        }
    }

    fn offset(self) -> usize {
        match self {
            Fold::Scanning { cursor, .. } => cursor,
            Fold::Resolved(offset) => offset,
        }
    }
}

fn fold_offset(ops: &[DiffOp], offset: usize) -> usize {
    let mut state = Fold::start(offset);
    for (index, op) in ops.iter().enumerate() {
        state = state.step(op);
        if let Fold::Resolved(target) = state {
            trace!(offset, target, span = index, kind = ?op.kind, "offset resolved inside span");
            return target;
        }
    }
    state.offset()
}

/// Projects offsets through a borrowed diff.
#[derive(Clone, Copy, Debug)]
pub struct Projector<'a> {
    diffs: &'a DiffSequence,
    policy: OffsetPolicy,
    source_len: usize,
}

impl<'a> Projector<'a> {
    /// Create a projector with the default [`OffsetPolicy`].
    pub fn new(diffs: &'a DiffSequence) -> Self {
        Self {
            diffs,
            policy: OffsetPolicy::default(),
            source_len: diffs.source_len(),
        }
    }

    /// Create a projector after checking that `diffs` reconstructs exactly
    /// `source` and `target`.
    pub fn checked(diffs: &'a DiffSequence, source: &str, target: &str) -> ProjectResult<Self> {
        diffs.verify(source, target)?;
        Ok(Self::new(diffs))
    }

    pub fn with_policy(mut self, policy: OffsetPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> OffsetPolicy {
        self.policy
    }

    /// Length of the source text in chars.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Translate a source offset into the target text.
    pub fn project(&self, offset: usize) -> ProjectResult<usize> {
        let offset = self.admit(offset)?;
        Ok(fold_offset(self.diffs.ops(), offset))
    }

    /// Translate both endpoints of a source selection.
    ///
    /// The endpoints are projected independently; compare them with
    /// [`ProjectedSelection::is_span_missing`] to detect a deleted span.
    pub fn project_range(&self, selection: Selection) -> ProjectResult<ProjectedSelection> {
        let start = self.project(selection.start())?;
        let end = self.project(selection.end())?;
        Ok(ProjectedSelection {
            source: selection.clamp_to(self.source_len),
            start,
            end,
        })
    }

    /// Translate several offsets, failing on the first rejected one.
    pub fn project_many<I>(&self, offsets: I) -> ProjectResult<Vec<usize>>
    where
        I: IntoIterator<Item = usize>,
    {
        offsets.into_iter().map(|offset| self.project(offset)).collect()
    }

    fn admit(&self, offset: usize) -> ProjectResult<usize> {
        if offset <= self.source_len {
            return Ok(offset);
        }
        match self.policy {
            OffsetPolicy::Clamp => {
                debug!(offset, len = self.source_len, "clamping offset to end of source");
                Ok(self.source_len)
            }
            OffsetPolicy::Reject => Err(ProjectError::OffsetOutOfRange {
                offset,
                len: self.source_len,
            }),
        }
    }
}

/// Translate a source offset into the target text, clamping offsets past
/// the end of the source.
pub fn project(diffs: &DiffSequence, offset: usize) -> ProjectResult<usize> {
    Projector::new(diffs).project(offset)
}

/// Translate both endpoints of a source selection into the target text.
pub fn project_range(diffs: &DiffSequence, selection: Selection) -> ProjectResult<ProjectedSelection> {
    Projector::new(diffs).project_range(selection)
}
