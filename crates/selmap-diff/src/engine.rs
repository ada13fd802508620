//! Character-level diff between two texts.
//!
//! Uses the `similar` crate to compute the edit script over chars, then
//! folds consecutive changes of the same kind into maximal spans.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag, TextDiff};
use tracing::debug;

use crate::op::{DiffKind, DiffOp};
use crate::sequence::DiffSequence;

/// The diff algorithm used to align the two texts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Patience,
    Lcs,
}

impl From<DiffAlgorithm> for Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
            DiffAlgorithm::Lcs => Algorithm::Lcs,
        }
    }
}

/// Configuration for the diff engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Alignment algorithm.
    pub algorithm: DiffAlgorithm,
    /// Wall-clock budget in milliseconds. Once exceeded the engine falls
    /// back to a coarser (still valid) diff. `None` means unbounded.
    pub timeout_ms: Option<u64>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::Myers,
            timeout_ms: Some(1000),
        }
    }
}

impl DiffConfig {
    /// A configuration with no deadline. Output is deterministic for any
    /// input size.
    pub fn unbounded() -> Self {
        Self {
            timeout_ms: None,
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Compute the char-level diff of `source` against `target` with the
/// default configuration.
pub fn diff(source: &str, target: &str) -> DiffSequence {
    diff_with(source, target, &DiffConfig::default())
}

/// Compute the char-level diff of `source` against `target`.
///
/// The result reconstructs both inputs and contains maximal, non-empty
/// spans.
pub fn diff_with(source: &str, target: &str, config: &DiffConfig) -> DiffSequence {
    // Identical content.
    if source == target {
        return if source.is_empty() {
            DiffSequence::new()
        } else {
            DiffSequence::from_ops(vec![DiffOp::equal(source)])
        };
    }

    let mut text_config = TextDiff::configure();
    text_config.algorithm(config.algorithm.into());
    if let Some(timeout) = config.timeout() {
        text_config.deadline(Instant::now() + timeout);
    }
    let text_diff = text_config.diff_chars(source, target);

    let mut ops: Vec<DiffOp> = Vec::new();
    for change in text_diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => DiffKind::Equal,
            ChangeTag::Insert => DiffKind::Insert,
            ChangeTag::Delete => DiffKind::Delete,
        };
        match ops.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => ops.push(DiffOp::new(kind, change.value())),
        }
    }

    let sequence = DiffSequence::from_ops(ops);
    debug!(
        algorithm = ?config.algorithm,
        spans = sequence.len(),
        source_chars = sequence.source_len(),
        target_chars = sequence.target_len(),
        "computed char diff"
    );
    sequence
}
