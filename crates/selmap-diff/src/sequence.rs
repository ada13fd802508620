//! Ordered diff spans covering a source and a target text.
//!
//! Reading the non-insert spans in order yields the source; reading the
//! non-delete spans yields the target. The JSON form is a plain array of
//! `{"kind": "...", "text": "..."}` objects in document order.

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult, Side};
use crate::op::{DiffKind, DiffOp};

/// Per-kind char totals of a diff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Chars shared by both texts.
    pub equal: usize,
    /// Chars only in the target.
    pub inserted: usize,
    /// Chars only in the source.
    pub deleted: usize,
}

/// An ordered sequence of diff spans.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffSequence {
    ops: Vec<DiffOp>,
}

impl DiffSequence {
    /// Create an empty sequence (the diff of two empty texts).
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap spans as-is. Adjacent spans of the same kind and empty spans are
    /// kept; use [`DiffSequence::compact`] to normalize them.
    pub fn from_ops(ops: Vec<DiffOp>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[DiffOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DiffOp> {
        self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffOp> {
        self.ops.iter()
    }

    /// Number of spans.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Length of the source text in chars.
    pub fn source_len(&self) -> usize {
        self.side_len(Side::Source)
    }

    /// Length of the target text in chars.
    pub fn target_len(&self) -> usize {
        self.side_len(Side::Target)
    }

    /// Rebuild the source text.
    pub fn source_text(&self) -> String {
        self.side_text(Side::Source)
    }

    /// Rebuild the target text.
    pub fn target_text(&self) -> String {
        self.side_text(Side::Target)
    }

    /// Returns `true` if the diff contains no insertions or deletions.
    pub fn is_identity(&self) -> bool {
        self.ops
            .iter()
            .all(|op| op.kind == DiffKind::Equal || op.is_empty())
    }

    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        for op in &self.ops {
            let len = op.len();
            match op.kind {
                DiffKind::Equal => stats.equal += len,
                DiffKind::Insert => stats.inserted += len,
                DiffKind::Delete => stats.deleted += len,
            }
        }
        stats
    }

    /// Merge adjacent spans of the same kind and drop empty spans.
    ///
    /// Both reconstructed texts are unchanged.
    pub fn compact(self) -> Self {
        let mut ops: Vec<DiffOp> = Vec::with_capacity(self.ops.len());
        for op in self.ops {
            if op.is_empty() {
                continue;
            }
            match ops.last_mut() {
                Some(last) if last.kind == op.kind => last.text.push_str(&op.text),
                _ => ops.push(op),
            }
        }
        Self { ops }
    }

    /// Check that this sequence reconstructs exactly `source` and `target`.
    pub fn verify(&self, source: &str, target: &str) -> DiffResult<()> {
        self.verify_side(Side::Source, source)?;
        self.verify_side(Side::Target, target)
    }

    /// Encode as a compact JSON array.
    pub fn to_json(&self) -> DiffResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as an indented JSON array.
    pub fn to_json_pretty(&self) -> DiffResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from the JSON array form.
    pub fn from_json(json: &str) -> DiffResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn side_ops(&self, side: Side) -> impl Iterator<Item = &DiffOp> {
        self.ops.iter().filter(move |op| match side {
            Side::Source => op.kind.in_source(),
            Side::Target => op.kind.in_target(),
        })
    }

    fn side_len(&self, side: Side) -> usize {
        self.side_ops(side).map(DiffOp::len).sum()
    }

    fn side_text(&self, side: Side) -> String {
        self.side_ops(side).map(|op| op.text.as_str()).collect()
    }

    fn verify_side(&self, side: Side, expected: &str) -> DiffResult<()> {
        let mut rebuilt = self.side_ops(side).flat_map(|op| op.text.chars());
        let mut wanted = expected.chars();
        let mut offset = 0usize;
        loop {
            match (rebuilt.next(), wanted.next()) {
                (None, None) => return Ok(()),
                (Some(a), Some(b)) if a == b => offset += 1,
                _ => return Err(DiffError::Reconstruction { side, offset }),
            }
        }
    }
}

impl FromIterator<DiffOp> for DiffSequence {
    fn from_iter<I: IntoIterator<Item = DiffOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<DiffOp>> for DiffSequence {
    fn from(ops: Vec<DiffOp>) -> Self {
        Self::from_ops(ops)
    }
}

impl<'a> IntoIterator for &'a DiffSequence {
    type Item = &'a DiffOp;
    type IntoIter = std::slice::Iter<'a, DiffOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl IntoIterator for DiffSequence {
    type Item = DiffOp;
    type IntoIter = std::vec::IntoIter<DiffOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_to_kid() -> DiffSequence {
        DiffSequence::from_ops(vec![
            DiffOp::equal("ki"),
            DiffOp::delete("n"),
            DiffOp::equal("d"),
        ])
    }

    #[test]
    fn reconstructs_both_sides() {
        let diff = kind_to_kid();
        assert_eq!(diff.source_text(), "kind");
        assert_eq!(diff.target_text(), "kid");
        assert_eq!(diff.source_len(), 4);
        assert_eq!(diff.target_len(), 3);
    }

    #[test]
    fn verify_accepts_matching_texts() {
        assert!(kind_to_kid().verify("kind", "kid").is_ok());
    }

    #[test]
    fn verify_reports_divergence() {
        let err = kind_to_kid().verify("kind", "kit").unwrap_err();
        match err {
            DiffError::Reconstruction { side, offset } => {
                assert_eq!(side, Side::Target);
                assert_eq!(offset, 2);
            }
            other => panic!("expected Reconstruction, got {:?}", other),
        }
    }

    #[test]
    fn verify_reports_short_sequence() {
        let err = kind_to_kid().verify("kinds", "kid").unwrap_err();
        assert!(matches!(
            err,
            DiffError::Reconstruction {
                side: Side::Source,
                offset: 4
            }
        ));
    }

    #[test]
    fn stats_count_chars() {
        let diff = DiffSequence::from_ops(vec![
            DiffOp::equal("ca"),
            DiffOp::insert("a"),
            DiffOp::equal("t"),
            DiffOp::delete("!!"),
        ]);
        let stats = diff.stats();
        assert_eq!(stats.equal, 3);
        assert_eq!(stats.inserted, 1);
        assert_eq!(stats.deleted, 2);
        assert!(!diff.is_identity());
    }

    #[test]
    fn compact_merges_and_drops_empty() {
        let diff = DiffSequence::from_ops(vec![
            DiffOp::equal("a"),
            DiffOp::equal("b"),
            DiffOp::insert(""),
            DiffOp::delete("c"),
            DiffOp::delete("d"),
            DiffOp::equal("e"),
        ]);
        let compacted = diff.clone().compact();
        assert_eq!(
            compacted.ops(),
            &[DiffOp::equal("ab"), DiffOp::delete("cd"), DiffOp::equal("e")]
        );
        assert_eq!(compacted.source_text(), diff.source_text());
        assert_eq!(compacted.target_text(), diff.target_text());
    }

    #[test]
    fn empty_sequence_is_identity() {
        let diff = DiffSequence::new();
        assert!(diff.is_identity());
        assert_eq!(diff.source_len(), 0);
        assert!(diff.verify("", "").is_ok());
    }

    #[test]
    fn json_shape() {
        let json = kind_to_kid().to_json().unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"equal","text":"ki"},{"kind":"delete","text":"n"},{"kind":"equal","text":"d"}]"#
        );
        assert_eq!(DiffSequence::from_json(&json).unwrap(), kind_to_kid());
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = DiffSequence::from_json(r#"{"kind":"equal"}"#).unwrap_err();
        assert!(matches!(err, DiffError::Serialization(_)));
    }
}
