//! A single labeled span of a diff.

use serde::{Deserialize, Serialize};

/// Classification of a diff span relative to the source/target pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Text present in both source and target.
    Equal,
    /// Text present only in the target.
    Insert,
    /// Text present only in the source.
    Delete,
}

impl DiffKind {
    /// Returns `true` if spans of this kind occupy source coordinates.
    pub fn in_source(self) -> bool {
        !matches!(self, DiffKind::Insert)
    }

    /// Returns `true` if spans of this kind occupy target coordinates.
    pub fn in_target(self) -> bool {
        !matches!(self, DiffKind::Delete)
    }
}

/// One span of a diff: a kind and the text it covers.
///
/// Lengths are measured in chars, never bytes, so offsets agree across
/// both coordinate spaces regardless of encoding width.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffOp {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffOp {
    pub fn new(kind: DiffKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Equal, text)
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Insert, text)
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Delete, text)
    }

    /// Length of the span in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_chars_not_bytes() {
        let op = DiffOp::equal("héllo→");
        assert_eq!(op.len(), 6);
        assert!(op.text.len() > 6);
    }

    #[test]
    fn kind_coordinate_membership() {
        assert!(DiffKind::Equal.in_source() && DiffKind::Equal.in_target());
        assert!(!DiffKind::Insert.in_source() && DiffKind::Insert.in_target());
        assert!(DiffKind::Delete.in_source() && !DiffKind::Delete.in_target());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&DiffOp::delete("n")).unwrap();
        assert_eq!(json, r#"{"kind":"delete","text":"n"}"#);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let parsed: Result<DiffOp, _> = serde_json::from_str(r#"{"kind":"replace","text":"x"}"#);
        assert!(parsed.is_err());
    }
}
