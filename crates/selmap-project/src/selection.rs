//! Selections: ordered offset pairs in one text's coordinate space.

use serde::{Deserialize, Serialize};

/// A range `[start, end)` of char offsets within a single text.
///
/// `start <= end` always holds; decoding goes through [`Selection::new`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawSelection")]
pub struct Selection {
    start: usize,
    end: usize,
}

#[derive(Deserialize)]
struct RawSelection {
    start: usize,
    end: usize,
}

impl From<RawSelection> for Selection {
    fn from(raw: RawSelection) -> Self {
        Selection::new(raw.start, raw.end)
    }
}

impl Selection {
    /// Build a selection from two endpoints in either order.
    ///
    /// A selection dragged right-to-left reports its anchor after its head;
    /// both orders describe the same range.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A zero-width selection at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// The same range with both endpoints clamped to `[0, len]`.
    pub fn clamp_to(&self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The selected part of `text`, with offsets counted in chars.
    ///
    /// Offsets past the end of `text` are clamped to its end.
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        let start = byte_index(text, self.start);
        let end = byte_index(text, self.end);
        &text[start..end]
    }
}

/// Byte index of the char at `offset`, or `text.len()` past the end.
pub(crate) fn byte_index(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map_or(text.len(), |(index, _)| index)
}

/// A source selection together with its endpoints in the target text.
///
/// The endpoints are projected independently, so `start > end` is possible
/// when the surrounding edits reorder them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedSelection {
    /// The selection in source coordinates, clamped to the source text.
    pub source: Selection,
    /// Projected start, in target coordinates.
    pub start: usize,
    /// Projected end, in target coordinates.
    pub end: usize,
}

impl ProjectedSelection {
    /// Returns `true` when a non-empty source selection collapsed to a
    /// single point: its whole content was deleted.
    pub fn is_span_missing(&self) -> bool {
        !self.source.is_empty() && self.start == self.end
    }

    /// Returns `true` if the projected endpoints are out of order.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// The projected range as an ordered selection.
    pub fn as_selection(&self) -> Selection {
        Selection::new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_endpoints() {
        let selection = Selection::new(7, 3);
        assert_eq!((selection.start(), selection.end()), (3, 7));
        assert_eq!(Selection::new(3, 7).len(), 4);
    }

    #[test]
    fn decoding_reversed_endpoints_orders_them() {
        let selection: Selection = serde_json::from_str(r#"{"start":5,"end":2}"#).unwrap();
        assert_eq!(selection, Selection::new(2, 5));
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.slice("hello world"), "llo");

        let projected: ProjectedSelection =
            serde_json::from_str(r#"{"source":{"start":3,"end":2},"start":2,"end":2}"#).unwrap();
        assert!(projected.is_span_missing());
    }

    #[test]
    fn selection_serializes_fields() {
        let json = serde_json::to_string(&Selection::new(4, 1)).unwrap();
        assert_eq!(json, r#"{"start":1,"end":4}"#);
    }

    #[test]
    fn clamp_to_limits_both_endpoints() {
        assert_eq!(Selection::new(3, 9).clamp_to(4), Selection::new(3, 4));
        assert_eq!(Selection::new(6, 9).clamp_to(4), Selection::caret(4));
    }

    #[test]
    fn caret_is_empty() {
        let caret = Selection::caret(5);
        assert!(caret.is_empty());
        assert_eq!(caret.len(), 0);
    }

    #[test]
    fn slice_uses_char_offsets() {
        let text = "naïve café";
        assert_eq!(Selection::new(2, 5).slice(text), "ïve");
        assert_eq!(Selection::new(6, 10).slice(text), "café");
    }

    #[test]
    fn slice_clamps_past_end() {
        assert_eq!(Selection::new(2, 99).slice("kid"), "d");
        assert_eq!(Selection::new(50, 99).slice("kid"), "");
    }

    #[test]
    fn span_missing_requires_non_empty_source() {
        let collapsed = ProjectedSelection {
            source: Selection::new(2, 3),
            start: 2,
            end: 2,
        };
        assert!(collapsed.is_span_missing());

        let caret = ProjectedSelection {
            source: Selection::caret(2),
            start: 2,
            end: 2,
        };
        assert!(!caret.is_span_missing());
    }

    #[test]
    fn inverted_projection() {
        let projected = ProjectedSelection {
            source: Selection::new(1, 4),
            start: 6,
            end: 3,
        };
        assert!(projected.is_inverted());
        assert_eq!(projected.as_selection(), Selection::new(3, 6));
    }
}
