//! StyledRange: a styled region of plain text.

use crate::kind::MarkupKind;

/// A half-open `[start, end)` region of plain text tagged with a markup kind.
///
/// Offsets count `char`s of the delimiter-stripped text, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyledRange {
    /// Markup kind that produced this range.
    pub kind: MarkupKind,
    /// Start offset (inclusive) in the plain text.
    pub start: usize,
    /// End offset (exclusive) in the plain text.
    pub end: usize,
}

impl StyledRange {
    /// Create a new range.
    pub fn new(kind: MarkupKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// Returns true if this range covers nothing.
    pub fn is_zero_length(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the length of this range in chars.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this range contains a given char offset.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check if this range overlaps with another range.
    pub fn overlaps(&self, other: &StyledRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Convert to a byte range over `text`.
    ///
    /// Returns `None` if the range is inverted or reaches past the end of
    /// `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagscan::{MarkupKind, StyledRange};
    ///
    /// let text = "héllo wörld";
    /// let range = StyledRange::new(MarkupKind::Bold, 6, 11);
    /// let bytes = range.byte_range(text).unwrap();
    /// assert_eq!(&text[bytes], "wörld");
    /// ```
    pub fn byte_range(&self, text: &str) -> Option<std::ops::Range<usize>> {
        if self.start > self.end {
            return None;
        }
        let start = char_to_byte(text, self.start)?;
        let end = char_to_byte(text, self.end)?;
        Some(start..end)
    }
}

/// Byte index of the `offset`-th char, or `text.len()` for one past the end.
pub(crate) fn char_to_byte(text: &str, offset: usize) -> Option<usize> {
    text.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .nth(offset)
}
