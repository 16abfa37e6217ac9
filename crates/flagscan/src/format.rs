//! Formatting entry point and the FormattedText result type.
//!
//! [`format`] scans text and keeps only the ranges that pass the
//! [`RangeGuard`], producing the value a rendering layer draws.

use crate::guard::RangeGuard;
use crate::kind::Markers;
use crate::range::{StyledRange, char_to_byte};
use crate::scanner::{FlagScanner, ScanResult};
use crate::style::Decorations;

/// Marker set and boundary guard used when formatting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Delimiter characters per kind.
    pub markers: Markers,
    /// Which scanned ranges get applied.
    pub guard: RangeGuard,
}

impl FormatOptions {
    /// Create options from a marker set and guard.
    pub fn new(markers: Markers, guard: RangeGuard) -> Self {
        Self { markers, guard }
    }

    /// Scan and guard `text` unconditionally, even when it is blank.
    pub fn formatted(&self, text: &str) -> FormattedText {
        let scan = FlagScanner::new(self.markers).scan(text);
        FormattedText::from_scan(scan, self.guard)
    }
}

/// Format `text` with the default markers and guard.
///
/// Returns `None` when `text` is empty or whitespace only, meaning the
/// caller should display the text unchanged.
///
/// # Examples
///
/// ```
/// use flagscan::format;
///
/// let formatted = format("*bold* text").unwrap();
/// assert_eq!(formatted.text(), "bold text");
/// assert_eq!(formatted.ranges().len(), 1);
///
/// assert!(format("").is_none());
/// ```
pub fn format(text: &str) -> Option<FormattedText> {
    format_with(text, &FormatOptions::default())
}

/// Format `text` with explicit options.
pub fn format_with(text: &str, options: &FormatOptions) -> Option<FormattedText> {
    if text.trim().is_empty() {
        return None;
    }
    Some(options.formatted(text))
}

/// Plain text plus the styled ranges that passed the boundary guard.
///
/// # Examples
///
/// ```
/// use flagscan::{Decorations, format};
///
/// let formatted = format("say *hi* ~now~!").unwrap();
/// let segments: Vec<_> = formatted.segments().collect();
/// assert_eq!(segments[0], ("say ", Decorations::empty()));
/// assert_eq!(segments[1], ("hi", Decorations::BOLD));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormattedText {
    /// Plain text with consumed delimiters removed.
    text: String,
    /// Applied ranges, in closing order.
    ranges: Vec<StyledRange>,
}

impl FormattedText {
    /// Create a FormattedText from text and ranges already known to fit.
    pub fn new(text: String, ranges: Vec<StyledRange>) -> Self {
        Self { text, ranges }
    }

    /// Create a FormattedText from plain text (no ranges).
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ranges: Vec::new(),
        }
    }

    /// Apply `guard` to every range of a scan result.
    pub fn from_scan(scan: ScanResult, guard: RangeGuard) -> Self {
        let (text, ranges) = scan.into_parts();
        let len = text.chars().count();

        let ranges = ranges
            .into_iter()
            .filter(|range| {
                let accepted = guard.accepts(range, len);
                if !accepted {
                    log::debug!(
                        "{:?} guard rejected {} range {}..{} over {} chars",
                        guard,
                        range.kind,
                        range.start,
                        range.end,
                        len
                    );
                }
                accepted
            })
            .collect();

        Self { text, ranges }
    }

    /// Get the plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the applied ranges.
    pub fn ranges(&self) -> &[StyledRange] {
        &self.ranges
    }

    /// Split into the plain text and its ranges.
    pub fn into_parts(self) -> (String, Vec<StyledRange>) {
        (self.text, self.ranges)
    }

    /// Returns true if no range is applied.
    pub fn is_plain(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Get the length of the text in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the combined decorations at a char offset.
    pub fn decorations_at(&self, offset: usize) -> Decorations {
        self.ranges
            .iter()
            .filter(|range| range.contains(offset))
            .fold(Decorations::empty(), |acc, range| acc | range.kind.decoration())
    }

    /// Get all ranges that contain a char offset.
    pub fn ranges_at(&self, offset: usize) -> Vec<&StyledRange> {
        self.ranges.iter().filter(|r| r.contains(offset)).collect()
    }

    /// Iterate over runs of text sharing the same decorations.
    ///
    /// Unstyled runs are included with empty decorations.
    pub fn segments(&self) -> SegmentIterator<'_> {
        SegmentIterator::new(self)
    }
}

/// Iterator over decorated runs of a [`FormattedText`].
pub struct SegmentIterator<'a> {
    formatted: &'a FormattedText,
    len: usize,
    /// Current char offset.
    pos: usize,
    /// Byte offset matching `pos`.
    byte_pos: usize,
}

impl<'a> SegmentIterator<'a> {
    fn new(formatted: &'a FormattedText) -> Self {
        Self {
            formatted,
            len: formatted.len(),
            pos: 0,
            byte_pos: 0,
        }
    }
}

impl<'a> Iterator for SegmentIterator<'a> {
    type Item = (&'a str, Decorations);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }

        // Next boundary where decorations change
        let mut end = self.len;
        for range in &self.formatted.ranges {
            if range.start > self.pos && range.start < end {
                end = range.start;
            }
            if range.end > self.pos && range.end < end {
                end = range.end;
            }
        }

        let decorations = self.formatted.decorations_at(self.pos);
        let rest = &self.formatted.text[self.byte_pos..];
        let width = char_to_byte(rest, end - self.pos).unwrap_or(rest.len());

        self.pos = end;
        self.byte_pos += width;

        Some((&rest[..width], decorations))
    }
}
