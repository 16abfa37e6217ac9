//! Single-pass delimiter scan.
//!
//! Walks the input once with two cursors: `input` over the raw chars and
//! `output` over the offsets of the plain text being built.

use crate::kind::{Markers, MarkupKind};
use crate::range::StyledRange;

use super::lookahead::{has_marker_same_line, is_run};
use super::pending::PendingFlags;

/// Inputs of this length or shorter never contain monospace markup.
const MONOSPACE_MIN_INPUT: usize = 6;

/// Length of the marker run delimiting monospace text.
const MONOSPACE_RUN: usize = MarkupKind::Monospace.run_length();

/// Markers following the first one in a monospace run.
const MONOSPACE_LOOKAHEAD: usize = MONOSPACE_RUN - 1;

/// Result of scanning text for inline delimiters.
///
/// Holds the delimiter-stripped text and every range that was closed,
/// in the order the closing delimiters were met.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResult {
    plain_text: String,
    ranges: Vec<StyledRange>,
}

impl ScanResult {
    /// Create a result from already stripped text and its ranges.
    pub fn new(plain_text: String, ranges: Vec<StyledRange>) -> Self {
        Self { plain_text, ranges }
    }

    /// The text with consumed delimiters removed.
    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    /// All closed ranges, in closing order.
    pub fn ranges(&self) -> &[StyledRange] {
        &self.ranges
    }

    /// Split into the plain text and its ranges.
    pub fn into_parts(self) -> (String, Vec<StyledRange>) {
        (self.plain_text, self.ranges)
    }
}

/// Scans text for bold, italic, strikethrough and monospace delimiters.
///
/// The scanner holds no state between calls; each [`FlagScanner::scan`]
/// starts from scratch.
///
/// # Examples
///
/// ```
/// use flagscan::{FlagScanner, Markers, MarkupKind, StyledRange};
///
/// let scanner = FlagScanner::new(Markers::default());
/// let result = scanner.scan("abc ```code``` def");
/// assert_eq!(result.plain_text(), "abc code def");
/// assert_eq!(
///     result.ranges(),
///     &[StyledRange::new(MarkupKind::Monospace, 4, 8)]
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlagScanner {
    markers: Markers,
}

impl FlagScanner {
    /// Create a scanner for the given marker set.
    pub fn new(markers: Markers) -> Self {
        Self { markers }
    }

    /// The marker set this scanner recognises.
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Scan `text`, stripping consumed delimiters and collecting ranges.
    pub fn scan(&self, text: &str) -> ScanResult {
        let chars: Vec<char> = text.chars().collect();
        let mut scan = Scan::new(&self.markers, &chars);
        scan.run();
        scan.finish()
    }
}

/// Scans `text` with the default markers.
///
/// # Examples
///
/// ```
/// use flagscan::parse;
///
/// let result = parse("*a*b*c*");
/// assert_eq!(result.plain_text(), "abc");
/// assert_eq!(result.ranges().len(), 2);
/// ```
pub fn parse(text: &str) -> ScanResult {
    FlagScanner::default().scan(text)
}

/// State of one scan.
struct Scan<'a> {
    markers: &'a Markers,
    chars: &'a [char],
    /// Cursor over the input chars.
    input: usize,
    /// Offset into the plain text where the next kept char lands.
    output: usize,
    plain: String,
    ranges: Vec<StyledRange>,
    pending: PendingFlags,
}

impl<'a> Scan<'a> {
    fn new(markers: &'a Markers, chars: &'a [char]) -> Self {
        Self {
            markers,
            chars,
            input: 0,
            output: 0,
            plain: String::with_capacity(chars.len()),
            ranges: Vec::new(),
            pending: PendingFlags::default(),
        }
    }

    fn run(&mut self) {
        while self.input < self.chars.len() {
            let c = self.chars[self.input];
            let consumed = match self.markers.kind_of(c) {
                Some(MarkupKind::Monospace) => self.monospace(c),
                Some(kind) => self.single(kind, c),
                None => false,
            };

            if consumed {
                continue;
            }

            self.plain.push(c);
            self.output += 1;
            self.input += 1;
        }
    }

    /// Handle a bold, italic or strikethrough marker.
    ///
    /// Returns true if the marker was consumed as a delimiter.
    fn single(&mut self, kind: MarkupKind, marker: char) -> bool {
        if let Some(start) = self.pending.take(kind) {
            self.ranges.push(StyledRange::new(kind, start, self.output));
            self.input += 1;
            return true;
        }

        if has_marker_same_line(self.chars, marker, self.input + 1) {
            self.pending.open(kind, self.output);
            self.input += 1;
            return true;
        }

        false
    }

    /// Handle a monospace marker.
    ///
    /// Opening a run advances the output cursor by the lookahead; closing
    /// takes it back before recording the end, so offsets recorded while
    /// the run is open carry that lookahead.
    fn monospace(&mut self, marker: char) -> bool {
        let len = self.chars.len();
        if len <= MONOSPACE_MIN_INPUT || len <= self.input + MONOSPACE_LOOKAHEAD {
            return false;
        }
        if !is_run(self.chars, marker, self.input, MONOSPACE_RUN) {
            return false;
        }

        match self.pending.take(MarkupKind::Monospace) {
            Some(start) => {
                self.output -= MONOSPACE_LOOKAHEAD;
                self.ranges
                    .push(StyledRange::new(MarkupKind::Monospace, start, self.output));
                log::trace!("monospace run closed at {}", self.output);
            }
            None => {
                log::trace!("monospace run opened at {}", self.output);
                self.pending.open(MarkupKind::Monospace, self.output);
                self.output += MONOSPACE_LOOKAHEAD;
            }
        }

        self.input += MONOSPACE_RUN;
        true
    }

    fn finish(self) -> ScanResult {
        for (kind, start) in self.pending.open_flags() {
            log::trace!("discarding unterminated {} flag opened at {}", kind, start);
        }
        ScanResult::new(self.plain, self.ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold(start: usize, end: usize) -> StyledRange {
        StyledRange::new(MarkupKind::Bold, start, end)
    }

    #[test]
    fn plain_text_passes_through() {
        let result = parse("Hello World");
        assert_eq!(result.plain_text(), "Hello World");
        assert!(result.ranges().is_empty());
    }

    #[test]
    fn bold_span() {
        let result = parse("*bold*");
        assert_eq!(result.plain_text(), "bold");
        assert_eq!(result.ranges(), &[bold(0, 4)]);
    }

    #[test]
    fn bold_with_trailing_text() {
        let result = parse("*bold* ");
        assert_eq!(result.plain_text(), "bold ");
        assert_eq!(result.ranges(), &[bold(0, 4)]);
    }

    #[test]
    fn toggle_does_not_nest() {
        let result = parse("*a*b*c*");
        assert_eq!(result.plain_text(), "abc");
        assert_eq!(result.ranges(), &[bold(0, 1), bold(2, 3)]);
    }

    #[test]
    fn kinds_may_overlap() {
        let result = parse("*_x_*");
        assert_eq!(result.plain_text(), "x");
        assert_eq!(
            result.ranges(),
            &[StyledRange::new(MarkupKind::Italic, 0, 1), bold(0, 1)]
        );
    }

    #[test]
    fn opener_without_same_line_closer_is_literal() {
        let result = parse("a *b\nc* d");
        assert_eq!(result.plain_text(), "a *b\nc* d");
        assert!(result.ranges().is_empty());
    }

    #[test]
    fn monospace_span() {
        let result = parse("abc ```code``` def");
        assert_eq!(result.plain_text(), "abc code def");
        assert_eq!(
            result.ranges(),
            &[StyledRange::new(MarkupKind::Monospace, 4, 8)]
        );
    }

    #[test]
    fn short_input_has_no_monospace() {
        let result = parse("```a``");
        assert_eq!(result.plain_text(), "```a``");
        assert!(result.ranges().is_empty());
    }

    #[test]
    fn unterminated_monospace_opener_vanishes() {
        let result = parse("```code");
        assert_eq!(result.plain_text(), "code");
        assert!(result.ranges().is_empty());
    }

    #[test]
    fn custom_markers() {
        let markers = Markers::new('+', '/', '-', '|').unwrap();
        let result = FlagScanner::new(markers).scan("+b+ /i/ *x*");
        assert_eq!(result.plain_text(), "b i *x*");
        assert_eq!(
            result.ranges(),
            &[bold(0, 1), StyledRange::new(MarkupKind::Italic, 2, 3)]
        );
    }

    #[test]
    fn unicode_offsets_count_chars() {
        let result = parse("日本 *語* x");
        assert_eq!(result.plain_text(), "日本 語 x");
        assert_eq!(result.ranges(), &[bold(3, 4)]);
    }
}
