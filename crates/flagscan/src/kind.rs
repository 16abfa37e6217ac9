//! Markup kinds and their delimiter characters.

use std::fmt;

use crate::error::MarkersError;
use crate::scanner::lookahead::is_line_terminator;
use crate::style::Decorations;

/// One of the four supported inline styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    /// Strong weight.
    Bold,
    /// Oblique slant.
    Italic,
    /// Line through the text.
    Strikethrough,
    /// Fixed-width font. Delimited by a run of three markers.
    Monospace,
}

impl MarkupKind {
    /// All kinds, in slot order.
    pub const ALL: [MarkupKind; 4] = [
        MarkupKind::Bold,
        MarkupKind::Italic,
        MarkupKind::Strikethrough,
        MarkupKind::Monospace,
    ];

    /// Stable index of this kind, used for per-kind slots.
    pub const fn index(self) -> usize {
        match self {
            MarkupKind::Bold => 0,
            MarkupKind::Italic => 1,
            MarkupKind::Strikethrough => 2,
            MarkupKind::Monospace => 3,
        }
    }

    /// Number of consecutive markers that open or close this kind.
    pub const fn run_length(self) -> usize {
        match self {
            MarkupKind::Monospace => 3,
            _ => 1,
        }
    }

    /// The decoration a renderer applies for this kind.
    pub fn decoration(self) -> Decorations {
        match self {
            MarkupKind::Bold => Decorations::BOLD,
            MarkupKind::Italic => Decorations::ITALIC,
            MarkupKind::Strikethrough => Decorations::STRIKETHROUGH,
            MarkupKind::Monospace => Decorations::MONOSPACE,
        }
    }
}

impl fmt::Display for MarkupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarkupKind::Bold => "bold",
            MarkupKind::Italic => "italic",
            MarkupKind::Strikethrough => "strikethrough",
            MarkupKind::Monospace => "monospace",
        };
        f.write_str(name)
    }
}

/// The delimiter character assigned to each markup kind.
///
/// # Examples
///
/// ```
/// use flagscan::{Markers, MarkupKind};
///
/// let markers = Markers::default();
/// assert_eq!(markers.kind_of('*'), Some(MarkupKind::Bold));
/// assert_eq!(markers.kind_of('`'), Some(MarkupKind::Monospace));
/// assert_eq!(markers.kind_of('a'), None);
///
/// let custom = Markers::new('+', '/', '-', '|').unwrap();
/// assert_eq!(custom.marker(MarkupKind::Italic), '/');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Markers {
    chars: [char; 4],
}

impl Markers {
    pub const DEFAULT_BOLD: char = '*';
    pub const DEFAULT_ITALIC: char = '_';
    pub const DEFAULT_STRIKETHROUGH: char = '~';
    pub const DEFAULT_MONOSPACE: char = '`';

    /// Build a marker set, rejecting ambiguous or line-breaking markers.
    pub fn new(
        bold: char,
        italic: char,
        strikethrough: char,
        monospace: char,
    ) -> Result<Self, MarkersError> {
        let chars = [bold, italic, strikethrough, monospace];

        for (idx, &marker) in chars.iter().enumerate() {
            if is_line_terminator(marker) {
                return Err(MarkersError::LineTerminator(marker));
            }
            if marker.is_whitespace() {
                return Err(MarkersError::Whitespace(marker));
            }
            if let Some(prev) = chars[..idx].iter().position(|&c| c == marker) {
                return Err(MarkersError::Duplicate {
                    marker,
                    first: MarkupKind::ALL[prev],
                    second: MarkupKind::ALL[idx],
                });
            }
        }

        Ok(Self { chars })
    }

    /// The delimiter character for `kind`.
    pub fn marker(&self, kind: MarkupKind) -> char {
        self.chars[kind.index()]
    }

    /// The kind delimited by `c`, if any.
    pub fn kind_of(&self, c: char) -> Option<MarkupKind> {
        self.chars
            .iter()
            .position(|&m| m == c)
            .map(|idx| MarkupKind::ALL[idx])
    }

    /// Returns true if `c` is any of the four markers.
    pub fn is_marker(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            chars: [
                Self::DEFAULT_BOLD,
                Self::DEFAULT_ITALIC,
                Self::DEFAULT_STRIKETHROUGH,
                Self::DEFAULT_MONOSPACE,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_indices_match_all_order() {
        for (idx, kind) in MarkupKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), idx);
        }
    }

    #[test]
    fn default_markers() {
        let markers = Markers::default();
        assert_eq!(markers.marker(MarkupKind::Bold), '*');
        assert_eq!(markers.marker(MarkupKind::Italic), '_');
        assert_eq!(markers.marker(MarkupKind::Strikethrough), '~');
        assert_eq!(markers.marker(MarkupKind::Monospace), '`');
    }

    #[test]
    fn kind_of_round_trips_markers() {
        let markers = Markers::default();
        for kind in MarkupKind::ALL {
            assert_eq!(markers.kind_of(markers.marker(kind)), Some(kind));
        }
        assert!(!markers.is_marker('#'));
    }

    #[test]
    fn duplicate_marker_rejected() {
        let err = Markers::new('*', '*', '~', '`').unwrap_err();
        assert_eq!(
            err,
            MarkersError::Duplicate {
                marker: '*',
                first: MarkupKind::Bold,
                second: MarkupKind::Italic,
            }
        );
        assert_eq!(
            err.to_string(),
            "marker '*' is used for both bold and italic"
        );
    }

    #[test]
    fn newline_marker_rejected() {
        let err = Markers::new('*', '_', '\n', '`').unwrap_err();
        assert_eq!(err, MarkersError::LineTerminator('\n'));
    }

    #[test]
    fn whitespace_marker_rejected() {
        let err = Markers::new('*', '_', '~', ' ').unwrap_err();
        assert_eq!(err, MarkersError::Whitespace(' '));
    }

    #[test]
    fn monospace_run_length() {
        assert_eq!(MarkupKind::Monospace.run_length(), 3);
        assert_eq!(MarkupKind::Bold.run_length(), 1);
    }
}
