//! Boundary guard applied when turning scanned ranges into decorations.

use crate::range::StyledRange;

/// Decides which scanned ranges are applied to the plain text.
///
/// The default, [`RangeGuard::Strict`], keeps the historical behavior of
/// the chat formatter: a range is only applied when its end lies strictly
/// inside the text, so `"*bold*"` renders unstyled while `"*bold* "`
/// renders bold. [`RangeGuard::Inclusive`] is the corrected check that
/// also accepts ranges ending exactly at the end of the text.
///
/// Both modes reject inverted ranges.
///
/// # Examples
///
/// ```
/// use flagscan::{MarkupKind, RangeGuard, StyledRange};
///
/// let range = StyledRange::new(MarkupKind::Bold, 0, 4);
/// assert!(!RangeGuard::Strict.accepts(&range, 4));
/// assert!(RangeGuard::Strict.accepts(&range, 5));
/// assert!(RangeGuard::Inclusive.accepts(&range, 4));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RangeGuard {
    /// Reject ranges whose end is not less than the text length.
    #[default]
    Strict,
    /// Reject only ranges whose end exceeds the text length.
    Inclusive,
}

impl RangeGuard {
    /// Returns true if `range` may be applied to a text of `len` chars.
    pub fn accepts(self, range: &StyledRange, len: usize) -> bool {
        if range.start > range.end {
            return false;
        }
        match self {
            RangeGuard::Strict => range.end < len,
            RangeGuard::Inclusive => range.end <= len,
        }
    }

    /// Parse a guard name as used in configuration files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(RangeGuard::Strict),
            "inclusive" => Some(RangeGuard::Inclusive),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::MarkupKind;

    fn bold(start: usize, end: usize) -> StyledRange {
        StyledRange::new(MarkupKind::Bold, start, end)
    }

    #[test]
    fn strict_rejects_range_reaching_end() {
        assert!(!RangeGuard::Strict.accepts(&bold(0, 4), 4));
        assert!(!RangeGuard::Strict.accepts(&bold(0, 6), 4));
        assert!(RangeGuard::Strict.accepts(&bold(0, 3), 4));
    }

    #[test]
    fn inclusive_accepts_range_reaching_end() {
        assert!(RangeGuard::Inclusive.accepts(&bold(0, 4), 4));
        assert!(!RangeGuard::Inclusive.accepts(&bold(0, 5), 4));
    }

    #[test]
    fn inverted_range_rejected_by_both() {
        assert!(!RangeGuard::Strict.accepts(&bold(3, 1), 10));
        assert!(!RangeGuard::Inclusive.accepts(&bold(3, 1), 10));
    }

    #[test]
    fn empty_range_inside_text_is_accepted() {
        assert!(RangeGuard::Strict.accepts(&bold(2, 2), 10));
    }

    #[test]
    fn guard_names() {
        assert_eq!(RangeGuard::from_name("strict"), Some(RangeGuard::Strict));
        assert_eq!(RangeGuard::from_name(" Inclusive "), Some(RangeGuard::Inclusive));
        assert_eq!(RangeGuard::from_name("loose"), None);
        assert_eq!(RangeGuard::default(), RangeGuard::Strict);
    }
}
