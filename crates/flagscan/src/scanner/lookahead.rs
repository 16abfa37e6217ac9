//! Lookahead helpers used while scanning.

/// Returns true for characters that end a line.
pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Returns true if `marker` occurs in `chars[from..]` before the next line
/// terminator.
pub(crate) fn has_marker_same_line(chars: &[char], marker: char, from: usize) -> bool {
    chars
        .iter()
        .skip(from)
        .take_while(|&&c| !is_line_terminator(c))
        .any(|&c| c == marker)
}

/// Returns true if `chars[at]` starts a run of `len` copies of `marker`.
pub(crate) fn is_run(chars: &[char], marker: char, at: usize, len: usize) -> bool {
    chars
        .get(at..at + len)
        .is_some_and(|run| run.iter().all(|&c| c == marker))
}
