//! Error types for live editing.

use thiserror::Error;

/// Errors that can occur when applying an edit.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditError {
    /// The edited region does not lie inside the current text.
    #[error("edit {start}..{end} is outside the text of {len} chars")]
    OutOfBounds { start: usize, end: usize, len: usize },
}
