//! Error types for marker configuration.
//!
//! Scanning itself never fails; only building a custom [`Markers`] set can.
//!
//! [`Markers`]: crate::kind::Markers

use thiserror::Error;

use crate::kind::MarkupKind;

/// Errors that can occur when building a custom marker set.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarkersError {
    /// Two kinds were assigned the same delimiter character.
    #[error("marker {marker:?} is used for both {first} and {second}")]
    Duplicate {
        marker: char,
        first: MarkupKind,
        second: MarkupKind,
    },

    /// A line terminator cannot delimit inline markup.
    #[error("line terminator {0:?} cannot be used as a marker")]
    LineTerminator(char),

    /// Whitespace cannot delimit inline markup.
    #[error("whitespace {0:?} cannot be used as a marker")]
    Whitespace(char),
}
