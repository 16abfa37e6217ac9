//! Inline delimiter scanner for chat-style text formatting.
//!
//! This crate turns text like `*bold* and _italic_` into plain display text
//! plus a list of styled ranges that a rendering layer can apply as
//! decorations.
//!
//! # Overview
//!
//! Four markup kinds are recognised, each toggled by its own delimiter:
//!
//! - `*text*` - Bold
//! - `_text_` - Italic
//! - `~text~` - Strikethrough
//! - ```` ```text``` ```` - Monospace (a run of three backticks)
//!
//! Bold, italic and strikethrough only open when a matching delimiter exists
//! later on the same line. Markup never nests within one kind: a second
//! delimiter closes the pending one. Different kinds may overlap freely.
//!
//! Malformed markup is never an error. It simply produces no range.
//!
//! # Usage
//!
//! ```
//! use flagscan::{MarkupKind, format, parse};
//!
//! // Raw scan: every closed range, before the boundary guard.
//! let scan = parse("*bold* text");
//! assert_eq!(scan.plain_text(), "bold text");
//! assert_eq!(scan.ranges()[0].kind, MarkupKind::Bold);
//!
//! // Formatting: ranges that survive the boundary guard.
//! let formatted = format("*bold* text").unwrap();
//! assert_eq!(formatted.text(), "bold text");
//! assert_eq!(formatted.ranges().len(), 1);
//!
//! // Blank input means "no formatting".
//! assert!(format("   ").is_none());
//! ```
//!
//! Offsets are counted in `char`s of the plain text. Use
//! [`StyledRange::byte_range`] to slice the text.

pub mod error;
pub mod format;
pub mod guard;
pub mod kind;
pub mod range;
pub mod scanner;
pub mod style;

// Re-export main types at crate root
pub use error::MarkersError;
pub use format::{FormatOptions, FormattedText, SegmentIterator, format, format_with};
pub use guard::RangeGuard;
pub use kind::{Markers, MarkupKind};
pub use range::StyledRange;
pub use scanner::{FlagScanner, ScanResult, parse};
pub use style::Decorations;
