//! Host-side glue for [`flagscan`] formatted text.
//!
//! The scanner only produces plain text and ranges. This crate covers what a
//! host widget does with them:
//!
//! - [`render`] turns a [`FormattedText`] into styled runs, with the
//!   monospace font injected through [`RenderConfig`], or into ANSI text.
//! - [`editor`] re-formats the whole text after every edit and notifies a
//!   chain of [`EditObserver`]s before, during and after the re-parse.
//!
//! # Usage
//!
//! ```
//! use flagview::{FormattingEditor, Renderer};
//! use flagscan::FormatOptions;
//!
//! let mut editor = FormattingEditor::new("*hi* there", FormatOptions::default());
//! let runs = Renderer::default().runs(editor.formatted());
//! assert_eq!(runs[0].text, "hi");
//!
//! editor.insert(editor.len(), "!").unwrap();
//! assert_eq!(editor.text(), "hi there!");
//! ```
//!
//! [`FormattedText`]: flagscan::FormattedText

pub mod editor;
pub mod error;
pub mod observer;
pub mod render;

pub use editor::{FormattingEditor, TextEdit};
pub use error::EditError;
pub use observer::{EditObserver, ObserverChain};
pub use render::{RenderConfig, Renderer, StyledRun};
