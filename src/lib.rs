//! Lightweight inline markup for chat-style text.
//!
//! `flagtext` recognizes four delimiter kinds, `*bold*`, `_italic_`,
//! `~strike~` and ```` ```mono``` ````, strips them from the text and reports
//! where each style applies. The work is split across two crates, both
//! re-exported here:
//!
//! - [`flagscan`]: the scanner, range guard and [`FormattedText`].
//! - [`flagview`]: styled runs, ANSI output and the live-editing
//!   [`FormattingEditor`].
//!
//! This crate adds TOML [`config`], a crate-level [`error`] type and a file
//! logger in [`log_init`].
//!
//! # Example
//!
//! ```
//! use flagtext::{Config, Formatter};
//!
//! let config = Config::from_toml_str(r#"
//!     [ranges]
//!     guard = "inclusive"
//! "#).unwrap();
//! let formatter = Formatter::from_config(&config).unwrap();
//!
//! let formatted = formatter.format("*done*").unwrap();
//! assert_eq!(formatted.text(), "done");
//! assert_eq!(formatted.ranges().len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod log_init;

pub use flagscan::{
    Decorations, FlagScanner, FormatOptions, FormattedText, Markers, MarkersError, MarkupKind,
    RangeGuard, ScanResult, StyledRange, format, format_with, parse,
};
pub use flagview::{
    EditError, EditObserver, FormattingEditor, RenderConfig, Renderer, StyledRun, TextEdit,
};

pub use config::Config;
pub use error::{FlagtextError, Result};

/// Format options and a renderer, built together from one [`Config`].
#[derive(Clone, Debug, Default)]
pub struct Formatter {
    options: FormatOptions,
    renderer: Renderer,
}

impl Formatter {
    pub fn new(options: FormatOptions, render: RenderConfig) -> Self {
        Self {
            options,
            renderer: Renderer::new(render),
        }
    }

    /// Build a formatter from configuration, validating markers and guard.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.format_options()?, config.render_config()))
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Format `text`, or `None` if it is blank.
    pub fn format(&self, text: &str) -> Option<FormattedText> {
        format_with(text, &self.options)
    }

    /// Styled runs for `text`. Blank text yields a single plain run, or
    /// none when empty.
    pub fn runs(&self, text: &str) -> Vec<StyledRun> {
        let formatted = self
            .format(text)
            .unwrap_or_else(|| FormattedText::plain(text));
        self.renderer.runs(&formatted)
    }

    /// `text` with its markup rendered as ANSI attributes.
    pub fn to_ansi(&self, text: &str) -> String {
        match self.format(text) {
            Some(formatted) => self.renderer.to_ansi(&formatted),
            None => text.to_string(),
        }
    }

    /// An editor that re-formats with these options after every edit.
    pub fn editor(&self, text: &str) -> FormattingEditor {
        FormattingEditor::new(text, self.options)
    }
}
