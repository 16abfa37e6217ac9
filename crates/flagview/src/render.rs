//! Rendering of formatted text into styled runs.
//!
//! The scanner never deals with fonts. The monospace font family is a
//! rendering concern, injected here through [`RenderConfig`].

use crossterm::style::{Attribute, ContentStyle};
use flagscan::{Decorations, FormattedText};

/// Font used for monospace runs when none is configured.
pub const DEFAULT_MONOSPACE_FONT: &str = "RobotoMono-Regular";

/// Rendering settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Font family substituted over monospace ranges.
    pub monospace_font: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            monospace_font: DEFAULT_MONOSPACE_FONT.to_string(),
        }
    }
}

/// A run of text sharing one set of decorations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledRun {
    /// The text of the run.
    pub text: String,
    /// Decorations applied over the whole run.
    pub decorations: Decorations,
    /// Font family override, set on monospace runs.
    pub font: Option<String>,
}

impl StyledRun {
    /// Returns true if the run carries no decoration.
    pub fn is_plain(&self) -> bool {
        self.decorations.is_empty()
    }
}

/// Turns [`FormattedText`] into runs or terminal output.
///
/// # Examples
///
/// ```
/// use flagscan::{Decorations, format};
/// use flagview::{RenderConfig, Renderer};
///
/// let renderer = Renderer::new(RenderConfig {
///     monospace_font: "Fira Mono".to_string(),
/// });
/// let formatted = format("run ```ls``` now").unwrap();
/// let runs = renderer.runs(&formatted);
///
/// assert_eq!(runs[1].text, "ls");
/// assert_eq!(runs[1].decorations, Decorations::MONOSPACE);
/// assert_eq!(runs[1].font.as_deref(), Some("Fira Mono"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The rendering configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Split `formatted` into decorated runs.
    pub fn runs(&self, formatted: &FormattedText) -> Vec<StyledRun> {
        formatted
            .segments()
            .map(|(text, decorations)| StyledRun {
                text: text.to_string(),
                decorations,
                font: decorations
                    .is_monospace()
                    .then(|| self.config.monospace_font.clone()),
            })
            .collect()
    }

    /// Render `formatted` as text with ANSI attributes.
    ///
    /// Terminal text is already fixed-width, so monospace runs get no
    /// attribute of their own.
    pub fn to_ansi(&self, formatted: &FormattedText) -> String {
        let mut out = String::with_capacity(formatted.text().len());
        for (text, decorations) in formatted.segments() {
            let style = ansi_style(decorations);
            if style.attributes.is_empty() {
                out.push_str(text);
            } else {
                out.push_str(&style.apply(text).to_string());
            }
        }
        out
    }
}

fn ansi_style(decorations: Decorations) -> ContentStyle {
    let mut style = ContentStyle::new();
    if decorations.contains(Decorations::BOLD) {
        style.attributes.set(Attribute::Bold);
    }
    if decorations.contains(Decorations::ITALIC) {
        style.attributes.set(Attribute::Italic);
    }
    if decorations.contains(Decorations::STRIKETHROUGH) {
        style.attributes.set(Attribute::CrossedOut);
    }
    style
}
