//! TOML configuration for markers, the range guard and rendering.
//!
//! ```toml
//! [markers]
//! bold = "*"
//! italic = "_"
//! strikethrough = "~"
//! monospace = "`"
//!
//! [ranges]
//! guard = "strict"
//!
//! [render]
//! monospace_font = "RobotoMono-Regular"
//! ```
//!
//! Every section and key is optional.

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use flagscan::{FormatOptions, Markers, RangeGuard};
use flagview::RenderConfig;
use flagview::render::DEFAULT_MONOSPACE_FONT;

use crate::error::{FlagtextError, Result};

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub markers: MarkersConfig,
    pub ranges: RangesConfig,
    pub render: RenderSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MarkersConfig {
    pub bold: char,
    pub italic: char,
    pub strikethrough: char,
    pub monospace: char,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            bold: Markers::DEFAULT_BOLD,
            italic: Markers::DEFAULT_ITALIC,
            strikethrough: Markers::DEFAULT_STRIKETHROUGH,
            monospace: Markers::DEFAULT_MONOSPACE,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RangesConfig {
    /// `"strict"` or `"inclusive"`.
    pub guard: String,
}

impl Default for RangesConfig {
    fn default() -> Self {
        Self {
            guard: "strict".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenderSection {
    pub monospace_font: String,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            monospace_font: DEFAULT_MONOSPACE_FONT.to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Parse config from TOML source.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validated markers and guard for the scanner.
    pub fn format_options(&self) -> Result<FormatOptions> {
        let m = &self.markers;
        let markers = Markers::new(m.bold, m.italic, m.strikethrough, m.monospace)?;
        let guard = RangeGuard::from_name(&self.ranges.guard)
            .ok_or_else(|| FlagtextError::InvalidGuard(self.ranges.guard.clone()))?;
        Ok(FormatOptions::new(markers, guard))
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            monospace_font: self.render.monospace_font.clone(),
        }
    }
}
