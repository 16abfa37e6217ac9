use thiserror::Error;

use flagscan::MarkersError;
use flagview::EditError;

#[derive(Error, Debug)]
pub enum FlagtextError {
    #[error("Config file error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid markers: {0}")]
    Markers(#[from] MarkersError),

    #[error("Unknown range guard {0:?}, expected \"strict\" or \"inclusive\"")]
    InvalidGuard(String),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    #[error("A logger was already installed")]
    Logger(#[from] log::SetLoggerError),
}

/// Result alias used by the `flagtext` facade.
pub type Result<T> = std::result::Result<T, FlagtextError>;
