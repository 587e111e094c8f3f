//! Load-time errors
//!
//! The tick loop itself is infallible; everything that can go wrong is caught
//! while reading configuration and level data, before the first tick.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("no levels defined")]
    NoLevels,

    #[error("level {level}: {what} #{index} has a non-finite or negative extent")]
    InvalidRect {
        level: usize,
        what: &'static str,
        index: usize,
    },

    #[error("level {level}: {what} is not finite")]
    NonFinite { level: usize, what: &'static str },

    #[error("level {level}: moving obstacle #{index} has invalid amplitude or speed")]
    InvalidMotion { level: usize, index: usize },

    #[error("failed to parse level data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
}
