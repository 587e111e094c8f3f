//! Runtime configuration
//!
//! Loaded once at startup from an optional JSON file; every field has a
//! default so partial files are fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::error::SettingsError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Visible width in world units (drives camera framing)
    pub viewport_width: f32,
    pub viewport_height: f32,

    /// Seed for particle randomness
    pub seed: u64,

    /// Custom level set (JSON); built-in levels when unset
    pub levels_path: Option<PathBuf>,

    /// Particle effects (purely visual)
    pub particles: bool,

    /// Ticks to run in headless mode before stopping
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            seed: 0x5EED,
            levels_path: None,
            particles: true,
            max_ticks: 60 * 60,
        }
    }
}

impl Settings {
    pub fn from_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !ok(self.viewport_width) || !ok(self.viewport_height) {
            return Err(SettingsError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        Ok(())
    }
}
