//! Session configuration.

use crate::path::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Default delay between playback frames, in milliseconds.
pub const DEFAULT_PLAYBACK_INTERVAL_MS: u64 = 500;

/// Alpha applied to the ghost copy of the previous frame.
pub const DEFAULT_GHOST_ALPHA: u8 = 100;

/// Pointers allowed on the surface while drawing.
pub const DEFAULT_MAX_POINTERS: usize = 1;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables of an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Delay between two frames during playback.
    pub playback_interval_ms: u64,
    /// Alpha of the ghost layer derived when a frame is created or copied.
    pub ghost_alpha: u8,
    /// Paint color before any color is picked.
    pub initial_color: Rgb,
    /// Pointer samples with more simultaneous pointers are ignored.
    pub max_pointers: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            playback_interval_ms: DEFAULT_PLAYBACK_INTERVAL_MS,
            ghost_alpha: DEFAULT_GHOST_ALPHA,
            initial_color: Rgb::BLUE,
            max_pointers: DEFAULT_MAX_POINTERS,
        }
    }
}

impl SessionConfig {
    pub fn playback_interval(&self) -> Duration {
        Duration::from_millis(self.playback_interval_ms)
    }

    /// Builder-style override of the playback interval.
    pub fn with_playback_interval(mut self, interval: Duration) -> Self {
        self.playback_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Check the values that would make a session misbehave.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.playback_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "playback_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.max_pointers == 0 {
            return Err(ConfigError::Invalid("max_pointers must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded session config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
