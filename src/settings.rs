//! Player preferences
//!
//! Read from an optional JSON file. Physics constants are not configurable
//! here; see `GameConfig`.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::{AI_DIFFICULTY, TICK_RATE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Opponent skill, 0.0 - 1.0
    pub ai_difficulty: f32,
    /// Fixed RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Simulation ticks per second
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_difficulty: AI_DIFFICULTY,
            seed: None,
            tick_rate: TICK_RATE,
        }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(ConfigError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "cannot read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "malformed settings: {e}"),
            SettingsError::Invalid(e) => write!(f, "invalid settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl From<ConfigError> for SettingsError {
    fn from(e: ConfigError) -> Self {
        SettingsError::Invalid(e)
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        settings.ai_difficulty = settings.ai_difficulty.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.ai_difficulty.is_finite() {
            return Err(ConfigError::NotPositive {
                field: "ai_difficulty",
                value: self.ai_difficulty,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::NotPositive {
                field: "tick_rate",
                value: 0.0,
            });
        }
        Ok(())
    }
}
