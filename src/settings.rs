//! Settings persistence using TOML
//!
//! Stores settings in ~/.config/tetris-stack/settings.toml (or platform equivalent)

use crate::mode::SupplyMode;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Smallest capacity either container accepts
pub const MIN_CAPACITY: usize = 1;
/// Largest capacity the settings allow (keeps codes and layout readable)
pub const MAX_CAPACITY: usize = 9;

/// Simulator settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Container sizes
    pub supply: SupplySettings,
    /// Session defaults
    pub session: SessionSettings,
}

/// Container capacities
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplySettings {
    /// Pieces held in the lookahead queue
    pub queue_capacity: usize,
    /// Pieces the reserve stack can hold
    pub reserve_capacity: usize,
}

/// Defaults applied when a session starts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Mode highlighted first in the mode menu
    pub default_mode: SupplyMode,
    /// Fixed RNG seed; a fresh one is drawn each session when unset
    pub seed: Option<u64>,
}

impl Default for SupplySettings {
    fn default() -> Self {
        Self {
            queue_capacity: 5,
            reserve_capacity: 3,
        }
    }
}

impl SupplySettings {
    /// Pull both capacities into the supported range
    pub fn clamp(&mut self) {
        self.queue_capacity = self.queue_capacity.clamp(MIN_CAPACITY, MAX_CAPACITY);
        self.reserve_capacity = self.reserve_capacity.clamp(MIN_CAPACITY, MAX_CAPACITY);
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "tetris-stack", "tetris-stack")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from file, or create default
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                let settings = Self::from_toml(&contents);
                debug!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                debug!(path = %path.display(), "no settings file: {}", e);
                Self::default()
            }
        }
    }

    /// Parse settings text, falling back to defaults on error
    pub fn from_toml(contents: &str) -> Self {
        let mut settings: Settings = match toml::from_str(contents) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Malformed settings, using defaults: {}", e);
                Self::default()
            }
        };
        settings.supply.clamp();
        settings
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), String> {
        let Some(dir) = Self::config_dir() else {
            return Err("Could not determine config directory".to_string());
        };

        let Some(path) = Self::settings_path() else {
            return Err("Could not determine settings path".to_string());
        };

        // Create directory if needed
        fs::create_dir_all(&dir).map_err(|e| format!("Failed to create config dir: {}", e))?;

        let contents =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {}", e))?;

        fs::write(&path, contents).map_err(|e| format!("Failed to write settings: {}", e))?;

        debug!(path = %path.display(), "saved settings");
        Ok(())
    }
}
