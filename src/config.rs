//! Game configuration
//!
//! Window and UI settings loaded from JSON. Every field has a default, so a
//! config file only needs the values it changes:
//!
//! ```json
//! {
//!   "window": { "fps": 30 },
//!   "ui": { "font_scale": 4 }
//! }
//! ```
//!
//! Lookup order (see [`GameConfig::load`]):
//! 1. An explicit path (from `--config`), which must exist and parse
//! 2. `<config dir>/jumpy-jet/config.json`, if present
//! 3. Built-in defaults

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory name under the platform config dir
pub const APP_DIR: &str = "jumpy-jet";
pub const CONFIG_FILE: &str = "config.json";

/// Errors that can occur while loading configuration
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read
    Io(std::io::Error),

    /// File is not valid config JSON
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Config IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Config parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical (unscaled) width the UI is laid out in
    pub logical_width: u32,
    pub logical_height: u32,
    pub fps: u32,
    /// Upper bound for the automatic integer window scale
    pub max_scale: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Jumpy Jet".to_string(),
            logical_width: 540,
            logical_height: 960,
            fps: 60,
            max_scale: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Sprite atlas description; its texture path is relative to this file
    pub atlas: PathBuf,
    pub font_scale: u32,
    /// RGB
    pub clear_color: [u8; 3],
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            atlas: PathBuf::from("assets/ui/ui_images.json"),
            font_scale: 3,
            clear_color: [78, 192, 202],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub ui: UiConfig,
}

impl GameConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves configuration following the lookup order
    ///
    /// An explicit path that fails to load is an error. A broken file in the
    /// user config dir is logged and replaced with defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load_from_file(path)?;
            tracing::info!("Loaded config from {}", path.display());
            return Ok(config);
        }

        if let Some(path) = Self::user_config_path().filter(|p| p.exists()) {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    return Ok(config);
                }
                Err(e) => {
                    tracing::warn!("Ignoring {}: {}", path.display(), e);
                }
            }
        }

        tracing::debug!("Using default config");
        Ok(GameConfig::default())
    }

    /// `<config dir>/jumpy-jet/config.json`, if the platform has a config dir
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Frame duration for the configured FPS (0 is treated as 1)
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(1) / self.window.fps.max(1)
    }
}
