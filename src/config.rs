use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub navigation: NavigationConfig,
    pub sound: SoundConfig,
    pub window: WindowConfig,
    pub content: ContentConfig,
}

/// Page-turn timing and gesture thresholds
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Length of a page turn (in milliseconds); also the animation length
    pub transition_ms: u64,
    /// Minimum vertical wheel delta that turns a page (in points)
    pub wheel_threshold: f32,
    /// Minimum time between two wheel-triggered page turns (in milliseconds)
    pub wheel_cooldown_ms: u64,
    /// Minimum swipe distance that turns a page (in points)
    pub swipe_threshold: f32,
    /// Points per line for wheels that report in lines
    pub line_scroll_points: f32,
}

/// Page-turn sound
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SoundConfig {
    pub enabled: bool,
    /// Output gain, 0.0 to 1.0
    pub volume: f32,
}

/// Initial window size
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Where the book comes from
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ContentConfig {
    /// TOML book to read instead of the built-in one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            transition_ms: 450,
            wheel_threshold: 30.0,
            wheel_cooldown_ms: 800,
            swipe_threshold: 50.0,
            line_scroll_points: 40.0,
        }
    }
}

impl NavigationConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn wheel_cooldown(&self) -> Duration {
        Duration::from_millis(self.wheel_cooldown_ms)
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        SoundConfig {
            enabled: true,
            volume: 0.3,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 960.0,
            height: 720.0,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "folio")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or broken
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<PathBuf, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            Config::default().save_to(&path)?;
        }
        Ok(path)
    }
}
