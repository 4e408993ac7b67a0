//! Configuration management for paydash.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::view::Tab;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "paydash";

/// Default log file name.
const LOG_FILE_NAME: &str = "paydash.log";

/// Smallest frame the layout can hold.
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 12;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PAYDASH_`, sections split on `__`)
/// 2. TOML config file at `~/.config/paydash/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interactive dashboard settings.
    pub ui: UiConfig,
    /// Headless rendering settings.
    pub render: RenderConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Interactive dashboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tab shown at startup.
    pub initial_tab: Tab,
    /// Event poll interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Capture mouse clicks on the tab bar.
    pub mouse: bool,
    /// Show the data sources footer.
    pub show_sources: bool,
}

/// Headless rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Frame width in columns.
    pub width: u16,
    /// Frame height in rows.
    pub height: u16,
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file used while the dashboard owns the terminal.
    /// Defaults to `~/.local/share/paydash/paydash.log`
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_tab: Tab::Overview,
            tick_rate_ms: 250,
            mouse: true,
            show_sources: true,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 120,
            height: 60,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("PAYDASH_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms == 0 {
            return Err(Error::ConfigValidation {
                message: "tick_rate_ms must be greater than 0".to_string(),
            });
        }

        if self.render.width < MIN_WIDTH {
            return Err(Error::ConfigValidation {
                message: format!(
                    "render width ({}) must be at least {MIN_WIDTH}",
                    self.render.width
                ),
            });
        }

        if self.render.height < MIN_HEIGHT {
            return Err(Error::ConfigValidation {
                message: format!(
                    "render height ({}) must be at least {MIN_HEIGHT}",
                    self.render.height
                ),
            });
        }

        Ok(())
    }

    /// Get the log file path, resolving defaults if not set.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(LOG_FILE_NAME))
    }

    /// Get the event poll interval as a Duration.
    #[must_use]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }
}
