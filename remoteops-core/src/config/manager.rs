//! Loads and saves `remoteops.toml`

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

use super::Settings;

/// Directory name under the user configuration directory
pub const CONFIG_DIR_NAME: &str = "remoteops";

/// Settings file name inside the configuration directory
pub const SETTINGS_FILE_NAME: &str = "remoteops.toml";

/// Reads and writes the settings file of one configuration directory
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the default configuration directory
    /// (`$XDG_CONFIG_HOME/remoteops` on Linux).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if the platform has no
    /// configuration directory for the current user.
    pub fn new() -> ConfigResult<Self> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join(CONFIG_DIR_NAME)))
    }

    /// Creates a manager for an explicit configuration directory
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the configuration directory
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the path of the settings file
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE_NAME)
    }

    /// Loads the settings file, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load_settings(&self) -> ConfigResult<Settings> {
        let path = self.settings_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let settings: Settings = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        settings.validate()?;

        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Writes `settings` to the settings file, creating the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or the file cannot be
    /// written.
    pub fn save_settings(&self, settings: &Settings) -> ConfigResult<()> {
        settings.validate()?;

        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Io {
            path: self.config_dir.clone(),
            source,
        })?;

        let content = toml::to_string_pretty(settings)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        let path = self.settings_path();
        fs::write(&path, content).map_err(|source| ConfigError::Io { path, source })
    }
}
