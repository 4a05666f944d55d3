//! Configuration management for remoteops
//!
//! This module provides the `ConfigManager` for loading and saving the
//! settings file in TOML format.

mod manager;
pub mod settings;

pub use manager::{CONFIG_DIR_NAME, ConfigManager, SETTINGS_FILE_NAME};
pub use settings::{LoggingSettings, RetrySettings, Settings, TransportSettings};
