//! Shared helpers for the command handlers.

use std::path::Path;

use remoteops_core::config::{ConfigManager, Settings};
use remoteops_core::tracing::{TracingConfig, TracingLevel, TracingOutput};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Splits each `--ssh-options` value into separate arguments, keeping the
/// order in which they were given.
pub fn split_ssh_options(values: &[String]) -> Result<Vec<String>, CliError> {
    let mut options = Vec::new();
    for value in values {
        let words = shell_words::split(value)
            .map_err(|e| CliError::Usage(format!("Invalid --ssh-options '{value}': {e}")))?;
        options.extend(words);
    }
    Ok(options)
}

/// Picks the log level: `--debug` wins, then the settings file, then `warn`.
/// Logs go to stderr unless the settings file names a log file.
pub fn tracing_config(debug: bool, settings: &Settings) -> TracingConfig {
    let level = if debug {
        TracingLevel::Debug
    } else {
        settings
            .logging
            .level
            .as_deref()
            .and_then(|level| level.parse::<TracingLevel>().ok())
            .unwrap_or_default()
    };

    let mut config = TracingConfig::new().with_level(level);
    if let Some(file) = &settings.logging.file {
        config = config.with_output(TracingOutput::File(file.clone()));
    }
    match (&settings.logging.filter, debug) {
        (Some(filter), false) => config.with_filter(filter.clone()),
        _ => config,
    }
}
