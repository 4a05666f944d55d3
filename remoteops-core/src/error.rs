//! Error types for remoteops-core.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for remote operations
#[derive(Debug, Error)]
pub enum RemoteOpsError {
    /// The operation name is not one of the supported kinds
    #[error("Invalid operation '{0}' specified, choose from shell, copy_to, copy_from")]
    InvalidOperation(String),

    /// The local destination directory for a pull does not exist
    #[error("Local directory '{}' does not exist", .0.display())]
    LocalDirectoryMissing(PathBuf),

    /// The command or file list could not be used
    #[error("Invalid operation parameters: {0}")]
    InvalidParams(String),

    /// Settings could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while reading or writing the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration directory could be determined for this user
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// Reading or writing the settings file failed
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// Path of the settings file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`crate::config::Settings`]
    #[error("Failed to parse {}: {reason}", path.display())]
    Parse {
        /// Path of the settings file
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    /// A settings value is out of range
    #[error("Invalid setting {key}: {reason}")]
    Invalid {
        /// Dotted key of the offending setting
        key: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Result type for remote operations
pub type RemoteOpsResult<T> = Result<T, RemoteOpsError>;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
