//! CLI error types and exit codes.

/// Exit codes for CLI failures that are not a remote exit status
pub mod exit_codes {
    /// General error - configuration or operation validation errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Usage error - a required option for the chosen operation is missing
    pub const USAGE_ERROR: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing or malformed command-line option
    #[error("{0}")]
    Usage(String),

    /// The operation was rejected before anything ran
    #[error(transparent)]
    Operation(remoteops_core::RemoteOpsError),
}

impl From<remoteops_core::RemoteOpsError> for CliError {
    fn from(err: remoteops_core::RemoteOpsError) -> Self {
        use remoteops_core::RemoteOpsError;
        match err {
            RemoteOpsError::Config(e) => Self::Config(e.to_string()),
            other => Self::Operation(other),
        }
    }
}

impl From<remoteops_core::ConfigError> for CliError {
    fn from(err: remoteops_core::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 1: General error (configuration, validation)
    /// - 2: Usage error (missing operation option)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => exit_codes::USAGE_ERROR,
            Self::Config(_) | Self::Operation(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
