//! Settings file model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::retry::{DEFAULT_RETRIES, DEFAULT_RETRY_SLEEP_SECS};
use crate::session::{DEFAULT_SCP_PROGRAM, DEFAULT_SSH_PROGRAM};
use crate::tracing::TracingLevel;

/// Contents of `remoteops.toml`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Transport programs and options
    pub transport: TransportSettings,
    /// Reachability probe retries
    pub retry: RetrySettings,
    /// Log output
    pub logging: LoggingSettings,
}

impl Settings {
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.transport.ssh_program.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "transport.ssh_program".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.transport.scp_program.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "transport.scp_program".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self
            .logging
            .level
            .as_deref()
            .is_some_and(|level| level.parse::<TracingLevel>().is_err())
        {
            return Err(ConfigError::Invalid {
                key: "logging.level".to_string(),
                reason: "expected one of error, warn, info, debug, trace".to_string(),
            });
        }
        Ok(())
    }
}

/// `[transport]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportSettings {
    /// Remote shell program
    pub ssh_program: String,
    /// Remote copy program
    pub scp_program: String,
    /// Options passed to every transport command, before command-line ones
    pub options: Vec<String>,
    /// Run transport commands through the host shell
    pub use_shell: bool,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            ssh_program: DEFAULT_SSH_PROGRAM.to_string(),
            scp_program: DEFAULT_SCP_PROGRAM.to_string(),
            options: Vec::new(),
            use_shell: false,
        }
    }
}

/// `[retry]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    /// Additional probe attempts
    pub retries: u32,
    /// Seconds to wait between probe attempts
    pub retry_sleep_secs: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            retry_sleep_secs: DEFAULT_RETRY_SLEEP_SECS,
        }
    }
}

/// `[logging]` table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level name; `warn` when unset
    pub level: Option<String>,
    /// `EnvFilter` directive string overriding `level`
    pub filter: Option<String>,
    /// Write the log to this file instead of stderr
    pub file: Option<PathBuf>,
}
