//! Connection parameters for a remote session

use std::time::Duration;

use crate::config::Settings;
use crate::path::HostStyle;
use crate::retry::RetryPolicy;
use crate::transport::InvocationMode;

/// Default remote shell program
pub const DEFAULT_SSH_PROGRAM: &str = "ssh";

/// Default remote copy program
pub const DEFAULT_SCP_PROGRAM: &str = "scp";

/// Everything needed to reach one remote host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// `user@host` destination
    pub target: String,
    /// Extra transport flags, in order, placed before every other argument
    pub transport_options: Vec<String>,
    /// Retry policy for the initial reachability probe
    pub retry: RetryPolicy,
    /// Pass commands through the host shell instead of an argument vector
    pub use_shell: bool,
    /// Path and quoting conventions of the local machine
    pub host_style: HostStyle,
    /// Remote shell program
    pub ssh_program: String,
    /// Remote copy program
    pub scp_program: String,
}

impl SessionConfig {
    /// Creates a configuration for `target` with default settings
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            transport_options: Vec::new(),
            retry: RetryPolicy::default(),
            use_shell: false,
            host_style: HostStyle::current(),
            ssh_program: DEFAULT_SSH_PROGRAM.to_string(),
            scp_program: DEFAULT_SCP_PROGRAM.to_string(),
        }
    }

    /// Creates a configuration for `target` seeded from a settings file
    #[must_use]
    pub fn from_settings(target: impl Into<String>, settings: &Settings) -> Self {
        Self::new(target)
            .with_programs(
                settings.transport.ssh_program.clone(),
                settings.transport.scp_program.clone(),
            )
            .with_transport_options(settings.transport.options.clone())
            .with_shell(settings.transport.use_shell)
            .with_retry(
                RetryPolicy::no_retry()
                    .with_retries(settings.retry.retries)
                    .with_delay_secs(settings.retry.retry_sleep_secs),
            )
    }

    /// Sets the transport options
    #[must_use]
    pub fn with_transport_options(mut self, options: Vec<String>) -> Self {
        self.transport_options = options;
        self
    }

    /// Sets the probe retry policy
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the number of probe retries and the pause between them
    #[must_use]
    pub const fn with_retries(mut self, retries: u32, delay: Duration) -> Self {
        self.retry = RetryPolicy::new(retries, delay);
        self
    }

    /// Enables or disables shell interpolation
    #[must_use]
    pub const fn with_shell(mut self, use_shell: bool) -> Self {
        self.use_shell = use_shell;
        self
    }

    /// Overrides the detected host style
    #[must_use]
    pub const fn with_host_style(mut self, style: HostStyle) -> Self {
        self.host_style = style;
        self
    }

    /// Sets the remote shell and remote copy programs
    #[must_use]
    pub fn with_programs(mut self, ssh: impl Into<String>, scp: impl Into<String>) -> Self {
        self.ssh_program = ssh.into();
        self.scp_program = scp.into();
        self
    }

    /// Returns how transport commands of this session are executed
    #[must_use]
    pub const fn invocation_mode(&self) -> InvocationMode {
        InvocationMode::from_flag(self.use_shell, self.host_style)
    }
}
