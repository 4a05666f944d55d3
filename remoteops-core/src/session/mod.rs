//! Remote session: reachability probe plus shell and copy operations
//!
//! A [`RemoteSession`] probes its target once when it is created and caches
//! the outcome. If that probe never succeeded, every later operation returns
//! the cached probe result without spawning anything.

mod config;
mod plan;

use std::thread;

pub use config::{DEFAULT_SCP_PROGRAM, DEFAULT_SSH_PROGRAM, SessionConfig};
pub use plan::{DEFAULT_LOCAL_DIR, PROBE_COMMAND};

use crate::error::RemoteOpsResult;
use crate::operation::{OperationKind, OperationParams, OperationResult};
use crate::retry::RetryState;
use crate::transport::{CommandRunner, SystemRunner};

/// A probed connection to one remote host
#[derive(Debug)]
pub struct RemoteSession<R = SystemRunner> {
    config: SessionConfig,
    runner: R,
    probe: OperationResult,
}

impl RemoteSession<SystemRunner> {
    /// Probes `config.target` using real `ssh` processes
    #[must_use]
    pub fn connect(config: SessionConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> RemoteSession<R> {
    /// Probes `config.target` using `runner`.
    ///
    /// The probe is attempted up to `retries + 1` times, sleeping the policy
    /// delay between failures and stopping at the first success. The final
    /// attempt's result is kept whatever it was.
    pub fn with_runner(config: SessionConfig, runner: R) -> Self {
        let probe = probe_target(&config, &runner);
        Self {
            config,
            runner,
            probe,
        }
    }

    /// Returns true if the reachability probe succeeded
    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        self.probe.is_success()
    }

    /// Returns the cached result of the reachability probe
    #[must_use]
    pub fn reachability_info(&self) -> OperationResult {
        self.probe.clone()
    }

    /// Runs an operation and returns its aggregated exit code and output.
    ///
    /// An unreachable session returns [`Self::reachability_info`] without
    /// doing anything else. Otherwise the planned commands run one after the
    /// other; the result carries the first non-zero exit code and the output
    /// of every invocation in order.
    ///
    /// # Errors
    ///
    /// Returns a validation error from [`SessionConfig::plan`] before any
    /// process is spawned.
    pub fn run(
        &self,
        kind: OperationKind,
        params: impl Into<OperationParams>,
        dir: Option<&str>,
    ) -> RemoteOpsResult<OperationResult> {
        if !self.is_reachable() {
            tracing::debug!(
                target_host = %self.config.target,
                operation = %kind,
                "Target unreachable, returning probe result"
            );
            return Ok(self.reachability_info());
        }

        let commands = self.config.plan(kind, params, dir)?;
        let mode = self.config.invocation_mode();

        let span = tracing::info_span!(
            "remote.operation",
            operation = %kind,
            target_host = %self.config.target,
            invocations = commands.len()
        );
        let _guard = span.enter();

        let mut total = OperationResult::default();
        for command in &commands {
            total.absorb(self.runner.execute(command, mode));
        }

        tracing::info!(exit_code = total.exit_code, "Operation finished");
        Ok(total)
    }

    /// Runs commands on the remote host, optionally from `dir`
    ///
    /// # Errors
    ///
    /// See [`Self::run`].
    pub fn shell(
        &self,
        params: impl Into<OperationParams>,
        dir: Option<&str>,
    ) -> RemoteOpsResult<OperationResult> {
        self.run(OperationKind::Shell, params, dir)
    }

    /// Copies local files to `dir` on the remote host (login directory if
    /// `None`)
    ///
    /// # Errors
    ///
    /// See [`Self::run`].
    pub fn copy_to(
        &self,
        params: impl Into<OperationParams>,
        dir: Option<&str>,
    ) -> RemoteOpsResult<OperationResult> {
        self.run(OperationKind::CopyTo, params, dir)
    }

    /// Copies remote files into the existing local directory `dir` (current
    /// directory if `None`)
    ///
    /// # Errors
    ///
    /// See [`Self::run`].
    pub fn copy_from(
        &self,
        params: impl Into<OperationParams>,
        dir: Option<&str>,
    ) -> RemoteOpsResult<OperationResult> {
        self.run(OperationKind::CopyFrom, params, dir)
    }
}

fn probe_target<R: CommandRunner>(config: &SessionConfig, runner: &R) -> OperationResult {
    let command = config.probe_command();
    let mode = config.invocation_mode();
    let mut state = RetryState::new(config.retry);
    tracing::debug!(
        target_host = %config.target,
        max_attempts = config.retry.total_attempts(),
        "Probing remote access"
    );

    loop {
        let result = runner.execute(&command, mode);
        if result.is_success() {
            state.record_success();
            tracing::debug!(
                target_host = %config.target,
                attempt = state.attempt_number(),
                "Remote access established"
            );
            return result;
        }

        let Some(delay) = state.record_failure(result.output.trim_end()) else {
            tracing::warn!(
                target_host = %config.target,
                attempts = state.failed_attempts(),
                exit_code = result.exit_code,
                error = state.last_error().unwrap_or_default(),
                "Remote access could not be established"
            );
            return result;
        };

        tracing::debug!(
            "Failed remote attempt {}, retrying in {} seconds",
            state.failed_attempts(),
            delay.as_secs_f64()
        );
        thread::sleep(delay);
    }
}
