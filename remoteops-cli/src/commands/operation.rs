//! Operation command: probe the target, then run a shell or copy operation.

use std::time::Duration;

use remoteops_core::{OperationKind, OperationParams, RemoteSession, SessionConfig, Settings};

use crate::cli::Cli;
use crate::error::CliError;
use crate::util::split_ssh_options;

/// Operation, parameters and directory taken from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    /// Operation to perform
    pub kind: OperationKind,
    /// Commands for `shell`, files for the copy operations
    pub params: OperationParams,
    /// `--command-dir`, `--remote-dir` or `--local-dir` depending on the kind
    pub dir: Option<String>,
}

impl OperationRequest {
    /// Picks the options that apply to the selected operation.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Usage` when the option the operation needs is missing.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let kind = cli.operation;
        match kind {
            OperationKind::Shell => {
                if cli.shell.commands.is_empty() {
                    return Err(missing_option(kind, "--commands"));
                }
                Ok(Self {
                    kind,
                    params: OperationParams::Many(cli.shell.commands.clone()),
                    dir: cli.shell.command_dir.clone(),
                })
            }
            OperationKind::CopyTo | OperationKind::CopyFrom => {
                if cli.copy.files.is_empty() {
                    return Err(missing_option(kind, "--file"));
                }
                let dir = if kind == OperationKind::CopyTo {
                    cli.copy.remote_dir.clone()
                } else {
                    Some(cli.copy.local_dir.clone())
                };
                Ok(Self {
                    kind,
                    params: OperationParams::Many(cli.copy.files.clone()),
                    dir,
                })
            }
        }
    }
}

fn missing_option(kind: OperationKind, option: &str) -> CliError {
    CliError::Usage(format!("Missing required '{kind}' option '{option}'"))
}

/// Builds the session configuration: settings file first, command-line
/// flags on top. `--ssh-options` are appended after the configured options.
pub fn session_config(cli: &Cli, settings: &Settings) -> Result<SessionConfig, CliError> {
    let mut config = SessionConfig::from_settings(cli.user_host.clone(), settings);

    let extra = split_ssh_options(&cli.control.ssh_options)?;
    if !extra.is_empty() {
        let mut options = config.transport_options.clone();
        options.extend(extra);
        config = config.with_transport_options(options);
    }

    if let Some(retries) = cli.control.retries {
        config.retry = config.retry.with_retries(retries);
    }
    if let Some(secs) = cli.control.retry_sleep {
        config.retry = config.retry.with_delay(Duration::from_secs(secs));
    }
    if cli.control.use_shell {
        config = config.with_shell(true);
    }

    Ok(config)
}

/// Prints the transport commands the operation would run, one per line.
/// Nothing is spawned and the target is not probed.
pub fn cmd_dry_run(config: &SessionConfig, request: OperationRequest) -> Result<i32, CliError> {
    let mode = config.invocation_mode();
    let commands = config.plan(request.kind, request.params, request.dir.as_deref())?;
    println!("{}", config.probe_command().render(mode));
    for command in &commands {
        println!("{}", command.render(mode));
    }
    Ok(0)
}

/// Runs the operation and returns its aggregated exit code
pub fn cmd_operation(
    config: SessionConfig,
    request: OperationRequest,
    verbose: bool,
) -> Result<i32, CliError> {
    let session = RemoteSession::connect(config);
    let result = session.run(request.kind, request.params, request.dir.as_deref())?;

    if verbose {
        let argv: Vec<String> = std::env::args().collect();
        println!("Return code: {} for command {argv:?}", result.exit_code);
        println!("{}", result.output);
    }

    Ok(result.exit_code)
}
