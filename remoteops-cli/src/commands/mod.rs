//! Command handler modules for the CLI.

mod operation;

use remoteops_core::tracing::init_tracing;

use crate::cli::Cli;
use crate::error::CliError;
use crate::util::{create_config_manager, tracing_config};

/// Loads settings, sets up logging and runs the requested operation.
///
/// Returns the exit code the process should terminate with.
pub fn dispatch(cli: Cli) -> Result<i32, CliError> {
    let config_manager = create_config_manager(cli.config.as_deref())?;
    let settings = config_manager.load_settings()?;

    if let Err(e) = init_tracing(&tracing_config(cli.control.debug, &settings)) {
        eprintln!("Warning: {e}");
    }
    tracing::debug!(
        config_dir = %config_manager.config_dir().display(),
        "Using configuration directory"
    );

    let request = operation::OperationRequest::from_cli(&cli)?;
    let session_config = operation::session_config(&cli, &settings)?;

    if cli.control.dry_run {
        return operation::cmd_dry_run(&session_config, request);
    }
    operation::cmd_operation(session_config, request, cli.control.verbose)
}
