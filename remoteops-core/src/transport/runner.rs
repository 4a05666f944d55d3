//! Process execution for transport commands

use std::io::{self, Read};
use std::process::Command;

use crate::operation::{OperationResult, SPAWN_FAILURE_CODE};
use crate::path::HostStyle;

use super::{InvocationMode, TransportCommand};

/// Runs transport commands to completion
///
/// Implementations must block until the process has exited and return its
/// exit code together with everything it wrote to stdout and stderr.
pub trait CommandRunner {
    /// Executes `command` and returns its exit code and merged output
    fn execute(&self, command: &TransportCommand, mode: InvocationMode) -> OperationResult;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn execute(&self, command: &TransportCommand, mode: InvocationMode) -> OperationResult {
        (**self).execute(command, mode)
    }
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(&self, command: &TransportCommand, mode: InvocationMode) -> OperationResult {
        tracing::debug!(
            command = %command.display_for_log(),
            shell = matches!(mode, InvocationMode::Shell(_)),
            "Executing transport command"
        );

        match run_merged(build_process(command, mode)) {
            Ok(result) => {
                tracing::debug!(
                    program = %command.program,
                    exit_code = result.exit_code,
                    output_len = result.output.len(),
                    "Transport command finished"
                );
                result
            }
            Err(e) => {
                tracing::warn!(program = %command.program, error = %e, "Failed to spawn");
                OperationResult::new(
                    SPAWN_FAILURE_CODE,
                    format!("Failed to execute {}: {e}\n", command.program),
                )
            }
        }
    }
}

fn build_process(command: &TransportCommand, mode: InvocationMode) -> Command {
    match mode {
        InvocationMode::ArgumentVector => {
            let mut process = Command::new(&command.program);
            process.args(&command.options).args(&command.args);
            process
        }
        InvocationMode::Shell(style) => {
            let line = command.shell_line(style);
            match style {
                HostStyle::Windows => cmd_process(&line),
                HostStyle::Posix => {
                    let mut process = Command::new("sh");
                    process.arg("-c").arg(line);
                    process
                }
            }
        }
    }
}

/// `cmd /S /C "<line>"`: `/S` makes cmd strip exactly the outer quote pair,
/// so quoting inside the line reaches the transport program untouched.
#[cfg(windows)]
fn cmd_process(line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    let mut process = Command::new("cmd");
    // `arg` would re-escape the line with MSVC rules, which cmd does not parse
    process.raw_arg("/S /C").raw_arg(format!("\"{line}\""));
    process
}

#[cfg(not(windows))]
fn cmd_process(line: &str) -> Command {
    let mut process = Command::new("cmd");
    process.arg("/C").arg(line);
    process
}

/// Spawns `process` with stdout and stderr sharing one pipe, waits for it and
/// returns the interleaved output.
fn run_merged(mut process: Command) -> io::Result<OperationResult> {
    let (mut reader, writer) = io::pipe()?;
    let stderr_writer = writer.try_clone()?;
    process.stdout(writer).stderr(stderr_writer);

    let mut child = process.spawn()?;
    // The Command still owns our copies of the write end; EOF needs them gone.
    drop(process);

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    let status = child.wait()?;

    Ok(OperationResult::new(
        status.code().unwrap_or(-1),
        String::from_utf8_lossy(&buffer),
    ))
}
