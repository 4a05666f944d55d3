//! Builds the transport commands for each operation kind

use std::path::Path;

use crate::error::{RemoteOpsError, RemoteOpsResult};
use crate::operation::{OperationKind, OperationParams};
use crate::path::unquote;
use crate::transport::TransportCommand;

use super::SessionConfig;

/// Side-effect free remote command used to test connectivity
pub const PROBE_COMMAND: &str = "date";

/// Local destination of `copy_from` when none is given
pub const DEFAULT_LOCAL_DIR: &str = ".";

impl SessionConfig {
    /// Builds the reachability probe: `ssh <options> <target> date`
    #[must_use]
    pub fn probe_command(&self) -> TransportCommand {
        TransportCommand::new(&self.ssh_program)
            .with_options(&self.transport_options)
            .arg(&self.target)
            .arg(PROBE_COMMAND)
    }

    /// Builds the ordered list of transport commands `kind` would run.
    ///
    /// Nothing is spawned. For `copy_from` the local destination directory is
    /// checked here, so a missing directory is reported before any transfer.
    ///
    /// # Errors
    ///
    /// - [`RemoteOpsError::InvalidParams`] when there is nothing to run or copy
    /// - [`RemoteOpsError::LocalDirectoryMissing`] when the `copy_from`
    ///   destination does not exist
    pub fn plan(
        &self,
        kind: OperationKind,
        params: impl Into<OperationParams>,
        dir: Option<&str>,
    ) -> RemoteOpsResult<Vec<TransportCommand>> {
        let params = params.into();
        match kind {
            OperationKind::Shell => Ok(vec![self.shell_command(&params.into_command()?, dir)]),
            OperationKind::CopyTo => {
                let files = params.into_paths(self.host_style)?;
                Ok(vec![self.copy_to_command(&files, dir)])
            }
            OperationKind::CopyFrom => {
                let local_dir = dir.unwrap_or(DEFAULT_LOCAL_DIR);
                if !Path::new(local_dir).is_dir() {
                    return Err(RemoteOpsError::LocalDirectoryMissing(local_dir.into()));
                }
                let files = params.into_paths(self.host_style)?;
                // scp has no multi-source pull, so every file gets its own copy
                Ok(files
                    .iter()
                    .map(|file| self.copy_from_command(file, local_dir))
                    .collect())
            }
        }
    }

    fn shell_command(&self, command: &str, dir: Option<&str>) -> TransportCommand {
        let remote = match dir {
            Some(dir) => format!("cd {dir}; {command}"),
            None => command.to_string(),
        };

        TransportCommand::new(&self.ssh_program)
            .with_options(&self.transport_options)
            .arg(&self.target)
            .arg(remote)
    }

    fn copy_to_command(&self, files: &[String], remote_dir: Option<&str>) -> TransportCommand {
        let style = self.host_style;
        let remote_dir = style.posix_path(remote_dir.unwrap_or_default());

        TransportCommand::new(&self.scp_program)
            .with_options(&self.transport_options)
            .arg("-r")
            .args(
                files
                    .iter()
                    .map(|file| unquote(&style.posix_path(file)).to_string()),
            )
            .arg(format!("{}:{}", self.target, unquote(&remote_dir)))
    }

    fn copy_from_command(&self, file: &str, local_dir: &str) -> TransportCommand {
        let style = self.host_style;
        let remote_file = escape_spaces(unquote(&style.posix_path(file)));
        let local_dir = style.posix_path(local_dir);

        TransportCommand::new(&self.scp_program)
            .with_options(&self.transport_options)
            .arg("-r")
            .arg(format!("{}:{remote_file}", self.target))
            .arg(unquote(&local_dir))
    }
}

/// Backslash-escapes spaces so the remote shell that `scp` starts for the
/// source path keeps it as one word.
fn escape_spaces(path: &str) -> String {
    path.replace(' ', "\\ ")
}
