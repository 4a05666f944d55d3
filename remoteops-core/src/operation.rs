//! Operation kinds, parameters and results

use std::fmt;
use std::str::FromStr;

use crate::error::{RemoteOpsError, RemoteOpsResult};
use crate::path::HostStyle;

/// Exit code reported when a transport program could not be started
pub const SPAWN_FAILURE_CODE: i32 = 127;

/// The remote actions a session can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Run commands in a remote shell
    Shell,
    /// Copy local files to the remote host
    CopyTo,
    /// Copy remote files to a local directory
    CopyFrom,
}

impl OperationKind {
    /// All supported operation kinds
    pub const ALL: [Self; 3] = [Self::Shell, Self::CopyTo, Self::CopyFrom];

    /// Returns the canonical name of the operation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::CopyTo => "copy_to",
            Self::CopyFrom => "copy_from",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = RemoteOpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| RemoteOpsError::InvalidOperation(s.to_string()))
    }
}

/// Commands or file names handed to an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationParams {
    /// One string: a command line, or space separated (possibly quoted) paths
    Single(String),
    /// Individual commands or paths
    Many(Vec<String>),
}

impl OperationParams {
    /// Joins the parameters into one remote command line, separating
    /// multiple commands with `;`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteOpsError::InvalidParams`] if there is no command.
    pub fn into_command(self) -> RemoteOpsResult<String> {
        let command = match self {
            Self::Single(command) => command,
            Self::Many(commands) => commands.join(";"),
        };
        if command.trim().is_empty() {
            return Err(RemoteOpsError::InvalidParams(
                "no command to run".to_string(),
            ));
        }
        Ok(command)
    }

    /// Turns the parameters into a list of paths. A single string is split
    /// with the quoting rules of `style`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteOpsError::InvalidParams`] if the string cannot be
    /// split or no path remains.
    pub fn into_paths(self, style: HostStyle) -> RemoteOpsResult<Vec<String>> {
        let paths = match self {
            Self::Single(text) => style.split_params(&text)?,
            Self::Many(paths) => paths,
        };
        if paths.is_empty() {
            return Err(RemoteOpsError::InvalidParams(
                "no files to copy".to_string(),
            ));
        }
        Ok(paths)
    }
}

impl From<String> for OperationParams {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for OperationParams {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for OperationParams {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<&[&str]> for OperationParams {
    fn from(value: &[&str]) -> Self {
        Self::Many(value.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OperationParams {
    fn from(value: [&str; N]) -> Self {
        Self::Many(value.iter().map(ToString::to_string).collect())
    }
}

/// Exit code and merged stdout/stderr of one or more transport invocations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationResult {
    /// Process exit code; 0 means success
    pub exit_code: i32,
    /// Captured output
    pub output: String,
}

impl OperationResult {
    /// Creates a result from an exit code and captured output
    #[must_use]
    pub fn new(exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: output.into(),
        }
    }

    /// Returns true if the exit code is 0
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Folds another invocation into this aggregate: the first non-zero
    /// exit code is kept and the output is appended once.
    pub fn absorb(&mut self, other: Self) {
        if self.exit_code == 0 {
            self.exit_code = other.exit_code;
        }
        self.output.push_str(&other.output);
    }
}
