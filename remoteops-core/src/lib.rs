//! remoteops Core Library
//!
//! Runs shell commands on a remote host and copies files to and from it by
//! driving the external `ssh` and `scp` programs.
//!
//! # Crate Structure
//!
//! - [`session`] - `RemoteSession`: reachability probe, shell and copy operations
//! - [`operation`] - Operation kinds, parameters and aggregated results
//! - [`transport`] - Transport command model and process runner
//! - [`path`] - Host path normalization (`/cygdrive`) and quoting rules
//! - [`retry`] - Probe retry policy
//! - [`config`] - Settings file and `ConfigManager`
//! - [`tracing`] - Logging setup

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod operation;
pub mod path;
pub mod retry;
pub mod session;
pub mod tracing;
pub mod transport;

pub use config::{ConfigManager, Settings};
pub use error::{ConfigError, ConfigResult, RemoteOpsError, RemoteOpsResult};
pub use operation::{OperationKind, OperationParams, OperationResult, SPAWN_FAILURE_CODE};
pub use path::HostStyle;
pub use retry::{RetryPolicy, RetryState};
pub use session::{RemoteSession, SessionConfig};
pub use transport::{CommandRunner, InvocationMode, SystemRunner, TransportCommand};
