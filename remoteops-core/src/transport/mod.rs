//! Transport command construction and execution
//!
//! A [`TransportCommand`] describes one `ssh`/`scp` invocation. A
//! [`CommandRunner`] turns it into a process, either directly as an argument
//! vector or through the host shell.

mod command;
mod runner;

pub use command::{InvocationMode, TransportCommand};
pub use runner::{CommandRunner, SystemRunner};
