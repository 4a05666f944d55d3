//! `remoteops` - run shell commands on a remote host and copy files to and
//! from it through `ssh` and `scp`
//!
//! The process exit code is the exit code of the remote operation.

mod cli;
mod commands;
mod error;
mod util;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    match commands::dispatch(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
