//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser};
use remoteops_core::OperationKind;

/// Remote access utilities, via ssh & scp
#[derive(Parser)]
#[command(name = "remoteops")]
#[command(author, version, about = "Remote access utilities, via ssh & scp")]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, env = "REMOTEOPS_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// User and remote host to execute commands on, e.g. 'user@1.2.3.4' or
    /// 'user@myhost.com'
    #[arg(long = "user-host", visible_alias = "userHost", value_name = "USER@HOST")]
    pub user_host: String,

    /// Remote operation to perform: shell, copy_to or copy_from
    #[arg(long, value_name = "OPERATION", default_value_t = OperationKind::Shell)]
    pub operation: OperationKind,

    #[command(flatten)]
    pub control: ControlOptions,

    #[command(flatten)]
    pub shell: ShellOptions,

    #[command(flatten)]
    pub copy: CopyOptions,
}

/// Connection and output control
#[derive(Args)]
#[command(next_help_heading = "Control options")]
pub struct ControlOptions {
    /// SSH connection options. More than one option can be given in one quoted
    /// string or by repeating this flag, e.g. '-i $HOME/.ssh/access.pem -o
    /// ConnectTimeout=10'
    #[arg(
        long = "ssh-options",
        visible_alias = "sshOptions",
        value_name = "OPTIONS",
        allow_hyphen_values = true
    )]
    pub ssh_options: Vec<String>,

    /// Number of retries for the initial connection check
    /// [default: settings file, else 0]
    #[arg(long)]
    pub retries: Option<u32>,

    /// Seconds to wait between retries [default: settings file, else 10]
    #[arg(long = "retry-sleep", visible_alias = "retrySleep", value_name = "SECS")]
    pub retry_sleep: Option<u64>,

    /// Run ssh/scp through the local shell so options are shell-expanded
    #[arg(long)]
    pub use_shell: bool,

    /// Log every transport command (debug level)
    #[arg(long)]
    pub debug: bool,

    /// Print exit status and output at end
    #[arg(long)]
    pub verbose: bool,

    /// Print the transport commands that would run, without connecting
    #[arg(long)]
    pub dry_run: bool,
}

/// Options for `--operation shell`
#[derive(Args)]
#[command(next_help_heading = "Shell options")]
pub struct ShellOptions {
    /// Commands to execute on the remote host. Repeat the flag for several
    /// commands; they are joined with ';'
    #[arg(long, value_name = "COMMANDS", allow_hyphen_values = true)]
    pub commands: Vec<String>,

    /// Working directory on the remote host to execute commands from.
    /// Defaults to the remote login directory
    #[arg(long = "command-dir", visible_alias = "commandDir", value_name = "DIR")]
    pub command_dir: Option<String>,
}

/// Options for `--operation copy_to` and `--operation copy_from`
#[derive(Args)]
#[command(next_help_heading = "Copy options")]
pub struct CopyOptions {
    /// File to copy to/from the remote host. Repeat the flag for each file;
    /// names may contain spaces
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<String>,

    /// Remote directory to copy to (copy_to only). Defaults to the login
    /// directory on the remote host
    #[arg(long = "remote-dir", visible_alias = "remoteDir", value_name = "DIR")]
    pub remote_dir: Option<String>,

    /// Local directory to copy to (copy_from only)
    #[arg(
        long = "local-dir",
        visible_alias = "localDir",
        value_name = "DIR",
        default_value = "."
    )]
    pub local_dir: String,
}
