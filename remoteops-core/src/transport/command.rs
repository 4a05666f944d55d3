//! A single planned transport invocation

use crate::path::HostStyle;

/// How a [`TransportCommand`] is handed to the operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Spawn the program directly with an argument vector
    ArgumentVector,
    /// Render one command line and run it through the host shell, so that
    /// transport options are subject to shell expansion
    Shell(HostStyle),
}

impl InvocationMode {
    /// Picks the mode for a session's `use_shell` flag
    #[must_use]
    pub const fn from_flag(use_shell: bool, style: HostStyle) -> Self {
        if use_shell {
            Self::Shell(style)
        } else {
            Self::ArgumentVector
        }
    }
}

/// Command to execute for one transport step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportCommand {
    /// The program to execute (`ssh`, `scp`)
    pub program: String,
    /// User supplied transport options, passed before all other arguments
    pub options: Vec<String>,
    /// Arguments built for the operation (flags, target, paths)
    pub args: Vec<String>,
}

impl TransportCommand {
    /// Creates a command for `program` with no arguments
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            options: Vec::new(),
            args: Vec::new(),
        }
    }

    /// Sets the transport options
    #[must_use]
    pub fn with_options(mut self, options: &[String]) -> Self {
        self.options = options.to_vec();
        self
    }

    /// Appends an operation argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several operation arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Returns program, options and arguments as one argument vector
    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(&self.program)
            .chain(&self.options)
            .chain(&self.args)
            .cloned()
            .collect()
    }

    /// Renders a command line for the host shell.
    ///
    /// Transport options are inserted verbatim; the program and every
    /// operation argument are quoted for `style`.
    #[must_use]
    pub fn shell_line(&self, style: HostStyle) -> String {
        let mut parts = Vec::with_capacity(1 + self.options.len() + self.args.len());
        parts.push(style.quote(&self.program));
        parts.extend(self.options.iter().cloned());
        parts.extend(self.args.iter().map(|arg| style.quote(arg)));
        parts.join(" ")
    }

    /// Renders the command as it would be executed under `mode`
    #[must_use]
    pub fn render(&self, mode: InvocationMode) -> String {
        match mode {
            InvocationMode::ArgumentVector => shell_words::join(self.argv()),
            InvocationMode::Shell(style) => self.shell_line(style),
        }
    }

    /// Formats the command for safe log output by masking sensitive
    /// arguments such as passwords and tokens.
    #[must_use]
    pub fn display_for_log(&self) -> String {
        self.argv()
            .iter()
            .map(|arg| {
                if is_sensitive_arg(arg) {
                    mask_arg(arg)
                } else {
                    arg.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Returns true if the argument contains a sensitive pattern that should
/// be masked in log output.
fn is_sensitive_arg(arg: &str) -> bool {
    let lower = arg.to_lowercase();
    lower.starts_with("--password")
        || lower.contains("password=")
        || lower.contains("passwd=")
        || lower.contains("secret=")
        || lower.contains("token=")
}

/// Masks the value portion of a sensitive argument, keeping the key
fn mask_arg(arg: &str) -> String {
    match arg.find('=') {
        Some(pos) => format!("{}****", &arg[..=pos]),
        None => "****".to_string(),
    }
}
