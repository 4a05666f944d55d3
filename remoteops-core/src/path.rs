//! Host-specific path and quoting rules
//!
//! `scp` running on a Windows host (through Cygwin or MSYS) does not understand
//! drive-letter paths, so local paths are rewritten to the `/cygdrive/<letter>`
//! form before they are placed on a transport command line. On POSIX hosts
//! paths pass through untouched.

use crate::error::{RemoteOpsError, RemoteOpsResult};

/// Root under which Cygwin exposes drive letters
const CYGDRIVE_ROOT: &str = "/cygdrive";

/// Path and quoting conventions of the machine running the transport tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostStyle {
    /// Unix-like host: `/` paths, POSIX shell quoting
    #[default]
    Posix,
    /// Windows host: drive-letter paths, `cmd.exe` quoting
    Windows,
}

impl HostStyle {
    /// Returns the style of the platform this binary was built for
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Translates a local path into the form the transport tool expects.
    ///
    /// On Windows hosts `C:\foo\bar` becomes `/cygdrive/c/foo/bar`; a quote
    /// character wrapping the input is kept around the output. Paths without
    /// a drive letter, and every path on POSIX hosts, are returned unchanged.
    #[must_use]
    pub fn posix_path(self, path: &str) -> String {
        match self {
            Self::Posix => path.to_string(),
            Self::Windows => cygdrive_path(path),
        }
    }

    /// Quotes a single argument for the host shell.
    ///
    /// Windows arguments follow the MSVC runtime rules that `ssh.exe` and
    /// `scp.exe` parse their command line with: embedded `"` is escaped as
    /// `\"` and backslashes are doubled only where they precede a quote.
    #[must_use]
    pub fn quote(self, arg: &str) -> String {
        match self {
            Self::Posix => shell_words::quote(arg).into_owned(),
            Self::Windows => quote_windows(arg),
        }
    }

    /// Splits a string of file names into individual paths, honouring quotes.
    ///
    /// POSIX hosts use shell word rules (backslash escapes included). Windows
    /// hosts keep backslashes literal since they are path separators there.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteOpsError::InvalidParams`] when a quote is left open.
    pub fn split_params(self, text: &str) -> RemoteOpsResult<Vec<String>> {
        match self {
            Self::Posix => shell_words::split(text).map_err(|e| {
                RemoteOpsError::InvalidParams(format!("cannot split '{text}': {e}"))
            }),
            Self::Windows => split_windows(text),
        }
    }
}

fn cygdrive_path(path: &str) -> String {
    let (quote, inner) = strip_quotes(path);

    let Some((drive, rest)) = split_drive(inner) else {
        return path.to_string();
    };

    let mut converted = format!("{CYGDRIVE_ROOT}/{}", drive.to_ascii_lowercase());
    for part in rest.split(['/', '\\']).filter(|p| !p.is_empty()) {
        converted.push('/');
        converted.push_str(part);
    }
    if rest.is_empty() || rest.ends_with(['/', '\\']) {
        converted.push('/');
    }

    format!("{quote}{converted}{quote}")
}

/// Removes one pair of matching surrounding quotes, if present
#[must_use]
pub fn unquote(path: &str) -> &str {
    strip_quotes(path).1
}

/// Splits off a surrounding pair of matching quotes, returning the quote
/// (or an empty string) and the unquoted text.
fn strip_quotes(path: &str) -> (&str, &str) {
    for quote in ["'", "\""] {
        if path.len() >= 2 && path.starts_with(quote) && path.ends_with(quote) {
            return (quote, &path[1..path.len() - 1]);
        }
    }
    ("", path)
}

fn split_drive(path: &str) -> Option<(char, &str)> {
    let mut chars = path.chars();
    let letter = chars.next()?;
    if letter.is_ascii_alphabetic() && chars.next() == Some(':') {
        Some((letter, &path[2..]))
    } else {
        None
    }
}

fn quote_windows(arg: &str) -> String {
    let needs_quotes = arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"');
    if !needs_quotes {
        return arg.to_string();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    let mut backslashes = 0;
    for ch in arg.chars() {
        match ch {
            '\\' => {
                backslashes += 1;
                continue;
            }
            '"' => {
                quoted.push_str(&"\\".repeat(backslashes * 2 + 1));
            }
            _ => quoted.push_str(&"\\".repeat(backslashes)),
        }
        quoted.push(ch);
        backslashes = 0;
    }
    // Backslashes before the closing quote must not escape it
    quoted.push_str(&"\\".repeat(backslashes * 2));
    quoted.push('"');
    quoted
}

fn split_windows(text: &str) -> RemoteOpsResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut open_quote: Option<char> = None;

    for ch in text.chars() {
        match open_quote {
            Some(q) if ch == q => open_quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                open_quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if let Some(q) = open_quote {
        return Err(RemoteOpsError::InvalidParams(format!(
            "cannot split '{text}': missing closing {q}"
        )));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_host_is_identity() {
        let style = HostStyle::Posix;
        assert_eq!(style.posix_path(r"C:\Users\a b\f.txt"), r"C:\Users\a b\f.txt");
        assert_eq!(style.posix_path("/tmp/x"), "/tmp/x");
    }

    #[test]
    fn test_windows_drive_path() {
        let style = HostStyle::Windows;
        assert_eq!(
            style.posix_path(r"C:\Users\a b\f.txt"),
            "/cygdrive/c/Users/a b/f.txt"
        );
        assert_eq!(style.posix_path("d:/data/logs"), "/cygdrive/d/data/logs");
    }

    #[test]
    fn test_windows_mixed_separators_and_trailing() {
        let style = HostStyle::Windows;
        assert_eq!(style.posix_path(r"E:\a/b\\c\"), "/cygdrive/e/a/b/c/");
        assert_eq!(style.posix_path("C:"), "/cygdrive/c/");
        assert_eq!(style.posix_path("c:notes.txt"), "/cygdrive/c/notes.txt");
    }

    #[test]
    fn test_windows_preserves_quotes() {
        let style = HostStyle::Windows;
        assert_eq!(
            style.posix_path(r#""C:\My Files\x""#),
            r#""/cygdrive/c/My Files/x""#
        );
        assert_eq!(style.posix_path(r"'C:\tmp'"), "'/cygdrive/c/tmp'");
    }

    #[test]
    fn test_windows_without_drive_unchanged() {
        let style = HostStyle::Windows;
        assert_eq!(style.posix_path(r"relative\dir"), r"relative\dir");
        assert_eq!(style.posix_path(""), "");
        assert_eq!(style.posix_path("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_split_posix_respects_quotes() {
        let files = HostStyle::Posix
            .split_params(r#"one "two words" three\ four"#)
            .unwrap();
        assert_eq!(files, vec!["one", "two words", "three four"]);
    }

    #[test]
    fn test_split_posix_unbalanced() {
        let err = HostStyle::Posix.split_params("\"open").unwrap_err();
        assert!(matches!(err, RemoteOpsError::InvalidParams(_)));
    }

    #[test]
    fn test_split_windows_keeps_backslashes() {
        let files = HostStyle::Windows
            .split_params(r#"C:\a.txt "C:\My Files\b.txt" ''"#)
            .unwrap();
        assert_eq!(files, vec![r"C:\a.txt", r"C:\My Files\b.txt", ""]);
    }

    #[test]
    fn test_split_windows_unbalanced() {
        assert!(HostStyle::Windows.split_params("'C:\\a").is_err());
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("'a b'"), "a b");
        assert_eq!(unquote("\"x\""), "x");
        assert_eq!(unquote("'mismatch\""), "'mismatch\"");
        assert_eq!(unquote("'"), "'");
    }

    #[test]
    fn test_quote() {
        assert_eq!(HostStyle::Posix.quote("plain"), "plain");
        assert_eq!(HostStyle::Posix.quote("a b"), "'a b'");
        assert_eq!(HostStyle::Windows.quote("a b"), "\"a b\"");
        assert_eq!(HostStyle::Windows.quote("C:\\x"), "C:\\x");
        assert_eq!(HostStyle::Windows.quote(""), "\"\"");
    }

    #[test]
    fn test_windows_quote_escapes_embedded_quotes() {
        let style = HostStyle::Windows;
        assert_eq!(style.quote(r#"say "hi there""#), r#""say \"hi there\"""#);
        assert_eq!(style.quote(r#"a"b"#), r#""a\"b""#);
        assert_eq!(style.quote(r#"x\"y"#), r#""x\\\"y""#);
        assert_eq!(style.quote(r"C:\My Files\"), r#""C:\My Files\\""#);
        assert_eq!(style.quote(r"C:\a b\c"), r#""C:\a b\c""#);
    }
}
