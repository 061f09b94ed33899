//! # Command specification and display naming.
//!
//! [`CommandSpec`] is the parsed form of one raw command string: an
//! executable token, its arguments, and the display name used as the
//! command's log tag.
//!
//! ## Rules
//! - Tokenization splits on whitespace and is **not** quote-aware. This is an
//!   inherited limitation of the command-line surface, documented rather than
//!   papered over; quoting support belongs to a shell, not to this parser.
//! - The display name is the base filename of the executable token
//!   (`/usr/bin/sleep` → `sleep`). Immutable once computed.
//! - A string with zero tokens is rejected with [`RuntimeError::EmptyCommand`]
//!   before any launching happens.

use std::path::Path;

use crate::error::RuntimeError;

/// One parsed command: executable, arguments, and display name.
///
/// # Example
/// ```
/// use procvisor::CommandSpec;
///
/// let spec = CommandSpec::parse("/usr/bin/sleep 5").unwrap();
/// assert_eq!(spec.program(), "/usr/bin/sleep");
/// assert_eq!(spec.args(), ["5"]);
/// assert_eq!(spec.name(), "sleep");
/// ```
#[derive(Clone, Debug)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    name: String,
}

impl CommandSpec {
    /// Parses a raw command string into a spec.
    ///
    /// Splits on whitespace (runs of whitespace count as one separator) and
    /// takes the first token as the executable. Returns
    /// [`RuntimeError::EmptyCommand`] when no token is present.
    pub fn parse(raw: &str) -> Result<Self, RuntimeError> {
        let mut tokens = raw.split_whitespace();
        let program = tokens.next().ok_or(RuntimeError::EmptyCommand)?.to_string();
        let args = tokens.map(str::to_string).collect();
        let name = display_name(&program);

        Ok(Self {
            program,
            args,
            name,
        })
    }

    /// Returns the executable token as given.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the argument tokens.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the display name (log tag) for this command.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Base filename of the executable token.
fn display_name(program: &str) -> String {
    Path::new(program)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_program_and_args() {
        let spec = CommandSpec::parse("echo hello world").unwrap();
        assert_eq!(spec.program(), "echo");
        assert_eq!(spec.args(), ["hello", "world"]);
        assert_eq!(spec.name(), "echo");
    }

    #[test]
    fn test_runs_of_whitespace_are_one_separator() {
        let spec = CommandSpec::parse("echo   hello\t world").unwrap();
        assert_eq!(spec.args(), ["hello", "world"]);
    }

    #[test]
    fn test_display_name_is_base_filename() {
        let spec = CommandSpec::parse("/usr/bin/sleep 30").unwrap();
        assert_eq!(spec.name(), "sleep");
        assert_eq!(spec.program(), "/usr/bin/sleep");
    }

    #[test]
    fn test_empty_command_is_rejected() {
        assert!(matches!(
            CommandSpec::parse(""),
            Err(RuntimeError::EmptyCommand)
        ));
        assert!(matches!(
            CommandSpec::parse("   \t  "),
            Err(RuntimeError::EmptyCommand)
        ));
    }

    #[test]
    fn test_quotes_are_not_interpreted() {
        let spec = CommandSpec::parse("echo 'hello world'").unwrap();
        assert_eq!(spec.args(), ["'hello", "world'"]);
    }
}
