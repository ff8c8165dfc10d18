//! Shared error handling for CLI commands.
//!
//! Commands return [`CliResult`] so `main` can map failures onto stable
//! exit codes for scripting.

use std::fmt;

/// Process exit codes for the headless commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Invalid arguments or configuration values
    ValidationError = 1,
    /// File system or encoding failure
    IoError = 2,
}

impl ExitCode {
    /// The numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliErrorKind {
    Validation,
    Io,
}

/// A CLI command failure carrying a user-facing message and exit code.
#[derive(Debug)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

impl CliError {
    /// A validation failure (bad arguments, bad config values).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// An I/O failure (unreadable input, unwritable output).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// The exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_stable() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("bad").exit_code().code(), 1);
        assert_eq!(CliError::io("broken").exit_code().code(), 2);
    }

    #[test]
    fn test_display_shows_message() {
        let err = CliError::validation("rows must be positive");
        assert_eq!(err.to_string(), "rows must be positive");
    }
}
