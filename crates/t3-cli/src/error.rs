//! Error handling for the T3 CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use t3_core::error::T3Error;

pub use t3_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `t3-core`.
    #[error(transparent)]
    Core(#[from] T3Error),

    /// The user declined a confirmation prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// A prompt could not be shown or answered.
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// An I/O operation outside the core failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::Cancelled => vec!["No changes were made".into()],

            Self::Prompt { .. } => vec![
                "Run from an interactive terminal".into(),
                "Or pass the value as a flag (see --help)".into(),
            ],

            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get the error category for logging and styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Cancelled => ErrorCategory::UserError,
            Self::Prompt { .. } => ErrorCategory::UserError,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every runtime failure exits with 1; argument-parse errors keep
    /// clap's own code 2.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "\u{2717} Error:".red().bold(), // ✗
            self.to_string().red()
        ));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "  {} {}\n",
                    "\u{2192}".dimmed(), // →
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("Error: {self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::debug!("User error: {}", self),
            ErrorCategory::NotFound => tracing::debug!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, cancelled prompt).
    UserError,
    /// Missing key or template.
    NotFound,
    /// Settings could not be written.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert `std::io::Error` results into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use t3_core::application::ApplicationError;
    use t3_core::domain::DomainError;

    fn project_exists() -> CliError {
        CliError::Core(
            ApplicationError::ProjectExists {
                path: PathBuf::from("/tmp/demo"),
            }
            .into(),
        )
    }

    fn key_not_found(key: &str) -> CliError {
        CliError::Core(ApplicationError::KeyNotFound { key: key.into() }.into())
    }

    #[test]
    fn core_errors_display_transparently() {
        let err = CliError::Core(
            DomainError::InvalidProjectName {
                name: "a/b".into(),
                reason: "cannot contain '/'".into(),
            }
            .into(),
        );
        assert!(err.to_string().contains("a/b"));
        assert!(err.to_string().contains("cannot contain '/'"));
    }

    #[test]
    fn project_exists_suggests_force() {
        assert!(project_exists().suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn every_runtime_error_exits_with_one() {
        let errors = [
            project_exists(),
            key_not_found("k"),
            CliError::Cancelled,
            CliError::Prompt {
                message: "no tty".into(),
            },
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn key_not_found_message() {
        let err = key_not_found("editor");
        assert_eq!(err.to_string(), "Key 'editor' not found");
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn config_write_is_configuration_category() {
        let err = CliError::Core(
            ApplicationError::ConfigWrite {
                location: "/ro/config.json".into(),
                reason: "read-only".into(),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn format_plain_contains_error_and_suggestions() {
        let s = project_exists().format_plain(false);
        assert!(s.starts_with("Error: "));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_includes_cause() {
        let err = CliError::IoError {
            message: "reading cwd".into(),
            source: io::Error::other("boom"),
        };
        assert!(err.format_plain(true).contains("Caused by: boom"));
        assert!(!err.format_plain(false).contains("boom"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading current directory");
        assert!(matches!(cli, Err(CliError::IoError { ref message, .. }) if message == "reading current directory"));
    }
}
