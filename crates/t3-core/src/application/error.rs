//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed while materializing a project.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project already exists at target location and `force` was not given.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// The configuration could not be persisted.
    #[error("Failed to write configuration to {location}: {reason}")]
    ConfigWrite { location: String, reason: String },

    /// The requested configuration key is not set.
    #[error("Key '{key}' not found")]
    KeyNotFound { key: String },

    /// An in-memory adapter's shared state was poisoned by a panicking
    /// writer.
    #[error("In-memory {resource} is unusable after an earlier panic")]
    LockPoisoned { resource: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to write into it anyway".into(),
                "Choose a different project name".into(),
            ],
            Self::ConfigWrite { location, .. } => vec![
                format!("Could not save {}", location),
                "Check that the directory is writable".into(),
                "Point at another file with --config <FILE>".into(),
            ],
            Self::KeyNotFound { key } => vec![
                format!("'{}' is not set", key),
                "List the stored keys with: t3 config show".into(),
            ],
            Self::LockPoisoned { .. } => vec!["Run the command again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::LockPoisoned { .. } => ErrorCategory::Internal,
            Self::ConfigWrite { .. } => ErrorCategory::Configuration,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::KeyNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
