//! Unified error handling for T3 Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for T3 Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum T3Error {
    /// Errors from the domain layer (business rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl T3Error {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for the "target directory exists, ask before writing" signal.
    pub fn is_project_exists(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::ProjectExists { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type T3Result<T> = Result<T, T3Error>;
