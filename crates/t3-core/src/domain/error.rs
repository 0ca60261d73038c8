// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through `T3Error`, which is `Clone`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template '{template}' has no content")]
    EmptyTemplate { template: String },

    #[error("Duplicate path in template: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("No template named '{0}' and no fallback layout available")]
    NoMatchingTemplate(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { reason, .. } => vec![
                format!("The project name {}", reason),
                "Avoid the characters / \\ : * ? \" < > |".into(),
                "Examples: my-project, my_app, project123".into(),
            ],
            Self::NoMatchingTemplate(name) => vec![
                format!("Template '{}' could not be resolved", name),
                "Try: t3 init list".into(),
            ],
            Self::EmptyTemplate { template } => vec![
                format!("Template '{}' is corrupted", template),
                "Please report this issue or use a different template".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::NoMatchingTemplate(_) => ErrorCategory::NotFound,
            Self::InvalidTemplate(_)
            | Self::EmptyTemplate { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
