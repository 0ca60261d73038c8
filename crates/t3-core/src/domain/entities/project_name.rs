//! The `ProjectName` value object.
//!
//! A `ProjectName` is the only way to reach the generator, so every name that
//! ends up on disk has passed [`ProjectName::parse`].

use std::fmt;

use crate::domain::error::DomainError;

/// Characters that are rejected because they are hostile to at least one
/// common filesystem.
pub const FORBIDDEN_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Maximum name length, counted in characters.
pub const MAX_LEN: usize = 255;

/// A validated project name.
///
/// Invariants:
/// - not empty and not whitespace-only
/// - contains none of [`FORBIDDEN_CHARS`]
/// - at most [`MAX_LEN`] characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate `name` and wrap it.
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(invalid(&name, "cannot be empty"));
        }

        if let Some(c) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(invalid(&name, &format!("cannot contain '{c}'")));
        }

        let len = name.chars().count();
        if len > MAX_LEN {
            return Err(invalid(
                &name,
                &format!("is {len} characters long (maximum is {MAX_LEN})"),
            ));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(name: &str, reason: &str) -> DomainError {
    DomainError::InvalidProjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
