use super::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if path is absolute (use `try_new` for fallible).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {:?}",
            path
        );
        Self(path)
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
