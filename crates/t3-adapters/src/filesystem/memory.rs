//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use t3_core::{
    application::{ApplicationError, ports::Filesystem},
    error::T3Result,
};

/// In-memory filesystem for testing.
///
/// Clones share the same underlying tree, so a test can hand one clone to a
/// service and inspect the other.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// `true` if `path` is a known directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> T3Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { resource: "filesystem" })?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> T3Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { resource: "filesystem" })?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_dir_all(&self, path: &Path) -> T3Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { resource: "filesystem" })?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}
