use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Final project structure ready for materialization.
///
/// This is the output of template rendering.
/// It contains no business logic, only data.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidTemplate(
                "Project structure is empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    /// Relative paths of every entry, in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(FsEntry::path)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}
