//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `t3-adapters` crate provides implementations.

use std::path::Path;

use thiserror::Error;

use crate::domain::{ConfigMap, Template};
use crate::error::T3Result;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `t3_adapters::filesystem::LocalFilesystem` (production)
/// - `t3_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> T3Result<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> T3Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> T3Result<()>;
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `t3_adapters::template_store::InMemoryTemplateStore` (built-in templates)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get a template by exact name.
    fn get(&self, name: &str) -> T3Result<Option<Template>>;

    /// List all available templates.
    fn list(&self) -> T3Result<Vec<Template>>;
}

/// Why the persisted configuration could not be read.
///
/// Never surfaced to users: `ConfigStore` treats it as "no configuration yet".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigLoadError {
    #[error("could not read {location}: {reason}")]
    Io { location: String, reason: String },

    #[error("could not parse {location}: {reason}")]
    Parse { location: String, reason: String },
}

/// Port for the persisted configuration document.
///
/// Implemented by:
/// - `t3_adapters::config_storage::JsonFileStorage` (production)
/// - `t3_adapters::config_storage::MemoryConfigStorage` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStorage: Send + Sync {
    /// Read the whole mapping. `Ok(None)` means nothing has been stored yet.
    fn read(&self) -> Result<Option<ConfigMap>, ConfigLoadError>;

    /// Replace the stored mapping, creating parent locations as needed.
    fn write(&self, config: &ConfigMap) -> T3Result<()>;

    /// Delete the stored document. Deleting nothing is not an error.
    fn remove(&self) -> T3Result<()>;

    /// Human-readable location of the document (a path for file storage).
    fn location(&self) -> String;
}
