//! Infrastructure adapters for T3.
//!
//! This crate implements the ports defined in `t3-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod config_storage;
pub mod filesystem;
pub mod template_store;

// Re-export commonly used adapters
pub use config_storage::{JsonFileStorage, MemoryConfigStorage};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::InMemoryTemplateStore;
