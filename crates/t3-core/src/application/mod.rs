//! Application layer for T3.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ConfigStore, ProjectGenerator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Business rules such as
//! project name validation live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ConfigStore, GeneratedProject, ProjectGenerator,
    TemplateInfo, // DTO for template metadata
};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigLoadError, ConfigStorage, Filesystem, TemplateStore};

pub use error::ApplicationError;
