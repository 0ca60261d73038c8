//! Core domain layer for T3.
//!
//! This module contains pure business logic. All I/O is handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: observability belongs to the application and CLI layers
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
pub mod entities;
pub mod error;

mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    common_files::common_nodes,
    config::{ConfigMap, ConfigValue},
    project_name::ProjectName,
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    template::{RenderContext, Template, TemplateBuilder, TemplateNode},
};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_rejects_path_hostile_name() {
        let err = DomainValidator::validate_project_name("a/b").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("a/b"));
    }

    #[test]
    fn validator_returns_parsed_name() {
        let name = DomainValidator::validate_project_name("my-app").unwrap();
        assert_eq!(name.as_str(), "my-app");
    }

    #[test]
    fn invalid_name_has_suggestions() {
        let err = DomainValidator::validate_project_name("").unwrap_err();
        assert!(!err.suggestions().is_empty());
    }
}
