use crate::domain::{
    entities::{ProjectName, ProjectStructure, Template},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_name(name: &str) -> Result<ProjectName, DomainError> {
        ProjectName::parse(name)
    }

    pub fn validate_template(template: &Template) -> Result<(), DomainError> {
        template.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
