//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "persist a setting".

pub mod config_store;
pub mod project_generator;

pub use config_store::ConfigStore;
pub use project_generator::{DEFAULT_TEMPLATE, GeneratedProject, ProjectGenerator, TemplateInfo};
