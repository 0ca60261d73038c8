pub mod common;
pub mod common_files;
pub mod config;
pub mod project_name;
pub mod project_structure;
pub mod template;

pub use crate::domain::DomainError;
pub use config::{ConfigMap, ConfigValue};
pub use project_name::ProjectName;
pub use project_structure::ProjectStructure;
pub use template::{RenderContext, Template, TemplateNode};
