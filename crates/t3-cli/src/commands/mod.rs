//! Command handlers. Each submodule translates parsed arguments into calls on
//! the core services and renders the result; no business logic lives here.

use t3_adapters::{InMemoryTemplateStore, LocalFilesystem};
use t3_core::application::ProjectGenerator;

use crate::error::CliResult;

pub mod completions;
pub mod config;
pub mod hello;
pub mod init;
pub mod status;

/// Generator over the built-in templates and the real filesystem.
pub(crate) fn project_generator() -> CliResult<ProjectGenerator> {
    let store = InMemoryTemplateStore::with_builtin()?;
    Ok(ProjectGenerator::new(
        Box::new(store),
        Box::new(LocalFilesystem::new()),
    ))
}
