//! `t3 status`: version, settings location and template count.

use t3_core::application::ConfigStore;

use crate::{commands::project_generator, error::CliResult, output::OutputManager};

pub fn execute(store: &ConfigStore, output: &OutputManager) -> CliResult<()> {
    let templates = project_generator()?.list_templates()?;

    let settings = if store.is_empty() {
        "none".to_string()
    } else {
        format!("{} key(s)", store.len())
    };

    let rows = vec![
        ("CLI".to_string(), format!("active, v{}", t3_core::VERSION)),
        ("Settings file".to_string(), store.location()),
        ("Settings".to_string(), settings),
        ("Templates".to_string(), templates.len().to_string()),
    ];
    output.table("T3 CLI Status", ["Component", "Status"], &rows)?;
    Ok(())
}
