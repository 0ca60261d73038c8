//! `t3 config`: read and write persisted settings.

use tracing::instrument;

use t3_core::application::{ApplicationError, ConfigStore};

use crate::{
    cli::{ConfigCommands, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Dispatch to the correct config subcommand.
#[instrument(skip_all)]
pub fn execute(cmd: ConfigCommands, mut store: ConfigStore, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show { format } => show(&store, format, output)?,

        ConfigCommands::Set { key, value } => {
            store.set(&key, value.as_str())?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::Get { key } => {
            let value = store.require(&key)?;
            output.value(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Delete { key } => {
            if !store.delete(&key)? {
                return Err(CliError::Core(ApplicationError::KeyNotFound { key }.into()));
            }
            output.success(&format!("Deleted '{key}'"))?;
        }

        ConfigCommands::Reset { yes } => {
            if !yes && !prompt::confirm("Are you sure you want to reset all configuration?")? {
                output.warning("Reset cancelled")?;
                return Err(CliError::Cancelled);
            }
            store.reset()?;
            output.success("Configuration reset")?;
        }

        ConfigCommands::Path => {
            output.value(&store.location())?;
        }
    }

    Ok(())
}

fn show(store: &ConfigStore, format: ListFormat, output: &OutputManager) -> CliResult<()> {
    match format {
        ListFormat::Json => {
            // Bypasses OutputManager so the document stays parseable in
            // quiet mode and pipes.
            let json = serde_json::to_string_pretty(&store.get_all())
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            println!("{json}");
        }
        ListFormat::Table => {
            if store.is_empty() {
                output.warning("No configuration found")?;
                return Ok(());
            }
            let rows: Vec<(String, String)> = store
                .get_all()
                .into_iter()
                .map(|(key, value)| (key, value.to_string()))
                .collect();
            output.table("T3 CLI Configuration", ["Key", "Value"], &rows)?;
        }
    }
    Ok(())
}
