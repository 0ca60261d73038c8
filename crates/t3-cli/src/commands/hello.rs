//! `t3 hello`: greet someone.

use owo_colors::OwoColorize;

use crate::{cli::HelloArgs, error::CliResult, output::OutputManager};

pub fn execute(args: HelloArgs, output: &OutputManager) -> CliResult<()> {
    let name = if output.supports_color() {
        args.name.cyan().bold().to_string()
    } else {
        args.name
    };
    output.print(&format!("Hello, {name}! \u{1f44b}"))?;
    Ok(())
}
