//! `t3 init`: scaffold a project from a template, or list templates.
//!
//! Dispatch sequence for `init project`:
//! 1. Resolve the name (flag or prompt) and template (flag, setting, `basic`)
//! 2. Early-exit with a listing if `--dry-run`
//! 3. Generate; if the directory exists, confirm and retry with force
//! 4. Report what was created

use std::path::Path;

use tracing::{debug, instrument};

use t3_core::application::{GeneratedProject, ProjectGenerator};

use crate::{
    cli::{InitCommands, ListFormat, ProjectArgs},
    commands::project_generator,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt,
};

/// Dispatch to the correct init subcommand.
pub fn execute(cmd: InitCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        InitCommands::Project(args) => project(args, config, output),
        InitCommands::List { format } => list(format, output),
    }
}

#[instrument(skip_all, fields(name = ?args.name, template = ?args.template))]
fn project(args: ProjectArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let name = match args.name {
        Some(name) => name,
        None => prompt::input("Enter project name")?,
    };
    let template = args
        .template
        .unwrap_or_else(|| config.default_template.clone());

    let cwd = std::env::current_dir().with_cli_context(|| "failed to read current directory")?;
    let root = cwd.join(&name);
    debug!(root = %root.display(), %template, "resolved target");

    let generator = project_generator()?;

    if args.dry_run {
        return dry_run(&generator, &root, &name, &template, output);
    }

    let project = match generator.generate(&root, &name, &template, args.force) {
        Err(e) if e.is_project_exists() => {
            if !args.yes {
                if !prompt::is_interactive() {
                    return Err(e.into());
                }
                let question = format!("Directory '{name}' already exists. Continue?");
                if !prompt::confirm(&question)? {
                    output.warning("Project initialization cancelled")?;
                    return Err(CliError::Cancelled);
                }
            }
            generator.generate(&root, &name, &template, true)?
        }
        other => other?,
    };

    report(&project, &name, &template, output)
}

fn dry_run(
    generator: &ProjectGenerator,
    root: &Path,
    name: &str,
    template: &str,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = generator.plan(root, name, template)?;

    output.header(&format!("Would create in {}:", root.display()))?;
    for path in plan.paths() {
        output.print(&format!("  {}", path.display()))?;
    }
    output.info("Dry run, nothing was written")?;
    Ok(())
}

fn report(
    project: &GeneratedProject,
    name: &str,
    requested: &str,
    output: &OutputManager,
) -> CliResult<()> {
    if project.fell_back_from(requested) {
        output.info(&format!(
            "Unknown template '{requested}', used '{}'",
            project.template
        ))?;
    }
    output.success(&format!("Project '{name}' initialized successfully!"))?;
    output.print(&format!("Project created at: {}", project.root.display()))?;
    debug!(entries = project.created.len(), "project written");
    Ok(())
}

fn list(format: ListFormat, output: &OutputManager) -> CliResult<()> {
    let templates = project_generator()?.list_templates()?;

    match format {
        ListFormat::Json => {
            let json = serde_json::Value::Array(
                templates
                    .iter()
                    .map(|t| serde_json::json!({ "name": t.name, "description": t.description }))
                    .collect(),
            );
            println!("{json:#}");
        }
        ListFormat::Table => {
            let rows: Vec<(String, String)> = templates
                .into_iter()
                .map(|t| (t.name, t.description))
                .collect();
            output.table("Available Templates", ["Name", "Description"], &rows)?;
        }
    }
    Ok(())
}
