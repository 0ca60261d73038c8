//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "t3",
    bin_name = "t3",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "T3 CLI - project scaffolding and per-user settings",
    long_about = "T3 generates starter project layouts from built-in templates \
                  and keeps your preferences in a small JSON settings file.",
    after_help = "EXAMPLES:\n\
        \x20 t3 init project --name my-app --template python\n\
        \x20 t3 init list\n\
        \x20 t3 config set init.template web\n\
        \x20 t3 completions bash > ~/.local/share/bash-completion/completions/t3",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage persisted settings.
    #[command(
        subcommand,
        about = "Configuration management",
        after_help = "EXAMPLES:\n\
            \x20 t3 config set editor vim\n\
            \x20 t3 config get editor\n\
            \x20 t3 config show --format json\n\
            \x20 t3 config reset --yes"
    )]
    Config(ConfigCommands),

    /// Scaffold new projects.
    #[command(
        subcommand,
        about = "Initialize new project",
        after_help = "EXAMPLES:\n\
            \x20 t3 init project --name my-app\n\
            \x20 t3 init project -n site -t web --dry-run\n\
            \x20 t3 init list"
    )]
    Init(InitCommands),

    /// Say hello to someone.
    #[command(about = "Say hello to someone")]
    Hello(HelloArgs),

    /// Show where settings live and what is available.
    #[command(about = "Show current status")]
    Status,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 t3 completions bash > ~/.local/share/bash-completion/completions/t3\n\
            \x20 t3 completions zsh  > ~/.zfunc/_t3\n\
            \x20 t3 completions fish > ~/.config/fish/completions/t3.fish"
    )]
    Completions(CompletionsArgs),
}

// ── config ────────────────────────────────────────────────────────────────────

/// Subcommands for `t3 config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print all settings.
    #[command(visible_alias = "list")]
    Show {
        /// Output format.
        #[arg(long = "format", value_enum, default_value = "table")]
        format: ListFormat,
    },
    /// Set a key to a value.
    Set {
        /// Setting key, e.g. `init.template`.
        key: String,
        /// New value (stored as a string).
        value: String,
    },
    /// Print the value of a key.
    Get {
        /// Setting key.
        key: String,
    },
    /// Remove a key.
    #[command(visible_alias = "rm")]
    Delete {
        /// Setting key.
        key: String,
    },
    /// Delete every setting and the settings file.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
    /// Print the path to the settings file.
    Path,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Subcommands for `t3 init`.
#[derive(Debug, Subcommand)]
pub enum InitCommands {
    /// Create a project directory from a template.
    Project(ProjectArgs),

    /// List available templates.
    #[command(visible_alias = "ls")]
    List {
        /// Output format.
        #[arg(long = "format", value_enum, default_value = "table")]
        format: ListFormat,
    },
}

/// Arguments for `t3 init project`.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project name; also the directory created under the current directory.
    /// Prompted for when omitted.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Template to use (`basic`, `python`, `web`).
    ///
    /// Defaults to the `init.template` setting, then `basic`. Unknown names
    /// fall back to `basic`.
    #[arg(short = 't', long = "template", value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Write into an existing directory without asking.
    #[arg(short = 'f', long = "force", help = "Overwrite files in an existing directory")]
    pub force: bool,

    /// Answer yes to the overwrite confirmation.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation prompts")]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── hello ─────────────────────────────────────────────────────────────────────

/// Arguments for `t3 hello`.
#[derive(Debug, Args)]
pub struct HelloArgs {
    /// Name to greet.
    #[arg(short = 'n', long = "name", default_value = "World")]
    pub name: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `t3 completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON document on stdout.
    Json,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_project() {
        let cli = Cli::parse_from([
            "t3", "init", "project", "--name", "demo", "-t", "python", "--force",
        ]);
        let Commands::Init(InitCommands::Project(args)) = cli.command else {
            panic!("expected init project");
        };
        assert_eq!(args.name.as_deref(), Some("demo"));
        assert_eq!(args.template.as_deref(), Some("python"));
        assert!(args.force);
        assert!(!args.yes);
    }

    #[test]
    fn init_project_arguments_are_optional() {
        let cli = Cli::parse_from(["t3", "init", "project"]);
        let Commands::Init(InitCommands::Project(args)) = cli.command else {
            panic!("expected init project");
        };
        assert!(args.name.is_none());
        assert!(args.template.is_none());
    }

    #[test]
    fn parse_config_set() {
        let cli = Cli::parse_from(["t3", "config", "set", "editor", "vim"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Set { ref key, ref value })
                if key == "editor" && value == "vim"
        ));
    }

    #[test]
    fn config_set_requires_value() {
        assert!(Cli::try_parse_from(["t3", "config", "set", "editor"]).is_err());
    }

    #[test]
    fn hello_defaults_to_world() {
        let cli = Cli::parse_from(["t3", "hello"]);
        let Commands::Hello(args) = cli.command else {
            panic!("expected hello");
        };
        assert_eq!(args.name, "World");
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::parse_from(["t3", "config", "path", "--config", "/tmp/t3.json"]);
        assert_eq!(
            cli.global.config.as_deref(),
            Some(std::path::Path::new("/tmp/t3.json"))
        );
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["t3", "--quiet", "--verbose", "status"]);
        assert!(result.is_err());
    }
}
