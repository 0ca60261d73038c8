//! # T3 CLI
//!
//! Project scaffolding and per-user settings.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` (so `T3_CONFIG`, `NO_COLOR`, `RUST_LOG` may come from it).
//! 2. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Open the settings store (`--config`, `T3_CONFIG`, or `~/.t3/config.json`).
//! 5. Build the [`OutputManager`].
//! 6. Dispatch to the appropriate command handler.
//! 7. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success                                   |
//! |  1   | Any runtime failure                       |
//! |  2   | Invalid arguments (reported by clap)      |

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use t3_core::application::ConfigStore;

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version land here too and exit 0.
        Err(e) => e.exit(),
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Open settings ──────────────────────────────────────────────────
    let store = AppConfig::open_store(cli.global.config.as_deref());
    let config = AppConfig::from_store(&store);

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;
    let color = !cli.global.no_color && !config.no_color;

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, store, &config, &output) {
        Ok(()) => {
            info!("T3 completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, store: ConfigStore, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Config(cmd) => commands::config::execute(cmd, store, output),
        Commands::Init(cmd) => commands::init::execute(cmd, config, output),
        Commands::Hello(args) => commands::hello::execute(args, output),
        Commands::Status => commands::status::execute(&store, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let msg = if color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
