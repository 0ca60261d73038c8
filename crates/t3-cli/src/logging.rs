//! Diagnostics on stderr through `tracing`.
//!
//! The library crates only emit events; the binary installs the one
//! subscriber. `RUST_LOG`, when set, replaces the flag-derived filter.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Targets that receive the flag-derived level. Dependencies stay silent.
const T3_TARGETS: [&str; 3] = ["t3", "t3_core", "t3_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => t3_filter(level_for(args)),
    };

    let events = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

/// `--quiet` wins; otherwise each `-v` raises the level one step from WARN.
fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn t3_filter(level: LevelFilter) -> EnvFilter {
    let directives: Vec<String> = T3_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    EnvFilter::new(directives.join(","))
}
