//! Flags accepted by every `t3` subcommand.

use std::path::PathBuf;

use clap::{Args, builder::FalseyValueParser};

/// Flattened into [`super::Cli`]; each flag is `global` so it may follow the
/// subcommand (`t3 config show -q`).
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors and requested values.
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain output without ANSI colours.
    ///
    /// `NO_COLOR` follows <https://no-color.org>: any value other than an
    /// empty string, `0`, `false`, `no` or `off` turns colour off.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Settings file to use instead of `~/.t3/config.json`.
    #[arg(short = 'c', long, global = true, env = "T3_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        global: GlobalArgs,
    }

    #[test]
    fn verbosity_counts_repeats() {
        let h = Harness::try_parse_from(["t3", "-vvv"]).unwrap();
        assert_eq!(h.global.verbose, 3);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Harness::try_parse_from(["t3", "-q", "-v"]).is_err());
    }

    #[test]
    fn bare_no_color_flag_sets_it() {
        let h = Harness::try_parse_from(["t3", "--no-color"]).unwrap();
        assert!(h.global.no_color);
    }
}
