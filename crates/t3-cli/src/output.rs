//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::{Alignment, Term, measure_text_width, pad_str};
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on flags and settings.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded settings.
    ///
    /// Colour is off when `--no-color`/`NO_COLOR` is set, when the
    /// `output.no_color` setting is truthy, or when stdout is not a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.no_color || !io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Command result that scripts may capture (`config get`, `config path`).
    /// Printed even in quiet mode.
    pub fn value(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Titled two-column table. Suppressed in quiet mode.
    pub fn table(&self, title: &str, headers: [&str; 2], rows: &[(String, String)]) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.header(title)?;
        for line in render_table(headers, rows) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }
}

/// Lay out rows under a header with the first column padded to its widest
/// cell.
fn render_table(headers: [&str; 2], rows: &[(String, String)]) -> Vec<String> {
    let width = rows
        .iter()
        .map(|(left, _)| measure_text_width(left))
        .chain(std::iter::once(measure_text_width(headers[0])))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "{}  {}",
        pad_str(headers[0], width, Alignment::Left, None),
        headers[1]
    ));
    lines.push(format!(
        "{}  {}",
        "-".repeat(width),
        "-".repeat(measure_text_width(headers[1]).max(5))
    ));
    for (left, right) in rows {
        lines.push(format!(
            "{}  {}",
            pad_str(left, width, Alignment::Left, None),
            right
        ));
    }
    lines
}

// ── tests ─────────────────────────────────────────────────────────────────────
