//! Interactive prompts.
//!
//! With the `interactive` feature (default) prompts go through `dialoguer`;
//! without it a plain stdin line is read. Either way prompting requires a
//! terminal on stdin: callers check [`is_interactive`] and fall back to a
//! refusal instead of blocking a script.

use std::io::IsTerminal;

use crate::error::{CliError, CliResult};

/// `true` when stdin and stderr are both terminals.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Ask a yes/no question. Defaults to "no".
pub fn confirm(question: &str) -> CliResult<bool> {
    ensure_interactive(question)?;
    imp::confirm(question)
}

/// Ask for a non-empty line of text.
pub fn input(question: &str) -> CliResult<String> {
    ensure_interactive(question)?;
    imp::input(question)
}

fn ensure_interactive(question: &str) -> CliResult<()> {
    if is_interactive() {
        Ok(())
    } else {
        Err(CliError::Prompt {
            message: format!("cannot ask \"{question}\" without a terminal"),
        })
    }
}

#[cfg(feature = "interactive")]
mod imp {
    use dialoguer::{Confirm, Input};

    use crate::error::{CliError, CliResult};

    pub fn confirm(question: &str) -> CliResult<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(prompt_error)
    }

    pub fn input(question: &str) -> CliResult<String> {
        Input::<String>::new()
            .with_prompt(question)
            .validate_with(|s: &String| {
                if s.trim().is_empty() {
                    Err("a value is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map(|s| s.trim().to_string())
            .map_err(prompt_error)
    }

    fn prompt_error(e: dialoguer::Error) -> CliError {
        CliError::Prompt {
            message: e.to_string(),
        }
    }
}

#[cfg(not(feature = "interactive"))]
mod imp {
    use std::io::{self, Write};

    use crate::error::{CliError, CliResult, IntoCli};

    pub fn confirm(question: &str) -> CliResult<bool> {
        let answer = read_line(&format!("{question} [y/N] "))?;
        let answer = answer.to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    pub fn input(question: &str) -> CliResult<String> {
        let answer = read_line(&format!("{question}: "))?;
        if answer.is_empty() {
            return Err(CliError::Prompt {
                message: "a value is required".into(),
            });
        }
        Ok(answer)
    }

    fn read_line(prompt: &str) -> CliResult<String> {
        let mut stderr = io::stderr();
        write!(stderr, "{prompt}").with_cli_context(|| "failed to write prompt")?;
        stderr.flush().with_cli_context(|| "failed to flush prompt")?;

        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .with_cli_context(|| "failed to read answer")?;
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_refuse_without_terminal() {
        // Test harness stdin is never a terminal.
        if is_interactive() {
            return;
        }
        assert!(matches!(confirm("Continue?"), Err(CliError::Prompt { .. })));
        assert!(matches!(input("Name"), Err(CliError::Prompt { .. })));
    }
}
