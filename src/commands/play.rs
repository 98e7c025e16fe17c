//! Interactive elimination mode
//!
//! Text-based loop: enter each guess with the clues the game showed, and the
//! remaining candidates are listed.

use crate::engine::ConstraintEngine;
use crate::output::formatters::format_candidates;
use crate::wordlists::DictionarySource;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Settings for the interactive loop
pub struct PlayConfig {
    /// List candidates when at most this many remain
    pub show_limit: usize,
}

impl PlayConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self { show_limit: 20 }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn print_help<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Enter each guess followed by its clues, e.g. `crane GYBBG`:")?;
    writeln!(output, "  - G/g/🟩 for green (correct position)")?;
    writeln!(output, "  - Y/y/🟨 for yellow (in the word, wrong position)")?;
    writeln!(output, "  - B/b/-/_/⬜ for gray (not in the word)")?;
    writeln!(output, "Commands: 'list' to show all candidates, 'new' to start over, 'quit' to exit\n")?;
    Ok(())
}

fn print_status<W: Write>(engine: &ConstraintEngine, limit: usize, output: &mut W) -> Result<()> {
    let count = engine.candidate_count();

    match count {
        0 => writeln!(
            output,
            "{}",
            "❌ No candidates remain! The clues may be inconsistent; type 'new' to start over."
                .red()
        )?,
        1 => {
            let word = engine.first_candidate().unwrap_or_default();
            writeln!(
                output,
                "🎉 Solved: {}",
                word.to_uppercase().bright_green().bold()
            )?;
        }
        _ => {
            writeln!(output, "{count} candidates remaining")?;
            if count <= limit {
                writeln!(output, "{}", format_candidates(&engine.candidates(), limit))?;
            }
        }
    }

    Ok(())
}

/// Run the interactive loop until `quit` or end of input
///
/// Rejected guesses are reported and leave the engine unchanged.
///
/// # Errors
///
/// Returns an error on I/O failure or if the dictionary cannot be reloaded
/// for `new`.
pub fn run_play<D, R, W>(
    engine: &mut ConstraintEngine,
    source: &D,
    config: &PlayConfig,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    D: DictionarySource + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "\n{}",
        format!(
            "Wordle Eliminator - {} letters, {} words",
            engine.word_length(),
            engine.candidate_count()
        )
        .bright_cyan()
        .bold()
    )?;
    print_help(&mut output)?;

    let mut line = String::new();

    loop {
        write!(output, "guess> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match line.trim() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                engine.reset(source)?;
                writeln!(output, "\n🔄 New puzzle started!\n")?;
                print_status(engine, config.show_limit, &mut output)?;
            }
            "list" | "l" => {
                writeln!(output, "{}", format_candidates(&engine.candidates(), usize::MAX))?;
            }
            "help" | "h" | "?" => print_help(&mut output)?,
            entry => {
                let Some((guess, clues)) = entry.split_once(char::is_whitespace) else {
                    writeln!(output, "Enter a guess and its clues, e.g. `crane GYBBG`")?;
                    continue;
                };

                match engine.guess(guess, clues) {
                    Ok(()) => print_status(engine, config.show_limit, &mut output)?,
                    Err(e) => writeln!(output, "❌ {}", e.to_string().red())?,
                }
            }
        }
    }
}
