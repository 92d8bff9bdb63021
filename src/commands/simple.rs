//! Simple interactive CLI mode
//!
//! Prompts for a start and end word, prints and saves the ladder, and offers
//! another search until the user declines.

use super::solve::{save_result, solve};
use crate::config::LadderConfig;
use crate::core::{Dictionary, Word};
use crate::output::display::{write_ladder, write_not_found};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the prompt loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(dictionary: &Dictionary, config: &LadderConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_simple_with(dictionary, config, &mut input, &mut output)
}

/// Run the prompt loop over arbitrary input and output
///
/// End of input is treated as the user quitting.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    config: &LadderConfig,
    input: &mut R,
    output: &mut W,
) -> Result<(), String> {
    let io_err = |e: io::Error| e.to_string();

    writeln!(output, "\n{}", "═".repeat(60).cyan()).map_err(io_err)?;
    writeln!(output, "{}", "  Word Ladder - Interactive Mode".bright_cyan().bold())
        .map_err(io_err)?;
    writeln!(output, "{}\n", "═".repeat(60).cyan()).map_err(io_err)?;
    writeln!(
        output,
        "Change one letter at a time using {} {}-letter words.\n",
        dictionary.len(),
        dictionary.word_length()
    )
    .map_err(io_err)?;

    loop {
        let Some(start) = prompt_word(dictionary, "Enter the starting word", input, output)? else {
            break;
        };
        let Some(end) = prompt_word(dictionary, "Enter the ending word", input, output)? else {
            break;
        };

        writeln!(output).map_err(io_err)?;
        let result = solve(start, end, dictionary);
        match &result.outcome {
            Ok(ladder) => write_ladder(output, ladder).map_err(io_err)?,
            Err(not_found) => write_not_found(output, not_found).map_err(io_err)?,
        }

        match save_result(&result, config) {
            Ok(true) => writeln!(
                output,
                "Saved to {}\n",
                config.results_path.display().to_string().bright_black()
            )
            .map_err(io_err)?,
            Ok(false) => {}
            Err(e) => writeln!(output, "{}\n", e.red()).map_err(io_err)?,
        }

        let again = read_line("Search again? (yes/no)", input, output)?;
        if !matches!(
            again.as_deref().map(str::to_lowercase).as_deref(),
            Some("yes" | "y")
        ) {
            break;
        }
        writeln!(output).map_err(io_err)?;
    }

    writeln!(output, "\nTerminating program...").map_err(io_err)?;
    Ok(())
}

/// Prompt until the user enters a valid dictionary word
///
/// Returns `None` at end of input.
fn prompt_word<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Word>, String> {
    loop {
        let Some(line) = read_line(prompt, input, output)? else {
            return Ok(None);
        };

        match dictionary.validate(&line) {
            Ok(word) => return Ok(Some(word)),
            Err(e) => {
                writeln!(output, "❌ {}", e.to_string().red()).map_err(|e| e.to_string())?;
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>, String> {
    write!(output, "{prompt}: ").map_err(|e| e.to_string())?;
    output.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
