//! Display functions for command results

use super::formatters::{create_progress_bar, highlight_change, steps_line};
use crate::commands::{BenchmarkResult, NeighborsResult, SolveResult};
use crate::ladder::{Ladder, NotFound};
use crate::wordlists::LoadedDictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Write a ladder one word per line, followed by its step count
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_ladder<W: Write>(out: &mut W, ladder: &Ladder) -> io::Result<()> {
    for word in ladder.words() {
        writeln!(out, "{word}")?;
    }
    writeln!(out, "{}", steps_line(ladder.steps()).bright_cyan())?;
    writeln!(out)
}

/// Write the message for a search with no ladder
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_not_found<W: Write>(out: &mut W, not_found: &NotFound) -> io::Result<()> {
    writeln!(out, "{}", not_found.to_string().red())?;
    writeln!(out)
}

/// Print the result of a single search
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.text().bright_yellow().bold(),
        result.end.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let mut stdout = io::stdout();
    let written = match &result.outcome {
        Ok(ladder) if verbose => {
            for (i, pair) in ladder.words().windows(2).enumerate() {
                println!(
                    "  {:>2}. {}",
                    i + 1,
                    highlight_change(pair[0].text(), pair[1].text())
                );
            }
            println!();
            write_ladder(&mut stdout, ladder)
        }
        Ok(ladder) => write_ladder(&mut stdout, ladder),
        Err(not_found) => write_not_found(&mut stdout, not_found),
    };
    if let Err(e) = written {
        eprintln!("{} {e}", "error:".red().bold());
    }

    if verbose {
        println!(
            "  Expanded:   {} words ({} discovered)",
            result.stats.expanded, result.stats.discovered
        );
        println!("  Time:       {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print the neighbors of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBORS:".bright_cyan().bold(),
        result.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n{} of {} words are one letter away:",
        result.neighbors.len().to_string().bright_yellow(),
        result.dictionary_size
    );
    for neighbor in &result.neighbors {
        println!(
            "  • {}",
            highlight_change(result.word.text(), neighbor.text())
        );
    }
    if result.neighbors.is_empty() {
        println!("  {}", "(none - this word cannot start or end a ladder)".bright_black());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Searches:         {}", result.total_searches);
    println!(
        "   Ladders found:    {}",
        format!("{}", result.found).green()
    );
    println!(
        "   No ladder:        {}",
        format!("{}", result.not_found).yellow()
    );
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_steps)
            .bright_yellow()
            .bold()
    );
    println!("   Longest ladder:   {} steps", result.max_steps);
    println!("   Words expanded:   {}", result.total_expanded);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if result.found > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        let max_count = result.distribution.values().copied().max().unwrap_or(1);
        for steps in 0..=result.max_steps {
            if let Some(&count) = result.distribution.get(&steps) {
                let pct = (count as f64 / result.found as f64) * 100.0;
                let bar = create_progress_bar(count as f64, max_count as f64, 40);
                println!("   {steps:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
            }
        }
    }

    if let Some(longest) = &result.longest {
        println!("\n🪜 {}", "Longest ladder:".bright_cyan().bold());
        println!("   {longest}");
    }
}

/// Report a dictionary fallback on stderr
pub fn print_dictionary_notice(loaded: &LoadedDictionary) {
    if let Some(reason) = &loaded.fallback {
        eprintln!("{} {reason}", "warning:".yellow().bold());
        eprintln!("{}", "Reverting to default dictionary...".yellow());
    }
}
