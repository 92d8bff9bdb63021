//! Word Ladder - CLI
//!
//! Shortest word ladders through a dictionary, with prompt, TUI and batch modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use word_ladder::{
    commands::{list_neighbors, run_benchmark, run_simple, sample_pairs, save_result, solve_words},
    config::{LadderConfig, RESULTS_FILE, WORD_LENGTH},
    core::Dictionary,
    output::{
        print_benchmark_result, print_dictionary_notice, print_neighbors_result,
        print_solve_result,
    },
    wordlists::load_dictionary,
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find the shortest word ladder between two words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: built-in word list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// File the latest ladder is written to
    #[arg(short = 'o', long, global = true, default_value = RESULTS_FILE)]
    results: PathBuf,

    /// Number of letters per word
    #[arg(short = 'l', long, global = true, default_value_t = WORD_LENGTH)]
    length: usize,

    /// Do not write the results file
    #[arg(long, global = true)]
    no_save: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for words and search repeatedly (default)
    Simple,

    /// Full-screen interactive mode
    Play,

    /// Find the ladder between two words
    Solve {
        /// Starting word
        start: String,

        /// Ending word
        end: String,

        /// Show each change and search effort
        #[arg(short, long)]
        verbose: bool,
    },

    /// List dictionary words one letter away from a word
    Neighbors {
        /// Word to inspect
        word: String,
    },

    /// Search random word pairs in parallel
    Benchmark {
        /// Number of random pairs to search
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Seed for pair selection
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

impl Cli {
    fn config(&self) -> LadderConfig {
        let mut config = LadderConfig::new(self.length).with_results(&self.results);
        if let Some(path) = &self.dictionary {
            config = config.with_dictionary(path);
        }
        if self.no_save {
            config = config.without_saving();
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    let loaded = load_dictionary(config.dictionary_path.as_deref(), config.word_length)
        .context("The default dictionary cannot be read")?;
    print_dictionary_notice(&loaded);
    eprintln!(
        "{}",
        format!(
            "Loaded {} {}-letter words from {}",
            loaded.dictionary.len(),
            config.word_length,
            loaded.source
        )
        .bright_black()
    );
    let dictionary = loaded.dictionary;

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&dictionary, &config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Play => run_play_command(&dictionary, &config),
        Commands::Solve {
            start,
            end,
            verbose,
        } => run_solve_command(&start, &end, verbose, &dictionary, &config),
        Commands::Neighbors { word } => {
            let result = list_neighbors(&word, &dictionary)?;
            print_neighbors_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, &dictionary);
            Ok(())
        }
    }
}

fn run_solve_command(
    start: &str,
    end: &str,
    verbose: bool,
    dictionary: &Dictionary,
    config: &LadderConfig,
) -> Result<()> {
    let result = solve_words(start, end, dictionary)?;
    print_solve_result(&result, verbose);

    if save_result(&result, config).map_err(|e| anyhow::anyhow!(e))? {
        println!(
            "{}",
            format!("Saved to {}", config.results_path.display()).bright_black()
        );
    }
    Ok(())
}

fn run_benchmark_command(count: usize, seed: u64, dictionary: &Dictionary) {
    println!(
        "Running benchmark on {count} random pairs of {}-letter words (seed {seed})...",
        dictionary.word_length()
    );

    let pairs = sample_pairs(dictionary, count, seed);
    let result = run_benchmark(dictionary, &pairs, true);
    print_benchmark_result(&result);
}

fn run_play_command(dictionary: &Dictionary, config: &LadderConfig) -> Result<()> {
    use word_ladder::interactive::{App, run_tui};

    let app = App::new(dictionary, config);
    run_tui(app)
}
