//! Benchmark command
//!
//! Runs many random searches in parallel and summarizes ladder lengths.

use crate::core::{Dictionary, Word};
use crate::ladder::{Ladder, LadderSearch};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_searches: usize,
    pub found: usize,
    pub not_found: usize,
    pub average_steps: f64,
    pub max_steps: usize,
    pub distribution: HashMap<usize, usize>,
    pub total_expanded: usize,
    pub longest: Option<Ladder>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Draw `count` start/end pairs from the dictionary
///
/// The same seed always yields the same pairs for the same dictionary.
#[must_use]
pub fn sample_pairs(dictionary: &Dictionary, count: usize, seed: u64) -> Vec<(Word, Word)> {
    let words = dictionary.words();
    if words.is_empty() {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let start = &words[rng.random_range(0..words.len())];
            let end = &words[rng.random_range(0..words.len())];
            (start.clone(), end.clone())
        })
        .collect()
}

/// Search every pair in parallel
///
/// Each search copies the dictionary for itself, so the shared borrow is
/// never mutated.
pub fn run_benchmark(
    dictionary: &Dictionary,
    pairs: &[(Word, Word)],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(pairs.len() as u64);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        ) {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let search = LadderSearch::new(dictionary);
    let start = Instant::now();

    let outcomes: Vec<(Option<Ladder>, usize)> = pairs
        .par_iter()
        .map(|(from, to)| {
            let (outcome, stats) = search.find_path_with_stats(from, to);
            pb.inc(1);
            (outcome.ok(), stats.expanded)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_steps = 0;
    let mut total_expanded = 0;
    let mut longest: Option<Ladder> = None;

    for (ladder, expanded) in outcomes {
        total_expanded += expanded;
        let Some(ladder) = ladder else {
            continue;
        };

        let steps = ladder.steps();
        total_steps += steps;
        *distribution.entry(steps).or_insert(0) += 1;

        if longest.as_ref().is_none_or(|l| steps > l.steps()) {
            longest = Some(ladder);
        }
    }

    let total_searches = pairs.len();
    let found: usize = distribution.values().sum();
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        total_searches,
        found,
        not_found: total_searches - found,
        average_steps: if found > 0 {
            total_steps as f64 / found as f64
        } else {
            0.0
        },
        max_steps: longest.as_ref().map_or(0, Ladder::steps),
        distribution,
        total_expanded,
        longest,
        duration,
        searches_per_second: if secs > 0.0 {
            total_searches as f64 / secs
        } else {
            0.0
        },
    }
}
