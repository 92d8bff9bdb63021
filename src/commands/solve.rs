//! Single ladder search command
//!
//! Validates a start/end pair, runs the search and optionally saves the result.

use crate::config::LadderConfig;
use crate::core::{Dictionary, InputError, Word};
use crate::ladder::{Ladder, LadderSearch, NotFound, SearchStats};
use crate::output::results::save_ladder;
use std::time::{Duration, Instant};

/// Which of the two inputs was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    Start(InputError),
    End(InputError),
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start(e) => write!(f, "Invalid starting word: {e}"),
            Self::End(e) => write!(f, "Invalid ending word: {e}"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Result of one search
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub start: Word,
    pub end: Word,
    pub outcome: Result<Ladder, NotFound>,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub fn ladder(&self) -> Option<&Ladder> {
        self.outcome.as_ref().ok()
    }
}

/// Validate both words against `dictionary` and search between them
///
/// # Errors
///
/// Returns `SolveError` naming the first word that fails validation.
pub fn solve_words(
    start: &str,
    end: &str,
    dictionary: &Dictionary,
) -> Result<SolveResult, SolveError> {
    let start = dictionary.validate(start).map_err(SolveError::Start)?;
    let end = dictionary.validate(end).map_err(SolveError::End)?;
    Ok(solve(start, end, dictionary))
}

/// Search between two already-validated words
#[must_use]
pub fn solve(start: Word, end: Word, dictionary: &Dictionary) -> SolveResult {
    let timer = Instant::now();
    let (outcome, stats) = LadderSearch::new(dictionary).find_path_with_stats(&start, &end);

    SolveResult {
        start,
        end,
        outcome,
        stats,
        duration: timer.elapsed(),
    }
}

/// Save a found ladder to the configured results file
///
/// Returns whether anything was written. Nothing is written when saving is
/// disabled or no ladder was found.
///
/// # Errors
///
/// Returns an error message if the file cannot be written.
pub fn save_result(result: &SolveResult, config: &LadderConfig) -> Result<bool, String> {
    let (Some(path), Some(ladder)) = (config.results_target(), result.ladder()) else {
        return Ok(false);
    };

    save_ladder(path, ladder)
        .map_err(|e| format!("Cannot write results to {}: {e}", path.display()))?;
    Ok(true)
}
