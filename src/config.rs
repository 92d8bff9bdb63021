//! Run configuration
//!
//! Settings resolved from command-line flags and passed to commands.

use std::path::PathBuf;

/// Default number of letters per word
pub const WORD_LENGTH: usize = 5;

/// Default results file, relative to the working directory
pub const RESULTS_FILE: &str = "results.txt";

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderConfig {
    pub word_length: usize,
    pub dictionary_path: Option<PathBuf>,
    pub results_path: PathBuf,
    pub save_results: bool,
}

impl LadderConfig {
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_results(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_path = path.into();
        self
    }

    #[must_use]
    pub const fn without_saving(mut self) -> Self {
        self.save_results = false;
        self
    }

    /// Results path if saving is enabled
    #[must_use]
    pub fn results_target(&self) -> Option<&std::path::Path> {
        self.save_results.then_some(self.results_path.as_path())
    }
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            dictionary_path: None,
            results_path: PathBuf::from(RESULTS_FILE),
            save_results: true,
        }
    }
}
