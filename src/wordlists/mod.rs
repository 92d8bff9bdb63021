//! Word lists for word ladders
//!
//! Provides the embedded fallback dictionary and file loading.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use loader::{DictionaryError, DictionarySource, LoadedDictionary, load_dictionary};
