//! Dictionary loading utilities
//!
//! Reads line-oriented word lists, keeping only alphabetic words of the
//! configured length, and falls back to the embedded list when a file is
//! unusable.

use super::DEFAULT_WORDS;
use crate::core::{Dictionary, Word};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where a loaded dictionary came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Embedded => write!(f, "built-in word list"),
        }
    }
}

/// A dictionary plus how it was obtained
#[derive(Debug, Clone)]
pub struct LoadedDictionary {
    pub dictionary: Dictionary,
    pub source: DictionarySource,
    /// Why the requested file was not used, if it was not
    pub fallback: Option<String>,
}

/// Error type for dictionary loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// Neither the requested file nor the built-in list had usable words
    Empty { word_length: usize },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { word_length } => write!(
                f,
                "The default dictionary has no {word_length}-letter words"
            ),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Build a dictionary from newline-separated text
///
/// Lines are trimmed; empty lines, lines with anything but letters and lines
/// of the wrong length are skipped.
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::dictionary_from_str;
///
/// let dictionary = dictionary_from_str("cold\nwarm\nco-ld\ncolder\n", 4);
/// assert_eq!(dictionary.len(), 2);
/// ```
#[must_use]
pub fn dictionary_from_str(text: &str, word_length: usize) -> Dictionary {
    Dictionary::from_words(
        word_length,
        text.lines().filter_map(|line| parse_line(line, word_length)),
    )
}

/// Build a dictionary from an embedded string slice
#[must_use]
pub fn dictionary_from_slice(slice: &[&str], word_length: usize) -> Dictionary {
    Dictionary::from_words(
        word_length,
        slice.iter().filter_map(|s| parse_line(s, word_length)),
    )
}

fn parse_line(line: &str, word_length: usize) -> Option<Word> {
    let trimmed = line.trim();
    if trimmed.chars().count() != word_length {
        return None;
    }
    Word::new(trimmed).ok()
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(dictionary_from_str(&content, word_length))
}

/// Load the requested dictionary, falling back to the built-in list
///
/// With no path, the built-in list is used directly. A file that cannot be
/// read, or that holds no usable words, is replaced by the built-in list and
/// the reason is recorded in [`LoadedDictionary::fallback`].
///
/// # Errors
///
/// Returns `DictionaryError::Empty` if the built-in list has no words of
/// `word_length` either.
pub fn load_dictionary(
    path: Option<&Path>,
    word_length: usize,
) -> Result<LoadedDictionary, DictionaryError> {
    let mut fallback = None;

    if let Some(path) = path {
        match load_from_file(path, word_length) {
            Ok(dictionary) if !dictionary.is_empty() => {
                return Ok(LoadedDictionary {
                    dictionary,
                    source: DictionarySource::File(path.to_path_buf()),
                    fallback: None,
                });
            }
            Ok(_) => {
                fallback = Some(format!(
                    "{} contains no {word_length}-letter words",
                    path.display()
                ));
            }
            Err(e) => {
                fallback = Some(format!("{} cannot be read: {e}", path.display()));
            }
        }
    }

    let dictionary = dictionary_from_slice(DEFAULT_WORDS, word_length);
    if dictionary.is_empty() {
        return Err(DictionaryError::Empty { word_length });
    }

    Ok(LoadedDictionary {
        dictionary,
        source: DictionarySource::Embedded,
        fallback,
    })
}
