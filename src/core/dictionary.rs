//! Fixed-length word set with stable iteration order
//!
//! The dictionary is the universe of valid ladder rungs. Iteration follows
//! first-insertion order so searches are reproducible.

use super::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// A set of unique words that all share one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    word_length: usize,
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

/// Rejection reasons for user-entered words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    WrongLength { expected: usize, actual: usize },
    NotAlphabetic,
    NotInDictionary(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NotAlphabetic => write!(f, "Word must contain only letters"),
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the dictionary"),
        }
    }
}

impl std::error::Error for InputError {}

impl Dictionary {
    /// Create an empty dictionary for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            words: Vec::new(),
            index: FxHashSet::default(),
        }
    }

    /// Build a dictionary from words, keeping only those of `word_length`
    ///
    /// Duplicates keep their first position.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Dictionary, Word};
    ///
    /// let words = ["cat", "cot", "coat", "cat"].map(|s| Word::new(s).unwrap());
    /// let dictionary = Dictionary::from_words(3, words);
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    #[must_use]
    pub fn from_words(word_length: usize, words: impl IntoIterator<Item = Word>) -> Self {
        let mut dictionary = Self::new(word_length);
        for word in words {
            dictionary.insert(word);
        }
        dictionary
    }

    /// Add a word; returns false if it has the wrong length or is already present
    pub fn insert(&mut self, word: Word) -> bool {
        if word.len() != self.word_length || self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Words in insertion order, as a slice
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check user input against this dictionary
    ///
    /// Surrounding whitespace is ignored and case is normalized. Checks run in
    /// order: length, letters only, membership.
    ///
    /// # Errors
    /// Returns the first `InputError` the input fails.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Dictionary, InputError, Word};
    ///
    /// let dictionary = Dictionary::from_words(4, [Word::new("cold").unwrap()]);
    /// assert_eq!(dictionary.validate(" cold ").unwrap().text(), "COLD");
    /// assert!(matches!(dictionary.validate("warm"), Err(InputError::NotInDictionary(_))));
    /// ```
    pub fn validate(&self, input: &str) -> Result<Word, InputError> {
        let trimmed = input.trim();
        let actual = trimmed.chars().count();

        if actual != self.word_length {
            return Err(InputError::WrongLength {
                expected: self.word_length,
                actual,
            });
        }

        let word = Word::new(trimmed).map_err(|_| InputError::NotAlphabetic)?;

        if !self.contains(&word) {
            return Err(InputError::NotInDictionary(word.text().to_string()));
        }

        Ok(word)
    }

    /// Words in the dictionary exactly one letter away from `word`
    #[must_use]
    pub fn neighbors_of(&self, word: &Word) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|candidate| word.is_one_letter_from(candidate))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(length: usize, words: &[&str]) -> Dictionary {
        Dictionary::from_words(length, words.iter().map(|s| Word::new(*s).unwrap()))
    }

    #[test]
    fn from_words_filters_length() {
        let dict = dictionary(4, &["cold", "cat", "warm", "spare"]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.words()[0].text(), "COLD");
        assert_eq!(dict.words()[1].text(), "WARM");
    }

    #[test]
    fn from_words_dedups_keeping_first() {
        let dict = dictionary(3, &["dog", "cat", "DOG", "cot"]);
        let texts: Vec<&str> = dict.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["DOG", "CAT", "COT"]);
    }

    #[test]
    fn insert_rejects_duplicates_and_wrong_length() {
        let mut dict = Dictionary::new(3);
        assert!(dict.insert(Word::new("cat").unwrap()));
        assert!(!dict.insert(Word::new("cat").unwrap()));
        assert!(!dict.insert(Word::new("cats").unwrap()));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn contains_is_exact() {
        let dict = dictionary(3, &["cat"]);
        assert!(dict.contains(&Word::new("CAT").unwrap()));
        assert!(!dict.contains(&Word::new("cot").unwrap()));
    }

    #[test]
    fn validate_accepts_member() {
        let dict = dictionary(4, &["cold", "warm"]);
        assert_eq!(dict.validate("Warm\n").unwrap().text(), "WARM");
    }

    #[test]
    fn validate_rejects_wrong_length() {
        let dict = dictionary(4, &["cold"]);
        assert_eq!(
            dict.validate("colder"),
            Err(InputError::WrongLength {
                expected: 4,
                actual: 6
            })
        );
    }

    #[test]
    fn validate_rejects_non_alphabetic() {
        let dict = dictionary(4, &["cold"]);
        assert_eq!(dict.validate("c0ld"), Err(InputError::NotAlphabetic));
        assert_eq!(dict.validate("co-d"), Err(InputError::NotAlphabetic));
    }

    #[test]
    fn validate_rejects_letters_that_uppercase_to_ascii() {
        let dict = dictionary(3, &["ice", "cat"]);
        assert_eq!(dict.validate("ıce"), Err(InputError::NotAlphabetic));
        assert_eq!(
            dict.validate("ßa"),
            Err(InputError::WrongLength {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn validate_rejects_unknown_word() {
        let dict = dictionary(4, &["cold"]);
        assert_eq!(
            dict.validate("warm"),
            Err(InputError::NotInDictionary("WARM".to_string()))
        );
        assert_eq!(
            dict.validate("warm").unwrap_err().to_string(),
            "'WARM' is not in the dictionary"
        );
    }

    #[test]
    fn neighbors_of_lists_one_letter_words() {
        let dict = dictionary(3, &["cat", "cot", "cog", "dog", "cag"]);
        let neighbors: Vec<&str> = dict
            .neighbors_of(&Word::new("cat").unwrap())
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(neighbors, vec!["COT", "CAG"]);
    }
}
