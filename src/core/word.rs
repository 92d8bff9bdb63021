//! Word ladder word representation
//!
//! A Word is a non-empty run of ASCII letters, normalized to uppercase.

use std::fmt;

/// A dictionary word, uppercase ASCII letters only
///
/// Length is not fixed here; a [`Dictionary`](super::Dictionary) decides
/// which length it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word must contain only letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Only ASCII letters are accepted; they are uppercased after validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("cold").unwrap();
    /// assert_eq!(word.text(), "COLD");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c0ld").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        // Checked before case mapping: some non-ASCII letters uppercase to ASCII
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();
        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether `other` differs from this word in exactly one position
    ///
    /// Words of different length are never similar, and a word is not
    /// similar to itself.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let cat = Word::new("cat").unwrap();
    /// assert!(cat.is_one_letter_from(&Word::new("cot").unwrap()));
    /// assert!(!cat.is_one_letter_from(&cat));
    /// assert!(!cat.is_one_letter_from(&Word::new("cats").unwrap()));
    /// ```
    #[must_use]
    pub fn is_one_letter_from(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut differences = 0;
        for (a, b) in self.text.bytes().zip(other.text.bytes()) {
            if a != b {
                differences += 1;
                if differences > 1 {
                    return false;
                }
            }
        }

        differences == 1
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
