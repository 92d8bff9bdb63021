//! Search outcomes: a finished ladder, or the reason there is none

use crate::core::Word;
use std::fmt;

/// An ordered chain of words from start to end
///
/// Consecutive words differ in exactly one letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    pub(crate) const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Words from start to end
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of single-letter changes
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    #[must_use]
    pub fn start(&self) -> Option<&Word> {
        self.words.first()
    }

    #[must_use]
    pub fn end(&self) -> Option<&Word> {
        self.words.last()
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// No chain of one-letter steps joins the two words in the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub start: Word,
    pub end: Word,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot find a path between {} and {}.",
            self.start, self.end
        )
    }
}

impl std::error::Error for NotFound {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(list: &[&str]) -> Ladder {
        Ladder::new(list.iter().map(|s| Word::new(*s).unwrap()).collect())
    }

    #[test]
    fn steps_is_len_minus_one() {
        assert_eq!(ladder(&["cat"]).steps(), 0);
        assert_eq!(ladder(&["cat", "cot"]).steps(), 1);
        assert_eq!(ladder(&["cat", "cot", "cog", "dog"]).steps(), 3);
    }

    #[test]
    fn endpoints() {
        let l = ladder(&["cat", "cot", "cog"]);
        assert_eq!(l.start().unwrap().text(), "CAT");
        assert_eq!(l.end().unwrap().text(), "COG");
    }

    #[test]
    fn display_joins_with_arrows() {
        assert_eq!(ladder(&["cat", "cot", "cog"]).to_string(), "CAT → COT → COG");
        assert_eq!(ladder(&["cat"]).to_string(), "CAT");
    }

    #[test]
    fn not_found_message() {
        let err = NotFound {
            start: Word::new("cat").unwrap(),
            end: Word::new("dog").unwrap(),
        };
        assert_eq!(err.to_string(), "Cannot find a path between CAT and DOG.");
    }
}
