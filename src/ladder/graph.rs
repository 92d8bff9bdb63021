//! Implicit word graph over a shrinking working set
//!
//! Vertices are the words still in the working set; an edge joins two words
//! that differ in exactly one position. Asking for a word's neighbors also
//! consumes them, so every word is handed out at most once per graph.

use crate::core::{Dictionary, Word};
use rustc_hash::FxHashSet;

/// Per-search working copy of a dictionary
#[derive(Debug, Clone)]
pub struct WordGraph {
    remaining: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordGraph {
    /// Copy `dictionary` into a fresh working set
    ///
    /// The dictionary itself is never touched by the graph.
    #[must_use]
    pub fn new(dictionary: &Dictionary) -> Self {
        Self {
            remaining: dictionary.words().to_vec(),
            index: dictionary.iter().cloned().collect(),
        }
    }

    /// Return and remove every remaining word one letter away from `word`
    ///
    /// Results follow dictionary order. A second call can never return a
    /// word the first call already returned.
    pub fn neighbors(&mut self, word: &Word) -> Vec<Word> {
        let (found, rest): (Vec<Word>, Vec<Word>) = std::mem::take(&mut self.remaining)
            .into_iter()
            .partition(|candidate| word.is_one_letter_from(candidate));

        self.remaining = rest;
        for neighbor in &found {
            self.index.remove(neighbor);
        }

        found
    }

    /// Check whether `word` is still in the working set
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Drop one word from the working set; returns whether it was present
    pub fn remove(&mut self, word: &Word) -> bool {
        if !self.index.remove(word) {
            return false;
        }
        self.remaining.retain(|w| w != word);
        true
    }

    /// Words not yet consumed
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    fn setup_graph() -> (Dictionary, WordGraph) {
        let dictionary = Dictionary::from_words(3, words(&["cat", "cot", "cog", "dog", "cag"]));
        let graph = WordGraph::new(&dictionary);
        (dictionary, graph)
    }

    #[test]
    fn neighbors_in_dictionary_order() {
        let (_, mut graph) = setup_graph();
        let found = graph.neighbors(&Word::new("cat").unwrap());
        assert_eq!(found, words(&["cot", "cag"]));
    }

    #[test]
    fn neighbors_are_consumed() {
        let (_, mut graph) = setup_graph();
        let cat = Word::new("cat").unwrap();

        let first = graph.neighbors(&cat);
        assert_eq!(first.len(), 2);
        assert!(!graph.contains(&Word::new("cot").unwrap()));
        assert_eq!(graph.len(), 3);

        let second = graph.neighbors(&cat);
        assert!(second.is_empty());
    }

    #[test]
    fn no_neighbor_returned_twice_across_calls() {
        let (_, mut graph) = setup_graph();
        // COG is adjacent to both COT and DOG
        let from_cot = graph.neighbors(&Word::new("cot").unwrap());
        let from_dog = graph.neighbors(&Word::new("dog").unwrap());

        assert!(from_cot.contains(&Word::new("cog").unwrap()));
        assert!(!from_dog.contains(&Word::new("cog").unwrap()));
    }

    #[test]
    fn word_is_not_its_own_neighbor() {
        let (_, mut graph) = setup_graph();
        let found = graph.neighbors(&Word::new("dog").unwrap());
        assert_eq!(found, words(&["cog"]));
        assert!(graph.contains(&Word::new("dog").unwrap()));
    }

    #[test]
    fn different_length_never_neighbors() {
        let (_, mut graph) = setup_graph();
        assert!(graph.neighbors(&Word::new("cats").unwrap()).is_empty());
        assert!(graph.neighbors(&Word::new("ca").unwrap()).is_empty());
        assert_eq!(graph.len(), 5);
    }

    #[test]
    fn remove_drops_single_word() {
        let (_, mut graph) = setup_graph();
        let cat = Word::new("cat").unwrap();

        assert!(graph.remove(&cat));
        assert!(!graph.contains(&cat));
        assert!(!graph.remove(&cat));
        assert_eq!(graph.len(), 4);

        // CAT no longer appears as a neighbor of COT
        let found = graph.neighbors(&Word::new("cot").unwrap());
        assert_eq!(found, words(&["cog"]));
    }

    #[test]
    fn dictionary_untouched() {
        let (dictionary, mut graph) = setup_graph();
        let _ = graph.neighbors(&Word::new("cat").unwrap());
        graph.remove(&Word::new("dog").unwrap());

        assert_eq!(dictionary.len(), 5);
        assert!(dictionary.contains(&Word::new("cot").unwrap()));
    }
}
