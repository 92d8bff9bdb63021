//! Breadth-first ladder search
//!
//! Nodes live in a per-call arena and point at their parent by index, so the
//! discovery tree needs no shared ownership. The frontier is a plain FIFO of
//! arena indices; every word at depth k is queued before any word at depth
//! k + 1 is dequeued, which makes the first dequeue of the target a shortest
//! ladder.

use super::graph::WordGraph;
use super::path::{Ladder, NotFound};
use crate::core::{Dictionary, Word};
use std::collections::VecDeque;

/// One discovered word and the node that discovered it
#[derive(Debug)]
struct LadderNode {
    word: Word,
    parent: Option<usize>,
}

/// Counters from a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose neighbors were computed
    pub expanded: usize,
    /// Nodes created, root included
    pub discovered: usize,
}

/// Shortest-ladder finder over a borrowed dictionary
///
/// Each call works on its own copy of the dictionary, so one `LadderSearch`
/// can serve any number of searches, including from several threads.
#[derive(Debug, Clone, Copy)]
pub struct LadderSearch<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> LadderSearch<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Find a shortest ladder from `start` to `end`
    ///
    /// # Errors
    /// Returns `NotFound` when no chain of dictionary words connects them.
    pub fn find_path(&self, start: &Word, end: &Word) -> Result<Ladder, NotFound> {
        self.find_path_with_stats(start, end).0
    }

    /// Like [`find_path`](Self::find_path), also reporting search effort
    #[must_use]
    pub fn find_path_with_stats(
        &self,
        start: &Word,
        end: &Word,
    ) -> (Result<Ladder, NotFound>, SearchStats) {
        let mut stats = SearchStats::default();

        if start == end {
            stats.discovered = 1;
            return (Ok(Ladder::new(vec![start.clone()])), stats);
        }

        if start.is_one_letter_from(end) {
            stats.discovered = 2;
            return (Ok(Ladder::new(vec![start.clone(), end.clone()])), stats);
        }

        let not_found = || NotFound {
            start: start.clone(),
            end: end.clone(),
        };

        let mut graph = WordGraph::new(self.dictionary);
        graph.remove(start);

        if !graph.contains(end) {
            return (Err(not_found()), stats);
        }

        let mut nodes = vec![LadderNode {
            word: start.clone(),
            parent: None,
        }];
        let mut frontier: VecDeque<usize> = VecDeque::from([0]);

        let mut target = None;
        while let Some(current) = frontier.pop_front() {
            if nodes[current].word == *end {
                target = Some(current);
                break;
            }

            // Once the end word is queued nothing deeper can beat it
            if !graph.contains(end) {
                continue;
            }

            stats.expanded += 1;
            for word in graph.neighbors(&nodes[current].word) {
                frontier.push_back(nodes.len());
                nodes.push(LadderNode {
                    word,
                    parent: Some(current),
                });
            }
        }
        stats.discovered = nodes.len();

        let Some(target) = target else {
            return (Err(not_found()), stats);
        };

        (Ok(Ladder::new(reconstruct(&nodes, target))), stats)
    }
}

/// Follow parent links from `target` back to the root
fn reconstruct(nodes: &[LadderNode], target: usize) -> Vec<Word> {
    let mut words = Vec::new();
    let mut cursor = Some(target);

    while let Some(index) = cursor {
        words.push(nodes[index].word.clone());
        cursor = nodes[index].parent;
    }

    words.reverse();
    words
}

/// Find a shortest ladder from `start` to `end` through `dictionary`
///
/// The dictionary is copied, never modified.
///
/// # Errors
/// Returns `NotFound` when no chain of dictionary words connects them.
///
/// # Examples
/// ```
/// use word_ladder::core::{Dictionary, Word};
/// use word_ladder::ladder::find_path;
///
/// let words = ["cat", "cot", "cog", "dog", "cag"].map(|s| Word::new(s).unwrap());
/// let dictionary = Dictionary::from_words(3, words);
///
/// let cat = Word::new("cat").unwrap();
/// let dog = Word::new("dog").unwrap();
/// let ladder = find_path(&cat, &dog, &dictionary).unwrap();
/// assert_eq!(ladder.steps(), 3);
/// ```
pub fn find_path(start: &Word, end: &Word, dictionary: &Dictionary) -> Result<Ladder, NotFound> {
    LadderSearch::new(dictionary).find_path(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::{HashMap, HashSet};

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn dictionary(length: usize, list: &[&str]) -> Dictionary {
        Dictionary::from_words(length, list.iter().map(|s| w(s)))
    }

    fn texts(ladder: &Ladder) -> Vec<&str> {
        ladder.words().iter().map(Word::text).collect()
    }

    fn assert_valid_ladder(ladder: &Ladder, start: &Word, end: &Word, dict: &Dictionary) {
        let words = ladder.words();
        assert_eq!(words.first(), Some(start));
        assert_eq!(words.last(), Some(end));
        for pair in words.windows(2) {
            assert!(
                pair[0].is_one_letter_from(&pair[1]),
                "{} -> {} is not a single-letter step",
                pair[0],
                pair[1]
            );
        }
        if words.len() > 2 {
            for middle in &words[1..words.len() - 1] {
                assert!(dict.contains(middle), "{middle} is not in the dictionary");
            }
        }
    }

    /// Plain BFS distance over the full adjacency of the dictionary plus start
    fn reference_distance(start: &Word, end: &Word, dict: &Dictionary) -> Option<usize> {
        if start == end {
            return Some(0);
        }
        if start.is_one_letter_from(end) {
            return Some(1);
        }
        if !dict.contains(end) {
            return None;
        }

        let mut vertices: Vec<&Word> = dict.iter().collect();
        if !dict.contains(start) {
            vertices.push(start);
        }

        let mut distance: HashMap<&Word, usize> = HashMap::from([(start, 0)]);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            let d = distance[current];
            for &next in &vertices {
                if current.is_one_letter_from(next) && !distance.contains_key(next) {
                    distance.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        distance.get(end).copied()
    }

    fn random_dictionary(rng: &mut StdRng, length: usize, alphabet: &[u8]) -> Dictionary {
        let mut words = Vec::new();
        for _ in 0..rng.random_range(2..30) {
            let text: String = (0..length)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
                .collect();
            words.push(w(&text));
        }
        Dictionary::from_words(length, words)
    }

    #[test]
    fn same_word_is_zero_steps() {
        let dict = dictionary(3, &["cat", "cot"]);
        let ladder = find_path(&w("cat"), &w("cat"), &dict).unwrap();
        assert_eq!(texts(&ladder), vec!["CAT"]);
        assert_eq!(ladder.steps(), 0);
    }

    #[test]
    fn same_word_with_empty_dictionary() {
        let dict = Dictionary::new(3);
        let ladder = find_path(&w("xyz"), &w("xyz"), &dict).unwrap();
        assert_eq!(ladder.steps(), 0);
    }

    #[test]
    fn one_letter_apart_is_one_step() {
        let dict = dictionary(3, &["cat", "cot"]);
        let ladder = find_path(&w("cat"), &w("cot"), &dict).unwrap();
        assert_eq!(texts(&ladder), vec!["CAT", "COT"]);
        assert_eq!(ladder.steps(), 1);
    }

    #[test]
    fn one_letter_apart_without_end_in_dictionary() {
        let dict = dictionary(3, &["cat"]);
        let (result, stats) = LadderSearch::new(&dict).find_path_with_stats(&w("cat"), &w("cot"));
        assert_eq!(texts(&result.unwrap()), vec!["CAT", "COT"]);
        assert_eq!(stats.expanded, 0);
    }

    #[test]
    fn cat_to_dog_three_steps() {
        let dict = dictionary(3, &["cat", "cot", "cog", "dog", "cag"]);
        let start = w("cat");
        let end = w("dog");

        let ladder = find_path(&start, &end, &dict).unwrap();
        assert_eq!(ladder.steps(), 3);
        assert_valid_ladder(&ladder, &start, &end, &dict);
        // Ties broken by dictionary order: COT comes before CAG
        assert_eq!(texts(&ladder), vec!["CAT", "COT", "COG", "DOG"]);
    }

    #[test]
    fn no_intermediate_link_is_not_found() {
        let dict = dictionary(3, &["cat", "dog"]);
        let err = find_path(&w("cat"), &w("dog"), &dict).unwrap_err();
        assert_eq!(err.start, w("cat"));
        assert_eq!(err.end, w("dog"));
    }

    #[test]
    fn missing_end_fails_fast() {
        let dict = dictionary(3, &["cat", "cot", "cog"]);
        let (result, stats) = LadderSearch::new(&dict).find_path_with_stats(&w("cat"), &w("dog"));
        assert!(result.is_err());
        assert_eq!(stats.expanded, 0);
    }

    #[test]
    fn disconnected_components_drain_to_not_found() {
        let dict = dictionary(3, &["cat", "cot", "cog", "dip", "dim", "rim"]);
        let (result, stats) = LadderSearch::new(&dict).find_path_with_stats(&w("cat"), &w("rim"));
        assert!(result.is_err());
        // CAT, COT, COG are all expanded before the frontier drains
        assert_eq!(stats.expanded, 3);
    }

    #[test]
    fn start_not_rediscovered() {
        // CAT is adjacent to COT and BAT; without excluding it the search
        // could loop back through it
        let dict = dictionary(3, &["cat", "cot", "bat", "bot", "bog"]);
        let (result, stats) = LadderSearch::new(&dict).find_path_with_stats(&w("cat"), &w("bog"));
        let ladder = result.unwrap();
        assert_eq!(ladder.steps(), 3);
        assert_eq!(
            ladder.words().iter().filter(|x| **x == w("cat")).count(),
            1
        );
        // Every dictionary word except CAT is discovered at most once
        assert!(stats.discovered <= dict.len());
    }

    #[test]
    fn start_outside_dictionary() {
        let dict = dictionary(3, &["cot", "cog", "dog"]);
        let ladder = find_path(&w("cat"), &w("dog"), &dict).unwrap();
        assert_eq!(texts(&ladder), vec!["CAT", "COT", "COG", "DOG"]);
    }

    #[test]
    fn mismatched_lengths_are_not_found() {
        let dict = dictionary(3, &["cat", "cot"]);
        assert!(find_path(&w("cat"), &w("cats"), &dict).is_err());
    }

    #[test]
    fn caller_dictionary_unchanged() {
        let dict = dictionary(3, &["cat", "cot", "cog", "dog", "cag"]);
        let before = dict.clone();
        let _ = find_path(&w("cat"), &w("dog"), &dict);
        assert_eq!(dict, before);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let dict = dictionary(
            4,
            &["cold", "cord", "card", "ward", "warm", "word", "worm", "corm"],
        );
        let search = LadderSearch::new(&dict);
        let first = search.find_path(&w("cold"), &w("warm")).unwrap();
        for _ in 0..5 {
            assert_eq!(search.find_path(&w("cold"), &w("warm")).unwrap(), first);
        }
    }

    #[test]
    fn cold_to_warm() {
        let dict = dictionary(4, &["cold", "cord", "card", "ward", "warm"]);
        let start = w("cold");
        let end = w("warm");

        let ladder = find_path(&start, &end, &dict).unwrap();
        assert_eq!(ladder.steps(), 4);
        assert_valid_ladder(&ladder, &start, &end, &dict);
    }

    #[test]
    fn prefers_shorter_route() {
        // Long route: AAA-BAA-BBA-BBB-CBB-CCB-CCC; short: AAA-CAA-CCA-CCC
        let dict = dictionary(
            3,
            &["baa", "bba", "bbb", "cbb", "ccb", "ccc", "caa", "cca"],
        );
        let ladder = find_path(&w("aaa"), &w("ccc"), &dict).unwrap();
        assert_eq!(ladder.steps(), 3);
        assert_eq!(texts(&ladder), vec!["AAA", "CAA", "CCA", "CCC"]);
    }

    #[test]
    fn matches_reference_bfs_on_random_dictionaries() {
        let mut rng = StdRng::seed_from_u64(0x1adde5);
        let alphabet = b"ABC";

        for _ in 0..200 {
            let dict = random_dictionary(&mut rng, 3, alphabet);
            let words: Vec<Word> = dict.iter().cloned().collect();
            let start = words[rng.random_range(0..words.len())].clone();
            let end = words[rng.random_range(0..words.len())].clone();

            let expected = reference_distance(&start, &end, &dict);
            match find_path(&start, &end, &dict) {
                Ok(ladder) => {
                    assert_eq!(Some(ladder.steps()), expected, "{start} -> {end}");
                    assert_valid_ladder(&ladder, &start, &end, &dict);
                }
                Err(_) => assert_eq!(expected, None, "{start} -> {end}"),
            }
        }
    }

    #[test]
    fn random_searches_discover_each_word_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let alphabet = b"ABCD";

        for _ in 0..100 {
            let dict = random_dictionary(&mut rng, 3, alphabet);
            let words: Vec<Word> = dict.iter().cloned().collect();
            let start = words[0].clone();
            let end = words[words.len() - 1].clone();

            let (result, stats) = LadderSearch::new(&dict).find_path_with_stats(&start, &end);
            assert!(stats.discovered <= dict.len() + 1);
            if let Ok(ladder) = result {
                let unique: HashSet<&Word> = ladder.words().iter().collect();
                assert_eq!(unique.len(), ladder.words().len());
            }
        }
    }
}
