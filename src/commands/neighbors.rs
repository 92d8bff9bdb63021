//! Neighbor listing command
//!
//! Shows every dictionary word one letter away from a given word.

use crate::core::{Dictionary, InputError, Word};

/// Result of listing a word's neighbors
pub struct NeighborsResult {
    pub word: Word,
    pub neighbors: Vec<Word>,
    pub dictionary_size: usize,
}

/// List the one-letter neighbors of `input`
///
/// # Errors
///
/// Returns an error if the word fails validation against `dictionary`.
pub fn list_neighbors(input: &str, dictionary: &Dictionary) -> Result<NeighborsResult, InputError> {
    let word = dictionary.validate(input)?;
    let neighbors = dictionary.neighbors_of(&word).into_iter().cloned().collect();

    Ok(NeighborsResult {
        word,
        neighbors,
        dictionary_size: dictionary.len(),
    })
}
