//! Word Ladder
//!
//! Finds the shortest chain of dictionary words between two words of equal
//! length, changing one letter per step.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::Word;
//! use word_ladder::ladder::find_path;
//! use word_ladder::wordlists::loader::dictionary_from_str;
//!
//! let dictionary = dictionary_from_str("cold\ncord\ncard\nward\nwarm\n", 4);
//! let cold = Word::new("cold").unwrap();
//! let warm = Word::new("warm").unwrap();
//!
//! let ladder = find_path(&cold, &warm, &dictionary).unwrap();
//! println!("{ladder} ({} steps)", ladder.steps());
//! ```

// Core domain types
pub mod core;

// Shortest-path search
pub mod ladder;

// Word lists
pub mod wordlists;

// Run settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output and results file
pub mod output;

// Interactive TUI interface
pub mod interactive;
