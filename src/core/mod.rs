//! Core domain types for word ladders
//!
//! Words, the fixed-length dictionary they live in, and input validation.
//! Nothing here does I/O.

mod dictionary;
mod word;

pub use dictionary::{Dictionary, InputError};
pub use word::{Word, WordError};
