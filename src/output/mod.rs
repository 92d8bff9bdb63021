//! Terminal output formatting and result persistence
//!
//! Display utilities for CLI results, plus the results-file sink.

pub mod display;
pub mod formatters;
pub mod results;

pub use display::{
    print_benchmark_result, print_dictionary_notice, print_neighbors_result, print_solve_result,
    write_ladder, write_not_found,
};
pub use results::save_ladder;
