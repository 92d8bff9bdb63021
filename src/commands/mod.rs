//! Command implementations

pub mod benchmark;
pub mod neighbors;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_pairs};
pub use neighbors::{NeighborsResult, list_neighbors};
pub use simple::{run_simple, run_simple_with};
pub use solve::{SolveError, SolveResult, save_result, solve, solve_words};
