//! Shortest word ladder search
//!
//! [`WordGraph`] holds the shrinking working set; [`LadderSearch`] runs the
//! breadth-first traversal over it.

mod graph;
mod path;
mod search;

pub use graph::WordGraph;
pub use path::{Ladder, NotFound};
pub use search::{LadderSearch, SearchStats, find_path};
