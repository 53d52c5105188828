//! Directed graph, traversal algorithms, and text-driven construction.

pub mod builder;
pub mod digraph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use digraph::Digraph;
pub use traversal::{breadth_first, depth_first, Algorithm, SearchOutcome, Traversal};
