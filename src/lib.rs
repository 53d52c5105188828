//! reachgraph — generic directed-graph library with reachability search.
//!
//! Vertices carry arbitrary payloads and live in an arena addressed by
//! [`VertexId`]; edges are unlabeled and unweighted. Graphs can be built in
//! code or parsed from sectioned line-oriented text, then queried with
//! iterative depth-first or breadth-first search and per-vertex degree
//! counts.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{
    SectionLayout, VertexList, VertexListReader, DEFAULT_EDGE_LINES, DEFAULT_VERTEX_LINES,
};
pub use graph::{
    breadth_first, depth_first, Algorithm, Digraph, GraphBuilder, SearchOutcome, Traversal,
};
pub use types::{GraphError, GraphResult, Vertex, VertexId};
