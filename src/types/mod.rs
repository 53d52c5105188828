//! All data types for the reachgraph library.

pub mod error;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use vertex::{Vertex, VertexId};
