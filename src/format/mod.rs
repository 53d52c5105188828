//! Input format handling.

pub mod reader;

pub use reader::{
    SectionLayout, VertexList, VertexListReader, DEFAULT_EDGE_LINES, DEFAULT_VERTEX_LINES,
};
