//! Sectioned line-oriented input: a vertex section followed by an edge
//! section, split by line count.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::graph::{Digraph, GraphBuilder};
use crate::types::{GraphError, GraphResult};

/// Vertex lines in the stock layout.
pub const DEFAULT_VERTEX_LINES: usize = 17;
/// Edge lines in the stock layout.
pub const DEFAULT_EDGE_LINES: usize = 16;

/// How many lines belong to each section.
///
/// The format carries no header, so the split is fixed by the caller up
/// front rather than discovered from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    /// Lines in the vertex section.
    pub vertex_lines: usize,
    /// Lines in the edge section. `None` claims every line after the vertex
    /// section, however many there are.
    pub edge_lines: Option<usize>,
}

impl SectionLayout {
    /// A layout with fixed sizes for both sections.
    pub fn new(vertex_lines: usize, edge_lines: usize) -> Self {
        Self {
            vertex_lines,
            edge_lines: Some(edge_lines),
        }
    }

    /// A layout whose edge section is the remainder of the input.
    pub fn with_remainder(vertex_lines: usize) -> Self {
        Self {
            vertex_lines,
            edge_lines: None,
        }
    }

    /// The minimum number of lines an input must supply.
    pub fn required_lines(&self) -> usize {
        self.vertex_lines + self.edge_lines.unwrap_or(0)
    }
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self::new(DEFAULT_VERTEX_LINES, DEFAULT_EDGE_LINES)
    }
}

/// The two raw sections of one input, still unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexList {
    /// One payload per line.
    pub vertex_lines: Vec<String>,
    /// One edge per line, two payload tokens each.
    pub edge_lines: Vec<String>,
}

/// Splits raw text into sections according to a [`SectionLayout`].
#[derive(Debug, Clone, Copy)]
pub struct VertexListReader {
    layout: SectionLayout,
}

impl VertexListReader {
    /// Create a reader for the given layout.
    pub fn new(layout: SectionLayout) -> Self {
        Self { layout }
    }

    /// Split `input` into its vertex and edge sections.
    ///
    /// Both `\n` and `\r\n` line endings are accepted. Inputs shorter than
    /// the layout requires fail with [`GraphError::TruncatedInput`]; extra
    /// lines beyond a fixed edge section are ignored.
    pub fn read_str(&self, input: &str) -> GraphResult<VertexList> {
        let lines: Vec<&str> = input.lines().collect();
        let expected = self.layout.required_lines();
        if lines.len() < expected {
            return Err(GraphError::TruncatedInput {
                expected,
                got: lines.len(),
            });
        }
        let (vertex_lines, rest) = lines.split_at(self.layout.vertex_lines);
        let edge_lines = match self.layout.edge_lines {
            Some(count) => &rest[..count],
            None => rest,
        };
        Ok(VertexList {
            vertex_lines: vertex_lines.iter().map(|s| s.to_string()).collect(),
            edge_lines: edge_lines.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Read a file and split it into sections.
    pub fn read_from_file<P: AsRef<Path>>(&self, path: P) -> GraphResult<VertexList> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)?;
        log::debug!("read {} bytes from {}", input.len(), path.display());
        self.read_str(&input)
    }

    /// Read a file, split it, and parse the sections into a graph.
    pub fn read_graph<T, P>(&self, path: P) -> GraphResult<Digraph<T>>
    where
        T: FromStr + PartialEq,
        T::Err: std::fmt::Display,
        P: AsRef<Path>,
    {
        let list = self.read_from_file(path)?;
        GraphBuilder::from_lines(&list.vertex_lines, &list.edge_lines)
    }
}

impl Default for VertexListReader {
    fn default() -> Self {
        Self::new(SectionLayout::default())
    }
}
