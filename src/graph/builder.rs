//! Text-driven graph construction.

use std::fmt;
use std::str::FromStr;

use crate::types::{GraphError, GraphResult};

use super::digraph::Digraph;

/// Accumulates parsed payloads and resolved edges, then builds a [`Digraph`].
///
/// Vertex lines carry one payload each; edge lines carry two
/// whitespace-separated payload tokens, source first. Lines that fail to
/// parse are skipped with a warning so one bad line cannot sink a whole
/// input, but an edge token that parses cleanly yet names no known vertex is
/// an error, since the edge cannot be resolved.
#[derive(Debug, Clone)]
pub struct GraphBuilder<T> {
    values: Vec<T>,
    edges: Vec<(usize, usize)>,
}

impl<T> GraphBuilder<T> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Payloads accepted so far.
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Edges accepted so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Consume the builder and append its contents to `graph`.
    ///
    /// Vertices keep their relative order and edges keep their relative
    /// order per source vertex.
    pub fn populate(self, graph: &mut Digraph<T>) {
        let ids: Vec<_> = self
            .values
            .into_iter()
            .map(|value| graph.add_vertex(value))
            .collect();
        for (source, destination) in self.edges {
            graph.add_edge(ids[source], ids[destination]);
        }
    }

    /// Consume the builder and produce a fresh graph.
    pub fn build(self) -> Digraph<T> {
        let mut graph = Digraph::with_capacity(self.values.len());
        self.populate(&mut graph);
        graph
    }
}

impl<T> GraphBuilder<T>
where
    T: FromStr + PartialEq,
    T::Err: fmt::Display,
{
    /// Parse one payload per line, skipping lines that fail with a warning.
    ///
    /// Returns the number of payloads accepted from this batch.
    pub fn parse_vertices<I>(&mut self, lines: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut accepted = 0;
        for line in lines {
            let token = line.as_ref().trim();
            if token.is_empty() {
                log::warn!("skipping empty vertex line");
                continue;
            }
            match token.parse::<T>() {
                Ok(value) => {
                    self.values.push(value);
                    accepted += 1;
                }
                Err(err) => log::warn!("skipping vertex line {:?}: {}", token, err),
            }
        }
        accepted
    }

    /// Parse one edge per line as two whitespace-separated payload tokens,
    /// source first. Tokens beyond the second are ignored.
    ///
    /// Lines with fewer than two tokens or an unparseable token are skipped
    /// with a warning. A token that parses but matches no accepted payload
    /// fails with [`GraphError::EdgeEndpointNotFound`].
    ///
    /// Returns the number of edges accepted from this batch.
    pub fn parse_edges<I>(&mut self, lines: I) -> GraphResult<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut accepted = 0;
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                log::warn!("skipping empty edge line");
                continue;
            }
            let mut tokens = line.split_whitespace();
            let (source_token, destination_token) = match (tokens.next(), tokens.next()) {
                (Some(source), Some(destination)) => (source, destination),
                _ => {
                    log::warn!("skipping edge line {:?}: expected two tokens", line);
                    continue;
                }
            };
            let source = match source_token.parse::<T>() {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("skipping edge line {:?}: {}", line, err);
                    continue;
                }
            };
            let destination = match destination_token.parse::<T>() {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("skipping edge line {:?}: {}", line, err);
                    continue;
                }
            };
            let source_index = self.position_of(&source, source_token)?;
            let destination_index = self.position_of(&destination, destination_token)?;
            self.edges.push((source_index, destination_index));
            accepted += 1;
        }
        Ok(accepted)
    }

    /// Parse vertex lines then edge lines and build the graph in one step.
    pub fn from_lines<V, E>(vertex_lines: V, edge_lines: E) -> GraphResult<Digraph<T>>
    where
        V: IntoIterator,
        V::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let mut builder = Self::new();
        builder.parse_vertices(vertex_lines);
        builder.parse_edges(edge_lines)?;
        log::debug!(
            "built graph from text: {} vertices, {} edges",
            builder.value_count(),
            builder.edge_count()
        );
        Ok(builder.build())
    }

    /// Index of the first accepted payload equal to `value`.
    fn position_of(&self, value: &T, token: &str) -> GraphResult<usize> {
        self.values
            .iter()
            .position(|v| v == value)
            .ok_or_else(|| GraphError::EdgeEndpointNotFound {
                token: token.to_string(),
            })
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
