//! Core graph structure: an arena of vertices with index adjacency.

use std::fmt;

use crate::types::{GraphError, GraphResult, Vertex, VertexId};

use super::traversal::{breadth_first, depth_first, Traversal};

/// A directed graph over payloads of type `T`.
///
/// Vertices live in an arena in insertion order and a directed edge is
/// nothing more than the destination id appearing in the source vertex's
/// adjacency sequence. There is no separate edge entity and no weight.
/// Parallel edges and self-loops are permitted and count toward degrees.
///
/// Payload uniqueness is not enforced; payload lookups resolve to the first
/// match in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Digraph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Create an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges, counting each parallel edge occurrence.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.adjacency().len()).sum()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get a vertex by id.
    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.index())
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// All vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// The first-added vertex, the default traversal source.
    pub fn first_vertex(&self) -> Option<VertexId> {
        if self.vertices.is_empty() {
            None
        } else {
            Some(VertexId::new(0))
        }
    }

    /// Append a vertex, returning its issued id. O(1) amortized.
    pub fn add_vertex(&mut self, payload: T) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(payload));
        id
    }

    /// Append `destination` to `source`'s adjacency sequence. O(1).
    ///
    /// No dedup is performed: adding the same pair twice creates a parallel
    /// edge. Both ids must have been issued by this graph; membership of
    /// `destination` is the caller's responsibility.
    ///
    /// # Panics
    ///
    /// Panics if `source` is out of range for this graph's arena.
    pub fn add_edge(&mut self, source: VertexId, destination: VertexId) {
        self.vertices[source.index()].push_edge(destination);
    }

    /// Remove the first occurrence of `destination` from `source`'s adjacency
    /// sequence, preserving the order of the remaining entries.
    ///
    /// Returns `false` without error when the edge is absent.
    ///
    /// # Panics
    ///
    /// Panics if `source` is out of range for this graph's arena.
    pub fn remove_edge(&mut self, source: VertexId, destination: VertexId) -> bool {
        self.vertices[source.index()].remove_first_edge(destination)
    }

    /// Out-edges of a vertex, oldest first. Empty for an id this graph never
    /// issued.
    pub fn edges_from(&self, id: VertexId) -> &[VertexId] {
        self.get_vertex(id).map(|v| v.adjacency()).unwrap_or(&[])
    }

    /// Out-degree of a vertex: the length of its adjacency sequence.
    pub fn out_degree(&self, id: VertexId) -> usize {
        self.edges_from(id).len()
    }

    /// Per-vertex out-degrees in insertion order.
    pub fn out_degrees(&self) -> Vec<(&T, usize)> {
        self.vertices
            .iter()
            .map(|v| (v.payload(), v.adjacency().len()))
            .collect()
    }
}

impl<T: PartialEq> Digraph<T> {
    /// First vertex whose payload equals `payload`, in insertion order.
    pub fn find_vertex(&self, payload: &T) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.payload() == payload)
            .map(VertexId::new)
    }

    /// In-degree of a payload: occurrences of the payload across every
    /// adjacency sequence graph-wide. O(V * E).
    ///
    /// Matching is by payload equality, not id, so distinct vertices carrying
    /// equal payloads share one in-degree figure.
    pub fn in_degree(&self, payload: &T) -> usize {
        self.vertices
            .iter()
            .flat_map(|v| v.adjacency())
            .filter(|&&id| self.vertices[id.index()].payload() == payload)
            .count()
    }

    /// Per-vertex in-degrees in insertion order, by payload equality.
    pub fn in_degrees(&self) -> Vec<(&T, usize)> {
        self.vertices
            .iter()
            .map(|v| (v.payload(), self.in_degree(v.payload())))
            .collect()
    }
}

impl<T: PartialEq + fmt::Display> Digraph<T> {
    /// Depth-first search from the first-added vertex toward the first vertex
    /// whose payload equals `key`.
    ///
    /// Fails with [`GraphError::EmptyGraph`] when the graph has no vertices
    /// and with [`GraphError::KeyNotFound`] when no vertex carries `key`.
    pub fn depth_first_search(&self, key: &T) -> GraphResult<Traversal> {
        let (source, destination) = self.resolve_endpoints(key)?;
        Ok(depth_first(self, source, destination))
    }

    /// Breadth-first search from the first-added vertex toward the first
    /// vertex whose payload equals `key`.
    ///
    /// Fails with [`GraphError::EmptyGraph`] when the graph has no vertices
    /// and with [`GraphError::KeyNotFound`] when no vertex carries `key`.
    pub fn breadth_first_search(&self, key: &T) -> GraphResult<Traversal> {
        let (source, destination) = self.resolve_endpoints(key)?;
        Ok(breadth_first(self, source, destination))
    }

    fn resolve_endpoints(&self, key: &T) -> GraphResult<(VertexId, VertexId)> {
        let source = self.first_vertex().ok_or(GraphError::EmptyGraph)?;
        let destination = self
            .find_vertex(key)
            .ok_or_else(|| GraphError::KeyNotFound {
                key: key.to_string(),
            })?;
        log::debug!("search endpoints resolved: {} -> {}", source, destination);
        Ok((source, destination))
    }
}

impl<T> Default for Digraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per vertex in insertion order: the payload followed by an
/// arrow-separated list of its direct neighbors (`A -> B -> C`).
impl<T: fmt::Display> fmt::Display for Digraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            write!(f, "{}", vertex.payload())?;
            for &neighbor in vertex.adjacency() {
                write!(f, " -> {}", self.vertices[neighbor.index()].payload())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
