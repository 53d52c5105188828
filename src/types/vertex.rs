//! Vertex identifiers and the core vertex struct.

use serde::Serialize;

/// Index of a vertex in its graph's arena.
///
/// Ids are issued by `Digraph::add_vertex` and are valid only for the graph
/// that issued them. Vertices are never removed, so an issued id stays valid
/// for the lifetime of its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// The underlying arena index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A graph node: an immutable payload plus its ordered out-edge list.
///
/// The adjacency sequence holds the ids of direct successors, oldest edge
/// first. Parallel entries are legal and each occurrence counts toward
/// degrees. Mutation goes through the owning graph's edge operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<T> {
    payload: T,
    adjacency: Vec<VertexId>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(payload: T) -> Self {
        Self {
            payload,
            adjacency: Vec::new(),
        }
    }

    /// The payload value this vertex carries.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// The ordered adjacency list (out-edges), oldest edge first.
    pub fn adjacency(&self) -> &[VertexId] {
        &self.adjacency
    }

    pub(crate) fn push_edge(&mut self, destination: VertexId) {
        self.adjacency.push(destination);
    }

    /// Remove the first occurrence of `destination`, keeping the order of the
    /// remaining entries. Returns whether an entry was removed.
    pub(crate) fn remove_first_edge(&mut self, destination: VertexId) -> bool {
        match self.adjacency.iter().position(|&id| id == destination) {
            Some(pos) => {
                self.adjacency.remove(pos);
                true
            }
            None => false,
        }
    }
}
