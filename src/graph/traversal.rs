//! Iterative depth-first and breadth-first reachability search.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::types::VertexId;

use super::digraph::Digraph;

/// Which search strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Depth-first: explicit stack, deepest frontier vertex next.
    Dfs,
    /// Breadth-first: queue, nearest frontier vertex next.
    Bfs,
}

impl Algorithm {
    /// Short lowercase name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
        }
    }

    /// Parse a short name back into an algorithm.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dfs" => Some(Algorithm::Dfs),
            "bfs" => Some(Algorithm::Bfs),
            _ => None,
        }
    }

    /// Run this algorithm over `graph` from `source` toward `destination`.
    pub fn run<T: PartialEq>(
        self,
        graph: &Digraph<T>,
        source: VertexId,
        destination: VertexId,
    ) -> Traversal {
        match self {
            Algorithm::Dfs => depth_first(graph, source, destination),
            Algorithm::Bfs => breadth_first(graph, source, destination),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether a search reached a vertex matching the destination payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchOutcome {
    /// A matching vertex was visited; carries the id actually reached, which
    /// under duplicate payloads may differ from the requested destination.
    Found(VertexId),
    /// Every reachable vertex was visited without a payload match.
    NotFound,
}

impl SearchOutcome {
    /// Whether the destination payload was reached.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// The matched vertex, when one was reached.
    pub fn vertex(&self) -> Option<VertexId> {
        match self {
            SearchOutcome::Found(id) => Some(*id),
            SearchOutcome::NotFound => None,
        }
    }
}

/// The record of one search run: what was visited, in order, and how it ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal {
    /// The strategy that produced this record.
    pub algorithm: Algorithm,
    /// How the search ended.
    pub outcome: SearchOutcome,
    /// Every vertex visited, in visit order. When the search succeeds the
    /// matched vertex is the final entry.
    pub visited: Vec<VertexId>,
}

impl Traversal {
    /// Resolve the visit order against `graph`, payload by payload.
    pub fn visited_payloads<'g, T>(&self, graph: &'g Digraph<T>) -> Vec<&'g T> {
        self.visited
            .iter()
            .filter_map(|&id| graph.get_vertex(id))
            .map(|v| v.payload())
            .collect()
    }
}

/// Depth-first search from `source` toward the payload at `destination`.
///
/// The stack is seeded with `source`, vertices are marked scheduled when
/// pushed so nothing enters the stack twice, and each popped vertex is
/// recorded then compared against the destination payload. Neighbors are
/// pushed in reverse adjacency order, so they pop in insertion order.
///
/// # Panics
///
/// Panics if either id was not issued by `graph`.
pub fn depth_first<T: PartialEq>(
    graph: &Digraph<T>,
    source: VertexId,
    destination: VertexId,
) -> Traversal {
    let target = graph.vertices()[destination.index()].payload();
    let mut scheduled = vec![false; graph.vertex_count()];
    let mut visited = Vec::new();
    let mut stack = vec![source];
    scheduled[source.index()] = true;

    while let Some(id) = stack.pop() {
        visited.push(id);
        if graph.vertices()[id.index()].payload() == target {
            return Traversal {
                algorithm: Algorithm::Dfs,
                outcome: SearchOutcome::Found(id),
                visited,
            };
        }
        for &next in graph.edges_from(id).iter().rev() {
            if !scheduled[next.index()] {
                scheduled[next.index()] = true;
                stack.push(next);
            }
        }
    }

    Traversal {
        algorithm: Algorithm::Dfs,
        outcome: SearchOutcome::NotFound,
        visited,
    }
}

/// Breadth-first search from `source` toward the payload at `destination`.
///
/// The queue is seeded with `source`, vertices are marked scheduled when
/// enqueued so nothing enters the queue twice, and each dequeued vertex is
/// recorded then compared against the destination payload. Neighbors are
/// enqueued in adjacency order.
///
/// # Panics
///
/// Panics if either id was not issued by `graph`.
pub fn breadth_first<T: PartialEq>(
    graph: &Digraph<T>,
    source: VertexId,
    destination: VertexId,
) -> Traversal {
    let target = graph.vertices()[destination.index()].payload();
    let mut scheduled = vec![false; graph.vertex_count()];
    let mut visited = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(source);
    scheduled[source.index()] = true;

    while let Some(id) = queue.pop_front() {
        visited.push(id);
        if graph.vertices()[id.index()].payload() == target {
            return Traversal {
                algorithm: Algorithm::Bfs,
                outcome: SearchOutcome::Found(id),
                visited,
            };
        }
        for &next in graph.edges_from(id) {
            if !scheduled[next.index()] {
                scheduled[next.index()] = true;
                queue.push_back(next);
            }
        }
    }

    Traversal {
        algorithm: Algorithm::Bfs,
        outcome: SearchOutcome::NotFound,
        visited,
    }
}
