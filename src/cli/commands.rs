//! CLI command implementations.

use std::path::Path;

use crate::format::{SectionLayout, VertexListReader};
use crate::graph::{Algorithm, Digraph, Traversal};
use crate::types::{GraphError, GraphResult};

/// Which degree tables to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeDirection {
    Out,
    In,
    Both,
}

impl DegreeDirection {
    /// Short lowercase name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            DegreeDirection::Out => "out",
            DegreeDirection::In => "in",
            DegreeDirection::Both => "both",
        }
    }

    /// Parse a short name back into a direction.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "out" => Some(DegreeDirection::Out),
            "in" => Some(DegreeDirection::In),
            "both" => Some(DegreeDirection::Both),
            _ => None,
        }
    }
}

/// Search for a target key, once per requested algorithm.
///
/// Without `from` the search starts at the first vertex in the file; with it
/// the source is resolved by key like the target. An unreached target is an
/// ordinary outcome, not an error.
pub fn cmd_search(
    path: &Path,
    target: char,
    from: Option<char>,
    algorithms: &[Algorithm],
    layout: SectionLayout,
    json: bool,
) -> GraphResult<()> {
    let graph: Digraph<char> = VertexListReader::new(layout).read_graph(path)?;

    let mut runs = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let traversal = match from {
            None => match algorithm {
                Algorithm::Dfs => graph.depth_first_search(&target)?,
                Algorithm::Bfs => graph.breadth_first_search(&target)?,
            },
            Some(source_key) => {
                if graph.is_empty() {
                    return Err(GraphError::EmptyGraph);
                }
                let source = graph
                    .find_vertex(&source_key)
                    .ok_or_else(|| GraphError::KeyNotFound {
                        key: source_key.to_string(),
                    })?;
                let destination = graph
                    .find_vertex(&target)
                    .ok_or_else(|| GraphError::KeyNotFound {
                        key: target.to_string(),
                    })?;
                algorithm.run(&graph, source, destination)
            }
        };
        runs.push(traversal);
    }

    if json {
        let info: Vec<serde_json::Value> = runs
            .iter()
            .map(|traversal| {
                let visited: Vec<String> = traversal
                    .visited_payloads(&graph)
                    .iter()
                    .map(|payload| payload.to_string())
                    .collect();
                let matched = traversal
                    .outcome
                    .vertex()
                    .and_then(|id| graph.get_vertex(id))
                    .map(|v| v.payload().to_string());
                serde_json::json!({
                    "algorithm": traversal.algorithm.name(),
                    "target": target.to_string(),
                    "found": traversal.outcome.is_found(),
                    "matched": matched,
                    "visited": visited,
                    "visited_count": traversal.visited.len(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        for traversal in &runs {
            report_traversal(&graph, traversal, target);
        }
    }
    Ok(())
}

fn report_traversal(graph: &Digraph<char>, traversal: &Traversal, target: char) {
    let visited: Vec<String> = traversal
        .visited_payloads(graph)
        .iter()
        .map(|payload| payload.to_string())
        .collect();
    let source = visited.first().cloned().unwrap_or_default();
    println!("{}: {}", traversal.algorithm.name(), visited.join(" -> "));
    if traversal.outcome.is_found() {
        println!(
            "Path from {} -> {} exists ({} vertices visited)",
            source,
            target,
            traversal.visited.len()
        );
    } else {
        println!(
            "No path from {} -> {} ({} vertices visited)",
            source,
            target,
            traversal.visited.len()
        );
    }
}

/// Print per-vertex degree tables.
pub fn cmd_degrees(
    path: &Path,
    direction: DegreeDirection,
    layout: SectionLayout,
    json: bool,
) -> GraphResult<()> {
    let graph: Digraph<char> = VertexListReader::new(layout).read_graph(path)?;

    if json {
        let rows: Vec<serde_json::Value> = match direction {
            DegreeDirection::Out => graph
                .out_degrees()
                .into_iter()
                .map(|(payload, count)| {
                    serde_json::json!({"vertex": payload.to_string(), "out": count})
                })
                .collect(),
            DegreeDirection::In => graph
                .in_degrees()
                .into_iter()
                .map(|(payload, count)| {
                    serde_json::json!({"vertex": payload.to_string(), "in": count})
                })
                .collect(),
            DegreeDirection::Both => graph
                .out_degrees()
                .into_iter()
                .zip(graph.in_degrees())
                .map(|((payload, out_count), (_, in_count))| {
                    serde_json::json!({
                        "vertex": payload.to_string(),
                        "out": out_count,
                        "in": in_count,
                    })
                })
                .collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).unwrap_or_default()
        );
    } else {
        let show_out = matches!(direction, DegreeDirection::Out | DegreeDirection::Both);
        let show_in = matches!(direction, DegreeDirection::In | DegreeDirection::Both);
        if show_out {
            println!("Out-degrees:");
            for (payload, count) in graph.out_degrees() {
                println!("  {}: {}", payload, count);
            }
        }
        if show_in {
            if show_out {
                println!();
            }
            println!("In-degrees:");
            for (payload, count) in graph.in_degrees() {
                println!("  {}: {}", payload, count);
            }
        }
    }
    Ok(())
}

/// Print every vertex with its direct neighbors.
pub fn cmd_print(path: &Path, layout: SectionLayout, json: bool) -> GraphResult<()> {
    let graph: Digraph<char> = VertexListReader::new(layout).read_graph(path)?;

    if json {
        let rows: Vec<serde_json::Value> = graph
            .vertices()
            .iter()
            .map(|vertex| {
                let neighbors: Vec<String> = vertex
                    .adjacency()
                    .iter()
                    .filter_map(|&id| graph.get_vertex(id))
                    .map(|v| v.payload().to_string())
                    .collect();
                serde_json::json!({
                    "vertex": vertex.payload().to_string(),
                    "neighbors": neighbors,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).unwrap_or_default()
        );
    } else {
        print!("{}", graph);
    }
    Ok(())
}

/// Display information about a graph file.
pub fn cmd_info(path: &Path, layout: SectionLayout, json: bool) -> GraphResult<()> {
    let graph: Digraph<char> = VertexListReader::new(layout).read_graph(path)?;
    let file_size = std::fs::metadata(path)?.len();

    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();
    let max_out = graph
        .vertices()
        .iter()
        .map(|v| v.adjacency().len())
        .max()
        .unwrap_or(0);
    let avg_out = if vertex_count > 0 {
        edge_count as f64 / vertex_count as f64
    } else {
        0.0
    };

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": vertex_count,
            "edges": edge_count,
            "max_out_degree": max_out,
            "avg_out_degree": avg_out,
            "file_size": file_size,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", vertex_count);
        println!("Edges: {}", edge_count);
        println!("Max out-degree: {}", max_out);
        println!("Avg out-degree: {:.2}", avg_out);
        println!("File size: {}", format_size(file_size));
    }
    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
