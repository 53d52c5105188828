//! Builder and reader tests: parsing text into graphs.

use tempfile::NamedTempFile;

use reachgraph::format::{SectionLayout, VertexListReader, DEFAULT_VERTEX_LINES};
use reachgraph::graph::{Digraph, GraphBuilder};
use reachgraph::types::GraphError;

const VERTEX_SECTION: [&str; 17] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q",
];

const EDGE_SECTION: [&str; 16] = [
    "A B", "A C", "B D", "B E", "C F", "C G", "D H", "E I", "F J", "G K", "H L", "I M", "J N",
    "K O", "L P", "M Q",
];

fn sample_input() -> String {
    let mut input = VERTEX_SECTION.join("\n");
    input.push('\n');
    input.push_str(&EDGE_SECTION.join("\n"));
    input.push('\n');
    input
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_accepts_clean_lines() {
    let mut builder: GraphBuilder<char> = GraphBuilder::new();
    assert_eq!(builder.parse_vertices(["A", "B", "C"]), 3);
    assert_eq!(builder.parse_edges(["A B", "B C"]).unwrap(), 2);
    assert_eq!(builder.value_count(), 3);
    assert_eq!(builder.edge_count(), 2);

    let graph = builder.build();
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    let a = graph.find_vertex(&'A').unwrap();
    let b = graph.find_vertex(&'B').unwrap();
    let c = graph.find_vertex(&'C').unwrap();
    assert_eq!(graph.edges_from(a), &[b]);
    assert_eq!(graph.edges_from(b), &[c]);
}

#[test]
fn test_builder_skips_malformed_vertex_lines() {
    let mut builder: GraphBuilder<char> = GraphBuilder::new();
    let accepted = builder.parse_vertices(["A", "", "AB", "B"]);

    // The empty line and the two-character line fail to parse as chars.
    assert_eq!(accepted, 2);
    assert_eq!(builder.value_count(), 2);
}

#[test]
fn test_builder_skips_malformed_edge_lines() {
    let mut builder: GraphBuilder<char> = GraphBuilder::new();
    builder.parse_vertices(["A", "B"]);

    // One-token and unparseable-token lines are dropped.
    let accepted = builder.parse_edges(["A B", "A", "", "AB A"]).unwrap();
    assert_eq!(accepted, 1);
    assert_eq!(builder.edge_count(), 1);
}

#[test]
fn test_builder_ignores_tokens_beyond_second() {
    let graph: Digraph<char> = GraphBuilder::from_lines(["A", "B", "C"], ["A B C"]).unwrap();

    let a = graph.find_vertex(&'A').unwrap();
    let b = graph.find_vertex(&'B').unwrap();
    assert_eq!(graph.edges_from(a), &[b]);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_builder_unresolved_endpoint_is_an_error() {
    let mut builder: GraphBuilder<char> = GraphBuilder::new();
    builder.parse_vertices(["A", "B"]);

    match builder.parse_edges(["A Z"]).unwrap_err() {
        GraphError::EdgeEndpointNotFound { token } => assert_eq!(token, "Z"),
        e => panic!("Expected EdgeEndpointNotFound error, got {:?}", e),
    }
}

#[test]
fn test_builder_edge_order_preserved_per_source() {
    let graph: Digraph<char> =
        GraphBuilder::from_lines(["A", "B", "C"], ["A C", "A B", "B C"]).unwrap();

    let a = graph.find_vertex(&'A').unwrap();
    let b = graph.find_vertex(&'B').unwrap();
    let c = graph.find_vertex(&'C').unwrap();
    assert_eq!(graph.edges_from(a), &[c, b]);
    assert_eq!(graph.edges_from(b), &[c]);
}

#[test]
fn test_builder_duplicate_payload_resolves_first() {
    let graph: Digraph<char> = GraphBuilder::from_lines(["A", "B", "A"], ["B A"]).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    let first_a = graph.find_vertex(&'A').unwrap();
    let b = graph.find_vertex(&'B').unwrap();
    assert_eq!(graph.edges_from(b), &[first_a]);
}

#[test]
fn test_builder_whitespace_tolerant() {
    let graph: Digraph<char> = GraphBuilder::from_lines(["  A", "B  "], ["A   B"]).unwrap();

    let a = graph.find_vertex(&'A').unwrap();
    let b = graph.find_vertex(&'B').unwrap();
    assert_eq!(graph.edges_from(a), &[b]);
}

#[test]
fn test_builder_integer_payloads() {
    let mut builder: GraphBuilder<i32> = GraphBuilder::new();
    let accepted = builder.parse_vertices(["10", "20", "thirty", "30"]);
    assert_eq!(accepted, 3);
    builder.parse_edges(["10 20", "20 30"]).unwrap();

    let graph = builder.build();
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.in_degree(&30), 1);
    let traversal = graph.depth_first_search(&30).unwrap();
    assert!(traversal.outcome.is_found());
}

#[test]
fn test_builder_populate_appends_to_existing_graph() {
    let mut graph = Digraph::new();
    graph.add_vertex('X');

    let mut builder: GraphBuilder<char> = GraphBuilder::new();
    builder.parse_vertices(["A", "B"]);
    builder.parse_edges(["A B"]).unwrap();
    builder.populate(&mut graph);

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 1);
    let a = graph.find_vertex(&'A').unwrap();
    let b = graph.find_vertex(&'B').unwrap();
    assert_eq!(graph.edges_from(a), &[b]);
    assert!(graph
        .edges_from(graph.find_vertex(&'X').unwrap())
        .is_empty());
}

// ==================== Layout Tests ====================

#[test]
fn test_layout_defaults_match_stock_input() {
    let layout = SectionLayout::default();
    assert_eq!(layout.vertex_lines, 17);
    assert_eq!(layout.edge_lines, Some(16));
    assert_eq!(layout.required_lines(), 33);
}

#[test]
fn test_layout_remainder_requires_only_vertices() {
    let layout = SectionLayout::with_remainder(5);
    assert_eq!(layout.edge_lines, None);
    assert_eq!(layout.required_lines(), 5);
}

// ==================== Reader Tests ====================

#[test]
fn test_reader_splits_sections() {
    let reader = VertexListReader::new(SectionLayout::new(3, 2));
    let list = reader.read_str("A\nB\nC\nA B\nB C\n").unwrap();

    assert_eq!(list.vertex_lines, vec!["A", "B", "C"]);
    assert_eq!(list.edge_lines, vec!["A B", "B C"]);
}

#[test]
fn test_reader_ignores_lines_beyond_fixed_sections() {
    let reader = VertexListReader::new(SectionLayout::new(3, 2));
    let list = reader.read_str("A\nB\nC\nA B\nB C\ngarbage\nmore\n").unwrap();

    assert_eq!(list.vertex_lines.len(), 3);
    assert_eq!(list.edge_lines, vec!["A B", "B C"]);
}

#[test]
fn test_reader_remainder_claims_rest() {
    let reader = VertexListReader::new(SectionLayout::with_remainder(3));
    let list = reader.read_str("A\nB\nC\nA B\nB C\nC A\n").unwrap();

    assert_eq!(list.vertex_lines.len(), 3);
    assert_eq!(list.edge_lines, vec!["A B", "B C", "C A"]);
}

#[test]
fn test_reader_remainder_allows_empty_edge_section() {
    let reader = VertexListReader::new(SectionLayout::with_remainder(2));
    let list = reader.read_str("A\nB\n").unwrap();

    assert_eq!(list.vertex_lines, vec!["A", "B"]);
    assert!(list.edge_lines.is_empty());
}

#[test]
fn test_reader_truncated_input_is_an_error() {
    let reader = VertexListReader::new(SectionLayout::new(3, 2));

    match reader.read_str("A\nB\nC\nA B\n").unwrap_err() {
        GraphError::TruncatedInput { expected, got } => {
            assert_eq!(expected, 5);
            assert_eq!(got, 4);
        }
        e => panic!("Expected TruncatedInput error, got {:?}", e),
    }
}

#[test]
fn test_reader_accepts_crlf_line_endings() {
    let reader = VertexListReader::new(SectionLayout::new(2, 1));
    let list = reader.read_str("A\r\nB\r\nA B\r\n").unwrap();

    assert_eq!(list.vertex_lines, vec!["A", "B"]);
    assert_eq!(list.edge_lines, vec!["A B"]);
}

#[test]
fn test_reader_missing_file_is_io_error() {
    let reader = VertexListReader::default();

    match reader.read_from_file("/nonexistent/graph.txt").unwrap_err() {
        GraphError::Io(_) => {}
        e => panic!("Expected Io error, got {:?}", e),
    }
}

#[test]
fn test_reader_default_layout_constant() {
    assert_eq!(DEFAULT_VERTEX_LINES, VERTEX_SECTION.len());
}

// ==================== End-to-End Tests ====================

#[test]
fn test_read_graph_from_file() {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), sample_input()).unwrap();

    let reader = VertexListReader::default();
    let graph: Digraph<char> = reader.read_graph(tmp.path()).unwrap();

    assert_eq!(graph.vertex_count(), 17);
    assert_eq!(graph.edge_count(), 16);

    let traversal = graph.depth_first_search(&'L').unwrap();
    let visited: String = traversal.visited_payloads(&graph).into_iter().collect();
    assert_eq!(visited, "ABDHL");
}

#[test]
fn test_read_graph_remainder_layout() {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "A\nB\nC\nA B\nB C\n").unwrap();

    let reader = VertexListReader::new(SectionLayout::with_remainder(3));
    let graph: Digraph<char> = reader.read_graph(tmp.path()).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
}
