//! CLI entry point for the `reach` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use reachgraph::cli::commands::{self, DegreeDirection};
use reachgraph::format::{SectionLayout, DEFAULT_VERTEX_LINES};
use reachgraph::graph::Algorithm;
use reachgraph::types::GraphError;

#[derive(Parser)]
#[command(
    name = "reach",
    about = "reachgraph CLI — directed-graph reachability over line-oriented text files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LayoutArgs {
    /// Lines in the vertex section
    #[arg(long, default_value_t = DEFAULT_VERTEX_LINES)]
    vertex_lines: usize,

    /// Lines in the edge section; omit to use the rest of the file
    #[arg(long)]
    edge_lines: Option<usize>,
}

impl LayoutArgs {
    fn layout(&self) -> SectionLayout {
        match self.edge_lines {
            Some(count) => SectionLayout::new(self.vertex_lines, count),
            None => SectionLayout::with_remainder(self.vertex_lines),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a target vertex, starting from the first vertex in the file
    Search {
        /// Path to the graph text file
        file: PathBuf,
        /// Target vertex key (single character)
        target: String,
        /// Algorithm: dfs, bfs, or both
        #[arg(long, default_value = "both")]
        algo: String,
        /// Start from this vertex key instead of the first in the file
        #[arg(long)]
        from: Option<String>,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Print per-vertex degree tables
    Degrees {
        /// Path to the graph text file
        file: PathBuf,
        /// Direction: out, in, or both
        #[arg(long, default_value = "both")]
        direction: String,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Print every vertex with its direct neighbors
    Print {
        /// Path to the graph text file
        file: PathBuf,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Display information about a graph file
    Info {
        /// Path to the graph text file
        file: PathBuf,
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Search {
            file,
            target,
            algo,
            from,
            layout,
        } => {
            let target = parse_key(&target);
            let from = from.as_deref().map(parse_key);
            let algorithms = parse_algorithms(&algo);
            commands::cmd_search(&file, target, from, &algorithms, layout.layout(), json)
        }
        Commands::Degrees {
            file,
            direction,
            layout,
        } => {
            let direction = match DegreeDirection::from_name(&direction) {
                Some(direction) => direction,
                None => {
                    eprintln!("Invalid direction: {}", direction);
                    process::exit(3);
                }
            };
            commands::cmd_degrees(&file, direction, layout.layout(), json)
        }
        Commands::Print { file, layout } => commands::cmd_print(&file, layout.layout(), json),
        Commands::Info { file, layout } => commands::cmd_info(&file, layout.layout(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::TruncatedInput { .. } | GraphError::EdgeEndpointNotFound { .. } => 2,
            GraphError::EmptyGraph | GraphError::KeyNotFound { .. } => 4,
        };
        process::exit(code);
    }
}

fn parse_key(raw: &str) -> char {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => key,
        _ => {
            eprintln!("Invalid vertex key (expected one character): {}", raw);
            process::exit(3);
        }
    }
}

fn parse_algorithms(raw: &str) -> Vec<Algorithm> {
    if raw == "both" {
        return vec![Algorithm::Dfs, Algorithm::Bfs];
    }
    match Algorithm::from_name(raw) {
        Some(algorithm) => vec![algorithm],
        None => {
            eprintln!("Invalid algorithm: {}", raw);
            process::exit(3);
        }
    }
}
