//! CLI entry point for the `rgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use routegraph::cli::commands;
use routegraph::graph::TraversalMode;

#[derive(Parser)]
#[command(
    name = "rgraph",
    about = "routegraph CLI — weighted graph traversals and Hamiltonian-cycle heuristic"
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

#[derive(Subcommand)]
enum Commands {
    /// Display information about an edge-list file
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Traverse the graph and print the visitation order
    Traverse {
        /// Path to the edge-list file
        file: PathBuf,
        /// Traversal mode: bfs, dfs, or rdfs
        #[arg(long, default_value = "bfs")]
        mode: String,
    },
    /// Check Ore's sufficiency condition for a Hamiltonian cycle
    Check {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Greedily construct a Hamiltonian cycle
    Cycle {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex (default: the first vertex in the file)
        #[arg(long)]
        start: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Traverse { file, mode } => {
            let mode = match TraversalMode::from_name(&mode) {
                Some(mode) => mode,
                None => {
                    eprintln!("Invalid traversal mode: {}", mode);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(&file, mode, json)
        }
        Commands::Check { file } => commands::cmd_check(&file, json),
        Commands::Cycle { file, start } => commands::cmd_cycle(&file, start, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            routegraph::GraphError::Io(_) => 1,
            routegraph::GraphError::MalformedEdgeList { .. } => 2,
            routegraph::GraphError::UnknownMode(_) => 3,
            routegraph::GraphError::NodeNotFound(_) | routegraph::GraphError::NotAdjacent(_, _) => {
                4
            }
            _ => 5,
        };
        process::exit(code);
    }
}
