//! Edge-list file parsing — the caller-facing input surface.
//!
//! One triple per line, whitespace-separated: `from to weight`. Blank
//! lines and lines starting with `#` are skipped. Keys are free-form
//! strings; weights are non-negative integers.

use std::fs;
use std::path::Path;

use log::debug;

use crate::graph::WeightedGraph;
use crate::types::{GraphError, GraphResult, Weight};

/// Parse edge-list text into `(from, to, weight)` triples.
pub fn parse_edge_list(text: &str) -> GraphResult<Vec<(String, String, Weight)>> {
    let mut triples = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(GraphError::MalformedEdgeList {
                line,
                reason: format!("expected 3 fields, got {}", fields.len()),
            });
        }

        let weight: Weight = fields[2].parse().map_err(|_| GraphError::MalformedEdgeList {
            line,
            reason: format!("invalid weight: {}", fields[2]),
        })?;

        triples.push((fields[0].to_string(), fields[1].to_string(), weight));
    }

    Ok(triples)
}

/// Read and parse an edge-list file.
pub fn load_edge_list(path: &Path) -> GraphResult<Vec<(String, String, Weight)>> {
    let text = fs::read_to_string(path)?;
    let triples = parse_edge_list(&text)?;
    debug!("loaded {} triples from {}", triples.len(), path.display());
    Ok(triples)
}

/// Build a string-keyed graph straight from an edge-list file.
pub fn load_graph(path: &Path) -> GraphResult<WeightedGraph<String>> {
    Ok(WeightedGraph::from_triples(load_edge_list(path)?))
}
