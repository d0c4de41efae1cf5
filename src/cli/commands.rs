//! CLI command implementations.

use std::path::Path;

use crate::cli::edge_list::load_graph;
use crate::graph::TraversalMode;
use crate::types::GraphResult;

/// Display summary information about an edge-list file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;

    if json {
        let degrees: serde_json::Map<String, serde_json::Value> = graph
            .keys()
            .map(|k| {
                (
                    k.clone(),
                    serde_json::Value::from(graph.degree(k).unwrap_or(0)),
                )
            })
            .collect();
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "degrees": degrees,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Degrees:");
        for key in graph.keys() {
            println!("  {}: {}", key, graph.degree(key).unwrap_or(0));
        }
    }
    Ok(())
}

/// Traverse the graph and print the visitation order.
pub fn cmd_traverse(path: &Path, mode: TraversalMode, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let order = graph.traverse(mode);

    if json {
        println!(
            "{}",
            serde_json::json!({"mode": mode.name(), "order": order})
        );
    } else {
        for key in &order {
            println!("{}", key);
        }
    }
    Ok(())
}

/// Report whether Ore's sufficiency condition holds.
pub fn cmd_check(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let holds = graph.satisfies_ore_condition();

    if json {
        println!(
            "{}",
            serde_json::json!({"vertices": graph.vertex_count(), "holds": holds})
        );
    } else if holds {
        println!("Ore's condition holds: a Hamiltonian cycle exists");
    } else {
        println!("Ore's condition does not hold: no existence guarantee");
    }
    Ok(())
}

/// Construct a Hamiltonian cycle greedily and print the route.
pub fn cmd_cycle(path: &Path, start: Option<String>, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;

    match graph.find_hamiltonian_cycle(start.as_ref())? {
        Some(cycle) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "guaranteed": true,
                        "route": cycle.route,
                        "total_weight": cycle.total_weight,
                    })
                );
            } else {
                println!("{}", cycle.describe());
                println!("Total weight: {}", cycle.total_weight);
            }
        }
        None => {
            if json {
                println!("{}", serde_json::json!({"guaranteed": false}));
            } else {
                println!("No existence guarantee: Ore's condition does not hold");
            }
        }
    }
    Ok(())
}
