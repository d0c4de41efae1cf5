//! CLI support: edge-list input and command implementations.

pub mod commands;
pub mod edge_list;

pub use edge_list::{load_edge_list, load_graph, parse_edge_list};
