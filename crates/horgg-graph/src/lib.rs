#![deny(missing_docs)]
#![doc = include_str!("../docs/graph-api.md")]

//! Bipartite edge-set engine: feasibility, canonical realization, swaps and projections.

mod bigraph;
mod feasibility;
mod hash;
mod projection;
mod realization;
mod sequences;
mod serialization;
mod swap;

pub use bigraph::BipartiteGraph;
pub use feasibility::{check_bigraphic, is_bigraphic};
pub use hash::canonical_hash;
pub use projection::{
    edge_list, edges_from_group_adjacency, edges_from_node_adjacency, group_adjacency,
    node_adjacency, project, OutputKind, Projection,
};
pub use realization::{build_realization, try_build_realization};
pub use swap::{double_edge_swap, double_edge_swap_dry_run, SwapOutcome, SwapRejection};

/// Degree-sequence generation from discrete distributions.
pub use sequences::{
    draw_matching_sequence, draw_sequence, DiscreteDistribution, DEFAULT_MAX_DRAWS,
};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{
    graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json, GRAPH_SCHEMA,
};
