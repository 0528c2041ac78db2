use sha2::{Digest, Sha256};

use crate::bigraph::BipartiteGraph;

/// Computes the canonical structural hash for the provided graph.
///
/// The hash covers both side sizes and the edge set in sorted order, so two
/// graphs hash equal exactly when they hold the same edges regardless of
/// insertion or swap order.
pub fn canonical_hash(graph: &BipartiteGraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"horgg-bipartite");
    hasher.update((graph.num_groups() as u64).to_le_bytes());
    hasher.update((graph.num_nodes() as u64).to_le_bytes());

    let edges = graph.sorted_edges();
    hasher.update((edges.len() as u64).to_le_bytes());
    for edge in edges {
        hasher.update(edge.node.as_raw().to_le_bytes());
        hasher.update(edge.group.as_raw().to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}
