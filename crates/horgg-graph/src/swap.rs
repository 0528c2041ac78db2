use horgg_core::errors::HorggError;
use horgg_core::Edge;

use crate::bigraph::BipartiteGraph;

/// Reason a double edge swap was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SwapRejection {
    /// Both positions point at the same edge.
    SameEdge,
    /// The two edges share their group.
    SharedGroup,
    /// The two edges share their node.
    SharedNode,
    /// One of the replacement edges already exists.
    WouldDuplicate,
}

impl SwapRejection {
    /// Stable label used in logs and statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapRejection::SameEdge => "same-edge",
            SwapRejection::SharedGroup => "shared-group",
            SwapRejection::SharedNode => "shared-node",
            SwapRejection::WouldDuplicate => "would-duplicate",
        }
    }
}

/// Result of attempting a double edge swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The swap was applied.
    Applied {
        /// Edges that were removed.
        removed: [Edge; 2],
        /// Edges that took their place.
        added: [Edge; 2],
    },
    /// The swap was refused and the graph is unchanged.
    Rejected(SwapRejection),
}

impl SwapOutcome {
    /// Whether the graph changed.
    pub fn changed(&self) -> bool {
        matches!(self, SwapOutcome::Applied { .. })
    }
}

/// Exchanges the groups of the edges stored at two positions.
///
/// `(g1, v1)` and `(g2, v2)` become `(g1, v2)` and `(g2, v1)` in place, which
/// leaves every group and node degree unchanged. Moves that would create a
/// duplicate edge are rejected without mutating the graph. Errors are limited
/// to out of range positions.
pub fn double_edge_swap(
    graph: &mut BipartiteGraph,
    position_a: usize,
    position_b: usize,
) -> Result<SwapOutcome, HorggError> {
    let outcome = evaluate_swap(graph, position_a, position_b)?;
    if let SwapOutcome::Applied { added, .. } = outcome {
        graph.replace_pair(position_a, added[0], position_b, added[1]);
    }
    Ok(outcome)
}

/// Validator for [`double_edge_swap`] that leaves the graph untouched.
pub fn double_edge_swap_dry_run(
    graph: &BipartiteGraph,
    position_a: usize,
    position_b: usize,
) -> Result<SwapOutcome, HorggError> {
    evaluate_swap(graph, position_a, position_b)
}

fn evaluate_swap(
    graph: &BipartiteGraph,
    position_a: usize,
    position_b: usize,
) -> Result<SwapOutcome, HorggError> {
    let edge_a = graph.edge_at(position_a)?;
    let edge_b = graph.edge_at(position_b)?;
    if position_a == position_b {
        return Ok(SwapOutcome::Rejected(SwapRejection::SameEdge));
    }
    if edge_a.group == edge_b.group {
        return Ok(SwapOutcome::Rejected(SwapRejection::SharedGroup));
    }
    if edge_a.node == edge_b.node {
        return Ok(SwapOutcome::Rejected(SwapRejection::SharedNode));
    }
    let new_a = Edge {
        node: edge_b.node,
        group: edge_a.group,
    };
    let new_b = Edge {
        node: edge_a.node,
        group: edge_b.group,
    };
    if graph.contains_edge(&new_a) || graph.contains_edge(&new_b) {
        return Ok(SwapOutcome::Rejected(SwapRejection::WouldDuplicate));
    }
    Ok(SwapOutcome::Applied {
        removed: [edge_a, edge_b],
        added: [new_a, new_b],
    })
}
