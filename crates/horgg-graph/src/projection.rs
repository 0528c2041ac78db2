use horgg_core::errors::{ErrorInfo, HorggError};
use horgg_core::{Edge, EdgeList, GroupAdjacency, GroupId, NodeAdjacency, NodeId};
use serde::{Deserialize, Serialize};

use crate::bigraph::BipartiteGraph;

/// Output form requested from [`project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    /// Raw edge list in insertion/swap order.
    EdgeList,
    /// For each node, the groups it belongs to.
    GroupAdjacency,
    /// For each group, the nodes it contains.
    NodeAdjacency,
}

/// A projected view of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    /// See [`OutputKind::EdgeList`].
    EdgeList(EdgeList),
    /// See [`OutputKind::GroupAdjacency`].
    GroupAdjacency(GroupAdjacency),
    /// See [`OutputKind::NodeAdjacency`].
    NodeAdjacency(NodeAdjacency),
}

/// Projects the graph into the requested output form.
pub fn project(graph: &BipartiteGraph, kind: OutputKind) -> Projection {
    match kind {
        OutputKind::EdgeList => Projection::EdgeList(edge_list(graph)),
        OutputKind::GroupAdjacency => Projection::GroupAdjacency(group_adjacency(graph)),
        OutputKind::NodeAdjacency => Projection::NodeAdjacency(node_adjacency(graph)),
    }
}

/// Edges in insertion/swap order.
pub fn edge_list(graph: &BipartiteGraph) -> EdgeList {
    graph.edges().to_vec()
}

/// Groups of every node, in edge order.
pub fn group_adjacency(graph: &BipartiteGraph) -> GroupAdjacency {
    let mut adjacency = vec![Vec::new(); graph.num_nodes()];
    for edge in graph.edges() {
        adjacency[edge.node.index()].push(edge.group);
    }
    adjacency
}

/// Nodes of every group, in edge order.
pub fn node_adjacency(graph: &BipartiteGraph) -> NodeAdjacency {
    let mut adjacency = vec![Vec::new(); graph.num_groups()];
    for edge in graph.edges() {
        adjacency[edge.group.index()].push(edge.node);
    }
    adjacency
}

/// Rebuilds a graph from a per-node group adjacency.
///
/// The number of groups is inferred from the largest group id unless
/// `num_groups` is given.
pub fn edges_from_group_adjacency(
    adjacency: &[Vec<GroupId>],
    num_groups: Option<usize>,
) -> Result<BipartiteGraph, HorggError> {
    let inferred = adjacency
        .iter()
        .flatten()
        .map(|group| group.index() + 1)
        .max()
        .unwrap_or(0);
    let num_groups = resolve_side("groups", num_groups, inferred)?;
    let edges = adjacency.iter().enumerate().flat_map(|(node, groups)| {
        groups.iter().map(move |&group| Edge {
            node: NodeId::from_index(node),
            group,
        })
    });
    BipartiteGraph::from_edges(num_groups, adjacency.len(), edges)
}

/// Rebuilds a graph from a per-group node adjacency.
pub fn edges_from_node_adjacency(
    adjacency: &[Vec<NodeId>],
    num_nodes: Option<usize>,
) -> Result<BipartiteGraph, HorggError> {
    let inferred = adjacency
        .iter()
        .flatten()
        .map(|node| node.index() + 1)
        .max()
        .unwrap_or(0);
    let num_nodes = resolve_side("nodes", num_nodes, inferred)?;
    let edges = adjacency.iter().enumerate().flat_map(|(group, nodes)| {
        nodes.iter().map(move |&node| Edge {
            node,
            group: GroupId::from_index(group),
        })
    });
    BipartiteGraph::from_edges(adjacency.len(), num_nodes, edges)
}

fn resolve_side(side: &str, declared: Option<usize>, inferred: usize) -> Result<usize, HorggError> {
    match declared {
        None => Ok(inferred),
        Some(size) if size >= inferred => Ok(size),
        Some(size) => Err(HorggError::Graph(
            ErrorInfo::new("adjacency-range", "adjacency refers past the declared side size")
                .with_context("side", side)
                .with_context("declared", size.to_string())
                .with_context("required", inferred.to_string()),
        )),
    }
}
