use std::collections::BTreeSet;

use horgg_core::errors::{ErrorInfo, HorggError};
use horgg_core::{Edge, GroupId, NodeId};

/// Simple bipartite graph between groups and nodes.
///
/// Edges are stored in insertion/swap order alongside an ordered membership
/// index used to reject duplicates. The two always describe the same set.
#[derive(Debug, Clone)]
pub struct BipartiteGraph {
    num_groups: usize,
    num_nodes: usize,
    edges: Vec<Edge>,
    index: BTreeSet<Edge>,
}

impl BipartiteGraph {
    /// Creates an empty graph with the given side sizes.
    pub fn new(num_groups: usize, num_nodes: usize) -> Self {
        Self {
            num_groups,
            num_nodes,
            edges: Vec::new(),
            index: BTreeSet::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` edges.
    pub fn with_capacity(num_groups: usize, num_nodes: usize, capacity: usize) -> Self {
        Self {
            num_groups,
            num_nodes,
            edges: Vec::with_capacity(capacity),
            index: BTreeSet::new(),
        }
    }

    /// Builds a graph from an edge list, rejecting duplicates and out of range ids.
    pub fn from_edges(
        num_groups: usize,
        num_nodes: usize,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, HorggError> {
        let edges = edges.into_iter();
        let mut graph = Self::with_capacity(num_groups, num_nodes, edges.size_hint().0);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Number of groups.
    pub fn num_groups(&self) -> usize {
        self.num_groups
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in insertion/swap order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the edge stored at `position`.
    pub fn edge_at(&self, position: usize) -> Result<Edge, HorggError> {
        self.edges.get(position).copied().ok_or_else(|| {
            HorggError::Graph(
                ErrorInfo::new("edge-position", "edge position out of range")
                    .with_context("position", position.to_string())
                    .with_context("edges", self.edges.len().to_string()),
            )
        })
    }

    /// Whether the node belongs to the group.
    pub fn contains(&self, node: NodeId, group: GroupId) -> bool {
        self.index.contains(&Edge { node, group })
    }

    /// Whether the edge is present.
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.index.contains(edge)
    }

    /// Appends an edge after validating range and uniqueness.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), HorggError> {
        self.check_range(&edge)?;
        if !self.index.insert(edge) {
            return Err(HorggError::Graph(
                ErrorInfo::new("duplicate-edge", "edge already present")
                    .with_context("node", edge.node.as_raw().to_string())
                    .with_context("group", edge.group.as_raw().to_string()),
            ));
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Number of nodes contained in each group.
    pub fn group_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0usize; self.num_groups];
        for edge in &self.edges {
            degrees[edge.group.index()] += 1;
        }
        degrees
    }

    /// Number of groups each node belongs to.
    pub fn node_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0usize; self.num_nodes];
        for edge in &self.edges {
            degrees[edge.node.index()] += 1;
        }
        degrees
    }

    /// Edges in canonical (node, group) order.
    pub fn sorted_edges(&self) -> Vec<Edge> {
        self.index.iter().copied().collect()
    }

    /// Whether both graphs hold the same edge set, ignoring order.
    pub fn same_edge_set(&self, other: &BipartiteGraph) -> bool {
        self.num_groups == other.num_groups
            && self.num_nodes == other.num_nodes
            && self.index == other.index
    }

    /// Replaces the edges at two positions; callers guarantee uniqueness.
    pub(crate) fn replace_pair(
        &mut self,
        position_a: usize,
        replacement_a: Edge,
        position_b: usize,
        replacement_b: Edge,
    ) {
        let old_a = self.edges[position_a];
        let old_b = self.edges[position_b];
        self.index.remove(&old_a);
        self.index.remove(&old_b);
        self.index.insert(replacement_a);
        self.index.insert(replacement_b);
        self.edges[position_a] = replacement_a;
        self.edges[position_b] = replacement_b;
    }

    fn check_range(&self, edge: &Edge) -> Result<(), HorggError> {
        if edge.group.index() >= self.num_groups {
            return Err(HorggError::Graph(
                ErrorInfo::new("unknown-group", "group index out of range")
                    .with_context("group", edge.group.as_raw().to_string())
                    .with_context("groups", self.num_groups.to_string()),
            ));
        }
        if edge.node.index() >= self.num_nodes {
            return Err(HorggError::Graph(
                ErrorInfo::new("unknown-node", "node index out of range")
                    .with_context("node", edge.node.as_raw().to_string())
                    .with_context("nodes", self.num_nodes.to_string()),
            ));
        }
        Ok(())
    }
}

impl PartialEq for BipartiteGraph {
    fn eq(&self, other: &Self) -> bool {
        self.num_groups == other.num_groups
            && self.num_nodes == other.num_nodes
            && self.edges == other.edges
    }
}

impl Eq for BipartiteGraph {}
