#![deny(missing_docs)]
#![doc = "Core identifiers, error types and seeding policy for the horgg bipartite graph sampler."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, HorggError};
pub use provenance::{SampleProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, next_global_seed, set_seed, RngHandle};

/// Identifier for a group (one side of the bipartite graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(u64);

impl GroupId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Creates an identifier from a position in a degree sequence.
    pub fn from_index(index: usize) -> Self {
        Self(index as u64)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }

    /// Returns the position of the group in its degree sequence.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Identifier for a node (the other side of the bipartite graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Creates an identifier from a position in a degree sequence.
    pub fn from_index(index: usize) -> Self {
        Self(index as u64)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }

    /// Returns the position of the node in its degree sequence.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Membership of a node in a group.
///
/// Ordering is node-major so that sorted edge lists read like the
/// `(node, group)` pairs produced by [`Edge::as_pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Member node.
    pub node: NodeId,
    /// Group containing the node.
    pub group: GroupId,
}

impl Edge {
    /// Creates an edge from raw indices.
    pub fn new(node: usize, group: usize) -> Self {
        Self {
            node: NodeId::from_index(node),
            group: GroupId::from_index(group),
        }
    }

    /// Returns the edge as a `(node, group)` index pair.
    pub fn as_pair(&self) -> (usize, usize) {
        (self.node.index(), self.group.index())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}-g{}", self.node.as_raw(), self.group.as_raw())
    }
}

/// Edge list in insertion/swap order.
pub type EdgeList = Vec<Edge>;

/// For each node, the groups it belongs to.
pub type GroupAdjacency = Vec<Vec<GroupId>>;

/// For each group, the nodes it contains.
pub type NodeAdjacency = Vec<Vec<NodeId>>;
