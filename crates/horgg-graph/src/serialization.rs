use horgg_core::errors::{ErrorInfo, HorggError};
use horgg_core::provenance::SchemaVersion;
use horgg_core::Edge;
use serde::{Deserialize, Serialize};

use crate::bigraph::BipartiteGraph;

/// Schema version written alongside serialized graphs.
pub const GRAPH_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &BipartiteGraph) -> Result<Vec<u8>, HorggError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| HorggError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<BipartiteGraph, HorggError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| HorggError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &BipartiteGraph) -> Result<String, HorggError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| HorggError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<BipartiteGraph, HorggError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| HorggError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    schema_version: SchemaVersion,
    num_groups: usize,
    num_nodes: usize,
    /// `(node, group)` pairs in edge order.
    edges: Vec<(u64, u64)>,
}

impl SerializableGraph {
    fn from_graph(graph: &BipartiteGraph) -> Self {
        Self {
            schema_version: GRAPH_SCHEMA,
            num_groups: graph.num_groups(),
            num_nodes: graph.num_nodes(),
            edges: graph
                .edges()
                .iter()
                .map(|edge| (edge.node.as_raw(), edge.group.as_raw()))
                .collect(),
        }
    }

    fn into_graph(self) -> Result<BipartiteGraph, HorggError> {
        if self.schema_version.major != GRAPH_SCHEMA.major {
            return Err(HorggError::Serde(
                ErrorInfo::new("schema-version", "unsupported graph schema")
                    .with_context("found", format!("{:?}", self.schema_version))
                    .with_context("expected_major", GRAPH_SCHEMA.major.to_string()),
            ));
        }
        let edges = self
            .edges
            .into_iter()
            .map(|(node, group)| Edge::new(node as usize, group as usize));
        BipartiteGraph::from_edges(self.num_groups, self.num_nodes, edges)
    }
}
