//! Provenance and schema descriptors attached to generated graphs.

use serde::{Deserialize, Serialize};

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Records how a sampled graph was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SampleProvenance {
    /// Master seed of the sampler that produced the graph.
    pub master_seed: u64,
    /// Zero based index of the generation call on that sampler.
    pub call_index: u64,
    /// Seed of the RNG substream used by the call.
    pub call_seed: u64,
    /// Canonical hash of the produced edge set.
    pub graph_hash: String,
    /// Optional run label taken from the sampler configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// RFC 3339 timestamp recording when the graph was generated.
    pub created_at: String,
}
