use horgg_core::errors::{ErrorInfo, HorggError};
use serde::{Deserialize, Serialize};

use crate::kernel::DEFAULT_ATTEMPTS_PER_STEP;

/// YAML-configurable parameters governing a sampler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Mixing schedule and attempt budgets.
    #[serde(default)]
    pub mixing: MixingConfig,
    /// Master seed and run label.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

impl SamplerConfig {
    /// Parses a configuration from YAML; missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, HorggError> {
        serde_yaml::from_str(yaml)
            .map_err(|err| HorggError::Serde(ErrorInfo::new("deserialize-yaml", err.to_string())))
    }

    /// Renders the configuration as YAML.
    pub fn to_yaml_string(&self) -> Result<String, HorggError> {
        serde_yaml::to_string(self)
            .map_err(|err| HorggError::Serde(ErrorInfo::new("serialize-yaml", err.to_string())))
    }

    /// Returns a copy with an explicit master seed.
    pub fn with_master_seed(mut self, seed: u64) -> Self {
        self.seed_policy.master_seed = Some(seed);
        self
    }
}

/// Mixing schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixingConfig {
    /// Swaps performed before the caller-requested steps on every call.
    #[serde(default)]
    pub burn_in: BurnIn,
    /// Attempt budget per requested swap when the caller gives none. Burn-in
    /// also gives up after this many consecutive rejections.
    #[serde(default = "default_attempts_per_step")]
    pub attempts_per_step: usize,
}

fn default_attempts_per_step() -> usize {
    DEFAULT_ATTEMPTS_PER_STEP
}

impl Default for MixingConfig {
    fn default() -> Self {
        Self {
            burn_in: BurnIn::default(),
            attempts_per_step: default_attempts_per_step(),
        }
    }
}

/// Number of burn-in swaps N₀ applied to the canonical realization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BurnIn {
    /// No burn-in: `mcmc_step = 0` returns the canonical realization.
    Disabled,
    /// A fixed number of swaps.
    Fixed {
        /// Swaps to perform.
        steps: usize,
    },
    /// `factor` swaps per edge.
    PerEdge {
        /// Multiplier applied to the edge count.
        #[serde(default = "default_per_edge_factor")]
        factor: usize,
    },
}

fn default_per_edge_factor() -> usize {
    1
}

impl Default for BurnIn {
    fn default() -> Self {
        BurnIn::PerEdge {
            factor: default_per_edge_factor(),
        }
    }
}

impl BurnIn {
    /// Resolves the number of burn-in swaps for a graph with `edges` edges.
    pub fn steps(&self, edges: usize) -> usize {
        match self {
            BurnIn::Disabled => 0,
            BurnIn::Fixed { steps } => *steps,
            BurnIn::PerEdge { factor } => edges.saturating_mul(*factor),
        }
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed; when absent the process-wide seed source is used.
    #[serde(default)]
    pub master_seed: Option<u64>,
    /// Optional label copied into sample provenance.
    #[serde(default)]
    pub label: Option<String>,
}
