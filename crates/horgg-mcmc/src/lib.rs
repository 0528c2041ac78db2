#![deny(missing_docs)]
#![doc = include_str!("../docs/mcmc-api.md")]

//! Configuration model sampler for simple bipartite graphs.

/// YAML configuration schema and defaults.
pub mod config;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Swap loops with attempt budgets.
pub mod kernel;
/// Random swap proposals.
pub mod moves;
/// The sampler entry point.
pub mod sampler;
/// Mixing counters.
pub mod stats;

pub use config::{BurnIn, MixingConfig, SamplerConfig, SeedPolicy};
pub use kernel::{attempt_budget, burn_in, mix, mix_within, DEFAULT_ATTEMPTS_PER_STEP};
pub use moves::{attempt_swap, propose_swap, SwapProposal};
pub use sampler::{BipartiteSampler, GraphSample, SampleSummary};
pub use stats::MixingStats;
