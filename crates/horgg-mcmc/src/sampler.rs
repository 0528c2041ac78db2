use chrono::Utc;
use horgg_core::provenance::SampleProvenance;
use horgg_core::{
    next_global_seed, Edge, EdgeList, GroupAdjacency, HorggError, NodeAdjacency, RngHandle,
};
use horgg_graph::{
    build_realization, canonical_hash, check_bigraphic, edge_list, group_adjacency,
    node_adjacency, BipartiteGraph,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SamplerConfig;
use crate::determinism;
use crate::kernel;
use crate::moves;
use crate::stats::MixingStats;

/// A graph produced by [`BipartiteSampler::sample`].
#[derive(Debug, Clone)]
pub struct GraphSample {
    /// The mixed realization.
    pub graph: BipartiteGraph,
    /// Counters of the burn-in phase.
    pub burn_in: MixingStats,
    /// Counters of the caller-requested phase.
    pub mixing: MixingStats,
    /// Seeds and hash identifying the sample.
    pub provenance: SampleProvenance,
}

impl GraphSample {
    /// Edges in swap order.
    pub fn edge_list(&self) -> EdgeList {
        edge_list(&self.graph)
    }

    /// For each node, its groups.
    pub fn group_adjacency(&self) -> GroupAdjacency {
        group_adjacency(&self.graph)
    }

    /// For each group, its nodes.
    pub fn node_adjacency(&self) -> NodeAdjacency {
        node_adjacency(&self.graph)
    }

    /// Serializable summary without the edge set.
    pub fn summary(&self) -> SampleSummary {
        SampleSummary {
            edges: self.graph.len(),
            burn_in: self.burn_in,
            mixing: self.mixing,
            provenance: self.provenance.clone(),
        }
    }
}

/// Lightweight description of a sample, suitable for logs and manifests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Number of edges.
    pub edges: usize,
    /// Counters of the burn-in phase.
    pub burn_in: MixingStats,
    /// Counters of the caller-requested phase.
    pub mixing: MixingStats,
    /// Seeds and hash identifying the sample.
    pub provenance: SampleProvenance,
}

/// Samples simple bipartite graphs with prescribed group sizes and memberships.
///
/// Feasibility is checked once, at construction. Every generation call starts
/// from the same canonical realization and mixes it with an RNG seeded from
/// `(master_seed, call_index)`, so calls are independent of each other and
/// reproducible from the master seed alone. A failed call still consumes its
/// index and leaves the sampler usable.
///
/// [`mcmc_step`](Self::mcmc_step) instead advances a persistent chain, for
/// callers who want to continue mixing one graph.
#[derive(Debug, Clone)]
pub struct BipartiteSampler {
    group_sizes: Vec<usize>,
    memberships: Vec<usize>,
    config: SamplerConfig,
    master_seed: u64,
    calls: u64,
    initial: BipartiteGraph,
    chain: BipartiteGraph,
    chain_rng: RngHandle,
}

impl BipartiteSampler {
    /// Creates a sampler seeded from the process-wide seed source.
    pub fn new(group_sizes: Vec<usize>, memberships: Vec<usize>) -> Result<Self, HorggError> {
        Self::with_config(group_sizes, memberships, SamplerConfig::default())
    }

    /// Creates a sampler with an explicit master seed.
    pub fn with_seed(
        group_sizes: Vec<usize>,
        memberships: Vec<usize>,
        seed: u64,
    ) -> Result<Self, HorggError> {
        Self::with_config(
            group_sizes,
            memberships,
            SamplerConfig::default().with_master_seed(seed),
        )
    }

    /// Creates a sampler from an explicit configuration.
    ///
    /// Fails with [`HorggError::InvalidDegreeSequence`] when the sequences
    /// admit no simple bipartite realization.
    pub fn with_config(
        group_sizes: Vec<usize>,
        memberships: Vec<usize>,
        config: SamplerConfig,
    ) -> Result<Self, HorggError> {
        check_bigraphic(&group_sizes, &memberships)?;
        let initial = build_realization(&group_sizes, &memberships);
        Ok(Self::assemble(group_sizes, memberships, initial, config))
    }

    /// Creates a sampler whose starting realization is an existing edge list.
    ///
    /// The degree sequences are read off the edges. Duplicate edges and out of
    /// range ids fail with [`HorggError::Graph`].
    pub fn from_edges(
        num_groups: usize,
        num_nodes: usize,
        edges: impl IntoIterator<Item = Edge>,
        config: SamplerConfig,
    ) -> Result<Self, HorggError> {
        let initial = BipartiteGraph::from_edges(num_groups, num_nodes, edges)?;
        let group_sizes = initial.group_degrees();
        let memberships = initial.node_degrees();
        Ok(Self::assemble(group_sizes, memberships, initial, config))
    }

    fn assemble(
        group_sizes: Vec<usize>,
        memberships: Vec<usize>,
        initial: BipartiteGraph,
        config: SamplerConfig,
    ) -> Self {
        let master_seed = config
            .seed_policy
            .master_seed
            .unwrap_or_else(next_global_seed);
        debug!(
            "sampler ready: {} groups, {} nodes, {} edges, seed {}",
            group_sizes.len(),
            memberships.len(),
            initial.len(),
            master_seed
        );
        Self {
            group_sizes,
            memberships,
            config,
            master_seed,
            calls: 0,
            chain: initial.clone(),
            initial,
            chain_rng: RngHandle::from_seed(determinism::chain_seed(master_seed)),
        }
    }

    /// Group-size sequence, one entry per group.
    pub fn group_sizes(&self) -> &[usize] {
        &self.group_sizes
    }

    /// Membership sequence, one entry per node.
    pub fn memberships(&self) -> &[usize] {
        &self.memberships
    }

    /// Number of edges of every generated graph.
    pub fn num_edges(&self) -> usize {
        self.initial.len()
    }

    /// Master seed from which every call seed is derived.
    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Configuration in use.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// The realization every generation call starts from.
    pub fn initial_graph(&self) -> &BipartiteGraph {
        &self.initial
    }

    /// Number of generation calls made so far, including failed ones.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Generates a graph and returns `(group_adjacency, node_adjacency)`.
    ///
    /// `group_adjacency[v]` lists the groups of node `v` and
    /// `node_adjacency[g]` the nodes of group `g`.
    pub fn get_graph(
        &mut self,
        mcmc_step: usize,
        max_attempts: Option<usize>,
    ) -> Result<(GroupAdjacency, NodeAdjacency), HorggError> {
        let sample = self.sample(mcmc_step, max_attempts)?;
        Ok((sample.group_adjacency(), sample.node_adjacency()))
    }

    /// Generates a graph and returns its edge list in swap order.
    pub fn get_random_graph(&mut self, mcmc_step: usize) -> Result<EdgeList, HorggError> {
        let sample = self.sample(mcmc_step, None)?;
        Ok(sample.edge_list())
    }

    /// Generates a graph with its mixing counters and provenance.
    ///
    /// Runs the configured burn-in on a copy of the canonical realization
    /// (abandoned after `attempts_per_step` consecutive rejections), then `mcmc_step` further swaps within `max_attempts` attempts
    /// (default: `mcmc_step * attempts_per_step`).
    pub fn sample(
        &mut self,
        mcmc_step: usize,
        max_attempts: Option<usize>,
    ) -> Result<GraphSample, HorggError> {
        let call_index = self.calls;
        self.calls += 1;
        let call_seed = determinism::call_seed(self.master_seed, call_index);
        let mut rng = RngHandle::from_seed(call_seed);
        let attempts_per_step = self.config.mixing.attempts_per_step;

        let mut graph = self.initial.clone();
        let burn_in_steps = self.config.mixing.burn_in.steps(graph.len());
        let burn_in = kernel::burn_in(
            &mut graph,
            burn_in_steps,
            kernel::attempt_budget(burn_in_steps, attempts_per_step),
            attempts_per_step,
            &mut rng,
        )?;
        let budget =
            max_attempts.unwrap_or_else(|| kernel::attempt_budget(mcmc_step, attempts_per_step));
        let mixing = kernel::mix_within(&mut graph, mcmc_step, budget, &mut rng)?;

        let provenance = SampleProvenance {
            master_seed: self.master_seed,
            call_index,
            call_seed,
            graph_hash: canonical_hash(&graph),
            label: self.config.seed_policy.label.clone(),
            created_at: Utc::now().to_rfc3339(),
        };
        debug!(
            "call {}: burn-in {}/{} swaps, mixing {}/{} swaps in {} attempts, hash {}",
            call_index,
            burn_in.accepted,
            burn_in_steps,
            mixing.accepted,
            mcmc_step,
            mixing.attempts,
            provenance.graph_hash
        );
        Ok(GraphSample {
            graph,
            burn_in,
            mixing,
            provenance,
        })
    }

    /// Makes one swap attempt on the persistent chain.
    ///
    /// Returns whether the chain changed. Graphs with fewer than two edges
    /// never change.
    pub fn mcmc_step(&mut self) -> Result<bool, HorggError> {
        if self.chain.len() < 2 {
            return Ok(false);
        }
        let outcome = moves::attempt_swap(&mut self.chain, &mut self.chain_rng)?;
        Ok(outcome.changed())
    }

    /// Current state of the persistent chain.
    pub fn current_graph(&self) -> &BipartiteGraph {
        &self.chain
    }

    /// Resets the persistent chain to the starting realization.
    ///
    /// The chain RNG keeps its position, so a reset chain does not replay
    /// earlier moves.
    pub fn reset_chain(&mut self) {
        self.chain = self.initial.clone();
    }
}
