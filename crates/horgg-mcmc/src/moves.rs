use horgg_core::errors::ErrorInfo;
use horgg_core::{HorggError, RngHandle};
use horgg_graph::{double_edge_swap, double_edge_swap_dry_run, BipartiteGraph, SwapOutcome};
use rand::Rng;

/// Two edge positions drawn for a double edge swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapProposal {
    /// Positions of the two edges in the graph's edge list.
    pub positions: [usize; 2],
    /// Outcome the swap would have if applied now.
    pub preview: SwapOutcome,
}

impl SwapProposal {
    /// Human readable description for debugging.
    pub fn description(&self) -> String {
        match self.preview {
            SwapOutcome::Applied { removed, added } => format!(
                "swap:{}+{}->{}+{}",
                removed[0], removed[1], added[0], added[1]
            ),
            SwapOutcome::Rejected(reason) => format!(
                "swap:e{}-e{}:{}",
                self.positions[0],
                self.positions[1],
                reason.as_str()
            ),
        }
    }
}

/// Draws two edge positions uniformly (with replacement) and previews the swap.
pub fn propose_swap(
    graph: &BipartiteGraph,
    rng: &mut RngHandle,
) -> Result<SwapProposal, HorggError> {
    let [position_a, position_b] = draw_positions(graph, rng)?;
    let preview = double_edge_swap_dry_run(graph, position_a, position_b)?;
    Ok(SwapProposal {
        positions: [position_a, position_b],
        preview,
    })
}

/// Draws and applies one swap attempt.
pub fn attempt_swap(
    graph: &mut BipartiteGraph,
    rng: &mut RngHandle,
) -> Result<SwapOutcome, HorggError> {
    let [position_a, position_b] = draw_positions(graph, rng)?;
    double_edge_swap(graph, position_a, position_b)
}

fn draw_positions(graph: &BipartiteGraph, rng: &mut RngHandle) -> Result<[usize; 2], HorggError> {
    if graph.len() < 2 {
        return Err(HorggError::Graph(
            ErrorInfo::new("insufficient-edges", "need at least two edges for a swap")
                .with_context("edges", graph.len().to_string()),
        ));
    }
    Ok([rng.gen_range(0..graph.len()), rng.gen_range(0..graph.len())])
}
