use horgg_core::errors::ErrorInfo;
use horgg_core::{HorggError, RngHandle};
use horgg_graph::{BipartiteGraph, SwapOutcome};
use log::{debug, trace, warn};

use crate::moves;
use crate::stats::MixingStats;

/// Attempt budget per requested swap when none is given.
pub const DEFAULT_ATTEMPTS_PER_STEP: usize = 1000;

/// Attempt budget for `steps` swaps at `attempts_per_step` attempts each.
pub fn attempt_budget(steps: usize, attempts_per_step: usize) -> usize {
    steps.saturating_mul(attempts_per_step)
}

/// Performs `steps` successful double edge swaps on `graph`.
///
/// Rejected attempts are no-ops. Total attempts are capped by `max_attempts`
/// (default [`DEFAULT_ATTEMPTS_PER_STEP`] per step); running out fails with
/// [`HorggError::MaxAttemptsExceeded`] and leaves the graph with whatever
/// swaps were completed, still a valid realization.
pub fn mix(
    graph: &mut BipartiteGraph,
    steps: usize,
    max_attempts: Option<usize>,
    rng: &mut RngHandle,
) -> Result<MixingStats, HorggError> {
    let budget =
        max_attempts.unwrap_or_else(|| attempt_budget(steps, DEFAULT_ATTEMPTS_PER_STEP));
    mix_within(graph, steps, budget, rng)
}

/// Like [`mix`] with an explicit attempt budget.
pub fn mix_within(
    graph: &mut BipartiteGraph,
    steps: usize,
    budget: usize,
    rng: &mut RngHandle,
) -> Result<MixingStats, HorggError> {
    let stats = run_swaps(graph, steps, budget, None, rng)?;
    if stats.is_complete() {
        return Ok(stats);
    }
    let hint = if graph.len() < 2 {
        "graphs with fewer than two edges admit no swaps"
    } else {
        "the sequences may admit few realizations; lower mcmc_step or raise max_attempts"
    };
    Err(HorggError::MaxAttemptsExceeded(
        ErrorInfo::new("swap-budget", "maximal number of edge swap attempts reached")
            .with_context("requested", steps.to_string())
            .with_context("completed", stats.accepted.to_string())
            .with_context("attempts", stats.attempts.to_string())
            .with_context("max_attempts", budget.to_string())
            .with_hint(hint),
    ))
}

/// Best-effort mixing used before the requested steps.
///
/// Returns once `steps` swaps are done, `budget` attempts are spent, or
/// `stall_limit` consecutive attempts were rejected. Budget exhaustion logs a
/// warning; a stall only logs at debug level.
pub fn burn_in(
    graph: &mut BipartiteGraph,
    steps: usize,
    budget: usize,
    stall_limit: usize,
    rng: &mut RngHandle,
) -> Result<MixingStats, HorggError> {
    let stats = run_swaps(graph, steps, budget, Some(stall_limit), rng)?;
    if !stats.is_complete() && graph.len() >= 2 {
        if stats.attempts < budget {
            debug!(
                "burn-in stalled after {}/{} swaps: {} consecutive rejections",
                stats.accepted, steps, stall_limit
            );
        } else {
            warn!(
                "burn-in stopped after {}/{} swaps ({} attempts)",
                stats.accepted, steps, stats.attempts
            );
        }
    }
    Ok(stats)
}

fn run_swaps(
    graph: &mut BipartiteGraph,
    steps: usize,
    budget: usize,
    stall_limit: Option<usize>,
    rng: &mut RngHandle,
) -> Result<MixingStats, HorggError> {
    let mut stats = MixingStats::new(steps);
    if steps == 0 || graph.len() < 2 {
        return Ok(stats);
    }
    let mut rejected_in_a_row = 0usize;
    while stats.accepted < steps && stats.attempts < budget {
        if stall_limit.is_some_and(|limit| rejected_in_a_row >= limit) {
            break;
        }
        let outcome = moves::attempt_swap(graph, rng)?;
        if let SwapOutcome::Rejected(reason) = outcome {
            trace!("swap attempt {} rejected: {}", stats.attempts, reason.as_str());
            rejected_in_a_row += 1;
        } else {
            rejected_in_a_row = 0;
        }
        stats.record(&outcome);
    }
    Ok(stats)
}
