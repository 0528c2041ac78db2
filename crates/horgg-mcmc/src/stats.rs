use horgg_graph::{SwapOutcome, SwapRejection};
use serde::{Deserialize, Serialize};

/// Counters collected while mixing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixingStats {
    /// Successful swaps requested.
    pub requested: usize,
    /// Successful swaps performed.
    pub accepted: usize,
    /// Swap attempts, successful or not.
    pub attempts: usize,
    /// Attempts that drew the same edge twice.
    pub rejected_same_edge: usize,
    /// Attempts whose edges shared a group or a node.
    pub rejected_shared_endpoint: usize,
    /// Attempts that would have created a duplicate edge.
    pub rejected_duplicate: usize,
}

impl MixingStats {
    /// Creates counters for a run of `requested` swaps.
    pub fn new(requested: usize) -> Self {
        Self {
            requested,
            ..Self::default()
        }
    }

    /// Records the outcome of one attempt.
    pub fn record(&mut self, outcome: &SwapOutcome) {
        self.attempts += 1;
        match outcome {
            SwapOutcome::Applied { .. } => self.accepted += 1,
            SwapOutcome::Rejected(SwapRejection::SameEdge) => self.rejected_same_edge += 1,
            SwapOutcome::Rejected(SwapRejection::SharedGroup | SwapRejection::SharedNode) => {
                self.rejected_shared_endpoint += 1
            }
            SwapOutcome::Rejected(SwapRejection::WouldDuplicate) => self.rejected_duplicate += 1,
        }
    }

    /// Attempts that did not change the graph.
    pub fn rejected(&self) -> usize {
        self.rejected_same_edge + self.rejected_shared_endpoint + self.rejected_duplicate
    }

    /// Fraction of attempts that were applied (1.0 when nothing was attempted).
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            1.0
        } else {
            self.accepted as f64 / self.attempts as f64
        }
    }

    /// Whether every requested swap was performed.
    pub fn is_complete(&self) -> bool {
        self.accepted >= self.requested
    }

    /// Adds the counters of another run.
    pub fn merge(&mut self, other: &MixingStats) {
        self.requested += other.requested;
        self.accepted += other.accepted;
        self.attempts += other.attempts;
        self.rejected_same_edge += other.rejected_same_edge;
        self.rejected_shared_endpoint += other.rejected_shared_endpoint;
        self.rejected_duplicate += other.rejected_duplicate;
    }
}
