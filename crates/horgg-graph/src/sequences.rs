use horgg_core::errors::{ErrorInfo, HorggError};
use horgg_core::rng::RngHandle;
use rand::Rng;

/// Draw budget used by [`draw_matching_sequence`] callers without a preference.
pub const DEFAULT_MAX_DRAWS: usize = 1_000_000;

/// Discrete distribution over `0..len` given by cumulative probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteDistribution {
    cumulative: Vec<f64>,
}

impl DiscreteDistribution {
    /// Builds a distribution from cumulative probabilities indexed from 0.
    ///
    /// Values must be finite, non-negative and non-decreasing. They are
    /// normalized by the last value, so a total mass other than 1 rescales
    /// every probability instead of shifting the deficit onto the last index.
    pub fn from_cumulative(cumulative: Vec<f64>) -> Result<Self, HorggError> {
        if cumulative.is_empty() {
            return Err(invalid_distribution("distribution has no support"));
        }
        let mut previous = 0.0f64;
        for (index, &value) in cumulative.iter().enumerate() {
            if !value.is_finite() || value < previous {
                return Err(HorggError::Sequence(
                    ErrorInfo::new(
                        "invalid-distribution",
                        "cumulative probabilities must be finite and non-decreasing",
                    )
                    .with_context("index", index.to_string())
                    .with_context("value", value.to_string()),
                ));
            }
            previous = value;
        }
        if previous <= 0.0 {
            return Err(invalid_distribution("distribution has zero total mass"));
        }
        let cumulative = cumulative.into_iter().map(|value| value / previous).collect();
        Ok(Self { cumulative })
    }

    /// Builds a distribution from point probabilities indexed from 0.
    pub fn from_probabilities(probabilities: &[f64]) -> Result<Self, HorggError> {
        if let Some((index, value)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite() || **value < 0.0)
        {
            return Err(HorggError::Sequence(
                ErrorInfo::new("invalid-distribution", "probabilities must be finite and non-negative")
                    .with_context("index", index.to_string())
                    .with_context("value", value.to_string()),
            ));
        }
        let cumulative = probabilities
            .iter()
            .scan(0.0f64, |total, &p| {
                *total += p;
                Some(*total)
            })
            .collect();
        Self::from_cumulative(cumulative)
    }

    /// Normalized cumulative probabilities; the last value is 1.
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Draws a value: the first index whose cumulative probability reaches `u`.
    pub fn sample(&self, rng: &mut RngHandle) -> usize {
        let u: f64 = rng.gen();
        self.value_at(u)
    }

    /// Smallest index `i` with `cumulative[i] >= u`, clamped to the support.
    pub fn value_at(&self, u: f64) -> usize {
        let index = self.cumulative.partition_point(|&c| c < u);
        index.min(self.cumulative.len() - 1)
    }

    /// Whether every value with positive probability is zero.
    pub fn only_zero(&self) -> bool {
        self.cumulative[0] >= self.cumulative[self.cumulative.len() - 1]
    }
}

/// Draws `len` independent values, e.g. one group size per group.
pub fn draw_sequence(len: usize, dist: &DiscreteDistribution, rng: &mut RngHandle) -> Vec<usize> {
    (0..len).map(|_| dist.sample(rng)).collect()
}

/// Draws values until their sum equals `target_sum`.
///
/// Whenever the running sum overshoots, a uniformly chosen element is
/// removed (with a single element, that element). Fails once `max_draws`
/// values have been drawn without reconciling the sums.
pub fn draw_matching_sequence(
    target_sum: usize,
    dist: &DiscreteDistribution,
    rng: &mut RngHandle,
    max_draws: usize,
) -> Result<Vec<usize>, HorggError> {
    if target_sum > 0 && dist.only_zero() {
        return Err(HorggError::Sequence(
            ErrorInfo::new(
                "degenerate-distribution",
                "distribution only produces zero but a positive sum is required",
            )
            .with_context("target_sum", target_sum.to_string()),
        ));
    }

    let mut sequence = Vec::new();
    let mut total = 0usize;
    let mut draws = 0usize;
    while total != target_sum {
        if total < target_sum {
            if draws == max_draws {
                return Err(HorggError::Sequence(
                    ErrorInfo::new(
                        "reconciliation-exhausted",
                        "could not match the target sum within the draw budget",
                    )
                    .with_context("target_sum", target_sum.to_string())
                    .with_context("max_draws", max_draws.to_string())
                    .with_hint("check that the distribution can produce the required sum"),
                ));
            }
            draws += 1;
            let value = dist.sample(rng);
            sequence.push(value);
            total += value;
        } else {
            let index = rng.gen_range(0..sequence.len());
            total -= sequence.swap_remove(index);
        }
    }
    Ok(sequence)
}

fn invalid_distribution(message: &str) -> HorggError {
    HorggError::Sequence(ErrorInfo::new("invalid-distribution", message))
}
