//! The selection policy variants.

use std::str::FromStr;

use gc_measure::DensityHistory;

use crate::{PolicyError, PolicyResult};

/// How the next corridor is chosen at a control tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Keep the current corridor — the "no control" baseline.
    Fixed,
    /// Advance by one, wrapping modulo the corridor count (open loop).
    RoundRobin,
    /// Pick the corridor with the lowest mean density over the most recent
    /// control window, never reselecting the current one (closed loop).
    GreedyMinDensity,
}

impl SelectionPolicy {
    /// Choose the next corridor index.
    ///
    /// * `current` — the corridor currently recommended (0-based).
    /// * `history` — the density history accumulated so far.
    /// * `window`  — sensing steps per control period (the averaging window).
    /// * `count`   — number of corridors.
    ///
    /// Returns the new index; the caller pairs it with `current` to form the
    /// before/after audit record.
    pub fn select(
        self,
        current: usize,
        history: &DensityHistory,
        window: usize,
        count: usize,
    ) -> PolicyResult<usize> {
        if current >= count {
            return Err(PolicyError::IndexOutOfRange { index: current, count });
        }

        match self {
            SelectionPolicy::Fixed => Ok(current),

            SelectionPolicy::RoundRobin => Ok((current + 1) % count),

            SelectionPolicy::GreedyMinDensity => {
                let mut mean = history
                    .mean_over_last(window)
                    .ok_or(PolicyError::EmptyHistory)?;
                // Samples narrower than the corridor count would make the
                // mask below panic; surface the mismatch instead.
                if current >= mean.len() {
                    return Err(PolicyError::IndexOutOfRange {
                        index: current,
                        count: mean.len(),
                    });
                }
                // Forbid reselecting the current corridor.
                mean[current] = f64::INFINITY;
                Ok(argmin_last(&mean))
            }
        }
    }
}

/// Index of the minimum value, ties broken by the *last* (highest) index.
///
/// The tie-break is load-bearing: historical runs resolved equal-density
/// corridors this way, and downstream result comparisons depend on it.
fn argmin_last(values: &[f64]) -> usize {
    let mut best = 0;
    let mut best_val = f64::INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v <= best_val {
            best = i;
            best_val = v;
        }
    }
    best
}

impl FromStr for SelectionPolicy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(SelectionPolicy::Fixed),
            "round-robin" => Ok(SelectionPolicy::RoundRobin),
            "greedy-min-density" => Ok(SelectionPolicy::GreedyMinDensity),
            other => Err(PolicyError::UnknownPolicy(other.to_string())),
        }
    }
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SelectionPolicy::Fixed => "fixed",
            SelectionPolicy::RoundRobin => "round-robin",
            SelectionPolicy::GreedyMinDensity => "greedy-min-density",
        };
        f.write_str(name)
    }
}
