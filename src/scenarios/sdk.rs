// src/scenarios/sdk.rs

//! # Scenario SDK
//!
//! Glue for running many independent walks and summarising them.
//!
//! A **scenario** is a concrete setting (a street outline, a bias, a forced
//! opening) plus whatever it needs to hand to a presentation layer. Scenarios
//! compose the walk simulator and the curve projector; they never reach into
//! either.
//!
//! ## Reproducibility
//! Every run gets its own RNG seeded from its own `u64`. A batch over the same
//! seeds with the same config is reproduced exactly, in any order.

use crate::error::ConfigError;
use crate::mechanics::stoch::seeded;
use crate::systems::walk::{WalkConfig, WalkOutcome, simulate};

/// Aggregate over a batch of walks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BatchStats {
    pub runs: usize,
    pub converged: usize,
    /// Mean steps over converged runs (0 when none converged).
    pub mean_steps: f64,
    /// Longest converged run.
    pub max_steps: usize,
}

impl BatchStats {
    pub fn convergence_rate(&self) -> f64 {
        if self.runs == 0 { 0.0 } else { self.converged as f64 / self.runs as f64 }
    }
}

/// One walk per seed, in seed order.
pub fn run_seeds<I>(cfg: &WalkConfig, seeds: I) -> Result<Vec<WalkOutcome>, ConfigError>
where
    I: IntoIterator<Item = u64>,
{
    seeds
        .into_iter()
        .map(|seed| simulate(cfg, &mut seeded(seed)))
        .collect()
}

pub fn batch_stats(outcomes: &[WalkOutcome]) -> BatchStats {
    let steps: Vec<usize> = outcomes
        .iter()
        .filter(|o| o.is_converged())
        .map(|o| o.walk().steps())
        .collect();
    let mean_steps = if steps.is_empty() {
        0.0
    } else {
        steps.iter().sum::<usize>() as f64 / steps.len() as f64
    };
    BatchStats {
        runs: outcomes.len(),
        converged: steps.len(),
        mean_steps,
        max_steps: steps.iter().copied().max().unwrap_or(0),
    }
}
