//! Walk simulator: biased steps from `L/2` until the walker is back at the entrance.

use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{ConfigError, WalkError};
use crate::iterate_until;
use crate::mechanics::bias::Bias;
use crate::mechanics::perimeter::{Direction, Perimeter};
use crate::mechanics::stoch;
use crate::systems::sdk::{Hook, StepRecord, first_override};

/// Forced opening used by the demonstration walks.
pub const DEMO_FORCED_STEPS: usize = 10;

/// Fix the direction of the first `steps` steps.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForcedDirection {
    pub direction: Direction,
    pub steps: usize,
}

impl ForcedDirection {
    pub fn left(steps: usize) -> Self {
        Self { direction: Direction::Clockwise, steps }
    }

    pub fn right(steps: usize) -> Self {
        Self { direction: Direction::CounterClockwise, steps }
    }
}

impl Hook for ForcedDirection {
    fn override_direction(&mut self, step: usize, pos: f64, _p: f64) -> Option<Direction> {
        if step < self.steps {
            trace!(target: "citadel_walk.walk", step, pos, direction = ?self.direction, "forced step");
            Some(self.direction)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Perimeter length L.
    pub perimeter: f64,
    /// Logistic steepness; 0 is an unbiased walk.
    pub alpha: f64,
    pub step_size: f64,
    /// Arrival band around the entrance. When L is a whole number of steps the
    /// walker only visits `L/2 + k·step`, so the band must reach one of those.
    pub tolerance: f64,
    pub forced: Option<ForcedDirection>,
    /// Step budget; a walk that uses it up is reported, not looped forever.
    pub max_steps: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            perimeter: 200.0,
            alpha: 0.025,
            step_size: 1.0,
            tolerance: 0.5,
            forced: None,
            max_steps: 100_000,
        }
    }
}

impl WalkConfig {
    pub fn with_forced(mut self, forced: ForcedDirection) -> Self {
        self.forced = Some(forced);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Reject out-of-range parameters and build the perimeter + bias pair.
    pub fn validate(&self) -> Result<(Perimeter, Bias), ConfigError> {
        let perimeter = Perimeter::new(self.perimeter)?;
        if !self.step_size.is_finite() || self.step_size <= 0.0 || self.step_size >= self.perimeter {
            return Err(ConfigError::StepSize {
                step_size: self.step_size,
                perimeter: self.perimeter,
            });
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(ConfigError::Alpha(self.alpha));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::Tolerance(self.tolerance));
        }
        if let Some(offset) = self.lattice_offset() {
            if offset >= self.tolerance {
                return Err(ConfigError::Unreachable { offset, tolerance: self.tolerance });
            }
        }
        if self.max_steps == 0 {
            return Err(ConfigError::StepBudget);
        }
        Ok((perimeter, Bias::new(perimeter, self.alpha)))
    }

    /// Closest the reachable lattice `L/2 + k·step (mod L)` gets to the entrance,
    /// when L is a whole number of steps. `None` otherwise.
    fn lattice_offset(&self) -> Option<f64> {
        let laps = self.perimeter / self.step_size;
        if (laps - laps.round()).abs() > 1e-9 * laps.max(1.0) {
            return None;
        }
        let r = (0.5 * self.perimeter).rem_euclid(self.step_size);
        Some(r.min(self.step_size - r))
    }
}

/// A finished (or budget-cut) walk. Immutable once returned.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Walk {
    trajectory: Vec<f64>,
    probabilities: Vec<f64>,
    directions: Vec<Direction>,
}

impl Walk {
    /// Positions, starting with `L/2`; one entry per step plus the start.
    pub fn trajectory(&self) -> &[f64] {
        &self.trajectory
    }

    /// P(counter-clockwise) at each trajectory entry.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Direction of each step; one shorter than the trajectory.
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn steps(&self) -> usize {
        self.directions.len()
    }

    pub fn final_position(&self) -> f64 {
        self.trajectory.last().copied().unwrap_or_default()
    }

    pub fn summary(&self) -> WalkSummary {
        let counter_clockwise_steps = self
            .directions
            .iter()
            .filter(|d| **d == Direction::CounterClockwise)
            .count();
        let mean_probability = if self.probabilities.is_empty() {
            0.5
        } else {
            self.probabilities.iter().sum::<f64>() / self.probabilities.len() as f64
        };
        WalkSummary {
            steps: self.steps(),
            counter_clockwise_steps,
            clockwise_steps: self.steps() - counter_clockwise_steps,
            mean_probability,
            final_position: self.final_position(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalkSummary {
    pub steps: usize,
    pub counter_clockwise_steps: usize,
    pub clockwise_steps: usize,
    pub mean_probability: f64,
    pub final_position: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum WalkOutcome {
    /// Reached the entrance within tolerance.
    Converged(Walk),
    /// Ran out of step budget; holds the partial walk.
    ExceededStepBudget(Walk),
}

impl WalkOutcome {
    pub fn is_converged(&self) -> bool {
        matches!(self, WalkOutcome::Converged(_))
    }

    pub fn walk(&self) -> &Walk {
        match self {
            WalkOutcome::Converged(w) | WalkOutcome::ExceededStepBudget(w) => w,
        }
    }

    pub fn into_walk(self) -> Walk {
        match self {
            WalkOutcome::Converged(w) | WalkOutcome::ExceededStepBudget(w) => w,
        }
    }

    /// Treat an exhausted budget as an error.
    pub fn into_converged(self) -> Result<Walk, WalkError> {
        match self {
            WalkOutcome::Converged(w) => Ok(w),
            WalkOutcome::ExceededStepBudget(w) => Err(WalkError::DidNotConverge {
                steps: w.steps(),
                last_position: w.final_position(),
            }),
        }
    }
}

/// Run one walk with the config's forced opening (if any).
pub fn simulate<R: RngCore + ?Sized>(cfg: &WalkConfig, rng: &mut R) -> Result<WalkOutcome, ConfigError> {
    simulate_with_hooks(cfg, rng, Vec::new())
}

/// Run one walk. The config's forced opening goes in front of `hooks`.
pub fn simulate_with_hooks<R: RngCore + ?Sized>(
    cfg: &WalkConfig,
    rng: &mut R,
    mut hooks: Vec<Box<dyn Hook>>,
) -> Result<WalkOutcome, ConfigError> {
    let (perimeter, bias) = cfg.validate()?;
    if let Some(forced) = cfg.forced {
        hooks.insert(0, Box::new(forced));
    }

    let start = perimeter.start();
    let mut trajectory = vec![start];
    let mut probabilities = vec![bias.probability(start)];
    let mut directions = Vec::new();

    debug!(
        target: "citadel_walk.walk",
        perimeter = perimeter.length(),
        alpha = bias.alpha(),
        max_steps = cfg.max_steps,
        "walk started"
    );

    let run = iterate_until(
        start,
        |&pos, step| {
            let p = bias.probability(pos);
            let (direction, forced) = match first_override(&mut hooks, step, pos, p) {
                Some(d) => (d, true),
                None if stoch::bernoulli(&mut *rng, p) => (Direction::CounterClockwise, false),
                None => (Direction::Clockwise, false),
            };
            let next = perimeter.advance(pos, direction, cfg.step_size);
            let next_p = bias.probability(next);

            trajectory.push(next);
            probabilities.push(next_p);
            directions.push(direction);

            let record = StepRecord {
                step,
                from: pos,
                to: next,
                direction,
                sampled_with: p,
                probability: next_p,
                forced,
            };
            for h in hooks.iter_mut() {
                h.on_step(&record);
            }
            next
        },
        |&pos| perimeter.at_entrance(pos, cfg.tolerance),
        cfg.max_steps,
    );

    let walk = Walk { trajectory, probabilities, directions };
    if run.stopped {
        debug!(target: "citadel_walk.walk", steps = run.steps, "walk reached the entrance");
        Ok(WalkOutcome::Converged(walk))
    } else {
        warn!(
            target: "citadel_walk.walk",
            steps = run.steps,
            last_position = run.state,
            "walk exhausted its step budget"
        );
        Ok(WalkOutcome::ExceededStepBudget(walk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics::stoch::seeded;

    #[test]
    fn default_config_is_valid() {
        assert!(WalkConfig::default().validate().is_ok());
    }

    #[test]
    fn validation_rejects_each_bad_field() {
        let base = WalkConfig::default();
        let cases = [
            (WalkConfig { perimeter: -1.0, ..base }, ConfigError::Perimeter(-1.0)),
            (
                WalkConfig { step_size: 0.0, ..base },
                ConfigError::StepSize { step_size: 0.0, perimeter: 200.0 },
            ),
            (
                WalkConfig { step_size: 250.0, ..base },
                ConfigError::StepSize { step_size: 250.0, perimeter: 200.0 },
            ),
            (WalkConfig { alpha: -0.1, ..base }, ConfigError::Alpha(-0.1)),
            (WalkConfig { tolerance: 0.0, ..base }, ConfigError::Tolerance(0.0)),
            (WalkConfig { max_steps: 0, ..base }, ConfigError::StepBudget),
            (
                WalkConfig { perimeter: 201.0, ..base },
                ConfigError::Unreachable { offset: 0.5, tolerance: 0.5 },
            ),
        ];
        for (cfg, want) in cases {
            assert_eq!(cfg.validate().err(), Some(want));
        }
    }

    #[test]
    fn half_step_offsets_need_a_wide_enough_band() {
        let odd = WalkConfig { perimeter: 201.0, ..WalkConfig::default() };
        assert!(matches!(
            simulate(&odd, &mut seeded(1)),
            Err(ConfigError::Unreachable { .. })
        ));

        let wide = WalkConfig { tolerance: 0.6, ..odd };
        assert!(wide.validate().is_ok());
        let out = simulate(&WalkConfig { alpha: 0.05, ..wide }, &mut seeded(1)).unwrap();
        assert!(out.is_converged());
        assert_eq!(out.walk().trajectory()[..3], [100.5, 99.5, 98.5]);

        // Not a whole number of steps: the lattice drifts, nothing to reject.
        assert!(WalkConfig { step_size: 0.7, ..WalkConfig::default() }.validate().is_ok());
    }

    #[test]
    fn forced_opening_is_deterministic() {
        let cfg = WalkConfig::default().with_forced(ForcedDirection::left(DEMO_FORCED_STEPS));
        let out = simulate(&cfg, &mut seeded(42)).unwrap();
        let walk = out.walk();
        let opening: Vec<f64> = (0..=10).map(|k| 100.0 - k as f64).collect();
        assert_eq!(&walk.trajectory()[..=10], opening.as_slice());
        assert!(walk.directions()[..10].iter().all(|d| *d == Direction::Clockwise));
    }

    #[test]
    fn tiny_budget_reports_partial_walk() {
        let cfg = WalkConfig { max_steps: 5, ..WalkConfig::default() };
        let out = simulate(&cfg, &mut seeded(9)).unwrap();
        assert!(!out.is_converged());
        assert_eq!(out.walk().steps(), 5);
        assert_eq!(out.walk().trajectory().len(), 6);
        assert!(matches!(
            out.into_converged(),
            Err(WalkError::DidNotConverge { steps: 5, .. })
        ));
    }

    #[test]
    fn start_inside_tolerance_takes_no_steps() {
        let cfg = WalkConfig { tolerance: 150.0, ..WalkConfig::default() };
        let out = simulate(&cfg, &mut seeded(1)).unwrap();
        assert!(out.is_converged());
        assert_eq!(out.walk().trajectory(), &[100.0]);
        assert_eq!(out.walk().probabilities(), &[0.5]);
    }

    #[test]
    fn summary_counts_directions() {
        let cfg = WalkConfig::default().with_forced(ForcedDirection::right(DEMO_FORCED_STEPS));
        let walk = simulate(&cfg, &mut seeded(5)).unwrap().into_walk();
        let s = walk.summary();
        assert_eq!(s.steps, walk.steps());
        assert_eq!(s.counter_clockwise_steps + s.clockwise_steps, s.steps);
        assert!(s.counter_clockwise_steps >= DEMO_FORCED_STEPS);
        assert!(s.mean_probability > 0.0 && s.mean_probability < 1.0);
    }
}
