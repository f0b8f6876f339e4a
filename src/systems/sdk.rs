// src/systems/sdk.rs

//! # Walk SDK
//!
//! Small hook protocol that lets optional behaviour take part in a walk
//! without editing the simulator. A hook can:
//!
//! - `override_direction(step, pos, p) -> Option<Direction>`
//!   Fix the direction of a step, ignoring the sampled one. The first hook
//!   that answers `Some` wins and no random draw is consumed for that step.
//!   The forced opening of the demonstration walks is a hook of this kind
//!   ([`crate::systems::walk::ForcedDirection`]).
//!
//! - `on_step(&StepRecord)`
//!   Observe each completed step (counters, live plotting buffers, …).
//!
//! ## Determinism
//! Hooks must not draw from the walk's RNG. Given the same seed, config and
//! hook stack, a walk is reproduced exactly.

use crate::mechanics::perimeter::Direction;

/// One completed step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    pub step: usize,
    pub from: f64,
    pub to: f64,
    pub direction: Direction,
    /// P(counter-clockwise) at `from`, the value the step was sampled with.
    pub sampled_with: f64,
    /// P(counter-clockwise) at `to`, the value appended to the trace.
    pub probability: f64,
    pub forced: bool,
}

pub trait Hook {
    /// (Optional) fix this step's direction (default: sample it).
    fn override_direction(&mut self, _step: usize, _pos: f64, _p: f64) -> Option<Direction> {
        None
    }
    /// (Optional) observe a completed step.
    fn on_step(&mut self, _record: &StepRecord) {}
}

/// First `Some` from the stack, in order.
pub(crate) fn first_override(
    hooks: &mut [Box<dyn Hook>],
    step: usize,
    pos: f64,
    p: f64,
) -> Option<Direction> {
    hooks
        .iter_mut()
        .find_map(|h| h.override_direction(step, pos, p))
}
