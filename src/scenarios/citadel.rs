// src/scenarios/citadel.rs
#![cfg(feature = "scenario-citadel")]

//! Citadel scenario: two contrasting walks around the street loop.
//!
//! One walk is forced clockwise for its opening steps, the other
//! counter-clockwise; after that both follow the bias home. Both trajectories
//! are projected onto the outline so a presentation layer can animate them
//! side by side.

use thiserror::Error;
use tracing::debug;

use crate::curve::{CurveProjector, CurveSource, Point2, citadel_outline};
use crate::error::{ConfigError, CurveError};
use crate::mechanics::stoch::seeded;
use crate::systems::walk::{DEMO_FORCED_STEPS, ForcedDirection, WalkConfig, WalkOutcome, simulate};

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// One projected walk.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedWalk {
    pub outcome: WalkOutcome,
    pub path: Vec<Point2>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CitadelOutcome {
    pub entrance: Point2,
    pub left: ProjectedWalk,
    pub right: ProjectedWalk,
}

/// The picked citadel outline.
pub fn citadel_source() -> CurveSource {
    CurveSource::Literal { points: citadel_outline() }
}

/// Run the forced-left walk with `seed` and the forced-right walk with `seed + 1`.
/// Any `forced` already in `cfg` is replaced.
pub fn run(cfg: &WalkConfig, source: &CurveSource, seed: u64) -> Result<CitadelOutcome, ScenarioError> {
    let projector = CurveProjector::from_source(source, cfg.perimeter)?;

    let project = |forced: ForcedDirection, seed: u64| -> Result<ProjectedWalk, ScenarioError> {
        let outcome = simulate(&cfg.with_forced(forced), &mut seeded(seed))?;
        let path = projector.project_all(outcome.walk().trajectory());
        Ok(ProjectedWalk { outcome, path })
    };

    let left = project(ForcedDirection::left(DEMO_FORCED_STEPS), seed)?;
    let right = project(ForcedDirection::right(DEMO_FORCED_STEPS), seed.wrapping_add(1))?;

    debug!(
        target: "citadel_walk.scenario",
        left_steps = left.outcome.walk().steps(),
        right_steps = right.outcome.walk().steps(),
        "citadel scenario finished"
    );

    Ok(CitadelOutcome {
        entrance: projector.entrance(),
        left,
        right,
    })
}
