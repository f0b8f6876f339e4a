/*!
`citadel_walk` — a biased random walk on a closed street loop.

What it does
- Models the loop as a 1-D circular position space of length `L` with the
  entrance at position `0 ≡ L`.
- Biases each step toward the shorter way round to the entrance with a
  logistic function of the two distances.
- Walks from `L/2` until the walker is back within tolerance of the entrance,
  or a step budget runs out.
- Projects any perimeter position onto a 2-D closed outline through an
  index-parametrized interpolant.

How to use (call surface only)
- Build a [`systems::walk::WalkConfig`] (or take the default) and a seeded RNG
  (`mechanics::stoch::seeded`).
- Call [`systems::walk::simulate`] → [`systems::walk::WalkOutcome`].
- Build a [`curve::projector::CurveProjector`] from a
  [`curve::source::CurveSource`] and call `project` / `project_all` on the
  trajectory.

What it does NOT do
- No rendering, no animation, no point picking, no persistence.
*/

/// Where a bounded iteration ended.
#[derive(Clone, Debug, PartialEq)]
pub struct Iterated<S> {
    pub state: S,
    pub steps: usize,
    pub stopped: bool,
}

/// Bounded iteration: s_{t+1} = step(s_t, t) until `stop(s_t)` or `max_steps`.
///
/// The predicate is checked before every step and once more after the last
/// one, so a state that already satisfies `stop` costs zero steps.
pub fn iterate_until<S, Step, Stop>(
    mut state: S,
    mut step: Step,
    stop: Stop,
    max_steps: usize,
) -> Iterated<S>
where
    Step: FnMut(&S, usize) -> S,
    Stop: Fn(&S) -> bool,
{
    for i in 0..max_steps {
        if stop(&state) {
            return Iterated { state, steps: i, stopped: true };
        }
        state = step(&state, i);
    }
    let stopped = stop(&state);
    Iterated { state, steps: max_steps, stopped }
}

pub mod curve;
pub mod error;
pub mod mechanics;
pub mod scenarios;
pub mod systems;

pub use error::{ConfigError, CurveError, WalkError};
