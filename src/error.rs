use thiserror::Error;

/// Out-of-range walk parameters, rejected before any step is taken.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("perimeter length must be finite and positive, got {0}")]
    Perimeter(f64),

    #[error("step size must be finite, positive and shorter than the perimeter ({perimeter}), got {step_size}")]
    StepSize { step_size: f64, perimeter: f64 },

    #[error("bias alpha must be finite and non-negative, got {0}")]
    Alpha(f64),

    #[error("arrival tolerance must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("positions stay {offset} from the entrance, never within tolerance {tolerance}")]
    Unreachable { offset: f64, tolerance: f64 },

    #[error("step budget must be at least 1")]
    StepBudget,
}

/// Curve input that cannot be turned into a projector.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CurveError {
    #[error("closed curve needs at least {needed} points, got {count}")]
    TooFewPoints { count: usize, needed: usize },

    #[error("closed curve needs at least 2 distinct points")]
    Degenerate,

    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("spline system for {axis} is singular")]
    Singular { axis: &'static str },

    #[error("perimeter length must be finite and positive, got {0}")]
    Perimeter(f64),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum WalkError {
    #[error("invalid walk configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("walk did not reach the entrance within {steps} steps (last position {last_position})")]
    DidNotConverge { steps: usize, last_position: f64 },
}
