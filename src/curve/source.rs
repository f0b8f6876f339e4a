//! Closed outlines: a procedural multi-harmonic loop or a picked point list.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::curve::Point2;
use crate::curve::interp::PolynomialType;
use crate::error::CurveError;

/// Fewest open vertices that still describe a loop.
pub const MIN_VERTICES: usize = 3;

/// Default angular grid for the procedural outline.
pub const PROCEDURAL_SAMPLES: usize = 400;

/// (harmonic, cos weight, sin weight) on top of a unit radius.
const HARMONICS: [(f64, f64, f64); 4] = [
    (2.0, 0.18, 0.00),
    (3.0, 0.00, 0.09),
    (5.0, 0.05, 0.00),
    (7.0, 0.00, 0.025),
];

/// Radius scale of the procedural outline.
const PROCEDURAL_RADIUS: f64 = 100.0;

/// Where the outline comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveSource {
    /// Densely sampled radial function; interpolated linearly.
    Procedural { samples: usize },
    /// Sparse picked points starting at the entrance; interpolated with a cubic spline.
    Literal { points: Vec<Point2> },
}

impl Default for CurveSource {
    fn default() -> Self {
        CurveSource::Procedural { samples: PROCEDURAL_SAMPLES }
    }
}

impl CurveSource {
    pub fn build(&self) -> Result<ClosedCurve, CurveError> {
        match self {
            CurveSource::Procedural { samples } => ClosedCurve::procedural(*samples),
            CurveSource::Literal { points } => ClosedCurve::from_literal(points),
        }
    }
}

/// r(θ) = R · (1 + Σ aₖ cos kθ + bₖ sin kθ).
pub fn radial(theta: f64) -> f64 {
    let wobble: f64 = HARMONICS
        .iter()
        .map(|&(k, a, b)| a * (k * theta).cos() + b * (k * theta).sin())
        .sum();
    PROCEDURAL_RADIUS * (1.0 + wobble)
}

/// Ordered samples with first == last, never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosedCurve {
    points: Vec<Point2>,
    interpolation: PolynomialType,
}

impl ClosedCurve {
    /// `samples` points on a closed angular grid θ ∈ [0, 2π]; the entrance sits at θ = 0.
    pub fn procedural(samples: usize) -> Result<Self, CurveError> {
        if samples < MIN_VERTICES + 1 {
            return Err(CurveError::TooFewPoints {
                count: samples,
                needed: MIN_VERTICES + 1,
            });
        }
        let last = samples - 1;
        let mut points: Vec<Point2> = (0..last)
            .map(|k| {
                let theta = TAU * k as f64 / last as f64;
                let r = radial(theta);
                Point2::new(r * theta.cos(), r * theta.sin())
            })
            .collect();
        points.push(points[0]);

        Ok(Self {
            points,
            interpolation: PolynomialType::Linear,
        })
    }

    /// Re-centre on the centroid and close the loop by repeating the first point.
    /// An input that is already closed is not closed twice.
    pub fn from_literal(points: &[Point2]) -> Result<Self, CurveError> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(CurveError::NonFinite { index });
        }

        let open = match points {
            [first, .., last] if first == last => &points[..points.len() - 1],
            _ => points,
        };
        if open.len() < MIN_VERTICES {
            return Err(CurveError::TooFewPoints {
                count: open.len(),
                needed: MIN_VERTICES,
            });
        }
        if open.iter().all(|p| *p == open[0]) {
            return Err(CurveError::Degenerate);
        }

        let n = open.len() as f64;
        let cx = open.iter().map(|p| p.x).sum::<f64>() / n;
        let cy = open.iter().map(|p| p.y).sum::<f64>() / n;

        let mut centred: Vec<Point2> = open
            .iter()
            .map(|p| Point2::new(p.x - cx, p.y - cy))
            .collect();
        centred.push(centred[0]);

        Ok(Self {
            points: centred,
            interpolation: PolynomialType::NotAKnotCubic,
        })
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Distinct vertices (the closing duplicate excluded).
    pub fn vertex_count(&self) -> usize {
        self.points.len() - 1
    }

    pub fn interpolation(&self) -> PolynomialType {
        self.interpolation
    }
}

/// Street outline picked from the citadel map, starting at the entrance.
pub fn citadel_outline() -> Vec<Point2> {
    [
        [412.35, 118.60],
        [486.90, 131.25],
        [553.10, 168.40],
        [601.75, 226.95],
        [628.30, 301.80],
        [624.15, 382.05],
        [592.60, 449.70],
        [538.45, 503.35],
        [466.20, 531.90],
        [389.85, 536.10],
        [318.40, 512.75],
        [259.05, 466.30],
        [219.70, 401.55],
        [204.25, 327.40],
        [215.90, 254.85],
        [252.35, 192.10],
        [307.80, 146.45],
        [356.95, 124.20],
    ]
    .into_iter()
    .map(Point2::from)
    .collect()
}
