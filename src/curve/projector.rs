//! Perimeter position → 2-D coordinate.
//!
//! The parameter `t ∈ [0, 1]` is spaced evenly over the sample index, not
//! corrected for arc length, so sample `k` of `N + 1` sits at `t = k / N`.

use tracing::debug;

use crate::curve::interp::PiecewisePolynomial;
use crate::curve::source::{ClosedCurve, CurveSource};
use crate::curve::{Point2, PolynomialType};
use crate::error::CurveError;

pub struct CurveProjector {
    perimeter: f64,
    x: PiecewisePolynomial,
    y: PiecewisePolynomial,
    samples: usize,
}

impl CurveProjector {
    pub fn new(curve: &ClosedCurve, perimeter: f64) -> Result<Self, CurveError> {
        if !perimeter.is_finite() || perimeter <= 0.0 {
            return Err(CurveError::Perimeter(perimeter));
        }

        let pts = curve.points();
        let kind = curve.interpolation();
        let last = (pts.len() - 1) as f64;
        let ts: Vec<f64> = (0..pts.len()).map(|i| i as f64 / last).collect();
        let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();

        let x = PiecewisePolynomial::new(kind, &ts, &xs).ok_or(CurveError::Singular { axis: "x" })?;
        let y = PiecewisePolynomial::new(kind, &ts, &ys).ok_or(CurveError::Singular { axis: "y" })?;

        debug!(
            target: "citadel_walk.curve",
            samples = pts.len(),
            kind = ?kind,
            perimeter,
            "curve projector built"
        );

        Ok(Self { perimeter, x, y, samples: pts.len() })
    }

    pub fn from_source(source: &CurveSource, perimeter: f64) -> Result<Self, CurveError> {
        Self::new(&source.build()?, perimeter)
    }

    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn interpolation(&self) -> PolynomialType {
        self.x.polynomial_type()
    }

    /// `t = (pos / L) mod 1`, then `(x(t), y(t))`.
    pub fn project(&self, perimeter_pos: f64) -> Point2 {
        let mut t = (perimeter_pos / self.perimeter).rem_euclid(1.0);
        if t >= 1.0 {
            t = 0.0;
        }
        Point2::new(self.x.value(t), self.y.value(t))
    }

    pub fn project_all(&self, positions: &[f64]) -> Vec<Point2> {
        positions.iter().map(|&p| self.project(p)).collect()
    }

    pub fn entrance(&self) -> Point2 {
        self.project(0.0)
    }
}
