//! Closed-curve geometry: where a perimeter position sits on the 2-D outline.
//!
//! A [`source::CurveSource`] describes the outline (procedural or a literal
//! point list from the picking tool), [`source::ClosedCurve`] is the validated,
//! closed sample sequence, and [`projector::CurveProjector`] owns the
//! interpolants that turn a perimeter position into a coordinate.

use serde::{Deserialize, Serialize};

pub mod interp;
pub mod projector;
pub mod source;

pub use interp::{PiecewisePolynomial, PolynomialType};
pub use projector::CurveProjector;
pub use source::{ClosedCurve, CurveSource, citadel_outline};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point2 {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}
