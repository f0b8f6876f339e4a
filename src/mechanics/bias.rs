/// Bias mechanics: logistic preference for the shorter way to the entrance.
use crate::mechanics::perimeter::{Direction, Perimeter};

/// Smallest margin kept between a probability and {0, 1}.
const P_MARGIN: f64 = f64::EPSILON;

/// Standard logistic: 1 / (1 + e^-x).
#[inline]
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bias {
    perimeter: Perimeter,
    alpha: f64,
}

impl Bias {
    pub fn new(perimeter: Perimeter, alpha: f64) -> Self {
        Self { perimeter, alpha }
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// P(counter-clockwise step) = logistic(α · (d_left − d_right)).
    ///
    /// Strictly inside (0, 1): saturated values are pulled in by one ulp-ish margin.
    #[inline]
    pub fn probability(&self, pos: f64) -> f64 {
        let d_left = self.perimeter.distance_left(pos);
        let d_right = self.perimeter.distance_right(pos);
        logistic(self.alpha * (d_left - d_right)).clamp(P_MARGIN, 1.0 - P_MARGIN)
    }

    /// Probability of the step that shortens the way home.
    #[inline]
    pub fn homeward(&self, pos: f64) -> f64 {
        let p = self.probability(pos);
        match self.perimeter.homeward(pos) {
            Direction::CounterClockwise => p,
            Direction::Clockwise => 1.0 - p,
        }
    }
}
