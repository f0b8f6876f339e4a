/// Perimeter model: a circular scalar position space with the entrance at 0 ≡ L.
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Rotational direction along the loop.
///
/// Counter-clockwise ("right") increases the position, clockwise ("left")
/// decreases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[serde(alias = "left")]
    Clockwise,
    #[serde(alias = "right")]
    CounterClockwise,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Clockwise => -1.0,
            Direction::CounterClockwise => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perimeter {
    length: f64,
}

impl Perimeter {
    pub fn new(length: f64) -> Result<Self, ConfigError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(ConfigError::Perimeter(length));
        }
        Ok(Self { length })
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Diametrically opposite the entrance.
    #[inline]
    pub fn start(&self) -> f64 {
        0.5 * self.length
    }

    /// Reduce any real position into [0, L).
    #[inline]
    pub fn wrap(&self, pos: f64) -> f64 {
        let r = pos.rem_euclid(self.length);
        // rem_euclid rounds tiny negatives up to exactly L.
        if r >= self.length { 0.0 } else { r }
    }

    /// Distance to the entrance going clockwise: `pos mod L`.
    #[inline]
    pub fn distance_left(&self, pos: f64) -> f64 {
        self.wrap(pos)
    }

    /// Distance to the entrance going counter-clockwise: `(L - pos) mod L`.
    #[inline]
    pub fn distance_right(&self, pos: f64) -> f64 {
        self.wrap(self.length - self.wrap(pos))
    }

    #[inline]
    pub fn advance(&self, pos: f64, dir: Direction, step: f64) -> f64 {
        self.wrap(pos + dir.sign() * step)
    }

    /// Within `tolerance` of the entrance in either wraparound sense.
    #[inline]
    pub fn at_entrance(&self, pos: f64, tolerance: f64) -> bool {
        pos.abs() < tolerance || (pos - self.length).abs() < tolerance
    }

    /// Direction of the shorter way home; ties (the start, the entrance) go clockwise.
    #[inline]
    pub fn homeward(&self, pos: f64) -> Direction {
        if self.distance_right(pos) < self.distance_left(pos) {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_lengths() {
        assert_eq!(Perimeter::new(0.0), Err(ConfigError::Perimeter(0.0)));
        assert!(Perimeter::new(-3.0).is_err());
        assert!(Perimeter::new(f64::NAN).is_err());
        assert!(Perimeter::new(f64::INFINITY).is_err());
    }

    #[test]
    fn wrap_stays_in_range() {
        let p = Perimeter::new(200.0).unwrap();
        assert_eq!(p.wrap(200.0), 0.0);
        assert_eq!(p.wrap(-1.0), 199.0);
        assert_eq!(p.wrap(401.0), 1.0);
        let w = p.wrap(-1e-18);
        assert!((0.0..200.0).contains(&w));
    }

    #[test]
    fn distances_sum_to_length_away_from_entrance() {
        let p = Perimeter::new(200.0).unwrap();
        for pos in [1.0, 37.5, 100.0, 150.0, 199.0] {
            let sum = p.distance_left(pos) + p.distance_right(pos);
            assert!((sum - 200.0).abs() < 1e-12, "pos {pos}: {sum}");
        }
        assert_eq!(p.distance_left(0.0), 0.0);
        assert_eq!(p.distance_right(0.0), 0.0);
    }

    #[test]
    fn advance_wraps_both_ways() {
        let p = Perimeter::new(10.0).unwrap();
        assert_eq!(p.advance(0.0, Direction::Clockwise, 1.0), 9.0);
        assert_eq!(p.advance(9.0, Direction::CounterClockwise, 1.0), 0.0);
    }

    #[test]
    fn entrance_check_covers_wraparound() {
        let p = Perimeter::new(200.0).unwrap();
        assert!(p.at_entrance(0.2, 0.5));
        assert!(p.at_entrance(199.7, 0.5));
        assert!(!p.at_entrance(100.0, 0.5));
    }

    #[test]
    fn homeward_picks_shorter_side() {
        let p = Perimeter::new(200.0).unwrap();
        assert_eq!(p.homeward(30.0), Direction::Clockwise);
        assert_eq!(p.homeward(170.0), Direction::CounterClockwise);
    }
}
