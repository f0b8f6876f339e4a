//! Piecewise polynomial interpolation over strictly increasing knots.
//!
//! Each segment stores its coefficients highest power first and is evaluated
//! with Horner's rule relative to the segment's left knot.

use nalgebra::{DMatrix, DVector};

struct Subpolynomial {
    coefs: Vec<f64>,
    lhs_x: f64,
}

impl Subpolynomial {
    fn value(&self, x: f64) -> f64 {
        let x_diff = x - self.lhs_x;
        let mut result = self.coefs[0];
        for &beta in &self.coefs[1..] {
            result = f64::mul_add(result, x_diff, beta);
        }
        result
    }
}

// ─────────────────────────────────────────────
// Linear
// ─────────────────────────────────────────────

fn linear_coef_list(xs: &[f64], ys: &[f64]) -> Vec<Vec<f64>> {
    (0..(xs.len() - 1))
        .map(|i| vec![(ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]), ys[i]])
        .collect()
}

// ─────────────────────────────────────────────
// Cubic splines
// ─────────────────────────────────────────────
//
// Both cubic variants solve for the second derivatives (moments) m[0..=n]
// at the knots. Interior rows come from C² continuity:
//   h[i-1]*m[i-1] + 2*(h[i-1]+h[i])*m[i] + h[i]*m[i+1]
//     = 6*((y[i+1]-y[i])/h[i] - (y[i]-y[i-1])/h[i-1])
// Rows 0 and n carry the boundary condition.

/// Segment i as [d, c, b, a] for a + b·dx + c·dx² + d·dx³.
fn cubic_coefs_from_moments(ys: &[f64], h: &[f64], m: &[f64]) -> Vec<Vec<f64>> {
    (0..h.len())
        .map(|i| {
            let d = (m[i + 1] - m[i]) / (6.0 * h[i]);
            let c = m[i] / 2.0;
            let b = (ys[i + 1] - ys[i]) / h[i] - h[i] * (2.0 * m[i] + m[i + 1]) / 6.0;
            vec![d, c, b, ys[i]]
        })
        .collect()
}

fn build_interior_system(ys: &[f64], h: &[f64]) -> (DMatrix<f64>, DVector<f64>) {
    let n = h.len();
    let mut mat = DMatrix::<f64>::zeros(n + 1, n + 1);
    let mut rhs = DVector::<f64>::zeros(n + 1);

    for i in 1..n {
        mat[(i, i - 1)] = h[i - 1];
        mat[(i, i)] = 2.0 * (h[i - 1] + h[i]);
        mat[(i, i + 1)] = h[i];
        rhs[i] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
    }
    (mat, rhs)
}

fn solve_moments(mat: DMatrix<f64>, rhs: DVector<f64>) -> Option<Vec<f64>> {
    let m = mat.lu().solve(&rhs)?;
    if m.iter().all(|v| v.is_finite()) {
        Some(m.iter().copied().collect())
    } else {
        None
    }
}

/// m[0] = m[n] = 0.
fn natural_cubic_coef_list(xs: &[f64], ys: &[f64]) -> Option<Vec<Vec<f64>>> {
    let n = xs.len() - 1;
    let h: Vec<f64> = (0..n).map(|i| xs[i + 1] - xs[i]).collect();

    let (mut mat, rhs) = build_interior_system(ys, &h);
    mat[(0, 0)] = 1.0;
    mat[(n, n)] = 1.0;

    let m = solve_moments(mat, rhs)?;
    Some(cubic_coefs_from_moments(ys, &h, &m))
}

/// Third derivative continuous across x[1] and x[n-1]:
///   -h[1]*m[0] + (h[0]+h[1])*m[1] - h[0]*m[2] = 0
///   -h[n-1]*m[n-2] + (h[n-2]+h[n-1])*m[n-1] - h[n-2]*m[n] = 0
/// Needs at least 4 knots.
fn not_a_knot_cubic_coef_list(xs: &[f64], ys: &[f64]) -> Option<Vec<Vec<f64>>> {
    let n = xs.len() - 1;
    let h: Vec<f64> = (0..n).map(|i| xs[i + 1] - xs[i]).collect();

    let (mut mat, rhs) = build_interior_system(ys, &h);

    mat[(0, 0)] = -h[1];
    mat[(0, 1)] = h[0] + h[1];
    mat[(0, 2)] = -h[0];

    mat[(n, n - 2)] = -h[n - 1];
    mat[(n, n - 1)] = h[n - 2] + h[n - 1];
    mat[(n, n)] = -h[n - 2];

    let m = solve_moments(mat, rhs)?;
    Some(cubic_coefs_from_moments(ys, &h, &m))
}

// ─────────────────────────────────────────────
// PolynomialType
// ─────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolynomialType {
    Linear,
    NaturalCubic,
    /// Falls back to `NaturalCubic` below 4 knots.
    NotAKnotCubic,
}

impl PolynomialType {
    pub fn necessary_points(self) -> usize {
        match self {
            PolynomialType::Linear => 2,
            PolynomialType::NaturalCubic => 3,
            PolynomialType::NotAKnotCubic => 3,
        }
    }
}

// ─────────────────────────────────────────────
// PiecewisePolynomial
// ─────────────────────────────────────────────

pub struct PiecewisePolynomial {
    max_x: f64,
    polynomial_type: PolynomialType,
    subpolynomial_list: Vec<Subpolynomial>,
}

impl PiecewisePolynomial {
    /// `None` when there are too few knots, the knots are not strictly
    /// increasing, or the spline system is singular.
    pub fn new(polynomial_type: PolynomialType, xs: &[f64], ys: &[f64]) -> Option<Self> {
        if xs.len() != ys.len() || xs.len() < polynomial_type.necessary_points() {
            return None;
        }
        if xs.windows(2).any(|w| !(w[1] > w[0])) {
            return None;
        }

        let coef_list = match polynomial_type {
            PolynomialType::Linear => linear_coef_list(xs, ys),
            PolynomialType::NaturalCubic => natural_cubic_coef_list(xs, ys)?,
            PolynomialType::NotAKnotCubic if xs.len() < 4 => natural_cubic_coef_list(xs, ys)?,
            PolynomialType::NotAKnotCubic => not_a_knot_cubic_coef_list(xs, ys)?,
        };

        let subpolynomial_list = coef_list
            .into_iter()
            .zip(xs)
            .map(|(coefs, &lhs_x)| Subpolynomial { coefs, lhs_x })
            .collect();

        Some(PiecewisePolynomial {
            max_x: xs[xs.len() - 1],
            polynomial_type,
            subpolynomial_list,
        })
    }

    pub fn polynomial_type(&self) -> PolynomialType {
        self.polynomial_type
    }

    pub fn min_x(&self) -> f64 {
        self.subpolynomial_list[0].lhs_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    fn find_segment(&self, x: f64) -> usize {
        if x <= self.min_x() {
            0
        } else if x >= self.max_x {
            self.subpolynomial_list.len() - 1
        } else {
            self.subpolynomial_list.partition_point(|s| s.lhs_x <= x) - 1
        }
    }

    /// Out-of-range inputs extrapolate the end segments.
    pub fn value(&self, x: f64) -> f64 {
        self.subpolynomial_list[self.find_segment(x)].value(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn linear_hits_knots_and_midpoints() {
        let xs = [0.0, 1.0, 2.0, 4.0];
        let ys = [0.0, 2.0, 1.0, 5.0];
        let p = PiecewisePolynomial::new(PolynomialType::Linear, &xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys) {
            assert!(close(p.value(*x), y, 1e-12));
        }
        assert!(close(p.value(0.5), 1.0, 1e-12));
        assert!(close(p.value(3.0), 3.0, 1e-12));
    }

    #[test]
    fn not_a_knot_reproduces_a_cubic() {
        let f = |x: f64| 0.5 * x * x * x - x * x + 2.0 * x - 3.0;
        let xs: Vec<f64> = (0..7).map(|i| i as f64 * 0.5).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
        let p = PiecewisePolynomial::new(PolynomialType::NotAKnotCubic, &xs, &ys).unwrap();
        for x in [0.1, 0.77, 1.3, 2.2, 2.95] {
            assert!(close(p.value(x), f(x), 1e-9), "x={x}");
        }
    }

    #[test]
    fn natural_passes_through_knots() {
        let xs = [0.0, 0.25, 0.5, 0.75, 1.0];
        let ys = [1.0, -1.0, 0.5, 2.0, 1.0];
        let p = PiecewisePolynomial::new(PolynomialType::NaturalCubic, &xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys) {
            assert!(close(p.value(*x), y, 1e-12));
        }
    }

    #[test]
    fn rejects_short_or_unsorted_knots() {
        assert!(PiecewisePolynomial::new(PolynomialType::Linear, &[0.0], &[1.0]).is_none());
        assert!(
            PiecewisePolynomial::new(PolynomialType::Linear, &[0.0, 0.0, 1.0], &[1.0, 2.0, 3.0])
                .is_none()
        );
        assert!(
            PiecewisePolynomial::new(PolynomialType::NaturalCubic, &[0.0, 1.0], &[1.0, 2.0])
                .is_none()
        );
    }

    #[test]
    fn three_knot_cubic_falls_back() {
        let p = PiecewisePolynomial::new(
            PolynomialType::NotAKnotCubic,
            &[0.0, 0.5, 1.0],
            &[0.0, 1.0, 0.0],
        )
        .unwrap();
        assert!(close(p.value(0.5), 1.0, 1e-12));
        assert_eq!(p.polynomial_type(), PolynomialType::NotAKnotCubic);
    }
}
