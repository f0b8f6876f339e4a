// tests/curve.rs
use citadel_walk::CurveError;
use citadel_walk::curve::{ClosedCurve, CurveProjector, CurveSource, Point2, PolynomialType, citadel_outline};
use proptest::prelude::*;

const L: f64 = 200.0;

fn near(a: Point2, b: Point2, tol: f64) -> bool {
    a.distance(&b) <= tol
}

/* ──────────────────────────────────────────────────────────────────────────
1) Entrance — 0 and L both land on the first sample
────────────────────────────────────────────────────────────────────────── */

#[test]
fn entrance_from_both_ends() {
    for source in [
        CurveSource::default(),
        CurveSource::Literal { points: citadel_outline() },
    ] {
        let curve = source.build().unwrap();
        let proj = CurveProjector::new(&curve, L).unwrap();
        assert!(near(proj.project(0.0), curve.points()[0], 1e-9));
        assert!(near(proj.project(L), curve.points()[0], 1e-9));
        assert_eq!(proj.entrance(), proj.project(0.0));
    }
}

/* ──────────────────────────────────────────────────────────────────────────
2) Round trip — k·L/N lands on the k-th sample
────────────────────────────────────────────────────────────────────────── */

#[test]
fn literal_samples_round_trip() {
    let curve = ClosedCurve::from_literal(&citadel_outline()).unwrap();
    let proj = CurveProjector::new(&curve, L).unwrap();
    assert_eq!(proj.interpolation(), PolynomialType::NotAKnotCubic);

    let n = curve.vertex_count();
    for k in 0..n {
        let got = proj.project(k as f64 * L / n as f64);
        assert!(near(got, curve.points()[k], 1e-6), "k={k}: {got:?} vs {:?}", curve.points()[k]);
    }
}

#[test]
fn procedural_samples_round_trip() {
    let curve = ClosedCurve::procedural(81).unwrap();
    let proj = CurveProjector::new(&curve, L).unwrap();
    assert_eq!(proj.interpolation(), PolynomialType::Linear);
    assert_eq!(proj.samples(), 81);

    let n = curve.vertex_count();
    for k in 0..n {
        let got = proj.project(k as f64 * L / n as f64);
        assert!(near(got, curve.points()[k], 1e-6), "k={k}");
    }
}

#[test]
fn smooth_literal_square_stays_near_its_corners() {
    let square = [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]].map(Point2::from);
    let proj = CurveProjector::from_source(&CurveSource::Literal { points: square.to_vec() }, 4.0).unwrap();
    let pts = proj.project_all(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    let want = [[-5.0, -5.0], [5.0, -5.0], [5.0, 5.0], [-5.0, 5.0], [-5.0, -5.0]].map(Point2::from);
    for (g, w) in pts.iter().zip(want) {
        assert!(near(*g, w, 1e-9), "{g:?} vs {w:?}");
    }
}

/* ──────────────────────────────────────────────────────────────────────────
3) Setup errors surface before any projection
────────────────────────────────────────────────────────────────────────── */

#[test]
fn bad_curves_fail_at_construction() {
    let two = CurveSource::Literal { points: vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)] };
    assert!(matches!(
        CurveProjector::from_source(&two, L),
        Err(CurveError::TooFewPoints { .. })
    ));

    let flat = CurveSource::Literal { points: vec![Point2::new(2.0, 2.0); 6] };
    assert_eq!(CurveProjector::from_source(&flat, L).err(), Some(CurveError::Degenerate));

    let sparse = CurveSource::Procedural { samples: 2 };
    assert!(CurveProjector::from_source(&sparse, L).is_err());
}

#[test]
fn source_from_json() {
    let lit: CurveSource = serde_json::from_str(
        r#"{ "kind": "literal", "points": [ {"x": 0, "y": 0}, {"x": 3, "y": 0}, {"x": 0, "y": 4} ] }"#,
    )
    .unwrap();
    assert_eq!(lit.build().unwrap().vertex_count(), 3);

    let pro: CurveSource = serde_json::from_str(r#"{ "kind": "procedural", "samples": 50 }"#).unwrap();
    assert_eq!(pro, CurveSource::Procedural { samples: 50 });
}

/* ──────────────────────────────────────────────────────────────────────────
4) Properties
────────────────────────────────────────────────────────────────────────── */

proptest! {
    #[test]
    fn projection_is_periodic(pos in -1_000.0f64..1_000.0, laps in -3i32..3) {
        let proj = CurveProjector::from_source(&CurveSource::Literal { points: citadel_outline() }, L).unwrap();
        let a = proj.project(pos);
        let b = proj.project(pos + laps as f64 * L);
        prop_assert!(near(a, b, 1e-6), "{:?} vs {:?}", a, b);
    }

    #[test]
    fn procedural_projection_stays_inside_outer_radius(pos in 0.0f64..L) {
        let proj = CurveProjector::from_source(&CurveSource::default(), L).unwrap();
        let p = proj.project(pos);
        prop_assert!(p.x.hypot(p.y) <= 134.5 + 1e-9);
    }
}
