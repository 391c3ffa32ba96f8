use super::oracle::{evaluate, evaluate_result};
use super::*;
use crate::plane::distance;
use crate::plane::rand::{draw_points_grid, draw_points_uniform, ReplayToken, UniformCfg};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&c| Point::from(c)).collect()
}

fn min_pairwise(points: &[Point]) -> f64 {
    let mut best = f64::INFINITY;
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            best = best.min(distance(points[i], points[j]));
        }
    }
    best
}

#[test]
fn example_three_points() {
    let input = pts(&[(0.0, 0.0), (3.0, 4.0), (1.0, 1.0)]);
    let p = closest_pair(&input).unwrap();
    assert_eq!(p, Pair::new(Point::new(1.0, 1.0), Point::new(0.0, 0.0)));
    assert!((p.distance() - std::f64::consts::SQRT_2).abs() < 1e-15);
}

#[test]
fn example_duplicate_points() {
    let input = pts(&[(0.0, 0.0), (5.0, 5.0), (5.0, 5.0)]);
    let p = closest_pair(&input).unwrap();
    assert_eq!(p.p1(), Point::new(5.0, 5.0));
    assert_eq!(p.p2(), Point::new(5.0, 5.0));
    assert_eq!(p.distance(), 0.0);
}

#[test]
fn example_two_points() {
    let input = pts(&[(0.0, 0.0), (10.0, 10.0)]);
    let p = closest_pair(&input).unwrap();
    assert_eq!(p, Pair::new(input[0], input[1]));
    assert!((p.distance() - 10.0 * std::f64::consts::SQRT_2).abs() < 1e-12);
}

#[test]
fn example_collinear_four() {
    let input = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (100.0, 0.0)]);
    let p = closest_pair(&input).unwrap();
    assert_eq!(p.distance(), 1.0);
    assert!(!p.contains(&Point::new(100.0, 0.0)));
    // unsorted input gives the same answer
    let shuffled = pts(&[(100.0, 0.0), (2.0, 0.0), (0.0, 0.0), (1.0, 0.0)]);
    assert_eq!(closest_pair(&shuffled).unwrap().distance(), 1.0);
}

#[test]
fn fewer_than_two_points_is_invalid() {
    for solver in [Solver::BruteForce, Solver::DivideAndConquer] {
        let cfg = SolveCfg::default();
        assert_eq!(
            closest_pair_with(&[], solver, &cfg),
            Err(ClosestPairError::InvalidInput { len: 0 })
        );
        assert_eq!(
            closest_pair_with(&[Point::new(1.0, 2.0)], solver, &cfg),
            Err(ClosestPairError::InvalidInput { len: 1 })
        );
    }
    assert!(evaluate_result(&[]).is_err());
}

#[test]
fn divide_matches_brute_force_seeded() {
    init_tracing();
    for index in 0..40 {
        let n = 2 + (index as usize * 37) % 400;
        let points =
            draw_points_uniform(n, UniformCfg::default(), ReplayToken { seed: 2024, index })
                .unwrap();
        let report = evaluate(&points, &SolveCfg::default()).unwrap();
        assert!(report.agree(), "n={n}: {} vs {}", report.brute, report.divide);
    }
}

#[test]
fn divide_matches_brute_force_large() {
    let points =
        draw_points_uniform(3000, UniformCfg::default(), ReplayToken { seed: 9, index: 0 })
            .unwrap();
    assert!(evaluate_result(&points).unwrap());
}

#[test]
fn grid_points_with_ties_pick_the_same_pair() {
    for index in 0..200 {
        let points = draw_points_grid(60, 40, ReplayToken { seed: 5, index }).unwrap();
        let report = evaluate(&points, &SolveCfg::default()).unwrap();
        assert!(report.agree(), "index={index}: {} vs {}", report.brute, report.divide);
        let par = evaluate(&points, &SolveCfg::parallel(8)).unwrap();
        assert!(par.agree(), "index={index} parallel: {} vs {}", par.brute, par.divide);
    }
}

#[test]
fn lattice_ties_resolve_to_first_pair_in_input_order() {
    // 7x7 unit lattice in scrambled order: 84 pairs at distance 1
    let mut points: Vec<Point> = (0..49)
        .map(|k| Point::new(f64::from(k % 7), f64::from(k / 7)))
        .collect();
    let mut order: Vec<usize> = (0..points.len()).map(|k| (k * 19) % 49).collect();
    order.rotate_left(5);
    points = order.iter().map(|&k| points[k]).collect();

    let bf = brute_force(&points).unwrap();
    assert_eq!(bf.distance(), 1.0);
    for cfg in [SolveCfg::default(), SolveCfg::parallel(4)] {
        let dc = closest_pair_with(&points, Solver::DivideAndConquer, &cfg).unwrap();
        assert_eq!(dc.p1(), bf.p1());
        assert_eq!(dc.p2(), bf.p2());
    }
}

#[test]
fn nan_point_does_not_split_the_solvers() {
    let input = pts(&[(f64::NAN, 0.0), (0.0, 0.0), (1.0, 0.0), (5.0, 0.0), (5.1, 0.0)]);
    let report = evaluate(&input, &SolveCfg::default()).unwrap();
    assert!(report.agree(), "{} vs {}", report.brute, report.divide);
    assert_eq!(report.divide, Pair::new(input[3], input[4]));
}

#[test]
fn strip_threshold_does_not_change_result() {
    let points =
        draw_points_uniform(500, UniformCfg::default(), ReplayToken { seed: 11, index: 3 })
            .unwrap();
    let expected = brute_force(&points).unwrap();
    for strip_brute_force_max in [0, 2, 6, 20, 1000] {
        let cfg = SolveCfg {
            strip_brute_force_max,
            ..SolveCfg::default()
        };
        let got = closest_pair_with(&points, Solver::DivideAndConquer, &cfg).unwrap();
        assert_eq!(got, expected, "strip_brute_force_max={strip_brute_force_max}");
    }
}

#[test]
fn parallel_matches_sequential() {
    let points =
        draw_points_uniform(5000, UniformCfg::default(), ReplayToken { seed: 77, index: 1 })
            .unwrap();
    let seq = closest_pair(&points).unwrap();
    let par = closest_pair_with(&points, Solver::DivideAndConquer, &SolveCfg::parallel(64)).unwrap();
    assert_eq!(seq, par);
    assert_eq!(seq.p1(), par.p1());
    assert_eq!(seq.p2(), par.p2());
}

#[test]
fn repeated_runs_are_identical() {
    let points =
        draw_points_uniform(300, UniformCfg::default(), ReplayToken { seed: 1, index: 1 })
            .unwrap();
    let a = closest_pair(&points).unwrap();
    let b = closest_pair(&points).unwrap();
    assert_eq!(a.p1(), b.p1());
    assert_eq!(a.p2(), b.p2());
    assert_eq!(a.distance().to_bits(), b.distance().to_bits());
}

#[test]
fn many_coincident_points() {
    let mut points = vec![Point::new(0.25, 0.75); 100];
    points.extend(pts(&[(0.0, 0.0), (1.0, 1.0), (0.5, 0.1)]));
    let p = closest_pair(&points).unwrap();
    assert_eq!(p.distance(), 0.0);
    assert_eq!(p.p1(), Point::new(0.25, 0.75));
}

#[test]
fn vertical_line_of_points() {
    // every point lies on the first splitting line
    let points: Vec<Point> = (0..200)
        .map(|k| Point::new(3.0, f64::from(k) * 1.5 + if k == 120 { 0.25 } else { 0.0 }))
        .collect();
    let p = closest_pair(&points).unwrap();
    assert_eq!(p, brute_force(&points).unwrap());
    assert_eq!(p.distance(), 1.25);
}

#[test]
fn huge_coordinates_stay_finite() {
    let cfg = UniformCfg {
        min: Point::new(-1e300, -1e300),
        max: Point::new(1e300, 1e300),
    };
    let points = draw_points_uniform(400, cfg, ReplayToken { seed: 3, index: 0 }).unwrap();
    let report = evaluate(&points, &SolveCfg::default()).unwrap();
    assert!(report.divide.distance().is_finite());
    assert!(report.agree());
    let tiny = UniformCfg {
        min: Point::new(0.0, 0.0),
        max: Point::new(1e-300, 1e-300),
    };
    let points = draw_points_uniform(400, tiny, ReplayToken { seed: 3, index: 1 }).unwrap();
    let p = closest_pair(&points).unwrap();
    assert!(p.distance() > 0.0);
    assert_eq!(p, brute_force(&points).unwrap());
}

#[test]
fn non_finite_coordinates_do_not_panic() {
    init_tracing();
    let mut points =
        draw_points_uniform(64, UniformCfg::default(), ReplayToken { seed: 8, index: 0 })
            .unwrap();
    points[10] = Point::new(f64::NAN, 0.5);
    points[20] = Point::new(f64::INFINITY, 0.5);
    points[30] = Point::new(0.5, f64::NEG_INFINITY);
    let report = evaluate(&points, &SolveCfg::default()).unwrap();
    assert!(report.agree(), "{} vs {}", report.brute, report.divide);

    let all_nan = vec![Point::new(f64::NAN, f64::NAN); 16];
    assert!(closest_pair(&all_nan).unwrap().distance().is_nan());

    let strict = SolveCfg {
        reject_non_finite: true,
        ..SolveCfg::default()
    };
    assert_eq!(
        closest_pair_with(&points, Solver::DivideAndConquer, &strict),
        Err(ClosestPairError::NonFiniteCoordinate { index: 10 })
    );
}

#[test]
fn invalid_config_is_rejected() {
    let pts = pts(&[(0.0, 0.0), (1.0, 1.0)]);
    let err = closest_pair_with(&pts, Solver::DivideAndConquer, &SolveCfg::parallel(2));
    assert!(matches!(err, Err(ClosestPairError::InvalidConfig { .. })));
    assert!(SolveCfg::parallel(4).validate().is_ok());
}

#[test]
fn sort_by_axis_is_stable() {
    let input = pts(&[(1.0, 0.0), (0.0, 5.0), (1.0, -1.0), (0.0, 2.0)]);
    let by_x = sort_by_axis(&input, Axis::X);
    assert_eq!(by_x, pts(&[(0.0, 5.0), (0.0, 2.0), (1.0, 0.0), (1.0, -1.0)]));
    let by_y = sort_by_axis(&input, Axis::Y);
    assert_eq!(by_y, pts(&[(1.0, -1.0), (1.0, 0.0), (0.0, 2.0), (0.0, 5.0)]));
}

fn point_set(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1e3..1e3f64, -1e3..1e3f64), 2..max_len)
        .prop_map(|v| v.into_iter().map(Point::from).collect())
}

proptest! {
    #[test]
    fn divide_equals_brute_force(points in point_set(200)) {
        let report = evaluate(&points, &SolveCfg::default()).unwrap();
        prop_assert!(report.agree(), "{} vs {}", report.brute, report.divide);
    }

    #[test]
    fn no_pair_is_strictly_closer(points in point_set(120)) {
        let p = closest_pair(&points).unwrap();
        prop_assert_eq!(p.distance(), min_pairwise(&points));
    }

    #[test]
    fn distance_symmetric_and_zero_iff_equal(a in (-1e6..1e6f64, -1e6..1e6f64), b in (-1e6..1e6f64, -1e6..1e6f64)) {
        let (a, b) = (Point::from(a), Point::from(b));
        prop_assert_eq!(distance(a, b), distance(b, a));
        prop_assert_eq!(distance(a, b) == 0.0, a == b);
        prop_assert_eq!(distance(a, a), 0.0);
    }
}
