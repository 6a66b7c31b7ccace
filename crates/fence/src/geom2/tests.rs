use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

fn square4() -> Polygon {
    build_hull(&pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]))
}

#[test]
fn hull_square_ccw_from_min_y() {
    let hull = square4();
    assert_eq!(
        hull.vertices,
        pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    );
    assert!((hull.signed_area() - 16.0).abs() < 1e-12);
}

#[test]
fn hull_ignores_input_order_and_interior_points() {
    let hull = build_hull(&pts(&[
        (4.0, 4.0),
        (2.0, 2.0),
        (0.0, 4.0),
        (1.0, 3.0),
        (4.0, 0.0),
        (0.0, 0.0),
    ]));
    assert_eq!(
        hull.vertices,
        pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    );
}

#[test]
fn hull_drops_collinear_edge_points() {
    // Midpoints on every edge, including the first and the closing one.
    let hull = build_hull(&pts(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (4.0, 0.0),
        (4.0, 2.0),
        (4.0, 4.0),
        (2.0, 4.0),
        (0.0, 4.0),
        (0.0, 2.0),
    ]));
    assert_eq!(hull.len(), 4);
    assert_eq!(hull.vertices[0], vector![0.0, 0.0]);
}

#[test]
fn hull_start_tie_breaks_on_min_x() {
    let hull = build_hull(&pts(&[(3.0, 0.0), (1.0, 0.0), (2.0, 5.0)]));
    assert_eq!(hull.vertices[0], vector![1.0, 0.0]);
    assert_eq!(hull.len(), 3);
}

#[test]
fn hull_degenerate_counts_pass_through() {
    assert!(build_hull(&[]).is_empty());
    let one = pts(&[(3.0, 7.0)]);
    assert_eq!(build_hull(&one).vertices, one);
    let two = pts(&[(3.0, 7.0), (-1.0, 2.0)]);
    assert_eq!(build_hull(&two).vertices, two);
}

#[test]
fn hull_collinear_collapses_to_extremes() {
    let hull = build_hull(&pts(&[(2.0, 2.0), (1.0, 1.0), (3.0, 3.0)]));
    assert_eq!(hull.vertices, pts(&[(1.0, 1.0), (3.0, 3.0)]));
    assert!(hull.is_degenerate());
    assert_eq!(hull.signed_area(), 0.0);
}

#[test]
fn hull_all_coincident_points() {
    let hull = build_hull(&pts(&[(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)]));
    assert!(hull.is_degenerate());
    assert!(hull.vertices.iter().all(|v| *v == vector![5.0, 5.0]));
}

#[test]
fn classify_square_scenario() {
    let hull = square4();
    assert_eq!(classify(&hull, vector![2.0, 2.0]), Classification::Inside);
    assert_eq!(classify(&hull, vector![5.0, 5.0]), Classification::Outside);
    assert_eq!(classify(&hull, vector![0.0, 2.0]), Classification::Boundary);
    // Horizontal edge and corner.
    assert_eq!(classify(&hull, vector![2.0, 4.0]), Classification::Boundary);
    assert_eq!(classify(&hull, vector![4.0, 4.0]), Classification::Boundary);
    // On an edge's line but past its end.
    assert_eq!(classify(&hull, vector![6.0, 0.0]), Classification::Outside);
}

#[test]
fn classify_triangle_vertex_is_boundary() {
    let tri = build_hull(&pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]));
    assert_eq!(classify(&tri, vector![0.0, 0.0]), Classification::Boundary);
    assert_eq!(classify(&tri, vector![5.0, 10.0]), Classification::Boundary);
    assert_eq!(classify(&tri, vector![5.0, 3.0]), Classification::Inside);
    // Ray from here passes exactly through the apex's y-level.
    assert_eq!(classify(&tri, vector![-1.0, 10.0]), Classification::Outside);
}

#[test]
fn classify_concave_polygon_uses_parity() {
    // U shape, CCW.
    let u = Polygon::new(pts(&[
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 6.0),
        (4.0, 6.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 6.0),
        (0.0, 6.0),
    ]));
    assert_eq!(classify(&u, vector![1.0, 4.0]), Classification::Inside);
    assert_eq!(classify(&u, vector![3.0, 4.0]), Classification::Outside);
    assert_eq!(classify(&u, vector![5.0, 4.0]), Classification::Inside);
    assert_eq!(classify(&u, vector![3.0, 2.0]), Classification::Boundary);
    // Vertex orientation does not matter for the even-odd rule.
    let mut cw = u.clone();
    cw.vertices.reverse();
    assert_eq!(classify(&cw, vector![1.0, 4.0]), Classification::Inside);
    assert_eq!(classify(&cw, vector![3.0, 4.0]), Classification::Outside);
}

#[test]
fn classify_eps_absorbs_small_offsets() {
    let hull = square4();
    let q = vector![2.0, 1e-12];
    assert_eq!(classify_eps(&hull, q, 1e-9), Classification::Boundary);
    assert_eq!(classify_eps(&hull, q, 0.0), Classification::Inside);
    assert_eq!(
        classify_eps(&hull, vector![2.0, -1e-3], 1e-2),
        Classification::Boundary
    );
}

#[test]
fn classify_degenerate_polygons_have_no_interior() {
    let eps = GeomCfg::default().eps;
    assert_eq!(
        classify_eps(&Polygon::default(), vector![0.0, 0.0], eps),
        Classification::Outside
    );
    let dot = Polygon::new(pts(&[(1.0, 1.0)]));
    assert_eq!(classify_eps(&dot, vector![1.0, 1.0], eps), Classification::Boundary);
    assert_eq!(classify_eps(&dot, vector![1.0, 2.0], eps), Classification::Outside);
    let seg = build_hull(&pts(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]));
    assert_eq!(classify_eps(&seg, vector![2.5, 2.5], eps), Classification::Boundary);
    assert_eq!(classify_eps(&seg, vector![4.0, 4.0], eps), Classification::Outside);
    assert_eq!(classify_eps(&seg, vector![2.0, 1.0], eps), Classification::Outside);
}

#[test]
fn convex_variant_agrees_on_integer_grid() {
    let eps = GeomCfg::default().eps;
    let fences = [
        square4(),
        build_hull(&pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)])),
        build_hull(&pts(&[(1.0, -2.0), (6.0, 1.0), (3.0, 7.0), (-3.0, 4.0), (-2.0, 0.0)])),
    ];
    for fence in &fences {
        for x in -4..=12 {
            for y in -4..=12 {
                let q = Vector2::new(x as f64, y as f64);
                assert_eq!(
                    classify_eps(fence, q, eps),
                    classify_convex(fence, q, eps),
                    "divergence at {q:?} for {:?}",
                    fence.vertices
                );
            }
        }
    }
}

#[test]
fn convex_variant_rejects_degenerate() {
    let seg = Polygon::new(pts(&[(0.0, 0.0), (1.0, 0.0)]));
    assert_eq!(
        classify_convex(&seg, vector![0.5, 0.0], 1e-9),
        Classification::Outside
    );
}

#[test]
fn role_parse_and_display() {
    assert_eq!(Role::parse(" Obstacle "), Some(Role::Obstacle));
    assert_eq!(Role::parse("SENTRY"), Some(Role::Sentry));
    assert_eq!(Role::parse("tower"), None);
    assert_eq!(Role::Sentry.to_string(), "sentry");
    let t = TaggedPoint::obstacle(1.0, 2.0);
    assert_eq!(t.role(), Role::Obstacle);
    assert_eq!(t.point(), vector![1.0, 2.0]);
}

fn int_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-20i32..=20, -20i32..=20), 0..max_len).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Vector2::new(x as f64, y as f64))
            .collect()
    })
}

proptest! {
    #[test]
    fn hull_vertices_are_input_points(points in int_points(40)) {
        let hull = build_hull(&points);
        for v in &hull.vertices {
            prop_assert!(points.contains(v));
        }
    }

    #[test]
    fn hull_turns_strictly_left(points in int_points(40)) {
        let hull = build_hull(&points);
        let n = hull.len();
        if n >= 3 {
            for i in 0..n {
                let a = hull.vertices[i];
                let b = hull.vertices[(i + 1) % n];
                let c = hull.vertices[(i + 2) % n];
                prop_assert!(cross(a, b, c) > 0.0, "non-left turn at {}", i);
            }
        }
    }

    #[test]
    fn hull_starts_at_lowest_point(points in int_points(40)) {
        prop_assume!(points.len() >= 3);
        let hull = build_hull(&points);
        let first = hull.vertices[0];
        for p in &points {
            prop_assert!(first.y < p.y || (first.y == p.y && first.x <= p.x));
        }
    }

    #[test]
    fn obstacles_never_outside_own_hull(points in int_points(40)) {
        prop_assume!(points.len() >= 3);
        let hull = build_hull(&points);
        for p in &points {
            prop_assert_ne!(classify(&hull, *p), Classification::Outside);
        }
    }

    #[test]
    fn hull_is_deterministic(points in int_points(40)) {
        prop_assert_eq!(build_hull(&points), build_hull(&points));
    }
}
