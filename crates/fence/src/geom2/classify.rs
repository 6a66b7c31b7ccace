//! Point-in-polygon classification.
//!
//! - `classify_eps`: boundary pass over every edge, then even-odd ray casting.
//!   Works for any simple polygon; authoritative for fences.
//! - `classify_convex`: single-pass edge-side test, valid only for CCW convex
//!   polygons. Kept for comparison; it has no ray-casting fallback.
//!
//! Degenerate polygons (fewer than three vertices) have no interior: a point on the
//! segment (or at the single vertex) is `Boundary`, anything else is `Outside`.

use super::types::{cross, Classification, GeomCfg, Point, Polygon};

/// `classify_eps` with the default tolerance.
#[inline]
pub fn classify(polygon: &Polygon, q: Point) -> Classification {
    classify_eps(polygon, q, GeomCfg::default().eps)
}

/// Classify `q` against a closed simple polygon.
///
/// Boundary detection takes precedence over containment.
pub fn classify_eps(polygon: &Polygon, q: Point, eps: f64) -> Classification {
    if polygon.is_empty() {
        return Classification::Outside;
    }
    if polygon.edges().any(|(a, b)| on_segment_eps(a, b, q, eps)) {
        return Classification::Boundary;
    }
    if polygon.is_degenerate() {
        return Classification::Outside;
    }
    if ray_crossings(polygon, q) % 2 == 1 {
        Classification::Inside
    } else {
        Classification::Outside
    }
}

/// Edge-side test for CCW convex polygons.
///
/// Any edge with `q` strictly to its right → `Outside`; the first edge with `q`
/// collinear and inside its padded bounding box → `Boundary`; otherwise `Inside`.
/// Returns `Outside` for degenerate polygons.
pub fn classify_convex(polygon: &Polygon, q: Point, eps: f64) -> Classification {
    if polygon.is_degenerate() {
        return Classification::Outside;
    }
    for (a, b) in polygon.edges() {
        let c = cross(a, b, q);
        if c < -eps {
            return Classification::Outside;
        }
        if c.abs() < eps && in_padded_box(a, b, q, eps) {
            return Classification::Boundary;
        }
    }
    Classification::Inside
}

#[inline]
fn on_segment_eps(a: Point, b: Point, q: Point, eps: f64) -> bool {
    cross(a, b, q).abs() < eps && in_padded_box(a, b, q, eps)
}

#[inline]
fn in_padded_box(a: Point, b: Point, q: Point, eps: f64) -> bool {
    a.x.min(b.x) - eps <= q.x
        && q.x <= a.x.max(b.x) + eps
        && a.y.min(b.y) - eps <= q.y
        && q.y <= a.y.max(b.y) + eps
}

/// Crossings of the rightward horizontal ray from `q` with polygon edges.
///
/// Horizontal edges never straddle `q.y`, so the interpolation never divides by zero.
fn ray_crossings(polygon: &Polygon, q: Point) -> usize {
    polygon
        .edges()
        .filter(|(a, b)| {
            if (a.y > q.y) == (b.y > q.y) {
                return false;
            }
            let x_cross = a.x + (q.y - a.y) * (b.x - a.x) / (b.y - a.y);
            q.x < x_cross
        })
        .count()
}
