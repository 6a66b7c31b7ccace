use std::cmp::Ordering;

use super::types::{cross, Point, Polygon};

/// Graham's scan convex hull (returns hull in CCW order from the min-y, min-x point).
///
/// - Fewer than three points are returned as given (degenerate polygon).
/// - Collinear points on an edge are dropped (`<= 0` pop), so the result is reduced.
/// - All-collinear input collapses to its two extreme points (two copies of the
///   point if every input coincides).
pub fn build_hull(obstacles: &[Point]) -> Polygon {
    if obstacles.len() < 3 {
        return Polygon::new(obstacles.to_vec());
    }
    let Some(start) = obstacles
        .iter()
        .copied()
        .min_by(|a, b| {
            a.y.partial_cmp(&b.y)
                .unwrap_or(Ordering::Equal)
                .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
        })
    else {
        return Polygon::default();
    };

    // (angle, squared distance, point); `start` itself sorts first with (0, 0).
    let mut keyed: Vec<(f64, f64, Point)> = obstacles
        .iter()
        .map(|&p| {
            let d = p - start;
            (d.y.atan2(d.x), d.norm_squared(), p)
        })
        .collect();
    keyed.sort_by(|a, b| {
        match a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal) {
            Ordering::Equal => a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal),
            o => o,
        }
    });

    let mut stack: Vec<Point> = Vec::with_capacity(keyed.len());
    for (_, _, p) in keyed {
        while stack.len() >= 2 && cross(stack[stack.len() - 2], stack[stack.len() - 1], p) <= 0.0 {
            stack.pop();
        }
        stack.push(p);
    }
    Polygon::new(stack)
}
