//! Basic 2D types and tolerances.
//!
//! - `GeomCfg`: centralizes the classification epsilon.
//! - `Role`, `TaggedPoint`, `PointSet`: the engine's input.
//! - `Polygon`: closed vertex loop; `Classification`: point-vs-polygon result.

use std::fmt;

use nalgebra::Vector2;

/// A point in the plane. Equality is exact.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Collinearity and bounding-box slack used by classification.
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: 1e-9 }
    }
}

/// Role of a captured point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Obstacle,
    Sentry,
}

impl Role {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Obstacle => "obstacle",
            Role::Sentry => "sentry",
        }
    }

    /// Parse a table role field (trimmed, case-insensitive).
    pub fn parse(s: &str) -> Option<Role> {
        match s.trim().to_ascii_lowercase().as_str() {
            "obstacle" => Some(Role::Obstacle),
            "sentry" => Some(Role::Sentry),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point with an immutable role. Changing the role means replacing the entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaggedPoint {
    role: Role,
    point: Point,
}

impl TaggedPoint {
    #[inline]
    pub fn new(role: Role, point: Point) -> Self {
        Self { role, point }
    }
    #[inline]
    pub fn obstacle(x: f64, y: f64) -> Self {
        Self::new(Role::Obstacle, Vector2::new(x, y))
    }
    #[inline]
    pub fn sentry(x: f64, y: f64) -> Self {
        Self::new(Role::Sentry, Vector2::new(x, y))
    }
    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }
    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }
}

/// Ordered input sequence; insertion order is kept for display.
pub type PointSet = Vec<TaggedPoint>;

/// Closed polygon as an ordered vertex loop (last vertex connects back to the first).
///
/// Invariants (for hulls from `build_hull` with ≥3 vertices):
/// - Strict CCW order, starting at the min-y (then min-x) vertex.
/// - Reduced form: every consecutive triple turns strictly left.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// Fewer than three vertices: a point, a segment, or nothing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Edges `(v_i, v_{i+1 mod n})`, including the closing edge.
    ///
    /// A single vertex yields one zero-length edge; an empty polygon yields none.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace area; positive for CCW order, zero for degenerate loops.
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .edges()
            .map(|(p, q)| p.x * q.y - q.x * p.y)
            .sum::<f64>()
    }
}

/// Position of a query point relative to a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Inside,
    Boundary,
    Outside,
}

impl Classification {
    /// Only a strictly interior point counts as contained.
    #[inline]
    pub fn is_contained(&self) -> bool {
        matches!(self, Classification::Inside)
    }
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Inside => "inside",
            Classification::Boundary => "boundary",
            Classification::Outside => "outside",
        }
    }
}

/// Scalar 2D cross product of `(a - o)` and `(b - o)`; positive for a left turn o→a→b.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}
