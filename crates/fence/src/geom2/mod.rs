//! 2D geometry for fences: vertex-list polygons, Graham hulls, point classification.
//!
//! Purpose
//! - Build the convex hull of an unordered point set as a CCW vertex list.
//! - Classify a query point as inside, on the boundary of, or outside a simple
//!   polygon (boundary pass first, then even-odd ray casting).
//!
//! Numerics
//! - Hull construction is exact in its comparisons (no tolerance); hull vertices
//!   are always copies of input points.
//! - Classification is eps-aware; see `GeomCfg`.
//!
//! Code cross-refs: `Polygon`, `build_hull`, `classify_eps`, `classify_convex`

mod classify;
mod hull;
mod types;

pub use classify::{classify, classify_convex, classify_eps};
pub use hull::build_hull;
pub use types::{cross, Classification, GeomCfg, Point, PointSet, Polygon, Role, TaggedPoint};

#[cfg(test)]
mod tests;
