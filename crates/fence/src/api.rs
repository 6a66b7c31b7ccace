//! Curated surface for the surrounding application (UNSTABLE).
//!
//! Important
//! - Front ends (point capture, table import/export, rendering) should depend on
//!   these re-exports rather than on module paths, which may move.

// Engine entry points
pub use crate::analyze::{analyze, analyze_with_cfg, Analysis, Session, VisibilityReport};
// 2D primitives
pub use crate::geom2::{
    build_hull, classify, classify_eps, Classification, GeomCfg, Point, PointSet, Polygon, Role,
    TaggedPoint,
};
// Random point sets
pub use crate::rand::{draw_point_set, Bounds2, RandomPointsCfg, ReplayToken};

/// Human-readable "viewing outside" ratio, e.g. `"3/5"`.
///
/// Pre: `report` satisfies `sentries_outside <= total_sentries`.
pub fn viewing_ratio(report: &VisibilityReport) -> String {
    format!("{}/{}", report.sentries_outside, report.total_sentries)
}
