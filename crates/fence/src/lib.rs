//! Fence geometry engine: convex hulls of obstacle points and sentry classification.
//!
//! Pipeline
//! - tagged points → {obstacles, sentries} → hull polygon → per-sentry
//!   classification → aggregate report.
//! - Every call recomputes from scratch; callers that keep a mutable point list
//!   use `analyze::Session`, which drops its cached result on each edit.
//!
//! API Policy
//! - The engine is pure and total: no I/O, no logging, no error type. Degenerate
//!   inputs yield degenerate-but-valid values.

pub mod analyze;
pub mod api;
pub mod geom2;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analyze::{
        analyze, analyze_with_cfg, partition, Analysis, Session, VisibilityReport,
    };
    pub use crate::geom2::{
        build_hull, classify, classify_convex, classify_eps, cross, Classification, GeomCfg,
        Point, PointSet, Polygon, Role, TaggedPoint,
    };
    pub use crate::rand::{draw_point_set, Bounds2, RandomPointsCfg, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
