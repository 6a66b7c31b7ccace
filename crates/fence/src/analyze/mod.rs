//! Visibility analysis: partition tagged points, build the fence, classify sentries.
//!
//! Purpose
//! - One pure, total entry point (`analyze_with_cfg`) that recomputes everything
//!   from the given point set. No state survives between calls.
//! - `Session` owns a mutable point list for interactive callers and caches the
//!   last result until the next edit.
//!
//! Degenerate fences
//! - 0–2 obstacles: no classifier call; every sentry is reported as outside and
//!   `fence_vertex_count` equals the obstacle count.
//! - ≥3 collinear obstacles: the hull is a segment (or a point). It has no
//!   interior, so sentries classify as `Boundary` or `Outside` and all count as
//!   outside; `fence_vertex_count` is the reduced hull size.

mod session;

use std::fmt;

pub use session::{Session, SUMMARY_LABEL};

use crate::geom2::{
    build_hull, classify_eps, Classification, GeomCfg, Point, Polygon, Role, TaggedPoint,
};

/// Aggregate counts for one analysis.
///
/// Invariant: `sentries_outside <= total_sentries`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityReport {
    pub fence_vertex_count: usize,
    pub sentries_outside: usize,
    pub total_sentries: usize,
}

impl fmt::Display for VisibilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.sentries_outside, self.total_sentries)
    }
}

/// Full result: fence polygon, report, and per-sentry classes (sentry insertion order).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Analysis {
    pub hull: Polygon,
    pub report: VisibilityReport,
    pub classes: Vec<Classification>,
}

/// Split by role, preserving insertion order within each group: `(obstacles, sentries)`.
pub fn partition(points: &[TaggedPoint]) -> (Vec<Point>, Vec<Point>) {
    let mut obstacles = Vec::new();
    let mut sentries = Vec::new();
    for tp in points {
        match tp.role() {
            Role::Obstacle => obstacles.push(tp.point()),
            Role::Sentry => sentries.push(tp.point()),
        }
    }
    (obstacles, sentries)
}

/// Hull polygon and report with the default tolerance.
pub fn analyze(points: &[TaggedPoint]) -> (Polygon, VisibilityReport) {
    let Analysis { hull, report, .. } = analyze_with_cfg(points, GeomCfg::default());
    (hull, report)
}

/// Recompute the fence and classify every sentry against it.
pub fn analyze_with_cfg(points: &[TaggedPoint], cfg: GeomCfg) -> Analysis {
    let (obstacles, sentries) = partition(points);

    let (hull, classes) = if obstacles.len() < 3 {
        (
            Polygon::new(obstacles),
            vec![Classification::Outside; sentries.len()],
        )
    } else {
        let hull = build_hull(&obstacles);
        let classes = sentries
            .iter()
            .map(|&s| classify_eps(&hull, s, cfg.eps))
            .collect();
        (hull, classes)
    };

    let sentries_outside = classes.iter().filter(|c| !c.is_contained()).count();
    debug_assert!(sentries_outside <= sentries.len());
    Analysis {
        report: VisibilityReport {
            fence_vertex_count: hull.len(),
            sentries_outside,
            total_sentries: sentries.len(),
        },
        hull,
        classes,
    }
}
