//! Mutable point list with a cached analysis.

use crate::geom2::{GeomCfg, Point, PointSet, Role, TaggedPoint};

use super::{analyze_with_cfg, Analysis};

/// First field of the summary row prepended to exported point tables.
pub const SUMMARY_LABEL: &str = "Sentries viewing outside";

/// Editable point set plus the last analysis computed from it.
///
/// Invariants:
/// - `cache` is either `None` or the analysis of the current `points`.
/// - Every mutation clears `cache`; nothing is patched incrementally.
#[derive(Clone, Debug, Default)]
pub struct Session {
    points: PointSet,
    cfg: GeomCfg,
    cache: Option<Analysis>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: GeomCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    pub fn from_points(points: PointSet, cfg: GeomCfg) -> Self {
        Self {
            points,
            cfg,
            cache: None,
        }
    }

    #[inline]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    pub fn obstacle_count(&self) -> usize {
        self.points
            .iter()
            .filter(|p| p.role() == Role::Obstacle)
            .count()
    }

    /// Append a point; returns its index.
    pub fn push(&mut self, role: Role, point: Point) -> usize {
        self.points.push(TaggedPoint::new(role, point));
        self.cache = None;
        self.points.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<TaggedPoint> {
        if index >= self.points.len() {
            return None;
        }
        self.cache = None;
        Some(self.points.remove(index))
    }

    /// Move the entry at `index` to `point`, keeping its role. False if out of range.
    pub fn replace(&mut self, index: usize, point: Point) -> bool {
        let Some(slot) = self.points.get_mut(index) else {
            return false;
        };
        *slot = TaggedPoint::new(slot.role(), point);
        self.cache = None;
        true
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.cache = None;
    }

    /// Last analysis, if still valid.
    #[inline]
    pub fn cached(&self) -> Option<&Analysis> {
        self.cache.as_ref()
    }

    /// Current analysis; recomputed only after a mutation.
    pub fn analysis(&mut self) -> &Analysis {
        let points = &self.points;
        let cfg = self.cfg;
        self.cache.get_or_insert_with(|| analyze_with_cfg(points, cfg))
    }

    /// `"Sentries viewing outside,<k>/<n>"` for a cached, non-degenerate fence.
    pub fn summary_line(&self) -> Option<String> {
        let a = self.cache.as_ref()?;
        if a.report.fence_vertex_count < 3 {
            return None;
        }
        Some(format!("{SUMMARY_LABEL},{}", a.report))
    }
}
