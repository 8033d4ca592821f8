//! Habitat geometry: simple polygons in a planar metric coordinate system.
//!
//! This module defines [`Polygon`] and the axis-aligned [`Aabb`] used by the
//! estimator to bound rejection sampling.
use glam::DVec2;

pub mod polygon;

pub use polygon::Polygon;

/// Axis-aligned bounding box in world units (meters).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    /// Smallest box enclosing all of `points`.
    ///
    /// Returns a degenerate box at the origin for an empty slice; callers in
    /// this crate always pass at least three vertices.
    pub fn from_points(points: &[DVec2]) -> Self {
        let mut min = points.first().copied().unwrap_or(DVec2::ZERO);
        let mut max = min;
        for p in points.iter().skip(1) {
            min = min.min(*p);
            max = max.max(*p);
        }
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Closed-interval membership test.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
