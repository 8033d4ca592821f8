//! Immutable simple-polygon geometry.
use glam::DVec2;

use crate::error::{Error, Result};
use crate::habitat::Aabb;

/// A simple (non-self-intersecting) polygon with vertices in meters.
///
/// Vertices may be listed clockwise or counter-clockwise; the edge from the
/// last vertex back to the first is implicit. Concave shapes are fine.
/// Self-intersection is a caller-maintained invariant: it is not verified at
/// construction, but [`Polygon::contains`] surfaces it as
/// [`Error::InvalidGeometry`] when the crossing count betrays it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    verts: Vec<DVec2>,
}

impl Polygon {
    /// Create a polygon from an ordered vertex list, preserving caller order.
    /// No winding normalization is applied.
    ///
    /// Fails with [`Error::DegeneratePolygon`] unless the list holds at least
    /// three distinct vertices.
    pub fn new(verts: Vec<DVec2>) -> Result<Self> {
        let mut distinct = 0usize;
        for (i, v) in verts.iter().enumerate() {
            if !verts[..i].contains(v) {
                distinct += 1;
            }
        }
        if distinct < 3 {
            return Err(Error::DegeneratePolygon { distinct });
        }
        Ok(Self { verts })
    }

    /// The vertices in caller-given order.
    pub fn vertices(&self) -> &[DVec2] {
        &self.verts
    }

    /// A new polygon with every vertex multiplied by `factor`.
    ///
    /// Scaling by `s` multiplies the perimeter by `|s|` and the area by `s^2`,
    /// so the area-to-perimeter ratio grows linearly with scale. A zero factor
    /// collapses every vertex to the origin; keep factors nonzero.
    pub fn scaled(&self, factor: f64) -> Polygon {
        Polygon {
            verts: self.verts.iter().map(|v| *v * factor).collect(),
        }
    }

    /// Sum of edge lengths, traversing every edge exactly once.
    pub fn perimeter(&self) -> f64 {
        let mut perim = 0.0;
        for i in 0..self.verts.len() {
            let prev = self.verts[(i + self.verts.len() - 1) % self.verts.len()];
            perim += (self.verts[i] - prev).length();
        }
        perim
    }

    /// Absolute value of the signed shoelace sum.
    ///
    /// Orientation-independent and valid for any simple polygon, concave ones
    /// included.
    pub fn area(&self) -> f64 {
        let mut area = 0.0;
        for i in 0..self.verts.len() {
            let prev = self.verts[(i + self.verts.len() - 1) % self.verts.len()];
            let cur = self.verts[i];
            area += (cur.x * prev.y - cur.y * prev.x) / 2.0;
        }
        area.abs()
    }

    /// Axis-aligned bounding box of the vertices.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(&self.verts)
    }

    /// Crossing-number containment test against a rightward ray from `point`.
    ///
    /// Counts signed crossings over vertices translated relative to `point`:
    /// an edge rising through the ray counts +1, one falling through it -1.
    /// The half-open `< 0` / `>= 0` split keeps an edge pair meeting exactly
    /// at a vertex's y-coordinate from being counted twice.
    ///
    /// A crossing sum of 0 is outside and +/-1 inside. Any other sum is
    /// anomalous (self-intersecting polygon, or the query point sitting on a
    /// vertex) and is returned as [`Error::InvalidGeometry`] with the
    /// translated vertices, never silently coerced to a boolean.
    ///
    /// Query points exactly on an edge interior are classified by whichever
    /// side floating-point rounding puts them on.
    pub fn contains(&self, point: DVec2) -> Result<bool> {
        let n = self.verts.len();
        let mut crossings: i32 = 0;
        for i in 0..n {
            let a = self.verts[(i + n - 1) % n] - point;
            let b = self.verts[i] - point;
            if a.y < 0.0 && b.y >= 0.0 && a.x * b.y - b.x * a.y > 0.0 {
                crossings += 1;
            }
            if a.y >= 0.0 && b.y < 0.0 && b.x * a.y - a.x * b.y > 0.0 {
                crossings -= 1;
            }
        }

        match crossings {
            0 => Ok(false),
            1 | -1 => Ok(true),
            _ => Err(Error::InvalidGeometry {
                crossings,
                relative_vertices: self.verts.iter().map(|v| *v - point).collect(),
            }),
        }
    }
}
