//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, degenerate polygons, anomalous containment geometry,
//! and exhausted rejection sampling.
use glam::DVec2;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("polygon needs at least 3 distinct vertices, got {distinct}")]
    DegeneratePolygon { distinct: usize },

    /// The crossing-number sum fell outside {-1, 0, 1}. Usually a
    /// self-intersecting polygon, or a query point coinciding with a vertex.
    /// Carries the vertices translated relative to the query point.
    #[error("anomalous crossing count {crossings}; polygon may self-intersect")]
    InvalidGeometry {
        crossings: i32,
        relative_vertices: Vec<DVec2>,
    },

    #[error("no interior point found after {attempts} rejection-sampling attempts")]
    SamplingExhausted { attempts: usize },
}
