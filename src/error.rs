use thiserror::Error;

use crate::topology::CrossingId;

/// Top-level error type for the knot diagram kernel.
#[derive(Debug, Error)]
pub enum KnotError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Diagram(#[from] DiagramError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("segments are parallel, no unique intersection point")]
    ParallelSegments,

    #[error("zero-length segment has no direction")]
    ZeroLengthSegment,
}

/// Errors related to the diagram and its derived structures.
#[derive(Debug, Error, PartialEq)]
pub enum DiagramError {
    #[error("crossing {crossing} is not incident to exactly three strands")]
    InconsistentArcs { crossing: usize },

    #[error("diagram has {arcs} arcs, exhaustive coloring is limited to {max}")]
    TooManyArcs { arcs: usize, max: usize },

    #[error("crossing not found: {0:?}")]
    CrossingNotFound(CrossingId),
}

/// Errors related to diagram options.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidRadius { name: &'static str, value: f64 },
}

/// Convenience type alias for results using [`KnotError`].
pub type Result<T> = std::result::Result<T, KnotError>;
