//! Knot diagram kernel.
//!
//! A [`KnotDiagram`] is a closed polygonal curve drawn vertex by vertex in the
//! plane. The kernel tracks the crossings of the curve with itself and derives
//! the classical invariants of the diagram: Gauss and Dowker codes, writhe,
//! the alternating test, the Wirtinger presentation and Fox 3-colorability.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{KnotError, Result};
pub use geometry::Segment;
pub use math::Point2;
pub use topology::{
    Arc, Crossing, CrossingId, DiagramEvent, DiagramOptions, DiagramState, EventKind,
    KnotDiagram, Snapshot,
};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use crate::math::Point2;
    use crate::topology::KnotDiagram;

    /// Installs a test subscriber so `RUST_LOG` works under `cargo test`.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// Trefoil outline with three crossings, closed at `(0, -10)`.
    pub fn trefoil_points() -> Vec<Point2> {
        [
            (0.0, -10.0),
            (26.0, 15.0),
            (-9.0, 5.0),
            (0.0, -30.0),
            (9.0, 5.0),
            (-26.0, 15.0),
            (0.0, -10.0),
        ]
        .iter()
        .map(|&(x, y)| Point2::new(x, y))
        .collect()
    }

    /// Trefoil drawn with every new segment passing over: a diagram of the unknot.
    pub fn trefoil_all_over() -> KnotDiagram {
        KnotDiagram::from_points(trefoil_points()).unwrap()
    }

    /// Trefoil with over/under choices made while drawing so that it alternates.
    pub fn trefoil_alternating() -> KnotDiagram {
        let pass_over = [true, true, true, true, false, true, false];
        let mut diagram = KnotDiagram::new();
        for (point, over) in trefoil_points().into_iter().zip(pass_over) {
            diagram.append(point, over).unwrap();
        }
        diagram
    }

    /// Five-pointed star of radius 100, closed at its top vertex.
    pub fn pentagram_points() -> Vec<Point2> {
        [
            (0.0, 100.0),
            (-58.779, -80.902),
            (95.106, 30.902),
            (-95.106, 30.902),
            (58.779, -80.902),
            (0.0, 100.0),
        ]
        .iter()
        .map(|&(x, y)| Point2::new(x, y))
        .collect()
    }

    /// Closed square without self-intersections.
    pub fn square_points() -> Vec<Point2> {
        [
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]
        .iter()
        .map(|&(x, y)| Point2::new(x, y))
        .collect()
    }
}
