use tracing::trace;

use crate::error::Result;
use crate::math::{distance, Point2};
use crate::topology::KnotDiagram;

/// Appends a vertex the way an interactive drawing surface does.
///
/// A point within the snap radius of the first vertex is replaced by the
/// first vertex, which closes the loop. A point equal to the last vertex is
/// ignored, and nothing is appended once the diagram is closed.
pub struct DrawVertex {
    point: Point2,
    pass_over: bool,
}

impl DrawVertex {
    /// Creates a new `DrawVertex` operation.
    #[must_use]
    pub fn new(point: Point2, pass_over: bool) -> Self {
        Self { point, pass_over }
    }

    /// Executes the operation. Returns whether a vertex was appended.
    ///
    /// # Errors
    ///
    /// Returns an error if a crossing cannot be solved.
    pub fn execute(&self, diagram: &mut KnotDiagram) -> Result<bool> {
        if diagram.is_done() {
            return Ok(false);
        }

        let snap = diagram.options().snap_radius();
        let point = match diagram.vertices().first() {
            Some(first) if distance(first, &self.point) <= snap => *first,
            _ => self.point,
        };
        if diagram.vertices().last() == Some(&point) {
            trace!(x = point.x, y = point.y, "repeated vertex ignored");
            return Ok(false);
        }

        diagram.append(point, self.pass_over)?;
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::trefoil_points;
    use crate::topology::{DiagramOptions, DiagramState};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn first_vertex_is_taken_as_is() {
        let mut diagram = KnotDiagram::new();
        assert!(DrawVertex::new(p(1.0, 2.0), true).execute(&mut diagram).unwrap());
        assert_eq!(diagram.vertices(), &[p(1.0, 2.0)]);
    }

    #[test]
    fn repeated_vertex_is_ignored() {
        let mut diagram = KnotDiagram::new();
        diagram.draw_to(p(0.0, 0.0), true).unwrap();
        diagram.draw_to(p(50.0, 0.0), true).unwrap();
        assert!(!diagram.draw_to(p(50.0, 0.0), true).unwrap());
        assert_eq!(diagram.vertices().len(), 2);
    }

    #[test]
    fn near_start_snaps_closed() {
        let mut diagram = KnotDiagram::new();
        for point in [p(0.0, 0.0), p(50.0, 0.0), p(50.0, 50.0)] {
            diagram.draw_to(point, true).unwrap();
        }
        assert!(diagram.draw_to(p(1.0, 2.0), true).unwrap());
        assert_eq!(diagram.state(), DiagramState::Done);
        assert_eq!(diagram.vertices().last(), Some(&p(0.0, 0.0)));
    }

    #[test]
    fn closed_diagram_takes_no_more_vertices() {
        let mut diagram = KnotDiagram::new();
        for point in trefoil_points() {
            diagram.draw_to(point, true).unwrap();
        }
        assert!(diagram.is_done());
        assert!(!diagram.draw_to(p(100.0, 100.0), true).unwrap());
        assert_eq!(diagram.vertices().len(), 7);
    }

    #[test]
    fn snap_radius_is_configurable() {
        let options = DiagramOptions::default().with_snap_radius(0.0).unwrap();
        let mut diagram = KnotDiagram::with_options(options);
        for point in [p(0.0, 0.0), p(50.0, 0.0), p(50.0, 50.0), p(1.0, 2.0)] {
            diagram.draw_to(point, true).unwrap();
        }
        assert_eq!(diagram.state(), DiagramState::Drawing);
        assert_eq!(diagram.vertices().len(), 4);
    }
}
