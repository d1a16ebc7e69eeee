use tracing::debug;

use crate::topology::{DiagramEvent, KnotDiagram};

/// Flips crossings in place so over- and under-passes alternate.
#[derive(Debug, Default)]
pub struct MakeAlternating;

impl MakeAlternating {
    /// Creates a new `MakeAlternating` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation.
    ///
    /// Walks the crossing passes in trail order, forcing even passes over
    /// and odd passes under. Returns `false` without touching the diagram if
    /// it has no crossings or already alternates.
    pub fn execute(&self, diagram: &mut KnotDiagram) -> bool {
        if diagram.crossing_count() == 0 || diagram.is_alternating() {
            return false;
        }

        let mut over_next = true;
        for segment in 0..diagram.segments().len() {
            for id in diagram.crossings_involving(segment) {
                let Some(crossing) = diagram.crossing(id) else {
                    continue;
                };
                let misplaced = if over_next {
                    crossing.over() != segment
                } else {
                    crossing.under() != segment
                };
                if misplaced {
                    diagram.flip_silently(id);
                }
                over_next = !over_next;
            }
        }

        debug!(writhe = diagram.writhe(), "diagram made alternating");
        diagram.emit(DiagramEvent::ModelChanged);
        true
    }
}
