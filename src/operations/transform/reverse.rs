use tracing::debug;

use crate::error::Result;
use crate::topology::{CrossingId, KnotDiagram};

/// Builds the same knot traversed in the opposite direction.
#[derive(Debug, Default)]
pub struct ReverseOrientation;

impl ReverseOrientation {
    /// Creates a new `ReverseOrientation` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation, returning a new diagram.
    ///
    /// The curve is redrawn from the vertices in reverse order, so new
    /// segment `j` is original segment `m - 1 - j` reversed. Crossings are
    /// then flipped so each keeps the original over-strand.
    ///
    /// # Errors
    ///
    /// Returns an error if a crossing cannot be solved.
    pub fn execute(&self, diagram: &KnotDiagram) -> Result<KnotDiagram> {
        let mut reversed = KnotDiagram::from_points_with_options(
            diagram.vertices().iter().rev().copied(),
            diagram.options(),
        )?;

        let last = diagram.segments().len().saturating_sub(1);
        let original_segment = |j: usize| last - j;

        let flips: Vec<CrossingId> = reversed
            .crossings()
            .filter(|(_, c)| {
                let under = original_segment(c.under());
                let over = original_segment(c.over());
                diagram
                    .crossing_of(under, over)
                    .and_then(|id| diagram.crossing(id))
                    .is_some_and(|original| original.over() != over)
            })
            .map(|(id, _)| id)
            .collect();

        debug!(crossings = reversed.crossing_count(), flipped = flips.len(), "orientation reversed");
        for id in flips {
            reversed.flip_silently(id);
        }
        Ok(reversed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::{pentagram_points, trefoil_alternating};

    #[test]
    fn vertices_are_reversed() {
        let trefoil = trefoil_alternating();
        let reversed = ReverseOrientation::new().execute(&trefoil).unwrap();
        let mut expected = trefoil.vertices().to_vec();
        expected.reverse();
        assert_eq!(reversed.vertices(), &expected[..]);
        assert_eq!(reversed.segments()[0], trefoil.segments()[5].reversed());
    }

    #[test]
    fn over_strands_are_kept() {
        let trefoil = trefoil_alternating();
        let reversed = trefoil.orientation_reversed().unwrap();
        for (_, c) in reversed.crossings() {
            let id = trefoil.crossing_of(5 - c.under(), 5 - c.over()).unwrap();
            assert_eq!(trefoil.crossing(id).unwrap().over(), 5 - c.over());
        }
    }

    #[test]
    fn writhe_is_preserved() {
        let trefoil = trefoil_alternating();
        let reversed = trefoil.orientation_reversed().unwrap();
        assert_eq!(reversed.writhe(), trefoil.writhe());
        assert!(reversed.is_alternating());
        assert_eq!(reversed.gauss_code(), vec![-1, 2, -3, 1, -2, 3]);
    }

    #[test]
    fn pentagram_reversal_keeps_invariants() {
        let mut star = KnotDiagram::from_points(pentagram_points()).unwrap();
        star.make_alternating();
        let reversed = star.orientation_reversed().unwrap();
        assert_eq!(reversed.crossing_count(), 5);
        assert_eq!(reversed.writhe(), star.writhe());
        assert_eq!(reversed.arcs().len(), 5);
    }
}
