use tracing::debug;

use crate::error::Result;
use crate::topology::{CrossingId, KnotDiagram};

/// Builds the mirror image of a diagram: same curve, every crossing's
/// over/under swapped.
#[derive(Debug, Default)]
pub struct MirrorImage;

impl MirrorImage {
    /// Creates a new `MirrorImage` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation, returning a new diagram.
    ///
    /// The curve is redrawn from the same vertices. Each new crossing whose
    /// roles agree with the matching crossing of `diagram` is then flipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a crossing cannot be solved.
    pub fn execute(&self, diagram: &KnotDiagram) -> Result<KnotDiagram> {
        let mut mirrored = KnotDiagram::from_points_with_options(
            diagram.vertices().iter().copied(),
            diagram.options(),
        )?;

        let flips: Vec<CrossingId> = mirrored
            .crossings()
            .filter(|(_, c)| {
                diagram
                    .crossing_of(c.under(), c.over())
                    .and_then(|id| diagram.crossing(id))
                    .is_some_and(|original| original.under() == c.under())
            })
            .map(|(id, _)| id)
            .collect();

        debug!(crossings = mirrored.crossing_count(), flipped = flips.len(), "mirror image");
        for id in flips {
            mirrored.flip_silently(id);
        }
        Ok(mirrored)
    }
}
