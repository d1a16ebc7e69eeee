use tracing::debug;

use crate::error::{DiagramError, Result};
use crate::topology::Snapshot;

/// Largest arc count the exhaustive coloring search accepts (3^16 colorings).
pub const MAX_COLORING_ARCS: usize = 16;

/// Every assignment of the colors 0, 1, 2 to `n` arcs, produced lazily.
///
/// Assignments come in lexicographic order with the last arc changing
/// fastest, starting from all zeros.
#[derive(Debug, Clone)]
pub struct Colorings {
    next: Option<Vec<u8>>,
}

impl Colorings {
    /// Creates the enumeration for `n` arcs.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            next: (n > 0).then(|| vec![0; n]),
        }
    }
}

impl Iterator for Colorings {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        let current = self.next.take()?;
        let mut following = current.clone();
        for digit in following.iter_mut().rev() {
            if *digit < 2 {
                *digit += 1;
                self.next = Some(following);
                break;
            }
            *digit = 0;
        }
        Some(current)
    }
}

/// Searches for a Fox 3-coloring of a closed diagram.
///
/// A valid coloring uses all three colors and, at every crossing, the colors
/// of the overstrand and both understrands sum to 0 mod 3.
pub struct Tricolor<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> Tricolor<'a> {
    /// Creates a new `Tricolor` query.
    #[must_use]
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Executes the search, returning the first valid coloring found.
    ///
    /// Open diagrams and diagrams without crossings yield `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the diagram has more than [`MAX_COLORING_ARCS`]
    /// arcs, or if some crossing is not incident to three strands.
    pub fn execute(&self) -> Result<Option<Vec<u8>>> {
        let crossings = self.snapshot.discovered().len();
        if !self.snapshot.is_closed() || crossings == 0 {
            return Ok(None);
        }

        let arcs = self.snapshot.arcs().len();
        if arcs > MAX_COLORING_ARCS {
            return Err(DiagramError::TooManyArcs {
                arcs,
                max: MAX_COLORING_ARCS,
            }
            .into());
        }

        let strands = self.snapshot.crossing_arcs();
        if strands.len() != crossings {
            let crossing = (1..=crossings)
                .find(|&index| strands.iter().all(|s| s.index != index))
                .unwrap_or(crossings);
            return Err(DiagramError::InconsistentArcs { crossing }.into());
        }

        let found = Colorings::new(arcs).find(|coloring| {
            uses_all_colors(coloring)
                && strands.iter().all(|s| {
                    let sum = coloring[s.overstrand] + coloring[s.incoming] + coloring[s.leaving];
                    sum % 3 == 0
                })
        });
        debug!(arcs, crossings, colorable = found.is_some(), "coloring search");
        Ok(found)
    }
}

fn uses_all_colors(coloring: &[u8]) -> bool {
    (0..3).all(|color| coloring.contains(&color))
}
