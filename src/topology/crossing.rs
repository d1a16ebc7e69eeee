use std::fmt;

use crate::error::Result;
use crate::geometry::Segment;
use crate::math::{cross_2d, Point2};

slotmap::new_key_type! {
    /// Unique identifier for a crossing in a diagram.
    pub struct CrossingId;
}

/// A point where two segments of the diagram cross.
///
/// Segments are referenced by their index in the owning diagram's segment
/// list. Equality compares the `(under, over)` pair only.
#[derive(Debug, Clone, Copy)]
pub struct Crossing {
    under: usize,
    over: usize,
    point: Point2,
    sign: i32,
}

impl Crossing {
    /// Creates the crossing where segment `over` passes above segment `under`.
    ///
    /// Returns `Ok(None)` if the two segments do not cross.
    ///
    /// # Errors
    ///
    /// Returns an error if the intersection solver meets a parallel pair.
    pub fn new(
        under: (usize, &Segment),
        over: (usize, &Segment),
    ) -> Result<Option<Self>> {
        let Some(point) = under.1.intersection(over.1)? else {
            return Ok(None);
        };
        Ok(Some(Self {
            under: under.0,
            over: over.0,
            point,
            sign: handedness(under.1, over.1),
        }))
    }

    /// Index of the segment passing below.
    #[must_use]
    pub fn under(&self) -> usize {
        self.under
    }

    /// Index of the segment passing above.
    #[must_use]
    pub fn over(&self) -> usize {
        self.over
    }

    /// The crossing point.
    #[must_use]
    pub fn point(&self) -> &Point2 {
        &self.point
    }

    /// Crossing sign: `+1`, `-1`, or `0` for a degenerate pair.
    #[must_use]
    pub fn sign(&self) -> i32 {
        self.sign
    }

    /// Swaps the over and under roles in place.
    ///
    /// The crossing point is unchanged; the sign flips with the roles.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.under, &mut self.over);
        self.sign = -self.sign;
    }

    /// Returns whether `segment` takes part in this crossing in either role.
    #[must_use]
    pub fn involves(&self, segment: usize) -> bool {
        self.under == segment || self.over == segment
    }

    /// Returns whether the crossing joins segments `a` and `b`, in any role.
    #[must_use]
    pub fn joins(&self, a: usize, b: usize) -> bool {
        (self.under == a && self.over == b) || (self.under == b && self.over == a)
    }
}

impl PartialEq for Crossing {
    fn eq(&self, other: &Self) -> bool {
        self.under == other.under && self.over == other.over
    }
}

impl Eq for Crossing {}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sign == 1 { '+' } else { '-' };
        write!(f, "{{{sign}({:.2},{:.2})}}", self.point.x, self.point.y)
    }
}

// Orientation of the over strand relative to the under strand.
fn handedness(under: &Segment, over: &Segment) -> i32 {
    let d = cross_2d(&under.delta(), &over.delta());
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}
