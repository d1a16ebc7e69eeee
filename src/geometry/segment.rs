use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{line_line_point_2d, segments_cross_2d};
use crate::math::{distance, Point2, Vector2};

/// A directed straight segment from `orig` to `dest`.
///
/// Direction is significant: two segments are equal only when both
/// endpoints match in the same order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub orig: Point2,
    pub dest: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(orig: Point2, dest: Point2) -> Self {
        Self { orig, dest }
    }

    /// Returns `dest - orig`.
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.dest - self.orig
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(&self.orig, &self.dest)
    }

    /// Returns the unit vector pointing from `orig` to `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if both endpoints coincide.
    pub fn direction(&self) -> Result<Vector2> {
        let len = self.length();
        if len == 0.0 {
            return Err(GeometryError::ZeroLengthSegment.into());
        }
        Ok(self.delta() / len)
    }

    /// Returns the same segment traversed the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.dest, self.orig)
    }

    /// Proper crossing test against `other`.
    #[must_use]
    pub fn intersects(&self, other: &Segment) -> bool {
        segments_cross_2d(&self.orig, &self.dest, &other.orig, &other.dest)
    }

    /// Returns the point where this segment crosses `other`, if it does.
    ///
    /// # Errors
    ///
    /// Returns an error if the segments pass the crossing test but are
    /// parallel, which exact orientation tests rule out for valid input.
    pub fn intersection(&self, other: &Segment) -> Result<Option<Point2>> {
        if !self.intersects(other) {
            return Ok(None);
        }
        line_line_point_2d(&self.orig, &self.dest, &other.orig, &other.dest).map(Some)
    }

    /// Returns whether `self` ends where `next` begins.
    #[must_use]
    pub fn leads_into(&self, next: &Segment) -> bool {
        self.dest == next.orig
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[({:.2},{:.2}) - ({:.2},{:.2})]",
            self.orig.x, self.orig.y, self.dest.x, self.dest.y
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn equality_is_directional() {
        let s = seg(0.0, 0.0, 1.0, 1.0);
        assert_eq!(s, seg(0.0, 0.0, 1.0, 1.0));
        assert_ne!(s, s.reversed());
        assert_eq!(s, s.reversed().reversed());
    }

    #[test]
    fn unit_direction() {
        let d = seg(1.0, 1.0, 4.0, 5.0).direction().unwrap();
        assert_relative_eq!(d.x, 0.6);
        assert_relative_eq!(d.y, 0.8);
    }

    #[test]
    fn zero_length_has_no_direction() {
        assert!(seg(2.0, 2.0, 2.0, 2.0).direction().is_err());
    }

    #[test]
    fn crossing_is_symmetric() {
        let a = seg(0.0, 0.0, 4.0, 4.0);
        let b = seg(0.0, 4.0, 4.0, 0.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        let pt = a.intersection(&b).unwrap().unwrap();
        assert_relative_eq!(pt.x, 2.0);
        assert_relative_eq!(pt.y, 2.0);
    }

    #[test]
    fn no_intersection_point_when_apart() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(5.0, -1.0, 5.0, 1.0);
        assert!(a.intersection(&b).unwrap().is_none());
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(seg(0.0, 1.5, 2.0, 3.25).to_string(), "[(0.00,1.50) - (2.00,3.25)]");
    }
}
