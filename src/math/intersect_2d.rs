use super::Point2;
use crate::error::{GeometryError, Result};

/// Counter-clockwise orientation predicate.
///
/// True when `a`, `b`, `c` make a strict left turn. Collinear triples are
/// never counter-clockwise.
#[must_use]
pub fn ccw(a: &Point2, b: &Point2, c: &Point2) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Proper crossing test for the segments `a0 → a1` and `b0 → b1`.
///
/// Each segment must separate the endpoints of the other. The comparison is
/// exact: segments that only touch at an endpoint or overlap collinearly
/// generally do not count.
#[must_use]
pub fn segments_cross_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    ccw(a0, b0, b1) != ccw(a1, b0, b1) && ccw(a0, a1, b0) != ccw(a0, a1, b1)
}

/// Intersection point of the lines through `a0 → a1` and `b0 → b1`.
///
/// Solves the 2×2 system formed by the implicit equation of each line.
///
/// # Errors
///
/// Returns [`GeometryError::ParallelSegments`] if the lines are parallel or
/// either segment has zero length.
pub fn line_line_point_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Result<Point2> {
    let a = a1.y - a0.y;
    let b = a0.x - a1.x;
    let c = b1.y - b0.y;
    let d = b0.x - b1.x;

    let det = a * d - b * c;
    if det == 0.0 {
        return Err(GeometryError::ParallelSegments.into());
    }

    let e = a * a0.x + b * a0.y;
    let f = c * b0.x + d * b0.y;
    Ok(Point2::new((d * e - b * f) / det, (a * f - c * e) / det))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn ccw_left_turn() {
        assert!(ccw(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0)));
        assert!(!ccw(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, -1.0)));
    }

    #[test]
    fn ccw_collinear_is_false() {
        assert!(!ccw(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0)));
    }

    #[test]
    fn diagonals_cross() {
        assert!(segments_cross_2d(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            &p(0.0, 2.0),
            &p(2.0, 0.0)
        ));
    }

    #[test]
    fn disjoint_segments_do_not_cross() {
        assert!(!segments_cross_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(0.0, 1.0),
            &p(1.0, 1.0)
        ));
    }

    #[test]
    fn collinear_overlap_does_not_cross() {
        assert!(!segments_cross_2d(
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            &p(1.0, 0.0),
            &p(3.0, 0.0)
        ));
    }

    #[test]
    fn consecutive_segments_do_not_cross() {
        // Shared vertex at (1, 1).
        assert!(!segments_cross_2d(
            &p(0.0, 0.0),
            &p(1.0, 1.0),
            &p(1.0, 1.0),
            &p(2.0, 0.0)
        ));
    }

    #[test]
    fn intersection_of_diagonals() {
        let pt = line_line_point_2d(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0))
            .unwrap();
        assert_relative_eq!(pt.x, 1.0);
        assert_relative_eq!(pt.y, 1.0);
    }

    #[test]
    fn intersection_off_axis() {
        let pt = line_line_point_2d(&p(0.0, 0.0), &p(4.0, 0.0), &p(1.0, -1.0), &p(3.0, 3.0))
            .unwrap();
        assert_relative_eq!(pt.x, 1.5);
        assert_relative_eq!(pt.y, 0.0);
    }

    #[test]
    fn parallel_lines_are_rejected() {
        let err = line_line_point_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0));
        assert!(err.is_err());
    }

    #[test]
    fn degenerate_segment_is_rejected() {
        let err = line_line_point_2d(&p(1.0, 1.0), &p(1.0, 1.0), &p(0.0, 1.0), &p(2.0, 0.0));
        assert!(err.is_err());
    }
}
