pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default distance around the first vertex inside which new crossings are
/// dropped. Drawing front-ends close a loop by clicking near the start vertex,
/// and the closing segment would otherwise register a crossing there.
pub const CLOSURE_RADIUS: f64 = 3.0;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Z component of the cross product `a × b`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_3_4_5() {
        let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cross_is_antisymmetric() {
        let a = Vector2::new(2.0, 1.0);
        let b = Vector2::new(-1.0, 3.0);
        assert!((cross_2d(&a, &b) - 7.0).abs() < f64::EPSILON);
        assert!((cross_2d(&b, &a) + 7.0).abs() < f64::EPSILON);
    }
}
