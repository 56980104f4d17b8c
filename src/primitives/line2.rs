//! 2D infinite line type.

use super::linear::{intersect, Linear2};
use super::{Point2, Segment2, Vec2};
use crate::error::SkeletonError;
use num_traits::Float;

/// A 2D infinite line defined by a point and direction.
///
/// The line extends infinitely in both directions through the origin point.
///
/// # Example
///
/// ```
/// use roofline::primitives::{Line2, Point2, Vec2};
///
/// // Horizontal line through y=1
/// let line: Line2<f64> = Line2::new(Point2::new(0.0, 1.0), Vec2::new(1.0, 0.0));
/// assert_eq!(line.distance(Point2::new(5.0, 3.0)), 2.0);
/// assert_eq!(line.project(Point2::new(5.0, 3.0)), Point2::new(5.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<F> {
    /// A point on the line
    pub origin: Point2<F>,
    /// Direction vector of the line (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Line2<F> {
    /// Creates a new line from a point and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a line, rejecting a zero-length direction.
    pub fn try_new(origin: Point2<F>, direction: Vec2<F>) -> Result<Self, SkeletonError> {
        if direction.is_zero() {
            return Err(SkeletonError::InvalidGeometry);
        }
        Ok(Self { origin, direction })
    }

    /// Creates a line through two points, rejecting coincident points.
    pub fn try_from_points(p1: Point2<F>, p2: Point2<F>) -> Result<Self, SkeletonError> {
        Self::try_new(p1, p2 - p1)
    }

    /// Creates a line from a segment (extending it infinitely).
    #[inline]
    pub fn from_segment(segment: &Segment2<F>) -> Self {
        Self {
            origin: segment.start,
            direction: segment.direction(),
        }
    }

    /// Returns the point on the line at parameter t.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Projects a point onto the line and returns the closest point.
    ///
    /// A degenerate line projects everything onto its origin.
    pub fn project(&self, point: Point2<F>) -> Point2<F> {
        let len_sq = self.direction.magnitude_squared();
        if len_sq < F::epsilon() {
            return self.origin;
        }

        let t = (point - self.origin).dot(self.direction) / len_sq;
        self.point_at(t)
    }

    /// Returns the perpendicular distance from a point to the line.
    #[inline]
    pub fn distance(&self, point: Point2<F>) -> F {
        self.project(point).distance(point)
    }

    /// Intersects this line with any other linear primitive.
    #[inline]
    pub fn intersect<L: Linear2<F>>(&self, other: &L) -> Option<Point2<F>> {
        intersect(self, other)
    }
}

impl<F: Float> Linear2<F> for Line2<F> {
    #[inline]
    fn origin(&self) -> Point2<F> {
        self.origin
    }

    #[inline]
    fn direction(&self) -> Vec2<F> {
        self.direction
    }

    #[inline]
    fn accepts(&self, _u: F) -> bool {
        true
    }
}

impl<F: Float> From<Segment2<F>> for Line2<F> {
    fn from(segment: Segment2<F>) -> Self {
        Self::from_segment(&segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_try_new_rejects_zero_direction() {
        let p: Point2<f64> = Point2::new(1.0, 1.0);
        assert_eq!(
            Line2::try_new(p, Vec2::zero()),
            Err(SkeletonError::InvalidGeometry)
        );
        assert!(Line2::try_new(p, Vec2::new(0.0, 2.0)).is_ok());
        assert_eq!(
            Line2::try_from_points(p, p),
            Err(SkeletonError::InvalidGeometry)
        );
    }

    #[test]
    fn test_project_onto_diagonal() {
        let line: Line2<f64> =
            Line2::try_from_points(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0)).unwrap();
        let q = line.project(Point2::new(2.0, 0.0));
        assert_relative_eq!(q.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(q.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            line.distance(Point2::new(2.0, 0.0)),
            2.0_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_distance_ignores_segment_extent() {
        // a segment's supporting line is unbounded
        let seg: Segment2<f64> = Segment2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let line = Line2::from(seg);
        assert_relative_eq!(line.distance(Point2::new(10.0, 3.0)), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_line_accepts_negative_parameters() {
        let line: Line2<f64> = Line2::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let vertical = Line2::new(Point2::new(-5.0, 4.0), Vec2::new(0.0, 1.0));
        assert_eq!(line.intersect(&vertical), Some(Point2::new(-5.0, 0.0)));
    }
}
