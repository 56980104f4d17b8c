//! 2D line segment type.

use super::linear::Linear2;
use super::{Point2, Vec2};
use crate::error::SkeletonError;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// As a [`Linear2`] primitive its origin is `start`, its direction is
/// `end - start` and it accepts parameters in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment, rejecting coincident endpoints.
    pub fn try_new(start: Point2<F>, end: Point2<F>) -> Result<Self, SkeletonError> {
        if (end - start).is_zero() {
            return Err(SkeletonError::InvalidGeometry);
        }
        Ok(Self { start, end })
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the unit direction, or zero for a degenerate segment.
    #[inline]
    pub fn unit_direction(self) -> Vec2<F> {
        self.direction().unit_or_zero()
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Tolerant equality of both endpoints.
    #[inline]
    pub fn approx_eq(self, other: Self, rel_tol: F) -> bool {
        self.start.approx_eq(other.start, rel_tol) && self.end.approx_eq(other.end, rel_tol)
    }
}

impl<F: Float> Linear2<F> for Segment2<F> {
    #[inline]
    fn origin(&self) -> Point2<F> {
        self.start
    }

    #[inline]
    fn direction(&self) -> Vec2<F> {
        self.end - self.start
    }

    #[inline]
    fn accepts(&self, u: F) -> bool {
        u >= F::zero() && u <= F::one()
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_coincident_endpoints() {
        let p: Point2<f64> = Point2::new(2.0, 3.0);
        assert_eq!(Segment2::try_new(p, p), Err(SkeletonError::InvalidGeometry));
        assert!(Segment2::try_new(p, Point2::new(2.0, 4.0)).is_ok());
    }

    #[test]
    fn test_direction_and_length() {
        let s: Segment2<f64> = Segment2::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        assert_eq!(s.direction(), Vec2::new(3.0, 4.0));
        assert_eq!(s.length(), 5.0);
    }

    #[test]
    fn test_approx_eq() {
        let s: Segment2<f64> = Segment2::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        let drifted = Segment2::new(Point2::new(0.0, 0.0), Point2::new(4.0 + 1e-9, 0.0));
        assert!(s.approx_eq(drifted, 1e-3));
        let flipped = Segment2::new(s.end, s.start);
        assert!(!s.approx_eq(flipped, 1e-3));
    }
}
