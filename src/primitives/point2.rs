//! 2D point type.

use super::vec2::{approx_eq_scalar, Vec2};
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`). Subtracting two points
/// yields a [`Vec2`]; adding or subtracting a [`Vec2`] yields a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Tolerant equality used to absorb drift from repeated intersections.
    ///
    /// Each coordinate passes when `|a - b| <= max(|a|, |b|) * rel_tol`
    /// (or the difference is below machine epsilon).
    #[inline]
    pub fn approx_eq(self, other: Self, rel_tol: F) -> bool {
        approx_eq_scalar(self.x, other.x, rel_tol) && approx_eq_scalar(self.y, other.y, rel_tol)
    }

    /// Returns a copy with both coordinates multiplied by `factor`.
    #[inline]
    pub fn scaled(self, factor: F) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

// Point - Vec2 = Point
impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_vector_arithmetic() {
        let a: Point2<f64> = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);

        let v = b - a;
        assert_eq!(v, Vec2::new(3.0, 4.0));
        assert_eq!(a + v, b);
        assert_eq!(b - v, a);
    }

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_relative_eq!(a.distance(b), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_approx_eq_absorbs_drift() {
        let p: Point2<f64> = Point2::new(3.0, 1.0);
        assert!(p.approx_eq(Point2::new(3.0 + 1e-9, 1.0 - 1e-9), 1e-3));
        assert!(p.approx_eq(Point2::new(3.002, 1.0), 1e-3));
        assert!(!p.approx_eq(Point2::new(3.1, 1.0), 1e-3));
    }

    #[test]
    fn test_from_tuple_and_scale() {
        let p: Point2<f64> = (2.0, -1.0).into();
        assert_eq!(p.scaled(3.0), Point2::new(6.0, -3.0));
    }
}
