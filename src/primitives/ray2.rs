//! 2D ray type.

use super::linear::{intersect, Linear2};
use super::{Point2, Vec2};
use crate::error::SkeletonError;
use num_traits::Float;

/// A 2D ray defined by an origin point and direction.
///
/// A ray extends infinitely from its origin in the direction specified.
/// The direction is stored as-is (not necessarily normalized). Vertex
/// bisectors of the skeleton are rays.
///
/// # Example
///
/// ```
/// use roofline::primitives::{Ray2, Point2, Vec2};
///
/// let a: Ray2<f64> = Ray2::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
/// let b = Ray2::new(Point2::new(4.0, 0.0), Vec2::new(-1.0, 1.0));
///
/// assert_eq!(a.intersect(&b), Some(Point2::new(2.0, 2.0)));
/// let away = Ray2::new(Point2::new(4.0, 0.0), Vec2::new(1.0, -1.0));
/// assert_eq!(a.intersect(&away), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<F> {
    /// Origin point of the ray
    pub origin: Point2<F>,
    /// Direction vector (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Ray2<F> {
    /// Creates a new ray from origin and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray, rejecting a zero-length direction.
    pub fn try_new(origin: Point2<F>, direction: Vec2<F>) -> Result<Self, SkeletonError> {
        if direction.is_zero() {
            return Err(SkeletonError::InvalidGeometry);
        }
        Ok(Self { origin, direction })
    }

    /// Returns the unit direction, or zero for a degenerate ray.
    #[inline]
    pub fn unit_direction(&self) -> Vec2<F> {
        self.direction.unit_or_zero()
    }

    /// Sign of the cross product between the unit direction and the unit
    /// vector towards `point`.
    ///
    /// Positive when `point` lies counter-clockwise (left) of the ray.
    #[inline]
    pub fn side(&self, point: Point2<F>) -> F {
        self.unit_direction()
            .cross((point - self.origin).unit_or_zero())
    }

    /// Intersects this ray with any other linear primitive.
    #[inline]
    pub fn intersect<L: Linear2<F>>(&self, other: &L) -> Option<Point2<F>> {
        intersect(self, other)
    }
}

impl<F: Float> Linear2<F> for Ray2<F> {
    #[inline]
    fn origin(&self) -> Point2<F> {
        self.origin
    }

    #[inline]
    fn direction(&self) -> Vec2<F> {
        self.direction
    }

    #[inline]
    fn accepts(&self, u: F) -> bool {
        u >= F::zero()
    }
}
