//! 3D point type used for roof vertices.

use super::Point2;
use num_traits::Float;

/// A 3D point with x, y, and z coordinates.
///
/// Roof geometry is a footprint lifted along z, so the type mostly converts
/// to and from [`Point2`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Point3<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Lifts a planar point to height `z`.
    #[inline]
    pub fn from_planar(p: Point2<F>, z: F) -> Self {
        Self { x: p.x, y: p.y, z }
    }

    /// Drops the z coordinate.
    #[inline]
    pub fn planar(self) -> Point2<F> {
        Point2::new(self.x, self.y)
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl<F: Float> Default for Point3<F> {
    fn default() -> Self {
        Self::new(F::zero(), F::zero(), F::zero())
    }
}
