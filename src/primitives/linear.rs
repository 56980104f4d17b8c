//! Shared parametric form of lines, rays and segments.

use super::{Point2, Vec2};
use num_traits::Float;

/// A linear primitive written as `p + u * v` over a restricted domain of `u`.
///
/// [`Line2`](super::Line2) accepts every `u`, [`Ray2`](super::Ray2) accepts
/// `u >= 0` and [`Segment2`](super::Segment2) accepts `u` in `[0, 1]`.
pub trait Linear2<F: Float> {
    /// Point at `u = 0`.
    fn origin(&self) -> Point2<F>;

    /// Direction vector (not necessarily normalized).
    fn direction(&self) -> Vec2<F>;

    /// Returns `true` if parameter `u` lies inside this primitive.
    fn accepts(&self, u: F) -> bool;
}

/// Intersects two linear primitives, honoring both parameter domains.
///
/// Returns `None` when the directions are parallel, including the coincident
/// case, or when the crossing falls outside either primitive.
///
/// # Example
///
/// ```
/// use roofline::primitives::{intersect, Line2, Ray2, Point2, Vec2};
///
/// let line: Line2<f64> = Line2::new(Point2::new(0.0, 1.0), Vec2::new(1.0, 0.0));
/// let up = Ray2::new(Point2::new(2.0, 0.0), Vec2::new(0.0, 1.0));
/// let down = Ray2::new(Point2::new(2.0, 0.0), Vec2::new(0.0, -1.0));
///
/// assert_eq!(intersect(&line, &up), Some(Point2::new(2.0, 1.0)));
/// assert_eq!(intersect(&line, &down), None);
/// ```
pub fn intersect<F, A, B>(a: &A, b: &B) -> Option<Point2<F>>
where
    F: Float,
    A: Linear2<F> + ?Sized,
    B: Linear2<F> + ?Sized,
{
    let (ap, av) = (a.origin(), a.direction());
    let (bp, bv) = (b.origin(), b.direction());

    let d = bv.y * av.x - bv.x * av.y;
    if d.abs() < F::epsilon() {
        return None;
    }

    let dy = ap.y - bp.y;
    let dx = ap.x - bp.x;

    let ua = (bv.x * dy - bv.y * dx) / d;
    if !a.accepts(ua) {
        return None;
    }
    let ub = (av.x * dy - av.y * dx) / d;
    if !b.accepts(ub) {
        return None;
    }

    Some(ap + av * ua)
}
