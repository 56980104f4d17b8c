//! Contour normalization ahead of skeleton construction.
//!
//! The skeleton engine needs every vertex to turn: a vertex whose incoming and
//! outgoing edges point the same way has no bisector, and a repeated vertex has
//! no edge at all. [`normalize_contour`] removes both in a single pass.
//!
//! # Example
//!
//! ```
//! use roofline::polygon::normalize_contour;
//! use roofline::Point2;
//!
//! let contour = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0), // collinear, dropped
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 2.0),
//!     Point2::new(4.0, 2.0), // duplicate, dropped
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let normalized = normalize_contour(&contour, 1e-3);
//! assert_eq!(normalized.len(), 4);
//! ```

use crate::primitives::Point2;
use num_traits::Float;

/// Iterates `(prev, current, next)` triples around a closed ring.
pub(crate) fn ring_windows<T>(ring: &[T]) -> impl Iterator<Item = (&T, &T, &T)> {
    let n = ring.len();
    (0..n).map(move |i| (&ring[(i + n - 1) % n], &ring[i], &ring[(i + 1) % n]))
}

/// Removes repeated vertices and vertices whose incident edges are parallel.
///
/// Each vertex is judged against the vertices already kept, so a run of
/// duplicates and straight vertices collapses in one pass. It is kept when it
/// differs from the last kept vertex and the unit directions of its two
/// incident edges differ (both comparisons use the relative tolerance
/// `rel_tol`). The ring seam is settled last. Winding order is preserved, and
/// running the pass on its own output returns the same contour.
pub fn normalize_contour<F: Float>(contour: &[Point2<F>], rel_tol: F) -> Vec<Point2<F>> {
    if contour.len() < 3 {
        return contour.to_vec();
    }

    let mut kept: Vec<Point2<F>> = Vec::with_capacity(contour.len());
    for &point in contour {
        if kept.last().is_some_and(|last| last.approx_eq(point, rel_tol)) {
            continue;
        }
        while let [.., prev, last] = kept[..] {
            if !is_straight(prev, last, point, rel_tol) {
                break;
            }
            kept.pop();
        }
        kept.push(point);
    }

    // Close the ring: the tail may repeat the head or run straight through it.
    while kept.len() >= 3 {
        let n = kept.len();
        if kept[n - 1].approx_eq(kept[0], rel_tol)
            || is_straight(kept[n - 2], kept[n - 1], kept[0], rel_tol)
        {
            kept.pop();
        } else if is_straight(kept[n - 1], kept[0], kept[1], rel_tol) {
            kept.remove(0);
        } else {
            break;
        }
    }
    kept
}

/// True when the edges `prev -> point` and `point -> next` share a direction.
fn is_straight<F: Float>(prev: Point2<F>, point: Point2<F>, next: Point2<F>, rel_tol: F) -> bool {
    (point - prev)
        .unit_or_zero()
        .approx_eq((next - point).unit_or_zero(), rel_tol)
}

/// Returns `true` if [`normalize_contour`] would leave the contour unchanged.
pub fn is_collinear_free<F: Float>(contour: &[Point2<F>], rel_tol: F) -> bool {
    normalize_contour(contour, rel_tol).len() == contour.len()
}
