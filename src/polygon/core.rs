//! Core polygon types and basic operations.

use crate::primitives::Point2;
use num_traits::Float;

/// Winding order of a closed contour (y axis pointing up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Zero area or fewer than three vertices.
    Degenerate,
}

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Footprints are expected counter-clockwise, holes clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the winding order of the polygon.
    pub fn winding(&self) -> Winding {
        polygon_winding(&self.vertices)
    }

    /// Tests if a point is inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        let first = *self.vertices.first()?;
        Some(self.vertices[1..].iter().fold((first, first), |(min, max), v| {
            (
                Point2::new(min.x.min(v.x), min.y.min(v.y)),
                Point2::new(max.x.max(v.x), max.y.max(v.y)),
            )
        }))
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / (F::one() + F::one())
}

/// Classifies the winding order of a contour from its signed area.
pub fn polygon_winding<F: Float>(vertices: &[Point2<F>]) -> Winding {
    let area = polygon_signed_area(vertices);
    if area > F::epsilon() {
        Winding::CounterClockwise
    } else if area < -F::epsilon() {
        Winding::Clockwise
    } else {
        Winding::Degenerate
    }
}

/// Tests if a point is inside a polygon using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_signed_area_and_winding() {
        let sq = unit_square();
        assert_relative_eq!(sq.signed_area(), 1.0, epsilon = 1e-12);
        assert_eq!(sq.winding(), Winding::CounterClockwise);

        let mut rev = sq.clone();
        rev.vertices.reverse();
        assert_relative_eq!(rev.signed_area(), -1.0, epsilon = 1e-12);
        assert_eq!(rev.winding(), Winding::Clockwise);
    }

    #[test]
    fn test_degenerate_winding() {
        let line: Polygon<f64> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ]);
        assert_eq!(line.winding(), Winding::Degenerate);
        assert_eq!(Polygon::<f64>::new(vec![]).winding(), Winding::Degenerate);
    }

    #[test]
    fn test_contains() {
        let sq = unit_square();
        assert!(sq.contains(Point2::new(0.5, 0.5)));
        assert!(!sq.contains(Point2::new(1.5, 0.5)));
        assert!(!sq.contains(Point2::new(0.5, -0.1)));
    }

    #[test]
    fn test_bounding_box() {
        let poly: Polygon<f64> = Polygon::new(vec![
            Point2::new(1.0, -2.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
        ]);
        let (min, max) = poly.bounding_box().unwrap();
        assert_eq!(min, Point2::new(0.0, -2.0));
        assert_eq!(max, Point2::new(4.0, 3.0));
        assert!(Polygon::<f64>::new(vec![]).bounding_box().is_none());
    }
}
