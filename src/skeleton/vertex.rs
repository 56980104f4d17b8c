//! Vertices of the shrinking wavefront.

use super::event::{EdgeEvent, Event, SplitEvent};
use super::lav::LavId;
use super::slav::{OriginalEdge, Slav};
use crate::error::SkeletonError;
use crate::primitives::{Line2, Point2, Ray2, Segment2, Vec2};
use tracing::trace;

/// Index of a vertex in the wavefront arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct VertexId(pub(crate) usize);

/// A vertex of a list of active vertices.
///
/// `edge_left` ends at the vertex and `edge_right` starts there, both taken
/// from the original contour. The bisector is the ray the vertex travels
/// along as the wavefront shrinks.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LaVertex {
    pub(crate) id: VertexId,
    pub(crate) point: Point2<f64>,
    pub(crate) edge_left: Segment2<f64>,
    pub(crate) edge_right: Segment2<f64>,
    pub(crate) bisector: Ray2<f64>,
    pub(crate) is_reflex: bool,
    pub(crate) prev: VertexId,
    pub(crate) next: VertexId,
    pub(crate) lav: Option<LavId>,
    pub(crate) valid: bool,
}

impl LaVertex {
    /// Builds a vertex and its bisector.
    ///
    /// Reflexivity is judged on `direction_vectors` when given (a unified
    /// vertex inherits the bisectors of the pair it replaces), otherwise on
    /// the two incident edges. The bisector always follows the edges.
    pub(crate) fn new(
        id: VertexId,
        point: Point2<f64>,
        edge_left: Segment2<f64>,
        edge_right: Segment2<f64>,
        direction_vectors: Option<(Vec2<f64>, Vec2<f64>)>,
    ) -> Result<Self, SkeletonError> {
        let creator = (-edge_left.unit_direction(), edge_right.unit_direction());
        let (d0, d1) = direction_vectors.unwrap_or(creator);
        let is_reflex = d0.cross(d1) < 0.0;

        let sum = creator.0 + creator.1;
        let bisector = Ray2::try_new(point, if is_reflex { -sum } else { sum })?;

        Ok(Self {
            id,
            point,
            edge_left,
            edge_right,
            bisector,
            is_reflex,
            prev: id,
            next: id,
            lav: None,
            valid: true,
        })
    }

    /// Predicts the first event this vertex takes part in.
    ///
    /// Candidates are the meetings with both neighbor bisectors and, for a
    /// reflex vertex, a split against every original edge. The candidate
    /// closest to the vertex wins; ties go to the first one found.
    pub(crate) fn next_event(&self, slav: &Slav) -> Option<Event> {
        let tolerance = slav.options.tolerance;
        let mut events = Vec::new();

        if self.is_reflex {
            trace!(point = ?self.point, "looking for split events");
            for edge in &slav.original_edges {
                if edge.edge.approx_eq(self.edge_left, tolerance)
                    || edge.edge.approx_eq(self.edge_right, tolerance)
                {
                    continue;
                }
                if let Some(split) = self.split_candidate(edge, slav) {
                    events.push(Event::Split(split));
                }
            }
        }

        let prev = slav.arena.vertex(self.prev);
        if let Some(point) = self.bisector.intersect(&prev.bisector) {
            events.push(Event::Edge(EdgeEvent {
                distance: Line2::from(self.edge_left).distance(point),
                intersection_point: point,
                vertex_a: self.prev,
                vertex_b: self.id,
            }));
        }

        let next = slav.arena.vertex(self.next);
        if let Some(point) = self.bisector.intersect(&next.bisector) {
            events.push(Event::Edge(EdgeEvent {
                distance: Line2::from(self.edge_right).distance(point),
                intersection_point: point,
                vertex_a: self.id,
                vertex_b: self.next,
            }));
        }

        let nearest = events
            .into_iter()
            .fold(None, |best: Option<(f64, Event)>, event| {
                let d = self.point.distance(event.intersection_point());
                match best {
                    Some((best_d, _)) if best_d <= d => best,
                    _ => Some((d, event)),
                }
            })
            .map(|(_, event)| event);

        if let Some(event) = &nearest {
            trace!(point = ?self.point, ?event, "next event");
        }
        nearest
    }

    /// Where this reflex vertex would hit `edge`, if it lands inside the
    /// region swept by that edge.
    fn split_candidate(&self, edge: &OriginalEdge, slav: &Slav) -> Option<SplitEvent> {
        let tolerance = slav.options.tolerance;
        let eps = slav.options.side_epsilon;
        let edge_dir = edge.edge.unit_direction();

        // Use whichever incident edge is less parallel to the candidate.
        let left_dot = self.edge_left.unit_direction().dot(edge_dir).abs();
        let right_dot = self.edge_right.unit_direction().dot(edge_dir).abs();
        let self_edge = if left_dot < right_dot {
            self.edge_left
        } else {
            self.edge_right
        };

        let i = Line2::from(self_edge).intersect(&Line2::from(edge.edge))?;
        if i.approx_eq(self.point, tolerance) {
            return None;
        }

        // Bisector of the angle between the two edge lines, pointing towards
        // the vertex side.
        let lin_vec = (self.point - i).unit_or_zero();
        let ed_vec = if lin_vec.dot(edge_dir) < 0.0 {
            -edge_dir
        } else {
            edge_dir
        };
        let angle_bisector = Line2::try_new(i, ed_vec + lin_vec).ok()?;

        let b = angle_bisector.intersect(&self.bisector)?;

        let x_left = edge.bisector_left.side(b) > -eps;
        let x_right = edge.bisector_right.side(b) < eps;
        let x_edge = edge_dir.cross((b - edge.edge.start).unit_or_zero()) < eps;

        if !(x_left && x_right && x_edge) {
            trace!(candidate = ?b, x_left, x_right, x_edge, "split candidate rejected");
            return None;
        }

        Some(SplitEvent {
            distance: Line2::from(edge.edge).distance(b),
            intersection_point: b,
            vertex: self.id,
            opposite_edge: edge.edge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(a: (f64, f64), b: (f64, f64)) -> Segment2<f64> {
        Segment2::new(Point2::from(a), Point2::from(b))
    }

    #[test]
    fn test_convex_corner_bisector() {
        // Clockwise around the positive quadrant, interior on the right.
        let v = LaVertex::new(
            VertexId(0),
            Point2::new(0.0, 0.0),
            seg((1.0, 0.0), (0.0, 0.0)),
            seg((0.0, 0.0), (0.0, 1.0)),
            None,
        )
        .unwrap();

        assert!(!v.is_reflex);
        let dir = v.bisector.unit_direction();
        assert_relative_eq!(dir.x, 0.5f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(dir.y, 0.5f64.sqrt(), epsilon = 1e-12);
        assert_eq!(v.prev, v.id);
        assert_eq!(v.next, v.id);
        assert!(v.valid);
        assert!(v.lav.is_none());
    }

    #[test]
    fn test_reflex_corner_bisector_points_inside() {
        let v = LaVertex::new(
            VertexId(0),
            Point2::new(0.0, 0.0),
            seg((-1.0, 0.0), (0.0, 0.0)),
            seg((0.0, 0.0), (0.0, 1.0)),
            None,
        )
        .unwrap();

        assert!(v.is_reflex);
        let dir = v.bisector.unit_direction();
        assert_relative_eq!(dir.x, 0.5f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(dir.y, -(0.5f64.sqrt()), epsilon = 1e-12);
    }

    #[test]
    fn test_direction_vectors_override_reflexivity() {
        let left = seg((1.0, 0.0), (0.0, 0.0));
        let right = seg((0.0, 0.0), (0.0, 1.0));
        let flipped = (Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0));
        let v = LaVertex::new(VertexId(3), Point2::origin(), left, right, Some(flipped)).unwrap();

        assert!(v.is_reflex);
        let dir = v.bisector.unit_direction();
        assert!(dir.x < 0.0 && dir.y < 0.0);
    }

    #[test]
    fn test_straight_vertex_has_no_bisector() {
        let result = LaVertex::new(
            VertexId(0),
            Point2::new(1.0, 0.0),
            seg((0.0, 0.0), (1.0, 0.0)),
            seg((1.0, 0.0), (2.0, 0.0)),
            None,
        );
        assert_eq!(result.unwrap_err(), SkeletonError::InvalidGeometry);
    }
}
