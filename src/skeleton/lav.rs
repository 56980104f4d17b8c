//! Lists of active vertices.
//!
//! Every vertex ever created lives in one [`Arena`]. A LAV is a circular
//! doubly-linked ring threaded through the arena by `prev`/`next` indices,
//! described by its head and length.

use super::vertex::{LaVertex, VertexId};
use crate::error::SkeletonError;
use crate::polygon::ring_windows;
use crate::primitives::{Point2, Segment2, Vec2};

/// Index of a LAV in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct LavId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lav {
    pub(crate) head: VertexId,
    pub(crate) len: usize,
}

/// Owner of all vertices and LAV descriptors.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    vertices: Vec<LaVertex>,
    lavs: Vec<Lav>,
}

impl Arena {
    #[inline]
    pub(crate) fn vertex(&self, id: VertexId) -> &LaVertex {
        &self.vertices[id.0]
    }

    #[inline]
    fn vertex_mut(&mut self, id: VertexId) -> &mut LaVertex {
        &mut self.vertices[id.0]
    }

    #[inline]
    pub(crate) fn lav(&self, id: LavId) -> &Lav {
        &self.lavs[id.0]
    }

    /// Number of vertices ever allocated, valid or not.
    pub(crate) fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn push_vertex(
        &mut self,
        point: Point2<f64>,
        edge_left: Segment2<f64>,
        edge_right: Segment2<f64>,
        direction_vectors: Option<(Vec2<f64>, Vec2<f64>)>,
    ) -> Result<VertexId, SkeletonError> {
        let id = VertexId(self.vertices.len());
        let vertex = LaVertex::new(id, point, edge_left, edge_right, direction_vectors)?;
        self.vertices.push(vertex);
        Ok(id)
    }

    /// Makes `b` the successor of `a`.
    pub(crate) fn link(&mut self, a: VertexId, b: VertexId) {
        self.vertex_mut(a).next = b;
        self.vertex_mut(b).prev = a;
    }

    /// Builds a LAV from a contour whose interior lies right of every edge.
    pub(crate) fn lav_from_polygon(
        &mut self,
        contour: &[Point2<f64>],
    ) -> Result<LavId, SkeletonError> {
        let lav = LavId(self.lavs.len());
        let ids = ring_windows(contour)
            .map(|(&prev, &point, &next)| {
                self.push_vertex(point, Segment2::new(prev, point), Segment2::new(point, next), None)
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (i, &id) in ids.iter().enumerate() {
            self.link(id, ids[(i + 1) % ids.len()]);
            self.vertex_mut(id).lav = Some(lav);
        }

        let head = ids.first().copied().ok_or(SkeletonError::DegenerateInput {
            contour: lav.0,
            vertices: 0,
        })?;
        self.lavs.push(Lav {
            head,
            len: ids.len(),
        });
        Ok(lav)
    }

    /// Adopts the ring reachable from `head` as a new LAV.
    pub(crate) fn lav_from_chain(&mut self, head: VertexId) -> LavId {
        let lav = LavId(self.lavs.len());
        let ring = self.ring(head);
        for &id in &ring {
            self.vertex_mut(id).lav = Some(lav);
        }
        self.lavs.push(Lav {
            head,
            len: ring.len(),
        });
        lav
    }

    /// Vertices of a LAV in ring order, starting at its head.
    pub(crate) fn lav_vertices(&self, lav: LavId) -> Vec<VertexId> {
        self.ring(self.lav(lav).head)
    }

    fn ring(&self, head: VertexId) -> Vec<VertexId> {
        let mut ring = vec![head];
        let mut current = self.vertex(head).next;
        while current != head && ring.len() < self.vertices.len() {
            ring.push(current);
            current = self.vertex(current).next;
        }
        ring
    }

    /// Marks a vertex dead and detaches it from its LAV.
    pub(crate) fn invalidate(&mut self, id: VertexId) {
        let vertex = self.vertex_mut(id);
        vertex.valid = false;
        let (lav, next) = (vertex.lav.take(), vertex.next);
        if let Some(lav) = lav {
            let lav = &mut self.lavs[lav.0];
            if lav.head == id {
                lav.head = next;
            }
        }
    }

    /// Replaces adjacent vertices `a` and `b` of `lav` by one vertex at
    /// `point`, which keeps `a`'s left edge and `b`'s right edge.
    pub(crate) fn unify(
        &mut self,
        lav: LavId,
        a: VertexId,
        b: VertexId,
        point: Point2<f64>,
    ) -> Result<VertexId, SkeletonError> {
        let va = *self.vertex(a);
        let vb = *self.vertex(b);
        let direction_vectors = (vb.bisector.unit_direction(), va.bisector.unit_direction());

        let replacement =
            self.push_vertex(point, va.edge_left, vb.edge_right, Some(direction_vectors))?;
        self.vertex_mut(replacement).lav = Some(lav);

        let head = self.lavs[lav.0].head;
        if head == a || head == b {
            self.lavs[lav.0].head = replacement;
        }

        self.link(va.prev, replacement);
        self.link(replacement, vb.next);

        self.invalidate(a);
        self.invalidate(b);
        self.lavs[lav.0].len -= 1;
        Ok(replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit square listed clockwise so the interior is on the right.
    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_from_polygon_links_ring() {
        let mut arena = Arena::default();
        let lav = arena.lav_from_polygon(&square()).unwrap();

        assert_eq!(arena.lav(lav).len, 4);
        let ids = arena.lav_vertices(lav);
        assert_eq!(ids.len(), 4);
        for (i, &id) in ids.iter().enumerate() {
            let v = arena.vertex(id);
            assert_eq!(v.next, ids[(i + 1) % 4]);
            assert_eq!(v.prev, ids[(i + 3) % 4]);
            assert_eq!(v.lav, Some(lav));
            assert!(!v.is_reflex);
        }
        assert_eq!(arena.vertex(ids[2]).point, Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_invalidate_moves_head() {
        let mut arena = Arena::default();
        let lav = arena.lav_from_polygon(&square()).unwrap();
        let ids = arena.lav_vertices(lav);

        arena.invalidate(ids[0]);
        assert_eq!(arena.lav(lav).head, ids[1]);
        assert!(!arena.vertex(ids[0]).valid);
        assert!(arena.vertex(ids[0]).lav.is_none());

        arena.invalidate(ids[2]);
        assert_eq!(arena.lav(lav).head, ids[1]);
    }

    #[test]
    fn test_unify_splices_replacement() {
        let mut arena = Arena::default();
        let lav = arena.lav_from_polygon(&square()).unwrap();
        let ids = arena.lav_vertices(lav);

        let merged = arena.unify(lav, ids[0], ids[1], Point2::new(0.5, 0.5)).unwrap();

        assert_eq!(arena.lav(lav).len, 3);
        assert_eq!(arena.lav(lav).head, merged);
        let m = arena.vertex(merged);
        assert_eq!(m.prev, ids[3]);
        assert_eq!(m.next, ids[2]);
        assert_eq!(m.edge_left, arena.vertex(ids[0]).edge_left);
        assert_eq!(m.edge_right, arena.vertex(ids[1]).edge_right);
        assert_eq!(arena.vertex(ids[3]).next, merged);
        assert_eq!(arena.vertex(ids[2]).prev, merged);
        assert!(!arena.vertex(ids[0]).valid);
        assert!(!arena.vertex(ids[1]).valid);
        assert_eq!(arena.lav_vertices(lav), vec![merged, ids[2], ids[3]]);
    }

    #[test]
    fn test_from_chain_adopts_ring() {
        let mut arena = Arena::default();
        let first = arena.lav_from_polygon(&square()).unwrap();
        let ids = arena.lav_vertices(first);

        let second = arena.lav_from_chain(ids[2]);
        assert_ne!(first, second);
        assert_eq!(arena.lav(second).len, 4);
        assert_eq!(arena.lav(second).head, ids[2]);
        assert!(ids.iter().all(|&id| arena.vertex(id).lav == Some(second)));
        assert_eq!(arena.vertex_count(), 4);
    }
}
