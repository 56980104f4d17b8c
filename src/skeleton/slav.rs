//! The set of LAVs and the two event handlers that reshape it.

use super::event::{EdgeEvent, Event, SplitEvent};
use super::lav::{Arena, LavId};
use super::vertex::VertexId;
use super::{SkeletonOptions, Subtree};
use crate::error::SkeletonError;
use crate::primitives::{Point2, Ray2, Segment2};
use tracing::{debug, trace};

/// An edge of the input contours together with the initial bisectors at
/// its endpoints. Split candidates are tested against these.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OriginalEdge {
    pub(crate) edge: Segment2<f64>,
    pub(crate) bisector_left: Ray2<f64>,
    pub(crate) bisector_right: Ray2<f64>,
}

/// Result of handling one event: an optional skeleton arc and the follow-up
/// events to queue.
pub(crate) type EventOutcome = (Option<Subtree>, Vec<Event>);

/// Set of lists of active vertices.
#[derive(Debug)]
pub(crate) struct Slav {
    pub(crate) arena: Arena,
    pub(crate) active: Vec<LavId>,
    pub(crate) original_edges: Vec<OriginalEdge>,
    pub(crate) options: SkeletonOptions,
}

impl Slav {
    /// Builds one LAV per contour. Each contour must keep its interior on
    /// the right.
    pub(crate) fn new(
        contours: &[Vec<Point2<f64>>],
        options: SkeletonOptions,
    ) -> Result<Self, SkeletonError> {
        let mut arena = Arena::default();
        let active = contours
            .iter()
            .map(|contour| arena.lav_from_polygon(contour))
            .collect::<Result<Vec<_>, _>>()?;

        let original_edges = active
            .iter()
            .flat_map(|&lav| arena.lav_vertices(lav))
            .map(|id| {
                let vertex = arena.vertex(id);
                let prev = arena.vertex(vertex.prev);
                OriginalEdge {
                    edge: Segment2::new(prev.point, vertex.point),
                    bisector_left: prev.bisector,
                    bisector_right: vertex.bisector,
                }
            })
            .collect();

        Ok(Self {
            arena,
            active,
            original_edges,
            options,
        })
    }

    /// True once every LAV has collapsed.
    pub(crate) fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Every vertex of every active LAV.
    pub(crate) fn active_vertices(&self) -> Vec<VertexId> {
        self.active
            .iter()
            .flat_map(|&lav| self.arena.lav_vertices(lav))
            .collect()
    }

    /// An edge event is current while both vertices are alive and still
    /// adjacent.
    pub(crate) fn is_current(&self, event: &Event) -> bool {
        match event {
            Event::Edge(e) => {
                let a = self.arena.vertex(e.vertex_a);
                a.valid && self.arena.vertex(e.vertex_b).valid && a.next == e.vertex_b
            }
            Event::Split(s) => self.arena.vertex(s.vertex).valid,
        }
    }

    fn remove_active(&mut self, lav: LavId) {
        self.active.retain(|&l| l != lav);
    }

    pub(crate) fn handle_edge_event(
        &mut self,
        event: &EdgeEvent,
    ) -> Result<EventOutcome, SkeletonError> {
        let va = *self.arena.vertex(event.vertex_a);
        let vb = *self.arena.vertex(event.vertex_b);
        let Some(lav) = va.lav else {
            return Ok((None, Vec::new()));
        };

        let mut sinks = Vec::new();
        let mut events = Vec::new();

        if va.prev == vb.next {
            debug!(
                distance = event.distance,
                point = ?event.intersection_point,
                "peak event"
            );
            self.remove_active(lav);
            for id in self.arena.lav_vertices(lav) {
                sinks.push(self.arena.vertex(id).point);
                self.arena.invalidate(id);
            }
        } else {
            debug!(
                distance = event.distance,
                point = ?event.intersection_point,
                "edge event"
            );
            let merged = self.arena.unify(
                lav,
                event.vertex_a,
                event.vertex_b,
                event.intersection_point,
            )?;
            sinks.push(va.point);
            sinks.push(vb.point);
            events.extend(self.arena.vertex(merged).next_event(self));
        }

        Ok((
            Some(Subtree::new(event.intersection_point, event.distance, sinks)),
            events,
        ))
    }

    pub(crate) fn handle_split_event(
        &mut self,
        event: &SplitEvent,
    ) -> Result<EventOutcome, SkeletonError> {
        let v = *self.arena.vertex(event.vertex);
        let Some(lav) = v.lav else {
            return Ok((None, Vec::new()));
        };
        debug!(
            distance = event.distance,
            point = ?event.intersection_point,
            "split event"
        );

        let Some((x, y)) = self.find_opposite(event) else {
            trace!(point = ?event.intersection_point, "split event hits no active edge");
            return Ok((None, Vec::new()));
        };

        let mut sinks = vec![v.point];
        let point = event.intersection_point;

        let v1 = self
            .arena
            .push_vertex(point, v.edge_left, event.opposite_edge, None)?;
        let v2 = self
            .arena
            .push_vertex(point, event.opposite_edge, v.edge_right, None)?;

        self.arena.link(v.prev, v1);
        self.arena.link(v1, x);
        self.arena.link(y, v2);
        self.arena.link(v2, v.next);

        self.remove_active(lav);
        let x_lav = self.arena.vertex(x).lav;
        let new_lavs = if x_lav != Some(lav) {
            // The vertex reached a different LAV: the two rings merge.
            if let Some(other) = x_lav {
                self.remove_active(other);
            }
            vec![self.arena.lav_from_chain(v1)]
        } else {
            vec![self.arena.lav_from_chain(v1), self.arena.lav_from_chain(v2)]
        };

        let mut heads = Vec::new();
        for new_lav in new_lavs {
            let descriptor = *self.arena.lav(new_lav);
            if descriptor.len > 2 {
                self.active.push(new_lav);
                heads.push(descriptor.head);
            } else {
                trace!(len = descriptor.len, "split produced a collapsed lav");
                let head = self.arena.vertex(descriptor.head);
                sinks.push(self.arena.vertex(head.next).point);
                for id in self.arena.lav_vertices(new_lav) {
                    self.arena.invalidate(id);
                }
            }
        }

        let mut events = Vec::new();
        for head in heads {
            events.extend(self.arena.vertex(head).next_event(self));
        }

        self.arena.invalidate(event.vertex);

        Ok((Some(Subtree::new(point, event.distance, sinks)), events))
    }

    /// Locates the active vertex pair `(x, y)` bounding the stretch of the
    /// opposite edge that the split point falls on. `y` precedes `x`.
    fn find_opposite(&self, event: &SplitEvent) -> Option<(VertexId, VertexId)> {
        let tolerance = self.options.tolerance;
        let eps = self.options.side_epsilon;
        let norm = event.opposite_edge.unit_direction();
        let start = event.opposite_edge.start;

        for id in self.active_vertices() {
            let candidate = self.arena.vertex(id);
            let pair = if norm.approx_eq(candidate.edge_left.unit_direction(), tolerance)
                && start.approx_eq(candidate.edge_left.start, tolerance)
            {
                Some((id, candidate.prev))
            } else if norm.approx_eq(candidate.edge_right.unit_direction(), tolerance)
                && start.approx_eq(candidate.edge_right.start, tolerance)
            {
                Some((candidate.next, id))
            } else {
                None
            };

            if let Some((x, y)) = pair {
                let x_left = self.arena.vertex(y).bisector.side(event.intersection_point) >= -eps;
                let x_right = self.arena.vertex(x).bisector.side(event.intersection_point) <= eps;
                if x_left && x_right {
                    return Some((x, y));
                }
            }
        }
        None
    }
}
