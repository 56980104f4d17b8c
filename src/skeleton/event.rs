//! Skeleton events and the priority queue that orders them.

use super::vertex::VertexId;
use crate::primitives::{Point2, Segment2};
use ordered_float::OrderedFloat;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Two adjacent bisectors meet and the edge between them vanishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EdgeEvent {
    pub(crate) distance: f64,
    pub(crate) intersection_point: Point2<f64>,
    pub(crate) vertex_a: VertexId,
    pub(crate) vertex_b: VertexId,
}

/// A reflex vertex reaches a non-adjacent edge and cuts the front in two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SplitEvent {
    pub(crate) distance: f64,
    pub(crate) intersection_point: Point2<f64>,
    pub(crate) vertex: VertexId,
    pub(crate) opposite_edge: Segment2<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Event {
    Edge(EdgeEvent),
    Split(SplitEvent),
}

impl Event {
    /// Shrink offset at which the event happens.
    pub(crate) fn distance(&self) -> f64 {
        match self {
            Event::Edge(e) => e.distance,
            Event::Split(s) => s.distance,
        }
    }

    pub(crate) fn intersection_point(&self) -> Point2<f64> {
        match self {
            Event::Edge(e) => e.intersection_point,
            Event::Split(s) => s.intersection_point,
        }
    }
}

/// Heap entry ordered by `(distance, insertion sequence)`.
#[derive(Debug)]
struct Queued {
    distance: OrderedFloat<f64>,
    sequence: u64,
    event: Event,
}

impl Queued {
    fn key(&self) -> (OrderedFloat<f64>, u64) {
        (self.distance, self.sequence)
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-queue of events keyed by distance.
///
/// Events at equal distance come out in the order they were pushed.
#[derive(Debug, Default)]
pub(crate) struct EventQueue {
    heap: BinaryHeap<Reverse<Queued>>,
    next_sequence: u64,
}

impl EventQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues an event; `None` is ignored.
    pub(crate) fn push(&mut self, event: Option<Event>) {
        let Some(event) = event else {
            return;
        };
        let entry = Queued {
            distance: OrderedFloat(event.distance()),
            sequence: self.next_sequence,
            event,
        };
        self.next_sequence += 1;
        self.heap.push(Reverse(entry));
    }

    pub(crate) fn push_all<I: IntoIterator<Item = Event>>(&mut self, events: I) {
        for event in events {
            self.push(Some(event));
        }
    }

    /// Removes and returns the nearest event.
    pub(crate) fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|Reverse(entry)| entry.event)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
