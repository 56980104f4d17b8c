//! Straight skeleton of a polygon with holes.
//!
//! Every edge of the footprint moves inwards at unit speed. Vertices slide
//! along their angle bisectors, and whenever the shrinking front changes
//! topology an arc of the skeleton is recorded:
//!
//! - an *edge event* when two neighboring bisectors meet and the edge
//!   between them disappears,
//! - a *split event* when a reflex vertex runs into an opposite edge and
//!   cuts the front in two.
//!
//! The offset at which an event happens is the height of the arc's source,
//! which is what turns a skeleton into a hip roof.
//!
//! # Example
//!
//! ```
//! use roofline::{skeletonize, Point2};
//!
//! let rectangle = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let skeleton = skeletonize(&rectangle, &[]).unwrap();
//! assert_eq!(skeleton.len(), 2);
//! for arc in &skeleton {
//!     assert!((arc.height - 1.0).abs() < 1e-9);
//! }
//! ```

mod event;
mod lav;
mod slav;
mod vertex;

use crate::error::SkeletonError;
use crate::polygon::{normalize_contour, polygon_winding, Polygon, Winding};
use crate::primitives::Point2;
use event::{Event, EventQueue};
use slav::Slav;
use tracing::{debug, trace};

/// One arc bundle of the skeleton.
///
/// `source` is where wavefront vertices met, at offset `height`; each sink
/// is the earlier position of a vertex that arrived there.
#[derive(Debug, Clone, PartialEq)]
pub struct Subtree {
    /// Skeleton node created by the event.
    pub source: Point2<f64>,
    /// Offset distance at which the event happened.
    pub height: f64,
    /// Points connected to `source` by skeleton arcs.
    pub sinks: Vec<Point2<f64>>,
}

impl Subtree {
    /// Creates a new subtree.
    pub fn new(source: Point2<f64>, height: f64, sinks: Vec<Point2<f64>>) -> Self {
        Self {
            source,
            height,
            sinks,
        }
    }

    /// Iterates the skeleton arcs of this subtree as `(source, sink)` pairs.
    pub fn arcs(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        self.sinks.iter().map(move |&sink| (self.source, sink))
    }
}

/// Options for skeleton computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkeletonOptions {
    /// Relative tolerance for point, vector and edge equality. Default: 1e-3.
    pub tolerance: f64,
    /// Slack for the half-plane sign tests of split events. Default: 1e-5.
    pub side_epsilon: f64,
    /// Merge subtrees that share a source point. Default: true.
    pub coalesce_sources: bool,
    /// Distance below which two sources are merged, as a fraction of the
    /// footprint's bounding box extent. Default: 1e-9.
    pub coalesce_tolerance: f64,
    /// Upper bound on processed events before giving up. Default: 1_000_000.
    pub max_events: usize,
}

impl Default for SkeletonOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            side_epsilon: 1e-5,
            coalesce_sources: true,
            coalesce_tolerance: 1e-9,
            max_events: 1_000_000,
        }
    }
}

impl SkeletonOptions {
    /// Default options without merging of coincident sources.
    pub fn raw() -> Self {
        Self {
            coalesce_sources: false,
            ..Default::default()
        }
    }

    /// Sets the relative equality tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the event budget.
    pub fn with_max_events(mut self, max_events: usize) -> Self {
        self.max_events = max_events;
        self
    }
}

/// Computes the straight skeleton of a polygon with default options.
///
/// `polygon` must be counter-clockwise and every hole clockwise (y axis
/// pointing up). The returned subtrees come in event order, so heights are
/// non-decreasing.
///
/// # Errors
///
/// - [`SkeletonError::WrongWinding`] if a contour has the wrong orientation.
/// - [`SkeletonError::DegenerateInput`] if a contour has fewer than three
///   usable vertices.
/// - [`SkeletonError::ConvergenceFailed`] if the event budget runs out.
pub fn skeletonize(
    polygon: &[Point2<f64>],
    holes: &[Vec<Point2<f64>>],
) -> Result<Vec<Subtree>, SkeletonError> {
    skeletonize_with(polygon, holes, &SkeletonOptions::default())
}

/// Computes the straight skeleton of a polygon with custom options.
pub fn skeletonize_with(
    polygon: &[Point2<f64>],
    holes: &[Vec<Point2<f64>>],
    options: &SkeletonOptions,
) -> Result<Vec<Subtree>, SkeletonError> {
    let contours = prepare_contours(polygon, holes, options)?;
    let mut slav = Slav::new(&contours, *options)?;

    let mut queue = EventQueue::new();
    for id in slav.active_vertices() {
        queue.push(slav.arena.vertex(id).next_event(&slav));
    }
    debug!(
        contours = contours.len(),
        vertices = slav.arena.vertex_count(),
        queued = queue.len(),
        "skeleton initialized"
    );

    let mut output = Vec::new();
    let mut processed = 0;
    while !slav.is_empty() && !queue.is_empty() {
        let Some(event) = queue.pop() else {
            break;
        };
        if processed == options.max_events {
            return Err(SkeletonError::ConvergenceFailed {
                iterations: processed,
            });
        }
        processed += 1;

        if !slav.is_current(&event) {
            trace!(distance = event.distance(), "discarding stale event");
            continue;
        }

        let (arc, events) = match &event {
            Event::Edge(e) => slav.handle_edge_event(e)?,
            Event::Split(s) => slav.handle_split_event(s)?,
        };
        queue.push_all(events);
        output.extend(arc);
    }

    if !slav.is_empty() {
        debug!(
            remaining = slav.active.len(),
            "event queue drained before every lav collapsed"
        );
    }

    if options.coalesce_sources {
        let extent = Polygon::new(contours[0].clone())
            .bounding_box()
            .map_or(0.0, |(min, max)| (max.x - min.x).max(max.y - min.y));
        output = coalesce_sources(output, options.coalesce_tolerance * extent);
    }
    debug!(subtrees = output.len(), events = processed, "skeleton complete");
    Ok(output)
}

/// Validates winding, normalizes every contour and reverses it so that the
/// interior lies to the right of each edge.
fn prepare_contours(
    polygon: &[Point2<f64>],
    holes: &[Vec<Point2<f64>>],
    options: &SkeletonOptions,
) -> Result<Vec<Vec<Point2<f64>>>, SkeletonError> {
    std::iter::once(polygon)
        .chain(holes.iter().map(Vec::as_slice))
        .enumerate()
        .map(|(contour, points)| {
            let mut normalized = normalize_contour(points, options.tolerance);
            if normalized.len() < 3 {
                return Err(SkeletonError::DegenerateInput {
                    contour,
                    vertices: normalized.len(),
                });
            }

            let expected = if contour == 0 {
                Winding::CounterClockwise
            } else {
                Winding::Clockwise
            };
            if polygon_winding(&normalized) != expected {
                return Err(SkeletonError::WrongWinding { contour });
            }

            normalized.reverse();
            Ok(normalized)
        })
        .collect()
}

/// Merges subtrees whose sources lie within `max_distance` of each other and
/// drops sinks that coincide with their own source.
///
/// Simultaneous events (the apex of a square, say) are reported once per
/// pair of vertices. After merging, each skeleton node appears as the source
/// of at most one subtree. The first occurrence keeps its position and
/// height.
pub fn coalesce_sources(skeleton: Vec<Subtree>, max_distance: f64) -> Vec<Subtree> {
    let close = |a: Point2<f64>, b: Point2<f64>| a.distance(b) <= max_distance;
    let mut merged: Vec<Subtree> = Vec::with_capacity(skeleton.len());

    for arc in skeleton {
        match merged.iter_mut().find(|m| close(m.source, arc.source)) {
            Some(target) => {
                for sink in arc.sinks {
                    if !target.sinks.iter().any(|&s| close(s, sink)) {
                        target.sinks.push(sink);
                    }
                }
            }
            None => merged.push(arc),
        }
    }

    for arc in &mut merged {
        let source = arc.source;
        arc.sinks.retain(|&s| !close(s, source));
    }
    merged
}
