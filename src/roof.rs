//! Hip roof faces from a straight skeleton.
//!
//! Every footprint edge carries one roof plane. The face of that plane is
//! bounded by the edge itself and by skeleton arcs, so it can be recovered
//! by walking the planar graph made of footprint edges and skeleton arcs,
//! always keeping the face on the left.
//!
//! # Example
//!
//! ```
//! use roofline::{hip_roof, Point2, RoofOptions};
//!
//! let square = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let roof = hip_roof(&square, &[], &RoofOptions::default()).unwrap();
//! assert_eq!(roof.faces.len(), 4);
//! assert!((roof.max_height() - 1.0).abs() < 1e-9);
//! ```

use crate::error::SkeletonError;
use crate::polygon::normalize_contour;
use crate::primitives::{Point2, Point3};
use crate::skeleton::{skeletonize_with, SkeletonOptions, Subtree};
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::f64::consts::TAU;
use tracing::{debug, trace};

/// Coordinates are merged into one node when they agree to six decimals.
const QUANTIZE: f64 = 1e6;

/// Options for roof construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofOptions {
    /// Elevation of the footprint (eaves). Default: 0.0.
    pub base_z: f64,
    /// Rise per unit of horizontal offset. Default: 1.0 (45 degree pitch).
    pub height_scale: f64,
    /// Options forwarded to the skeleton computation.
    pub skeleton: SkeletonOptions,
}

impl Default for RoofOptions {
    fn default() -> Self {
        Self {
            base_z: 0.0,
            height_scale: 1.0,
            skeleton: SkeletonOptions::default(),
        }
    }
}

impl RoofOptions {
    /// Creates options for a roof pitched at `degrees` above horizontal.
    pub fn with_pitch(degrees: f64) -> Self {
        Self {
            height_scale: degrees.to_radians().tan(),
            ..Default::default()
        }
    }

    /// Sets the eave elevation.
    pub fn with_base_z(mut self, base_z: f64) -> Self {
        self.base_z = base_z;
        self
    }
}

/// Roof geometry: shared vertices and one polygonal face per footprint edge.
///
/// Face indices run counter-clockwise seen from above, starting with the
/// footprint edge the face rests on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoofMesh {
    /// Footprint corners and skeleton nodes.
    pub vertices: Vec<Point3<f64>>,
    /// Faces as indices into `vertices`.
    pub faces: Vec<Vec<usize>>,
}

impl RoofMesh {
    /// Returns the corner positions of a face, or `None` if `face` is out of
    /// range.
    pub fn face_points(&self, face: usize) -> Option<Vec<Point3<f64>>> {
        let indices = self.faces.get(face)?;
        indices.iter().map(|&i| self.vertices.get(i).copied()).collect()
    }

    /// Highest elevation on the roof, or `NEG_INFINITY` for an empty mesh.
    pub fn max_height(&self) -> f64 {
        self.vertices
            .iter()
            .map(|v| v.z)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Computes the skeleton of a footprint and builds its hip roof.
///
/// # Errors
///
/// Any error of [`skeletonize_with`], or
/// [`SkeletonError::FaceReconstruction`] if the faces cannot be closed.
pub fn hip_roof(
    polygon: &[Point2<f64>],
    holes: &[Vec<Point2<f64>>],
    options: &RoofOptions,
) -> Result<RoofMesh, SkeletonError> {
    let skeleton = skeletonize_with(polygon, holes, &options.skeleton)?;
    roof_from_skeleton(polygon, holes, &skeleton, options)
}

/// Builds roof faces from a footprint and its skeleton.
///
/// The footprint is normalized the same way [`skeletonize_with`] does it,
/// so the skeleton sinks land on the footprint corners.
pub fn roof_from_skeleton(
    polygon: &[Point2<f64>],
    holes: &[Vec<Point2<f64>>],
    skeleton: &[Subtree],
    options: &RoofOptions,
) -> Result<RoofMesh, SkeletonError> {
    let contours = std::iter::once(polygon)
        .chain(holes.iter().map(Vec::as_slice))
        .enumerate()
        .map(|(contour, points)| {
            let normalized = normalize_contour(points, options.skeleton.tolerance);
            if normalized.len() < 3 {
                return Err(SkeletonError::DegenerateInput {
                    contour,
                    vertices: normalized.len(),
                });
            }
            Ok(normalized)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut graph = RoofGraph::default();

    let mut footprint_edges = Vec::new();
    for contour in &contours {
        let ids: Vec<usize> = contour
            .iter()
            .map(|&p| graph.insert(p, options.base_z))
            .collect();
        for (i, &a) in ids.iter().enumerate() {
            let b = ids[(i + 1) % ids.len()];
            graph.connect(a, b);
            footprint_edges.push((a, b));
        }
    }

    let sources: Vec<usize> = skeleton
        .iter()
        .map(|arc| {
            graph.insert(
                arc.source,
                options.base_z + arc.height * options.height_scale,
            )
        })
        .collect();
    for (arc, &source) in skeleton.iter().zip(&sources) {
        for &sink in &arc.sinks {
            let sink = graph.insert(sink, options.base_z);
            graph.connect(source, sink);
        }
    }

    let faces = footprint_edges
        .iter()
        .enumerate()
        .map(|(edge, &(a, b))| graph.walk_face(a, b, edge))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        vertices = graph.points.len(),
        faces = faces.len(),
        "roof faces built"
    );
    Ok(RoofMesh {
        vertices: graph.points,
        faces,
    })
}

/// Planar graph of footprint edges and skeleton arcs.
#[derive(Debug, Default)]
struct RoofGraph {
    index: HashMap<(i64, i64), usize>,
    points: Vec<Point3<f64>>,
    adjacency: Vec<Vec<usize>>,
}

impl RoofGraph {
    fn key(p: Point2<f64>) -> (i64, i64) {
        (
            (p.x * QUANTIZE).round() as i64,
            (p.y * QUANTIZE).round() as i64,
        )
    }

    /// Returns the node at `p`, creating it at elevation `z` if needed.
    fn insert(&mut self, p: Point2<f64>, z: f64) -> usize {
        let key = Self::key(p);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = self.points.len();
        self.index.insert(key, id);
        self.points.push(Point3::from_planar(p, z));
        self.adjacency.push(Vec::new());
        id
    }

    fn connect(&mut self, a: usize, b: usize) {
        if a == b || self.adjacency[a].contains(&b) {
            return;
        }
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    fn planar(&self, node: usize) -> Point2<f64> {
        self.points[node].planar()
    }

    /// Traces the face left of `start -> second`.
    fn walk_face(
        &self,
        start: usize,
        second: usize,
        edge: usize,
    ) -> Result<Vec<usize>, SkeletonError> {
        let mut face = vec![start];
        let (mut from, mut at) = (start, second);

        while at != start {
            if face.len() > self.points.len() {
                trace!(edge, "face walk does not close");
                return Err(SkeletonError::FaceReconstruction { edge });
            }
            face.push(at);
            let next = self.next_clockwise(from, at).ok_or_else(|| {
                trace!(edge, node = at, "face walk hit a dead end");
                SkeletonError::FaceReconstruction { edge }
            })?;
            from = at;
            at = next;
        }
        Ok(face)
    }

    /// First neighbor of `at` found by turning clockwise from the edge back
    /// to `from`.
    fn next_clockwise(&self, from: usize, at: usize) -> Option<usize> {
        let origin = self.planar(at);
        let angle_to = |node: usize| {
            let d = self.planar(node) - origin;
            d.y.atan2(d.x)
        };
        let back = angle_to(from);

        self.adjacency[at]
            .iter()
            .copied()
            .filter(|&n| n != from)
            .min_by_key(|&n| {
                let turn = (back - angle_to(n)).rem_euclid(TAU);
                OrderedFloat(if turn == 0.0 { TAU } else { turn })
            })
    }
}
