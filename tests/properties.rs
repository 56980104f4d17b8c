//! Property and scenario tests for the public skeleton and roof API.

use approx::assert_relative_eq;
use proptest::prelude::*;
use roofline::polygon::{polygon_contains, polygon_signed_area};
use roofline::{
    hip_roof, skeletonize, skeletonize_with, Point2, RoofOptions, SkeletonError, SkeletonOptions,
    Subtree,
};
use std::f64::consts::TAU;

fn rectangle(w: f64, h: f64) -> Vec<Point2<f64>> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(w, 0.0),
        Point2::new(w, h),
        Point2::new(0.0, h),
    ]
}

/// Samples `n` points counter-clockwise around an ellipse, each nudged along
/// the curve by up to `jitter` of the angular step.
fn ellipse(n: usize, a: f64, b: f64, jitter: &[f64]) -> Vec<Point2<f64>> {
    (0..n)
        .map(|i| {
            let t = TAU * (i as f64 + jitter[i]) / n as f64;
            Point2::new(a * t.cos(), b * t.sin())
        })
        .collect()
}

fn has_source_near(skeleton: &[Subtree], p: Point2<f64>, tol: f64) -> bool {
    skeleton.iter().any(|s| s.source.distance(p) <= tol)
}

proptest! {
    #[test]
    fn rectangle_ridge_matches_closed_form(w in 1u32..40, h in 1u32..40) {
        let (w, h) = (f64::from(w), f64::from(h));
        let skeleton = skeletonize(&rectangle(w, h), &[]).unwrap();

        let half = w.min(h) / 2.0;
        let expected = if w == h { 1 } else { 2 };
        prop_assert_eq!(skeleton.len(), expected);
        for arc in &skeleton {
            prop_assert!((arc.height - half).abs() < 1e-9);
        }

        let offset = (w - h).abs() / 2.0;
        let (a, b) = if w >= h {
            (Point2::new(w / 2.0 - offset, h / 2.0), Point2::new(w / 2.0 + offset, h / 2.0))
        } else {
            (Point2::new(w / 2.0, h / 2.0 - offset), Point2::new(w / 2.0, h / 2.0 + offset))
        };
        prop_assert!(has_source_near(&skeleton, a, 1e-9));
        prop_assert!(has_source_near(&skeleton, b, 1e-9));
    }

    #[test]
    fn skeleton_scales_with_footprint(w in 1u32..40, h in 1u32..40, k in 0.1f64..10.0) {
        let (w, h) = (f64::from(w), f64::from(h));
        let base = skeletonize(&rectangle(w, h), &[]).unwrap();
        let scaled = skeletonize(&rectangle(w * k, h * k), &[]).unwrap();

        prop_assert_eq!(base.len(), scaled.len());
        for arc in &base {
            let twin = scaled
                .iter()
                .find(|s| s.source.distance(arc.source.scaled(k)) <= 1e-9 * k.max(1.0) * w.max(h));
            prop_assert!(twin.is_some());
            prop_assert!((twin.unwrap().height - arc.height * k).abs() <= 1e-9 * k.max(1.0) * w.max(h));
        }
    }

    #[test]
    fn triangle_peaks_at_incenter(base in 1.0f64..20.0, x in -10.0f64..20.0, y in 0.5f64..20.0) {
        let (a, b, c) = (Point2::origin(), Point2::new(base, 0.0), Point2::new(x, y));
        let skeleton = skeletonize(&[a, b, c], &[]).unwrap();

        let (la, lb, lc) = (b.distance(c), c.distance(a), a.distance(b));
        let perimeter = la + lb + lc;
        let incenter = Point2::new(
            (la * a.x + lb * b.x + lc * c.x) / perimeter,
            (la * a.y + lb * b.y + lc * c.y) / perimeter,
        );
        let inradius = 2.0 * polygon_signed_area(&[a, b, c]) / perimeter;

        prop_assert_eq!(skeleton.len(), 1);
        prop_assert_eq!(skeleton[0].sinks.len(), 3);
        prop_assert!(skeleton[0].source.distance(incenter) <= 1e-6);
        prop_assert!((skeleton[0].height - inradius).abs() <= 1e-6);
    }

    #[test]
    fn convex_polygon_has_one_arc_per_collapse(
        n in 3usize..16,
        a in 2.0f64..10.0,
        ratio in 0.4f64..1.0,
        jitter in prop::collection::vec(-0.3f64..0.3, 16),
    ) {
        let polygon = ellipse(n, a, a * ratio, &jitter);
        let skeleton = skeletonize_with(&polygon, &[], &SkeletonOptions::raw()).unwrap();

        prop_assert_eq!(skeleton.len(), n - 2);
        let peaks: Vec<_> = skeleton
            .iter()
            .enumerate()
            .filter(|(_, arc)| arc.sinks.len() == 3)
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(peaks, vec![n - 3]);
        for arc in &skeleton[..n - 3] {
            prop_assert_eq!(arc.sinks.len(), 2);
        }
    }

    #[test]
    fn reversed_footprint_is_rejected(w in 1u32..40, h in 1u32..40) {
        let mut footprint = rectangle(f64::from(w), f64::from(h));
        footprint.reverse();
        prop_assert_eq!(
            skeletonize(&footprint, &[]),
            Err(SkeletonError::WrongWinding { contour: 0 })
        );
    }
}

#[test]
fn courtyard_skeleton_stays_inside() {
    let outer = rectangle(12.0, 8.0);
    let hole = vec![
        Point2::new(4.0, 3.0),
        Point2::new(5.0, 6.0),
        Point2::new(8.0, 2.0),
    ];
    let skeleton = skeletonize(&outer, &[hole.clone()]).unwrap();

    assert!(!skeleton.is_empty());
    for arc in &skeleton {
        assert!(arc.height > 0.0 && arc.height <= 4.0 + 1e-9);
        assert!(polygon_contains(&outer, arc.source));
        assert!(!polygon_contains(&hole, arc.source));
    }
}

fn courtyard_hole() -> Vec<Point2<f64>> {
    vec![
        Point2::new(4.0, 3.0),
        Point2::new(4.0, 5.0),
        Point2::new(8.0, 5.0),
        Point2::new(8.0, 3.0),
    ]
}

#[test]
fn concentric_courtyard_skeleton() {
    let skeleton = skeletonize(&rectangle(12.0, 8.0), &[courtyard_hole()]).unwrap();

    let corners = [(2.5, 1.5), (9.5, 1.5), (2.5, 6.5), (9.5, 6.5)];
    let inner = [(2.0, 2.0), (10.0, 2.0), (2.0, 6.0), (10.0, 6.0)];
    for (points, height) in [(corners, 1.5), (inner, 2.0)] {
        for (x, y) in points {
            let arc = skeleton
                .iter()
                .find(|s| s.source.distance(Point2::new(x, y)) <= 1e-9)
                .unwrap_or_else(|| panic!("no source at ({x}, {y})"));
            assert_relative_eq!(arc.height, height, epsilon = 1e-9);
        }
    }
    assert!(skeleton.iter().all(|arc| arc.height <= 2.0 + 1e-9));
}

#[test]
fn courtyard_roof_covers_ring() {
    let outer = rectangle(12.0, 8.0);
    let hole = courtyard_hole();
    let roof = hip_roof(&outer, &[hole.clone()], &RoofOptions::default()).unwrap();

    assert_eq!(roof.faces.len(), 8);
    let covered: f64 = (0..roof.faces.len())
        .map(|f| {
            let outline: Vec<_> = roof.face_points(f).unwrap().iter().map(|p| p.planar()).collect();
            polygon_signed_area(&outline)
        })
        .sum();
    let ring = polygon_signed_area(&outer) + polygon_signed_area(&hole);
    assert_relative_eq!(ring, 88.0, epsilon = 1e-9);
    assert_relative_eq!(covered, ring, epsilon = 1e-6);
    assert_relative_eq!(roof.max_height(), 2.0, epsilon = 1e-9);
}

#[test]
fn l_shape_skeleton() {
    let l_shape = vec![
        Point2::new(0.0, 0.0),
        Point2::new(6.0, 0.0),
        Point2::new(6.0, 2.0),
        Point2::new(3.0, 2.0),
        Point2::new(3.0, 5.0),
        Point2::new(0.0, 5.0),
    ];
    let skeleton = skeletonize(&l_shape, &[]).unwrap();

    assert!(!skeleton.is_empty());
    for arc in &skeleton {
        assert!(arc.height > 0.0 && arc.height <= 1.5 + 1e-9);
        assert!(polygon_contains(&l_shape, arc.source));
    }
    for pair in skeleton.windows(2) {
        assert!(pair[0].height <= pair[1].height + 1e-9);
    }
}

#[test]
fn roof_faces_tile_the_footprint() {
    // A 4x2 block with a gable end on top.
    let footprint = vec![
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(4.0, 2.0),
        Point2::new(2.0, 4.0),
        Point2::new(0.0, 2.0),
    ];
    let roof = hip_roof(&footprint, &[], &RoofOptions::default()).unwrap();

    assert_eq!(roof.faces.len(), footprint.len());
    let covered: f64 = (0..roof.faces.len())
        .map(|f| {
            let outline: Vec<_> = roof.face_points(f).unwrap().iter().map(|p| p.planar()).collect();
            polygon_signed_area(&outline)
        })
        .sum();
    assert_relative_eq!(covered, polygon_signed_area(&footprint), epsilon = 1e-6);
}
