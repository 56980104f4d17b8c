//! Computes the hip roof of a notched footprint and draws it as SVG.
//!
//! Run with: RUST_LOG=roofline=debug cargo run --example roof_outline

use roofline::{hip_roof, skeletonize, Point2, RoofOptions};
use std::fs::File;
use std::io::Write;

const SCALE: f64 = 60.0;
const MARGIN: f64 = 20.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let footprint = vec![
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 4.0),
        Point2::new(6.0, 4.0),
        Point2::new(5.0, 2.0),
        Point2::new(4.0, 4.0),
        Point2::new(0.0, 4.0),
    ];

    let skeleton = skeletonize(&footprint, &[])?;
    for arc in &skeleton {
        tracing::info!(
            source = ?arc.source,
            height = arc.height,
            sinks = arc.sinks.len(),
            "skeleton node"
        );
    }

    let roof = hip_roof(&footprint, &[], &RoofOptions::with_pitch(35.0))?;
    tracing::info!(
        faces = roof.faces.len(),
        ridge = roof.max_height(),
        "roof built"
    );

    let height = 4.0 * SCALE + 2.0 * MARGIN;
    let to_svg = |p: Point2<f64>| (MARGIN + p.x * SCALE, height - MARGIN - p.y * SCALE);

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        10.0 * SCALE + 2.0 * MARGIN,
        height
    );
    svg.push('\n');

    for face in 0..roof.faces.len() {
        let points: Vec<String> = roof
            .face_points(face)
            .unwrap_or_default()
            .iter()
            .map(|p| {
                let (x, y) = to_svg(p.planar());
                format!("{x:.1},{y:.1}")
            })
            .collect();
        let shade = 200u8.saturating_sub((face * 15) as u8);
        svg.push_str(&format!(
            r#"  <polygon points="{}" fill="rgb({shade},{shade},230)" stroke="black" stroke-width="1"/>"#,
            points.join(" ")
        ));
        svg.push('\n');
    }

    for (source, sink) in skeleton.iter().flat_map(|arc| arc.arcs()) {
        let ((x1, y1), (x2, y2)) = (to_svg(source), to_svg(sink));
        svg.push_str(&format!(
            r#"  <line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="red" stroke-width="2"/>"#
        ));
        svg.push('\n');
    }
    svg.push_str("</svg>\n");

    let mut file = File::create("roof_outline.svg")?;
    file.write_all(svg.as_bytes())?;
    println!("Wrote roof_outline.svg");
    Ok(())
}
