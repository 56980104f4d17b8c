//! Floating-point geometric primitives and operations.

mod line2;
mod linear;
mod point2;
mod point3;
mod ray2;
mod segment2;
mod vec2;

pub use line2::Line2;
pub use linear::{intersect, Linear2};
pub use point2::Point2;
pub use point3::Point3;
pub use ray2::Ray2;
pub use segment2::Segment2;
pub use vec2::Vec2;
