//! roofline - Straight skeletons for hip roofs
//!
//! Shrink a building footprint at unit speed and record where its corners
//! meet: the result is the straight skeleton, and the offset at which each
//! skeleton node appears is its height on a hip roof with uniform slope.
//!
//! # Example
//!
//! ```
//! use roofline::{hip_roof, Point2, RoofOptions};
//!
//! let footprint = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(8.0, 0.0),
//!     Point2::new(8.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ];
//!
//! let roof = hip_roof(&footprint, &[], &RoofOptions::default()).unwrap();
//! assert_eq!(roof.faces.len(), 4);
//! ```

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod roof;
pub mod skeleton;

pub use error::SkeletonError;
pub use primitives::{Line2, Point2, Point3, Ray2, Segment2, Vec2};
pub use roof::{hip_roof, roof_from_skeleton, RoofMesh, RoofOptions};
pub use skeleton::{skeletonize, skeletonize_with, SkeletonOptions, Subtree};
