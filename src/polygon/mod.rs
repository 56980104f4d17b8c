//! Footprint polygons: winding, containment and contour normalization.
//!
//! # Example
//!
//! ```
//! use roofline::polygon::{Polygon, Winding};
//! use roofline::Point2;
//!
//! let footprint = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! assert_eq!(footprint.winding(), Winding::CounterClockwise);
//! assert!(footprint.contains(Point2::new(1.0, 1.0)));
//! ```

mod core;
mod normalize;

pub use self::core::{polygon_contains, polygon_signed_area, polygon_winding, Polygon, Winding};
pub use normalize::{is_collinear_free, normalize_contour};

pub(crate) use normalize::ring_windows;
