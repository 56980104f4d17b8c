//! Error types for roofline operations.

use thiserror::Error;

/// Errors that can occur while building a skeleton or a roof from it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkeletonError {
    /// A line, ray, segment or bisector was built from a zero-length direction.
    #[error("invalid geometry: zero-length direction vector")]
    InvalidGeometry,

    /// A contour has fewer than three distinct, non-collinear vertices.
    #[error("degenerate contour {contour}: {vertices} usable vertices")]
    DegenerateInput {
        /// Contour index (0 is the outer boundary, holes start at 1).
        contour: usize,
        /// Number of vertices left after normalization.
        vertices: usize,
    },

    /// The outer boundary is not counter-clockwise or a hole is not clockwise.
    #[error("contour {contour} has the wrong winding order")]
    WrongWinding {
        /// Contour index (0 is the outer boundary, holes start at 1).
        contour: usize,
    },

    /// The event loop did not drain within the configured budget.
    #[error("convergence failed after {iterations} iterations")]
    ConvergenceFailed {
        /// Number of events popped before giving up.
        iterations: usize,
    },

    /// The skeleton edge graph could not be walked into closed roof faces.
    #[error("could not close the roof face starting at footprint edge {edge}")]
    FaceReconstruction {
        /// Index of the footprint edge whose face walk failed.
        edge: usize,
    },
}
