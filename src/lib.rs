//! polysimplify - Polyline simplification
//!
//! Reduces the number of points in a 2D polyline while keeping its shape
//! within a distance tolerance. A cheap radial-distance pass thins the input,
//! then Ramer-Douglas-Peucker removes points that lie close to the chord
//! between retained neighbours.
//!
//! ```
//! use polysimplify::{simplify, Point2};
//!
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 10.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(3.0, 0.0),
//! ];
//!
//! let simplified = simplify(&points, Some(1.0), false);
//! assert_eq!(
//!     simplified,
//!     vec![Point2::new(0.0, 0.0), Point2::new(1.0, 10.0), Point2::new(3.0, 0.0)]
//! );
//! ```

pub mod distance;
pub mod error;
pub mod primitives;
pub mod simplify;

pub use distance::{squared_distance, squared_segment_distance};
pub use error::SimplifyError;
pub use primitives::{Marked, Point2, Segment2, Vec2, Vertex};
pub use simplify::{
    douglas_peucker_indices, radial_distance_indices, simplify, simplify_douglas_peucker,
    simplify_indices, simplify_radial_distance, Simplify, SimplifyConfig, DEFAULT_SQ_TOLERANCE,
};
