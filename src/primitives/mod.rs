//! Floating-point geometric primitives and the vertex abstraction.

mod point2;
mod segment2;
mod vec2;
mod vertex;

pub use point2::Point2;
pub use segment2::Segment2;
pub use vec2::Vec2;
pub use vertex::{Marked, Vertex};
