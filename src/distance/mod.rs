//! Squared distance primitives used by the simplification passes.
//!
//! Both functions stay in squared units so callers can compare against a
//! squared tolerance without taking square roots.
//!
//! Non-finite coordinates are not rejected. NaN propagates into the result,
//! and every comparison against a NaN distance is false, so such a vertex
//! is never "far enough" to survive the radial pass and never becomes a
//! Douglas-Peucker pivot.

use crate::primitives::{Segment2, Vertex};

/// Squared Euclidean distance between two vertices.
///
/// # Example
///
/// ```
/// use polysimplify::{squared_distance, Point2};
///
/// let d = squared_distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
/// assert_eq!(d, 25.0);
/// ```
#[inline]
pub fn squared_distance<P: Vertex>(a: &P, b: &P) -> P::Scalar {
    a.to_point().distance_squared(b.to_point())
}

/// Squared distance from `p` to the closest point on the segment
/// `[seg_start, seg_end]`.
///
/// The projection of `p` onto the line through the endpoints is clamped to
/// the segment before measuring. A zero-length segment degrades to the
/// point-to-point distance to `seg_start`.
///
/// # Example
///
/// ```
/// use polysimplify::{squared_segment_distance, Point2};
///
/// let a = Point2::new(0.0, 0.0);
/// let b = Point2::new(10.0, 0.0);
///
/// assert_eq!(squared_segment_distance(&Point2::new(5.0, 3.0), &a, &b), 9.0);
/// // Past the end of the segment: measured to `b`, not to the infinite line.
/// assert_eq!(squared_segment_distance(&Point2::new(14.0, 3.0), &a, &b), 25.0);
/// ```
#[inline]
pub fn squared_segment_distance<P: Vertex>(p: &P, seg_start: &P, seg_end: &P) -> P::Scalar {
    Segment2::new(seg_start.to_point(), seg_end.to_point()).distance_squared_to_point(p.to_point())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Marked, Point2};
    use approx::assert_relative_eq;

    #[test]
    fn test_squared_distance() {
        assert_eq!(squared_distance(&(1.0_f64, 1.0_f64), &(4.0, 5.0)), 25.0);
        assert_eq!(squared_distance(&[2.0_f32, 2.0], &[2.0, 2.0]), 0.0);
        assert_eq!(
            squared_distance(&Point2::new(-1.0_f64, 0.0), &Point2::new(1.0, 0.0)),
            4.0
        );
    }

    #[test]
    fn test_segment_distance_perpendicular() {
        let d = squared_segment_distance(
            &Point2::new(2.0_f64, -1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(4.0, 2.0),
        );
        // |cross| / |b - a| = 8 / sqrt(20), squared = 64 / 20
        assert_relative_eq!(d, 3.2, epsilon = 1e-12);
    }

    #[test]
    fn test_segment_distance_clamps_before_measuring() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(2.0, 0.0);
        // On the infinite line but beyond either end.
        assert_eq!(squared_segment_distance(&Point2::new(5.0, 0.0), &a, &b), 9.0);
        assert_eq!(squared_segment_distance(&Point2::new(-1.0, 0.0), &a, &b), 1.0);
    }

    #[test]
    fn test_segment_distance_degenerate() {
        let a = Point2::new(1.0_f64, 1.0);
        let p = Point2::new(4.0, 5.0);
        assert_eq!(squared_segment_distance(&p, &a, &a), squared_distance(&p, &a));
    }

    #[test]
    fn test_marker_does_not_affect_distance() {
        let p = Marked::retained(Point2::new(0.0_f64, 3.0));
        let a = Marked::unmarked(Point2::new(-1.0, 0.0));
        let b = Marked::unmarked(Point2::new(1.0, 0.0));
        assert_eq!(squared_segment_distance(&p, &a, &b), 9.0);
    }

    #[test]
    fn test_nan_propagates() {
        let d = squared_segment_distance(
            &Point2::new(f64::NAN, 0.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
        );
        assert!(d.is_nan());
        assert!(squared_distance(&Point2::new(0.0, f64::NAN), &Point2::new(0.0, 0.0)).is_nan());
    }
}
