//! Radial distance simplification.
//!
//! A fast O(n) pass that drops points lying within the tolerance of the last
//! kept point. It is used as a pre-filter in front of Douglas-Peucker to
//! shrink dense input (GPS jitter, oversampled traces) cheaply.

use crate::distance::squared_distance;
use crate::primitives::Vertex;

/// Simplifies a polyline by removing points within a squared distance of
/// the last kept point.
///
/// Walks the points in order and keeps a point if it is marked as retained
/// (see [`Vertex::is_retained`]) or if its squared distance to the last kept
/// point is strictly greater than `sq_tolerance`. The first point is always
/// kept, and the last point is appended if the scan did not already keep it.
///
/// # Arguments
///
/// * `points` - The input polyline
/// * `sq_tolerance` - Squared distance threshold
///
/// # Complexity
///
/// O(n) time, O(k) space where k is the number of output points.
///
/// # Example
///
/// ```
/// use polysimplify::{simplify_radial_distance, Point2};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.1, 0.0),  // Too close, removed
///     Point2::new(0.2, 0.0),  // Too close, removed
///     Point2::new(1.0, 0.0),  // Far enough, kept
///     Point2::new(1.05, 0.0), // Too close, but the last point is always kept
/// ];
///
/// let simplified = simplify_radial_distance(&points, 0.25);
/// assert_eq!(simplified, vec![points[0], points[3], points[4]]);
/// ```
pub fn simplify_radial_distance<P: Vertex + Clone>(points: &[P], sq_tolerance: P::Scalar) -> Vec<P> {
    radial_distance_indices(points, sq_tolerance)
        .into_iter()
        .map(|i| points[i].clone())
        .collect()
}

/// Returns indices of points to keep after radial simplification.
///
/// Indices are ascending and refer to `points`. Useful when per-point
/// attributes (timestamps, elevations) must follow the kept points.
pub fn radial_distance_indices<P: Vertex>(points: &[P], sq_tolerance: P::Scalar) -> Vec<usize> {
    let Some(last) = points.len().checked_sub(1) else {
        return Vec::new();
    };

    let mut indices = vec![0];
    let mut last_kept = 0;

    for (i, point) in points.iter().enumerate().skip(1) {
        if point.is_retained() || squared_distance(point, &points[last_kept]) > sq_tolerance {
            indices.push(i);
            last_kept = i;
        }
    }

    if last_kept != last {
        indices.push(last);
    }

    log::trace!(
        "radial distance pass kept {} of {} points",
        indices.len(),
        points.len()
    );

    indices
}
