//! Ramer-Douglas-Peucker polyline simplification.
//!
//! The RDP algorithm keeps the point farthest from the chord joining two
//! kept points whenever that distance exceeds the tolerance, then repeats on
//! both halves. Ranges whose farthest point is within tolerance collapse to
//! their endpoints.
//!
//! The divide-and-conquer runs on an explicit work-list of index ranges, so
//! memory use is bounded by the input rather than by the call stack.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use crate::distance::squared_segment_distance;
use crate::primitives::Vertex;

/// Simplifies a polyline using the Ramer-Douglas-Peucker algorithm.
///
/// Returns a new vector containing only the points that remain after
/// simplification. The first and last points are always preserved. The
/// force-retain flag of [`Vertex::is_retained`] is not consulted here.
///
/// # Arguments
///
/// * `points` - The input polyline as a slice of points
/// * `sq_tolerance` - Squared distance tolerance. Points whose squared
///   distance to the current chord does not exceed it are removed.
///
/// # Returns
///
/// A new vector with the simplified polyline. Inputs with fewer than three
/// points are returned whole.
///
/// # Example
///
/// ```
/// use polysimplify::{simplify_douglas_peucker, Point2};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.1),  // Close to the chord, removed
///     Point2::new(2.0, 0.0),
///     Point2::new(3.0, 2.0),  // Far from the chord, kept
///     Point2::new(4.0, 0.0),
/// ];
///
/// let simplified = simplify_douglas_peucker(&points, 0.25);
/// assert_eq!(simplified, vec![points[0], points[2], points[3], points[4]]);
/// ```
pub fn simplify_douglas_peucker<P: Vertex + Clone>(points: &[P], sq_tolerance: P::Scalar) -> Vec<P> {
    douglas_peucker_indices(points, sq_tolerance)
        .into_iter()
        .map(|i| points[i].clone())
        .collect()
}

/// Simplifies a polyline and returns the indices of retained points.
///
/// This is useful when you need to preserve the relationship between
/// the simplified points and associated data (e.g., timestamps, elevations).
///
/// # Returns
///
/// A vector of ascending indices into `points`. Always includes index 0 and
/// the last index when the input is not empty.
pub fn douglas_peucker_indices<P: Vertex>(points: &[P], sq_tolerance: P::Scalar) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }

    // Track which points to keep
    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    // Pending (first, last) ranges, each with at least one interior point.
    // The right half is pushed before the left so ranges are visited left to
    // right, the same order a recursive descent would take.
    let mut pending = vec![(0, n - 1)];

    while let Some((first, last)) = pending.pop() {
        let Some(index) = farthest_point(points, first, last, sq_tolerance) else {
            continue;
        };

        keep[index] = true;

        if last - index > 1 {
            pending.push((index, last));
        }
        if index - first > 1 {
            pending.push((first, index));
        }
    }

    let indices: Vec<usize> = keep
        .iter()
        .enumerate()
        .filter_map(|(i, &k)| if k { Some(i) } else { None })
        .collect();

    log::trace!(
        "douglas-peucker pass kept {} of {} points",
        indices.len(),
        n
    );

    indices
}

/// Finds the interior point of `(first, last)` farthest from the chord
/// `points[first]..points[last]`, if it lies beyond `sq_tolerance`.
///
/// The scan keeps the first index on ties. Distances that compare false
/// against the running maximum (including NaN) are never selected.
fn farthest_point<P: Vertex>(
    points: &[P],
    first: usize,
    last: usize,
    sq_tolerance: P::Scalar,
) -> Option<usize> {
    let mut max_sq_dist = sq_tolerance;
    let mut index = None;

    for (i, point) in points.iter().enumerate().take(last).skip(first + 1) {
        let sq_dist = squared_segment_distance(point, &points[first], &points[last]);
        if sq_dist > max_sq_dist {
            index = Some(i);
            max_sq_dist = sq_dist;
        }
    }

    index
}
