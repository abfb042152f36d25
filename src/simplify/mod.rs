//! Polyline simplification.
//!
//! [`simplify`] chains the two passes: a linear radial-distance filter that
//! thins dense input cheaply, followed by Ramer-Douglas-Peucker over whatever
//! survives. Setting `highest_quality` skips the radial filter so that RDP
//! sees every original point, which costs time but can pick better pivots.

mod config;
mod radial;
mod rdp;

use num_traits::Float;

use crate::primitives::Vertex;

pub use config::SimplifyConfig;
pub use radial::{radial_distance_indices, simplify_radial_distance};
pub use rdp::{douglas_peucker_indices, simplify_douglas_peucker};

/// Squared tolerance used when no tolerance is given.
pub const DEFAULT_SQ_TOLERANCE: f64 = 1.0;

/// Squares `tolerance`, falling back to [`DEFAULT_SQ_TOLERANCE`].
///
/// The value is squared as-is, so a negative tolerance acts like its
/// magnitude. Use [`SimplifyConfig::validate`] to reject it instead.
#[inline]
pub fn sq_tolerance<F: Float>(tolerance: Option<F>) -> F {
    match tolerance {
        Some(t) => t * t,
        None => F::one(),
    }
}

/// Simplifies a polyline with a radial-distance pre-pass followed by
/// Ramer-Douglas-Peucker.
///
/// # Arguments
///
/// * `points` - The input polyline
/// * `tolerance` - Maximum deviation, in coordinate units. `None` uses a
///   squared tolerance of [`DEFAULT_SQ_TOLERANCE`].
/// * `highest_quality` - Skip the radial pre-pass and run RDP on the raw input
///
/// # Returns
///
/// An ordered subsequence of `points`. Inputs of two points or fewer are
/// returned unchanged; otherwise the first and last points are always kept.
///
/// # Example
///
/// ```
/// use polysimplify::{simplify, Point2};
///
/// let diagonal: Vec<Point2<f64>> = (0..10)
///     .map(|i| Point2::new(i as f64, i as f64))
///     .collect();
///
/// let simplified = simplify(&diagonal, Some(1.0), false);
/// assert_eq!(simplified, vec![Point2::new(0.0, 0.0), Point2::new(9.0, 9.0)]);
/// ```
pub fn simplify<P: Vertex + Clone>(
    points: &[P],
    tolerance: Option<P::Scalar>,
    highest_quality: bool,
) -> Vec<P> {
    simplify_indices(points, tolerance, highest_quality)
        .into_iter()
        .map(|i| points[i].clone())
        .collect()
}

/// Same as [`simplify`] but returns ascending indices into `points`.
pub fn simplify_indices<P: Vertex>(
    points: &[P],
    tolerance: Option<P::Scalar>,
    highest_quality: bool,
) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let sq_tolerance = sq_tolerance(tolerance);

    let indices = if highest_quality {
        douglas_peucker_indices(points, sq_tolerance)
    } else {
        let radial = radial_distance_indices(points, sq_tolerance);
        let filtered: Vec<&P> = radial.iter().map(|&i| &points[i]).collect();
        douglas_peucker_indices(&filtered, sq_tolerance)
            .into_iter()
            .map(|i| radial[i])
            .collect()
    };

    log::debug!(
        "simplified {} points to {} (highest_quality: {})",
        n,
        indices.len(),
        highest_quality
    );

    indices
}

/// Method-style access to [`simplify`] on slices and vectors of vertices.
///
/// # Example
///
/// ```
/// use polysimplify::Simplify;
///
/// let trace = vec![(0.0, 0.0), (1.0, 0.01), (2.0, 0.0), (3.0, 4.0), (4.0, 0.0)];
/// let simplified = trace.simplify(Some(0.5), true);
/// assert_eq!(simplified, vec![(0.0, 0.0), (2.0, 0.0), (3.0, 4.0), (4.0, 0.0)]);
/// ```
pub trait Simplify {
    /// Coordinate type of the tolerance.
    type Scalar;
    /// Simplified collection type.
    type Output;

    /// Simplifies `self`; see [`simplify`].
    fn simplify(&self, tolerance: Option<Self::Scalar>, highest_quality: bool) -> Self::Output;
}

impl<P: Vertex + Clone> Simplify for [P] {
    type Scalar = P::Scalar;
    type Output = Vec<P>;

    fn simplify(&self, tolerance: Option<P::Scalar>, highest_quality: bool) -> Vec<P> {
        simplify(self, tolerance, highest_quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Marked, Point2};

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn test_trivial_inputs_unchanged() {
        let empty: Vec<Point2<f64>> = vec![];
        assert!(simplify(&empty, Some(1.0), false).is_empty());

        let single = pts(&[(1.0, 1.0)]);
        assert_eq!(simplify(&single, Some(1.0), false), single);

        // Two coincident points are not merged.
        let two = pts(&[(1.0, 1.0), (1.0, 1.0)]);
        assert_eq!(simplify(&two, Some(100.0), false), two);
        assert_eq!(simplify(&two, Some(100.0), true), two);
    }

    #[test]
    fn test_sq_tolerance() {
        assert_eq!(sq_tolerance(Some(3.0_f64)), 9.0);
        assert_eq!(sq_tolerance(Some(-3.0_f64)), 9.0);
        assert_eq!(sq_tolerance::<f32>(None), 1.0);
        assert_eq!(sq_tolerance::<f64>(None), DEFAULT_SQ_TOLERANCE);
    }

    #[test]
    fn test_diagonal_collapses_to_endpoints() {
        let points: Vec<Point2<f64>> = (0..10).map(|i| Point2::new(i as f64, i as f64)).collect();
        for highest_quality in [false, true] {
            let simplified = simplify(&points, Some(1.0), highest_quality);
            assert_eq!(simplified, vec![points[0], points[9]]);
        }
    }

    #[test]
    fn test_default_tolerance_matches_one() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.5), (2.0, 3.0), (3.0, 0.9), (4.0, 0.0)]);
        assert_eq!(
            simplify(&points, None, false),
            simplify(&points, Some(1.0), false)
        );
    }

    #[test]
    fn test_spike_apex_retained() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 10.0), (2.0, 0.0), (3.0, 0.0)]);
        for highest_quality in [false, true] {
            let simplified = simplify(&points, Some(0.1), highest_quality);
            assert_eq!(simplified.first(), Some(&points[0]));
            assert_eq!(simplified.last(), Some(&points[4]));
            assert!(simplified.contains(&Point2::new(1.0, 10.0)));
        }
    }

    #[test]
    fn test_highest_quality_can_differ() {
        // The radial pass drops (2.5, 1.7) for sitting within tolerance of
        // (2, 0.9), yet it is the point farthest from the overall chord.
        let points = pts(&[(0.0, 0.0), (2.0, 0.9), (2.5, 1.7), (5.0, 0.0)]);
        assert_eq!(radial_distance_indices(&points, 1.0), vec![0, 1, 3]);

        let fast = simplify_indices(&points, Some(1.0), false);
        let best = simplify_indices(&points, Some(1.0), true);

        assert_eq!(fast, vec![0, 3]);
        assert_eq!(best, vec![0, 2, 3]);
    }

    #[test]
    fn test_indices_map_back_through_radial_pass() {
        let points = pts(&[
            (0.0, 0.0),
            (0.1, 0.0),
            (0.2, 0.0),
            (5.0, 5.0),
            (5.1, 5.0),
            (10.0, 0.0),
        ]);
        assert_eq!(simplify_indices(&points, Some(1.0), false), vec![0, 3, 5]);
    }

    #[test]
    fn test_retained_point_reaches_rdp_but_is_not_forced() {
        let points = vec![
            Marked::unmarked(Point2::new(0.0, 0.0)),
            Marked::retained(Point2::new(0.1, 0.0)),
            Marked::unmarked(Point2::new(10.0, 0.0)),
        ];
        let simplified = simplify(&points, Some(1.0), false);
        assert_eq!(simplified, vec![points[0], points[2]]);
    }

    #[test]
    fn test_extension_trait() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(points.simplify(None, false), vec![points[0], points[2]]);
        assert_eq!(points[..2].simplify(None, false), points[..2].to_vec());
    }
}
