//! Validated simplification settings.

use num_traits::Float;

use crate::error::SimplifyError;
use crate::primitives::Vertex;

/// Settings for [`simplify`](super::simplify), checked before use.
///
/// Where the free functions accept any tolerance, a config rejects negative
/// and non-finite values up front.
///
/// # Example
///
/// ```
/// use polysimplify::{Point2, SimplifyConfig, SimplifyError};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.2),
///     Point2::new(2.0, 0.0),
/// ];
///
/// let config = SimplifyConfig::new().with_tolerance(0.5);
/// assert_eq!(config.simplify(&points)?.len(), 2);
///
/// let bad = SimplifyConfig::new().with_tolerance(-1.0);
/// assert!(bad.simplify(&points).is_err());
/// # Ok::<(), SimplifyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimplifyConfig<F> {
    /// Maximum deviation in coordinate units. `None` means a squared
    /// tolerance of [`DEFAULT_SQ_TOLERANCE`](super::DEFAULT_SQ_TOLERANCE).
    pub tolerance: Option<F>,
    /// Skip the radial-distance pre-pass.
    pub highest_quality: bool,
}

impl<F> Default for SimplifyConfig<F> {
    fn default() -> Self {
        Self {
            tolerance: None,
            highest_quality: false,
        }
    }
}

impl<F: Float> SimplifyConfig<F> {
    /// Creates a config with the default tolerance and the radial pre-pass on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance.
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Enables or disables highest-quality mode.
    pub fn with_highest_quality(mut self, highest_quality: bool) -> Self {
        self.highest_quality = highest_quality;
        self
    }

    /// Checks that the tolerance, if set, is finite and non-negative.
    pub fn validate(&self) -> Result<(), SimplifyError> {
        let Some(tolerance) = self.tolerance else {
            return Ok(());
        };

        let reported = num_traits::cast::<F, f64>(tolerance).unwrap_or(f64::NAN);
        if !tolerance.is_finite() {
            return Err(SimplifyError::NonFiniteTolerance {
                tolerance: reported,
            });
        }
        if tolerance < F::zero() {
            return Err(SimplifyError::NegativeTolerance {
                tolerance: reported,
            });
        }

        Ok(())
    }

    /// Returns the squared tolerance the passes will compare against.
    pub fn sq_tolerance(&self) -> Result<F, SimplifyError> {
        self.validate()?;
        Ok(super::sq_tolerance(self.tolerance))
    }

    /// Validates the config and simplifies `points`.
    pub fn simplify<P>(&self, points: &[P]) -> Result<Vec<P>, SimplifyError>
    where
        P: Vertex<Scalar = F> + Clone,
    {
        self.validate()?;
        Ok(super::simplify(points, self.tolerance, self.highest_quality))
    }

    /// Validates the config and returns the indices of the kept points.
    pub fn simplify_indices<P>(&self, points: &[P]) -> Result<Vec<usize>, SimplifyError>
    where
        P: Vertex<Scalar = F>,
    {
        self.validate()?;
        Ok(super::simplify_indices(
            points,
            self.tolerance,
            self.highest_quality,
        ))
    }
}
