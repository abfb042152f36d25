//! Error types for polysimplify.

use thiserror::Error;

/// Errors reported when validating a [`SimplifyConfig`](crate::SimplifyConfig).
///
/// The simplification passes themselves cannot fail; these errors only
/// arise at the configuration boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimplifyError {
    /// Tolerance is below zero.
    #[error("tolerance must be non-negative, got {tolerance}")]
    NegativeTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },

    /// Tolerance is NaN or infinite.
    #[error("tolerance must be finite, got {tolerance}")]
    NonFiniteTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },
}
