//! Error types for closed-form pricing.

use thiserror::Error;

/// Closed-form pricing errors.
///
/// A validated contract guarantees positive σ and T, so the only failure
/// mode left is a derived quantity degenerating through floating-point
/// underflow. That condition is surfaced here rather than propagated as
/// NaN or infinity.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::DegenerateVolTime { vol_sqrt_t: 0.0 };
/// assert!(format!("{}", err).contains("σ√T"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// The σ√T denominator is not strictly positive and finite.
    #[error("Degenerate σ√T = {vol_sqrt_t}: d1/d2 are undefined")]
    DegenerateVolTime {
        /// The degenerate denominator value
        vol_sqrt_t: f64,
    },
}
