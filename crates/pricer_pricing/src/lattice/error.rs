//! Error and warning types for the binomial tree engine.

use thiserror::Error;

/// Binomial tree pricing errors.
///
/// # Variants
/// - `InvalidStepCount`: step count of zero
/// - `DegenerateTree`: the up and down factors coincide, so the
///   risk-neutral probability is undefined
/// - `NonFiniteProbability`: the computed probability is NaN or infinite
///
/// # Examples
/// ```
/// use pricer_pricing::lattice::LatticeError;
///
/// let err = LatticeError::InvalidStepCount { steps: 0 };
/// assert!(format!("{}", err).contains("step count"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// Invalid step count (must be at least 1).
    #[error("Invalid step count {steps}: must be at least 1")]
    InvalidStepCount {
        /// The invalid step count
        steps: usize,
    },

    /// Up and down factors coincide (u - d = 0), leaving the
    /// risk-neutral probability undefined.
    #[error("Degenerate tree: u = d = {factor}, risk-neutral probability undefined")]
    DegenerateTree {
        /// The coinciding move factor
        factor: f64,
    },

    /// The risk-neutral probability is NaN or infinite.
    #[error("Non-finite risk-neutral probability p = {probability}")]
    NonFiniteProbability {
        /// The non-finite probability value
        probability: f64,
    },
}

/// Non-fatal numerical warning raised by the binomial tree engine.
///
/// A finite risk-neutral probability outside [0, 1] means the chosen
/// steps/volatility/rate combination is numerically invalid for the model;
/// the price is still returned, and the caller may retry with a different
/// step count.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProbabilityWarning {
    /// Risk-neutral up-probability outside [0, 1].
    #[error("Risk-neutral probability p = {probability} outside [0, 1] at {steps} steps")]
    OutOfRange {
        /// The out-of-range probability
        probability: f64,
        /// The step count that produced it
        steps: usize,
    },
}
