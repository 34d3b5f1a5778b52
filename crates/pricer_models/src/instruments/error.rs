//! Contract validation error types.
//!
//! This module provides structured error handling for option contract
//! construction.

use thiserror::Error;

/// Contract validation errors.
///
/// Each variant carries the offending value so callers can report exactly
/// what was rejected.
///
/// # Variants
/// - `InvalidSpot`: Spot price is not finite and strictly positive
/// - `InvalidStrike`: Strike price is not finite and strictly positive
/// - `InvalidExpiry`: Time to expiry is not finite and strictly positive
/// - `InvalidVolatility`: Volatility is not finite and strictly positive
///
/// # Examples
/// ```
/// use pricer_models::instruments::ContractError;
///
/// let err = ContractError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price (non-positive or non-finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry time (non-positive or non-finite).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (non-positive or non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },
}
