//! Option side definitions.
//!
//! This module provides the two-valued option side (call or put) with
//! intrinsic payoff evaluation.

/// Side of a European option.
///
/// A call pays `max(S - K, 0)` at expiry, a put pays `max(K - S, 0)`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionSide;
///
/// let call = OptionSide::Call;
/// assert_eq!(call.payoff(110.0, 100.0), 10.0);
/// assert_eq!(call.payoff(90.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionSide {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionSide {
    /// Evaluates the intrinsic payoff for a given spot and strike.
    ///
    /// # Arguments
    /// * `spot` - Underlying price at exercise (S)
    /// * `strike` - Strike price (K)
    ///
    /// # Returns
    /// The intrinsic value, always non-negative.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::OptionSide;
    ///
    /// assert_eq!(OptionSide::Put.payoff(90.0, 100.0), 10.0);
    /// assert_eq!(OptionSide::Put.payoff(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionSide::Call => (spot - strike).max(0.0),
            OptionSide::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns whether this side is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionSide::Call)
    }

    /// Returns whether this side is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionSide::Put)
    }
}
