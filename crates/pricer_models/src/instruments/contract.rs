//! European option contract.
//!
//! This module provides the immutable contract value shared by all
//! pricing engines, with validation at construction.

use super::error::ContractError;
use super::payoff::OptionSide;

/// Immutable European option contract.
///
/// Carries the underlying spot price (S), strike (K), annualised risk-free
/// rate (r), time to expiry in years (T), annualised volatility (σ), and the
/// option side. Spot, strike, expiry, and volatility are validated to be
/// finite and strictly positive at construction; the rate may be any real
/// (negative rates are allowed).
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionSide};
///
/// let contract =
///     OptionContract::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionSide::Call).unwrap();
/// assert_eq!(contract.spot(), 100.0);
/// assert_eq!(contract.strike(), 100.0);
///
/// // Invalid volatility is rejected, never clamped
/// assert!(OptionContract::new(100.0, 100.0, 0.05, 1.0, 0.0, OptionSide::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    volatility: f64,
    side: OptionSide,
}

impl OptionContract {
    /// Creates a new contract with validation.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate` - Risk-free rate (annualised; any real)
    /// * `expiry` - Time to expiry in years (must be positive)
    /// * `volatility` - Volatility (annualised; must be positive)
    /// * `side` - Call or put
    ///
    /// # Errors
    /// Returns a [`ContractError`] naming the first field that is
    /// non-positive or non-finite.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{ContractError, OptionContract, OptionSide};
    ///
    /// let invalid = OptionContract::new(-100.0, 100.0, 0.05, 1.0, 0.2, OptionSide::Put);
    /// assert_eq!(invalid.unwrap_err(), ContractError::InvalidSpot { spot: -100.0 });
    /// ```
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        expiry: f64,
        volatility: f64,
        side: OptionSide,
    ) -> Result<Self, ContractError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(ContractError::InvalidSpot { spot });
        }

        if !strike.is_finite() || strike <= 0.0 {
            return Err(ContractError::InvalidStrike { strike });
        }

        if !expiry.is_finite() || expiry <= 0.0 {
            return Err(ContractError::InvalidExpiry { expiry });
        }

        if !volatility.is_finite() || volatility <= 0.0 {
            return Err(ContractError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            expiry,
            volatility,
            side,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the option side.
    #[inline]
    pub fn side(&self) -> OptionSide {
        self.side
    }

    /// Evaluates the payoff at expiry for a given terminal price.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{OptionContract, OptionSide};
    ///
    /// let put = OptionContract::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionSide::Put).unwrap();
    /// assert_eq!(put.payoff(90.0), 10.0);
    /// ```
    #[inline]
    pub fn payoff(&self, terminal: f64) -> f64 {
        self.side.payoff(terminal, self.strike)
    }

    /// Returns the discount factor e^(-rT) to the contract's expiry.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }
}
