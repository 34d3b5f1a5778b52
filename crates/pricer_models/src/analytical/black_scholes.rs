//! Black-Scholes pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::{OptionContract, OptionSide};

/// Returns the σ√T denominator, failing if it is degenerate.
///
/// With a validated contract this can only degenerate through
/// floating-point underflow of the product σ·√T.
#[inline]
fn vol_sqrt_t(contract: &OptionContract) -> Result<f64, AnalyticalError> {
    let value = contract.volatility() * contract.expiry().sqrt();
    if !value.is_finite() || value <= 0.0 {
        return Err(AnalyticalError::DegenerateVolTime { vol_sqrt_t: value });
    }
    Ok(value)
}

/// Computes the d₁ term of the Black-Scholes formula.
///
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
///
/// # Errors
/// Returns [`AnalyticalError::DegenerateVolTime`] if σ√T underflows to
/// zero.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::{d1, d2};
/// use pricer_models::instruments::{OptionContract, OptionSide};
///
/// let contract =
///     OptionContract::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionSide::Call).unwrap();
///
/// // d2 = d1 - σ√T
/// let diff = d1(&contract).unwrap() - d2(&contract).unwrap();
/// assert!((diff - 0.2).abs() < 1e-12);
/// ```
#[inline]
pub fn d1(contract: &OptionContract) -> Result<f64, AnalyticalError> {
    let denom = vol_sqrt_t(contract)?;

    let log_moneyness = (contract.spot() / contract.strike()).ln();
    let vol = contract.volatility();
    let drift = (contract.rate() + 0.5 * vol * vol) * contract.expiry();

    Ok((log_moneyness + drift) / denom)
}

/// Computes the d₂ term of the Black-Scholes formula.
///
/// d₂ = d₁ - σ√T
///
/// # Errors
/// Returns [`AnalyticalError::DegenerateVolTime`] if σ√T underflows to
/// zero.
#[inline]
pub fn d2(contract: &OptionContract) -> Result<f64, AnalyticalError> {
    Ok(d1(contract)? - vol_sqrt_t(contract)?)
}

/// Prices a European option under Black-Scholes.
///
/// Deterministic: the same contract always yields the same price. The
/// result is non-negative for any valid contract.
///
/// # Errors
/// Returns [`AnalyticalError::DegenerateVolTime`] if the σ√T denominator
/// degenerates.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes;
/// use pricer_models::instruments::{OptionContract, OptionSide};
///
/// let call =
///     OptionContract::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionSide::Call).unwrap();
/// let price = black_scholes::price(&call).unwrap();
///
/// // Known reference value for this contract
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
pub fn price(contract: &OptionContract) -> Result<f64, AnalyticalError> {
    let d1 = d1(contract)?;
    let d2 = d2(contract)?;

    let spot = contract.spot();
    let discounted_strike = contract.strike() * contract.discount_factor();

    let price = match contract.side() {
        // C = S·N(d₁) - K·e^(-rT)·N(d₂)
        OptionSide::Call => spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
        OptionSide::Put => discounted_strike * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };

    // Deep out-of-the-money prices can round a hair below zero
    Ok(price.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn contract(side: OptionSide) -> OptionContract {
        OptionContract::new(100.0, 100.0, 0.05, 1.0, 0.2, side).unwrap()
    }

    // ==========================================================
    // d1/d2 tests
    // ==========================================================

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T / 2
        let c = OptionContract::new(100.0, 100.0, 0.0, 1.0, 0.2, OptionSide::Call).unwrap();
        assert_relative_eq!(d1(&c).unwrap(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d2_atm_zero_rate() {
        // ATM with r=0: d2 = -σ√T / 2
        let c = OptionContract::new(100.0, 100.0, 0.0, 1.0, 0.2, OptionSide::Call).unwrap();
        assert_relative_eq!(d2(&c).unwrap(), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let c = OptionContract::new(100.0, 105.0, 0.05, 0.5, 0.2, OptionSide::Call).unwrap();
        let expected = d1(&c).unwrap() - 0.2 * 0.5_f64.sqrt();
        assert_relative_eq!(d2(&c).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_deep_itm_positive() {
        let c = OptionContract::new(150.0, 100.0, 0.05, 1.0, 0.2, OptionSide::Call).unwrap();
        assert!(d1(&c).unwrap() > 1.0);
    }

    #[test]
    fn test_d1_deep_otm_negative() {
        let c = OptionContract::new(50.0, 100.0, 0.05, 1.0, 0.2, OptionSide::Call).unwrap();
        assert!(d1(&c).unwrap() < -1.0);
    }

    // ==========================================================
    // Price tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // Known reference: S=100, K=100, r=0.05, σ=0.2, T=1 → C ≈ 10.4506
        let price = price(&contract(OptionSide::Call)).unwrap();
        assert_relative_eq!(price, 10.4506, epsilon = 1e-3);
    }

    #[test]
    fn test_put_price_reference_value() {
        // Known reference: S=100, K=100, r=0.05, σ=0.2, T=1 → P ≈ 5.5735
        let price = price(&contract(OptionSide::Put)).unwrap();
        assert_relative_eq!(price, 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_deep_itm_call_above_forward_intrinsic() {
        let c = OptionContract::new(200.0, 100.0, 0.05, 1.0, 0.2, OptionSide::Call).unwrap();
        let intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(price(&c).unwrap() >= intrinsic - 0.01);
    }

    #[test]
    fn test_deep_otm_call_near_zero() {
        let c = OptionContract::new(50.0, 100.0, 0.05, 1.0, 0.2, OptionSide::Call).unwrap();
        let p = price(&c).unwrap();
        assert!(p < 0.01);
        assert!(p >= 0.0);
    }

    #[test]
    fn test_determinism() {
        let c = contract(OptionSide::Call);
        assert_eq!(price(&c).unwrap(), price(&c).unwrap());
    }

    // ==========================================================
    // Put-call parity tests
    // ==========================================================

    #[test]
    fn test_put_call_parity() {
        // C - P = S - K·e^(-rT)
        let call = price(&contract(OptionSide::Call)).unwrap();
        let put = price(&contract(OptionSide::Put)).unwrap();
        let forward = 100.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-10);
    }

    #[test]
    fn test_put_call_parity_various_strikes() {
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let call = price(
                &OptionContract::new(100.0, strike, 0.05, 1.0, 0.2, OptionSide::Call).unwrap(),
            )
            .unwrap();
            let put = price(
                &OptionContract::new(100.0, strike, 0.05, 1.0, 0.2, OptionSide::Put).unwrap(),
            )
            .unwrap();
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        let call =
            price(&OptionContract::new(100.0, 100.0, -0.02, 1.0, 0.2, OptionSide::Call).unwrap())
                .unwrap();
        let put =
            price(&OptionContract::new(100.0, 100.0, -0.02, 1.0, 0.2, OptionSide::Put).unwrap())
                .unwrap();
        let forward = 100.0 - 100.0 * (0.02_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-10);
    }

    // ==========================================================
    // Degenerate denominator tests
    // ==========================================================

    #[test]
    fn test_subnormal_volatility_degenerates() {
        // σ and T individually pass validation, but σ·√T underflows to zero
        let c = OptionContract::new(100.0, 100.0, 0.05, 1e-30, 1e-310, OptionSide::Call).unwrap();
        assert!(matches!(
            price(&c),
            Err(AnalyticalError::DegenerateVolTime { .. })
        ));
    }

    #[test]
    fn test_degenerate_contract_never_yields_nan() {
        let c = OptionContract::new(100.0, 100.0, 0.05, 1e-30, 1e-310, OptionSide::Put).unwrap();
        if let Ok(p) = price(&c) {
            assert!(p.is_finite());
        }
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    proptest! {
        #[test]
        fn prop_put_call_parity(
            spot in 10.0..200.0f64,
            strike in 10.0..200.0f64,
            rate in -0.05..0.10f64,
            expiry in 0.05..3.0f64,
            vol in 0.01..0.8f64,
        ) {
            let call = price(
                &OptionContract::new(spot, strike, rate, expiry, vol, OptionSide::Call).unwrap(),
            )
            .unwrap();
            let put = price(
                &OptionContract::new(spot, strike, rate, expiry, vol, OptionSide::Put).unwrap(),
            )
            .unwrap();
            let forward = spot - strike * (-rate * expiry).exp();
            prop_assert!((call - put - forward).abs() < 1e-6);
        }

        #[test]
        fn prop_prices_non_negative(
            spot in 10.0..200.0f64,
            strike in 10.0..200.0f64,
            rate in -0.05..0.10f64,
            expiry in 0.05..3.0f64,
            vol in 0.01..0.8f64,
        ) {
            for side in [OptionSide::Call, OptionSide::Put] {
                let p = price(
                    &OptionContract::new(spot, strike, rate, expiry, vol, side).unwrap(),
                )
                .unwrap();
                prop_assert!(p >= 0.0);
            }
        }

        #[test]
        fn prop_call_bounded_by_spot(
            spot in 10.0..200.0f64,
            strike in 10.0..200.0f64,
            expiry in 0.05..3.0f64,
            vol in 0.01..0.8f64,
        ) {
            let p = price(
                &OptionContract::new(spot, strike, 0.05, expiry, vol, OptionSide::Call).unwrap(),
            )
            .unwrap();
            prop_assert!(p <= spot);
        }
    }
}
