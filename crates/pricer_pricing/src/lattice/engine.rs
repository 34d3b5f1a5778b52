//! Binomial tree engine implementation.

use pricer_models::instruments::OptionContract;
use tracing::warn;

use super::error::{LatticeError, ProbabilityWarning};

/// Result of a binomial tree pricing.
///
/// Carries the risk-neutral up-probability actually used, plus a warning
/// when that probability fell outside [0, 1] (the price is then
/// numerically suspect and the caller may retry with different steps).
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeResult {
    /// Present value of the option.
    pub price: f64,
    /// Risk-neutral up-probability used in the backward fold.
    pub up_probability: f64,
    /// Set when the up-probability fell outside [0, 1].
    pub warning: Option<ProbabilityWarning>,
}

/// Cox-Ross-Rubinstein binomial tree engine for European options.
///
/// Cost is O(steps²) time and O(steps) space; no upper bound is imposed on
/// the step count, but very deep trees risk long runtimes and overflow of
/// the u^steps terminal factor.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionSide};
/// use pricer_pricing::lattice::BinomialTreeEngine;
///
/// let engine = BinomialTreeEngine::new(100).unwrap();
/// let contract =
///     OptionContract::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionSide::Call).unwrap();
///
/// let result = engine.price(&contract).unwrap();
/// // Within 0.05 of the closed-form 10.4506 at 100 steps
/// assert!((result.price - 10.4506).abs() < 0.05);
/// assert!(result.warning.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct BinomialTreeEngine {
    steps: usize,
}

impl BinomialTreeEngine {
    /// Creates a binomial tree engine with the given number of steps.
    ///
    /// # Errors
    /// Returns [`LatticeError::InvalidStepCount`] if `steps` is zero.
    pub fn new(steps: usize) -> Result<Self, LatticeError> {
        if steps == 0 {
            return Err(LatticeError::InvalidStepCount { steps });
        }
        Ok(Self { steps })
    }

    /// Returns the number of tree steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Prices a European option on a CRR tree.
    ///
    /// Tree parameterisation:
    ///
    /// ```text
    /// dt = T / steps
    /// u  = e^(σ·√dt),  d = 1/u
    /// p  = (e^(r·dt) - d) / (u - d)
    /// ```
    ///
    /// # Errors
    /// - [`LatticeError::DegenerateTree`] if u = d (σ·√dt underflowed)
    /// - [`LatticeError::NonFiniteProbability`] if p is NaN or infinite
    ///
    /// A finite p outside [0, 1] is not an error: the price is returned
    /// with [`LatticeResult::warning`] set and a `tracing` warning emitted.
    pub fn price(&self, contract: &OptionContract) -> Result<LatticeResult, LatticeError> {
        let steps = self.steps;
        let dt = contract.expiry() / steps as f64;

        let u = (contract.volatility() * dt.sqrt()).exp();
        let d = 1.0 / u;
        if u == d {
            return Err(LatticeError::DegenerateTree { factor: u });
        }

        let growth = (contract.rate() * dt).exp();
        let p = (growth - d) / (u - d);
        if !p.is_finite() {
            return Err(LatticeError::NonFiniteProbability { probability: p });
        }

        let warning = if (0.0..=1.0).contains(&p) {
            None
        } else {
            warn!(
                probability = p,
                steps, "risk-neutral probability outside [0, 1]; price is numerically suspect"
            );
            Some(ProbabilityWarning::OutOfRange {
                probability: p,
                steps,
            })
        };

        let disc = (-contract.rate() * dt).exp();

        let mut values = vec![0.0_f64; steps + 1];
        let price = rollback_european(&mut values, steps, contract, u, d, p, disc);

        Ok(LatticeResult {
            price,
            up_probability: p,
            warning,
        })
    }
}

/// Fills the terminal layer and folds backward to the root value.
///
/// Node `i` of the terminal layer carries the price S·u^(steps-i)·d^i,
/// computed by multiplicative recurrence rather than per-node powers.
/// The fold mutates `values` in place over the shrinking triangular
/// bound `0..=j`.
fn rollback_european(
    values: &mut [f64],
    steps: usize,
    contract: &OptionContract,
    u: f64,
    d: f64,
    p: f64,
    disc: f64,
) -> f64 {
    debug_assert!(values.len() > steps);

    let ratio = d / u;
    let one_minus_p = 1.0 - p;

    // Terminal payoffs: start at S·u^steps, multiply by d/u per node.
    {
        let mut st = contract.spot() * u.powi(steps as i32);
        for value in values.iter_mut().take(steps + 1) {
            *value = contract.payoff(st);
            st *= ratio;
        }
    }

    // Discounted expectation back to the root; European, so no exercise
    // comparison in the fold.
    for j in (0..steps).rev() {
        for i in 0..=j {
            values[i] = (p * values[i] + one_minus_p * values[i + 1]) * disc;
        }
    }

    values[0]
}
