//! Closed-form pricing for European options.
//!
//! This module provides:
//! - Black-Scholes prices for lognormal dynamics
//! - Standard normal distribution functions
//!
//! ## Design Principles
//!
//! - **Numerical accuracy**: the CDF is erfc-based (full double precision),
//!   not a polynomial approximation
//! - **Fail on degeneracy**: a vanishing σ√T denominator is an error, never
//!   a NaN price

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main items at module level
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
