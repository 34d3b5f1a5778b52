//! # Pricer Models
//!
//! Option contract definitions and closed-form analytics.
//!
//! This crate provides:
//! - The validated European option contract (`OptionContract`, `OptionSide`)
//! - Standard normal distribution functions (erfc-based CDF)
//! - The Black-Scholes closed-form pricer
//!
//! ## Design Principles
//!
//! - **Enum-based option side** for static dispatch (no string comparisons
//!   past the boundary)
//! - **Validation at construction**: a contract that exists is priceable;
//!   non-positive spot, strike, expiry, or volatility never reach a pricer
//! - **Structured errors** per module, never silent clamping

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
