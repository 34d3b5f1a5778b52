//! European option contract definitions.
//!
//! This module provides the immutable option contract consumed by every
//! pricing engine, together with its validation errors.
//!
//! # Architecture
//!
//! The contract is a plain `Copy` value validated once at construction.
//! Pricers receive it read-only; there is no mutation and no lifecycle
//! beyond the pricing call.

mod contract;
mod error;
mod payoff;

// Re-export all public types
pub use contract::OptionContract;
pub use error::ContractError;
pub use payoff::OptionSide;
