//! Cox-Ross-Rubinstein binomial tree engine.
//!
//! Discretises the option's life into `steps` up/down moves, fills the
//! terminal layer with intrinsic payoffs, and folds backward under the
//! risk-neutral probability to the present value. European exercise only:
//! the fold is a pure discounted expectation with no early-exercise
//! comparison.
//!
//! As the step count grows the price converges to the Black-Scholes
//! closed form for the same contract.

pub mod engine;
pub mod error;

// Re-export main types at module level
pub use engine::{BinomialTreeEngine, LatticeResult};
pub use error::{LatticeError, ProbabilityWarning};
