//! # Pricer Engines
//!
//! Numerical pricing engines for European options:
//!
//! - [`lattice`]: Cox-Ross-Rubinstein binomial tree, converging to the
//!   closed form as the step count grows
//! - [`mc`]: Monte Carlo simulation over the risk-neutral terminal
//!   distribution, with seeded reproducibility
//! - [`rng`]: seeded random number generation for the simulation engine
//!
//! Both engines are pure, synchronous, single-threaded computations over a
//! validated [`OptionContract`](pricer_models::instruments::OptionContract);
//! no engine depends on the other.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::{OptionContract, OptionSide};
//! use pricer_pricing::lattice::BinomialTreeEngine;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let contract =
//!     OptionContract::new(100.0, 100.0, 0.05, 1.0, 0.2, OptionSide::Call).unwrap();
//!
//! let tree = BinomialTreeEngine::new(500).unwrap();
//! let lattice_price = tree.price(&contract).unwrap().price;
//!
//! let config = MonteCarloConfig::builder()
//!     .simulations(100_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let mc_price = MonteCarloPricer::new(config).unwrap().price(&contract).price;
//!
//! assert!((lattice_price - mc_price).abs() < 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod lattice;
pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use lattice::{BinomialTreeEngine, LatticeError, LatticeResult, ProbabilityWarning};
pub use mc::{MonteCarloConfig, MonteCarloPricer, PricingResult};
pub use rng::PricerRng;
