//! Random number generation for the simulation engine.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: an explicit seed always produces the same draw
//!   sequence, so seeded simulations are bit-identical across runs
//! - **Injection**: the generator is owned by the pricer and configured at
//!   construction; there is no module-scope random state
//! - **Static dispatch**: no `Box<dyn Rng>` in the sampling loop

mod prng;

// Public re-exports
pub use prng::PricerRng;
