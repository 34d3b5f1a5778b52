//! Error types for the Monte Carlo engine.

use std::fmt;

/// Configuration error for the Monte Carlo pricer.
///
/// These errors occur at build time, before any sampling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Simulation count outside the valid range [1, 100_000_000].
    InvalidSimulationCount(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSimulationCount(count) => {
                write!(
                    f,
                    "Invalid simulation count {}: must be in range [1, 100_000_000]",
                    count
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
