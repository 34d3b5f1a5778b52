//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Maximum number of simulations allowed.
pub const MAX_SIMULATIONS: usize = 100_000_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying the number of terminal-price draws
/// and an optional seed. Use [`MonteCarloConfig::builder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .simulations(100_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.simulations(), 100_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloConfig {
    /// Number of terminal-price draws.
    simulations: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulations.
    #[inline]
    pub fn simulations(&self) -> usize {
        self.simulations
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `simulations` is 0 or greater than
    /// [`MAX_SIMULATIONS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulations == 0 || self.simulations > MAX_SIMULATIONS {
            return Err(ConfigError::InvalidSimulationCount(self.simulations));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .simulations(1_000_000)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.seed(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    simulations: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulations.
    ///
    /// # Arguments
    ///
    /// * `simulations` - Number of draws in [1, 100_000_000]
    #[inline]
    pub fn simulations(mut self, simulations: usize) -> Self {
        self.simulations = Some(simulations);
        self
    }

    /// Sets the seed for reproducibility.
    ///
    /// Without a seed, the pricer draws from OS entropy and repeated runs
    /// agree only statistically.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `simulations` is not set or invalid.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let simulations = self.simulations.ok_or(ConfigError::InvalidParameter {
            name: "simulations",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            simulations,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = MonteCarloConfig::builder()
            .simulations(10_000)
            .build()
            .unwrap();

        assert_eq!(config.simulations(), 10_000);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = MonteCarloConfig::builder()
            .simulations(1000)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_config_invalid_zero_simulations() {
        let result = MonteCarloConfig::builder().simulations(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidSimulationCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_simulations() {
        let result = MonteCarloConfig::builder()
            .simulations(MAX_SIMULATIONS + 1)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSimulationCount(_))
        ));
    }

    #[test]
    fn test_config_missing_simulations() {
        let result = MonteCarloConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "simulations",
                ..
            })
        ));
    }
}
