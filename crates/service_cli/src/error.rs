//! CLI error types.

use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::ContractError;
use pricer_pricing::lattice::LatticeError;
use pricer_pricing::mc::ConfigError;
use thiserror::Error;

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced at the command-line boundary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested model name is not one of the recognised three.
    #[error(
        "Unsupported model '{0}'. Recognised models: black-scholes, binomial, monte-carlo"
    )]
    UnknownModel(String),

    /// The requested option side is not `call` or `put`.
    #[error("Unsupported option side '{0}'. Recognised sides: call, put")]
    UnknownSide(String),

    /// Contract parameter validation failed.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Closed-form pricing failed.
    #[error(transparent)]
    Analytic(#[from] AnalyticalError),

    /// Binomial tree pricing failed.
    #[error(transparent)]
    Lattice(#[from] LatticeError),

    /// Monte Carlo configuration was invalid.
    #[error(transparent)]
    Simulation(#[from] ConfigError),
}
