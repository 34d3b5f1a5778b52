//! Price command implementation.
//!
//! Dispatches a validated contract to the model named on the command line
//! and reports the price formatted as currency.

use pricer_models::analytical::black_scholes;
use pricer_models::instruments::{OptionContract, OptionSide};
use pricer_pricing::lattice::BinomialTreeEngine;
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
use tracing::info;

use crate::{CliError, Result};

/// Arguments for the price command.
pub struct PriceArgs {
    /// Requested model name.
    pub model: String,
    /// Requested option side.
    pub side: String,
    /// Spot price.
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Risk-free rate.
    pub rate: f64,
    /// Time to expiry in years.
    pub expiry: f64,
    /// Volatility.
    pub vol: f64,
    /// Tree steps (binomial only).
    pub steps: usize,
    /// Simulation count (monte-carlo only).
    pub simulations: usize,
    /// Optional simulation seed.
    pub seed: Option<u64>,
}

fn parse_side(side: &str) -> Result<OptionSide> {
    match side.to_ascii_lowercase().as_str() {
        "call" => Ok(OptionSide::Call),
        "put" => Ok(OptionSide::Put),
        other => Err(CliError::UnknownSide(other.to_string())),
    }
}

fn side_label(side: OptionSide) -> &'static str {
    if side.is_call() {
        "call"
    } else {
        "put"
    }
}

/// Run the price command.
pub fn run(args: PriceArgs) -> Result<()> {
    let side = parse_side(&args.side)?;
    let contract = OptionContract::new(
        args.spot,
        args.strike,
        args.rate,
        args.expiry,
        args.vol,
        side,
    )?;

    match args.model.to_ascii_lowercase().as_str() {
        "black-scholes" => {
            info!("Pricing with the Black-Scholes closed form");
            let price = black_scholes::price(&contract)?;
            println!(
                "Black-Scholes {} option price: ${:.4}",
                side_label(side),
                price
            );
        }
        "binomial" => {
            info!(steps = args.steps, "Pricing on a binomial tree");
            let result = BinomialTreeEngine::new(args.steps)?.price(&contract)?;
            println!(
                "Binomial ({} steps) {} option price: ${:.4}",
                args.steps,
                side_label(side),
                result.price
            );
            if let Some(warning) = result.warning {
                eprintln!("warning: {warning}; consider a different step count");
            }
        }
        "monte-carlo" => {
            info!(
                simulations = args.simulations,
                seed = args.seed,
                "Pricing by Monte Carlo simulation"
            );
            let mut builder = MonteCarloConfig::builder().simulations(args.simulations);
            if let Some(seed) = args.seed {
                builder = builder.seed(seed);
            }
            let config = builder.build()?;
            let result = MonteCarloPricer::new(config)?.price(&contract);
            println!(
                "Monte Carlo ({} simulations) {} option price: ${:.4} (std error {:.4})",
                args.simulations,
                side_label(side),
                result.price,
                result.std_error
            );
        }
        other => return Err(CliError::UnknownModel(other.to_string())),
    }

    Ok(())
}
