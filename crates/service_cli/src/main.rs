//! Europricer CLI - command-line dispatcher for the pricing engines.
//!
//! # Commands
//!
//! - `europricer price` - Price a European option under a chosen model
//!
//! # Examples
//!
//! ```bash
//! europricer price --model black-scholes --side call \
//!     --spot 100 --strike 100 --rate 0.05 --expiry 1 --vol 0.2
//!
//! europricer price --model binomial --steps 500 --side put \
//!     --spot 100 --strike 100 --rate 0.05 --expiry 1 --vol 0.2
//!
//! europricer price --model monte-carlo --simulations 1000000 --seed 42 \
//!     --side call --spot 100 --strike 100 --rate 0.05 --expiry 1 --vol 0.2
//! ```

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Europricer - European option pricing under three models
#[derive(Parser)]
#[command(name = "europricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option
    Price {
        /// Pricing model (black-scholes, binomial, monte-carlo)
        #[arg(short, long)]
        model: String,

        /// Option side (call, put)
        #[arg(long)]
        side: String,

        /// Current underlying price (S)
        #[arg(long)]
        spot: f64,

        /// Strike price (K)
        #[arg(long)]
        strike: f64,

        /// Risk-free rate as a decimal, e.g. 0.05 for 5% (r)
        #[arg(long)]
        rate: f64,

        /// Time to expiration in years (T)
        #[arg(long)]
        expiry: f64,

        /// Annualised volatility as a decimal (sigma)
        #[arg(long)]
        vol: f64,

        /// Number of tree steps (binomial model only)
        #[arg(long, default_value = "500")]
        steps: usize,

        /// Number of simulations (monte-carlo model only)
        #[arg(long, default_value = "1000000")]
        simulations: usize,

        /// Seed for reproducible simulations (monte-carlo model only)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            model,
            side,
            spot,
            strike,
            rate,
            expiry,
            vol,
            steps,
            simulations,
            seed,
        } => commands::price::run(commands::price::PriceArgs {
            model,
            side,
            spot,
            strike,
            rate,
            expiry,
            vol,
            steps,
            simulations,
            seed,
        }),
    }
}
