//! Pionext curve CLI - price, quote, and size project credit trades
//!
//! Operator tool for the credit pricing engine. It reads a curve snapshot
//! (from flags or a credit-record JSON file) and runs the same simulations
//! the trade API runs, so quotes can be checked against what the platform
//! will charge.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod curve;
mod quote;
mod solve;

#[derive(Parser)]
#[command(name = "pionext")]
#[command(about = "Pionext credit curve CLI - price and size credit trades", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a credit record JSON file holding the curve snapshot
    #[arg(short, long)]
    state: Option<PathBuf>,

    /// Current credit supply (with --max-supply, overrides --state)
    #[arg(long)]
    supply: Option<f64>,

    /// Maximum credit supply (with --supply, overrides --state)
    #[arg(long)]
    max_supply: Option<f64>,

    /// Emit machine-readable JSON instead of formatted output
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the spot price at the current supply
    Price,
    /// Simulate buying a quantity of credits
    Buy {
        /// Credits to buy
        #[arg(short, long)]
        quantity: f64,
    },
    /// Simulate selling a quantity of credits
    Sell {
        /// Credits to sell
        #[arg(short, long)]
        quantity: f64,
    },
    /// Find and simulate the buy closest to a target spend
    Spend {
        /// Currency amount to spend
        #[arg(short, long)]
        amount: f64,
    },
    /// Find and simulate the sell closest to a target proceeds
    Redeem {
        /// Currency amount to receive
        #[arg(short, long)]
        amount: f64,
        /// Credits held by the seller (caps the search)
        #[arg(short, long)]
        balance: u64,
    },
    /// Print curve sample points for plotting
    Curve {
        /// Number of sample points
        #[arg(short, long, default_value_t = curve_model::DEFAULT_CURVE_POINTS)]
        points: usize,
    },
    /// Show current raise, total raise, and funding progress
    Raise,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let state = config::load_curve_state(cli.state.as_deref(), cli.supply, cli.max_supply)?;

    match cli.command {
        Commands::Price => quote::show_price(&state, cli.json),
        Commands::Buy { quantity } => quote::run_buy(&state, quantity, cli.json),
        Commands::Sell { quantity } => quote::run_sell(&state, quantity, cli.json),
        Commands::Spend { amount } => solve::run_spend(&state, amount, cli.json),
        Commands::Redeem { amount, balance } => solve::run_redeem(&state, amount, balance, cli.json),
        Commands::Curve { points } => curve::run_curve(&state, points, cli.json),
        Commands::Raise => curve::run_raise(&state, cli.json),
    }
}
