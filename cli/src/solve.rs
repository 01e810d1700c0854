//! Inverse sizing - spend or redeem a currency amount

use anyhow::Result;
use colored::Colorize;
use curve_model::{simulate_intent, CurveState, TradeIntent};
use log::debug;

use crate::quote::print_trade;

pub fn run_spend(state: &CurveState, amount: f64, json: bool) -> Result<()> {
    let result = simulate_intent(TradeIntent::BuySpend { amount }, state, 0.0)?;
    debug!(
        "spend {} resolves to {} credits costing {}",
        amount, result.amount, result.cost
    );

    if !json {
        println!(
            "{} {} {} {}",
            "Target spend:".bright_cyan(),
            amount,
            "-> credits:".bright_cyan(),
            result.amount
        );
    }
    print_trade("Buy", "Cost:", &result, json)
}

pub fn run_redeem(state: &CurveState, amount: f64, balance: u64, json: bool) -> Result<()> {
    let result = simulate_intent(
        TradeIntent::SellForProceeds { amount },
        state,
        balance as f64,
    )?;
    debug!(
        "redeem {} resolves to {} credits returning {}",
        amount, result.amount, result.cost
    );

    if !json {
        println!(
            "{} {} {} {}",
            "Target proceeds:".bright_cyan(),
            amount,
            "-> credits:".bright_cyan(),
            result.amount
        );
    }
    print_trade("Sell", "Proceeds:", &result, json)
}
