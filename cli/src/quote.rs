//! Spot price display and forward trade simulation

use anyhow::Result;
use colored::Colorize;
use curve_model::{discount_pct, price, simulate_buy, simulate_sell, CurveState, TradeResult};
use log::debug;
use serde_json::json;

pub fn show_price(state: &CurveState, json: bool) -> Result<()> {
    let spot = price(state.current_supply, state.max_supply)?;
    let discount = discount_pct(state.current_supply, state.max_supply)?;

    if json {
        println!(
            "{}",
            json!({
                "price": spot,
                "discountPct": discount,
                "currentSupply": state.current_supply,
                "maxSupply": state.max_supply,
            })
        );
        return Ok(());
    }

    println!("{}", "=== Spot Price ===".bright_green().bold());
    println!("{} {:.6}", "Price:".bright_cyan(), spot);
    println!("{} {:.0}%", "Discount vs final:".bright_cyan(), discount);
    println!(
        "{} {} / {}",
        "Supply:".bright_cyan(),
        state.current_supply,
        state.max_supply
    );
    Ok(())
}

pub fn run_buy(state: &CurveState, quantity: f64, json: bool) -> Result<()> {
    debug!("simulating buy of {} credits", quantity);
    let result = simulate_buy(quantity, state)?;
    print_trade("Buy", "Cost:", &result, json)
}

pub fn run_sell(state: &CurveState, quantity: f64, json: bool) -> Result<()> {
    debug!("simulating sell of {} credits", quantity);
    let result = simulate_sell(quantity, state)?;
    print_trade("Sell", "Proceeds:", &result, json)
}

pub fn print_trade(side: &str, cost_label: &str, result: &TradeResult, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            json!({
                "side": side.to_lowercase(),
                "amount": result.amount,
                "cost": result.cost,
                "averagePrice": result.average_price,
                "newPrice": result.new_price,
                "priceImpact": result.price_impact,
                "newSupply": result.new_supply,
            })
        );
        return Ok(());
    }

    println!("{}", format!("=== Simulated {side} ===").bright_green().bold());
    println!("{} {}", "Credits:".bright_cyan(), result.amount);
    println!("{} {:.6}", cost_label.bright_cyan(), result.cost);
    println!("{} {:.6}", "Average price:".bright_cyan(), result.average_price);
    println!("{} {:.6}", "New price:".bright_cyan(), result.new_price);
    println!("{} {:.6}", "Price impact:".bright_cyan(), result.price_impact);
    println!("{} {}", "New supply:".bright_cyan(), result.new_supply);
    Ok(())
}
