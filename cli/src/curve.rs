//! Curve plotting samples and raise progress

use anyhow::Result;
use colored::Colorize;
use curve_model::{current_raise, curve_points, funding_progress, total_raise, CurveState};
use serde_json::json;

pub fn run_curve(state: &CurveState, points: usize, json: bool) -> Result<()> {
    let samples = curve_points(state.max_supply, points);

    if json {
        let rows: Vec<_> = samples
            .iter()
            .map(|p| json!({ "supply": p.supply, "price": p.price }))
            .collect();
        println!("{}", json!(rows));
        return Ok(());
    }

    println!("{}", "=== Curve Samples ===".bright_green().bold());
    for point in &samples {
        let marker = if point.supply <= state.current_supply {
            "*"
        } else {
            " "
        };
        println!("{} {:>14.2}  {:.6}", marker, point.supply, point.price);
    }
    println!(
        "{} {}",
        "Points:".bright_cyan(),
        samples.len()
    );
    Ok(())
}

pub fn run_raise(state: &CurveState, json: bool) -> Result<()> {
    let raised = current_raise(state.current_supply, state.max_supply)?;
    let target = total_raise(state.max_supply)?;
    let progress = funding_progress(state.current_supply, state.max_supply)?;

    if json {
        println!(
            "{}",
            json!({
                "currentRaise": raised,
                "totalRaise": target,
                "progress": progress,
            })
        );
        return Ok(());
    }

    println!("{}", "=== Raise Progress ===".bright_green().bold());
    println!("{} {:.2}", "Raised:".bright_cyan(), raised);
    println!("{} {:.2}", "Target:".bright_cyan(), target);
    println!("{} {:.2}%", "Progress:".bright_cyan(), progress * 100.0);
    Ok(())
}
