//! Trade simulation against a curve snapshot
//!
//! Translates a [`TradeIntent`] into a [`TradeResult`] or a rejection.
//! Nothing here mutates the snapshot - the caller commits `new_supply` (and
//! the balance changes) under its own concurrency control, then may notify
//! an external ledger of the finalized trade.

use crate::solver::{solve_quantity_for_spend, TradeSide};
use crate::{math, CurveError, CurveState};

/// A requested trade, before validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TradeIntent {
    /// Buy an exact quantity of credits
    Buy { quantity: f64 },
    /// Sell an exact quantity of credits
    Sell { quantity: f64 },
    /// Buy whatever quantity costs closest to this currency amount
    BuySpend { amount: f64 },
    /// Sell whatever quantity returns closest to this currency amount
    SellForProceeds { amount: f64 },
}

/// Outcome of a simulated trade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeResult {
    /// Credits transacted
    pub amount: f64,

    /// Currency paid (buy) or received (sell)
    pub cost: f64,

    /// `cost / amount` - distinct from the marginal price
    pub average_price: f64,

    /// Marginal price after the trade
    pub new_price: f64,

    /// Marginal price move caused by the trade, reported positive
    /// in the trade's own direction
    pub price_impact: f64,

    /// Supply after the trade; the caller commits this
    pub new_supply: f64,
}

/// Simulate buying `quantity` credits
///
/// # Returns
/// * `TradeResult` on success
/// * `CurveError::NonPositiveAmount` if `quantity` is not a positive finite number
/// * `CurveError::ExceedsMaxSupply` if the buy would pass the issuance cap
/// * `CurveError::InvalidCurveConfiguration` if the snapshot is malformed
pub fn simulate_buy(quantity: f64, curve: &CurveState) -> Result<TradeResult, CurveError> {
    curve.validate()?;
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(CurveError::NonPositiveAmount);
    }

    let new_supply = curve.current_supply + quantity;
    if new_supply > curve.max_supply {
        return Err(CurveError::ExceedsMaxSupply);
    }

    let cost = math::cost(curve.current_supply, new_supply, curve.max_supply)?;
    let new_price = math::price(new_supply, curve.max_supply)?;
    let old_price = math::price(curve.current_supply, curve.max_supply)?;

    Ok(TradeResult {
        amount: quantity,
        cost,
        average_price: cost / quantity,
        new_price,
        price_impact: new_price - old_price,
        new_supply,
    })
}

/// Simulate selling `quantity` credits
///
/// Proceeds are always non-negative since the curve is walked downward.
/// `price_impact` is positive when the price drops.
///
/// # Returns
/// * `TradeResult` on success
/// * `CurveError::NonPositiveAmount` if `quantity` is not a positive finite number
/// * `CurveError::InsufficientSupply` if the sell would take the supply below zero
/// * `CurveError::InvalidCurveConfiguration` if the snapshot is malformed
pub fn simulate_sell(quantity: f64, curve: &CurveState) -> Result<TradeResult, CurveError> {
    curve.validate()?;
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(CurveError::NonPositiveAmount);
    }

    let new_supply = curve.current_supply - quantity;
    if new_supply < 0.0 {
        return Err(CurveError::InsufficientSupply);
    }

    let proceeds = math::cost(new_supply, curve.current_supply, curve.max_supply)?;
    let new_price = math::price(new_supply, curve.max_supply)?;
    let old_price = math::price(curve.current_supply, curve.max_supply)?;

    Ok(TradeResult {
        amount: quantity,
        cost: proceeds,
        average_price: proceeds / quantity,
        new_price,
        price_impact: old_price - new_price,
        new_supply,
    })
}

/// Simulate any [`TradeIntent`]
///
/// Quantity intents forward straight to [`simulate_buy`] / [`simulate_sell`].
/// Currency intents run the inverse solver first; `holder_balance` caps the
/// sell-side search and is ignored for buys. A positive currency amount that
/// no whole-credit quantity can approach rejects with
/// `CurveError::NoViableQuantity`.
pub fn simulate_intent(
    intent: TradeIntent,
    curve: &CurveState,
    holder_balance: f64,
) -> Result<TradeResult, CurveError> {
    match intent {
        TradeIntent::Buy { quantity } => simulate_buy(quantity, curve),
        TradeIntent::Sell { quantity } => simulate_sell(quantity, curve),
        TradeIntent::BuySpend { amount } => {
            if !amount.is_finite() || amount <= 0.0 {
                return Err(CurveError::NonPositiveAmount);
            }
            let quantity = solve_quantity_for_spend(amount, TradeSide::Buy, curve, 0)?;
            if quantity == 0 {
                return Err(CurveError::NoViableQuantity);
            }
            simulate_buy(quantity as f64, curve)
        }
        TradeIntent::SellForProceeds { amount } => {
            if !amount.is_finite() || amount <= 0.0 {
                return Err(CurveError::NonPositiveAmount);
            }
            let max_sellable = holder_balance.max(0.0).floor() as u64;
            let quantity = solve_quantity_for_spend(amount, TradeSide::Sell, curve, max_sellable)?;
            if quantity == 0 {
                return Err(CurveError::NoViableQuantity);
            }
            simulate_sell(quantity as f64, curve)
        }
    }
}
