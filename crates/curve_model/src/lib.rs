//! Curve Model - Pure quadratic bonding-curve math for project credits
//!
//! This crate contains the pricing curve used to sell project credits, its
//! closed-form cost integral, the buy/sell trade simulator, and the inverse
//! solver that maps a target currency amount to a whole-credit quantity.
//!
//! The engine is stateless: every function reads a [`CurveState`] snapshot
//! and returns fresh values, so it is safe to call from any number of
//! threads. It provides NO read-simulate-commit atomicity - the persistence
//! layer must hold a per-credit lock (or an optimistic-concurrency check on
//! the credit record) between reading `current_supply` and committing
//! [`TradeResult::new_supply`], or concurrent trades can lose updates.

use thiserror::Error;

pub mod math;
pub mod simulate;
pub mod solver;

pub use math::{cost, curve_points, current_raise, discount_pct, funding_progress, price, total_raise};
pub use simulate::{simulate_buy, simulate_intent, simulate_sell, TradeIntent, TradeResult};
pub use solver::{solve_quantity_for_spend, TradeSide};

/// Default number of samples produced by [`curve_points`]
pub const DEFAULT_CURVE_POINTS: usize = 50;

/// Error types for curve operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Max supply is zero, negative, or non-finite, or the current supply
    /// lies outside `[0, max_supply]`
    #[error("invalid curve configuration")]
    InvalidCurveConfiguration,
    /// Requested quantity or currency amount is zero, negative, or non-finite
    #[error("amount must be a positive number")]
    NonPositiveAmount,
    /// A buy would push the supply above the max supply
    #[error("trade exceeds max supply")]
    ExceedsMaxSupply,
    /// A sell would push the supply below zero
    #[error("insufficient credit supply")]
    InsufficientSupply,
    /// No whole-credit quantity fits the requested currency amount
    #[error("no viable credit quantity for the requested amount")]
    NoViableQuantity,
}

/// Snapshot of a credit's bonding curve.
///
/// Owned by the caller's credit record; the engine only reads it. The price
/// runs from `0` at zero supply to exactly `1` at `max_supply`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveState {
    /// Credits currently issued
    pub current_supply: f64,
    /// Issuance hard cap; the price reaches 1.0 here
    pub max_supply: f64,
}

impl CurveState {
    pub fn new(current_supply: f64, max_supply: f64) -> Result<Self, CurveError> {
        let state = Self {
            current_supply,
            max_supply,
        };
        state.validate()?;
        Ok(state)
    }

    /// Bounds check run at every simulation entry point
    pub fn validate(&self) -> Result<(), CurveError> {
        if !self.max_supply.is_finite() || self.max_supply <= 0.0 {
            return Err(CurveError::InvalidCurveConfiguration);
        }
        if !self.current_supply.is_finite()
            || self.current_supply < 0.0
            || self.current_supply > self.max_supply
        {
            return Err(CurveError::InvalidCurveConfiguration);
        }
        Ok(())
    }

    /// Credits still available for purchase
    pub fn remaining_supply(&self) -> f64 {
        self.max_supply - self.current_supply
    }
}

/// One `(supply, price)` sample of the curve, for plotting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub supply: f64,
    pub price: f64,
}
