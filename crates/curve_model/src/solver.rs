//! Inverse trade sizing - currency amount to whole-credit quantity
//!
//! Cost is a convex function of quantity, so there is usually no integer
//! quantity that costs exactly the requested amount. The search keeps the
//! best candidate seen so far and returns it at termination instead of the
//! last boundary, which is what makes the result the closest integer rather
//! than merely a nearby one.

use crate::{math, simulate, CurveError, CurveState};

/// Direction of the trade being sized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}

/// Find the whole-credit quantity whose simulated cost or proceeds is
/// closest to `target_amount`
///
/// Bounded binary search over `[0, high]`, where `high` is the remaining
/// supply for buys and `max_sellable` (the holder's credit balance) for
/// sells; `max_sellable` is ignored for buys. Each probe re-runs the full
/// simulation, so every candidate respects the supply bounds. O(log range)
/// simulation calls.
///
/// # Returns
/// * `Ok(0)` when `target_amount` is not a positive finite number, or when
///   the search range is empty (sold out, or zero holder balance)
/// * `Ok(quantity)` otherwise - best match, exact when one exists
/// * `CurveError::InvalidCurveConfiguration` if the snapshot is malformed
pub fn solve_quantity_for_spend(
    target_amount: f64,
    side: TradeSide,
    curve: &CurveState,
    max_sellable: u64,
) -> Result<u64, CurveError> {
    curve.validate()?;
    if !target_amount.is_finite() || target_amount <= 0.0 {
        return Ok(0);
    }

    let spot = math::price(curve.current_supply, curve.max_supply)?;

    let mut high: i64 = match side {
        TradeSide::Buy => curve.remaining_supply().floor() as i64,
        TradeSide::Sell => max_sellable.min(i64::MAX as u64) as i64,
    };

    // Small targets only afford a handful of credits; shrink the range
    // before searching. The 0.5 factor is an empirical cushion, not a
    // proven bound.
    if target_amount < spot && spot > 0.0 {
        high = high.min((target_amount / (spot * 0.5)).ceil() as i64);
    }

    if high <= 0 {
        return Ok(0);
    }

    let mut low: i64 = 0;
    let mut best_amount: i64 = 0;
    let mut best_diff = f64::MAX;

    while low <= high {
        let mid = low + (high - low) / 2;

        // The simulator rejects zero quantities; zero credits cost zero.
        let cost = if mid == 0 {
            0.0
        } else {
            let simulated = match side {
                TradeSide::Buy => simulate::simulate_buy(mid as f64, curve),
                TradeSide::Sell => simulate::simulate_sell(mid as f64, curve),
            };
            match simulated {
                Ok(result) => result.cost,
                // Out of bounds at this size; everything above is too
                Err(_) => {
                    high = mid - 1;
                    continue;
                }
            }
        };

        let diff = (cost - target_amount).abs();
        if diff < best_diff {
            best_diff = diff;
            best_amount = mid;
        }

        if cost > target_amount {
            high = mid - 1;
        } else if cost < target_amount {
            low = mid + 1;
        } else {
            // Exact match
            return Ok(mid as u64);
        }
    }

    Ok(best_amount as u64)
}
