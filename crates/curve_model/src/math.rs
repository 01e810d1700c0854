//! Quadratic curve math - spot price and closed-form cost integral
//!
//! The curve is `P(S) = (S / max_supply)^2`, chosen so the price is 0 at
//! zero supply and exactly 1 when the credit sells out. Cost between two
//! supply points is the definite integral of `P`, evaluated in closed form.
//! All math is double precision; rounding for display is the caller's job.

use crate::{CurveError, CurvePoint};

/// Spot price at a given supply
///
/// `P(S) = (S / max_supply)^2` - strictly increasing and convex on
/// `[0, max_supply]`, with `P(0) = 0` and `P(max_supply) = 1`.
///
/// # Arguments
/// * `supply` - Supply point to price
/// * `max_supply` - Issuance hard cap, must be positive
///
/// # Returns
/// * Price in currency per credit
/// * `CurveError::InvalidCurveConfiguration` if `max_supply` is not a
///   positive finite number
pub fn price(supply: f64, max_supply: f64) -> Result<f64, CurveError> {
    if !max_supply.is_finite() || max_supply <= 0.0 {
        return Err(CurveError::InvalidCurveConfiguration);
    }
    let normalized = supply / max_supply;
    Ok(normalized * normalized)
}

/// Currency cost of moving the supply from one point to another
///
/// Definite integral of [`price`]:
/// `cost = max_supply * ((to/max)^3 / 3 - (from/max)^3 / 3)`
///
/// Antisymmetric (`cost(a, b) = -cost(b, a)`) and zero for `a == b`. The
/// formula is defined for any inputs, but only economically meaningful on
/// `[0, max_supply]` - callers clamp before invoking.
///
/// # Arguments
/// * `from_supply` - Starting supply
/// * `to_supply` - Ending supply
/// * `max_supply` - Issuance hard cap, must be positive
pub fn cost(from_supply: f64, to_supply: f64, max_supply: f64) -> Result<f64, CurveError> {
    if !max_supply.is_finite() || max_supply <= 0.0 {
        return Err(CurveError::InvalidCurveConfiguration);
    }
    let normalized_to = (to_supply / max_supply).powi(3) / 3.0;
    let normalized_from = (from_supply / max_supply).powi(3) / 3.0;
    Ok((normalized_to - normalized_from) * max_supply)
}

/// Currency raised if every credit up to `max_supply` were sold
pub fn total_raise(max_supply: f64) -> Result<f64, CurveError> {
    cost(0.0, max_supply, max_supply)
}

/// Currency raised by the issuance so far
pub fn current_raise(current_supply: f64, max_supply: f64) -> Result<f64, CurveError> {
    cost(0.0, current_supply, max_supply)
}

/// Fraction of the total raise collected so far, in `[0, 1]`
pub fn funding_progress(current_supply: f64, max_supply: f64) -> Result<f64, CurveError> {
    Ok(current_raise(current_supply, max_supply)? / total_raise(max_supply)?)
}

/// Percentage discount of the spot price against the final 1.0 price,
/// rounded to a whole percent. Zero-priced curves report no discount.
pub fn discount_pct(current_supply: f64, max_supply: f64) -> Result<f64, CurveError> {
    let spot = price(current_supply, max_supply)?;
    if spot <= 0.0 {
        return Ok(0.0);
    }
    Ok(((1.0 - spot) * 100.0).round())
}

/// Sample the curve for plotting
///
/// Emits points from 0 to `max_supply` at step `max(max_supply/num_points, 1)`,
/// then appends an explicit final `(max_supply, 1.0)` point if floating-point
/// stepping missed it. Empty when `max_supply` is not a positive finite number.
pub fn curve_points(max_supply: f64, num_points: usize) -> Vec<CurvePoint> {
    if !max_supply.is_finite() || max_supply <= 0.0 {
        return Vec::new();
    }

    let step = (max_supply / num_points as f64).max(1.0);
    let mut points = Vec::new();
    let mut supply = 0.0;
    while supply <= max_supply {
        let normalized = supply / max_supply;
        points.push(CurvePoint {
            supply,
            price: normalized * normalized,
        });
        supply += step;
    }

    // Stepping can stop just short of the cap; the chart needs the endpoint.
    if points.last().map(|p| p.supply) != Some(max_supply) {
        points.push(CurvePoint {
            supply: max_supply,
            price: 1.0,
        });
    }

    points
}
