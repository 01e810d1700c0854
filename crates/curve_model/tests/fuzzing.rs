//! Property fuzzing for the curve engine
//!
//! Run with: cargo test --features fuzz
//! Increase cases: PROPTEST_CASES=1000 cargo test --features fuzz

#![cfg(feature = "fuzz")]

use curve_model::*;
use proptest::prelude::*;

/// A valid curve snapshot: positive cap, supply within bounds
fn curve_strategy() -> impl Strategy<Value = CurveState> {
    (1.0f64..1e9).prop_flat_map(|max_supply| {
        (0.0f64..=max_supply).prop_map(move |current_supply| CurveState {
            current_supply,
            max_supply,
        })
    })
}

proptest! {
    #[test]
    fn price_stays_within_unit_range(curve in curve_strategy(), fraction in 0.0f64..=1.0) {
        let supply = curve.max_supply * fraction;
        let p = price(supply, curve.max_supply).unwrap();
        prop_assert!(p >= 0.0);
        prop_assert!(p <= 1.0 + 1e-12);
    }

    #[test]
    fn price_is_monotonic(curve in curve_strategy(), a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = price(curve.max_supply * lo, curve.max_supply).unwrap();
        let p_hi = price(curve.max_supply * hi, curve.max_supply).unwrap();
        prop_assert!(p_lo <= p_hi);
        // Strict once the gap is material
        if hi - lo > 1e-6 {
            prop_assert!(p_lo < p_hi);
        }
    }

    #[test]
    fn cost_is_antisymmetric(curve in curve_strategy(), a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let from = curve.max_supply * a;
        let to = curve.max_supply * b;
        let forward = cost(from, to, curve.max_supply).unwrap();
        let backward = cost(to, from, curve.max_supply).unwrap();
        prop_assert_eq!(forward, -backward);
    }

    // fraction stays below 1: a buy of exactly remaining_supply() can land
    // one ulp past the cap and reject; the exact boundary is unit-tested
    #[test]
    fn buy_then_sell_returns_the_cost(curve in curve_strategy(), fraction in 1e-6f64..0.99) {
        let quantity = curve.remaining_supply() * fraction;
        // Sub-ppm trades lose the 1e-9 round-trip tolerance to cancellation
        // in the cubic terms; they are not meaningful trade sizes
        prop_assume!(quantity >= curve.max_supply * 1e-6);

        let bought = simulate_buy(quantity, &curve).unwrap();
        let after = CurveState {
            current_supply: bought.new_supply,
            max_supply: curve.max_supply,
        };
        let sold = simulate_sell(quantity, &after).unwrap();

        if bought.cost > 0.0 {
            let relative = ((sold.cost - bought.cost) / bought.cost).abs();
            prop_assert!(relative < 1e-9, "round trip drifted by {}", relative);
        }
    }

    #[test]
    fn oversized_trades_always_reject(curve in curve_strategy(), excess in 1.0f64..1e6) {
        let buy = simulate_buy(curve.remaining_supply() + excess, &curve);
        prop_assert_eq!(buy.unwrap_err(), CurveError::ExceedsMaxSupply);

        let sell = simulate_sell(curve.current_supply + excess, &curve);
        prop_assert_eq!(sell.unwrap_err(), CurveError::InsufficientSupply);
    }

    #[test]
    fn simulation_preserves_supply_bounds(curve in curve_strategy(), fraction in 1e-6f64..0.99) {
        let quantity = curve.remaining_supply() * fraction;
        prop_assume!(quantity > 0.0);

        let result = simulate_buy(quantity, &curve).unwrap();
        prop_assert!(result.new_supply >= curve.current_supply);
        prop_assert!(result.new_supply <= curve.max_supply);
        prop_assert!(result.cost >= 0.0);
        prop_assert!(result.price_impact >= 0.0);
    }

    #[test]
    fn solver_result_beats_both_neighbors(
        max_supply in 1_000.0f64..1e7,
        target in 0.01f64..1e5,
    ) {
        let curve = CurveState { current_supply: 0.0, max_supply };
        let q = solve_quantity_for_spend(target, TradeSide::Buy, &curve, 0).unwrap();

        let cost_at = |quantity: u64| {
            if quantity == 0 {
                0.0
            } else {
                simulate_buy(quantity as f64, &curve).unwrap().cost
            }
        };

        let diff = (cost_at(q) - target).abs();
        if q > 0 {
            prop_assert!(diff <= (cost_at(q - 1) - target).abs() + 1e-12);
        }
        let above = q + 1;
        if (above as f64) <= curve.remaining_supply().floor() {
            prop_assert!(diff <= (cost_at(above) - target).abs() + 1e-12);
        }
    }

    #[test]
    fn solver_never_exceeds_its_range(
        curve in curve_strategy(),
        target in 0.01f64..1e6,
        balance in 0u64..1_000_000,
    ) {
        let q = solve_quantity_for_spend(target, TradeSide::Sell, &curve, balance).unwrap();
        prop_assert!(q <= balance);
        prop_assert!(q as f64 <= curve.current_supply + 1.0);

        let q = solve_quantity_for_spend(target, TradeSide::Buy, &curve, 0).unwrap();
        prop_assert!(q as f64 <= curve.remaining_supply());
    }
}
