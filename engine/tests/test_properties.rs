//! Property-based tests for the pricing pipeline
//!
//! Invariants that must hold for arbitrary items and flag combinations,
//! not just hand-picked scenarios.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pricing_engine_core_rs::{
    compile, evaluate, EvalContext, FlagSet, PricingEngine, PricingItem,
    ReasonableIncreaseConfig, Season,
};

fn default_ctx() -> EvalContext {
    EvalContext {
        season: Season::Spring,
        dollar_store: false,
        min_margin_percent: dec!(20),
        reasonable: ReasonableIncreaseConfig::default(),
    }
}

/// Positive money amount with cent precision, up to $10,000.00
fn money() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #[test]
    fn prop_price_is_never_negative(
        unit_cost in money(),
        retail_price in money(),
        bits in any::<u64>(),
    ) {
        let item = PricingItem::new(unit_cost, retail_price);
        let ops = compile(FlagSet::from_bits(bits));
        let price = evaluate(&item, &ops, &default_ctx()).unwrap();
        prop_assert!(price >= Decimal::ZERO);
    }

    #[test]
    fn prop_dollar_store_prices_are_whole(
        unit_cost in money(),
        retail_price in money(),
        bits in any::<u64>(),
    ) {
        let mut ctx = default_ctx();
        ctx.dollar_store = true;
        let item = PricingItem::new(unit_cost, retail_price);
        let ops = compile(FlagSet::from_bits(bits));
        let price = evaluate(&item, &ops, &ctx).unwrap();
        prop_assert_eq!(price, price.floor());
    }

    #[test]
    fn prop_deeper_discount_never_prices_higher(
        unit_cost in money(),
        retail_price in money(),
    ) {
        let item = PricingItem::new(unit_cost, retail_price);
        let ctx = default_ctx();
        let deep = evaluate(&item, &compile(FlagSet::DISCOUNT_25_PERCENT), &ctx).unwrap();
        let shallow = evaluate(&item, &compile(FlagSet::DISCOUNT_5_PERCENT), &ctx).unwrap();
        prop_assert!(deep <= shallow);
    }

    #[test]
    fn prop_viability_floor_holds(
        unit_cost in money(),
        retail_price in money(),
    ) {
        // Any discount tier combined with the floor ends at or above it
        let item = PricingItem::new(unit_cost, retail_price);
        let ctx = default_ctx();
        let flags = FlagSet::DISCOUNT_25_PERCENT | FlagSet::USE_MINIMUM_VIABLE;
        let price = evaluate(&item, &compile(flags), &ctx).unwrap();
        prop_assert!(price >= ctx.minimum_viable(&item));
    }

    #[test]
    fn prop_competitive_cap_holds(
        unit_cost in money(),
        retail_price in money(),
    ) {
        let item = PricingItem::new(unit_cost, retail_price);
        let ctx = default_ctx();
        let flags = FlagSet::INCREASE_25_PERCENT | FlagSet::COMPETITIVE_MATCH;
        let price = evaluate(&item, &compile(flags), &ctx).unwrap();
        prop_assert!(price <= ctx.competitive(&item));
    }

    #[test]
    fn prop_total_increase_is_capped(
        price in money(),
        base in (0i64..=20).prop_map(|n| Decimal::new(n, 2)),
    ) {
        let config = ReasonableIncreaseConfig {
            base_increase: base,
            ..Default::default()
        };
        let total = config.total_increase(price).unwrap();
        prop_assert!(total <= config.max_increase);
        prop_assert!(total >= Decimal::ZERO);
    }

    #[test]
    fn prop_total_increase_is_monotone_in_base_increase(
        price in money(),
        base in (0i64..=20).prop_map(|n| Decimal::new(n, 2)),
        bump in (0i64..=20).prop_map(|n| Decimal::new(n, 2)),
    ) {
        // Raising the base increase never lowers the total, and never
        // lowers the evaluated price under the reasonable-increase flag
        let smaller = ReasonableIncreaseConfig {
            base_increase: base,
            ..Default::default()
        };
        let larger = ReasonableIncreaseConfig {
            base_increase: base + bump,
            ..Default::default()
        };
        prop_assert!(
            smaller.total_increase(price).unwrap() <= larger.total_increase(price).unwrap()
        );

        let item = PricingItem::new(dec!(1), price);
        let ops = compile(FlagSet::REASONABLE_INCREASE);
        let mut ctx = default_ctx();
        ctx.reasonable = smaller;
        let price_smaller = evaluate(&item, &ops, &ctx).unwrap();
        ctx.reasonable = larger;
        let price_larger = evaluate(&item, &ops, &ctx).unwrap();
        prop_assert!(price_smaller <= price_larger);
    }

    #[test]
    fn prop_reasonable_additional_is_monotone_decreasing_in_price(
        lower_cents in 1i64..=999_000,
        gap_cents in 1i64..=1_000,
    ) {
        // The default curve never rewards a higher price with a larger markup
        let config = ReasonableIncreaseConfig::default();
        let lower = Decimal::new(lower_cents, 2);
        let higher = Decimal::new(lower_cents + gap_cents, 2);
        let at_lower = config.additional_increase(lower).unwrap();
        let at_higher = config.additional_increase(higher).unwrap();
        prop_assert!(at_higher <= at_lower);
    }

    #[test]
    fn prop_compile_is_pure(bits in any::<u64>()) {
        let flags = FlagSet::from_bits(bits);
        prop_assert_eq!(compile(flags), compile(flags));
    }

    #[test]
    fn prop_engine_matches_direct_evaluation(
        unit_cost in money(),
        retail_price in money(),
        bits in any::<u64>(),
    ) {
        let item = PricingItem::new(unit_cost, retail_price);
        let flags = FlagSet::from_bits(bits);
        let engine = PricingEngine::new(Season::Spring, false);
        let via_engine = engine.evaluate(&item, flags).unwrap();
        let direct = evaluate(&item, &compile(flags), &default_ctx()).unwrap();
        prop_assert_eq!(via_engine, direct);
    }
}
