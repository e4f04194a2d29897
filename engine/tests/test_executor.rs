//! Integration tests for pipeline execution
//!
//! Compiles real flag sets and folds them over items, checking the combined
//! behavior the engine promises rather than single primitives.

use pricing_engine_core_rs::{
    compile, evaluate, EvalContext, FlagSet, PricingError, PricingItem, ReasonableIncreaseConfig,
    Season,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn ctx(season: Season, dollar_store: bool) -> EvalContext {
    EvalContext {
        season,
        dollar_store,
        min_margin_percent: dec!(20),
        reasonable: ReasonableIncreaseConfig::default(),
    }
}

fn price(item: &PricingItem, flags: FlagSet, ctx: &EvalContext) -> Decimal {
    evaluate(item, &compile(flags), ctx).unwrap()
}

// ============================================================================
// Input validation
// ============================================================================

#[test]
fn test_zero_cost_is_rejected_before_any_operation_runs() {
    let item = PricingItem::new(Decimal::ZERO, dec!(10));
    let result = evaluate(&item, &compile(FlagSet::DISCOUNT_5_PERCENT), &ctx(Season::Spring, false));
    assert_eq!(result, Err(PricingError::NonPositiveUnitCost(Decimal::ZERO)));
}

#[test]
fn test_negative_retail_is_rejected() {
    let item = PricingItem::new(dec!(5), dec!(-2));
    let result = evaluate(&item, &[], &ctx(Season::Spring, false));
    assert_eq!(result, Err(PricingError::NonPositiveRetailPrice(dec!(-2))));
}

// ============================================================================
// Composed pipelines
// ============================================================================

#[test]
fn test_discount_then_viability_floor_then_whole_dollar_floor() {
    // 20.00 * 0.90 = 18.00, above the 12.00 viability floor, floored to 18
    let item = PricingItem::new(dec!(10), dec!(20));
    let flags = FlagSet::DISCOUNT_10_PERCENT | FlagSet::USE_MINIMUM_VIABLE | FlagSet::FLOOR_PRICE;
    assert_eq!(price(&item, flags, &ctx(Season::Spring, false)), dec!(18));
}

#[test]
fn test_viability_floor_rescues_a_deep_discount() {
    // 10.00 * 0.75 = 7.50, below cost * 1.20 = 9.60, clamped up
    let item = PricingItem::new(dec!(8), dec!(10));
    let flags = FlagSet::DISCOUNT_25_PERCENT | FlagSet::USE_MINIMUM_VIABLE;
    assert_eq!(price(&item, flags, &ctx(Season::Spring, false)), dec!(9.60));
}

#[test]
fn test_increase_then_add_99_cents() {
    // 10.00 * 1.10 = 11.00, finished at 11.99
    let item = PricingItem::new(dec!(5), dec!(10));
    let flags = FlagSet::INCREASE_10_PERCENT | FlagSet::USE_MINIMUM_VIABLE | FlagSet::ADD_99_CENTS;
    assert_eq!(price(&item, flags, &ctx(Season::Spring, false)), dec!(11.99));
}

#[test]
fn test_ceiling_rounds_up_to_whole_currency() {
    let item = PricingItem::new(dec!(8), dec!(8.50));
    assert_eq!(
        price(&item, FlagSet::CEILING_PRICE, &ctx(Season::Spring, false)),
        dec!(9)
    );
}

#[test]
fn test_competitive_match_caps_an_increase() {
    // 20.00 * 1.25 = 25.00, capped at 20.00 * 0.97 = 19.40
    let item = PricingItem::new(dec!(5), dec!(20));
    let flags = FlagSet::INCREASE_25_PERCENT | FlagSet::COMPETITIVE_MATCH;
    assert_eq!(price(&item, flags, &ctx(Season::Spring, false)), dec!(19.40));
}

#[test]
fn test_premium_offset_and_bundle_compose_in_order() {
    // 100 * 1.08 = 108, then * 0.97 = 104.76
    let item = PricingItem::new(dec!(40), dec!(100));
    let flags = FlagSet::PREMIUM_IMAGE_OFFSET | FlagSet::BUNDLE_PRICING;
    assert_eq!(price(&item, flags, &ctx(Season::Spring, false)), dec!(104.76));
}

#[test]
fn test_seasonal_adjustment_uses_the_context_season() {
    let item = PricingItem::new(dec!(40), dec!(100));
    let flags = FlagSet::SEASONAL_ADJUSTMENT;
    assert_eq!(price(&item, flags, &ctx(Season::Summer, false)), dec!(105.00));
    assert_eq!(price(&item, flags, &ctx(Season::Winter, false)), dec!(95.00));
}

#[test]
fn test_psychological_ladder_on_a_sub_dollar_price() {
    let item = PricingItem::new(dec!(0.10), dec!(0.40));
    assert_eq!(
        price(&item, FlagSet::PSYCHOLOGICAL_PRICING, &ctx(Season::Spring, false)),
        dec!(0.49)
    );
}

#[test]
fn test_key_price_point_snaps_mid_band() {
    // 30.00 * 1.10 = 33.00, snapped to 29.99 in the 20..=50 band
    let item = PricingItem::new(dec!(10), dec!(30));
    let flags = FlagSet::INCREASE_10_PERCENT | FlagSet::KEY_PRICE_POINT;
    assert_eq!(price(&item, flags, &ctx(Season::Spring, false)), dec!(29.99));
}

// ============================================================================
// Dollar-store mode
// ============================================================================

#[test]
fn test_dollar_store_ceiling_applies_after_every_operation() {
    // 9.99 finisher would leave cents; store mode lifts to 10
    let item = PricingItem::new(dec!(4), dec!(9.20));
    let flags = FlagSet::ADD_99_CENTS;
    assert_eq!(price(&item, flags, &ctx(Season::Spring, true)), dec!(10));
}

#[test]
fn test_dollar_store_applies_even_with_no_operations() {
    let item = PricingItem::new(dec!(4), dec!(9.20));
    assert_eq!(price(&item, FlagSet::NONE, &ctx(Season::Spring, true)), dec!(10));
}

// ============================================================================
// Result clamping
// ============================================================================

#[test]
fn test_result_never_goes_negative() {
    // Key price point on 0.40 lands at -0.01 before the final clamp
    let item = PricingItem::new(dec!(0.10), dec!(0.40));
    assert_eq!(
        price(&item, FlagSet::KEY_PRICE_POINT, &ctx(Season::Spring, false)),
        Decimal::ZERO
    );
}
