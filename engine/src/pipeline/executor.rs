//! Operation executor
//!
//! Folds a compiled operation list over a running price. Every primitive
//! sees exactly one thing: the running price. Clamp bounds are recomputed
//! from the original item on every dispatch, never from intermediate state,
//! so operations compose associatively in priority order and each primitive
//! is testable in isolation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::models::{ComputationError, PricingItem, ReasonableIncreaseConfig, Season};
use crate::pipeline::custom;
use crate::pipeline::op::{OpKind, OpParameter, Operation};

/// Errors surfaced by a price evaluation
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("unit cost must be greater than zero (got {0})")]
    NonPositiveUnitCost(Decimal),

    #[error("retail price must be greater than zero (got {0})")]
    NonPositiveRetailPrice(Decimal),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}

/// Per-evaluation snapshot of engine settings
///
/// Built once at the start of each evaluation; the fold never re-reads
/// engine state, so a host mutating the config mid-stream cannot tear an
/// evaluation.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext {
    pub season: Season,
    /// Round the final price up to whole currency units
    pub dollar_store: bool,
    /// Margin percent backing the minimum viable price (default 20)
    pub min_margin_percent: Decimal,
    pub reasonable: ReasonableIncreaseConfig,
}

impl EvalContext {
    /// Cost-derived floor: `unit_cost * (1 + min_margin_percent / 100)`
    pub fn minimum_viable(&self, item: &PricingItem) -> Decimal {
        item.unit_cost * (Decimal::ONE + self.min_margin_percent / dec!(100))
    }

    /// Market-derived ceiling: `retail_price * 0.97`
    pub fn competitive(&self, item: &PricingItem) -> Decimal {
        item.retail_price * dec!(0.97)
    }
}

/// Evaluate a compiled operation list against one item
///
/// 1. Validate the item (both inputs strictly positive).
/// 2. Seed the running price with `retail_price`.
/// 3. Stable-sort by ascending priority (ties keep compiled order).
/// 4. Fold each operation over the running price.
/// 5. In dollar-store mode, apply one final ceiling.
/// 6. Clamp the result to >= 0.
pub fn evaluate(
    item: &PricingItem,
    operations: &[Operation],
    ctx: &EvalContext,
) -> Result<Decimal, PricingError> {
    if item.unit_cost <= Decimal::ZERO {
        return Err(PricingError::NonPositiveUnitCost(item.unit_cost));
    }
    if item.retail_price <= Decimal::ZERO {
        return Err(PricingError::NonPositiveRetailPrice(item.retail_price));
    }

    let mut ordered: Vec<&Operation> = operations.iter().collect();
    ordered.sort_by_key(|op| op.priority);

    let mut price = item.retail_price;
    for operation in ordered {
        price = apply_operation(operation, item, ctx, price)?;
    }

    if ctx.dollar_store {
        price = price.ceil();
    }

    Ok(price.max(Decimal::ZERO))
}

/// Apply one operation to the running price
///
/// Mismatched kind/parameter combinations degrade to identity (multiply by
/// one, add zero, clamp skipped) rather than erroring; the compiler never
/// emits them, but a host inspecting or replaying stored operation lists
/// gets forgiving behavior.
pub fn apply_operation(
    operation: &Operation,
    item: &PricingItem,
    ctx: &EvalContext,
    current: Decimal,
) -> Result<Decimal, ComputationError> {
    let result = match operation.kind {
        OpKind::Multiply => current * multiplier_for(operation.parameter),
        OpKind::Add => current + addend_for(operation.parameter),
        OpKind::Max => match operation.parameter {
            OpParameter::UnitCost => current.max(ctx.minimum_viable(item)),
            _ => current,
        },
        OpKind::Min => match operation.parameter {
            OpParameter::RetailPrice => current.min(ctx.competitive(item)),
            _ => current,
        },
        OpKind::Floor => current.floor(),
        OpKind::Ceiling => current.ceil(),
        // Two decimal places, banker's rounding (midpoint to even)
        OpKind::Round => current.round_dp(2),
        OpKind::Custom => custom::apply(operation.parameter, item, ctx, current)?,
    };
    Ok(result)
}

fn multiplier_for(parameter: OpParameter) -> Decimal {
    match parameter {
        OpParameter::Factor(factor) => factor.value(),
        _ => Decimal::ONE,
    }
}

fn addend_for(parameter: OpParameter) -> Decimal {
    match parameter {
        OpParameter::Cents(cents) => cents.value(),
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::op::{CentValue, Factor, Priority};

    fn test_ctx() -> EvalContext {
        EvalContext {
            season: Season::Spring,
            dollar_store: false,
            min_margin_percent: dec!(20),
            reasonable: ReasonableIncreaseConfig::default(),
        }
    }

    fn item(unit_cost: Decimal, retail_price: Decimal) -> PricingItem {
        PricingItem::new(unit_cost, retail_price)
    }

    #[test]
    fn test_validation_rejects_non_positive_inputs() {
        let ctx = test_ctx();
        let bad_cost = item(Decimal::ZERO, dec!(10));
        assert_eq!(
            evaluate(&bad_cost, &[], &ctx),
            Err(PricingError::NonPositiveUnitCost(Decimal::ZERO))
        );

        let bad_retail = item(dec!(5), dec!(-1));
        assert_eq!(
            evaluate(&bad_retail, &[], &ctx),
            Err(PricingError::NonPositiveRetailPrice(dec!(-1)))
        );
    }

    #[test]
    fn test_empty_pipeline_returns_retail_price() {
        let ctx = test_ctx();
        let result = evaluate(&item(dec!(5), dec!(12.34)), &[], &ctx).unwrap();
        assert_eq!(result, dec!(12.34));
    }

    #[test]
    fn test_multiply_primitive() {
        let ctx = test_ctx();
        let op = Operation::new(
            OpKind::Multiply,
            OpParameter::Factor(Factor::F0_90),
            Priority::BaseAdjustment,
        );
        let result = apply_operation(&op, &item(dec!(5), dec!(10)), &ctx, dec!(10)).unwrap();
        assert_eq!(result, dec!(9.00));
    }

    #[test]
    fn test_add_primitive() {
        let ctx = test_ctx();
        let op = Operation::new(
            OpKind::Add,
            OpParameter::Cents(CentValue::C50),
            Priority::CentFinisher,
        );
        let result = apply_operation(&op, &item(dec!(5), dec!(10)), &ctx, dec!(10)).unwrap();
        assert_eq!(result, dec!(10.50));
    }

    #[test]
    fn test_max_clamps_against_minimum_viable() {
        let ctx = test_ctx();
        let op = Operation::new(OpKind::Max, OpParameter::UnitCost, Priority::MinimumViable);
        // min viable = 10 * 1.20 = 12
        let low = apply_operation(&op, &item(dec!(10), dec!(20)), &ctx, dec!(8)).unwrap();
        assert_eq!(low, dec!(12.00));
        let high = apply_operation(&op, &item(dec!(10), dec!(20)), &ctx, dec!(15)).unwrap();
        assert_eq!(high, dec!(15));
    }

    #[test]
    fn test_min_clamps_against_competitive() {
        let ctx = test_ctx();
        let op = Operation::new(OpKind::Min, OpParameter::RetailPrice, Priority::Competitive);
        // competitive = 20 * 0.97 = 19.40
        let high = apply_operation(&op, &item(dec!(10), dec!(20)), &ctx, dec!(25)).unwrap();
        assert_eq!(high, dec!(19.40));
        let low = apply_operation(&op, &item(dec!(10), dec!(20)), &ctx, dec!(18)).unwrap();
        assert_eq!(low, dec!(18));
    }

    #[test]
    fn test_mismatched_clamp_parameter_is_identity() {
        let ctx = test_ctx();
        let op = Operation::new(OpKind::Max, OpParameter::None, Priority::MinimumViable);
        let result = apply_operation(&op, &item(dec!(10), dec!(20)), &ctx, dec!(1)).unwrap();
        assert_eq!(result, dec!(1));
    }

    #[test]
    fn test_floor_and_ceiling_are_idempotent() {
        let ctx = test_ctx();
        let it = item(dec!(5), dec!(10));
        let floor = Operation::new(OpKind::Floor, OpParameter::None, Priority::FloorPrice);
        let once = apply_operation(&floor, &it, &ctx, dec!(9.87)).unwrap();
        let twice = apply_operation(&floor, &it, &ctx, once).unwrap();
        assert_eq!(once, twice);

        let ceiling = Operation::new(OpKind::Ceiling, OpParameter::None, Priority::CeilingPrice);
        let once = apply_operation(&ceiling, &it, &ctx, dec!(9.01)).unwrap();
        let twice = apply_operation(&ceiling, &it, &ctx, once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_round_uses_bankers_rounding() {
        let ctx = test_ctx();
        let it = item(dec!(5), dec!(10));
        let round = Operation::new(OpKind::Round, OpParameter::None, Priority::CentFinisher);
        // Midpoint rounds to even
        assert_eq!(apply_operation(&round, &it, &ctx, dec!(1.005)).unwrap(), dec!(1.00));
        assert_eq!(apply_operation(&round, &it, &ctx, dec!(1.015)).unwrap(), dec!(1.02));
        assert_eq!(apply_operation(&round, &it, &ctx, dec!(1.237)).unwrap(), dec!(1.24));
    }

    #[test]
    fn test_stable_sort_preserves_tie_order() {
        let ctx = test_ctx();
        // Cent finisher (floor + 0.95) then psychological at the same
        // priority: 10 -> 10.95 -> fraction 0.95 -> 10.99
        let ops = vec![
            Operation::new(
                OpKind::Custom,
                OpParameter::Cents(CentValue::C95),
                Priority::CentFinisher,
            ),
            Operation::new(
                OpKind::Custom,
                OpParameter::Psychological,
                Priority::CentFinisher,
            ),
        ];
        let result = evaluate(&item(dec!(5), dec!(10)), &ops, &ctx).unwrap();
        assert_eq!(result, dec!(10.99));
    }

    #[test]
    fn test_out_of_order_list_is_sorted_before_folding() {
        let ctx = test_ctx();
        // Ceiling listed first must still run last
        let ops = vec![
            Operation::new(OpKind::Ceiling, OpParameter::None, Priority::CeilingPrice),
            Operation::new(
                OpKind::Multiply,
                OpParameter::Factor(Factor::F0_90),
                Priority::BaseAdjustment,
            ),
        ];
        let result = evaluate(&item(dec!(5), dec!(10.50)), &ops, &ctx).unwrap();
        // 10.50 * 0.90 = 9.45 -> ceil -> 10
        assert_eq!(result, dec!(10));
    }

    #[test]
    fn test_dollar_store_mode_applies_final_ceiling() {
        let mut ctx = test_ctx();
        ctx.dollar_store = true;
        let result = evaluate(&item(dec!(5), dec!(10.25)), &[], &ctx).unwrap();
        assert_eq!(result, dec!(11));
    }

    #[test]
    fn test_final_result_clamped_to_zero() {
        let ctx = test_ctx();
        // Key price point on a sub-dollar price: floor(0.40) - 0.01 = -0.01
        let ops = vec![Operation::new(
            OpKind::Custom,
            OpParameter::KeyPricePoint,
            Priority::KeyPricePoint,
        )];
        let result = evaluate(&item(dec!(0.10), dec!(0.40)), &ops, &ctx).unwrap();
        assert_eq!(result, Decimal::ZERO);
    }
}
