//! Custom operation handler
//!
//! Implements the pricing rules that do not reduce to a single primitive:
//! the reasonable-increase curve, the conflated margin-multiplier /
//! penetration rule, the seasonal table, key-price-point snapping, the
//! psychological rounding ladder, and cent finishers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{ComputationError, PricingItem};
use crate::pipeline::executor::EvalContext;
use crate::pipeline::op::OpParameter;

/// Psychological price-ending ladder; the first step strictly greater than
/// the current fraction wins, so a fraction of exactly 0.25 climbs to 0.49.
const LADDER: [Decimal; 8] = [
    dec!(0.25),
    dec!(0.49),
    dec!(0.69),
    dec!(0.79),
    dec!(0.89),
    dec!(0.95),
    dec!(0.99),
    dec!(1.00),
];

/// Dispatch a custom operation on its parameter tag
///
/// The whole and fractional parts are computed here, from the running price
/// at dispatch time.
pub(crate) fn apply(
    parameter: OpParameter,
    item: &PricingItem,
    ctx: &EvalContext,
    current: Decimal,
) -> Result<Decimal, ComputationError> {
    let whole = current.floor();
    let fraction = current - whole;

    match parameter {
        OpParameter::Reasonable => {
            // The curve is keyed on the item's retail price, not on the
            // running price; the multiplier then applies to the running price.
            let total = ctx.reasonable.total_increase(item.retail_price)?;
            Ok(current * (Decimal::ONE + total))
        }
        OpParameter::None => Ok(margin_and_penetration(item, ctx, current)),
        OpParameter::Seasonal => Ok(current * ctx.season.multiplier()),
        OpParameter::KeyPricePoint => Ok(key_price_point(current)),
        OpParameter::Psychological => Ok(psychological(whole, fraction)),
        OpParameter::Cents(cents) => Ok(whole + cents.value()),
        // Factor and clamp-anchor tags never reach Custom dispatch
        _ => Ok(current),
    }
}

/// Conflated margin-multiplier and max-penetration rule
///
/// One operation tag serves both the DoubleMargin/TripleMargin flags and
/// MaxPenetrationPrice, so both pieces run unconditionally whichever flag
/// compiled the op: first the margin ladder keyed on the price shape, then
/// the penetration clamp `max(minimum_viable, price * 0.93)`.
fn margin_and_penetration(item: &PricingItem, ctx: &EvalContext, current: Decimal) -> Decimal {
    let mut result = current;
    let margin = result - item.unit_cost;

    if result > item.unit_cost * dec!(3) {
        result = item.unit_cost + margin * dec!(3);
    } else if result > item.unit_cost * dec!(2) {
        result = item.unit_cost + margin * dec!(2);
    }

    ctx.minimum_viable(item).max(result * dec!(0.93))
}

/// Snap to the nearest salient round-number target below
fn key_price_point(price: Decimal) -> Decimal {
    if price <= dec!(10) {
        price.floor() - dec!(0.01)
    } else if price <= dec!(20) {
        price.floor() + dec!(0.99)
    } else if price <= dec!(50) {
        (price / dec!(5)).floor() * dec!(5) - dec!(0.01)
    } else {
        (price / dec!(10)).floor() * dec!(10) - dec!(0.01)
    }
}

/// Climb the ladder to the first ending above the current fraction
fn psychological(whole: Decimal, fraction: Decimal) -> Decimal {
    for step in LADDER {
        if fraction < step {
            return whole + step;
        }
    }
    // Fraction is always < 1, so the 1.00 rung above is unreachable only
    // if the ladder were emptied; keep the fallthrough total.
    whole + Decimal::ONE
}
