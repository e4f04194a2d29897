//! Flag compiler
//!
//! Maps a flag set to its ordered operation list. Pure and deterministic:
//! the same flag set always compiles to the same list, which is why the
//! engine memoizes results per distinct flag set.
//!
//! Family conflicts are resolved by the flag set's first-match-wins
//! accessors before anything is emitted; losing flags are silently ignored.

use crate::flags::FlagSet;
use crate::pipeline::op::{Factor, OpKind, OpParameter, Operation, Priority};

/// Compile a flag set into its priority-ordered operation pipeline
///
/// Operations are emitted in ascending priority, so the list is already
/// sorted; the executor still stable-sorts to keep its contract independent
/// of emission order. Discount and increase are independent families and may
/// both emit at priority 1, discount first.
pub fn compile(flags: FlagSet) -> Vec<Operation> {
    let mut operations = Vec::new();

    // Priority 1: percentage adjustments on the market anchor
    if let Some(tier) = flags.discount_tier() {
        operations.push(Operation::new(
            OpKind::Multiply,
            OpParameter::Factor(tier.factor()),
            Priority::BaseAdjustment,
        ));
    }
    if let Some(tier) = flags.increase_tier() {
        let operation = match tier.factor() {
            Some(factor) => Operation::new(
                OpKind::Multiply,
                OpParameter::Factor(factor),
                Priority::BaseAdjustment,
            ),
            None => Operation::new(
                OpKind::Custom,
                OpParameter::Reasonable,
                Priority::BaseAdjustment,
            ),
        };
        operations.push(operation);
    }

    // Priority 2: cost-derived floor
    if flags.contains(FlagSet::USE_MINIMUM_VIABLE) {
        operations.push(Operation::new(
            OpKind::Max,
            OpParameter::UnitCost,
            Priority::MinimumViable,
        ));
    }

    // Priority 3: margin multipliers. DoubleMargin and TripleMargin compile
    // to the same conflated Custom(None) op; the handler re-derives the
    // ladder from the price shape, not from which flag was set.
    if flags.contains(FlagSet::DOUBLE_MARGIN) || flags.contains(FlagSet::TRIPLE_MARGIN) {
        operations.push(Operation::new(
            OpKind::Custom,
            OpParameter::None,
            Priority::MarginMultiplier,
        ));
    }

    // Priority 4: market-anchored ceiling and penetration clamp.
    // MaxPenetrationPrice shares the Custom(None) tag with the margin family.
    if flags.contains(FlagSet::COMPETITIVE_MATCH) {
        operations.push(Operation::new(
            OpKind::Min,
            OpParameter::RetailPrice,
            Priority::Competitive,
        ));
    }
    if flags.contains(FlagSet::MAX_PENETRATION_PRICE) {
        operations.push(Operation::new(
            OpKind::Custom,
            OpParameter::None,
            Priority::Competitive,
        ));
    }

    // Priority 5: premium image markup
    if flags.contains(FlagSet::PREMIUM_IMAGE_OFFSET) {
        operations.push(Operation::new(
            OpKind::Multiply,
            OpParameter::Factor(Factor::F1_08),
            Priority::PremiumOffset,
        ));
    }

    // Priority 6: seasonal table
    if flags.contains(FlagSet::SEASONAL_ADJUSTMENT) {
        operations.push(Operation::new(
            OpKind::Custom,
            OpParameter::Seasonal,
            Priority::Seasonal,
        ));
    }

    // Priority 7: bundle discount
    if flags.contains(FlagSet::BUNDLE_PRICING) {
        operations.push(Operation::new(
            OpKind::Multiply,
            OpParameter::Factor(Factor::F0_97),
            Priority::Bundle,
        ));
    }

    // Priority 8: key price points
    if flags.contains(FlagSet::KEY_PRICE_POINT) {
        operations.push(Operation::new(
            OpKind::Custom,
            OpParameter::KeyPricePoint,
            Priority::KeyPricePoint,
        ));
    }

    // Priority 9: whole-currency floor
    if flags.contains(FlagSet::FLOOR_PRICE) {
        operations.push(Operation::new(
            OpKind::Floor,
            OpParameter::None,
            Priority::FloorPrice,
        ));
    }

    // Priority 10: cent finisher, then the psychological ladder. Both may be
    // present; the stable sort keeps the finisher first.
    if let Some(style) = flags.cent_style() {
        operations.push(Operation::new(
            OpKind::Custom,
            OpParameter::Cents(style.cents()),
            Priority::CentFinisher,
        ));
    }
    if flags.contains(FlagSet::PSYCHOLOGICAL_PRICING) {
        operations.push(Operation::new(
            OpKind::Custom,
            OpParameter::Psychological,
            Priority::CentFinisher,
        ));
    }

    // Priority 11: whole-currency ceiling
    if flags.contains(FlagSet::CEILING_PRICE) {
        operations.push(Operation::new(
            OpKind::Ceiling,
            OpParameter::None,
            Priority::CeilingPrice,
        ));
    }

    operations
}
