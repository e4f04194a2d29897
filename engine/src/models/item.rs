//! Catalog item model
//!
//! A pricing item is the per-call input to the engine: what the item costs
//! and what the market currently charges for it. The engine never mutates
//! an item; validation (both values strictly positive) happens at the start
//! of every evaluation.
//!
//! CRITICAL: all money values are `Decimal`, never floats.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::flags::Strategy;

/// A catalog item priced by the engine
///
/// `name` and `strategy` are carried for grid and snapshot collaborators;
/// the engine itself reads only `unit_cost` and `retail_price`.
///
/// # Example
/// ```
/// use pricing_engine_core_rs::PricingItem;
/// use rust_decimal_macros::dec;
///
/// let item = PricingItem::new(dec!(10), dec!(20));
/// assert_eq!(item.retail_price, dec!(20));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingItem {
    /// Display name (host-facing, not read by the engine)
    #[serde(default)]
    pub name: String,

    /// What the item costs us, per unit (must be > 0 to evaluate)
    pub unit_cost: Decimal,

    /// Current market price anchor (must be > 0 to evaluate)
    pub retail_price: Decimal,

    /// Per-item preset assigned by the host
    #[serde(default)]
    pub strategy: Strategy,
}

impl PricingItem {
    /// Create an unnamed item from cost and market price
    pub fn new(unit_cost: Decimal, retail_price: Decimal) -> Self {
        PricingItem {
            name: String::new(),
            unit_cost,
            retail_price,
            strategy: Strategy::default(),
        }
    }

    /// Create a named item with an assigned preset
    pub fn named(
        name: impl Into<String>,
        unit_cost: Decimal,
        retail_price: Decimal,
        strategy: Strategy,
    ) -> Self {
        PricingItem {
            name: name.into(),
            unit_cost,
            retail_price,
            strategy,
        }
    }
}

/// Derived pricing summary for one item under one strategy
///
/// The metrics the host grid displays next to the recommended price:
/// margin relative to cost and distance from the market anchor, both in
/// percent, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Final engine output
    pub recommended_price: Decimal,

    /// `(price - unit_cost) / unit_cost * 100`, rounded to 2 dp
    pub margin_percent: Decimal,

    /// `(price / retail_price - 1) * 100`, rounded to 2 dp
    pub price_relative_to_market: Decimal,

    /// Preset the quote was computed with
    pub strategy: Strategy,
}
