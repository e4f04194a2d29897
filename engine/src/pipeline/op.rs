//! Pricing operations
//!
//! The compiled artifact: an immutable `{ kind, parameter, priority }`
//! record per primitive transformation. Constants are referenced by tag and
//! resolved by lookup at execution time, never stored inline, so a compiled
//! list is pure data that can be inspected or logged by the host.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Execution stage of an operation, ordinals 1..=11
///
/// The executor stable-sorts by this before folding, so ties preserve the
/// compiler's emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Priority {
    /// Percentage discount or increase on the market anchor
    BaseAdjustment = 1,
    /// Cost-derived price floor
    MinimumViable = 2,
    /// Margin-multiplier ladder
    MarginMultiplier = 3,
    /// Competitive ceiling and penetration clamp
    Competitive = 4,
    /// Premium image markup
    PremiumOffset = 5,
    /// Seasonal table
    Seasonal = 6,
    /// Bundle discount
    Bundle = 7,
    /// Key-price-point snapping
    KeyPricePoint = 8,
    /// Whole-currency floor
    FloorPrice = 9,
    /// Cent finishers and psychological ladder
    CentFinisher = 10,
    /// Whole-currency ceiling, always last
    CeilingPrice = 11,
}

impl Priority {
    /// Ordinal position in the pipeline
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Primitive transformation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    Multiply,
    Add,
    Max,
    Min,
    Floor,
    Ceiling,
    Round,
    Custom,
}

/// Named multiply constant
///
/// Resolved via `value()`; every variant is emitted by some compile path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum Factor {
    F0_75,
    F0_80,
    F0_85,
    F0_90,
    F0_95,
    F0_97,
    F0_98,
    F1_01,
    F1_05,
    F1_08,
    F1_10,
    F1_15,
    F1_20,
    F1_25,
}

impl Factor {
    /// The decimal constant this tag stands for
    pub fn value(self) -> Decimal {
        match self {
            Factor::F0_75 => dec!(0.75),
            Factor::F0_80 => dec!(0.80),
            Factor::F0_85 => dec!(0.85),
            Factor::F0_90 => dec!(0.90),
            Factor::F0_95 => dec!(0.95),
            Factor::F0_97 => dec!(0.97),
            Factor::F0_98 => dec!(0.98),
            Factor::F1_01 => dec!(1.01),
            Factor::F1_05 => dec!(1.05),
            Factor::F1_08 => dec!(1.08),
            Factor::F1_10 => dec!(1.10),
            Factor::F1_15 => dec!(1.15),
            Factor::F1_20 => dec!(1.20),
            Factor::F1_25 => dec!(1.25),
        }
    }
}

/// Named cent constant for finishers and the Add primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CentValue {
    C25,
    C49,
    C50,
    C75,
    C95,
    C99,
}

impl CentValue {
    /// The decimal cent amount this tag stands for
    pub fn value(self) -> Decimal {
        match self {
            CentValue::C25 => dec!(0.25),
            CentValue::C49 => dec!(0.49),
            CentValue::C50 => dec!(0.50),
            CentValue::C75 => dec!(0.75),
            CentValue::C95 => dec!(0.95),
            CentValue::C99 => dec!(0.99),
        }
    }
}

/// Operation parameter: a constant tag or a custom-handler branch selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpParameter {
    /// No parameter; for Custom this selects the conflated
    /// margin-multiplier / penetration branch
    None,
    /// Multiply constant
    Factor(Factor),
    /// Cent constant (Custom finisher or Add primitive)
    Cents(CentValue),
    /// Clamp anchor: minimum viable price derived from unit cost
    UnitCost,
    /// Clamp anchor: competitive price derived from retail price
    RetailPrice,
    /// Reasonable-increase curve branch
    Reasonable,
    /// Seasonal table branch
    Seasonal,
    /// Key-price-point snapping branch
    KeyPricePoint,
    /// Psychological rounding ladder branch
    Psychological,
}

/// One primitive price transformation, immutable once compiled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    pub kind: OpKind,
    pub parameter: OpParameter,
    pub priority: Priority,
}

impl Operation {
    pub const fn new(kind: OpKind, parameter: OpParameter, priority: Priority) -> Self {
        Operation {
            kind,
            parameter,
            priority,
        }
    }
}
