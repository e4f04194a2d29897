//! Pricing flags
//!
//! A `FlagSet` is the declarative input to the compiler: a named-bit set of
//! pricing options over a `u64`, so the host's store can persist and
//! round-trip the raw integer. Flags are independently settable; mutual
//! exclusion within a family (discount tier, increase tier, cent finisher)
//! is not a data-model constraint. It is resolved here by explicit
//! first-match-wins functions, checked in strict descending magnitude order,
//! which the compiler consumes.
//!
//! Bit positions are fixed and must never be reordered: persisted flag sets
//! depend on them.

pub mod strategy;

pub use strategy::Strategy;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::pipeline::op::{CentValue, Factor};

/// A set of simultaneously active pricing options
///
/// # Example
/// ```
/// use pricing_engine_core_rs::FlagSet;
///
/// let flags = FlagSet::DISCOUNT_10_PERCENT | FlagSet::USE_MINIMUM_VIABLE;
/// assert!(flags.contains(FlagSet::DISCOUNT_10_PERCENT));
/// assert_eq!(FlagSet::from_bits(flags.bits()), flags);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSet(u64);

impl FlagSet {
    pub const NONE: FlagSet = FlagSet(0);

    // Discount tiers (bits 0..=5)
    pub const DISCOUNT_2_PERCENT: FlagSet = FlagSet(1 << 0);
    pub const DISCOUNT_5_PERCENT: FlagSet = FlagSet(1 << 1);
    pub const DISCOUNT_10_PERCENT: FlagSet = FlagSet(1 << 2);
    pub const DISCOUNT_15_PERCENT: FlagSet = FlagSet(1 << 3);
    pub const DISCOUNT_20_PERCENT: FlagSet = FlagSet(1 << 4);
    pub const DISCOUNT_25_PERCENT: FlagSet = FlagSet(1 << 5);

    // Increase tiers (bits 6..=11)
    pub const INCREASE_1_PERCENT: FlagSet = FlagSet(1 << 6);
    pub const INCREASE_5_PERCENT: FlagSet = FlagSet(1 << 7);
    pub const INCREASE_10_PERCENT: FlagSet = FlagSet(1 << 8);
    pub const INCREASE_15_PERCENT: FlagSet = FlagSet(1 << 9);
    pub const INCREASE_20_PERCENT: FlagSet = FlagSet(1 << 10);
    pub const INCREASE_25_PERCENT: FlagSet = FlagSet(1 << 11);

    // Cost-derived floor
    pub const USE_MINIMUM_VIABLE: FlagSet = FlagSet(1 << 12);

    // Margin multipliers
    pub const DOUBLE_MARGIN: FlagSet = FlagSet(1 << 13);
    pub const TRIPLE_MARGIN: FlagSet = FlagSet(1 << 14);

    // Market-anchored rules
    pub const COMPETITIVE_MATCH: FlagSet = FlagSet(1 << 15);
    pub const MAX_PENETRATION_PRICE: FlagSet = FlagSet(1 << 16);

    // Premium image
    pub const PREMIUM_IMAGE_OFFSET: FlagSet = FlagSet(1 << 17);

    // Seasonal adjustment
    pub const SEASONAL_ADJUSTMENT: FlagSet = FlagSet(1 << 18);

    // Bundle pricing
    pub const BUNDLE_PRICING: FlagSet = FlagSet(1 << 19);

    // Key price points
    pub const KEY_PRICE_POINT: FlagSet = FlagSet(1 << 20);

    // Whole-currency rounding
    pub const FLOOR_PRICE: FlagSet = FlagSet(1 << 21);
    pub const CEILING_PRICE: FlagSet = FlagSet(1 << 22);

    // Cent finishers (bits 23..=29)
    pub const ADD_50_CENTS: FlagSet = FlagSet(1 << 23);
    pub const ADD_99_CENTS: FlagSet = FlagSet(1 << 24);
    pub const ROUND_TO_25_CENTS: FlagSet = FlagSet(1 << 25);
    pub const ROUND_TO_49_CENTS: FlagSet = FlagSet(1 << 26);
    pub const ROUND_TO_75_CENTS: FlagSet = FlagSet(1 << 27);
    pub const ROUND_TO_95_CENTS: FlagSet = FlagSet(1 << 28);
    pub const ROUND_TO_99_CENTS: FlagSet = FlagSet(1 << 29);

    // Special pricing
    pub const PSYCHOLOGICAL_PRICING: FlagSet = FlagSet(1 << 30);
    pub const REASONABLE_INCREASE: FlagSet = FlagSet(1 << 31);

    /// Raw bit representation for persistence
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Rebuild a flag set from persisted bits
    ///
    /// Bits outside the defined range are retained in the value but ignored
    /// by family resolution and compilation.
    pub const fn from_bits(bits: u64) -> FlagSet {
        FlagSet(bits)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every flag in `other` is set here
    pub const fn contains(self, other: FlagSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: FlagSet) -> FlagSet {
        FlagSet(self.0 | other.0)
    }

    pub fn insert(&mut self, other: FlagSet) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: FlagSet) {
        self.0 &= !other.0;
    }

    /// Resolve the discount family, highest magnitude first
    ///
    /// If several discount flags are set simultaneously, the largest wins and
    /// the rest are silently ignored. This is deliberate policy, not a
    /// validation error.
    pub fn discount_tier(self) -> Option<DiscountTier> {
        if self.contains(Self::DISCOUNT_25_PERCENT) {
            Some(DiscountTier::TwentyFive)
        } else if self.contains(Self::DISCOUNT_20_PERCENT) {
            Some(DiscountTier::Twenty)
        } else if self.contains(Self::DISCOUNT_15_PERCENT) {
            Some(DiscountTier::Fifteen)
        } else if self.contains(Self::DISCOUNT_10_PERCENT) {
            Some(DiscountTier::Ten)
        } else if self.contains(Self::DISCOUNT_5_PERCENT) {
            Some(DiscountTier::Five)
        } else if self.contains(Self::DISCOUNT_2_PERCENT) {
            Some(DiscountTier::Two)
        } else {
            None
        }
    }

    /// Resolve the increase family, highest magnitude first
    ///
    /// The reasonable-increase rule is the lowest-precedence member: any
    /// fixed tier set alongside it wins.
    pub fn increase_tier(self) -> Option<IncreaseTier> {
        if self.contains(Self::INCREASE_25_PERCENT) {
            Some(IncreaseTier::TwentyFive)
        } else if self.contains(Self::INCREASE_20_PERCENT) {
            Some(IncreaseTier::Twenty)
        } else if self.contains(Self::INCREASE_15_PERCENT) {
            Some(IncreaseTier::Fifteen)
        } else if self.contains(Self::INCREASE_10_PERCENT) {
            Some(IncreaseTier::Ten)
        } else if self.contains(Self::INCREASE_5_PERCENT) {
            Some(IncreaseTier::Five)
        } else if self.contains(Self::INCREASE_1_PERCENT) {
            Some(IncreaseTier::One)
        } else if self.contains(Self::REASONABLE_INCREASE) {
            Some(IncreaseTier::Reasonable)
        } else {
            None
        }
    }

    /// Resolve the cent-finisher family
    ///
    /// Check order: Add99, Add50, then the round-to targets descending.
    pub fn cent_style(self) -> Option<CentStyle> {
        if self.contains(Self::ADD_99_CENTS) {
            Some(CentStyle::Add99)
        } else if self.contains(Self::ADD_50_CENTS) {
            Some(CentStyle::Add50)
        } else if self.contains(Self::ROUND_TO_99_CENTS) {
            Some(CentStyle::RoundTo99)
        } else if self.contains(Self::ROUND_TO_95_CENTS) {
            Some(CentStyle::RoundTo95)
        } else if self.contains(Self::ROUND_TO_75_CENTS) {
            Some(CentStyle::RoundTo75)
        } else if self.contains(Self::ROUND_TO_49_CENTS) {
            Some(CentStyle::RoundTo49)
        } else if self.contains(Self::ROUND_TO_25_CENTS) {
            Some(CentStyle::RoundTo25)
        } else {
            None
        }
    }
}

impl BitOr for FlagSet {
    type Output = FlagSet;

    fn bitor(self, rhs: FlagSet) -> FlagSet {
        self.union(rhs)
    }
}

impl BitOrAssign for FlagSet {
    fn bitor_assign(&mut self, rhs: FlagSet) {
        self.insert(rhs);
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({:#x})", self.0)
    }
}

/// Resolved discount tier, one per flag set at most
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountTier {
    TwentyFive,
    Twenty,
    Fifteen,
    Ten,
    Five,
    Two,
}

impl DiscountTier {
    /// Multiply constant this tier compiles to
    pub fn factor(self) -> Factor {
        match self {
            DiscountTier::TwentyFive => Factor::F0_75,
            DiscountTier::Twenty => Factor::F0_80,
            DiscountTier::Fifteen => Factor::F0_85,
            DiscountTier::Ten => Factor::F0_90,
            DiscountTier::Five => Factor::F0_95,
            DiscountTier::Two => Factor::F0_98,
        }
    }
}

/// Resolved increase tier, one per flag set at most
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncreaseTier {
    TwentyFive,
    Twenty,
    Fifteen,
    Ten,
    Five,
    One,
    /// Curve-driven markup; compiles to a custom operation, not a constant
    Reasonable,
}

impl IncreaseTier {
    /// Multiply constant for fixed tiers, `None` for the reasonable curve
    pub fn factor(self) -> Option<Factor> {
        match self {
            IncreaseTier::TwentyFive => Some(Factor::F1_25),
            IncreaseTier::Twenty => Some(Factor::F1_20),
            IncreaseTier::Fifteen => Some(Factor::F1_15),
            IncreaseTier::Ten => Some(Factor::F1_10),
            IncreaseTier::Five => Some(Factor::F1_05),
            IncreaseTier::One => Some(Factor::F1_01),
            IncreaseTier::Reasonable => None,
        }
    }
}

/// Resolved cent finisher, one per flag set at most
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentStyle {
    Add99,
    Add50,
    RoundTo99,
    RoundTo95,
    RoundTo75,
    RoundTo49,
    RoundTo25,
}

impl CentStyle {
    /// Cent constant this style compiles to
    ///
    /// Add99 and RoundTo99 land on the same constant: both finish the price
    /// at whole dollars plus 99 cents.
    pub fn cents(self) -> CentValue {
        match self {
            CentStyle::Add99 | CentStyle::RoundTo99 => CentValue::C99,
            CentStyle::RoundTo95 => CentValue::C95,
            CentStyle::RoundTo75 => CentValue::C75,
            CentStyle::Add50 => CentValue::C50,
            CentStyle::RoundTo49 => CentValue::C49,
            CentStyle::RoundTo25 => CentValue::C25,
        }
    }
}
