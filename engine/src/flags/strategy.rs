//! Strategy presets
//!
//! Named, precomputed flag combinations. A preset carries no behavior of its
//! own: `flags()` is a pure table lookup, and the compiler and executor
//! treat a preset's flag set exactly like any caller-assembled one.
//!
//! Several presets intentionally share a flag set (e.g. `ValuePlus` and
//! `Psychological50`); they exist as distinct merchandising labels.

use serde::{Deserialize, Serialize};

use super::FlagSet;

/// Named pricing strategy mapping to a fixed flag set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    None,
    Balanced,
    Aggressive,
    Premium,
    DollarStore,
    Psychological50,
    Psychological99,
    Budget,
    ValuePlus,
    PremiumPlus,
    Clearance,
    CompetitiveEdge,
    LuxuryTier,
    MarketLeader,
    EndOfLine,
    BulkPricing,
    SeasonalPromo,
    NewProduct,
    QuickSale,
    DeepDiscount,
    UltraPremium,
    EconomyPlus,
    MidtierValue,
    BlackFriday,
    HighMargin,
    BundleDeal,
    CompetitiveDestroyer,
    PremiumExperience,
    DynamicMarket,
    CyberMonday,
    LastChance,
    MembershipTier,
    EliteStatus,
    BusinessClass,
    FirstClass,
    FlashSale,
    WarehouseClearance,
    HolidaySpecial,
    SummerSale,
    WinterPromo,
    SpringCollection,
    FallLineup,
    VipCustomer,
    MarketEntry,
    ExclusiveItem,
    SmallPremium,
    VerySmallPremium,
    MarketRegulator,
    MarketRegulatorPsychological,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::None
    }
}

impl Strategy {
    /// Every preset, in declaration order (for host-side pickers)
    pub const ALL: [Strategy; 49] = [
        Strategy::None,
        Strategy::Balanced,
        Strategy::Aggressive,
        Strategy::Premium,
        Strategy::DollarStore,
        Strategy::Psychological50,
        Strategy::Psychological99,
        Strategy::Budget,
        Strategy::ValuePlus,
        Strategy::PremiumPlus,
        Strategy::Clearance,
        Strategy::CompetitiveEdge,
        Strategy::LuxuryTier,
        Strategy::MarketLeader,
        Strategy::EndOfLine,
        Strategy::BulkPricing,
        Strategy::SeasonalPromo,
        Strategy::NewProduct,
        Strategy::QuickSale,
        Strategy::DeepDiscount,
        Strategy::UltraPremium,
        Strategy::EconomyPlus,
        Strategy::MidtierValue,
        Strategy::BlackFriday,
        Strategy::HighMargin,
        Strategy::BundleDeal,
        Strategy::CompetitiveDestroyer,
        Strategy::PremiumExperience,
        Strategy::DynamicMarket,
        Strategy::CyberMonday,
        Strategy::LastChance,
        Strategy::MembershipTier,
        Strategy::EliteStatus,
        Strategy::BusinessClass,
        Strategy::FirstClass,
        Strategy::FlashSale,
        Strategy::WarehouseClearance,
        Strategy::HolidaySpecial,
        Strategy::SummerSale,
        Strategy::WinterPromo,
        Strategy::SpringCollection,
        Strategy::FallLineup,
        Strategy::VipCustomer,
        Strategy::MarketEntry,
        Strategy::ExclusiveItem,
        Strategy::SmallPremium,
        Strategy::VerySmallPremium,
        Strategy::MarketRegulator,
        Strategy::MarketRegulatorPsychological,
    ];

    /// The flag set this preset stands for
    pub fn flags(self) -> FlagSet {
        match self {
            Strategy::None => FlagSet::NONE,
            Strategy::Balanced => FlagSet::DISCOUNT_2_PERCENT | FlagSet::USE_MINIMUM_VIABLE,
            Strategy::Aggressive => FlagSet::DISCOUNT_5_PERCENT | FlagSet::USE_MINIMUM_VIABLE,
            Strategy::Premium => FlagSet::INCREASE_10_PERCENT | FlagSet::USE_MINIMUM_VIABLE,
            Strategy::DollarStore => FlagSet::CEILING_PRICE | FlagSet::USE_MINIMUM_VIABLE,
            Strategy::Psychological50 => {
                FlagSet::DISCOUNT_2_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::FLOOR_PRICE
                    | FlagSet::ADD_50_CENTS
            }
            Strategy::Psychological99 => {
                FlagSet::DISCOUNT_2_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::FLOOR_PRICE
                    | FlagSet::ADD_99_CENTS
            }
            Strategy::Budget => {
                FlagSet::DISCOUNT_5_PERCENT | FlagSet::USE_MINIMUM_VIABLE | FlagSet::FLOOR_PRICE
            }
            Strategy::ValuePlus => {
                FlagSet::DISCOUNT_2_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::FLOOR_PRICE
                    | FlagSet::ADD_50_CENTS
            }
            Strategy::PremiumPlus => {
                FlagSet::INCREASE_10_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::CEILING_PRICE
            }
            Strategy::Clearance => FlagSet::DISCOUNT_5_PERCENT | FlagSet::FLOOR_PRICE,
            Strategy::CompetitiveEdge => {
                FlagSet::DISCOUNT_2_PERCENT | FlagSet::USE_MINIMUM_VIABLE | FlagSet::FLOOR_PRICE
            }
            Strategy::LuxuryTier => {
                FlagSet::INCREASE_10_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::FLOOR_PRICE
                    | FlagSet::ADD_99_CENTS
            }
            Strategy::MarketLeader => {
                FlagSet::INCREASE_10_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::ADD_50_CENTS
            }
            Strategy::EndOfLine => {
                FlagSet::DISCOUNT_5_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::FLOOR_PRICE
                    | FlagSet::ADD_99_CENTS
            }
            Strategy::BulkPricing => {
                FlagSet::DISCOUNT_2_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::CEILING_PRICE
            }
            Strategy::SeasonalPromo => {
                FlagSet::DISCOUNT_5_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::FLOOR_PRICE
                    | FlagSet::ADD_50_CENTS
            }
            Strategy::NewProduct => {
                FlagSet::INCREASE_10_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::FLOOR_PRICE
                    | FlagSet::ADD_99_CENTS
            }
            Strategy::QuickSale => {
                FlagSet::DISCOUNT_5_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::FLOOR_PRICE
                    | FlagSet::ADD_50_CENTS
            }
            Strategy::DeepDiscount => {
                FlagSet::DISCOUNT_10_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::ROUND_TO_95_CENTS
            }
            Strategy::UltraPremium => {
                FlagSet::INCREASE_20_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::CEILING_PRICE
                    | FlagSet::ADD_99_CENTS
            }
            Strategy::EconomyPlus => {
                FlagSet::DISCOUNT_5_PERCENT
                    | FlagSet::COMPETITIVE_MATCH
                    | FlagSet::ROUND_TO_49_CENTS
            }
            Strategy::MidtierValue => {
                FlagSet::INCREASE_5_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::ROUND_TO_95_CENTS
            }
            Strategy::BlackFriday => {
                FlagSet::DISCOUNT_10_PERCENT | FlagSet::FLOOR_PRICE | FlagSet::ADD_99_CENTS
            }
            Strategy::HighMargin => {
                FlagSet::INCREASE_15_PERCENT | FlagSet::DOUBLE_MARGIN | FlagSet::CEILING_PRICE
            }
            Strategy::BundleDeal => {
                FlagSet::DISCOUNT_5_PERCENT
                    | FlagSet::BUNDLE_PRICING
                    | FlagSet::ROUND_TO_95_CENTS
            }
            Strategy::CompetitiveDestroyer => {
                FlagSet::DISCOUNT_10_PERCENT | FlagSet::COMPETITIVE_MATCH | FlagSet::FLOOR_PRICE
            }
            Strategy::PremiumExperience => {
                FlagSet::INCREASE_15_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::ADD_99_CENTS
            }
            Strategy::DynamicMarket => {
                FlagSet::COMPETITIVE_MATCH
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::ROUND_TO_49_CENTS
            }
            Strategy::CyberMonday => {
                FlagSet::DISCOUNT_15_PERCENT
                    | FlagSet::USE_MINIMUM_VIABLE
                    | FlagSet::KEY_PRICE_POINT
            }
            Strategy::LastChance => {
                FlagSet::DISCOUNT_20_PERCENT | FlagSet::FLOOR_PRICE | FlagSet::ADD_99_CENTS
            }
            Strategy::MembershipTier => {
                FlagSet::DISCOUNT_10_PERCENT
                    | FlagSet::ROUND_TO_95_CENTS
                    | FlagSet::USE_MINIMUM_VIABLE
            }
            Strategy::EliteStatus => {
                FlagSet::INCREASE_15_PERCENT
                    | FlagSet::PREMIUM_IMAGE_OFFSET
                    | FlagSet::ADD_99_CENTS
            }
            Strategy::BusinessClass => {
                FlagSet::INCREASE_20_PERCENT
                    | FlagSet::DOUBLE_MARGIN
                    | FlagSet::ROUND_TO_95_CENTS
            }
            Strategy::FirstClass => {
                FlagSet::INCREASE_25_PERCENT
                    | FlagSet::TRIPLE_MARGIN
                    | FlagSet::KEY_PRICE_POINT
            }
            Strategy::FlashSale => {
                FlagSet::DISCOUNT_15_PERCENT
                    | FlagSet::ROUND_TO_49_CENTS
                    | FlagSet::USE_MINIMUM_VIABLE
            }
            Strategy::WarehouseClearance => {
                FlagSet::DISCOUNT_25_PERCENT
                    | FlagSet::MAX_PENETRATION_PRICE
                    | FlagSet::ROUND_TO_99_CENTS
            }
            Strategy::HolidaySpecial => {
                FlagSet::DISCOUNT_10_PERCENT
                    | FlagSet::SEASONAL_ADJUSTMENT
                    | FlagSet::KEY_PRICE_POINT
            }
            Strategy::SummerSale => {
                FlagSet::DISCOUNT_15_PERCENT
                    | FlagSet::SEASONAL_ADJUSTMENT
                    | FlagSet::ROUND_TO_49_CENTS
            }
            Strategy::WinterPromo => {
                FlagSet::DISCOUNT_5_PERCENT
                    | FlagSet::SEASONAL_ADJUSTMENT
                    | FlagSet::ROUND_TO_95_CENTS
            }
            Strategy::SpringCollection => {
                FlagSet::INCREASE_10_PERCENT
                    | FlagSet::SEASONAL_ADJUSTMENT
                    | FlagSet::PREMIUM_IMAGE_OFFSET
            }
            Strategy::FallLineup => {
                FlagSet::INCREASE_5_PERCENT
                    | FlagSet::SEASONAL_ADJUSTMENT
                    | FlagSet::ADD_99_CENTS
            }
            Strategy::VipCustomer => {
                FlagSet::DISCOUNT_5_PERCENT
                    | FlagSet::PREMIUM_IMAGE_OFFSET
                    | FlagSet::ROUND_TO_95_CENTS
            }
            Strategy::MarketEntry => {
                FlagSet::DISCOUNT_10_PERCENT
                    | FlagSet::MAX_PENETRATION_PRICE
                    | FlagSet::KEY_PRICE_POINT
            }
            Strategy::ExclusiveItem => {
                FlagSet::INCREASE_20_PERCENT
                    | FlagSet::PREMIUM_IMAGE_OFFSET
                    | FlagSet::ROUND_TO_95_CENTS
            }
            Strategy::SmallPremium => FlagSet::INCREASE_5_PERCENT,
            Strategy::VerySmallPremium => FlagSet::INCREASE_1_PERCENT,
            Strategy::MarketRegulator => FlagSet::REASONABLE_INCREASE,
            Strategy::MarketRegulatorPsychological => {
                FlagSet::REASONABLE_INCREASE | FlagSet::PSYCHOLOGICAL_PRICING
            }
        }
    }
}
