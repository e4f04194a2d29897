//! Season model
//!
//! Closed set of retail seasons, each with a fixed price multiplier applied
//! by the seasonal-adjustment rule. Includes calendar auto-detection for
//! hosts that want the current season picked from the date.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Retail season selecting a fixed seasonal price multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
    Holiday,
}

impl Default for Season {
    fn default() -> Self {
        Season::Spring
    }
}

impl Season {
    /// Every season, in declaration order (for host-side pickers)
    pub const ALL: [Season; 5] = [
        Season::Winter,
        Season::Spring,
        Season::Summer,
        Season::Fall,
        Season::Holiday,
    ];

    /// Fixed seasonal price multiplier
    ///
    /// Winter discounts slightly, Holiday carries the largest markup.
    pub fn multiplier(self) -> Decimal {
        match self {
            Season::Winter => dec!(0.95),
            Season::Spring => dec!(1.03),
            Season::Summer => dec!(1.05),
            Season::Fall => dec!(1.02),
            Season::Holiday => dec!(1.08),
        }
    }

    /// Detect the season for a calendar date
    ///
    /// Holiday season runs November 15 through December 31; outside it,
    /// meteorological seasons apply. Out-of-range months fall back to Spring.
    pub fn for_date(month: u32, day: u32) -> Season {
        if (month == 11 && day >= 15) || month == 12 {
            return Season::Holiday;
        }
        match month {
            1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Spring,
        }
    }
}
