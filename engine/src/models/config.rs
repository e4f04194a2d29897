//! Reasonable-increase configuration
//!
//! Tunable parameter object for the "reasonable increase" pricing rule:
//! a base markup plus a price-tier-sensitive additional markup, optionally
//! smoothed by piecewise-linear interpolation between tiers, capped at a
//! maximum total increase.
//!
//! The curve helpers on this type are the same functions the custom handler
//! evaluates, so a chart collaborator rendering the curve can never disagree
//! with the engine.
//!
//! CRITICAL: all money and rate values are `Decimal`, never floats.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by custom-rule arithmetic
#[derive(Debug, Error, PartialEq)]
pub enum ComputationError {
    #[error("interpolation band has zero width between thresholds {lower} and {upper}")]
    DegenerateBand { lower: Decimal, upper: Decimal },
}

/// Parameters for the reasonable-increase markup curve
///
/// The additional increase is keyed on the item's retail price:
/// - `price <= low_threshold`: `low_additional`
/// - `(low_threshold, mid_threshold]`: interpolate low -> mid additional
/// - `(mid_threshold, high_threshold]`: interpolate mid -> high additional
/// - above `high_threshold`: `high_additional` (interpolated mode) or zero
///   (discrete mode)
///
/// Total increase is `min(base_increase + additional, max_increase)`.
///
/// `low_threshold <= mid_threshold <= high_threshold` is the caller's
/// responsibility; it is required for the curve to be monotone but is not
/// enforced here.
///
/// # Example
/// ```
/// use pricing_engine_core_rs::ReasonableIncreaseConfig;
/// use rust_decimal_macros::dec;
///
/// let config = ReasonableIncreaseConfig::default();
/// // $5 item sits below the low threshold: 0.02 base + 0.06 additional
/// assert_eq!(config.total_increase(dec!(5)).unwrap(), dec!(0.08));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReasonableIncreaseConfig {
    /// Flat increase applied to every price
    pub base_increase: Decimal,

    /// Cap on `base_increase + additional`
    pub max_increase: Decimal,

    /// Upper bound of the low price tier
    pub low_threshold: Decimal,

    /// Upper bound of the mid price tier
    pub mid_threshold: Decimal,

    /// Upper bound of the high price tier
    pub high_threshold: Decimal,

    /// Additional increase at or below the low tier
    pub low_additional: Decimal,

    /// Additional increase at the mid tier boundary
    pub mid_additional: Decimal,

    /// Additional increase at the high tier boundary
    pub high_additional: Decimal,

    /// Interpolate between tier boundaries instead of stepping
    pub use_interpolation: bool,
}

impl Default for ReasonableIncreaseConfig {
    fn default() -> Self {
        ReasonableIncreaseConfig {
            base_increase: dec!(0.02),
            max_increase: dec!(0.10),
            low_threshold: dec!(10),
            mid_threshold: dec!(50),
            high_threshold: dec!(100),
            low_additional: dec!(0.06),
            mid_additional: dec!(0.03),
            high_additional: dec!(0.01),
            use_interpolation: true,
        }
    }
}

impl ReasonableIncreaseConfig {
    /// Additional increase for a given price point
    ///
    /// Returns an error only when interpolation routes the price into a
    /// zero-width band (malformed thresholds).
    pub fn additional_increase(&self, price: Decimal) -> Result<Decimal, ComputationError> {
        if self.use_interpolation {
            if price <= self.low_threshold {
                Ok(self.low_additional)
            } else if price <= self.mid_threshold {
                self.band(
                    price,
                    self.low_threshold,
                    self.mid_threshold,
                    self.low_additional,
                    self.mid_additional,
                )
            } else if price <= self.high_threshold {
                self.band(
                    price,
                    self.mid_threshold,
                    self.high_threshold,
                    self.mid_additional,
                    self.high_additional,
                )
            } else {
                Ok(self.high_additional)
            }
        } else if price <= self.low_threshold {
            Ok(self.low_additional)
        } else if price <= self.mid_threshold {
            Ok(self.mid_additional)
        } else if price <= self.high_threshold {
            Ok(self.high_additional)
        } else {
            // Above the high threshold only the base increase applies
            Ok(Decimal::ZERO)
        }
    }

    /// Total increase for a given price point, capped at `max_increase`
    pub fn total_increase(&self, price: Decimal) -> Result<Decimal, ComputationError> {
        let additional = self.additional_increase(price)?;
        Ok((self.base_increase + additional).min(self.max_increase))
    }

    /// Price after applying the full reasonable increase
    ///
    /// Used by chart collaborators to sample the curve.
    pub fn adjusted_price(&self, price: Decimal) -> Result<Decimal, ComputationError> {
        Ok(price * (Decimal::ONE + self.total_increase(price)?))
    }

    /// Linear interpolation within one band: `from - ratio * (from - to)`
    /// where `ratio = (price - lower) / (upper - lower)`
    fn band(
        &self,
        price: Decimal,
        lower: Decimal,
        upper: Decimal,
        from: Decimal,
        to: Decimal,
    ) -> Result<Decimal, ComputationError> {
        let ratio = (price - lower)
            .checked_div(upper - lower)
            .ok_or(ComputationError::DegenerateBand { lower, upper })?;
        Ok(from - ratio * (from - to))
    }
}
