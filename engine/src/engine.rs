//! Pricing engine facade
//!
//! Owns the evaluation settings and a memoized compile cache. Hosts hold one
//! engine per catalog context and call `evaluate` or `quote` per item; the
//! first evaluation of each distinct flag set compiles it, later ones reuse
//! the cached operation list.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::flags::{FlagSet, Strategy};
use crate::models::{PriceQuote, PricingItem, ReasonableIncreaseConfig, Season};
use crate::pipeline::executor::{self, EvalContext, PricingError};
use crate::pipeline::{compiler, Operation};

/// Flag-driven pricing engine
///
/// Settings are plain fields mutated through setters; the compile cache is
/// behind a mutex so a shared engine can serve evaluations from multiple
/// threads. Compiled lists do not depend on settings, only on flags, so
/// setter calls never invalidate the cache.
#[derive(Debug)]
pub struct PricingEngine {
    season: Season,
    dollar_store: bool,
    min_margin_percent: Decimal,
    reasonable: ReasonableIncreaseConfig,
    cache: Mutex<HashMap<FlagSet, Arc<[Operation]>>>,
}

impl PricingEngine {
    /// Engine with the given season and store mode, default margin floor
    /// of 20 percent and default reasonable-increase curve
    pub fn new(season: Season, dollar_store: bool) -> Self {
        PricingEngine {
            season,
            dollar_store,
            min_margin_percent: dec!(20),
            reasonable: ReasonableIncreaseConfig::default(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Engine with the season derived from a calendar date
    pub fn for_date(month: u32, day: u32, dollar_store: bool) -> Self {
        PricingEngine::new(Season::for_date(month, day), dollar_store)
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn set_season(&mut self, season: Season) {
        self.season = season;
    }

    pub fn dollar_store(&self) -> bool {
        self.dollar_store
    }

    pub fn set_dollar_store(&mut self, dollar_store: bool) {
        self.dollar_store = dollar_store;
    }

    pub fn min_margin_percent(&self) -> Decimal {
        self.min_margin_percent
    }

    pub fn set_min_margin_percent(&mut self, percent: Decimal) {
        self.min_margin_percent = percent;
    }

    pub fn reasonable_config(&self) -> ReasonableIncreaseConfig {
        self.reasonable
    }

    pub fn set_reasonable_config(&mut self, config: ReasonableIncreaseConfig) {
        self.reasonable = config;
    }

    /// Compiled operation list for a flag set, memoized per distinct set
    pub fn operations(&self, flags: FlagSet) -> Arc<[Operation]> {
        let mut cache = self.cache.lock().expect("compile cache poisoned");
        cache
            .entry(flags)
            .or_insert_with(|| compiler::compile(flags).into())
            .clone()
    }

    /// Number of distinct flag sets compiled so far
    pub fn cached_pipelines(&self) -> usize {
        self.cache.lock().expect("compile cache poisoned").len()
    }

    /// Price one item under a raw flag set
    pub fn evaluate(&self, item: &PricingItem, flags: FlagSet) -> Result<Decimal, PricingError> {
        let operations = self.operations(flags);
        let ctx = self.context();
        executor::evaluate(item, &operations, &ctx)
    }

    /// Price one item under a named strategy preset
    pub fn evaluate_strategy(
        &self,
        item: &PricingItem,
        strategy: Strategy,
    ) -> Result<Decimal, PricingError> {
        self.evaluate(item, strategy.flags())
    }

    /// Full quote for one item: recommended price plus derived metrics
    ///
    /// Margin percent is relative to unit cost, market position relative to
    /// retail price; both are rounded to two decimal places.
    pub fn quote(&self, item: &PricingItem, strategy: Strategy) -> Result<PriceQuote, PricingError> {
        let price = self.evaluate_strategy(item, strategy)?;
        let margin_percent = ((price - item.unit_cost) / item.unit_cost * dec!(100)).round_dp(2);
        let price_relative_to_market =
            ((price / item.retail_price - Decimal::ONE) * dec!(100)).round_dp(2);
        Ok(PriceQuote {
            recommended_price: price,
            margin_percent,
            price_relative_to_market,
            strategy,
        })
    }

    /// Settings snapshot used for one evaluation
    fn context(&self) -> EvalContext {
        EvalContext {
            season: self.season,
            dollar_store: self.dollar_store,
            min_margin_percent: self.min_margin_percent,
            reasonable: self.reasonable,
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        PricingEngine::new(Season::default(), false)
    }
}
