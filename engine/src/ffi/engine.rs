//! PyO3 wrapper for PricingEngine
//!
//! This module provides the Python interface to the Rust pricing engine.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::engine::PricingEngine as RustPricingEngine;
use crate::flags::FlagSet;
use crate::models::PricingItem;

use super::types::{
    decimal_from_f64, decimal_to_f64, operation_to_py, parse_reasonable_config, parse_season,
    parse_strategy, pricing_error_to_py, quote_to_py, strategy_name,
};

/// Python wrapper for the Rust pricing engine
///
/// # Example (from Python)
///
/// ```python
/// from pricing_engine._core import PricingEngine
///
/// engine = PricingEngine("Summer", dollar_store=False)
/// price = engine.evaluate_strategy(
///     unit_cost=4.50,
///     retail_price=9.99,
///     strategy="Balanced",
/// )
/// print(f"Recommended price: ${price:.2f}")
/// ```
#[pyclass(name = "PricingEngine")]
pub struct PyPricingEngine {
    inner: RustPricingEngine,
}

#[pymethods]
impl PyPricingEngine {
    /// Create an engine for a named season
    ///
    /// # Arguments
    ///
    /// * `season` - One of "Winter", "Spring", "Summer", "Fall", "Holiday"
    /// * `dollar_store` - Round every final price up to whole dollars
    #[new]
    #[pyo3(signature = (season = "Spring", dollar_store = false))]
    fn new(season: &str, dollar_store: bool) -> PyResult<Self> {
        Ok(PyPricingEngine {
            inner: RustPricingEngine::new(parse_season(season)?, dollar_store),
        })
    }

    /// Create an engine with the season derived from a calendar date
    #[staticmethod]
    #[pyo3(signature = (month, day, dollar_store = false))]
    fn for_date(month: u32, day: u32, dollar_store: bool) -> Self {
        PyPricingEngine {
            inner: RustPricingEngine::for_date(month, day, dollar_store),
        }
    }

    /// Price one item under a raw flag bitmask
    ///
    /// # Errors
    ///
    /// Raises ValueError if either money input is not strictly positive or
    /// not finite.
    fn evaluate(&self, unit_cost: f64, retail_price: f64, flags: u64) -> PyResult<f64> {
        let item = PricingItem::new(
            decimal_from_f64(unit_cost, "unit_cost")?,
            decimal_from_f64(retail_price, "retail_price")?,
        );
        let price = self
            .inner
            .evaluate(&item, FlagSet::from_bits(flags))
            .map_err(pricing_error_to_py)?;
        decimal_to_f64(price)
    }

    /// Price one item under a named strategy preset
    fn evaluate_strategy(
        &self,
        unit_cost: f64,
        retail_price: f64,
        strategy: &str,
    ) -> PyResult<f64> {
        let item = PricingItem::new(
            decimal_from_f64(unit_cost, "unit_cost")?,
            decimal_from_f64(retail_price, "retail_price")?,
        );
        let price = self
            .inner
            .evaluate_strategy(&item, parse_strategy(strategy)?)
            .map_err(pricing_error_to_py)?;
        decimal_to_f64(price)
    }

    /// Full quote for one item under a named strategy preset
    ///
    /// # Returns
    ///
    /// Dictionary containing:
    /// - `recommended_price`: Final engine output
    /// - `margin_percent`: Margin relative to unit cost
    /// - `price_relative_to_market`: Distance from the market anchor
    /// - `strategy`: The preset name echoed back
    fn quote(
        &self,
        py: Python,
        unit_cost: f64,
        retail_price: f64,
        strategy: &str,
    ) -> PyResult<Py<PyDict>> {
        let item = PricingItem::new(
            decimal_from_f64(unit_cost, "unit_cost")?,
            decimal_from_f64(retail_price, "retail_price")?,
        );
        let quote = self
            .inner
            .quote(&item, parse_strategy(strategy)?)
            .map_err(pricing_error_to_py)?;
        quote_to_py(py, &quote)
    }

    /// Compiled operation pipeline for a flag bitmask
    ///
    /// Returns a list of `{kind, parameter, priority}` dictionaries in
    /// compiled order, for display or logging on the host side.
    fn operations(&self, py: Python, flags: u64) -> PyResult<Py<PyList>> {
        let operations = self.inner.operations(FlagSet::from_bits(flags));
        let py_list = PyList::empty(py);
        for operation in operations.iter() {
            py_list.append(operation_to_py(py, operation)?)?;
        }
        Ok(py_list.into())
    }

    /// Flag bitmask for a named strategy preset
    #[staticmethod]
    fn strategy_flags(strategy: &str) -> PyResult<u64> {
        Ok(parse_strategy(strategy)?.flags().bits())
    }

    /// All strategy preset names, in declaration order
    #[staticmethod]
    fn strategies() -> Vec<String> {
        crate::flags::Strategy::ALL
            .iter()
            .map(|s| strategy_name(*s))
            .collect()
    }

    /// Number of distinct flag sets compiled so far
    fn cached_pipelines(&self) -> usize {
        self.inner.cached_pipelines()
    }

    fn set_season(&mut self, season: &str) -> PyResult<()> {
        self.inner.set_season(parse_season(season)?);
        Ok(())
    }

    fn set_dollar_store(&mut self, dollar_store: bool) {
        self.inner.set_dollar_store(dollar_store);
    }

    fn set_min_margin_percent(&mut self, percent: f64) -> PyResult<()> {
        self.inner
            .set_min_margin_percent(decimal_from_f64(percent, "min_margin_percent")?);
        Ok(())
    }

    /// Replace the reasonable-increase curve configuration
    ///
    /// Missing keys keep their default values.
    fn set_reasonable_config(&mut self, config: &Bound<'_, PyDict>) -> PyResult<()> {
        self.inner.set_reasonable_config(parse_reasonable_config(config)?);
        Ok(())
    }
}
