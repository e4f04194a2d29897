//! Type conversion utilities for the FFI boundary
//!
//! Converts between engine types and PyO3-compatible types (PyDict, f64,
//! names as strings).

use pyo3::prelude::*;
use pyo3::types::PyDict;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::flags::Strategy;
use crate::models::{PriceQuote, ReasonableIncreaseConfig, Season};
use crate::pipeline::{Operation, PricingError};

/// Extract a field with a default value if missing
fn extract_with_default<T>(dict: &Bound<'_, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: for<'py> FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

/// Convert an f64 money or rate value to `Decimal`
///
/// Raises ValueError on NaN or infinity; everything after this call is
/// exact decimal arithmetic.
pub fn decimal_from_f64(value: f64, field: &str) -> PyResult<Decimal> {
    if !value.is_finite() {
        return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "'{}' must be finite (got {})",
            field, value
        )));
    }
    Decimal::from_f64_retain(value).ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "'{}' is out of decimal range (got {})",
            field, value
        ))
    })
}

/// Convert a `Decimal` back to f64 for the host
pub fn decimal_to_f64(value: Decimal) -> PyResult<f64> {
    value.to_f64().ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
            "decimal value {} is not representable as f64",
            value
        ))
    })
}

/// Map an evaluation error to the Python exception hierarchy
///
/// Bad caller inputs (non-positive cost or retail price) raise ValueError;
/// internal computation faults raise RuntimeError.
pub fn pricing_error_to_py(error: PricingError) -> PyErr {
    match error {
        PricingError::Computation(inner) => {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(inner.to_string())
        }
        validation => PyErr::new::<pyo3::exceptions::PyValueError, _>(validation.to_string()),
    }
}

/// Parse a season from its name (e.g. "Winter", "Holiday")
pub fn parse_season(name: &str) -> PyResult<Season> {
    serde_json::from_value(serde_json::Value::String(name.to_owned())).map_err(|_| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Unknown season '{}'", name))
    })
}

/// Parse a strategy preset from its name (e.g. "Balanced", "BlackFriday")
pub fn parse_strategy(name: &str) -> PyResult<Strategy> {
    serde_json::from_value(serde_json::Value::String(name.to_owned())).map_err(|_| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Unknown strategy '{}'", name))
    })
}

/// Name of a strategy preset, matching what `parse_strategy` accepts
pub fn strategy_name(strategy: Strategy) -> String {
    match serde_json::to_value(strategy) {
        Ok(serde_json::Value::String(name)) => name,
        _ => String::from("None"),
    }
}

/// Convert a reasonable-increase config dict, filling defaults per field
///
/// Recognized keys: `base_increase`, `max_increase`, `low_threshold`,
/// `mid_threshold`, `high_threshold`, `low_additional`, `mid_additional`,
/// `high_additional`, `use_interpolation`.
pub fn parse_reasonable_config(dict: &Bound<'_, PyDict>) -> PyResult<ReasonableIncreaseConfig> {
    let defaults = ReasonableIncreaseConfig::default();

    let field = |key: &str, default: Decimal| -> PyResult<Decimal> {
        match extract_with_default::<Option<f64>>(dict, key, None)? {
            Some(value) => decimal_from_f64(value, key),
            None => Ok(default),
        }
    };

    Ok(ReasonableIncreaseConfig {
        base_increase: field("base_increase", defaults.base_increase)?,
        max_increase: field("max_increase", defaults.max_increase)?,
        low_threshold: field("low_threshold", defaults.low_threshold)?,
        mid_threshold: field("mid_threshold", defaults.mid_threshold)?,
        high_threshold: field("high_threshold", defaults.high_threshold)?,
        low_additional: field("low_additional", defaults.low_additional)?,
        mid_additional: field("mid_additional", defaults.mid_additional)?,
        high_additional: field("high_additional", defaults.high_additional)?,
        use_interpolation: extract_with_default(
            dict,
            "use_interpolation",
            defaults.use_interpolation,
        )?,
    })
}

/// Convert a compiled operation to a Python dict
///
/// Kind and parameter are rendered as their JSON names, priority as its
/// ordinal, so hosts can log or display a pipeline without Rust types.
pub fn operation_to_py(py: Python, operation: &Operation) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("kind", format!("{:?}", operation.kind))?;
    dict.set_item("parameter", format!("{:?}", operation.parameter))?;
    dict.set_item("priority", operation.priority.ordinal())?;
    Ok(dict.into())
}

/// Convert a price quote to a Python dict
pub fn quote_to_py(py: Python, quote: &PriceQuote) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("recommended_price", decimal_to_f64(quote.recommended_price)?)?;
    dict.set_item("margin_percent", decimal_to_f64(quote.margin_percent)?)?;
    dict.set_item(
        "price_relative_to_market",
        decimal_to_f64(quote.price_relative_to_market)?,
    )?;
    dict.set_item("strategy", strategy_name(quote.strategy))?;
    Ok(dict.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComputationError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validation_errors_raise_value_error() {
        Python::with_gil(|py| {
            let err = pricing_error_to_py(PricingError::NonPositiveUnitCost(Decimal::ZERO));
            assert!(err.is_instance_of::<pyo3::exceptions::PyValueError>(py));
            let err = pricing_error_to_py(PricingError::NonPositiveRetailPrice(dec!(-1)));
            assert!(err.is_instance_of::<pyo3::exceptions::PyValueError>(py));
        });
    }

    #[test]
    fn test_computation_errors_raise_runtime_error() {
        Python::with_gil(|py| {
            let err = pricing_error_to_py(PricingError::Computation(
                ComputationError::DegenerateBand {
                    lower: dec!(10),
                    upper: dec!(10),
                },
            ));
            assert!(err.is_instance_of::<pyo3::exceptions::PyRuntimeError>(py));
        });
    }
}
