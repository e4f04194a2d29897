//! Pricing Engine Core - Rust Engine
//!
//! Flag-driven pricing rule engine with deterministic compilation.
//!
//! # Architecture
//!
//! - **flags**: Flag bitmask, family resolution, strategy presets
//! - **models**: Domain types (PricingItem, Season, curve config)
//! - **pipeline**: Flag compiler, operation records, executor
//! - **engine**: Facade with settings and a memoized compile cache
//! - **snapshot**: Serializable catalog session capture
//!
//! # Critical Invariants
//!
//! 1. All money values are Decimal (never floats)
//! 2. Compilation is pure: same flags, same operation list
//! 3. Evaluation reads a settings snapshot, never live engine state
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod engine;
pub mod flags;
pub mod models;
pub mod pipeline;
pub mod snapshot;

// Re-exports for convenience
pub use engine::PricingEngine;
pub use flags::{FlagSet, Strategy};
pub use models::{ComputationError, PriceQuote, PricingItem, ReasonableIncreaseConfig, Season};
pub use pipeline::{
    compile, evaluate, CentValue, EvalContext, Factor, OpKind, OpParameter, Operation,
    PricingError, Priority,
};
pub use snapshot::CatalogSnapshot;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn pricing_engine_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::engine::PyPricingEngine>()?;
    Ok(())
}
