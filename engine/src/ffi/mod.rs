//! Python FFI boundary
//!
//! Thin PyO3 wrappers over the engine. Money crosses the boundary as f64 and
//! is converted to `Decimal` at the edge; everything inside stays exact.

pub mod engine;
pub mod types;
