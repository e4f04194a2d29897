//! Flag compilation and execution
//!
//! - `op`: the compiled operation record and its constant tags
//! - `compiler`: flag set -> priority-ordered operation list
//! - `executor`: fold an operation list over a running price
//! - `custom`: handlers for operations beyond a single primitive

pub mod compiler;
pub(crate) mod custom;
pub mod executor;
pub mod op;

pub use compiler::compile;
pub use executor::{evaluate, EvalContext, PricingError};
pub use op::{CentValue, Factor, OpKind, OpParameter, Operation, Priority};
