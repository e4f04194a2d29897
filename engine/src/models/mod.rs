//! Domain types
//!
//! - `item`: catalog item inputs and the derived quote summary
//! - `config`: reasonable-increase curve parameters
//! - `season`: seasonal adjustment table

pub mod config;
pub mod item;
pub mod season;

pub use config::{ComputationError, ReasonableIncreaseConfig};
pub use item::{PriceQuote, PricingItem};
pub use season::Season;
