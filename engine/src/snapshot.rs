//! Catalog persistence snapshot
//!
//! Serializable capture of a host session: the item catalog plus the engine
//! settings needed to reproduce its prices. Flag sets travel inside items as
//! plain integers, so snapshots written by older hosts with unknown bits
//! still load.

use serde::{Deserialize, Serialize};

use crate::flags::Strategy;
use crate::models::{PricingItem, ReasonableIncreaseConfig, Season};

/// One saved catalog session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub items: Vec<PricingItem>,
    pub dollar_store: bool,
    /// Strategy applied catalog-wide when no per-item override is set
    #[serde(default)]
    pub global_strategy: Strategy,
    #[serde(default)]
    pub season: Season,
    #[serde(default)]
    pub reasonable_config: ReasonableIncreaseConfig,
}

impl CatalogSnapshot {
    pub fn new(items: Vec<PricingItem>, dollar_store: bool) -> Self {
        CatalogSnapshot {
            items,
            dollar_store,
            global_strategy: Strategy::default(),
            season: Season::default(),
            reasonable_config: ReasonableIncreaseConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_snapshot_round_trip() {
        let snapshot = CatalogSnapshot {
            items: vec![
                PricingItem::named("Widget", dec!(4.25), dec!(9.99), Strategy::Balanced),
                PricingItem::named("Gadget", dec!(12.00), dec!(24.50), Strategy::None),
            ],
            dollar_store: true,
            global_strategy: Strategy::Premium,
            season: Season::Holiday,
            reasonable_config: ReasonableIncreaseConfig::default(),
        };
        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        let back: CatalogSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_minimal_document_fills_defaults() {
        let json = r#"{
            "items": [{"unit_cost": "2.00", "retail_price": "5.00"}],
            "dollar_store": false
        }"#;
        let snapshot: CatalogSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.global_strategy, Strategy::None);
        assert_eq!(snapshot.season, Season::Spring);
        assert_eq!(
            snapshot.reasonable_config,
            ReasonableIncreaseConfig::default()
        );
    }
}
