//! Multi-phase MPT (maintenance of traffic) rental plan

use serde::{Deserialize, Serialize};

use super::equipment::{ItemType, StaticCatalog, StaticEquipmentInfo};
use super::lenient;
use super::phase::Phase;

/// The full rental plan: phases plus the financial constants used to price them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MptRental {
    /// Years over which daily rates recover the purchase price
    #[serde(deserialize_with = "lenient::number")]
    pub payback_period: f64,
    /// Multiple of invested capital targeted over the payback period
    #[serde(rename = "targetMOIC", deserialize_with = "lenient::number")]
    pub target_moic: f64,
    /// Fraction of the year equipment is expected to be out on rent
    #[serde(deserialize_with = "lenient::number")]
    pub annual_utilization: f64,
    /// Fee charged per truck trip
    #[serde(deserialize_with = "lenient::number")]
    pub dispatch_fee: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub mpg_per_truck: f64,
    pub static_equipment_info: StaticCatalog,
    pub phases: Vec<Phase>,
}

impl MptRental {
    pub fn catalog_entry(&self, item: impl Into<ItemType>) -> Option<&StaticEquipmentInfo> {
        self.static_equipment_info.get(&item.into())
    }

    /// Nothing to price: no phases or no catalog
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty() || self.static_equipment_info.is_empty()
    }
}
