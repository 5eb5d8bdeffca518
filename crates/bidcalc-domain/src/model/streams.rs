//! Revenue streams priced alongside the MPT rental

use serde::{Deserialize, Serialize};

use super::lenient;

/// Equipment rented out by the month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EquipmentRentalItem {
    pub name: String,
    #[serde(deserialize_with = "lenient::number")]
    pub quantity: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub months: f64,
    /// Monthly price charged to the customer
    #[serde(deserialize_with = "lenient::number")]
    pub rent_price: f64,
    /// Monthly price paid when the item is rented in from a third party
    #[serde(deserialize_with = "lenient::number")]
    pub re_rent_price: f64,
    pub re_rent_for_current_job: bool,
    /// Purchase cost of an owned unit
    #[serde(deserialize_with = "lenient::number")]
    pub total_cost: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub useful_life_yrs: f64,
}

/// Material sold outright
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaleItem {
    pub item_number: String,
    pub name: String,
    #[serde(deserialize_with = "lenient::number")]
    pub quantity: f64,
    /// Vendor quote per unit
    #[serde(deserialize_with = "lenient::number")]
    pub quote_price: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub markup_percentage: f64,
}

/// Equipment that can be folded into a flagging lump sum
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LumpSumEquipment {
    #[serde(deserialize_with = "lenient::number")]
    pub quantity: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub cost: f64,
    pub include_in_lump_sum: bool,
}

impl LumpSumEquipment {
    pub fn lump_sum_cost(&self) -> f64 {
        if self.include_in_lump_sum {
            self.quantity * self.cost
        } else {
            0.0
        }
    }
}

/// Flagging crew (or service work) parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Flagging {
    #[serde(deserialize_with = "lenient::number")]
    pub personnel: f64,
    /// On-site time in minutes
    #[serde(deserialize_with = "lenient::number")]
    pub on_site_job_hours: f64,
    /// Per $1000 of labor; 0 means the standard rate
    #[serde(deserialize_with = "lenient::number")]
    pub general_liability: f64,
    /// Per $100 of labor; 0 means the standard rate
    #[serde(deserialize_with = "lenient::number")]
    pub worker_comp: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub number_trucks: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub fuel_cost_per_gallon: f64,
    #[serde(rename = "fuelEconomyMPG", deserialize_with = "lenient::number")]
    pub fuel_economy_mpg: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub truck_dispatch_fee: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub additional_equipment_cost: f64,
    pub arrow_boards: LumpSumEquipment,
    pub message_boards: LumpSumEquipment,
    #[serde(rename = "TMA")]
    pub tma: LumpSumEquipment,
    pub standard_pricing: bool,
    #[serde(deserialize_with = "lenient::number")]
    pub standard_lump_sum: f64,
    /// Target margin percent applied to cost
    #[serde(deserialize_with = "lenient::number")]
    pub markup_rate: f64,
}
