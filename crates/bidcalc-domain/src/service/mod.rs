//! Pricing calculators
//!
//! Every function here is pure: it reads an immutable snapshot and returns a
//! fresh result.

pub mod cost_metrics;
pub mod equipment_totals;
pub mod flagging;
pub mod labor_cost;
pub mod light_drum;
pub mod permanent_signs;
pub mod phase_totals;
pub mod rental_summary;
pub mod sign_cost;
pub mod totals;
pub mod truck_fuel;
pub mod weighted_days;

pub use cost_metrics::{cost_metrics, daily_depreciation, equipment_cost_summary};
pub use equipment_totals::{equipment_totals, EquipmentTotal};
pub use flagging::{flagging_summary, CrewKind, FlaggingSummary};
pub use labor_cost::{labor_cost_summary, LaborCostSummary};
pub use light_drum::{light_drum_summary, LightDrumSummary};
pub use permanent_signs::{
    permanent_signs_summary, plan_trips, schedule_sign_items, PermanentSignsSummary, TripPlan,
    TruckRates,
};
pub use phase_totals::{phase_totals, trips_per_phase, PhaseTotals};
pub use rental_summary::{rental_summary, sale_summary, RentalSummary, SaleSummary};
pub use sign_cost::{associated_sign_equipment, sign_cost_summary, AssociatedSignEquipment};
pub use totals::{all_totals, rollup, try_all_totals, MptCategories, StreamSummaries};
pub use truck_fuel::{truck_fuel_summary, TruckFuelSummary};
pub use weighted_days::{equipment_usage, sign_usage, weighted_average_days, ItemUsage};
