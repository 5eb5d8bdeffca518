//! Lights and drums: daily-rate rental pricing
//!
//! Catalog items earn a MOIC-sized daily rate, or the job's emergency rate
//! when the job or the phase is an emergency. Custom items are identified by
//! `(id, cost, useful life)` and weighted across phases before pricing.

use bidcalc_types::CostMetrics;
use serde::{Deserialize, Serialize};

use crate::model::{AdminData, CustomLightAndDrumItem, EquipmentType, MptRental, Phase, DAYS_PER_YEAR};

use super::cost_metrics::daily_depreciation;
use super::weighted_days::WeightedDays;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightDrumSummary {
    pub standard_equipment: CostMetrics,
    pub custom_equipment: CostMetrics,
    pub total: CostMetrics,
}

/// Daily rate that returns `target_moic × price` over the payback period at the
/// planned utilization; 0 when the recovery period is empty
pub fn moic_daily_rate(rental: &MptRental, price: f64) -> f64 {
    let days_to_recover = rental.payback_period * rental.annual_utilization * DAYS_PER_YEAR;
    if days_to_recover <= 0.0 || !days_to_recover.is_finite() {
        return 0.0;
    }
    price * rental.target_moic / days_to_recover
}

/// Daily rate for a catalog light or drum in `phase`
pub fn standard_daily_rate(
    admin: &AdminData,
    rental: &MptRental,
    phase: &Phase,
    equipment: EquipmentType,
    price: f64,
) -> f64 {
    let emergency = admin.emergency_job || phase.emergency;
    if emergency {
        if let Some(rate) = admin.emergency_fields.rate_for(equipment) {
            return rate;
        }
    }
    moic_daily_rate(rental, price)
}

pub fn standard_light_drum_costs(admin: &AdminData, rental: &MptRental) -> CostMetrics {
    let mut cost = 0.0;
    let mut revenue = 0.0;
    let mut depreciation = 0.0;

    for phase in &rental.phases {
        for equipment in EquipmentType::LIGHT_AND_DRUM {
            let quantity = phase.quantity(equipment);
            if quantity == 0.0 || phase.days == 0.0 {
                continue;
            }
            let Some(info) = rental.catalog_entry(equipment) else {
                continue;
            };

            cost += quantity * info.price;
            let rate = standard_daily_rate(admin, rental, phase, equipment, info.price);
            revenue += quantity * phase.days * rate;
            depreciation += daily_depreciation(info.price, info.useful_life) * phase.days * quantity;
        }
    }

    CostMetrics::from_depreciation(cost, revenue, depreciation)
}

/// Identity of a custom item for weighting
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct CustomItemKey {
    id: String,
    cost_bits: u64,
    life_bits: u64,
}

impl From<&CustomLightAndDrumItem> for CustomItemKey {
    fn from(item: &CustomLightAndDrumItem) -> Self {
        Self {
            id: item.id.clone(),
            cost_bits: item.cost.to_bits(),
            life_bits: item.useful_life.to_bits(),
        }
    }
}

pub fn custom_light_drum_costs(rental: &MptRental) -> CostMetrics {
    let mut weights = WeightedDays::new();
    for phase in &rental.phases {
        for item in &phase.custom_light_and_drum_items {
            weights.add(CustomItemKey::from(item), item.quantity, phase.days);
        }
    }

    let mut cost = 0.0;
    let mut revenue = 0.0;
    let mut depreciation = 0.0;

    for item in rental.phases.iter().flat_map(|p| &p.custom_light_and_drum_items) {
        let weighted_days = weights.weighted_days(&CustomItemKey::from(item));
        cost += item.quantity * item.cost;
        revenue += item.quantity * weighted_days * moic_daily_rate(rental, item.cost);
        depreciation += daily_depreciation(item.cost, item.useful_life) * weighted_days * item.quantity;
    }

    CostMetrics::from_depreciation(cost, revenue, depreciation)
}

pub fn light_drum_summary(admin: &AdminData, rental: &MptRental) -> LightDrumSummary {
    let standard_equipment = standard_light_drum_costs(admin, rental);
    let custom_equipment = custom_light_drum_costs(rental);
    LightDrumSummary {
        standard_equipment,
        custom_equipment,
        total: standard_equipment + custom_equipment,
    }
}
