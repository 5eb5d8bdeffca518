//! Catalog-driven cost, revenue and depreciation
//!
//! Shared core of the equipment, sign and light/drum calculators.

use std::collections::BTreeMap;

use bidcalc_types::CostMetrics;
use tracing::debug;

use crate::model::{ItemType, MptRental, StaticCatalog, DAYS_PER_YEAR};

use super::weighted_days::{equipment_usage, ItemUsage};

/// Straight-line depreciation per day. Useful life is in years; a life of
/// zero or less depreciates nothing.
pub fn daily_depreciation(price: f64, useful_life_years: f64) -> f64 {
    if useful_life_years <= 0.0 {
        return 0.0;
    }
    let daily = price / (useful_life_years * DAYS_PER_YEAR);
    if daily.is_finite() {
        daily
    } else {
        0.0
    }
}

/// Price every item in `usage` against `catalog`.
///
/// Per item: cost is `quantity × price`, revenue is cost less the catalog
/// discount, depreciation is the daily straight-line amount over the weighted
/// days. Items without a catalog entry are skipped.
pub fn cost_metrics<K>(catalog: &StaticCatalog, usage: &BTreeMap<K, ItemUsage>) -> CostMetrics
where
    K: Into<ItemType> + Copy + Ord,
{
    let mut cost = 0.0;
    let mut revenue = 0.0;
    let mut depreciation = 0.0;

    for (&key, item) in usage {
        let item_type: ItemType = key.into();
        let Some(info) = catalog.get(&item_type) else {
            if item.quantity != 0.0 {
                debug!(item = %item_type, "no catalog entry, skipping");
            }
            continue;
        };

        let item_cost = item.quantity * info.price;
        cost += item_cost;
        revenue += item_cost * (1.0 - info.discount_rate / 100.0);
        depreciation +=
            daily_depreciation(info.price, info.useful_life) * item.weighted_days * item.quantity;
    }

    CostMetrics::from_depreciation(cost, revenue, depreciation)
}

/// Single-item convenience wrapper around [`cost_metrics`]
pub fn item_cost_metrics(
    catalog: &StaticCatalog,
    item: impl Into<ItemType>,
    usage: ItemUsage,
) -> CostMetrics {
    let mut single = BTreeMap::new();
    single.insert(item.into(), usage);
    cost_metrics(catalog, &single)
}

/// MPT equipment (everything except lights and drums) over the whole plan
pub fn equipment_cost_summary(rental: &MptRental) -> CostMetrics {
    let usage: BTreeMap<_, _> = equipment_usage(&rental.phases)
        .into_iter()
        .filter(|(eq, _)| !eq.is_light_and_drum())
        .collect();
    cost_metrics(&rental.static_equipment_info, &usage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EquipmentType, StaticEquipmentInfo};

    fn catalog(item: ItemType, price: f64, discount: f64, life: f64) -> StaticCatalog {
        let mut c = StaticCatalog::new();
        c.insert(
            item,
            StaticEquipmentInfo {
                price,
                discount_rate: discount,
                useful_life: life,
                payback_period: 0.0,
            },
        );
        c
    }

    #[test]
    fn test_single_item_pricing() {
        let c = catalog(ItemType::FourFootTypeIII, 100.0, 10.0, 365.0);
        let result = item_cost_metrics(
            &c,
            EquipmentType::FourFootTypeIII,
            ItemUsage {
                quantity: 10.0,
                weighted_days: 5.0,
            },
        );

        let expected_dep = 100.0 / 365.0 / 365.0 * 5.0 * 10.0;
        assert!((result.cost - 1000.0).abs() < 1e-9);
        assert!((result.revenue - 900.0).abs() < 1e-9);
        assert!((result.depreciation_cost - expected_dep).abs() < 1e-12);
        assert!((result.depreciation_cost - 0.0375).abs() < 1e-4);
        assert!((result.gross_profit - (900.0 - expected_dep)).abs() < 1e-9);
        assert!((result.gross_margin - (900.0 - expected_dep) / 900.0 * 100.0).abs() < 1e-9);
        assert!((result.gross_margin - 99.996).abs() < 1e-3);
    }

    #[test]
    fn test_missing_catalog_entry_is_skipped() {
        let c = catalog(ItemType::Post, 10.0, 0.0, 5.0);
        let mut usage = BTreeMap::new();
        usage.insert(
            EquipmentType::Sandbag,
            ItemUsage {
                quantity: 50.0,
                weighted_days: 3.0,
            },
        );
        usage.insert(
            EquipmentType::Post,
            ItemUsage {
                quantity: 2.0,
                weighted_days: 0.0,
            },
        );
        let result = cost_metrics(&c, &usage);
        assert_eq!(result.cost, 20.0);
        assert_eq!(result.revenue, 20.0);
        assert_eq!(result.depreciation_cost, 0.0);
    }

    #[test]
    fn test_zero_revenue_zero_margin() {
        let c = catalog(ItemType::Post, 10.0, 100.0, 5.0);
        let result = item_cost_metrics(
            &c,
            ItemType::Post,
            ItemUsage {
                quantity: 1.0,
                weighted_days: 30.0,
            },
        );
        assert_eq!(result.revenue, 0.0);
        assert_eq!(result.gross_margin, 0.0);
        assert!(result.gross_profit < 0.0);
    }

    #[test]
    fn test_zero_useful_life_no_depreciation() {
        assert_eq!(daily_depreciation(100.0, 0.0), 0.0);
        assert_eq!(daily_depreciation(100.0, -1.0), 0.0);
        let c = catalog(ItemType::Covers, 48.0, 0.0, 0.0);
        let result = item_cost_metrics(
            &c,
            ItemType::Covers,
            ItemUsage {
                quantity: 4.0,
                weighted_days: 12.0,
            },
        );
        assert!(result.is_finite());
        assert_eq!(result.depreciation_cost, 0.0);
    }

    #[test]
    fn test_equipment_summary_excludes_lights() {
        let mut c = catalog(ItemType::Sandbag, 2.0, 0.0, 1.0);
        c.insert(
            ItemType::BLights,
            StaticEquipmentInfo {
                price: 100.0,
                useful_life: 3.0,
                ..Default::default()
            },
        );
        let mut phase = crate::model::Phase {
            days: 10.0,
            ..Default::default()
        };
        phase.set_quantity(EquipmentType::Sandbag, 5.0);
        phase.set_quantity(EquipmentType::BLights, 7.0);
        let rental = MptRental {
            static_equipment_info: c,
            phases: vec![phase],
            ..Default::default()
        };

        let result = equipment_cost_summary(&rental);
        assert_eq!(result.cost, 10.0);
        assert!((result.depreciation_cost - 2.0 / 365.0 * 10.0 * 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_usage() {
        let result = cost_metrics::<ItemType>(&StaticCatalog::new(), &BTreeMap::new());
        assert_eq!(result, CostMetrics::default());
    }
}
