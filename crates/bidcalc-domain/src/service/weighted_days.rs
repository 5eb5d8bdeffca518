//! Quantity-weighted average days in service
//!
//! Equipment that sits in a 2-day phase and a 30-day phase is amortized by
//! `Σ(quantity × days) / Σ(quantity)` rather than by phase count. Signs use
//! square footage as their quantity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{EquipmentType, ItemType, Phase, SheetingType};
use crate::numeric::ratio_of;

/// Quantity of an item and the weighted days it is in service
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUsage {
    pub quantity: f64,
    pub weighted_days: f64,
}

/// Two-pass accumulator: collect day products and quantities, then divide
#[derive(Debug, Clone)]
pub struct WeightedDays<K: Ord> {
    sums: BTreeMap<K, (f64, f64)>,
}

impl<K: Ord> Default for WeightedDays<K> {
    fn default() -> Self {
        Self {
            sums: BTreeMap::new(),
        }
    }
}

impl<K: Ord> WeightedDays<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register keys so they appear in the result even when unused
    pub fn with_keys(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            sums: keys.into_iter().map(|k| (k, (0.0, 0.0))).collect(),
        }
    }

    pub fn add(&mut self, key: K, quantity: f64, days: f64) {
        let entry = self.sums.entry(key).or_insert((0.0, 0.0));
        entry.0 += quantity * days;
        entry.1 += quantity;
    }

    /// Weighted average for `key`, 0 when it has no quantity
    pub fn weighted_days(&self, key: &K) -> f64 {
        self.sums
            .get(key)
            .map(|(product, quantity)| ratio_of(*product, *quantity))
            .unwrap_or(0.0)
    }

    pub fn finish(self) -> BTreeMap<K, ItemUsage> {
        self.sums
            .into_iter()
            .map(|(key, (product, quantity))| {
                (
                    key,
                    ItemUsage {
                        quantity,
                        weighted_days: ratio_of(product, quantity),
                    },
                )
            })
            .collect()
    }
}

/// Usage of every standard equipment type across `phases`
pub fn equipment_usage(phases: &[Phase]) -> BTreeMap<EquipmentType, ItemUsage> {
    let mut acc = WeightedDays::with_keys(EquipmentType::ALL);
    for phase in phases {
        for eq in EquipmentType::ALL {
            acc.add(eq, phase.quantity(eq), phase.days);
        }
    }
    acc.finish()
}

/// Square footage and weighted days per sheeting class, billable signs only
pub fn sign_usage(phases: &[Phase]) -> BTreeMap<SheetingType, ItemUsage> {
    let mut acc = WeightedDays::with_keys(SheetingType::ALL);
    for phase in phases {
        for sign in &phase.signs {
            let quantity = phase.effective_sign_quantity(sign);
            if quantity <= 0.0 || sign.width <= 0.0 || sign.height <= 0.0 {
                continue;
            }
            acc.add(
                sign.sheeting,
                sign.face_square_feet() * quantity,
                phase.days,
            );
        }
    }
    acc.finish()
}

/// Weighted days for every catalog key, equipment and sheeting alike
pub fn weighted_average_days(phases: &[Phase]) -> BTreeMap<ItemType, f64> {
    let equipment = equipment_usage(phases)
        .into_iter()
        .map(|(k, u)| (ItemType::from(k), u.weighted_days));
    let signs = sign_usage(phases)
        .into_iter()
        .map(|(k, u)| (ItemType::from(k), u.weighted_days));
    equipment.chain(signs).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sign;

    fn phase_with(eq: EquipmentType, quantity: f64, days: f64) -> Phase {
        let mut p = Phase {
            days,
            ..Default::default()
        };
        p.set_quantity(eq, quantity);
        p
    }

    #[test]
    fn test_uneven_phases() {
        let phases = vec![
            phase_with(EquipmentType::Post, 4.0, 2.0),
            phase_with(EquipmentType::Post, 1.0, 10.0),
        ];
        let usage = equipment_usage(&phases);
        let post = usage[&EquipmentType::Post];
        assert_eq!(post.quantity, 5.0);
        assert!((post.weighted_days - 3.6).abs() < 1e-12);
    }

    #[test]
    fn test_equal_duration_phases_yield_that_duration() {
        let phases = vec![
            phase_with(EquipmentType::Sandbag, 1.0, 7.0),
            phase_with(EquipmentType::Sandbag, 50.0, 7.0),
            phase_with(EquipmentType::Sandbag, 3.5, 7.0),
        ];
        let usage = equipment_usage(&phases);
        assert!((usage[&EquipmentType::Sandbag].weighted_days - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_quantity_is_zero_days() {
        let usage = equipment_usage(&[phase_with(EquipmentType::Covers, 0.0, 9.0)]);
        assert_eq!(usage[&EquipmentType::Covers].weighted_days, 0.0);
        assert_eq!(usage.len(), EquipmentType::ALL.len());
    }

    #[test]
    fn test_sign_usage_by_square_feet() {
        let mut short = Phase {
            days: 2.0,
            ..Default::default()
        };
        short.signs.push(Sign {
            id: "a".into(),
            width: 48.0,
            height: 48.0,
            quantity: 2.0,
            ..Default::default()
        });
        let mut long = Phase {
            days: 8.0,
            ..Default::default()
        };
        long.signs.push(Sign {
            id: "b".into(),
            width: 36.0,
            height: 48.0,
            quantity: 1.0,
            ..Default::default()
        });
        // Zero-width sign is ignored
        long.signs.push(Sign {
            id: "c".into(),
            width: 0.0,
            height: 48.0,
            quantity: 10.0,
            ..Default::default()
        });

        let usage = sign_usage(&[short, long]);
        let hi = usage[&SheetingType::HighIntensity];
        // 32 sq ft for 2 days, 12 sq ft for 8 days
        assert!((hi.quantity - 44.0).abs() < 1e-12);
        assert!((hi.weighted_days - (32.0 * 2.0 + 12.0 * 8.0) / 44.0).abs() < 1e-12);
        assert_eq!(usage[&SheetingType::DiamondGrade], ItemUsage::default());
    }

    #[test]
    fn test_secondary_sign_inherits_quantity() {
        let mut p = Phase {
            days: 5.0,
            ..Default::default()
        };
        p.signs.push(Sign {
            id: "primary".into(),
            width: 12.0,
            height: 12.0,
            quantity: 3.0,
            ..Default::default()
        });
        p.signs.push(Sign {
            id: "secondary".into(),
            width: 12.0,
            height: 12.0,
            quantity: 0.0,
            primary_sign_id: Some("primary".into()),
            ..Default::default()
        });
        let usage = sign_usage(&[p]);
        assert!((usage[&SheetingType::HighIntensity].quantity - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_custom_keys_accumulate() {
        let mut acc = WeightedDays::new();
        acc.add("x", 2.0, 3.0);
        acc.add("x", 2.0, 5.0);
        acc.add("y", 0.0, 5.0);
        assert_eq!(acc.weighted_days(&"x"), 4.0);
        assert_eq!(acc.weighted_days(&"y"), 0.0);
        assert_eq!(acc.weighted_days(&"missing"), 0.0);
    }
}
