//! Per-type equipment totals across phases

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{EquipmentType, Phase};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentTotal {
    pub total_quantity: f64,
    /// Sum of phase lengths. Informational only; depreciation uses weighted days.
    pub total_days_required: f64,
}

/// Totals for every equipment type. Each phase adds its days to every type,
/// whether or not the type is used in that phase.
pub fn equipment_totals(phases: &[Phase]) -> BTreeMap<EquipmentType, EquipmentTotal> {
    let mut totals: BTreeMap<EquipmentType, EquipmentTotal> = EquipmentType::ALL
        .iter()
        .map(|&eq| (eq, EquipmentTotal::default()))
        .collect();

    for phase in phases {
        for (eq, total) in totals.iter_mut() {
            total.total_quantity += phase.quantity(*eq);
            total.total_days_required += phase.days;
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_added_for_absent_types() {
        let mut a = Phase {
            days: 3.0,
            ..Default::default()
        };
        a.set_quantity(EquipmentType::Sandbag, 12.0);
        let b = Phase {
            days: 4.0,
            ..Default::default()
        };

        let totals = equipment_totals(&[a, b]);
        assert_eq!(totals.len(), EquipmentType::ALL.len());

        let sandbag = totals[&EquipmentType::Sandbag];
        assert_eq!(sandbag.total_quantity, 12.0);
        assert_eq!(sandbag.total_days_required, 7.0);

        let sharps = totals[&EquipmentType::Sharps];
        assert_eq!(sharps.total_quantity, 0.0);
        assert_eq!(sharps.total_days_required, 7.0);
    }

    #[test]
    fn test_no_phases_all_zero() {
        let totals = equipment_totals(&[]);
        assert!(totals.values().all(|t| *t == EquipmentTotal::default()));
    }
}
