//! Sign pricing by sheeting class

use std::collections::BTreeMap;

use bidcalc_types::CostMetrics;
use serde::{Deserialize, Serialize};

use crate::model::{AssociatedStructure, EquipmentType, MptRental, Phase, SheetingType};

use super::cost_metrics::item_cost_metrics;
use super::weighted_days::sign_usage;

/// One result per sheeting class, each priced independently
pub fn sign_cost_summary(rental: &MptRental) -> BTreeMap<SheetingType, CostMetrics> {
    let usage = sign_usage(&rental.phases);
    SheetingType::ALL
        .iter()
        .map(|&sheeting| {
            let metrics = item_cost_metrics(
                &rental.static_equipment_info,
                sheeting,
                usage.get(&sheeting).copied().unwrap_or_default(),
            );
            (sheeting, metrics)
        })
        .collect()
}

/// Square footage per sheeting class
pub fn sign_square_footage(rental: &MptRental) -> BTreeMap<SheetingType, f64> {
    sign_usage(&rental.phases)
        .into_iter()
        .map(|(sheeting, usage)| (sheeting, usage.quantity))
        .collect()
}

/// Equipment implied by a phase's primary signs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AssociatedSignEquipment {
    #[serde(rename = "fourFootTypeIII")]
    pub four_foot_type_iii: f64,
    #[serde(rename = "hStand")]
    pub h_stand: f64,
    pub post: f64,
    pub covers: f64,
    #[serde(rename = "BLights")]
    pub b_lights: f64,
}

impl AssociatedSignEquipment {
    /// Pairs of (equipment type, implied quantity)
    pub fn entries(&self) -> [(EquipmentType, f64); 5] {
        [
            (EquipmentType::FourFootTypeIII, self.four_foot_type_iii),
            (EquipmentType::HStand, self.h_stand),
            (EquipmentType::Post, self.post),
            (EquipmentType::Covers, self.covers),
            (EquipmentType::BLights, self.b_lights),
        ]
    }
}

pub fn associated_sign_equipment(phase: &Phase) -> AssociatedSignEquipment {
    let mut totals = AssociatedSignEquipment::default();
    for sign in phase.signs.iter().filter(|s| !s.is_secondary()) {
        totals.b_lights += sign.b_lights * sign.quantity;
        if sign.cover {
            totals.covers += sign.quantity;
        }
        match sign.associated_structure {
            AssociatedStructure::FourFootTypeIII => totals.four_foot_type_iii += sign.quantity,
            AssociatedStructure::HStand => totals.h_stand += sign.quantity,
            AssociatedStructure::Post => totals.post += sign.quantity,
            AssociatedStructure::None => {}
        }
    }
    totals
}
