//! Phases of a rental plan and what is deployed in them

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::equipment::{AssociatedStructure, EquipmentType, SheetingType};
use super::lenient;

/// Quantity of one standard equipment type in a phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentQuantity {
    #[serde(deserialize_with = "lenient::number")]
    pub quantity: f64,
}

/// A sign placed during a phase
///
/// Primary signs carry their structure, lights and cover; secondary signs hang
/// on a primary sign (`primary_sign_id`) and may leave `quantity` at zero to
/// inherit the primary's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sign {
    pub id: String,
    pub designation: String,
    pub description: String,
    /// Inches
    #[serde(deserialize_with = "lenient::number")]
    pub width: f64,
    /// Inches
    #[serde(deserialize_with = "lenient::number")]
    pub height: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub quantity: f64,
    pub sheeting: SheetingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_sign_id: Option<String>,
    pub associated_structure: AssociatedStructure,
    #[serde(deserialize_with = "lenient::number")]
    pub b_lights: f64,
    pub cover: bool,
}

impl Default for Sign {
    fn default() -> Self {
        Self {
            id: String::new(),
            designation: String::new(),
            description: String::new(),
            width: 0.0,
            height: 0.0,
            quantity: 0.0,
            sheeting: SheetingType::HighIntensity,
            primary_sign_id: None,
            associated_structure: AssociatedStructure::None,
            b_lights: 0.0,
            cover: false,
        }
    }
}

impl Sign {
    pub fn is_secondary(&self) -> bool {
        self.primary_sign_id.is_some()
    }

    /// Only signs with positive size and quantity count toward totals
    pub fn is_billable(&self) -> bool {
        self.quantity > 0.0 && self.width > 0.0 && self.height > 0.0
    }

    /// Face area of a single sign in square feet
    pub fn face_square_feet(&self) -> f64 {
        self.width * self.height / 144.0
    }

    /// Face area of all copies of this sign in square feet
    pub fn total_square_feet(&self) -> f64 {
        self.face_square_feet() * self.quantity
    }
}

/// Light or drum item that is not in the static catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomLightAndDrumItem {
    pub id: String,
    #[serde(deserialize_with = "lenient::number")]
    pub quantity: f64,
    /// Unit purchase cost
    #[serde(deserialize_with = "lenient::number")]
    pub cost: f64,
    /// Years
    #[serde(deserialize_with = "lenient::number")]
    pub useful_life: f64,
}

/// One deployment window of a job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Phase {
    pub name: String,
    #[serde(deserialize_with = "lenient::optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient::optional_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient::number")]
    pub personnel: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub days: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub number_trucks: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub additional_rated_hours: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub additional_non_rated_hours: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub maintenance_trips: f64,
    pub emergency: bool,
    pub standard_equipment: BTreeMap<EquipmentType, EquipmentQuantity>,
    pub custom_light_and_drum_items: Vec<CustomLightAndDrumItem>,
    pub signs: Vec<Sign>,
}

impl Phase {
    /// Quantity of an equipment type, 0 when the phase does not list it
    pub fn quantity(&self, equipment: EquipmentType) -> f64 {
        self.standard_equipment
            .get(&equipment)
            .map(|e| e.quantity)
            .unwrap_or(0.0)
    }

    pub fn set_quantity(&mut self, equipment: EquipmentType, quantity: f64) {
        self.standard_equipment
            .entry(equipment)
            .or_default()
            .quantity = quantity;
    }

    /// Calendar length of the phase when both dates are set (inclusive)
    pub fn calendar_days(&self) -> Option<f64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if end >= start => {
                Some(((end - start).num_days() + 1) as f64)
            }
            _ => None,
        }
    }

    /// Quantity a sign is costed at: secondary signs without their own
    /// quantity take their primary's
    pub fn effective_sign_quantity(&self, sign: &Sign) -> f64 {
        if sign.quantity > 0.0 {
            return sign.quantity;
        }
        match &sign.primary_sign_id {
            Some(primary_id) => self
                .signs
                .iter()
                .find(|s| !s.is_secondary() && &s.id == primary_id)
                .map(|primary| primary.quantity)
                .unwrap_or(sign.quantity),
            None => sign.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary(id: &str, quantity: f64) -> Sign {
        Sign {
            id: id.to_string(),
            width: 48.0,
            height: 48.0,
            quantity,
            ..Default::default()
        }
    }

    fn secondary(id: &str, primary_id: &str, quantity: f64) -> Sign {
        Sign {
            id: id.to_string(),
            width: 24.0,
            height: 12.0,
            quantity,
            primary_sign_id: Some(primary_id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_square_feet() {
        let sign = primary("p1", 3.0);
        assert!((sign.face_square_feet() - 16.0).abs() < 1e-12);
        assert!((sign.total_square_feet() - 48.0).abs() < 1e-12);
    }

    #[test]
    fn test_billable() {
        assert!(primary("p1", 1.0).is_billable());
        assert!(!primary("p1", 0.0).is_billable());
        let mut flat = primary("p1", 1.0);
        flat.height = 0.0;
        assert!(!flat.is_billable());
    }

    #[test]
    fn test_secondary_inherits_primary_quantity() {
        let phase = Phase {
            signs: vec![primary("p1", 4.0), secondary("s1", "p1", 0.0), secondary("s2", "p1", 2.0)],
            ..Default::default()
        };
        assert_eq!(phase.effective_sign_quantity(&phase.signs[1]), 4.0);
        assert_eq!(phase.effective_sign_quantity(&phase.signs[2]), 2.0);
    }

    #[test]
    fn test_orphan_secondary_keeps_own_quantity() {
        let phase = Phase {
            signs: vec![secondary("s1", "missing", 0.0)],
            ..Default::default()
        };
        assert_eq!(phase.effective_sign_quantity(&phase.signs[0]), 0.0);
    }

    #[test]
    fn test_quantity_lookup_defaults_to_zero() {
        let mut phase = Phase::default();
        assert_eq!(phase.quantity(EquipmentType::Post), 0.0);
        phase.set_quantity(EquipmentType::Post, 12.0);
        assert_eq!(phase.quantity(EquipmentType::Post), 12.0);
    }

    #[test]
    fn test_calendar_days() {
        let phase = Phase {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 10),
            ..Default::default()
        };
        assert_eq!(phase.calendar_days(), Some(10.0));
        assert_eq!(Phase::default().calendar_days(), None);
    }

    #[test]
    fn test_phase_from_json() {
        let json = r#"{
            "name": "Phase 1",
            "days": "5",
            "personnel": 2,
            "numberTrucks": null,
            "standardEquipment": {"fourFootTypeIII": {"quantity": 10}, "BLights": {"quantity": 3}},
            "signs": [{"id": "a", "width": 36, "height": 36, "quantity": 2, "sheeting": "DG",
                       "associatedStructure": "post", "bLights": 1, "cover": true}],
            "customLightAndDrumItems": [{"id": "x", "quantity": 1, "cost": 250, "usefulLife": 4}]
        }"#;
        let phase: Phase = serde_json::from_str(json).unwrap();
        assert_eq!(phase.days, 5.0);
        assert_eq!(phase.number_trucks, 0.0);
        assert_eq!(phase.quantity(EquipmentType::FourFootTypeIII), 10.0);
        assert_eq!(phase.signs[0].sheeting, SheetingType::DiamondGrade);
        assert_eq!(phase.signs[0].associated_structure, AssociatedStructure::Post);
        assert_eq!(phase.custom_light_and_drum_items[0].cost, 250.0);
    }
}
