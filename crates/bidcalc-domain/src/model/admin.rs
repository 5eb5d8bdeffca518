//! Job-level administrative parameters

use serde::{Deserialize, Serialize};

use super::equipment::EquipmentType;
use super::lenient;

/// County wage table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct County {
    pub name: String,
    #[serde(deserialize_with = "lenient::number")]
    pub labor_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub fringe_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub shop_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub flagging_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub flagging_base_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub flagging_fringe_rate: f64,
}

impl County {
    /// Hourly labor plus fringe
    pub fn loaded_labor_rate(&self) -> f64 {
        self.labor_rate + self.fringe_rate
    }
}

/// Labor billing mode of a job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatedStatus {
    #[default]
    #[serde(rename = "RATED")]
    Rated,
    #[serde(rename = "NON-RATED", alias = "NON_RATED", alias = "NONRATED")]
    NonRated,
}

/// Daily rate overrides for light and drum items on emergency jobs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyFields {
    #[serde(rename = "emergencyHIVerticalPanels", deserialize_with = "lenient::number")]
    pub hi_vertical_panels: f64,
    #[serde(rename = "emergencyTypeXIVerticalPanels", deserialize_with = "lenient::number")]
    pub type_xi_vertical_panels: f64,
    #[serde(rename = "emergencyBLites", deserialize_with = "lenient::number")]
    pub b_lites: f64,
    #[serde(rename = "emergencyACLites", deserialize_with = "lenient::number")]
    pub ac_lites: f64,
    #[serde(rename = "emergencySharps", deserialize_with = "lenient::number")]
    pub sharps: f64,
}

impl EmergencyFields {
    /// Override rate for an equipment type, if one is configured (> 0)
    pub fn rate_for(&self, equipment: EquipmentType) -> Option<f64> {
        let rate = match equipment {
            EquipmentType::HiVerticalPanel => self.hi_vertical_panels,
            EquipmentType::TypeXiVerticalPanel => self.type_xi_vertical_panels,
            EquipmentType::BLights => self.b_lites,
            EquipmentType::AcLights => self.ac_lites,
            EquipmentType::Sharps => self.sharps,
            _ => return None,
        };
        (rate > 0.0).then_some(rate)
    }

    /// Mutable slot for an equipment type's override, if it has one
    pub fn rate_slot_mut(&mut self, equipment: EquipmentType) -> Option<&mut f64> {
        match equipment {
            EquipmentType::HiVerticalPanel => Some(&mut self.hi_vertical_panels),
            EquipmentType::TypeXiVerticalPanel => Some(&mut self.type_xi_vertical_panels),
            EquipmentType::BLights => Some(&mut self.b_lites),
            EquipmentType::AcLights => Some(&mut self.ac_lites),
            EquipmentType::Sharps => Some(&mut self.sharps),
            _ => None,
        }
    }
}

/// Job-level parameters shared by every calculator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminData {
    pub contract_number: String,
    pub county: County,
    /// One-way mileage from the yard
    #[serde(deserialize_with = "lenient::number")]
    pub ow_mileage: f64,
    /// One-way travel time in minutes
    #[serde(deserialize_with = "lenient::number")]
    pub ow_travel_time_mins: f64,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub ow_travel_time_hours: Option<f64>,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub ow_travel_time_minutes: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub fuel_cost_per_gallon: f64,
    pub rated: RatedStatus,
    pub emergency_job: bool,
    pub emergency_fields: EmergencyFields,
}

impl AdminData {
    /// One-way travel minutes, preferring the hours/minutes split when both are set
    pub fn one_way_travel_minutes(&self) -> f64 {
        match (self.ow_travel_time_hours, self.ow_travel_time_minutes) {
            (Some(hours), Some(minutes)) => hours * 60.0 + minutes,
            _ => self.ow_travel_time_mins,
        }
    }

    pub fn is_rated(&self) -> bool {
        self.rated == RatedStatus::Rated
    }
}
