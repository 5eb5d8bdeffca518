//! Permanent sign installation work

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::lenient;

/// Priced hardware and material used by permanent sign work
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PmsEquipmentItem {
    PermSignBolts,
    AntiTheftBolts,
    ChevronBrackets,
    StreetNameCrossBrackets,
    #[serde(alias = "stiffenerSqInches")]
    StiffenerInches,
    TmzBrackets,
    JennyBrackets,
    HiReflectiveStrips,
    FygReflectiveStrips,
    Post,
    WoodPostMetalSleeves,
    PermSignCostSqFt,
    PermSignPriceSqFt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PmsEquipmentPiece {
    pub name: PmsEquipmentItem,
    #[serde(default, deserialize_with = "lenient::number")]
    pub cost: f64,
}

/// Kind of permanent sign work line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PmsItemKind {
    /// Post-mounted install, type B
    #[default]
    PmsTypeB,
    /// Post-mounted install on an existing post, type F
    PmsTypeF,
    PmsTypeC,
    ResetTypeB,
    ResetTypeF,
    RemoveTypeB,
    RemoveTypeF,
    FlexibleDelineator,
}

impl PmsItemKind {
    /// Installs of a new sign face (billed per square foot of sign)
    pub fn is_install(self) -> bool {
        matches!(
            self,
            PmsItemKind::PmsTypeB | PmsItemKind::PmsTypeF | PmsItemKind::PmsTypeC
        )
    }
}

/// Extra hardware listed on reset, removal, and delineator lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalPmsEquipment {
    pub equipment_type: PmsEquipmentItem,
    #[serde(default, deserialize_with = "lenient::number")]
    pub quantity: f64,
}

/// One permanent sign work line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PmsItem {
    pub id: String,
    pub item_number: String,
    pub kind: PmsItemKind,
    #[serde(deserialize_with = "lenient::number")]
    pub personnel: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub number_trucks: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub number_trips: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub install_hours_required: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub quantity: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub perm_sign_bolts: f64,
    /// Mobilized on its own trips instead of sharing days with other lines
    pub separate_mobilization: bool,
    pub standard_pricing: bool,
    /// Target margin percent when not using standard pricing
    #[serde(deserialize_with = "lenient::number")]
    pub custom_margin: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub sign_sq_footage: f64,
    /// Per-line override of the catalog sign cost per square foot
    #[serde(deserialize_with = "lenient::optional_number")]
    pub perm_sign_cost_sq_ft: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub hi_reflective_strips: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub fyg_reflective_strips: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub jenny_brackets: f64,
    #[serde(alias = "stiffenerSqInches", deserialize_with = "lenient::number")]
    pub stiffener_inches: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub tmz_brackets: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub anti_theft_bolts: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub chevron_brackets: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub street_name_cross_brackets: f64,
    /// Unit cost of a flexible delineator
    #[serde(deserialize_with = "lenient::number")]
    pub flexible_delineator_cost: f64,
    pub additional_items: Vec<AdditionalPmsEquipment>,
}

/// Permanent sign scope of an estimate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PermanentSigns {
    #[serde(deserialize_with = "lenient::number")]
    pub max_daily_hours: f64,
    /// Material markup percent under standard pricing
    #[serde(deserialize_with = "lenient::number")]
    pub item_markup: f64,
    pub equipment_data: Vec<PmsEquipmentPiece>,
    /// Installs per crew hour, by work kind
    pub productivity_rates: BTreeMap<PmsItemKind, f64>,
    pub sign_items: Vec<PmsItem>,
}

impl PermanentSigns {
    /// Unit price of a piece of hardware, 0 when it is not priced
    pub fn price_of(&self, item: PmsEquipmentItem) -> f64 {
        self.equipment_data
            .iter()
            .find(|piece| piece.name == item)
            .map(|piece| piece.cost)
            .unwrap_or(0.0)
    }
}
