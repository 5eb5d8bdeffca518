//! Equipment and sheeting catalog types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::lenient;

/// Standard (non-sign) equipment rented per phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipmentType {
    #[serde(rename = "fourFootTypeIII")]
    FourFootTypeIII,
    #[serde(rename = "sixFootWings")]
    SixFootWings,
    #[serde(rename = "hStand")]
    HStand,
    #[serde(rename = "post")]
    Post,
    #[serde(rename = "sandbag")]
    Sandbag,
    #[serde(rename = "covers")]
    Covers,
    #[serde(rename = "metalStands")]
    MetalStands,
    #[serde(rename = "HIVP")]
    HiVerticalPanel,
    #[serde(rename = "TypeXIVP")]
    TypeXiVerticalPanel,
    #[serde(rename = "BLights")]
    BLights,
    #[serde(rename = "ACLights")]
    AcLights,
    #[serde(rename = "sharps")]
    Sharps,
}

impl EquipmentType {
    pub const ALL: [EquipmentType; 12] = [
        EquipmentType::FourFootTypeIII,
        EquipmentType::SixFootWings,
        EquipmentType::HStand,
        EquipmentType::Post,
        EquipmentType::Sandbag,
        EquipmentType::Covers,
        EquipmentType::MetalStands,
        EquipmentType::HiVerticalPanel,
        EquipmentType::TypeXiVerticalPanel,
        EquipmentType::BLights,
        EquipmentType::AcLights,
        EquipmentType::Sharps,
    ];

    /// Lights and drums (channelizers), priced by daily rental rate
    pub const LIGHT_AND_DRUM: [EquipmentType; 5] = [
        EquipmentType::HiVerticalPanel,
        EquipmentType::TypeXiVerticalPanel,
        EquipmentType::BLights,
        EquipmentType::AcLights,
        EquipmentType::Sharps,
    ];

    /// Structures that are delivered in truckloads of 30
    pub const DELIVERY_BATCHED: [EquipmentType; 3] = [
        EquipmentType::FourFootTypeIII,
        EquipmentType::HStand,
        EquipmentType::Post,
    ];

    pub fn is_light_and_drum(self) -> bool {
        Self::LIGHT_AND_DRUM.contains(&self)
    }

    pub fn label(self) -> &'static str {
        match self {
            EquipmentType::FourFootTypeIII => "4' Ft Type III",
            EquipmentType::SixFootWings => "6 Ft Wings",
            EquipmentType::HStand => "H Stand",
            EquipmentType::Post => "Post",
            EquipmentType::Sandbag => "Sandbag",
            EquipmentType::Covers => "Covers",
            EquipmentType::MetalStands => "Metal Stands",
            EquipmentType::HiVerticalPanel => "HI Vertical Panels",
            EquipmentType::TypeXiVerticalPanel => "Type XI Vertical Panels",
            EquipmentType::BLights => "B-Lites",
            EquipmentType::AcLights => "A/C-Lites",
            EquipmentType::Sharps => "Sharps",
        }
    }
}

/// Reflective sheeting class of a sign face
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SheetingType {
    #[serde(rename = "HI")]
    HighIntensity,
    #[serde(rename = "DG")]
    DiamondGrade,
    #[serde(rename = "Special")]
    Special,
}

impl SheetingType {
    pub const ALL: [SheetingType; 3] = [
        SheetingType::HighIntensity,
        SheetingType::DiamondGrade,
        SheetingType::Special,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SheetingType::HighIntensity => "HI",
            SheetingType::DiamondGrade => "DG",
            SheetingType::Special => "Special",
        }
    }
}

/// Key of the static catalog: any equipment type or sheeting class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemType {
    #[serde(rename = "fourFootTypeIII")]
    FourFootTypeIII,
    #[serde(rename = "sixFootWings")]
    SixFootWings,
    #[serde(rename = "hStand")]
    HStand,
    #[serde(rename = "post")]
    Post,
    #[serde(rename = "sandbag")]
    Sandbag,
    #[serde(rename = "covers")]
    Covers,
    #[serde(rename = "metalStands")]
    MetalStands,
    #[serde(rename = "HIVP")]
    HiVerticalPanel,
    #[serde(rename = "TypeXIVP")]
    TypeXiVerticalPanel,
    #[serde(rename = "BLights")]
    BLights,
    #[serde(rename = "ACLights")]
    AcLights,
    #[serde(rename = "sharps")]
    Sharps,
    #[serde(rename = "HI")]
    HighIntensity,
    #[serde(rename = "DG")]
    DiamondGrade,
    #[serde(rename = "Special")]
    Special,
}

impl ItemType {
    pub fn all() -> impl Iterator<Item = ItemType> {
        EquipmentType::ALL
            .into_iter()
            .map(ItemType::from)
            .chain(SheetingType::ALL.into_iter().map(ItemType::from))
    }

    /// Key as it appears in JSON and catalog files
    pub fn key(self) -> &'static str {
        match self {
            ItemType::FourFootTypeIII => "fourFootTypeIII",
            ItemType::SixFootWings => "sixFootWings",
            ItemType::HStand => "hStand",
            ItemType::Post => "post",
            ItemType::Sandbag => "sandbag",
            ItemType::Covers => "covers",
            ItemType::MetalStands => "metalStands",
            ItemType::HiVerticalPanel => "HIVP",
            ItemType::TypeXiVerticalPanel => "TypeXIVP",
            ItemType::BLights => "BLights",
            ItemType::AcLights => "ACLights",
            ItemType::Sharps => "sharps",
            ItemType::HighIntensity => "HI",
            ItemType::DiamondGrade => "DG",
            ItemType::Special => "Special",
        }
    }

    pub fn from_key(key: &str) -> Option<ItemType> {
        ItemType::all().find(|item| item.key().eq_ignore_ascii_case(key.trim()))
    }
}

impl From<EquipmentType> for ItemType {
    fn from(value: EquipmentType) -> Self {
        match value {
            EquipmentType::FourFootTypeIII => ItemType::FourFootTypeIII,
            EquipmentType::SixFootWings => ItemType::SixFootWings,
            EquipmentType::HStand => ItemType::HStand,
            EquipmentType::Post => ItemType::Post,
            EquipmentType::Sandbag => ItemType::Sandbag,
            EquipmentType::Covers => ItemType::Covers,
            EquipmentType::MetalStands => ItemType::MetalStands,
            EquipmentType::HiVerticalPanel => ItemType::HiVerticalPanel,
            EquipmentType::TypeXiVerticalPanel => ItemType::TypeXiVerticalPanel,
            EquipmentType::BLights => ItemType::BLights,
            EquipmentType::AcLights => ItemType::AcLights,
            EquipmentType::Sharps => ItemType::Sharps,
        }
    }
}

impl From<SheetingType> for ItemType {
    fn from(value: SheetingType) -> Self {
        match value {
            SheetingType::HighIntensity => ItemType::HighIntensity,
            SheetingType::DiamondGrade => ItemType::DiamondGrade,
            SheetingType::Special => ItemType::Special,
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Structure a primary sign is mounted on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssociatedStructure {
    #[serde(rename = "fourFootTypeIII")]
    FourFootTypeIII,
    #[serde(rename = "hStand")]
    HStand,
    #[serde(rename = "post")]
    Post,
    #[default]
    #[serde(rename = "none", other)]
    None,
}

impl AssociatedStructure {
    pub fn equipment_type(self) -> Option<EquipmentType> {
        match self {
            AssociatedStructure::FourFootTypeIII => Some(EquipmentType::FourFootTypeIII),
            AssociatedStructure::HStand => Some(EquipmentType::HStand),
            AssociatedStructure::Post => Some(EquipmentType::Post),
            AssociatedStructure::None => None,
        }
    }
}

/// Catalog entry for one item type
///
/// `useful_life` is in years for every item type; see [`Self::useful_life_days`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaticEquipmentInfo {
    #[serde(deserialize_with = "lenient::number")]
    pub price: f64,
    /// Percent off list price
    #[serde(deserialize_with = "lenient::number")]
    pub discount_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub useful_life: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub payback_period: f64,
}

pub const DAYS_PER_YEAR: f64 = 365.0;

impl StaticEquipmentInfo {
    pub fn useful_life_days(&self) -> f64 {
        self.useful_life * DAYS_PER_YEAR
    }
}

/// Static price table keyed by item type
pub type StaticCatalog = BTreeMap<ItemType, StaticEquipmentInfo>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_keys_round_trip_through_json() {
        for item in ItemType::all() {
            let json = serde_json::to_string(&item).unwrap();
            assert_eq!(json, format!("\"{}\"", item.key()));
        }
    }

    #[test]
    fn test_equipment_and_item_keys_agree() {
        for equipment in EquipmentType::ALL {
            let as_equipment = serde_json::to_string(&equipment).unwrap();
            let as_item = serde_json::to_string(&ItemType::from(equipment)).unwrap();
            assert_eq!(as_equipment, as_item);
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(ItemType::from_key("BLights"), Some(ItemType::BLights));
        assert_eq!(ItemType::from_key("hivp"), Some(ItemType::HiVerticalPanel));
        assert_eq!(ItemType::from_key(" DG "), Some(ItemType::DiamondGrade));
        assert_eq!(ItemType::from_key("crane"), None);
    }

    #[test]
    fn test_unknown_structure_is_none() {
        let s: AssociatedStructure = serde_json::from_str("\"tripod\"").unwrap();
        assert_eq!(s, AssociatedStructure::None);
    }

    #[test]
    fn test_catalog_map_keys() {
        let json = r#"{"BLights": {"price": 113, "usefulLife": 3}, "HI": {"price": "6"}}"#;
        let catalog: StaticCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog[&ItemType::BLights].price, 113.0);
        assert_eq!(catalog[&ItemType::BLights].useful_life_days(), 1095.0);
        assert_eq!(catalog[&ItemType::HighIntensity].price, 6.0);
        assert_eq!(catalog[&ItemType::HighIntensity].discount_rate, 0.0);
    }
}
