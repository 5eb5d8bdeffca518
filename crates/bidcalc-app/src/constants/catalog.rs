//! Default static equipment catalog
//!
//! Unit prices in dollars, useful life and payback in years, no discount.

use bidcalc_domain::model::{ItemType, StaticCatalog, StaticEquipmentInfo};

/// `(item, price, useful life, payback period)`
pub const DEFAULT_CATALOG: [(ItemType, f64, f64, f64); 15] = [
    (ItemType::FourFootTypeIII, 150.98, 10.0, 4.0),
    (ItemType::SixFootWings, 129.64, 10.0, 4.0),
    (ItemType::HStand, 60.33, 10.0, 4.0),
    (ItemType::Post, 44.20, 7.0, 4.0),
    (ItemType::Sandbag, 2.62, 2.0, 1.0),
    (ItemType::Covers, 48.00, 3.0, 2.0),
    (ItemType::MetalStands, 134.95, 3.0, 2.0),
    (ItemType::HiVerticalPanel, 66.18, 5.0, 0.0),
    (ItemType::TypeXiVerticalPanel, 86.48, 5.0, 0.0),
    (ItemType::BLights, 113.00, 3.0, 0.0),
    (ItemType::AcLights, 17.95, 3.0, 0.0),
    (ItemType::Sharps, 174.37, 5.0, 0.0),
    (ItemType::HighIntensity, 6.00, 3.0, 2.0),
    (ItemType::DiamondGrade, 6.81, 3.0, 2.0),
    (ItemType::Special, 6.81, 3.0, 2.0),
];

pub fn default_catalog() -> StaticCatalog {
    DEFAULT_CATALOG
        .iter()
        .map(|&(item, price, useful_life, payback_period)| {
            (
                item,
                StaticEquipmentInfo {
                    price,
                    discount_rate: 0.0,
                    useful_life,
                    payback_period,
                },
            )
        })
        .collect()
}
