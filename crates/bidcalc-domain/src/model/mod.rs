//! Domain model types

mod lenient;

pub mod admin;
pub mod equipment;
pub mod estimate;
pub mod permanent_signs;
pub mod phase;
pub mod rental;
pub mod streams;

pub use admin::{AdminData, County, EmergencyFields, RatedStatus};
pub use equipment::{
    AssociatedStructure, EquipmentType, ItemType, SheetingType, StaticCatalog,
    StaticEquipmentInfo, DAYS_PER_YEAR,
};
pub use estimate::Estimate;
pub use permanent_signs::{
    AdditionalPmsEquipment, PermanentSigns, PmsEquipmentItem, PmsEquipmentPiece, PmsItem,
    PmsItemKind,
};
pub use phase::{CustomLightAndDrumItem, EquipmentQuantity, Phase, Sign};
pub use rental::MptRental;
pub use streams::{EquipmentRentalItem, Flagging, LumpSumEquipment, SaleItem};
