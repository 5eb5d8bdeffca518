//! The complete editable estimate snapshot

use serde::{Deserialize, Serialize};

use super::admin::AdminData;
use super::permanent_signs::PermanentSigns;
use super::rental::MptRental;
use super::streams::{EquipmentRentalItem, Flagging, SaleItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Estimate {
    pub admin_data: AdminData,
    pub mpt_rental: Option<MptRental>,
    pub equipment_rental: Vec<EquipmentRentalItem>,
    pub flagging: Option<Flagging>,
    pub service_work: Option<Flagging>,
    pub sale_items: Vec<SaleItem>,
    pub permanent_signs: Option<PermanentSigns>,
}
