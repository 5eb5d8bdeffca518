//! Every edit an estimate can undergo

use bidcalc_domain::model::{
    County, CustomLightAndDrumItem, EquipmentRentalItem, EquipmentType, Estimate, Flagging,
    PermanentSigns, RatedStatus, SaleItem, Sign,
};
use chrono::NaiveDate;

use crate::config::PricingDefaults;

/// Numeric admin fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminField {
    LaborRate,
    FringeRate,
    ShopRate,
    FlaggingRate,
    FlaggingBaseRate,
    FlaggingFringeRate,
    OwMileage,
    OwTravelTimeMins,
    FuelCostPerGallon,
}

/// Numeric phase fields (floored at zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseField {
    Personnel,
    Days,
    NumberTrucks,
    AdditionalRatedHours,
    AdditionalNonRatedHours,
    MaintenanceTrips,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogField {
    Price,
    DiscountRate,
    UsefulLife,
    PaybackPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruckFuelField {
    /// Floored at 1
    MpgPerTruck,
    /// Floored at 0
    DispatchFee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaybackField {
    PaybackPeriod,
    TargetMoic,
    AnnualUtilization,
}

/// Phases are addressed by index; signs and custom items by id.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateAction {
    // Admin
    SetContractNumber(String),
    SetCounty(County),
    UpdateAdmin { field: AdminField, value: f64 },
    SetTravelTime { hours: f64, minutes: f64 },
    SetRated(RatedStatus),
    SetEmergencyJob(bool),
    SetEmergencyRate { equipment: EquipmentType, rate: f64 },

    // Rental plan
    AddMptRental(PricingDefaults),
    AddPhase,
    DeletePhase(usize),
    UpdatePhase { phase: usize, field: PhaseField, value: f64 },
    RenamePhase { phase: usize, name: String },
    SetPhaseDates { phase: usize, start: Option<NaiveDate>, end: Option<NaiveDate> },
    SetPhaseEmergency { phase: usize, emergency: bool },
    /// `item` is a catalog key; unknown keys are ignored
    UpdateStaticEquipment { item: String, field: CatalogField, value: f64 },
    UpdateTruckFuel { field: TruckFuelField, value: f64 },
    UpdatePayback { field: PaybackField, value: f64 },
    SetEquipmentQuantity { phase: usize, equipment: EquipmentType, quantity: f64 },
    AddCustomItem { phase: usize, item: CustomLightAndDrumItem },
    UpdateCustomItem { phase: usize, item: CustomLightAndDrumItem },
    AddSign { phase: usize, sign: Sign },
    ReplaceSigns { phase: usize, signs: Vec<Sign> },
    UpdateSign { phase: usize, sign: Sign },
    DeleteSign { phase: usize, id: String },
    /// Remove all signs and zero the equipment they implied
    ResetPhaseSigns(usize),
    /// Recompute sign-implied equipment from the current signs
    RefreshPhaseSigns(usize),

    // Other revenue streams
    AddRentalItem(EquipmentRentalItem),
    UpdateRentalItem { index: usize, item: EquipmentRentalItem },
    DeleteRentalItem(usize),
    AddSaleItem(SaleItem),
    UpdateSaleItem { index: usize, item: SaleItem },
    DeleteSaleItem(usize),
    ResetSaleItems,
    SetFlagging(Option<Flagging>),
    SetServiceWork(Option<Flagging>),
    SetPermanentSigns(Option<PermanentSigns>),

    // Whole snapshot
    Reset,
    CopyEstimate(Box<Estimate>),
}
