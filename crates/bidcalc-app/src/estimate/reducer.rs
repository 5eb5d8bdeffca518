//! Pure estimate reducer
//!
//! `reduce` never mutates its input. Actions that address a missing phase,
//! sign or line item leave the estimate unchanged and log a warning.
//! Records carried by an action go through the same cleaning as
//! `normalize_estimate` before they are stored.

use bidcalc_domain::model::{
    AdminData, Estimate, ItemType, MptRental, Phase, StaticEquipmentInfo,
};
use bidcalc_domain::numeric::{non_negative, safe};
use bidcalc_domain::service::{associated_sign_equipment, schedule_sign_items};
use tracing::{debug, warn};

use super::action::{
    AdminField, CatalogField, EstimateAction, PaybackField, PhaseField, TruckFuelField,
};
use crate::constants::default_catalog;
use crate::normalize::{
    normalize_catalog_entry, normalize_county, normalize_custom_item, normalize_estimate,
    normalize_flagging, normalize_permanent_signs, normalize_rental_item, normalize_sale_item,
    normalize_sign,
};

/// Apply one action and return the next estimate
pub fn reduce(state: &Estimate, action: EstimateAction) -> Estimate {
    let mut next = state.clone();
    apply(&mut next, action);
    next
}

fn apply(estimate: &mut Estimate, action: EstimateAction) {
    use EstimateAction::*;

    match action {
        SetContractNumber(number) => estimate.admin_data.contract_number = number,
        SetCounty(mut county) => {
            normalize_county(&mut county);
            estimate.admin_data.county = county;
        }
        UpdateAdmin { field, value } => update_admin(&mut estimate.admin_data, field, value),
        SetTravelTime { hours, minutes } => {
            let admin = &mut estimate.admin_data;
            let hours = non_negative(hours);
            let minutes = non_negative(minutes);
            admin.ow_travel_time_hours = Some(hours);
            admin.ow_travel_time_minutes = Some(minutes);
            admin.ow_travel_time_mins = hours * 60.0 + minutes;
        }
        SetRated(rated) => estimate.admin_data.rated = rated,
        SetEmergencyJob(emergency) => estimate.admin_data.emergency_job = emergency,
        SetEmergencyRate { equipment, rate } => {
            match estimate.admin_data.emergency_fields.rate_slot_mut(equipment) {
                Some(slot) => *slot = non_negative(rate),
                None => warn!(equipment = equipment.label(), "no emergency rate for equipment"),
            }
        }

        AddMptRental(defaults) => {
            if estimate.mpt_rental.is_some() {
                debug!("rental plan already present");
                return;
            }
            estimate.mpt_rental = Some(MptRental {
                payback_period: defaults.payback_period,
                target_moic: defaults.target_moic,
                annual_utilization: defaults.annual_utilization,
                dispatch_fee: defaults.dispatch_fee,
                mpg_per_truck: defaults.mpg_per_truck.max(1.0),
                static_equipment_info: default_catalog(),
                phases: vec![new_phase(0)],
            });
        }
        AddPhase => {
            if let Some(rental) = rental_mut(estimate) {
                let index = rental.phases.len();
                rental.phases.push(new_phase(index));
            }
        }
        DeletePhase(index) => {
            if let Some(rental) = rental_mut(estimate) {
                delete_phase(rental, index);
            }
        }
        UpdatePhase { phase, field, value } => {
            if let Some(phase) = phase_mut(estimate, phase) {
                let value = non_negative(value);
                match field {
                    PhaseField::Personnel => phase.personnel = value,
                    PhaseField::Days => phase.days = value,
                    PhaseField::NumberTrucks => phase.number_trucks = value,
                    PhaseField::AdditionalRatedHours => phase.additional_rated_hours = value,
                    PhaseField::AdditionalNonRatedHours => {
                        phase.additional_non_rated_hours = value
                    }
                    PhaseField::MaintenanceTrips => phase.maintenance_trips = value,
                }
            }
        }
        RenamePhase { phase, name } => {
            if let Some(phase) = phase_mut(estimate, phase) {
                phase.name = name;
            }
        }
        SetPhaseDates { phase, start, end } => {
            if let Some(phase) = phase_mut(estimate, phase) {
                phase.start_date = start;
                phase.end_date = end;
                if let Some(days) = phase.calendar_days() {
                    phase.days = days;
                }
            }
        }
        SetPhaseEmergency { phase, emergency } => {
            if let Some(phase) = phase_mut(estimate, phase) {
                phase.emergency = emergency;
            }
        }
        UpdateStaticEquipment { item, field, value } => {
            let Some(key) = ItemType::from_key(&item) else {
                warn!(item = %item, "unknown catalog item");
                return;
            };
            if let Some(rental) = rental_mut(estimate) {
                let entry = rental.static_equipment_info.entry(key).or_default();
                update_catalog_entry(entry, field, value);
            }
        }
        UpdateTruckFuel { field, value } => {
            if let Some(rental) = rental_mut(estimate) {
                match field {
                    TruckFuelField::MpgPerTruck => rental.mpg_per_truck = safe(value).max(1.0),
                    TruckFuelField::DispatchFee => rental.dispatch_fee = non_negative(value),
                }
            }
        }
        UpdatePayback { field, value } => {
            if let Some(rental) = rental_mut(estimate) {
                let value = non_negative(value);
                match field {
                    PaybackField::PaybackPeriod => rental.payback_period = value,
                    PaybackField::TargetMoic => rental.target_moic = value,
                    PaybackField::AnnualUtilization => rental.annual_utilization = value,
                }
            }
        }
        SetEquipmentQuantity { phase, equipment, quantity } => {
            if let Some(phase) = phase_mut(estimate, phase) {
                phase.set_quantity(equipment, non_negative(quantity));
            }
        }
        AddCustomItem { phase, mut item } => {
            if let Some(phase) = phase_mut(estimate, phase) {
                normalize_custom_item(&mut item);
                phase.custom_light_and_drum_items.push(item);
            }
        }
        UpdateCustomItem { phase, mut item } => {
            if let Some(phase) = phase_mut(estimate, phase) {
                normalize_custom_item(&mut item);
                match phase
                    .custom_light_and_drum_items
                    .iter_mut()
                    .find(|existing| existing.id == item.id)
                {
                    Some(existing) => *existing = item,
                    None => warn!(id = %item.id, "custom item not found"),
                }
            }
        }
        AddSign { phase, mut sign } => {
            if let Some(phase) = phase_mut(estimate, phase) {
                normalize_sign(&mut sign);
                phase.signs.push(sign);
            }
        }
        ReplaceSigns { phase, mut signs } => {
            if let Some(phase) = phase_mut(estimate, phase) {
                signs.iter_mut().for_each(normalize_sign);
                phase.signs = signs;
            }
        }
        UpdateSign { phase, mut sign } => {
            if let Some(phase) = phase_mut(estimate, phase) {
                normalize_sign(&mut sign);
                match phase.signs.iter_mut().find(|existing| existing.id == sign.id) {
                    Some(existing) => *existing = sign,
                    None => warn!(id = %sign.id, "sign not found"),
                }
            }
        }
        DeleteSign { phase, id } => {
            if let Some(phase) = phase_mut(estimate, phase) {
                let before = phase.signs.len();
                phase.signs.retain(|s| s.id != id);
                if phase.signs.len() == before {
                    warn!(id = %id, "sign not found");
                }
            }
        }
        ResetPhaseSigns(index) => {
            if let Some(phase) = phase_mut(estimate, index) {
                phase.signs.clear();
                sync_sign_equipment(phase);
            }
        }
        RefreshPhaseSigns(index) => {
            if let Some(phase) = phase_mut(estimate, index) {
                sync_sign_equipment(phase);
            }
        }

        AddRentalItem(mut item) => {
            normalize_rental_item(&mut item);
            estimate.equipment_rental.push(item);
        }
        UpdateRentalItem { index, mut item } => match estimate.equipment_rental.get_mut(index) {
            Some(existing) => {
                normalize_rental_item(&mut item);
                *existing = item;
            }
            None => warn!(index, "rental item out of range"),
        },
        DeleteRentalItem(index) => remove_at(&mut estimate.equipment_rental, index, "rental item"),
        AddSaleItem(mut item) => {
            normalize_sale_item(&mut item);
            estimate.sale_items.push(item);
        }
        UpdateSaleItem { index, mut item } => match estimate.sale_items.get_mut(index) {
            Some(existing) => {
                normalize_sale_item(&mut item);
                *existing = item;
            }
            None => warn!(index, "sale item out of range"),
        },
        DeleteSaleItem(index) => remove_at(&mut estimate.sale_items, index, "sale item"),
        ResetSaleItems => estimate.sale_items.clear(),
        SetFlagging(mut flagging) => {
            flagging.iter_mut().for_each(normalize_flagging);
            estimate.flagging = flagging;
        }
        SetServiceWork(mut service_work) => {
            service_work.iter_mut().for_each(normalize_flagging);
            estimate.service_work = service_work;
        }
        SetPermanentSigns(mut permanent_signs) => {
            if let Some(signs) = permanent_signs.as_mut() {
                normalize_permanent_signs(signs);
                schedule_sign_items(signs);
            }
            estimate.permanent_signs = permanent_signs;
        }

        Reset => *estimate = Estimate::default(),
        CopyEstimate(snapshot) => *estimate = normalize_estimate(*snapshot),
    }
}

fn update_admin(admin: &mut AdminData, field: AdminField, value: f64) {
    let value = non_negative(value);
    let county = &mut admin.county;
    match field {
        AdminField::LaborRate => county.labor_rate = value,
        AdminField::FringeRate => county.fringe_rate = value,
        AdminField::ShopRate => county.shop_rate = value,
        AdminField::FlaggingRate => county.flagging_rate = value,
        AdminField::FlaggingBaseRate => county.flagging_base_rate = value,
        AdminField::FlaggingFringeRate => county.flagging_fringe_rate = value,
        AdminField::OwMileage => admin.ow_mileage = value,
        AdminField::OwTravelTimeMins => {
            admin.ow_travel_time_mins = value;
            admin.ow_travel_time_hours = None;
            admin.ow_travel_time_minutes = None;
        }
        AdminField::FuelCostPerGallon => admin.fuel_cost_per_gallon = value,
    }
}

fn update_catalog_entry(entry: &mut StaticEquipmentInfo, field: CatalogField, value: f64) {
    match field {
        CatalogField::Price => entry.price = value,
        CatalogField::DiscountRate => entry.discount_rate = value,
        CatalogField::UsefulLife => entry.useful_life = value,
        CatalogField::PaybackPeriod => entry.payback_period = value,
    }
    normalize_catalog_entry(entry);
}

fn new_phase(index: usize) -> Phase {
    Phase {
        name: format!("Phase {}", index + 1),
        ..Phase::default()
    }
}

/// Phase 0 always survives. Equipment the deleted phase's signs implied is
/// taken back out of phase 0.
fn delete_phase(rental: &mut MptRental, index: usize) {
    if index == 0 {
        debug!("first phase cannot be deleted");
        return;
    }
    if index >= rental.phases.len() {
        warn!(index, "phase out of range");
        return;
    }
    let removed = rental.phases.remove(index);
    let implied = associated_sign_equipment(&removed);
    if let Some(first) = rental.phases.first_mut() {
        for (equipment, quantity) in implied.entries() {
            if quantity > 0.0 {
                let remaining = (first.quantity(equipment) - quantity).max(0.0);
                first.set_quantity(equipment, remaining);
            }
        }
    }
}

fn sync_sign_equipment(phase: &mut Phase) {
    let implied = associated_sign_equipment(phase);
    for (equipment, quantity) in implied.entries() {
        phase.set_quantity(equipment, quantity);
    }
}

fn rental_mut(estimate: &mut Estimate) -> Option<&mut MptRental> {
    let rental = estimate.mpt_rental.as_mut();
    if rental.is_none() {
        warn!("no rental plan");
    }
    rental
}

fn phase_mut(estimate: &mut Estimate, index: usize) -> Option<&mut Phase> {
    let phase = rental_mut(estimate)?.phases.get_mut(index);
    if phase.is_none() {
        warn!(index, "phase out of range");
    }
    phase
}

fn remove_at<T>(items: &mut Vec<T>, index: usize, what: &str) {
    if index < items.len() {
        items.remove(index);
    } else {
        warn!(index, what, "index out of range");
    }
}
