//! Single normalization pass at the engine's entry point
//!
//! After `normalize_estimate` every number is finite, counts and money are
//! non-negative, truck fuel economy is at least 1 mpg, and secondary signs
//! carry their primary's quantity.

use bidcalc_domain::model::{
    AdminData, County, CustomLightAndDrumItem, Estimate, EquipmentRentalItem, Flagging,
    MptRental, PermanentSigns, Phase, SaleItem, Sign, StaticEquipmentInfo,
};
use bidcalc_domain::numeric::{finite_or_zero, non_negative};
use tracing::debug;

/// Finite and non-negative
fn clean(value: &mut f64) {
    *value = non_negative(finite_or_zero(*value));
}

fn clean_all<const N: usize>(values: [&mut f64; N]) {
    for v in values {
        clean(v);
    }
}

pub fn normalize_estimate(mut estimate: Estimate) -> Estimate {
    normalize_admin(&mut estimate.admin_data);
    if let Some(rental) = estimate.mpt_rental.as_mut() {
        normalize_rental(rental);
    }
    estimate.equipment_rental.iter_mut().for_each(normalize_rental_item);
    estimate.sale_items.iter_mut().for_each(normalize_sale_item);
    if let Some(f) = estimate.flagging.as_mut() {
        normalize_flagging(f);
    }
    if let Some(f) = estimate.service_work.as_mut() {
        normalize_flagging(f);
    }
    if let Some(p) = estimate.permanent_signs.as_mut() {
        normalize_permanent_signs(p);
    }
    estimate
}

/// Discount is a percentage of list price
pub(crate) const MAX_DISCOUNT_RATE: f64 = 100.0;

pub(crate) fn normalize_county(county: &mut County) {
    clean_all([
        &mut county.labor_rate,
        &mut county.fringe_rate,
        &mut county.shop_rate,
        &mut county.flagging_rate,
        &mut county.flagging_base_rate,
        &mut county.flagging_fringe_rate,
    ]);
}

fn normalize_admin(admin: &mut AdminData) {
    normalize_county(&mut admin.county);
    clean_all([
        &mut admin.ow_mileage,
        &mut admin.ow_travel_time_mins,
        &mut admin.fuel_cost_per_gallon,
    ]);
    for split in [&mut admin.ow_travel_time_hours, &mut admin.ow_travel_time_minutes] {
        if let Some(v) = split.as_mut() {
            clean(v);
        }
    }
    let e = &mut admin.emergency_fields;
    clean_all([
        &mut e.hi_vertical_panels,
        &mut e.type_xi_vertical_panels,
        &mut e.b_lites,
        &mut e.ac_lites,
        &mut e.sharps,
    ]);
}

fn normalize_rental(rental: &mut MptRental) {
    clean_all([
        &mut rental.payback_period,
        &mut rental.target_moic,
        &mut rental.annual_utilization,
        &mut rental.dispatch_fee,
        &mut rental.mpg_per_truck,
    ]);
    if rental.mpg_per_truck < 1.0 {
        rental.mpg_per_truck = 1.0;
    }
    rental
        .static_equipment_info
        .values_mut()
        .for_each(normalize_catalog_entry);
    rental.phases.iter_mut().for_each(normalize_phase);
}

pub(crate) fn normalize_catalog_entry(info: &mut StaticEquipmentInfo) {
    clean_all([
        &mut info.price,
        &mut info.discount_rate,
        &mut info.useful_life,
        &mut info.payback_period,
    ]);
    info.discount_rate = info.discount_rate.min(MAX_DISCOUNT_RATE);
}

fn normalize_phase(phase: &mut Phase) {
    clean_all([
        &mut phase.personnel,
        &mut phase.days,
        &mut phase.number_trucks,
        &mut phase.additional_rated_hours,
        &mut phase.additional_non_rated_hours,
        &mut phase.maintenance_trips,
    ]);
    if phase.days == 0.0 {
        if let Some(days) = phase.calendar_days() {
            debug!(phase = %phase.name, days, "days taken from phase dates");
            phase.days = days;
        }
    }
    for quantity in phase.standard_equipment.values_mut() {
        clean(&mut quantity.quantity);
    }
    phase
        .custom_light_and_drum_items
        .iter_mut()
        .for_each(normalize_custom_item);
    phase.signs.iter_mut().for_each(normalize_sign);
    resolve_secondary_quantities(phase);
}

pub(crate) fn normalize_custom_item(item: &mut CustomLightAndDrumItem) {
    clean_all([&mut item.quantity, &mut item.cost, &mut item.useful_life]);
}

pub(crate) fn normalize_sign(sign: &mut Sign) {
    clean_all([
        &mut sign.width,
        &mut sign.height,
        &mut sign.quantity,
        &mut sign.b_lights,
    ]);
}

/// Secondary signs without their own quantity take their primary's
fn resolve_secondary_quantities(phase: &mut Phase) {
    let resolved: Vec<f64> = phase
        .signs
        .iter()
        .map(|sign| phase.effective_sign_quantity(sign))
        .collect();
    for (sign, quantity) in phase.signs.iter_mut().zip(resolved) {
        sign.quantity = quantity;
    }
}

pub(crate) fn normalize_rental_item(item: &mut EquipmentRentalItem) {
    clean_all([
        &mut item.quantity,
        &mut item.months,
        &mut item.rent_price,
        &mut item.re_rent_price,
        &mut item.total_cost,
        &mut item.useful_life_yrs,
    ]);
}

pub(crate) fn normalize_sale_item(item: &mut SaleItem) {
    clean_all([
        &mut item.quantity,
        &mut item.quote_price,
        &mut item.markup_percentage,
    ]);
}

pub(crate) fn normalize_flagging(f: &mut Flagging) {
    clean_all([
        &mut f.personnel,
        &mut f.on_site_job_hours,
        &mut f.general_liability,
        &mut f.worker_comp,
        &mut f.number_trucks,
        &mut f.fuel_cost_per_gallon,
        &mut f.fuel_economy_mpg,
        &mut f.truck_dispatch_fee,
        &mut f.additional_equipment_cost,
        &mut f.standard_lump_sum,
        &mut f.markup_rate,
    ]);
    for eq in [&mut f.arrow_boards, &mut f.message_boards, &mut f.tma] {
        clean_all([&mut eq.quantity, &mut eq.cost]);
    }
}

pub(crate) fn normalize_permanent_signs(p: &mut PermanentSigns) {
    clean_all([&mut p.max_daily_hours, &mut p.item_markup]);
    for piece in &mut p.equipment_data {
        clean(&mut piece.cost);
    }
    for rate in p.productivity_rates.values_mut() {
        clean(rate);
    }
    for item in &mut p.sign_items {
        clean_all([
            &mut item.personnel,
            &mut item.number_trucks,
            &mut item.number_trips,
            &mut item.install_hours_required,
            &mut item.quantity,
            &mut item.perm_sign_bolts,
            &mut item.custom_margin,
            &mut item.sign_sq_footage,
            &mut item.hi_reflective_strips,
            &mut item.fyg_reflective_strips,
            &mut item.jenny_brackets,
            &mut item.stiffener_inches,
            &mut item.tmz_brackets,
            &mut item.anti_theft_bolts,
            &mut item.chevron_brackets,
            &mut item.street_name_cross_brackets,
            &mut item.flexible_delineator_cost,
        ]);
        if let Some(v) = item.perm_sign_cost_sq_ft.as_mut() {
            clean(v);
        }
        for extra in &mut item.additional_items {
            clean(&mut extra.quantity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidcalc_domain::model::EquipmentType;
    use chrono::NaiveDate;

    #[test]
    fn test_clamps_and_replaces_non_finite() {
        let mut phase = Phase {
            days: -3.0,
            personnel: f64::NAN,
            number_trucks: f64::INFINITY,
            ..Default::default()
        };
        phase.set_quantity(EquipmentType::Post, -5.0);
        let estimate = Estimate {
            mpt_rental: Some(MptRental {
                mpg_per_truck: 0.0,
                dispatch_fee: -10.0,
                phases: vec![phase],
                ..Default::default()
            }),
            ..Default::default()
        };

        let normalized = normalize_estimate(estimate);
        let rental = normalized.mpt_rental.unwrap();
        assert_eq!(rental.mpg_per_truck, 1.0);
        assert_eq!(rental.dispatch_fee, 0.0);
        let phase = &rental.phases[0];
        assert_eq!(phase.days, 0.0);
        assert_eq!(phase.personnel, 0.0);
        assert_eq!(phase.number_trucks, 0.0);
        assert_eq!(phase.quantity(EquipmentType::Post), 0.0);
    }

    #[test]
    fn test_secondary_signs_resolved() {
        let phase = Phase {
            signs: vec![
                Sign {
                    id: "p".into(),
                    quantity: 4.0,
                    ..Default::default()
                },
                Sign {
                    id: "s".into(),
                    quantity: 0.0,
                    primary_sign_id: Some("p".into()),
                    ..Default::default()
                },
                Sign {
                    id: "s2".into(),
                    quantity: 2.0,
                    primary_sign_id: Some("p".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let estimate = Estimate {
            mpt_rental: Some(MptRental {
                phases: vec![phase],
                ..Default::default()
            }),
            ..Default::default()
        };
        let normalized = normalize_estimate(estimate);
        let signs = &normalized.mpt_rental.unwrap().phases[0].signs;
        assert_eq!(signs[1].quantity, 4.0);
        assert_eq!(signs[2].quantity, 2.0);
    }

    #[test]
    fn test_days_from_dates_when_unset() {
        let phase = Phase {
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 10),
            ..Default::default()
        };
        let estimate = Estimate {
            mpt_rental: Some(MptRental {
                phases: vec![phase],
                ..Default::default()
            }),
            ..Default::default()
        };
        let normalized = normalize_estimate(estimate);
        assert_eq!(normalized.mpt_rental.unwrap().phases[0].days, 10.0);
    }

    #[test]
    fn test_idempotent() {
        let mut estimate = Estimate::default();
        estimate.admin_data.ow_mileage = -4.0;
        estimate.sale_items.push(SaleItem {
            quantity: -1.0,
            quote_price: 10.0,
            ..Default::default()
        });
        let once = normalize_estimate(estimate);
        let twice = normalize_estimate(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.admin_data.ow_mileage, 0.0);
        assert_eq!(once.sale_items[0].quantity, 0.0);
    }
}
