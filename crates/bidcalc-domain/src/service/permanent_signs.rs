//! Permanent sign installation, reset and removal pricing

use serde::{Deserialize, Serialize};

use crate::model::{AdminData, MptRental, PermanentSigns, PmsEquipmentItem, PmsItem, PmsItemKind};
use crate::numeric::ratio_of;

use super::flagging::revenue_at_margin;
use super::truck_fuel::round_trip_fuel_cost;

/// Truck figures borrowed from the rental plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruckRates {
    pub mpg_per_truck: f64,
    pub dispatch_fee: f64,
}

impl TruckRates {
    pub fn from_rental(rental: Option<&MptRental>) -> Self {
        match rental {
            Some(r) => Self {
                mpg_per_truck: r.mpg_per_truck,
                dispatch_fee: r.dispatch_fee,
            },
            None => Self {
                mpg_per_truck: 1.0,
                dispatch_fee: 0.0,
            },
        }
    }
}

/// Crew hours to complete `installs` at `productivity_rate` installs per hour,
/// rounded to cents of an hour
pub fn required_install_hours(installs: f64, productivity_rate: f64, personnel: f64) -> f64 {
    if productivity_rate <= 0.0 {
        return 0.0;
    }
    (installs / productivity_rate * personnel * 100.0).round() / 100.0
}

pub fn days_required(install_hours: f64, max_daily_hours: f64) -> f64 {
    if max_daily_hours > 0.0 {
        (install_hours / max_daily_hours).ceil()
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSchedule {
    pub id: String,
    pub days: f64,
    pub number_trips: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    /// Same order as the input items
    pub items: Vec<ItemSchedule>,
    pub total_trips: f64,
}

/// Schedule work days and trips.
///
/// Lines sharing mobilization are worked back to back: hours left over from
/// the previous line's last day carry into the next line. Separately
/// mobilized lines always get their own days and trucks.
pub fn plan_trips(items: &[PmsItem], max_daily_hours: f64) -> TripPlan {
    let mut schedules: Vec<Option<ItemSchedule>> = vec![None; items.len()];
    let mut total_trips = 0.0;
    let mut carry_over = 0.0;

    for (idx, item) in items.iter().enumerate().filter(|(_, i)| !i.separate_mobilization) {
        let hours = item.install_hours_required;
        let schedule = if carry_over >= hours {
            carry_over -= hours;
            ItemSchedule {
                id: item.id.clone(),
                days: 0.0,
                number_trips: 0.0,
            }
        } else {
            let needed = hours - carry_over;
            let days = days_required(needed, max_daily_hours);
            total_trips += days;
            carry_over = (days * max_daily_hours - needed).max(0.0);
            ItemSchedule {
                id: item.id.clone(),
                days,
                number_trips: days * item.number_trucks,
            }
        };
        schedules[idx] = Some(schedule);
    }

    for (idx, item) in items.iter().enumerate().filter(|(_, i)| i.separate_mobilization) {
        let days = days_required(item.install_hours_required, max_daily_hours);
        let number_trips = days * item.number_trucks;
        total_trips += number_trips;
        schedules[idx] = Some(ItemSchedule {
            id: item.id.clone(),
            days,
            number_trips,
        });
    }

    TripPlan {
        items: schedules.into_iter().flatten().collect(),
        total_trips,
    }
}

/// Derive install hours from the productivity rates and trips from the day
/// plan. Lines whose kind has no positive rate keep their entered hours;
/// without a positive daily hour cap the entered trips are kept.
pub fn schedule_sign_items(signs: &mut PermanentSigns) {
    for item in &mut signs.sign_items {
        match signs.productivity_rates.get(&item.kind) {
            Some(&rate) if rate > 0.0 => {
                item.install_hours_required =
                    required_install_hours(item.quantity, rate, item.personnel);
            }
            _ => {}
        }
    }
    if signs.max_daily_hours <= 0.0 {
        return;
    }
    let plan = plan_trips(&signs.sign_items, signs.max_daily_hours);
    for (item, schedule) in signs.sign_items.iter_mut().zip(plan.items) {
        item.number_trips = schedule.number_trips;
    }
}

/// Sign face material for installs: per-line cost override, else the list price
pub fn sign_sq_ft_cost(signs: &PermanentSigns, item: &PmsItem) -> f64 {
    if !item.kind.is_install() {
        return 0.0;
    }
    let per_sq_ft = item
        .perm_sign_cost_sq_ft
        .unwrap_or_else(|| signs.price_of(PmsEquipmentItem::PermSignCostSqFt));
    per_sq_ft * item.sign_sq_footage
}

fn additional_items_cost(signs: &PermanentSigns, item: &PmsItem) -> f64 {
    item.additional_items
        .iter()
        .map(|extra| extra.quantity * signs.price_of(extra.equipment_type))
        .sum()
}

/// Hardware and material for one line, priced from the equipment list
pub fn material_cost(signs: &PermanentSigns, item: &PmsItem) -> f64 {
    use PmsEquipmentItem as E;
    let price = |piece: E| signs.price_of(piece);
    let posts = item.quantity * price(E::Post);
    let bolts = item.perm_sign_bolts * price(E::PermSignBolts);

    match item.kind {
        PmsItemKind::PmsTypeB | PmsItemKind::PmsTypeF => {
            let hardware = item.anti_theft_bolts * price(E::AntiTheftBolts)
                + item.chevron_brackets * price(E::ChevronBrackets)
                + item.street_name_cross_brackets * price(E::StreetNameCrossBrackets)
                + bolts
                + item.hi_reflective_strips * price(E::HiReflectiveStrips)
                + item.tmz_brackets * price(E::TmzBrackets)
                + item.jenny_brackets * price(E::JennyBrackets)
                + item.stiffener_inches * price(E::StiffenerInches)
                + item.fyg_reflective_strips * price(E::FygReflectiveStrips);
            // Type F mounts on an existing post
            if item.kind == PmsItemKind::PmsTypeF {
                hardware
            } else {
                hardware + posts
            }
        }
        PmsItemKind::PmsTypeC => {
            item.anti_theft_bolts * price(E::AntiTheftBolts)
                + posts
                + bolts
                + item.hi_reflective_strips * price(E::HiReflectiveStrips)
                + item.tmz_brackets * price(E::TmzBrackets)
                + item.stiffener_inches * price(E::StiffenerInches)
                + item.fyg_reflective_strips * price(E::FygReflectiveStrips)
        }
        PmsItemKind::ResetTypeB | PmsItemKind::ResetTypeF => {
            posts + bolts + additional_items_cost(signs, item)
        }
        PmsItemKind::RemoveTypeB | PmsItemKind::RemoveTypeF => additional_items_cost(signs, item),
        PmsItemKind::FlexibleDelineator => {
            item.quantity * item.flexible_delineator_cost + additional_items_cost(signs, item)
        }
    }
}

/// Install crew time plus round-trip travel paid at the shop rate
pub fn labor_cost(item: &PmsItem, admin: &AdminData) -> f64 {
    let county = &admin.county;
    let install = (county.labor_rate + county.fringe_rate) * item.install_hours_required * item.personnel;
    let travel_hours = admin.one_way_travel_minutes() * 2.0 / 60.0;
    let travel = item.personnel * county.shop_rate * item.number_trips * travel_hours;
    install + travel
}

pub fn fuel_cost(item: &PmsItem, admin: &AdminData, trucks: TruckRates) -> f64 {
    round_trip_fuel_cost(
        item.number_trips,
        admin.ow_mileage,
        trucks.mpg_per_truck,
        admin.fuel_cost_per_gallon,
    ) + trucks.dispatch_fee * item.number_trips
}

pub fn total_cost(signs: &PermanentSigns, item: &PmsItem, admin: &AdminData, trucks: TruckRates) -> f64 {
    labor_cost(item, admin)
        + sign_sq_ft_cost(signs, item)
        + material_cost(signs, item)
        + fuel_cost(item, admin, trucks)
}

/// Standard pricing doubles labor and marks material up by `item_markup`;
/// installs also bill the sign face at the list price per square foot.
/// Custom pricing targets the line's own margin.
pub fn revenue(signs: &PermanentSigns, item: &PmsItem, admin: &AdminData, trucks: TruckRates) -> f64 {
    if !item.standard_pricing {
        return revenue_at_margin(total_cost(signs, item, admin, trucks), item.custom_margin);
    }
    let labor = labor_cost(item, admin) * 2.0;
    let material = material_cost(signs, item) * (1.0 + signs.item_markup / 100.0);
    let fuel = fuel_cost(item, admin, trucks);
    let sign_face = if item.kind.is_install() {
        signs.price_of(PmsEquipmentItem::PermSignPriceSqFt) * item.sign_sq_footage
    } else {
        0.0
    };
    labor + material + fuel + sign_face
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PmsItemSummary {
    pub id: String,
    pub kind: PmsItemKind,
    pub cost: f64,
    pub revenue: f64,
    /// Ratio, not percent
    pub gross_margin: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermanentSignsSummary {
    pub items: Vec<PmsItemSummary>,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub gross_margin: f64,
}

pub fn permanent_signs_summary(
    signs: &PermanentSigns,
    admin: &AdminData,
    trucks: TruckRates,
) -> PermanentSignsSummary {
    let items: Vec<PmsItemSummary> = signs
        .sign_items
        .iter()
        .map(|item| {
            let cost = total_cost(signs, item, admin, trucks);
            let revenue = revenue(signs, item, admin, trucks);
            PmsItemSummary {
                id: item.id.clone(),
                kind: item.kind,
                cost,
                revenue,
                gross_margin: ratio_of(revenue - cost, revenue),
            }
        })
        .collect();

    let total_cost: f64 = items.iter().map(|i| i.cost).sum();
    let total_revenue: f64 = items.iter().map(|i| i.revenue).sum();
    PermanentSignsSummary {
        items,
        total_cost,
        total_revenue,
        gross_margin: ratio_of(total_revenue - total_cost, total_revenue),
    }
}
