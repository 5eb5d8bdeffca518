//! Flagging crews and service work

use serde::{Deserialize, Serialize};

use crate::model::{AdminData, Flagging};

/// Straight-time hours in a flagging shift
pub const STRAIGHT_TIME_HOURS: f64 = 8.0;
pub const OVERTIME_MULTIPLIER: f64 = 1.5;
/// General liability per $1000 of labor when none is given
pub const DEFAULT_GENERAL_LIABILITY: f64 = 113.55;
/// Worker comp per $100 of labor when none is given
pub const DEFAULT_WORKER_COMP: f64 = 4.96;
pub const DEFAULT_FUEL_ECONOMY_MPG: f64 = 20.0;
pub const DEFAULT_TRUCK_DISPATCH_FEE: f64 = 18.75;

/// Which crew is being priced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrewKind {
    /// Paid at the county flagging rates
    Flagging,
    /// Paid at the county labor, fringe and shop rates
    ServiceWork,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggingSummary {
    pub on_site_job_hours_cost: f64,
    pub rt_travel_time_hours_cost: f64,
    pub over_time_hours_cost: f64,
    pub total_hours_cost: f64,
    pub total_fuel_cost: f64,
    pub total_labor_cost: f64,
    /// Zero under standard pricing
    pub total_flagging_cost: f64,
    pub total_cost_per_hour: f64,
    pub total_revenue: f64,
    pub total_hours: f64,
    pub total_equip_cost: f64,
}

fn or_default(value: f64, default: f64) -> f64 {
    if value == 0.0 {
        default
    } else {
        value
    }
}

pub fn flagging_summary(admin: &AdminData, flagging: &Flagging, kind: CrewKind) -> FlaggingSummary {
    let county = &admin.county;
    let (labor_rate, fringe_rate, hourly_rate) = match kind {
        CrewKind::ServiceWork => (county.labor_rate, county.fringe_rate, county.shop_rate),
        CrewKind::Flagging => (
            county.flagging_base_rate,
            county.flagging_fringe_rate,
            county.flagging_rate,
        ),
    };
    let pay_rate = if admin.is_rated() {
        labor_rate + fringe_rate
    } else {
        hourly_rate
    };

    let personnel = flagging.personnel;
    let on_site_hours = flagging.on_site_job_hours / 60.0;
    let rt_travel_hours = admin.one_way_travel_minutes() / 60.0 * 2.0;
    let overtime = on_site_hours > STRAIGHT_TIME_HOURS;

    let straight_hours = on_site_hours.min(STRAIGHT_TIME_HOURS);
    let overtime_hours = (on_site_hours - STRAIGHT_TIME_HOURS).max(0.0);
    let straight_cost = straight_hours * personnel * pay_rate;
    let over_time_hours_cost = overtime_hours * personnel * pay_rate * OVERTIME_MULTIPLIER;
    let on_site_job_hours_cost = straight_cost + over_time_hours_cost;

    let travel_rate = if overtime {
        hourly_rate * OVERTIME_MULTIPLIER
    } else {
        hourly_rate
    };
    let rt_travel_time_hours_cost = rt_travel_hours * travel_rate * personnel;

    let total_hours_cost = on_site_job_hours_cost + rt_travel_time_hours_cost;
    let total_labor_cost = total_hours_cost
        + total_hours_cost / 1000.0 * or_default(flagging.general_liability, DEFAULT_GENERAL_LIABILITY)
        + total_hours_cost / 100.0 * or_default(flagging.worker_comp, DEFAULT_WORKER_COMP);

    let total_fuel_cost = if flagging.number_trucks > 0.0 {
        flagging.number_trucks * admin.ow_mileage * flagging.fuel_cost_per_gallon
            / or_default(flagging.fuel_economy_mpg, DEFAULT_FUEL_ECONOMY_MPG)
            + or_default(flagging.truck_dispatch_fee, DEFAULT_TRUCK_DISPATCH_FEE)
    } else {
        0.0
    };

    let total_flagging_cost = if flagging.standard_pricing {
        0.0
    } else {
        total_labor_cost + total_fuel_cost + flagging.additional_equipment_cost
    };

    let total_hours = on_site_hours + rt_travel_hours;
    let total_cost_per_hour = if total_hours > 0.0 && personnel > 0.0 {
        total_flagging_cost / (total_hours * personnel)
    } else {
        0.0
    };

    let total_equip_cost = flagging.arrow_boards.lump_sum_cost()
        + flagging.message_boards.lump_sum_cost()
        + flagging.tma.lump_sum_cost();
    let base_revenue = if flagging.standard_pricing {
        flagging.standard_lump_sum
    } else {
        revenue_at_margin(total_flagging_cost, flagging.markup_rate)
    };

    FlaggingSummary {
        on_site_job_hours_cost,
        rt_travel_time_hours_cost,
        over_time_hours_cost,
        total_hours_cost,
        total_fuel_cost,
        total_labor_cost,
        total_flagging_cost,
        total_cost_per_hour,
        total_revenue: base_revenue + total_equip_cost,
        total_hours,
        total_equip_cost,
    }
}

/// Price that leaves `margin_pct` percent of revenue as profit. A margin of
/// 100% or more has no finite price, so cost is returned unchanged.
pub fn revenue_at_margin(cost: f64, margin_pct: f64) -> f64 {
    let keep = 1.0 - margin_pct / 100.0;
    if keep <= 0.0 {
        return cost;
    }
    cost / keep
}
