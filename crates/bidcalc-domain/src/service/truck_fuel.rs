//! Truck dispatch and fuel

use bidcalc_types::CostMetrics;
use serde::{Deserialize, Serialize};

use crate::model::{AdminData, MptRental};
use crate::numeric::percent_of;

use super::phase_totals::trips_per_phase;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckFuelSummary {
    pub dispatch_fee: f64,
    pub fuel_cost: f64,
    /// Fuel is the cost; revenue bills it back plus the dispatch fee
    pub cost: f64,
    pub revenue: f64,
    pub gross_profit: f64,
    pub gross_margin: f64,
}

impl TruckFuelSummary {
    pub fn metrics(&self) -> CostMetrics {
        CostMetrics {
            cost: self.cost,
            revenue: self.revenue,
            depreciation_cost: self.cost,
            gross_profit: self.gross_profit,
            gross_margin: self.gross_margin,
        }
    }
}

/// Miles per gallon with a floor of 1 so fuel cost stays finite
pub fn effective_mpg(mpg: f64) -> f64 {
    if mpg.is_finite() && mpg > 0.0 {
        mpg
    } else {
        1.0
    }
}

/// Gallons-to-dollars for a number of round trips
pub fn round_trip_fuel_cost(trips: f64, miles_one_way: f64, mpg: f64, price_per_gallon: f64) -> f64 {
    trips * 2.0 * miles_one_way / effective_mpg(mpg) * price_per_gallon
}

pub fn truck_fuel_summary(admin: &AdminData, rental: &MptRental) -> TruckFuelSummary {
    let mut dispatch_fee = 0.0;
    let mut fuel_cost = 0.0;

    for phase in &rental.phases {
        let truck_trips = trips_per_phase(phase) * phase.number_trucks;
        dispatch_fee += rental.dispatch_fee * truck_trips;
        fuel_cost += round_trip_fuel_cost(
            truck_trips,
            admin.ow_mileage,
            rental.mpg_per_truck,
            admin.fuel_cost_per_gallon,
        );
    }

    let gross_margin = if fuel_cost > 0.0 {
        percent_of(dispatch_fee, fuel_cost + dispatch_fee)
    } else {
        0.0
    };

    TruckFuelSummary {
        dispatch_fee,
        fuel_cost,
        cost: fuel_cost,
        revenue: fuel_cost + dispatch_fee,
        gross_profit: dispatch_fee,
        gross_margin,
    }
}
