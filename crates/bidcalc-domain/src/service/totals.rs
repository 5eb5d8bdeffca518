//! Job-level rollup of every category and revenue stream

use std::collections::BTreeMap;

use bidcalc_types::{AllTotals, CalcError, CostMetrics, RevenuePercentages};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::{AdminData, Estimate, MptRental, SheetingType};
use crate::numeric::percent_of;

use super::cost_metrics::equipment_cost_summary;
use super::flagging::{flagging_summary, CrewKind, FlaggingSummary};
use super::labor_cost::{labor_cost_summary, LaborCostSummary};
use super::light_drum::{light_drum_summary, LightDrumSummary};
use super::permanent_signs::{permanent_signs_summary, PermanentSignsSummary, TruckRates};
use super::rental_summary::{rental_summary, sale_summary, RentalSummary, SaleSummary};
use super::sign_cost::sign_cost_summary;
use super::truck_fuel::{truck_fuel_summary, TruckFuelSummary};

/// Every MPT category result for one rental plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MptCategories {
    pub equipment: CostMetrics,
    pub light_drum: LightDrumSummary,
    pub signs: BTreeMap<SheetingType, CostMetrics>,
    pub labor: LaborCostSummary,
    pub truck_fuel: TruckFuelSummary,
}

impl MptCategories {
    pub fn compute(admin: &AdminData, rental: &MptRental) -> Self {
        Self {
            equipment: equipment_cost_summary(rental),
            light_drum: light_drum_summary(admin, rental),
            signs: sign_cost_summary(rental),
            labor: labor_cost_summary(admin, rental),
            truck_fuel: truck_fuel_summary(admin, rental),
        }
    }

    /// Category results in rollup order. Equipment categories contribute their
    /// depreciation as cost; labor and truck/fuel their direct cost.
    fn contributions(&self) -> Vec<CostMetrics> {
        let mut parts = vec![self.equipment, self.light_drum.total];
        parts.extend(self.signs.values().copied());
        parts.push(self.labor.metrics());
        parts.push(self.truck_fuel.metrics());
        parts
    }

    /// `(cost, revenue, gross profit)` for the MPT scope
    pub fn totals(&self) -> (f64, f64, f64) {
        self.contributions()
            .iter()
            .fold((0.0, 0.0, 0.0), |(c, r, p), m| {
                (c + m.depreciation_cost, r + m.revenue, p + m.gross_profit)
            })
    }
}

/// Revenue streams priced alongside the MPT plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSummaries {
    pub rental: RentalSummary,
    pub sale: SaleSummary,
    pub flagging: Option<FlaggingSummary>,
    pub service_work: Option<FlaggingSummary>,
    pub permanent_signs: Option<PermanentSignsSummary>,
}

impl StreamSummaries {
    pub fn compute(estimate: &Estimate) -> Self {
        let admin = &estimate.admin_data;
        let trucks = TruckRates::from_rental(estimate.mpt_rental.as_ref());
        Self {
            rental: rental_summary(&estimate.equipment_rental),
            sale: sale_summary(&estimate.sale_items),
            flagging: estimate
                .flagging
                .as_ref()
                .map(|f| flagging_summary(admin, f, CrewKind::Flagging)),
            service_work: estimate
                .service_work
                .as_ref()
                .map(|f| flagging_summary(admin, f, CrewKind::ServiceWork)),
            permanent_signs: estimate
                .permanent_signs
                .as_ref()
                .map(|p| permanent_signs_summary(p, admin, trucks)),
        }
    }

    /// Flagging and service work combined as `(cost, revenue)`
    pub fn flagging_totals(&self) -> (f64, f64) {
        [self.flagging, self.service_work]
            .iter()
            .flatten()
            .fold((0.0, 0.0), |(c, r), s| {
                (c + s.total_flagging_cost, r + s.total_revenue)
            })
    }

    pub fn permanent_signs_totals(&self) -> (f64, f64) {
        self.permanent_signs
            .as_ref()
            .map(|p| (p.total_cost, p.total_revenue))
            .unwrap_or((0.0, 0.0))
    }
}

/// Combine category and stream results into job-level totals
pub fn rollup(mpt: &MptCategories, streams: &StreamSummaries) -> AllTotals {
    let (mpt_total_cost, mpt_total_revenue, mpt_gross_profit) = mpt.totals();
    let (flagging_cost, flagging_revenue) = streams.flagging_totals();
    let (pms_cost, pms_revenue) = streams.permanent_signs_totals();
    let rental = &streams.rental;
    let sale = &streams.sale;

    let total_cost = mpt_total_cost + rental.total_cost + sale.total_cost + flagging_cost + pms_cost;
    let total_revenue =
        mpt_total_revenue + rental.total_revenue + sale.total_revenue + flagging_revenue + pms_revenue;
    let total_gross_profit = mpt_gross_profit
        + rental.total_gross_profit
        + sale.total_gross_profit
        + (flagging_revenue - flagging_cost)
        + (pms_revenue - pms_cost);

    AllTotals {
        mpt_total_cost,
        mpt_total_revenue,
        mpt_gross_profit,
        mpt_gross_margin: percent_of(mpt_gross_profit, mpt_total_revenue),
        total_cost,
        total_revenue,
        total_gross_profit,
        total_gross_margin: percent_of(total_gross_profit, total_revenue),
        revenue_percentages: RevenuePercentages {
            mpt: percent_of(mpt_total_revenue, total_revenue),
            rental: percent_of(rental.total_revenue, total_revenue),
            flagging: percent_of(flagging_revenue, total_revenue),
            sale: percent_of(sale.total_revenue, total_revenue),
            permanent_signs: percent_of(pms_revenue, total_revenue),
        },
    }
}

/// The rental plan to price, or `EmptyPlan` when there is nothing to price
pub fn priceable_plan(estimate: &Estimate) -> Result<&MptRental, CalcError> {
    match &estimate.mpt_rental {
        Some(rental) if !rental.is_empty() => Ok(rental),
        _ => Err(CalcError::EmptyPlan),
    }
}

pub fn try_all_totals(estimate: &Estimate) -> Result<AllTotals, CalcError> {
    let rental = priceable_plan(estimate)?;
    let mpt = MptCategories::compute(&estimate.admin_data, rental);
    let streams = StreamSummaries::compute(estimate);
    let totals = rollup(&mpt, &streams);
    if totals.is_finite() {
        Ok(totals)
    } else {
        Err(CalcError::NonFinite { field: "totals" })
    }
}

/// Job-level totals. An empty plan or a non-finite result yields all zeros.
pub fn all_totals(estimate: &Estimate) -> AllTotals {
    match try_all_totals(estimate) {
        Ok(totals) => totals,
        Err(CalcError::EmptyPlan) => {
            debug!("no phases or no catalog, totals are zero");
            AllTotals::default()
        }
        Err(e) => {
            warn!(error = %e, "totals calculation failed, using zero");
            AllTotals::default()
        }
    }
}
