//! Crew labor pricing

use bidcalc_types::{CalcError, CostMetrics};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{AdminData, MptRental};
use crate::numeric::percent_of;

/// Hours in a crew day
pub const HOURS_PER_DAY: f64 = 8.0;

/// Labor is billed at twice its cost
pub const LABOR_REVENUE_MULTIPLIER: f64 = 2.0;

/// Labor hours and money for both billing modes, plus the branch the job uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborCostSummary {
    pub rated_hours: f64,
    pub non_rated_hours: f64,
    pub rated_cost: f64,
    pub rated_revenue: f64,
    pub non_rated_cost: f64,
    pub non_rated_revenue: f64,
    /// Which branch below is active
    pub rated: bool,
    pub cost: f64,
    pub revenue: f64,
    pub gross_profit: f64,
    pub gross_margin: f64,
}

impl LaborCostSummary {
    /// Active branch as a category result; labor has no depreciation, so its
    /// cost doubles as depreciation cost in the rollup
    pub fn metrics(&self) -> CostMetrics {
        CostMetrics {
            cost: self.cost,
            revenue: self.revenue,
            depreciation_cost: self.cost,
            gross_profit: self.gross_profit,
            gross_margin: self.gross_margin,
        }
    }

    fn check(self) -> Result<Self, CalcError> {
        let fields = [
            ("ratedHours", self.rated_hours),
            ("nonRatedHours", self.non_rated_hours),
            ("ratedCost", self.rated_cost),
            ("nonRatedCost", self.non_rated_cost),
            ("revenue", self.revenue),
            ("grossMargin", self.gross_margin),
        ];
        match fields.iter().find(|(_, v)| !v.is_finite()) {
            Some((field, _)) => Err(CalcError::NonFinite { field: *field }),
            None => Ok(self),
        }
    }
}

/// Labor for the whole plan. Never fails: a non-finite intermediate is logged
/// and the all-zero summary returned instead.
pub fn labor_cost_summary(admin: &AdminData, rental: &MptRental) -> LaborCostSummary {
    match try_labor_cost_summary(admin, rental) {
        Ok(summary) => summary,
        Err(e) => {
            warn!(error = %e, "labor calculation failed, using zero");
            LaborCostSummary::default()
        }
    }
}

pub fn try_labor_cost_summary(
    admin: &AdminData,
    rental: &MptRental,
) -> Result<LaborCostSummary, CalcError> {
    let total_rate = admin.county.labor_rate + admin.county.fringe_rate;

    let mut rated_hours = 0.0;
    let mut non_rated_hours = 0.0;
    for phase in &rental.phases {
        let crew_hours = phase.personnel * HOURS_PER_DAY * phase.days;
        rated_hours += crew_hours + phase.additional_rated_hours;
        non_rated_hours += crew_hours + phase.additional_non_rated_hours;
    }

    let rated_cost = rated_hours * total_rate;
    let non_rated_cost = non_rated_hours * total_rate;
    let rated_revenue = rated_cost * LABOR_REVENUE_MULTIPLIER;
    let non_rated_revenue = non_rated_cost * LABOR_REVENUE_MULTIPLIER;

    let rated = admin.is_rated();
    let (cost, revenue) = if rated {
        (rated_cost, rated_revenue)
    } else {
        (non_rated_cost, non_rated_revenue)
    };
    let gross_profit = revenue - cost;

    LaborCostSummary {
        rated_hours,
        non_rated_hours,
        rated_cost,
        rated_revenue,
        non_rated_cost,
        non_rated_revenue,
        rated,
        cost,
        revenue,
        gross_profit,
        gross_margin: percent_of(gross_profit, revenue),
    }
    .check()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{County, Phase, RatedStatus};

    fn admin(rated: RatedStatus) -> AdminData {
        AdminData {
            county: County {
                labor_rate: 20.0,
                fringe_rate: 5.0,
                ..Default::default()
            },
            rated,
            ..Default::default()
        }
    }

    fn rental(phases: Vec<Phase>) -> MptRental {
        MptRental {
            phases,
            ..Default::default()
        }
    }

    #[test]
    fn test_non_rated_job() {
        let plan = rental(vec![Phase {
            personnel: 2.0,
            days: 3.0,
            additional_non_rated_hours: 4.0,
            additional_rated_hours: 10.0,
            ..Default::default()
        }]);
        let summary = labor_cost_summary(&admin(RatedStatus::NonRated), &plan);

        assert_eq!(summary.non_rated_hours, 52.0);
        assert_eq!(summary.cost, 1300.0);
        assert_eq!(summary.revenue, 2600.0);
        assert_eq!(summary.gross_profit, 1300.0);
        assert!((summary.gross_margin - 50.0).abs() < 1e-12);
        assert!(!summary.rated);
        // Rated branch still reported
        assert_eq!(summary.rated_hours, 58.0);
        assert_eq!(summary.rated_cost, 1450.0);
    }

    #[test]
    fn test_rated_job_uses_rated_branch() {
        let plan = rental(vec![
            Phase {
                personnel: 1.0,
                days: 1.0,
                additional_rated_hours: 2.0,
                ..Default::default()
            },
            Phase {
                personnel: 3.0,
                days: 2.0,
                ..Default::default()
            },
        ]);
        let summary = labor_cost_summary(&admin(RatedStatus::Rated), &plan);
        // 8 + 2 + 48
        assert_eq!(summary.rated_hours, 58.0);
        assert_eq!(summary.cost, 58.0 * 25.0);
        assert_eq!(summary.metrics().revenue, summary.rated_revenue);
    }

    #[test]
    fn test_no_phases_zero() {
        let summary = labor_cost_summary(&admin(RatedStatus::Rated), &rental(vec![]));
        assert_eq!(summary.cost, 0.0);
        assert_eq!(summary.gross_margin, 0.0);
    }

    #[test]
    fn test_non_finite_falls_back_to_zero() {
        let mut a = admin(RatedStatus::Rated);
        a.county.labor_rate = f64::INFINITY;
        let plan = rental(vec![Phase {
            personnel: 1.0,
            days: 1.0,
            ..Default::default()
        }]);

        assert!(try_labor_cost_summary(&a, &plan).is_err());
        assert_eq!(labor_cost_summary(&a, &plan), LaborCostSummary::default());
    }
}
