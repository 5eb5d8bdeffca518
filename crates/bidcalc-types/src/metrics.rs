//! Calculation output records shared by the calculators and their callers

use serde::{Deserialize, Serialize};

/// `part / whole × 100`, or 0 when `whole` is zero or the result is not finite.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let pct = part / whole * 100.0;
    if pct.is_finite() {
        pct
    } else {
        0.0
    }
}

/// `part / whole` as a plain ratio, or 0 when `whole` is zero.
pub fn ratio_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let ratio = part / whole;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

/// Cost, revenue and margin of one cost category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostMetrics {
    /// Purchase value of the equipment involved (quantity × unit price)
    pub cost: f64,
    pub revenue: f64,
    /// Straight-line depreciation over the days in service
    pub depreciation_cost: f64,
    pub gross_profit: f64,
    /// Gross profit as a percentage of revenue
    pub gross_margin: f64,
}

impl CostMetrics {
    /// Build a result where profit is revenue less depreciation.
    pub fn from_depreciation(cost: f64, revenue: f64, depreciation_cost: f64) -> Self {
        let gross_profit = revenue - depreciation_cost;
        Self {
            cost,
            revenue,
            depreciation_cost,
            gross_profit,
            gross_margin: percent_of(gross_profit, revenue),
        }
    }

    /// True when every field is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.cost,
            self.revenue,
            self.depreciation_cost,
            self.gross_profit,
            self.gross_margin,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl std::ops::Add for CostMetrics {
    type Output = CostMetrics;

    fn add(self, rhs: CostMetrics) -> CostMetrics {
        let revenue = self.revenue + rhs.revenue;
        let gross_profit = self.gross_profit + rhs.gross_profit;
        CostMetrics {
            cost: self.cost + rhs.cost,
            revenue,
            depreciation_cost: self.depreciation_cost + rhs.depreciation_cost,
            gross_profit,
            gross_margin: percent_of(gross_profit, revenue),
        }
    }
}

impl std::iter::Sum for CostMetrics {
    fn sum<I: Iterator<Item = CostMetrics>>(iter: I) -> Self {
        iter.fold(CostMetrics::default(), |acc, m| acc + m)
    }
}

/// Share of total revenue contributed by each revenue stream (percent)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePercentages {
    pub mpt: f64,
    pub rental: f64,
    pub flagging: f64,
    pub sale: f64,
    pub permanent_signs: f64,
}

/// Job-level rollup
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllTotals {
    pub mpt_total_cost: f64,
    pub mpt_total_revenue: f64,
    pub mpt_gross_profit: f64,
    pub mpt_gross_margin: f64,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub total_gross_profit: f64,
    pub total_gross_margin: f64,
    pub revenue_percentages: RevenuePercentages,
}

impl AllTotals {
    /// True when every headline figure is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.mpt_total_cost,
            self.mpt_total_revenue,
            self.mpt_gross_profit,
            self.mpt_gross_margin,
            self.total_cost,
            self.total_revenue,
            self.total_gross_profit,
            self.total_gross_margin,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_zero_whole() {
        assert_eq!(percent_of(10.0, 0.0), 0.0);
        assert_eq!(percent_of(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_percent_of_regular() {
        assert!((percent_of(25.0, 200.0) - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_of_zero_whole() {
        assert_eq!(ratio_of(5.0, 0.0), 0.0);
        assert!((ratio_of(1.0, 4.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_from_depreciation_zero_revenue() {
        let m = CostMetrics::from_depreciation(100.0, 0.0, 5.0);
        assert_eq!(m.gross_profit, -5.0);
        assert_eq!(m.gross_margin, 0.0);
    }

    #[test]
    fn test_add_recomputes_margin() {
        let a = CostMetrics::from_depreciation(10.0, 100.0, 50.0);
        let b = CostMetrics::from_depreciation(10.0, 100.0, 0.0);
        let sum = a + b;
        assert_eq!(sum.revenue, 200.0);
        assert_eq!(sum.gross_profit, 150.0);
        assert!((sum.gross_margin - 75.0).abs() < 1e-12);
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: CostMetrics = Vec::<CostMetrics>::new().into_iter().sum();
        assert_eq!(total, CostMetrics::default());
    }

    #[test]
    fn test_totals_serialize_camel_case() {
        let json = serde_json::to_string(&AllTotals::default()).unwrap();
        assert!(json.contains("mptTotalCost"));
        assert!(json.contains("revenuePercentages"));
        assert!(json.contains("permanentSigns"));
    }
}
