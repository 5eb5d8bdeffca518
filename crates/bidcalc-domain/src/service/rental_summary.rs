//! Monthly equipment rental and sale items

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{EquipmentRentalItem, SaleItem};
use crate::numeric::ratio_of;

/// Markup paid on re-rented equipment
pub const RE_RENT_COST_FACTOR: f64 = 1.06;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalItemSummary {
    pub name: String,
    pub total_quantity: f64,
    pub total_months: f64,
    pub total_revenue: f64,
    /// Re-rent cost, or depreciation of owned units
    pub cost: f64,
    pub gross_profit: f64,
    /// Ratio, not percent
    pub gross_profit_margin: f64,
    pub re_rent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalSummary {
    pub items: Vec<RentalItemSummary>,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub total_gross_profit: f64,
    pub total_gross_profit_margin: f64,
}

/// Group lines by name and price each group. A group is re-rented when any of
/// its lines is; otherwise the first line's price and purchase cost apply.
pub fn rental_summary(items: &[EquipmentRentalItem]) -> RentalSummary {
    let mut groups: BTreeMap<&str, Vec<&EquipmentRentalItem>> = BTreeMap::new();
    for item in items.iter().filter(|i| !i.name.trim().is_empty()) {
        groups.entry(item.name.as_str()).or_default().push(item);
    }

    let summaries: Vec<RentalItemSummary> = groups
        .into_iter()
        .map(|(name, lines)| summarize_group(name, &lines))
        .collect();

    let total_revenue: f64 = summaries.iter().map(|s| s.total_revenue).sum();
    let total_cost: f64 = summaries.iter().map(|s| s.cost).sum();
    let total_gross_profit: f64 = summaries.iter().map(|s| s.gross_profit).sum();

    RentalSummary {
        items: summaries,
        total_cost,
        total_revenue,
        total_gross_profit,
        total_gross_profit_margin: ratio_of(total_gross_profit, total_revenue),
    }
}

fn summarize_group(name: &str, lines: &[&EquipmentRentalItem]) -> RentalItemSummary {
    let total_quantity: f64 = lines.iter().map(|i| i.quantity).sum();
    let total_months: f64 = lines.iter().map(|i| i.months).sum();

    let (rent_price, cost, re_rent) = match lines.iter().find(|i| i.re_rent_for_current_job) {
        Some(re_rented) => (
            re_rented.rent_price,
            re_rented.re_rent_price * RE_RENT_COST_FACTOR * total_months * total_quantity,
            true,
        ),
        None => {
            let first = lines.first();
            let rent_price = first.map(|i| i.rent_price).unwrap_or(0.0);
            let purchase = first.map(|i| i.total_cost).unwrap_or(0.0);
            let life_yrs = first.map(|i| i.useful_life_yrs).unwrap_or(0.0);
            let depreciation = if life_yrs > 0.0 {
                purchase / (life_yrs * 12.0) * total_months * total_quantity
            } else {
                0.0
            };
            (rent_price, depreciation, false)
        }
    };

    let total_revenue = total_quantity * rent_price * total_months;
    let gross_profit = total_revenue - cost;
    RentalItemSummary {
        name: name.to_string(),
        total_quantity,
        total_months,
        total_revenue,
        cost,
        gross_profit,
        gross_profit_margin: ratio_of(gross_profit, total_revenue),
        re_rent,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSummary {
    pub total_cost: f64,
    pub total_revenue: f64,
    pub total_gross_profit: f64,
    /// Ratio, not percent
    pub gross_margin: f64,
}

pub fn sale_item_revenue(item: &SaleItem) -> f64 {
    item.quote_price * (1.0 + item.markup_percentage / 100.0) * item.quantity
}

pub fn sale_summary(items: &[SaleItem]) -> SaleSummary {
    let total_revenue: f64 = items.iter().map(sale_item_revenue).sum();
    let total_cost: f64 = items.iter().map(|i| i.quote_price * i.quantity).sum();
    let total_gross_profit = total_revenue - total_cost;
    SaleSummary {
        total_cost,
        total_revenue,
        total_gross_profit,
        gross_margin: ratio_of(total_gross_profit, total_revenue),
    }
}
