//! Output formatting module

use bidcalc_app::EstimateBreakdown;
use bidcalc_domain::model::{ItemType, StaticCatalog};
use bidcalc_types::{AllTotals, CostMetrics, OutputFormat, Result};
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

fn metrics_row(label: &str, m: &CostMetrics) {
    println!(
        "{:<22} {:>12.2} {:>12.2} {:>12.2} {:>8.1}%",
        label, m.depreciation_cost, m.revenue, m.gross_profit, m.gross_margin
    );
}

fn stream_row(label: &str, cost: f64, revenue: f64) {
    println!(
        "{:<22} {:>12.2} {:>12.2} {:>12.2}",
        label,
        cost,
        revenue,
        revenue - cost
    );
}

fn header(title: &str) {
    println!("\n{}", title);
    println!("{}", "=".repeat(title.chars().count()));
    println!(
        "{:<22} {:>12} {:>12} {:>12} {:>9}",
        "", "Cost", "Revenue", "Profit", "Margin"
    );
}

fn print_totals_table(totals: &AllTotals) {
    println!("\nJob Totals");
    println!("==========");
    println!("MPT cost:            {:>12.2}", totals.mpt_total_cost);
    println!("MPT revenue:         {:>12.2}", totals.mpt_total_revenue);
    println!("MPT gross profit:    {:>12.2}", totals.mpt_gross_profit);
    println!("MPT gross margin:    {:>11.1}%", totals.mpt_gross_margin);
    println!();
    println!("Total cost:          {:>12.2}", totals.total_cost);
    println!("Total revenue:       {:>12.2}", totals.total_revenue);
    println!("Total gross profit:  {:>12.2}", totals.total_gross_profit);
    println!("Total gross margin:  {:>11.1}%", totals.total_gross_margin);

    let shares = &totals.revenue_percentages;
    println!("\n--- Revenue share ---");
    println!("MPT:                 {:>11.1}%", shares.mpt);
    println!("Rental:              {:>11.1}%", shares.rental);
    println!("Flagging:            {:>11.1}%", shares.flagging);
    println!("Sale:                {:>11.1}%", shares.sale);
    println!("Permanent signs:     {:>11.1}%", shares.permanent_signs);
}

pub fn output_totals(output_format: OutputFormat, totals: &AllTotals) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(totals);
    }
    print_totals_table(totals);
    Ok(())
}

pub fn output_breakdown(output_format: OutputFormat, breakdown: &EstimateBreakdown) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(breakdown);
    }

    let phases = &breakdown.phase_totals;
    println!("\nPhases");
    println!("======");
    println!("Days:                {:>12.0}", phases.total_days);
    println!("Personnel:           {:>12.0}", phases.total_personnel);
    println!("Trucks:              {:>12.0}", phases.total_trucks);
    println!("Trips:               {:>12.0}", phases.total_trips);

    if !breakdown.equipment_totals.is_empty() {
        println!("\n{:<22} {:>10} {:>10} {:>10}", "Equipment", "Quantity", "Days", "Wtd days");
        for (equipment, total) in &breakdown.equipment_totals {
            let weighted = breakdown
                .weighted_days
                .get(&ItemType::from(*equipment))
                .copied()
                .unwrap_or(0.0);
            println!(
                "{:<22} {:>10.0} {:>10.0} {:>10.2}",
                equipment.label(),
                total.total_quantity,
                total.total_days_required,
                weighted
            );
        }
    }

    if let Some(mpt) = &breakdown.mpt {
        header("MPT Categories");
        metrics_row("Equipment", &mpt.equipment);
        metrics_row("Lights & drums", &mpt.light_drum.total);
        for (sheeting, metrics) in &mpt.signs {
            metrics_row(&format!("Signs ({})", sheeting.label()), metrics);
        }
        metrics_row(
            if mpt.labor.rated { "Labor (rated)" } else { "Labor (non-rated)" },
            &mpt.labor.metrics(),
        );
        metrics_row("Truck & fuel", &mpt.truck_fuel.metrics());
    } else {
        println!("\nNo priceable rental plan");
    }

    let streams = &breakdown.streams;
    header("Other Streams");
    stream_row("Equipment rental", streams.rental.total_cost, streams.rental.total_revenue);
    stream_row("Sale items", streams.sale.total_cost, streams.sale.total_revenue);
    let (flagging_cost, flagging_revenue) = streams.flagging_totals();
    stream_row("Flagging & service", flagging_cost, flagging_revenue);
    let (pms_cost, pms_revenue) = streams.permanent_signs_totals();
    stream_row("Permanent signs", pms_cost, pms_revenue);

    print_totals_table(&breakdown.totals);
    Ok(())
}

pub fn output_catalog(output_format: OutputFormat, catalog: &StaticCatalog) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(catalog);
    }

    println!("\nStatic Equipment Catalog");
    println!("========================");
    println!(
        "{:<18} {:>10} {:>10} {:>12} {:>10}",
        "Item", "Price", "Discount", "Life (yrs)", "Payback"
    );
    for (item, info) in catalog {
        println!(
            "{:<18} {:>10.2} {:>9.1}% {:>12.1} {:>10.1}",
            item.key(),
            info.price,
            info.discount_rate,
            info.useful_life,
            info.payback_period
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct FingerprintOutput<'a> {
    fingerprint: &'a str,
}

pub fn output_fingerprint(output_format: OutputFormat, fingerprint: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&FingerprintOutput { fingerprint });
    }
    println!("{}", fingerprint);
    Ok(())
}
