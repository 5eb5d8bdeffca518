//! Estimate Service - load, price and fingerprint a bid estimate
//!
//! Workflow:
//! 1. Read the estimate JSON (lenient numerics)
//! 2. Normalize it into a calculable snapshot
//! 3. Optionally overlay catalog overrides
//! 4. Run every calculator and collect the results

use std::collections::BTreeMap;
use std::path::Path;

use bidcalc_domain::model::{EquipmentType, Estimate, ItemType, StaticCatalog};
use bidcalc_domain::service::totals::priceable_plan;
use bidcalc_domain::service::{
    all_totals, equipment_totals, phase_totals, weighted_average_days, EquipmentTotal,
    MptCategories, PhaseTotals, StreamSummaries,
};
use bidcalc_types::{AllTotals, Error, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::normalize::{normalize_catalog_entry, normalize_estimate};

/// Everything the calculators produce for one estimate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateBreakdown {
    pub totals: AllTotals,
    pub phase_totals: PhaseTotals,
    pub equipment_totals: BTreeMap<EquipmentType, EquipmentTotal>,
    pub weighted_days: BTreeMap<ItemType, f64>,
    /// Absent when there is no priceable rental plan
    pub mpt: Option<MptCategories>,
    pub streams: StreamSummaries,
}

/// Read and normalize an estimate file
pub fn load_estimate(path: &Path) -> Result<Estimate> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let estimate = parse_estimate(&content)?;
    info!(path = %path.display(), "loaded estimate");
    Ok(estimate)
}

pub fn parse_estimate(json: &str) -> Result<Estimate> {
    let raw: Estimate = serde_json::from_str(json)?;
    Ok(normalize_estimate(raw))
}

pub fn save_estimate(path: &Path, estimate: &Estimate) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(estimate)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Replace catalog entries present in `overrides`; other entries are kept.
/// Overrides are cleaned like the rest of the estimate.
pub fn apply_catalog(mut estimate: Estimate, overrides: &StaticCatalog) -> Estimate {
    if let Some(rental) = estimate.mpt_rental.as_mut() {
        for (item, info) in overrides {
            let mut info = *info;
            normalize_catalog_entry(&mut info);
            rental.static_equipment_info.insert(*item, info);
        }
        debug!(entries = overrides.len(), "applied catalog overrides");
    }
    estimate
}

pub fn compute_breakdown(estimate: &Estimate) -> EstimateBreakdown {
    let phases = estimate
        .mpt_rental
        .as_ref()
        .map(|r| r.phases.as_slice())
        .unwrap_or(&[]);

    EstimateBreakdown {
        totals: all_totals(estimate),
        phase_totals: phase_totals(phases),
        equipment_totals: equipment_totals(phases),
        weighted_days: weighted_average_days(phases),
        mpt: priceable_plan(estimate)
            .ok()
            .map(|rental| MptCategories::compute(&estimate.admin_data, rental)),
        streams: StreamSummaries::compute(estimate),
    }
}

/// SHA-256 of the estimate's canonical JSON, as lowercase hex
pub fn estimate_fingerprint(estimate: &Estimate) -> Result<String> {
    let bytes = serde_json::to_vec(estimate)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let hash = hasher.finalize();
    Ok(format!("{:x}", hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidcalc_domain::model::StaticEquipmentInfo;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{
        "adminData": { "contractNumber": "C-100", "owMileage": "12" },
        "mptRental": {
            "paybackPeriod": 5, "targetMOIC": 2, "annualUtilization": 0.75,
            "dispatchFee": 50, "mpgPerTruck": 8,
            "staticEquipmentInfo": {
                "sandbag": { "price": 2.62, "discountRate": 0, "usefulLife": 2, "paybackPeriod": 1 }
            },
            "phases": [
                { "name": "Phase 1", "days": 10, "standardEquipment": { "sandbag": { "quantity": 40 } } }
            ]
        }
    }"#;

    #[test]
    fn test_parse_normalizes() {
        let estimate = parse_estimate(MINIMAL).unwrap();
        assert_eq!(estimate.admin_data.ow_mileage, 12.0);
        assert_eq!(estimate.mpt_rental.unwrap().phases[0].days, 10.0);
    }

    #[test]
    fn test_breakdown_without_rental() {
        let breakdown = compute_breakdown(&Estimate::default());
        assert!(breakdown.mpt.is_none());
        assert_eq!(breakdown.totals, AllTotals::default());
        assert_eq!(breakdown.phase_totals, PhaseTotals::default());
    }

    #[test]
    fn test_breakdown_with_rental() {
        let estimate = parse_estimate(MINIMAL).unwrap();
        let breakdown = compute_breakdown(&estimate);
        assert!(breakdown.mpt.is_some());
        assert_eq!(breakdown.phase_totals.total_days, 10.0);
        assert_eq!(
            breakdown.equipment_totals[&EquipmentType::Sandbag].total_quantity,
            40.0
        );
        assert!(breakdown.totals.mpt_total_revenue > 0.0);
    }

    #[test]
    fn test_fingerprint_is_stable_and_sensitive() {
        let estimate = parse_estimate(MINIMAL).unwrap();
        let a = estimate_fingerprint(&estimate).unwrap();
        let b = estimate_fingerprint(&estimate.clone()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);

        let mut changed = estimate;
        changed.admin_data.contract_number = "C-101".into();
        assert_ne!(a, estimate_fingerprint(&changed).unwrap());
    }

    #[test]
    fn test_apply_catalog_overrides_entries() {
        let estimate = parse_estimate(MINIMAL).unwrap();
        let mut overrides = StaticCatalog::new();
        overrides.insert(
            ItemType::Sandbag,
            StaticEquipmentInfo { price: 3.0, discount_rate: 0.0, useful_life: 2.0, payback_period: 1.0 },
        );
        let estimate = apply_catalog(estimate, &overrides);
        let rental = estimate.mpt_rental.unwrap();
        assert_eq!(rental.static_equipment_info[&ItemType::Sandbag].price, 3.0);
    }

    #[test]
    fn test_apply_catalog_cleans_overrides() {
        let estimate = parse_estimate(MINIMAL).unwrap();
        let mut overrides = StaticCatalog::new();
        overrides.insert(
            ItemType::Sandbag,
            StaticEquipmentInfo { price: -3.0, discount_rate: 140.0, useful_life: f64::NAN, payback_period: 1.0 },
        );
        let estimate = apply_catalog(estimate, &overrides);
        let info = estimate.mpt_rental.unwrap().static_equipment_info[&ItemType::Sandbag];
        assert_eq!(info.price, 0.0);
        assert_eq!(info.discount_rate, 100.0);
        assert_eq!(info.useful_life, 0.0);
        assert_eq!(info.payback_period, 1.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobs").join("estimate.json");
        let estimate = parse_estimate(MINIMAL).unwrap();

        save_estimate(&path, &estimate).unwrap();
        let loaded = load_estimate(&path).unwrap();
        assert_eq!(loaded, estimate);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_estimate(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
