//! CSV loader for static catalog overrides
//!
//! Expected header: item,price,discount_rate,useful_life,payback_period
//! `item` is a catalog key such as `fourFootTypeIII`, `BLights` or `HI`.

use std::io::Read;
use std::path::Path;

use bidcalc_domain::model::{ItemType, StaticCatalog, StaticEquipmentInfo};
use bidcalc_types::{Error, Result};
use tracing::debug;

use crate::constants::default_catalog;
use crate::normalize::MAX_DISCOUNT_RATE;

const COLUMNS: [&str; 5] = ["item", "price", "discount_rate", "useful_life", "payback_period"];

pub fn load_catalog_csv<P: AsRef<Path>>(path: P) -> Result<StaticCatalog> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let file = std::fs::File::open(path)?;
    parse_catalog_csv(file)
}

pub fn parse_catalog_csv<R: Read>(source: R) -> Result<StaticCatalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let positions = column_positions(&headers)?;

    let mut catalog = StaticCatalog::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_idx + 2;

        let field = |col: usize| record.get(positions[col]).unwrap_or("");
        let item = ItemType::from_key(field(0)).ok_or_else(|| Error::Catalog {
            row,
            message: format!("unknown item '{}'", field(0)),
        })?;
        let info = StaticEquipmentInfo {
            price: parse_number(field(1), row, COLUMNS[1])?,
            discount_rate: parse_number(field(2), row, COLUMNS[2])?,
            useful_life: parse_number(field(3), row, COLUMNS[3])?,
            payback_period: parse_number(field(4), row, COLUMNS[4])?,
        };
        if info.discount_rate > MAX_DISCOUNT_RATE {
            return Err(Error::Catalog {
                row,
                message: format!("discount_rate {} exceeds {}%", info.discount_rate, MAX_DISCOUNT_RATE),
            });
        }
        if catalog.insert(item, info).is_some() {
            debug!(%item, row, "duplicate catalog row, last one wins");
        }
    }

    Ok(catalog)
}

/// Built-in catalog with `overrides` applied on top
pub fn catalog_with_overrides(overrides: StaticCatalog) -> StaticCatalog {
    let mut catalog = default_catalog();
    catalog.extend(overrides);
    catalog
}

fn column_positions(headers: &csv::StringRecord) -> Result<[usize; 5]> {
    let mut positions = [0usize; 5];
    for (slot, column) in positions.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
            .ok_or_else(|| Error::Catalog {
                row: 1,
                message: format!("missing column '{}'", column),
            })?;
    }
    Ok(positions)
}

/// Blank is 0; anything negative or non-finite is rejected
fn parse_number(value: &str, row: usize, column: &str) -> Result<f64> {
    if value.is_empty() {
        return Ok(0.0);
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(Error::Catalog {
            row,
            message: format!("invalid {} '{}'", column, value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows() {
        let data = "item,price,discount_rate,useful_life,payback_period\n\
                    BLights,120.5,5,3,0\n\
                    hi,7,,3,2\n";
        let catalog = parse_catalog_csv(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[&ItemType::BLights].price, 120.5);
        assert_eq!(catalog[&ItemType::BLights].discount_rate, 5.0);
        assert_eq!(catalog[&ItemType::HighIntensity].discount_rate, 0.0);
    }

    #[test]
    fn test_columns_in_any_order() {
        let data = "useful_life,item,payback_period,price,discount_rate\n5,post,4,44.2,0\n";
        let catalog = parse_catalog_csv(data.as_bytes()).unwrap();
        let post = catalog[&ItemType::Post];
        assert_eq!(post.price, 44.2);
        assert_eq!(post.useful_life, 5.0);
    }

    #[test]
    fn test_negative_values_rejected() {
        for row in ["sandbag,-50,0,2,1", "sandbag,2.62,0,-1,1", "sandbag,2.62,-5,2,1"] {
            let data = format!("item,price,discount_rate,useful_life,payback_period\n{}\n", row);
            let err = parse_catalog_csv(data.as_bytes()).unwrap_err();
            assert!(matches!(err, Error::Catalog { row: 2, .. }), "{row} accepted");
        }
    }

    #[test]
    fn test_discount_over_full_price_rejected() {
        let data = "item,price,discount_rate,useful_life,payback_period\nsandbag,2.62,250,2,1\n";
        let err = parse_catalog_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Catalog { row: 2, .. }));

        let data = "item,price,discount_rate,useful_life,payback_period\nsandbag,2.62,100,2,1\n";
        let catalog = parse_catalog_csv(data.as_bytes()).unwrap();
        assert_eq!(catalog[&ItemType::Sandbag].discount_rate, 100.0);
    }

    #[test]
    fn test_missing_column() {
        let data = "item,price\nBLights,1\n";
        match parse_catalog_csv(data.as_bytes()) {
            Err(Error::Catalog { row, message }) => {
                assert_eq!(row, 1);
                assert!(message.contains("discount_rate"));
            }
            other => panic!("unexpected: {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn test_unknown_item_reports_row() {
        let data = "item,price,discount_rate,useful_life,payback_period\n\
                    post,1,0,1,1\n\
                    cones,1,0,1,1\n";
        match parse_catalog_csv(data.as_bytes()) {
            Err(Error::Catalog { row, .. }) => assert_eq!(row, 3),
            other => panic!("unexpected: {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn test_bad_number() {
        let data = "item,price,discount_rate,useful_life,payback_period\npost,abc,0,1,1\n";
        assert!(matches!(
            parse_catalog_csv(data.as_bytes()),
            Err(Error::Catalog { row: 2, .. })
        ));
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let mut overrides = StaticCatalog::new();
        overrides.insert(
            ItemType::Sandbag,
            StaticEquipmentInfo {
                price: 3.0,
                ..Default::default()
            },
        );
        let catalog = catalog_with_overrides(overrides);
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog[&ItemType::Sandbag].price, 3.0);
        assert_eq!(catalog[&ItemType::Post].price, 44.2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_catalog_csv(dir.path().join("none.csv")),
            Err(Error::FileNotFound(_))
        ));
    }
}
