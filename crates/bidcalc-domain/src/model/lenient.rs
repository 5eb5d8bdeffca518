//! Lenient field deserializers
//!
//! Estimates arrive from a database layer where numeric columns may be null,
//! missing, or stored as text. These helpers coerce them through
//! [`safe_number`](crate::numeric::safe_number) so the model never holds NaN.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::numeric::safe_number;

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
    Flag(bool),
}

/// Number, numeric string, bool or null → `f64` (null and garbage become 0).
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<LooseNumber>::deserialize(deserializer)? {
        Some(LooseNumber::Number(n)) => Some(n),
        Some(LooseNumber::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(LooseNumber::Flag(b)) => Some(if b { 1.0 } else { 0.0 }),
        None => None,
    };
    Ok(safe_number(parsed, 0.0))
}

/// Like [`number`] but keeps absence distinguishable from zero.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<LooseNumber>::deserialize(deserializer)? {
        Some(LooseNumber::Number(n)) => Some(n),
        Some(LooseNumber::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(LooseNumber::Flag(b)) => Some(if b { 1.0 } else { 0.0 }),
        None => None,
    };
    Ok(parsed.filter(|v| !v.is_nan()))
}

/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, or a full ISO timestamp; anything else is `None`.
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let head = s.get(..10).unwrap_or(s);
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(head, fmt) {
            return Some(date);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "number")]
        value: f64,
        #[serde(default, deserialize_with = "optional_number")]
        maybe: Option<f64>,
        #[serde(default, deserialize_with = "optional_date")]
        date: Option<NaiveDate>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_number_variants() {
        assert_eq!(probe(r#"{"value": 4}"#).value, 4.0);
        assert_eq!(probe(r#"{"value": 2.5}"#).value, 2.5);
        assert_eq!(probe(r#"{"value": " 12.25 "}"#).value, 12.25);
        assert_eq!(probe(r#"{"value": null}"#).value, 0.0);
        assert_eq!(probe(r#"{"value": "abc"}"#).value, 0.0);
        assert_eq!(probe(r#"{"value": true}"#).value, 1.0);
        assert_eq!(probe(r#"{}"#).value, 0.0);
    }

    #[test]
    fn test_optional_number() {
        assert_eq!(probe(r#"{"maybe": null}"#).maybe, None);
        assert_eq!(probe(r#"{"maybe": "7"}"#).maybe, Some(7.0));
        assert_eq!(probe(r#"{}"#).maybe, None);
    }

    #[test]
    fn test_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert_eq!(probe(r#"{"date": "2024-05-01"}"#).date, expected);
        assert_eq!(probe(r#"{"date": "2024/05/01"}"#).date, expected);
        assert_eq!(probe(r#"{"date": "2024-05-01T00:00:00.000Z"}"#).date, expected);
        assert_eq!(probe(r#"{"date": null}"#).date, None);
        assert_eq!(probe(r#"{"date": "soon"}"#).date, None);
    }
}
