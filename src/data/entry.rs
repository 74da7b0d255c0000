use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::error::{EntryError, Result};

/// ISO calendar date format used for storage and export.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single logged weight, in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: u64,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub weight: f64,
}

impl WeightEntry {
    pub fn new(id: u64, date: NaiveDate, weight: f64) -> Self {
        Self { id, date, weight }
    }

    /// Build an entry from an ISO date string as it appears in exports.
    pub fn from_iso(id: u64, date: &str, weight: f64) -> Result<Self> {
        let date = parse_iso_date(date).map_err(|_| {
            EntryError::invalid(id, format!("malformed date {date:?}"))
        })?;
        Ok(Self::new(id, date, weight))
    }

    pub fn iso_date(&self) -> String {
        self.date.format(ISO_DATE_FORMAT).to_string()
    }

    /// Weight as shown in tooltips and the entry list, e.g. `75.5 kg`.
    pub fn display_weight(&self) -> String {
        format!("{:.1} kg", self.weight)
    }

    /// A weight the chart can use: finite and strictly positive.
    pub fn has_valid_weight(&self) -> bool {
        self.weight.is_finite() && self.weight > 0.0
    }
}

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT)
        .map_err(|e| EntryError::validation(format!("Invalid date {value:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let d = parse_iso_date(" 2024-01-05 ").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn rejects_dates_with_time_component() {
        assert!(parse_iso_date("2024-01-05T10:00:00").is_err());
        assert!(parse_iso_date("05/01/2024").is_err());
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn from_iso_reports_entry_id() {
        let err = WeightEntry::from_iso(7, "not-a-date", 70.0).unwrap_err();
        match err {
            EntryError::InvalidEntry { id, .. } => assert_eq!(id, 7),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn display_weight_uses_one_decimal() {
        let e = WeightEntry::from_iso(1, "2024-03-01", 75.46).unwrap();
        assert_eq!(e.display_weight(), "75.5 kg");
        assert_eq!(e.iso_date(), "2024-03-01");
    }

    #[test]
    fn serializes_date_as_iso_string() {
        let e = WeightEntry::from_iso(3, "2024-02-29", 80.0).unwrap();
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"2024-02-29\""));
        let back: WeightEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn weight_validity() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(WeightEntry::new(1, d, 70.0).has_valid_weight());
        assert!(!WeightEntry::new(1, d, 0.0).has_valid_weight());
        assert!(!WeightEntry::new(1, d, -3.0).has_valid_weight());
        assert!(!WeightEntry::new(1, d, f64::NAN).has_valid_weight());
        assert!(!WeightEntry::new(1, d, f64::INFINITY).has_valid_weight());
    }
}
