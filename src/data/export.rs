use chrono::NaiveDate;

use crate::data::entry::WeightEntry;
use crate::data::error::{EntryError, Result};

pub const EXPORT_HEADER: [&str; 3] = ["id", "date", "weight"];

/// Serialize entries as CSV, one row per entry in the given order.
pub fn entries_to_csv(entries: &[WeightEntry]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADER)?;
    for entry in entries {
        writer.write_record([
            entry.id.to_string(),
            entry.iso_date(),
            format!("{:.1}", entry.weight),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EntryError::CsvEncoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| EntryError::CsvEncoding(e.to_string()))
}

/// Default file name offered in the save dialog.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("momentum-weight-export-{}.csv", today.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let entries = vec![
            WeightEntry::from_iso(1, "2024-01-05", 80.0).unwrap(),
            WeightEntry::from_iso(2, "2024-01-06", 79.46).unwrap(),
        ];
        let csv = entries_to_csv(&entries).unwrap();
        assert_eq!(csv, "id,date,weight\n1,2024-01-05,80.0\n2,2024-01-06,79.5\n");
    }

    #[test]
    fn empty_export_has_header_only() {
        assert_eq!(entries_to_csv(&[]).unwrap(), "id,date,weight\n");
    }

    #[test]
    fn file_name_carries_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_file_name(today), "momentum-weight-export-2024-03-09.csv");
    }
}
