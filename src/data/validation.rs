use chrono::NaiveDate;

use crate::data::error::{EntryError, Result};

/// Earliest date the log and edit forms accept.
pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Parse the weight text field of the log/edit forms.
pub fn validate_weight(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EntryError::validation("Please enter a weight."));
    }
    let weight: f64 = trimmed
        .parse()
        .map_err(|_| EntryError::validation("Please enter a valid number."))?;
    if !weight.is_finite() || weight <= 0.0 {
        return Err(EntryError::validation("Weight must be a positive number."));
    }
    Ok(weight)
}

/// Dates must fall between 1900-01-01 and `today`, inclusive.
pub fn validate_date(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate> {
    if date > today {
        return Err(EntryError::validation("Date cannot be in the future."));
    }
    if date < earliest_date() {
        return Err(EntryError::validation("Date must be on or after 1900-01-01."));
    }
    Ok(date)
}

/// Validate a whole form submission. The weight is checked first.
pub fn validate_entry(weight_input: &str, date: NaiveDate, today: NaiveDate) -> Result<(NaiveDate, f64)> {
    let weight = validate_weight(weight_input)?;
    let date = validate_date(date, today)?;
    Ok((date, weight))
}

/// Text the weight field is pre-filled with when editing.
pub fn weight_input_text(weight: f64) -> String {
    format!("{weight:.1}")
}
