use crate::data::entry::WeightEntry;
use crate::data::error::{EntryError, Result};
use crate::processing::statistics::{compute_stats, WeightStats};

/// Padding (kg) added on both sides of the data range for the Y axis.
pub const Y_DOMAIN_PADDING: f64 = 2.0;

/// Bar fill classification based on the change from the previous entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Neutral,
    Loss,
}

/// One bar of the weight chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPoint {
    /// Abbreviated month and day, e.g. `Jan 5`.
    pub label: String,
    /// Weight rounded to one decimal for display.
    pub value: f64,
    pub color_tag: ColorTag,
}

/// Horizontal lines at mean ± one sample standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLines {
    pub plus_one_sigma: f64,
    pub minus_one_sigma: f64,
}

/// Everything the chart view needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub points: Vec<DerivedPoint>,
    /// `(lower, upper)` bounds of the Y axis.
    pub y_domain: (f64, f64),
    pub reference_lines: Option<ReferenceLines>,
    pub stats: WeightStats,
}

/// Derive chart records from entries sorted by date ascending.
///
/// Returns `Ok(None)` when there is nothing to chart. Bounds and statistics
/// are computed on the raw weights; only the bar values are rounded.
pub fn derive_chart_data(entries: &[WeightEntry]) -> Result<Option<ChartData>> {
    if entries.is_empty() {
        return Ok(None);
    }

    if let Some(bad) = entries.iter().find(|e| !e.has_valid_weight()) {
        return Err(EntryError::invalid(
            bad.id,
            format!("weight must be a finite positive number, got {}", bad.weight),
        ));
    }

    let tags = color_tags(entries);
    let points: Vec<DerivedPoint> = entries
        .iter()
        .zip(tags)
        .map(|(entry, color_tag)| DerivedPoint {
            label: format_label(entry),
            value: round_one_decimal(entry.weight),
            color_tag,
        })
        .collect();

    let weights: Vec<f64> = entries.iter().map(|e| e.weight).collect();
    let min = weights.iter().copied().fold(f64::INFINITY, f64::min);
    let max = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let y_domain = ((min - Y_DOMAIN_PADDING).floor(), (max + Y_DOMAIN_PADDING).ceil());

    let stats = compute_stats(&weights);
    let reference_lines = match (stats.mean, stats.standard_deviation) {
        (Some(mean), Some(sd)) => Some(ReferenceLines {
            plus_one_sigma: mean + sd,
            minus_one_sigma: mean - sd,
        }),
        _ => None,
    };

    Ok(Some(ChartData {
        points,
        y_domain,
        reference_lines,
        stats,
    }))
}

/// Classify each entry against its predecessor. The first entry is always neutral.
fn color_tags(entries: &[WeightEntry]) -> Vec<ColorTag> {
    std::iter::once(ColorTag::Neutral)
        .chain(entries.windows(2).map(|pair| {
            if pair[1].weight - pair[0].weight < 0.0 {
                ColorTag::Loss
            } else {
                ColorTag::Neutral
            }
        }))
        .take(entries.len())
        .collect()
}

fn format_label(entry: &WeightEntry) -> String {
    entry.date.format("%b %-d").to_string()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn entries(weights: &[f64]) -> Vec<WeightEntry> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| WeightEntry::new(i as u64 + 1, start + Duration::days(i as i64), w))
            .collect()
    }

    #[test]
    fn empty_input_produces_no_chart() {
        assert_eq!(derive_chart_data(&[]).unwrap(), None);
    }

    #[test]
    fn tags_follow_deltas() {
        let data = derive_chart_data(&entries(&[80.0, 79.5, 79.5, 81.0])).unwrap().unwrap();
        let tags: Vec<ColorTag> = data.points.iter().map(|p| p.color_tag).collect();
        assert_eq!(
            tags,
            vec![ColorTag::Neutral, ColorTag::Loss, ColorTag::Neutral, ColorTag::Neutral]
        );
    }

    #[test]
    fn first_point_is_neutral_even_when_lowest() {
        let data = derive_chart_data(&entries(&[60.0, 90.0, 70.0])).unwrap().unwrap();
        assert_eq!(data.points[0].color_tag, ColorTag::Neutral);
        assert_eq!(data.points[2].color_tag, ColorTag::Loss);
    }

    #[test]
    fn y_domain_is_padded_and_rounded_outward() {
        let data = derive_chart_data(&entries(&[79.5, 81.0])).unwrap().unwrap();
        assert_eq!(data.y_domain, (77.0, 83.0));
    }

    #[test]
    fn y_domain_uses_raw_weights() {
        // Rounded display values would be 70.0 and 74.0, giving (68, 76).
        let data = derive_chart_data(&entries(&[69.96, 74.04])).unwrap().unwrap();
        assert_eq!(data.points[0].value, 70.0);
        assert_eq!(data.points[1].value, 74.0);
        assert_eq!(data.y_domain, (67.0, 77.0));
    }

    #[test]
    fn single_entry_has_domain_but_no_reference_lines() {
        let data = derive_chart_data(&entries(&[72.3])).unwrap().unwrap();
        assert_eq!(data.reference_lines, None);
        assert_eq!(data.y_domain, (70.0, 75.0));
        assert_eq!(data.stats.mean, Some(72.3));
    }

    #[test]
    fn reference_lines_bracket_the_mean() {
        let data = derive_chart_data(&entries(&[70.0, 72.0, 71.0])).unwrap().unwrap();
        let lines = data.reference_lines.unwrap();
        assert!((lines.plus_one_sigma - 72.0).abs() < 1e-9);
        assert!((lines.minus_one_sigma - 70.0).abs() < 1e-9);
    }

    #[test]
    fn labels_are_month_and_unpadded_day() {
        let list = vec![
            WeightEntry::from_iso(1, "2024-01-05", 80.0).unwrap(),
            WeightEntry::from_iso(2, "2024-12-25", 80.0).unwrap(),
        ];
        let data = derive_chart_data(&list).unwrap().unwrap();
        assert_eq!(data.points[0].label, "Jan 5");
        assert_eq!(data.points[1].label, "Dec 25");
    }

    #[test]
    fn values_are_rounded_to_one_decimal() {
        let data = derive_chart_data(&entries(&[75.44, 75.46, 80.0])).unwrap().unwrap();
        let values: Vec<f64> = data.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![75.4, 75.5, 80.0]);
    }

    #[test]
    fn invalid_weights_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, 0.0, -70.0] {
            let mut list = entries(&[80.0, 79.0]);
            list[1].weight = bad;
            match derive_chart_data(&list) {
                Err(EntryError::InvalidEntry { id, .. }) => assert_eq!(id, 2),
                other => panic!("expected InvalidEntry for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn derivation_is_idempotent_and_leaves_input_untouched() {
        let list = entries(&[80.0, 79.5, 79.5, 81.0]);
        let snapshot = list.clone();
        let first = derive_chart_data(&list).unwrap();
        let second = derive_chart_data(&list).unwrap();
        assert_eq!(first, second);
        assert_eq!(list, snapshot);
    }
}
