/// Descriptive statistics for a weight series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightStats {
    /// Arithmetic mean. `None` for an empty series.
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1 denominator). `None` below two values.
    pub standard_deviation: Option<f64>,
}

/// Compute mean and sample standard deviation.
///
/// Inputs are expected to be finite. NaN or infinite values are not filtered
/// and simply propagate through the arithmetic; callers that render the
/// result validate their data first.
pub fn compute_stats(values: &[f64]) -> WeightStats {
    if values.is_empty() {
        return WeightStats::default();
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    if count < 2 {
        return WeightStats { mean: Some(mean), standard_deviation: None };
    }

    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;

    WeightStats {
        mean: Some(mean),
        standard_deviation: Some(variance.sqrt()),
    }
}

impl WeightStats {
    /// One-line summary for the chart header, e.g. `Mean 71.0 kg · σ 1.00 kg`.
    pub fn summary(&self) -> Option<String> {
        let mean = self.mean?;
        Some(match self.standard_deviation {
            Some(sd) => format!("Mean {mean:.1} kg \u{00b7} \u{03c3} {sd:.2} kg"),
            None => format!("Mean {mean:.1} kg"),
        })
    }
}
