//! Basic statistics over f64 slices.
//!
//! All functions are total over their inputs and return `None` rather than
//! panicking when a window cannot be computed.

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n − 1 denominator). `None` for fewer than 2 values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>()
        / (values.len() - 1) as f64;
    Some(var.sqrt())
}

/// Mean of the trailing `window` values. `None` until `window` values exist.
pub fn trailing_mean(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    mean(&values[values.len() - window..])
}

/// Log-returns between consecutive values: `ln(v[t] / v[t-1])`.
///
/// Output length is `values.len() - 1` (empty for fewer than 2 inputs).
pub fn log_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| (w[1] / w[0]).ln())
        .collect()
}

/// Round to two decimal places, matching the precision of reported metrics.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
