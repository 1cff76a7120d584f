//! SMA (Simple Moving Average) indicator.

use crate::common::math;
use crate::models::series::PricePoint;

/// Trailing SMA of the last `window` prices.
///
/// Causal: the value at the end of the series uses itself and the preceding
/// `window - 1` points. Undefined until `window` points exist.
pub fn trailing_sma(points: &[PricePoint], window: usize) -> Option<f64> {
    if window == 0 || points.len() < window {
        return None;
    }
    let closes: Vec<f64> = points.iter().map(|p| p.price).collect();
    math::trailing_mean(&closes, window)
}
