//! Realized volatility from daily log-returns.

use crate::common::math;
use crate::models::series::PricePoint;

/// Days used to annualize daily volatility; crypto trades every day.
const TRADING_DAYS_PER_YEAR: f64 = 365.0;

/// Annualized realized volatility over the trailing `window` log-returns.
///
/// Sample standard deviation of `ln(p[t] / p[t-1])` over at most `window`
/// trailing returns, scaled by sqrt(365). `None` when fewer than 2 returns
/// exist; callers treat that as the conservative "high" regime.
pub fn realized_volatility(points: &[PricePoint], window: usize) -> Option<f64> {
    let prices: Vec<f64> = points.iter().map(|p| p.price).collect();
    let returns = math::log_returns(&prices);
    if returns.is_empty() {
        return None;
    }
    let tail_start = returns.len().saturating_sub(window);
    let tail = &returns[tail_start..];
    math::sample_std_dev(tail).map(|sd| sd * TRADING_DAYS_PER_YEAR.sqrt())
}
