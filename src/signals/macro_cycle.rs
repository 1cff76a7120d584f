//! Macro cycle classifier backed by the ISM PMI series.

use crate::common::math;
use crate::config::MacroConfig;
use crate::models::regime::{MacroRegime, PmiTrend};
use crate::models::series::IndicatorPoint;
use crate::models::signal::PmiMetrics;

/// Periods in the trailing PMI average.
const PMI_AVG_WINDOW: usize = 3;

/// Minimum observations before metrics can be computed: the trailing
/// average needs a previous value to measure the trend against.
const MIN_PERIODS: usize = 4;

/// One run's macro reading. `metrics` is absent when the series was too
/// short; the regime is then UNCLEAR and the record carries null PMI fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroSnapshot {
    pub regime: MacroRegime,
    pub metrics: Option<PmiMetrics>,
}

impl MacroSnapshot {
    /// Substituted when the PMI source fails outright.
    pub fn fail_safe() -> Self {
        Self {
            regime: MacroRegime::Unclear,
            metrics: None,
        }
    }
}

pub struct MacroClassifier {
    cfg: MacroConfig,
}

impl MacroClassifier {
    pub fn new(cfg: MacroConfig) -> Self {
        Self { cfg }
    }

    /// Classify a clean monthly PMI series. Never fails: fewer than 4
    /// periods yields UNCLEAR with no metrics.
    pub fn classify(&self, points: &[IndicatorPoint]) -> MacroSnapshot {
        match self.compute_metrics(points) {
            Some(metrics) => {
                let regime = classify_regime(metrics.pmi_3m_avg, metrics.pmi_trend);
                MacroSnapshot {
                    regime,
                    metrics: Some(metrics),
                }
            }
            None => MacroSnapshot::fail_safe(),
        }
    }

    /// Trailing 3-month average and its trend for the latest period.
    ///
    /// The trend delta is measured on unrounded averages; the reported
    /// average is rounded to 2 decimals and classification uses the
    /// rounded value.
    pub fn compute_metrics(&self, points: &[IndicatorPoint]) -> Option<PmiMetrics> {
        if points.len() < MIN_PERIODS {
            return None;
        }

        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let latest_avg = math::trailing_mean(&values, PMI_AVG_WINDOW)?;
        let prev_avg = math::trailing_mean(&values[..values.len() - 1], PMI_AVG_WINDOW)?;

        let delta = latest_avg - prev_avg;
        let pmi_trend = if delta >= self.cfg.trend_delta {
            PmiTrend::Rising
        } else if delta <= -self.cfg.trend_delta {
            PmiTrend::Falling
        } else {
            PmiTrend::Flat
        };

        let latest = points.last()?;
        Some(PmiMetrics {
            period: latest.timestamp.format("%Y-%m").to_string(),
            pmi: math::round2(latest.value),
            pmi_3m_avg: math::round2(latest_avg),
            pmi_trend,
        })
    }
}

/// Map a PMI 3-month average and trend to a cycle regime.
///
/// Evaluated in priority order; the first matching band wins.
pub fn classify_regime(pmi_3m_avg: f64, trend: PmiTrend) -> MacroRegime {
    if pmi_3m_avg < 46.0 && trend == PmiTrend::Falling {
        MacroRegime::Contraction
    } else if (46.0..50.0).contains(&pmi_3m_avg) && trend == PmiTrend::Rising {
        MacroRegime::EarlyRecovery
    } else if (50.0..54.0).contains(&pmi_3m_avg) && trend == PmiTrend::Rising {
        MacroRegime::MidExpansion
    } else if pmi_3m_avg >= 54.0 && trend != PmiTrend::Rising {
        MacroRegime::LateCycle
    } else {
        MacroRegime::Unclear
    }
}
