//! BTC market-structure classifier: price position versus the moving
//! averages, plus the realized-volatility regime.

use crate::config::StructureConfig;
use crate::indicators::trend::sma::trailing_sma;
use crate::indicators::volatility::realized::realized_volatility;
use crate::models::regime::VolatilityRegime;
use crate::models::series::PricePoint;

/// One run's structure reading. Raw sub-metrics are kept alongside the
/// derived booleans so degraded inputs stay visible downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureSnapshot {
    pub latest_price: Option<f64>,
    pub ma_short: Option<f64>,
    pub ma_long: Option<f64>,
    pub above_short: bool,
    pub above_long: bool,
    pub realized_vol: Option<f64>,
    pub volatility: VolatilityRegime,
}

impl StructureSnapshot {
    /// Conservative defaults substituted when the price source fails:
    /// below both averages, volatility high.
    pub fn fail_safe() -> Self {
        Self {
            latest_price: None,
            ma_short: None,
            ma_long: None,
            above_short: false,
            above_long: false,
            realized_vol: None,
            volatility: VolatilityRegime::High,
        }
    }
}

pub struct StructureClassifier {
    cfg: StructureConfig,
}

impl StructureClassifier {
    pub fn new(cfg: StructureConfig) -> Self {
        Self { cfg }
    }

    /// Classify a clean price series. Never fails: every "not enough
    /// history" case degrades to the conservative defaults. An undefined
    /// moving average reads as "not above", undefined volatility as "high".
    pub fn classify(&self, points: &[PricePoint]) -> StructureSnapshot {
        let latest_price = points.last().map(|p| p.price);
        let ma_short = trailing_sma(points, self.cfg.ma_short_window);
        let ma_long = trailing_sma(points, self.cfg.ma_long_window);

        let above = |ma: Option<f64>| match (latest_price, ma) {
            (Some(price), Some(avg)) => price > avg,
            _ => false,
        };

        let realized_vol = realized_volatility(points, self.cfg.vol_window);
        let volatility = match realized_vol {
            Some(vol) if vol > self.cfg.vol_high_threshold => VolatilityRegime::High,
            Some(_) => VolatilityRegime::Low,
            None => VolatilityRegime::High,
        };

        StructureSnapshot {
            latest_price,
            ma_short,
            ma_long,
            above_short: above(ma_short),
            above_long: above(ma_long),
            realized_vol,
            volatility,
        }
    }
}
