//! Provider interfaces for the pipeline's data sources.
//!
//! Each source exposes a single fetch returning an ordered, normalized
//! series or a failure. The pipeline treats any failure as fail-fast and
//! substitutes the documented conservative default.

use crate::models::series::{IndicatorPoint, PricePoint};
use async_trait::async_trait;

#[async_trait]
pub trait PriceSeriesProvider: Send + Sync {
    /// Fetch the daily price history, ascending by timestamp.
    async fn fetch(&self) -> Result<Vec<PricePoint>, Box<dyn std::error::Error + Send + Sync>>;
}

#[async_trait]
pub trait IndicatorSeriesProvider: Send + Sync {
    /// Fetch the indicator series, ascending by timestamp.
    async fn fetch(&self)
        -> Result<Vec<IndicatorPoint>, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory provider for tests and offline runs.
pub struct StaticSeriesProvider {
    prices: Vec<PricePoint>,
    indicators: Vec<IndicatorPoint>,
}

impl StaticSeriesProvider {
    pub fn with_prices(prices: Vec<PricePoint>) -> Self {
        Self {
            prices,
            indicators: Vec::new(),
        }
    }

    pub fn with_indicators(indicators: Vec<IndicatorPoint>) -> Self {
        Self {
            prices: Vec::new(),
            indicators,
        }
    }
}

#[async_trait]
impl PriceSeriesProvider for StaticSeriesProvider {
    async fn fetch(&self) -> Result<Vec<PricePoint>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.prices.clone())
    }
}

#[async_trait]
impl IndicatorSeriesProvider for StaticSeriesProvider {
    async fn fetch(
        &self,
    ) -> Result<Vec<IndicatorPoint>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.indicators.clone())
    }
}
