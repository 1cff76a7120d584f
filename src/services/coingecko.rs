//! CoinGecko daily BTC price history provider.

use crate::models::series::{normalize_prices, PricePoint};
use crate::services::market_data::PriceSeriesProvider;
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const COINGECKO_URL: &str = "https://api.coingecko.com/api/v3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Deserialize)]
struct MarketChart {
    /// `[timestamp_ms, price]` pairs; CoinGecko sends both as JSON numbers.
    prices: Vec<(f64, f64)>,
}

pub struct CoinGeckoProvider {
    client: reqwest::Client,
    base_url: String,
    days: u32,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        Self::with_base_url(COINGECKO_URL.to_string())
    }

    /// Point the provider at a different endpoint (tests use a mock server).
    pub fn with_base_url(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url,
            days: 365,
        }
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    async fn fetch_chart(&self) -> Result<MarketChart, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/coins/bitcoin/market_chart", self.base_url);
        let days = self.days.to_string();

        let request = || async {
            self.client
                .get(&url)
                .query(&[("vs_currency", "usd"), ("days", days.as_str())])
                .send()
                .await?
                .error_for_status()?
                .json::<MarketChart>()
                .await
        };

        let chart = request
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_millis(250))
                    .with_max_times(2),
            )
            .await?;
        Ok(chart)
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceSeriesProvider for CoinGeckoProvider {
    async fn fetch(&self) -> Result<Vec<PricePoint>, Box<dyn std::error::Error + Send + Sync>> {
        let chart = self.fetch_chart().await?;

        let points: Vec<PricePoint> = chart
            .prices
            .iter()
            .filter_map(|&(ts_ms, price)| {
                let timestamp = DateTime::from_timestamp_millis(ts_ms as i64)?;
                Some(PricePoint::new(timestamp, price))
            })
            .collect();

        let points = normalize_prices(points);
        if points.is_empty() {
            return Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "no BTC price data returned",
            )));
        }

        debug!(count = points.len(), "fetched BTC price history");
        Ok(points)
    }
}
