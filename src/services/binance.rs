//! Binance futures funding-rate provider.

use crate::models::series::{normalize_indicators, IndicatorPoint};
use crate::services::market_data::IndicatorSeriesProvider;
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const BINANCE_FUTURES_URL: &str = "https://fapi.binance.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FundingRateRow {
    funding_time: i64,
    /// Binance sends the rate as a decimal string.
    funding_rate: String,
}

pub struct FundingRateProvider {
    client: reqwest::Client,
    base_url: String,
    symbol: String,
    limit: u32,
}

impl FundingRateProvider {
    pub fn new() -> Self {
        Self::with_base_url(BINANCE_FUTURES_URL.to_string())
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
            symbol: "BTCUSDT".to_string(),
            limit: 30,
        }
    }

    async fn fetch_rows(
        &self,
    ) -> Result<Vec<FundingRateRow>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/fapi/v1/fundingRate", self.base_url);
        let limit = self.limit.to_string();

        let request = || async {
            self.client
                .get(&url)
                .query(&[("symbol", self.symbol.as_str()), ("limit", limit.as_str())])
                .send()
                .await?
                .error_for_status()?
                .json::<Vec<FundingRateRow>>()
                .await
        };

        let rows = request
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_millis(250))
                    .with_max_times(2),
            )
            .await?;
        Ok(rows)
    }
}

impl Default for FundingRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IndicatorSeriesProvider for FundingRateProvider {
    async fn fetch(
        &self,
    ) -> Result<Vec<IndicatorPoint>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = self.fetch_rows().await?;

        // Rows with unparseable rates or timestamps are dropped, not fatal.
        let points: Vec<IndicatorPoint> = rows
            .iter()
            .filter_map(|row| {
                let timestamp = DateTime::from_timestamp_millis(row.funding_time)?;
                let rate: f64 = row.funding_rate.trim().parse().ok()?;
                Some(IndicatorPoint::new(timestamp, rate))
            })
            .collect();

        let points = normalize_indicators(points);
        if points.is_empty() {
            return Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "no funding rate data returned",
            )));
        }

        debug!(count = points.len(), symbol = %self.symbol, "fetched funding rates");
        Ok(points)
    }
}
