//! ETF net-flow provider backed by a manually maintained CSV file.
//!
//! Required columns: `date` (YYYY-MM-DD) and `total` (numeric, may be
//! negative). Header matching is case- and whitespace-insensitive. Rows
//! that fail to parse are skipped and counted, not fatal.

use crate::models::series::{midnight_utc, normalize_indicators, IndicatorPoint};
use crate::services::market_data::IndicatorSeriesProvider;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct EtfFlowCsvProvider {
    path: PathBuf,
}

impl EtfFlowCsvProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl IndicatorSeriesProvider for EtfFlowCsvProvider {
    async fn fetch(
        &self,
    ) -> Result<Vec<IndicatorPoint>, Box<dyn std::error::Error + Send + Sync>> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("ETF flow CSV not readable at {}: {}", self.path.display(), e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        let headers = reader.headers()?.clone();
        let date_col = find_column(&headers, "date").ok_or_else(|| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "ETF flow CSV must contain a 'date' column",
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;
        let total_col = find_column(&headers, "total").ok_or_else(|| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "ETF flow CSV must contain a 'total' column",
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        let mut points = Vec::new();
        let mut skipped = 0usize;
        for record in reader.records() {
            let record = record?;
            let parsed = record
                .get(date_col)
                .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
                .zip(record.get(total_col).and_then(|t| t.trim().parse::<f64>().ok()));
            match parsed {
                Some((date, total)) => {
                    points.push(IndicatorPoint::new(midnight_utc(date), total));
                }
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(skipped, path = %self.path.display(), "skipped malformed ETF flow rows");
        }
        debug!(count = points.len(), "loaded ETF flow series");
        Ok(normalize_indicators(points))
    }
}

/// Locate a column by normalized (trimmed, lowercased) header name.
pub(crate) fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().to_ascii_lowercase() == name)
}
