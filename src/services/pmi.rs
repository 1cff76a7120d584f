//! ISM PMI provider backed by a manually maintained CSV file.
//!
//! Required columns: `period` (YYYY-MM or YYYY-MM-DD) and `pmi` (numeric).
//! Header matching is case- and whitespace-insensitive. Rows that fail to
//! parse are skipped and counted, not fatal.

use crate::models::series::{midnight_utc, normalize_indicators, IndicatorPoint};
use crate::services::etf_flows::find_column;
use crate::services::market_data::IndicatorSeriesProvider;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct PmiCsvProvider {
    path: PathBuf,
}

impl PmiCsvProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

fn parse_period(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d").ok())
}

#[async_trait]
impl IndicatorSeriesProvider for PmiCsvProvider {
    async fn fetch(
        &self,
    ) -> Result<Vec<IndicatorPoint>, Box<dyn std::error::Error + Send + Sync>> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("PMI CSV not readable at {}: {}", self.path.display(), e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        let headers = reader.headers()?.clone();
        let period_col = find_column(&headers, "period").ok_or_else(|| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "PMI CSV must contain a 'period' column",
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;
        let pmi_col = find_column(&headers, "pmi").ok_or_else(|| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "PMI CSV must contain a 'pmi' column",
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        let mut points = Vec::new();
        let mut skipped = 0usize;
        for record in reader.records() {
            let record = record?;
            let parsed = record
                .get(period_col)
                .and_then(parse_period)
                .zip(record.get(pmi_col).and_then(|v| v.trim().parse::<f64>().ok()));
            match parsed {
                Some((period, pmi)) => {
                    points.push(IndicatorPoint::new(midnight_utc(period), pmi));
                }
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(skipped, path = %self.path.display(), "skipped malformed PMI rows");
        }
        debug!(count = points.len(), "loaded PMI series");
        Ok(normalize_indicators(points))
    }
}
