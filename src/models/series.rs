//! Time-ordered series points and provider-side normalization.
//!
//! Classifiers assume a clean series: strictly increasing timestamps, no
//! duplicates, finite values. Providers call the normalize helpers here
//! before handing a series to the core.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Midnight UTC for a calendar date; CSV sources carry dates, not times.
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// One daily BTC price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }
}

/// One generic indicator observation (PMI, ETF flow, funding rate).
///
/// Values may be negative; flows and funding rates routinely are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl IndicatorPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Sort ascending by timestamp and drop duplicate timestamps, keeping the
/// latest occurrence. Non-finite or non-positive prices are dropped first.
pub fn normalize_prices(mut points: Vec<PricePoint>) -> Vec<PricePoint> {
    points.retain(|p| p.price.is_finite() && p.price > 0.0);
    points.sort_by_key(|p| p.timestamp);
    dedup_by_timestamp(points, |p| p.timestamp)
}

/// Sort ascending by timestamp and drop duplicate timestamps, keeping the
/// latest occurrence. Non-finite values are dropped first.
pub fn normalize_indicators(mut points: Vec<IndicatorPoint>) -> Vec<IndicatorPoint> {
    points.retain(|p| p.value.is_finite());
    points.sort_by_key(|p| p.timestamp);
    dedup_by_timestamp(points, |p| p.timestamp)
}

fn dedup_by_timestamp<T, F>(points: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut out: Vec<T> = Vec::with_capacity(points.len());
    for point in points {
        if let Some(last) = out.last_mut() {
            if key(last) == key(&point) {
                *last = point;
                continue;
            }
        }
        out.push(point);
    }
    out
}
