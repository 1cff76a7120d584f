//! Static configuration and environment helpers.
//!
//! `Settings` carries every threshold the classifiers and the fusion engine
//! need, injected at construction time. Environment lookups live in the
//! helper functions below and are only called from the binaries.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Moving-average and volatility parameters for the structure classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureConfig {
    /// Short moving-average window in periods.
    pub ma_short_window: usize,
    /// Long moving-average window in periods.
    pub ma_long_window: usize,
    /// Trailing window of log-returns used for realized volatility.
    pub vol_window: usize,
    /// Annualized volatility above this is the "high" regime.
    pub vol_high_threshold: f64,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            ma_short_window: 50,
            ma_long_window: 200,
            vol_window: 30,
            vol_high_threshold: 0.80,
        }
    }
}

/// PMI trend sensitivity for the macro classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroConfig {
    /// Minimum 3-month-average delta to call the trend RISING/FALLING.
    pub trend_delta: f64,
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self { trend_delta: 0.2 }
    }
}

/// Trailing window for the ETF flow classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    pub window: usize,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self { window: 7 }
    }
}

/// Funding-rate thresholds, independently adjustable per side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingConfig {
    pub positive_threshold: f64,
    pub negative_threshold: f64,
}

impl Default for FundingConfig {
    fn default() -> Self {
        Self {
            positive_threshold: 0.01,
            negative_threshold: -0.01,
        }
    }
}

/// Immutable configuration for one pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub structure: StructureConfig,
    pub macro_cycle: MacroConfig,
    pub flow: FlowConfig,
    pub funding: FundingConfig,
}

/// Current deployment environment ("production", "sandbox", ...).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Directory for date-keyed daily signal archives.
pub fn get_output_dir() -> PathBuf {
    env::var("OUTPUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("outputs"))
}

/// Directory for the public `latest.json` endpoint file.
pub fn get_public_dir() -> PathBuf {
    env::var("PUBLIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("public/daily"))
}

/// Directory for rendered weekly reports.
pub fn get_report_dir() -> PathBuf {
    env::var("REPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("reports/weekly"))
}

/// Path to the manually maintained ETF flow CSV.
pub fn get_etf_flow_csv() -> PathBuf {
    env::var("ETF_FLOW_CSV")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/btc_etf_flows.csv"))
}

/// Path to the manually maintained PMI CSV.
pub fn get_pmi_csv() -> PathBuf {
    env::var("PMI_CSV")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/ism_pmi.csv"))
}
