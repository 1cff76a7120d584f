//! The persisted daily record and its sections.

use crate::models::regime::{Action, FlowRegime, FundingRegime, MacroRegime, PmiTrend, VolatilityRegime};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Serialize booleans as the record's `"yes"` / `"no"` strings.
mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "yes" } else { "no" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "yes" => Ok(true),
            "no" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected \"yes\" or \"no\", got \"{}\"",
                other
            ))),
        }
    }
}

/// Price position versus the moving averages, plus the volatility regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketStructure {
    #[serde(with = "yes_no")]
    pub above_50dma: bool,
    #[serde(with = "yes_no")]
    pub above_200dma: bool,
    pub volatility: VolatilityRegime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionalFlows {
    pub etf_flow_regime: FlowRegime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Funding {
    pub funding_regime: FundingRegime,
}

/// Computed PMI metrics for a month with enough history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmiMetrics {
    /// Month of the latest observation, `YYYY-MM`.
    pub period: String,
    /// Latest raw PMI reading, rounded to 2 decimals.
    pub pmi: f64,
    /// Trailing 3-month average, rounded to 2 decimals.
    pub pmi_3m_avg: f64,
    pub pmi_trend: PmiTrend,
}

/// PMI section of the record. The average and trend are always present as
/// keys and null when the source was degraded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmiSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmi: Option<f64>,
    pub pmi_3m_avg: Option<f64>,
    pub pmi_trend: Option<PmiTrend>,
}

impl PmiSection {
    /// All-null section recorded when PMI data is missing or insufficient.
    pub fn unavailable() -> Self {
        Self {
            period: None,
            pmi: None,
            pmi_3m_avg: None,
            pmi_trend: None,
        }
    }
}

impl From<PmiMetrics> for PmiSection {
    fn from(metrics: PmiMetrics) -> Self {
        Self {
            period: Some(metrics.period),
            pmi: Some(metrics.pmi),
            pmi_3m_avg: Some(metrics.pmi_3m_avg),
            pmi_trend: Some(metrics.pmi_trend),
        }
    }
}

/// The final persisted record: one per run date, overwritten on re-run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySignal {
    pub date: NaiveDate,
    pub macro_regime: MacroRegime,
    pub btc_structure: MarketStructure,
    pub institutional_flows: InstitutionalFlows,
    pub funding: Funding,
    pub pmi: PmiSection,
    pub final_action: Action,
}
