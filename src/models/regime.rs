//! Regime classifications and the final action.
//!
//! Every regime is a discrete reading of a continuous signal; the serde
//! representations are the stable strings of the persisted record.

use serde::{Deserialize, Serialize};

/// Economic cycle phase derived from the PMI 3-month average and trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MacroRegime {
    /// PMI below 46 and falling.
    Contraction,
    /// PMI 46–50 and rising.
    EarlyRecovery,
    /// PMI 50–54 and rising.
    MidExpansion,
    /// PMI at or above 54, momentum gone.
    LateCycle,
    /// Anything else, including missing data.
    Unclear,
}

impl MacroRegime {
    /// Regimes that unconditionally gate the decision to HOLD.
    pub fn blocks_risk(&self) -> bool {
        matches!(self, Self::Contraction | Self::Unclear)
    }

    /// Regimes in which the engine is allowed to add exposure.
    pub fn allows_adding(&self) -> bool {
        matches!(self, Self::EarlyRecovery | Self::MidExpansion)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contraction => "CONTRACTION",
            Self::EarlyRecovery => "EARLY_RECOVERY",
            Self::MidExpansion => "MID_EXPANSION",
            Self::LateCycle => "LATE_CYCLE",
            Self::Unclear => "UNCLEAR",
        }
    }
}

impl std::fmt::Display for MacroRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the PMI 3-month average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PmiTrend {
    Rising,
    Falling,
    Flat,
}

impl PmiTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rising => "RISING",
            Self::Falling => "FALLING",
            Self::Flat => "FLAT",
        }
    }
}

impl std::fmt::Display for PmiTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Realized-volatility regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityRegime {
    Low,
    High,
}

impl VolatilityRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for VolatilityRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of recent institutional ETF flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowRegime {
    Positive,
    Negative,
    Mixed,
}

impl FlowRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bias of the latest perpetual funding rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingRegime {
    Positive,
    Neutral,
    Negative,
}

impl FundingRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for FundingRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single daily recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Add,
    Hold,
    Trim,
}

impl Default for Action {
    /// HOLD is the defensive fallback for any unanticipated state.
    fn default() -> Self {
        Self::Hold
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Add => "ADD",
            Self::Hold => "HOLD",
            Self::Trim => "TRIM",
        };
        f.write_str(s)
    }
}
