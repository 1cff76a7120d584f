//! Decision fusion: macro gate plus weighted regime scoring.
//!
//! `decide_action` is a pure, total function: every valid input
//! combination yields exactly one action.

use crate::models::regime::{Action, FlowRegime, FundingRegime, MacroRegime, VolatilityRegime};

/// Everything the fusion engine consumes, assembled once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionInput {
    pub macro_regime: MacroRegime,
    pub above_short: bool,
    pub above_long: bool,
    pub volatility: VolatilityRegime,
    pub flow: FlowRegime,
    pub funding: FundingRegime,
}

/// Score contributions and decision thresholds.
pub struct ScoreWeights;

impl ScoreWeights {
    /// Price above the short moving average.
    pub const ABOVE_SHORT: f64 = 1.0;
    /// Price above the long moving average; the long-term trend carries
    /// strictly more weight than the short.
    pub const ABOVE_LONG: f64 = 2.0;
    /// Penalty while realized volatility is high.
    pub const HIGH_VOL_PENALTY: f64 = -1.0;
    /// Positive funding is a crowded-long signal: mild contrarian penalty.
    /// Negative funding contributes the same magnitude as a bonus.
    pub const FUNDING_MODIFIER: f64 = 0.5;
    /// Minimum total score for ADD (inclusive).
    pub const ADD_MIN: f64 = 3.0;
    /// Maximum total score for TRIM (inclusive).
    pub const TRIM_MAX: f64 = 0.0;
}

/// Weighted sum of the non-macro signals. Exposed separately so tests and
/// explanations can inspect the score behind an action.
pub fn total_score(input: &DecisionInput) -> f64 {
    let mut structure = 0.0;
    if input.above_short {
        structure += ScoreWeights::ABOVE_SHORT;
    }
    if input.above_long {
        structure += ScoreWeights::ABOVE_LONG;
    }

    let flow = match input.flow {
        FlowRegime::Positive => 1.0,
        FlowRegime::Negative => -1.0,
        FlowRegime::Mixed => 0.0,
    };

    let vol_penalty = match input.volatility {
        VolatilityRegime::High => ScoreWeights::HIGH_VOL_PENALTY,
        VolatilityRegime::Low => 0.0,
    };

    let funding = match input.funding {
        FundingRegime::Positive => -ScoreWeights::FUNDING_MODIFIER,
        FundingRegime::Negative => ScoreWeights::FUNDING_MODIFIER,
        FundingRegime::Neutral => 0.0,
    };

    structure + flow + vol_penalty + funding
}

/// Fuse the regime readings into one action.
///
/// The macro gate has absolute priority: contraction or an unclear macro
/// picture holds regardless of every other signal. Score thresholds are
/// inclusive.
pub fn decide_action(input: &DecisionInput) -> Action {
    if input.macro_regime.blocks_risk() {
        return Action::Hold;
    }

    let total = total_score(input);

    if total >= ScoreWeights::ADD_MIN && input.macro_regime.allows_adding() {
        Action::Add
    } else if total <= ScoreWeights::TRIM_MAX && input.macro_regime == MacroRegime::LateCycle {
        Action::Trim
    } else {
        Action::Hold
    }
}
