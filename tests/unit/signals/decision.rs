//! Unit tests for the decision fusion engine

use macrogate::models::regime::{
    Action, FlowRegime, FundingRegime, MacroRegime, VolatilityRegime,
};
use macrogate::signals::decision::{decide_action, total_score, DecisionInput};

const MACROS: [MacroRegime; 5] = [
    MacroRegime::Contraction,
    MacroRegime::EarlyRecovery,
    MacroRegime::MidExpansion,
    MacroRegime::LateCycle,
    MacroRegime::Unclear,
];
const FLOWS: [FlowRegime; 3] = [FlowRegime::Positive, FlowRegime::Negative, FlowRegime::Mixed];
const FUNDINGS: [FundingRegime; 3] = [
    FundingRegime::Positive,
    FundingRegime::Neutral,
    FundingRegime::Negative,
];
const VOLS: [VolatilityRegime; 2] = [VolatilityRegime::Low, VolatilityRegime::High];
const BOOLS: [bool; 2] = [false, true];

fn all_inputs_for(macro_regime: MacroRegime) -> Vec<DecisionInput> {
    let mut inputs = Vec::new();
    for &above_short in &BOOLS {
        for &above_long in &BOOLS {
            for &volatility in &VOLS {
                for &flow in &FLOWS {
                    for &funding in &FUNDINGS {
                        inputs.push(DecisionInput {
                            macro_regime,
                            above_short,
                            above_long,
                            volatility,
                            flow,
                            funding,
                        });
                    }
                }
            }
        }
    }
    inputs
}

fn input(macro_regime: MacroRegime) -> DecisionInput {
    DecisionInput {
        macro_regime,
        above_short: false,
        above_long: false,
        volatility: VolatilityRegime::Low,
        flow: FlowRegime::Mixed,
        funding: FundingRegime::Neutral,
    }
}

#[test]
fn test_macro_gate_overrides_everything() {
    for macro_regime in [MacroRegime::Contraction, MacroRegime::Unclear] {
        for candidate in all_inputs_for(macro_regime) {
            assert_eq!(decide_action(&candidate), Action::Hold);
        }
    }
}

#[test]
fn test_fusion_is_total() {
    for &macro_regime in &MACROS {
        for candidate in all_inputs_for(macro_regime) {
            // Every combination maps to exactly one of the three actions.
            let action = decide_action(&candidate);
            assert!(matches!(action, Action::Add | Action::Hold | Action::Trim));
        }
    }
}

#[test]
fn test_long_trend_outweighs_short() {
    let mut short_only = input(MacroRegime::MidExpansion);
    short_only.above_short = true;
    let mut long_only = input(MacroRegime::MidExpansion);
    long_only.above_long = true;

    assert!(total_score(&long_only) > total_score(&short_only));
    assert_eq!(total_score(&short_only), 1.0);
    assert_eq!(total_score(&long_only), 2.0);
}

#[test]
fn test_mid_expansion_weak_structure_holds() {
    let candidate = DecisionInput {
        macro_regime: MacroRegime::MidExpansion,
        above_short: true,
        above_long: false,
        volatility: VolatilityRegime::Low,
        flow: FlowRegime::Negative,
        funding: FundingRegime::Neutral,
    };
    assert_eq!(total_score(&candidate), 0.0);
    assert_eq!(decide_action(&candidate), Action::Hold);
}

#[test]
fn test_mid_expansion_full_confirmation_adds() {
    let candidate = DecisionInput {
        macro_regime: MacroRegime::MidExpansion,
        above_short: true,
        above_long: true,
        volatility: VolatilityRegime::Low,
        flow: FlowRegime::Positive,
        funding: FundingRegime::Neutral,
    };
    assert_eq!(total_score(&candidate), 4.0);
    assert_eq!(decide_action(&candidate), Action::Add);
}

#[test]
fn test_add_threshold_is_inclusive() {
    // Structure 3, flow +1, high-vol -1: exactly at the ADD bar.
    let candidate = DecisionInput {
        macro_regime: MacroRegime::EarlyRecovery,
        above_short: true,
        above_long: true,
        volatility: VolatilityRegime::High,
        flow: FlowRegime::Positive,
        funding: FundingRegime::Neutral,
    };
    assert_eq!(total_score(&candidate), 3.0);
    assert_eq!(decide_action(&candidate), Action::Add);
}

#[test]
fn test_trim_threshold_is_inclusive() {
    // Structure 1, flow -1: exactly at the TRIM bar in a late cycle.
    let candidate = DecisionInput {
        macro_regime: MacroRegime::LateCycle,
        above_short: true,
        above_long: false,
        volatility: VolatilityRegime::Low,
        flow: FlowRegime::Negative,
        funding: FundingRegime::Neutral,
    };
    assert_eq!(total_score(&candidate), 0.0);
    assert_eq!(decide_action(&candidate), Action::Trim);
}

#[test]
fn test_late_cycle_needs_nonpositive_score_to_trim() {
    let mut candidate = input(MacroRegime::LateCycle);
    candidate.above_short = true;
    candidate.flow = FlowRegime::Negative;
    candidate.funding = FundingRegime::Negative;

    // Negative funding lifts the score to +0.5, above the TRIM bar.
    assert_eq!(total_score(&candidate), 0.5);
    assert_eq!(decide_action(&candidate), Action::Hold);
}

#[test]
fn test_late_cycle_never_adds() {
    for candidate in all_inputs_for(MacroRegime::LateCycle) {
        assert_ne!(decide_action(&candidate), Action::Add);
    }
}

#[test]
fn test_crowded_longs_penalized_half_point() {
    let mut candidate = DecisionInput {
        macro_regime: MacroRegime::MidExpansion,
        above_short: true,
        above_long: true,
        volatility: VolatilityRegime::High,
        flow: FlowRegime::Positive,
        funding: FundingRegime::Neutral,
    };
    assert_eq!(decide_action(&candidate), Action::Add);

    // Positive funding alone drags the same setup below the ADD bar.
    candidate.funding = FundingRegime::Positive;
    assert_eq!(total_score(&candidate), 2.5);
    assert_eq!(decide_action(&candidate), Action::Hold);
}

#[test]
fn test_high_volatility_costs_one_point() {
    let mut candidate = input(MacroRegime::MidExpansion);
    candidate.above_long = true;
    let calm = total_score(&candidate);
    candidate.volatility = VolatilityRegime::High;
    assert_eq!(total_score(&candidate), calm - 1.0);
}

#[test]
fn test_default_action_is_hold() {
    assert_eq!(Action::default(), Action::Hold);
}
