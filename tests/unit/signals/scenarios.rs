//! Classifier-to-decision scenarios over synthetic market data

use chrono::{Duration, TimeZone, Utc};
use macrogate::config::Settings;
use macrogate::models::regime::{Action, FlowRegime, MacroRegime, VolatilityRegime};
use macrogate::models::series::{IndicatorPoint, PricePoint};
use macrogate::signals::decision::{decide_action, DecisionInput};
use macrogate::signals::flow::FlowClassifier;
use macrogate::signals::funding::FundingClassifier;
use macrogate::signals::macro_cycle::MacroClassifier;
use macrogate::signals::structure::StructureClassifier;

fn price_series(prices: &[f64]) -> Vec<PricePoint> {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| PricePoint::new(start + Duration::days(i as i64), p))
        .collect()
}

fn daily_series(values: &[f64]) -> Vec<IndicatorPoint> {
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| IndicatorPoint::new(start + Duration::days(i as i64), v))
        .collect()
}

fn monthly_series(values: &[f64]) -> Vec<IndicatorPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            IndicatorPoint::new(
                Utc.with_ymd_and_hms(2024, (i % 12) as u32 + 1, 1, 0, 0, 0).unwrap(),
                v,
            )
        })
        .collect()
}

fn decide(
    prices: &[PricePoint],
    pmi: &[IndicatorPoint],
    flows: &[IndicatorPoint],
    funding: &[IndicatorPoint],
) -> (DecisionInput, Action) {
    let settings = Settings::default();
    let structure = StructureClassifier::new(settings.structure).classify(prices);
    let macro_snapshot = MacroClassifier::new(settings.macro_cycle).classify(pmi);
    let flow = FlowClassifier::new(settings.flow).classify(flows);
    let funding = FundingClassifier::new(settings.funding).classify(funding);

    let input = DecisionInput {
        macro_regime: macro_snapshot.regime,
        above_short: structure.above_short,
        above_long: structure.above_long,
        volatility: structure.volatility,
        flow,
        funding,
    };
    (input, decide_action(&input))
}

#[test]
fn test_calm_expansion_with_inflows_adds() {
    let prices: Vec<f64> = (0..250).map(|i| 40_000.0 + 50.0 * i as f64).collect();
    let (input, action) = decide(
        &price_series(&prices),
        &monthly_series(&[50.5, 51.0, 51.5, 52.0]),
        &daily_series(&[150.0; 7]),
        &daily_series(&[0.0001]),
    );

    assert_eq!(input.macro_regime, MacroRegime::MidExpansion);
    assert!(input.above_short && input.above_long);
    assert_eq!(input.volatility, VolatilityRegime::Low);
    assert_eq!(input.flow, FlowRegime::Positive);
    assert_eq!(action, Action::Add);
}

#[test]
fn test_contraction_gates_even_a_strong_tape() {
    let prices: Vec<f64> = (0..250).map(|i| 40_000.0 + 50.0 * i as f64).collect();
    let (input, action) = decide(
        &price_series(&prices),
        &monthly_series(&[46.0, 45.0, 44.0, 43.0]),
        &daily_series(&[150.0; 7]),
        &daily_series(&[0.0001]),
    );

    assert_eq!(input.macro_regime, MacroRegime::Contraction);
    assert!(input.above_short && input.above_long);
    assert_eq!(action, Action::Hold);
}

#[test]
fn test_late_cycle_breakdown_trims() {
    let prices: Vec<f64> = (0..250).map(|i| 90_000.0 - 100.0 * i as f64).collect();
    let (input, action) = decide(
        &price_series(&prices),
        &monthly_series(&[55.0, 55.0, 55.0, 55.0]),
        &daily_series(&[-200.0; 7]),
        &daily_series(&[0.0]),
    );

    assert_eq!(input.macro_regime, MacroRegime::LateCycle);
    assert!(!input.above_short && !input.above_long);
    assert_eq!(input.flow, FlowRegime::Negative);
    assert_eq!(action, Action::Trim);
}

#[test]
fn test_sparse_data_degrades_to_hold() {
    // Two prices, three PMI months, one day of flows: everything degrades.
    let (input, action) = decide(
        &price_series(&[40_000.0, 41_000.0]),
        &monthly_series(&[50.0, 51.0, 52.0]),
        &daily_series(&[100.0]),
        &daily_series(&[]),
    );

    assert_eq!(input.macro_regime, MacroRegime::Unclear);
    assert_eq!(input.volatility, VolatilityRegime::High);
    assert_eq!(input.flow, FlowRegime::Mixed);
    assert_eq!(action, Action::Hold);
}
