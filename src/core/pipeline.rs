//! Fail-safe daily pipeline.
//!
//! Fetches the four sources concurrently, classifies each into a regime,
//! fuses them into the final action, and assembles the daily record. A
//! failed source never blocks the others: each substitutes its documented
//! conservative default, at most once per source per run.

use crate::config::Settings;
use crate::models::regime::MacroRegime;
use crate::models::signal::{
    DailySignal, Funding, InstitutionalFlows, MarketStructure, PmiSection,
};
use crate::services::market_data::{IndicatorSeriesProvider, PriceSeriesProvider};
use crate::signals::decision::{decide_action, DecisionInput};
use crate::signals::flow::FlowClassifier;
use crate::signals::funding::FundingClassifier;
use crate::signals::macro_cycle::{MacroClassifier, MacroSnapshot};
use crate::signals::structure::{StructureClassifier, StructureSnapshot};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{error, info, warn};

/// The pipeline's data sources, injected so tests can substitute stubs.
pub struct PipelineContext {
    pub prices: Arc<dyn PriceSeriesProvider>,
    pub etf_flows: Arc<dyn IndicatorSeriesProvider>,
    pub funding: Arc<dyn IndicatorSeriesProvider>,
    pub pmi: Arc<dyn IndicatorSeriesProvider>,
}

pub struct DailyPipeline {
    structure: StructureClassifier,
    macro_cycle: MacroClassifier,
    flow: FlowClassifier,
    funding: FundingClassifier,
    ctx: PipelineContext,
}

impl DailyPipeline {
    pub fn new(settings: Settings, ctx: PipelineContext) -> Self {
        Self {
            structure: StructureClassifier::new(settings.structure),
            macro_cycle: MacroClassifier::new(settings.macro_cycle),
            flow: FlowClassifier::new(settings.flow),
            funding: FundingClassifier::new(settings.funding),
            ctx,
        }
    }

    /// Run one full evaluation for `run_date`.
    ///
    /// Always returns a complete record; upstream failures degrade to the
    /// conservative defaults and are logged, never propagated. The run date
    /// is the only wall-clock-derived input, so identical source data
    /// yields an identical record.
    pub async fn run(&self, run_date: NaiveDate) -> DailySignal {
        info!(date = %run_date, "starting daily signal run");

        let (prices, flows, funding_rates, pmi) = tokio::join!(
            self.ctx.prices.fetch(),
            self.ctx.etf_flows.fetch(),
            self.ctx.funding.fetch(),
            self.ctx.pmi.fetch(),
        );

        let structure = match prices {
            Ok(series) => self.structure.classify(&series),
            Err(e) => {
                error!(error = %e, "BTC structure source failed, using fail-safe defaults");
                StructureSnapshot::fail_safe()
            }
        };

        let flow_regime = match flows {
            Ok(series) => self.flow.classify(&series),
            Err(e) => {
                warn!(error = %e, "ETF flow source failed, defaulting to mixed");
                self.flow.classify(&[])
            }
        };

        let funding_regime = match funding_rates {
            Ok(series) => self.funding.classify(&series),
            Err(e) => {
                warn!(error = %e, "funding source failed, defaulting to neutral");
                self.funding.classify(&[])
            }
        };

        let macro_snapshot = match pmi {
            Ok(series) => self.macro_cycle.classify(&series),
            Err(e) => {
                warn!(error = %e, "PMI source failed, defaulting macro regime to unclear");
                MacroSnapshot::fail_safe()
            }
        };

        if macro_snapshot.regime == MacroRegime::Unclear && macro_snapshot.metrics.is_none() {
            warn!("macro regime degraded: no PMI metrics this run");
        }

        let input = DecisionInput {
            macro_regime: macro_snapshot.regime,
            above_short: structure.above_short,
            above_long: structure.above_long,
            volatility: structure.volatility,
            flow: flow_regime,
            funding: funding_regime,
        };
        let final_action = decide_action(&input);

        info!(
            action = %final_action,
            macro_regime = %input.macro_regime,
            above_50dma = input.above_short,
            above_200dma = input.above_long,
            volatility = %input.volatility,
            etf_flow = %input.flow,
            funding = %input.funding,
            "daily signal decided"
        );

        DailySignal {
            date: run_date,
            macro_regime: macro_snapshot.regime,
            btc_structure: MarketStructure {
                above_50dma: structure.above_short,
                above_200dma: structure.above_long,
                volatility: structure.volatility,
            },
            institutional_flows: InstitutionalFlows {
                etf_flow_regime: flow_regime,
            },
            funding: Funding { funding_regime },
            pmi: macro_snapshot
                .metrics
                .map(PmiSection::from)
                .unwrap_or_else(PmiSection::unavailable),
            final_action,
        }
    }
}
