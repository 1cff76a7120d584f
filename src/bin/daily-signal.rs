//! Daily signal runner.
//!
//! Fetches all sources, fuses the regimes into one action, persists the
//! record, and optionally e-mails it. Always exits successfully with a
//! complete record unless persistence itself fails.

use chrono::Utc;
use dotenvy::dotenv;
use macrogate::config::{self, Settings};
use macrogate::core::pipeline::{DailyPipeline, PipelineContext};
use macrogate::logging;
use macrogate::output::writer::SignalWriter;
use macrogate::services::binance::FundingRateProvider;
use macrogate::services::coingecko::CoinGeckoProvider;
use macrogate::services::etf_flows::EtfFlowCsvProvider;
use macrogate::services::notify::EmailNotifier;
use macrogate::services::pmi::PmiCsvProvider;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    let env = config::get_environment();
    info!("Starting daily signal pipeline");
    info!(environment = %env, "Environment");

    let settings = Settings::default();
    let ctx = PipelineContext {
        prices: Arc::new(CoinGeckoProvider::new()),
        etf_flows: Arc::new(EtfFlowCsvProvider::new(config::get_etf_flow_csv())),
        funding: Arc::new(FundingRateProvider::new()),
        pmi: Arc::new(PmiCsvProvider::new(config::get_pmi_csv())),
    };

    let pipeline = DailyPipeline::new(settings, ctx);
    let today = Utc::now().date_naive();
    let signal = pipeline.run(today).await;

    let writer = SignalWriter::new(config::get_output_dir(), config::get_public_dir());
    let paths = writer.write(&signal)?;

    info!(action = %signal.final_action, "Final action");
    info!(
        archive = %paths.archive.display(),
        latest = %paths.latest.display(),
        "Output written"
    );

    if let Some(notifier) = EmailNotifier::from_env() {
        if let Err(e) = notifier.send_daily_signal(&signal).await {
            warn!(error = %e, "failed to send daily signal e-mail");
        }
    }

    info!("Daily pipeline completed successfully");
    Ok(())
}
