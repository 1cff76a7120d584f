//! Weekly report runner.
//!
//! Builds a weekly snapshot from the most recent daily records and renders
//! the plain-English markdown report.

use dotenvy::dotenv;
use macrogate::config;
use macrogate::logging;
use macrogate::output::report::run_weekly_report;
use macrogate::output::writer::SignalWriter;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    info!("Generating weekly report");

    let writer = SignalWriter::new(config::get_output_dir(), config::get_public_dir());
    let paths = run_weekly_report(&writer, &config::get_report_dir())?;

    info!(context = %paths.context.display(), "Weekly context written");
    info!(report = %paths.report.display(), "Weekly report written");
    Ok(())
}
