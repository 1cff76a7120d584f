//! Weekly plain-English markdown report built from recent daily records.

use crate::models::signal::{DailySignal, Funding, InstitutionalFlows, MarketStructure};
use crate::models::regime::{Action, MacroRegime};
use crate::output::writer::SignalWriter;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Days of daily records included in a weekly snapshot.
const WEEKLY_WINDOW_DAYS: usize = 7;

/// Snapshot persisted alongside the rendered report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyContext {
    pub week_ending: NaiveDate,
    pub macro_regime: MacroRegime,
    pub btc_structure: MarketStructure,
    pub institutional_flows: InstitutionalFlows,
    pub funding: Funding,
    pub final_action: Action,
    pub days_included: usize,
}

/// Build the weekly context from the latest available daily record.
pub fn build_weekly_context(
    daily: &[DailySignal],
) -> Result<WeeklyContext, Box<dyn std::error::Error + Send + Sync>> {
    let latest = daily.last().ok_or_else(|| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no daily records available for weekly report",
        )) as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(WeeklyContext {
        week_ending: latest.date,
        macro_regime: latest.macro_regime,
        btc_structure: latest.btc_structure,
        institutional_flows: latest.institutional_flows,
        funding: latest.funding,
        final_action: latest.final_action,
        days_included: daily.len(),
    })
}

/// Render the weekly context as a markdown report.
pub fn render_weekly_report(context: &WeeklyContext) -> String {
    let yes_no = |b: bool| if b { "YES" } else { "NO" };
    let macro_title = context
        .macro_regime
        .as_str()
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines: Vec<String> = Vec::new();
    lines.push("# Weekly Bitcoin Intelligence".to_string());
    lines.push(format!("**Week Ending:** {}", context.week_ending));
    lines.push(String::new());

    lines.push("## Macro Environment".to_string());
    lines.push(format!(
        "The macro regime is currently **{}**. This regime determines how much risk the system is allowed to take.",
        macro_title
    ));
    lines.push(String::new());

    lines.push("## Market Structure".to_string());
    lines.push(format!(
        "- Above 50-day moving average: **{}**",
        yes_no(context.btc_structure.above_50dma)
    ));
    lines.push(format!(
        "- Above 200-day moving average: **{}**",
        yes_no(context.btc_structure.above_200dma)
    ));
    lines.push(format!(
        "- Volatility regime: **{}**",
        context.btc_structure.volatility.as_str().to_uppercase()
    ));
    lines.push(String::new());

    lines.push("## Institutional Activity".to_string());
    lines.push(format!(
        "- ETF flow regime: **{}**",
        context
            .institutional_flows
            .etf_flow_regime
            .as_str()
            .to_uppercase()
    ));
    lines.push(format!(
        "- Funding rate regime: **{}**",
        context.funding.funding_regime.as_str().to_uppercase()
    ));
    lines.push(String::new());

    lines.push("## System Decision".to_string());
    lines.push(format!("**Recommended Action:** **{}**", context.final_action));
    lines.push(String::new());

    let narrative = match context.final_action {
        Action::Add => {
            "Conditions are constructive. The system allows adding exposure within predefined risk limits."
        }
        Action::Trim => "Risk conditions are elevated. The system recommends reducing exposure.",
        Action::Hold => {
            "Signals are mixed or unclear. The system recommends holding current exposure and waiting for confirmation."
        }
    };
    lines.push(narrative.to_string());
    lines.push(String::new());
    lines.push(
        "_This is a rules-based system. Macro conditions always take priority over short-term signals._"
            .to_string(),
    );

    lines.join("\n")
}

/// Generated weekly artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyPaths {
    pub context: PathBuf,
    pub report: PathBuf,
}

/// Load recent daily records, persist the weekly context, and render the
/// markdown report into `report_dir`.
pub fn run_weekly_report(
    writer: &SignalWriter,
    report_dir: &Path,
) -> Result<WeeklyPaths, Box<dyn std::error::Error + Send + Sync>> {
    let daily = writer.load_recent(WEEKLY_WINDOW_DAYS)?;
    let context = build_weekly_context(&daily)?;

    fs::create_dir_all(report_dir)?;

    let context_path = report_dir.join(format!("weekly_context_{}.json", context.week_ending));
    fs::write(&context_path, serde_json::to_string_pretty(&context)?)?;

    let report_path = report_dir.join(format!("weekly_report_{}.md", context.week_ending));
    fs::write(&report_path, render_weekly_report(&context))?;

    Ok(WeeklyPaths {
        context: context_path,
        report: report_path,
    })
}
