//! Daily signal e-mail notification via the SendGrid mail API.
//!
//! Enabled only when credentials are configured; a send failure is logged
//! by the caller and never fails the run.

use crate::models::signal::DailySignal;
use serde_json::json;
use std::env;
use std::time::Duration;
use tracing::info;

const SENDGRID_URL: &str = "https://api.sendgrid.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

pub struct EmailNotifier {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    from: String,
    to: Vec<String>,
}

impl EmailNotifier {
    /// Build a notifier from `SENDGRID_API_KEY`, `EMAIL_FROM`, and
    /// `EMAIL_TO` (comma-separated). `None` when any of them is unset.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("SENDGRID_API_KEY").ok()?;
        let from = env::var("EMAIL_FROM").ok()?;
        let to: Vec<String> = env::var("EMAIL_TO")
            .ok()?
            .split(',')
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if to.is_empty() {
            return None;
        }
        Some(Self::new(SENDGRID_URL.to_string(), api_key, from, to))
    }

    pub fn new(base_url: String, api_key: String, from: String, to: Vec<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url,
            api_key,
            from,
            to,
        }
    }

    pub fn build_subject(signal: &DailySignal) -> String {
        format!("Daily Signal — {} ({})", signal.final_action, signal.date)
    }

    pub fn build_body(signal: &DailySignal) -> String {
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        let pmi_avg = signal
            .pmi
            .pmi_3m_avg
            .map(|v| v.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        let pmi_trend = signal
            .pmi
            .pmi_trend
            .map(|t| t.as_str().to_string())
            .unwrap_or_else(|| "n/a".to_string());

        format!(
            "Daily Bitcoin Signal\n\n\
             Date: {}\n\
             Macro Regime: {}\n\n\
             BTC Structure\n\
             - Above 50 DMA: {}\n\
             - Above 200 DMA: {}\n\
             - Volatility: {}\n\n\
             Institutional Flows\n\
             - ETF Flow Regime: {}\n\n\
             Funding\n\
             - Funding Regime: {}\n\n\
             PMI\n\
             - 3M Avg: {}\n\
             - Trend: {}\n\n\
             FINAL ACTION: {}\n",
            signal.date,
            signal.macro_regime,
            yes_no(signal.btc_structure.above_50dma),
            yes_no(signal.btc_structure.above_200dma),
            signal.btc_structure.volatility,
            signal.institutional_flows.etf_flow_regime,
            signal.funding.funding_regime,
            pmi_avg,
            pmi_trend,
            signal.final_action,
        )
    }

    /// Send the daily signal to every configured recipient.
    pub async fn send_daily_signal(
        &self,
        signal: &DailySignal,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let subject = Self::build_subject(signal);
        let body = Self::build_body(signal);

        let payload = json!({
            "personalizations": [{
                "to": self.to.iter().map(|e| json!({ "email": e })).collect::<Vec<_>>(),
                "subject": subject,
            }],
            "from": { "email": self.from },
            "content": [{ "type": "text/plain", "value": body }],
        });

        self.client
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        info!(recipients = self.to.len(), "daily signal e-mail sent");
        Ok(())
    }
}
