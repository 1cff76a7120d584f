//! Institutional ETF flow classifier.

use crate::common::math;
use crate::config::FlowConfig;
use crate::models::regime::FlowRegime;
use crate::models::series::IndicatorPoint;

pub struct FlowClassifier {
    cfg: FlowConfig,
}

impl FlowClassifier {
    pub fn new(cfg: FlowConfig) -> Self {
        Self { cfg }
    }

    /// Classify net flows over the trailing window. A series shorter than
    /// the window is "mixed" regardless of its values.
    pub fn classify(&self, points: &[IndicatorPoint]) -> FlowRegime {
        if points.len() < self.cfg.window {
            return FlowRegime::Mixed;
        }

        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        match math::trailing_mean(&values, self.cfg.window) {
            Some(avg) if avg > 0.0 => FlowRegime::Positive,
            Some(avg) if avg < 0.0 => FlowRegime::Negative,
            _ => FlowRegime::Mixed,
        }
    }
}
