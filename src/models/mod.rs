//! Shared data models spanning the engine layers.

pub mod regime;
pub mod series;
pub mod signal;

pub use regime::{Action, FlowRegime, FundingRegime, MacroRegime, PmiTrend, VolatilityRegime};
pub use series::{IndicatorPoint, PricePoint};
pub use signal::{DailySignal, Funding, InstitutionalFlows, MarketStructure, PmiMetrics, PmiSection};
