//! Data providers and outbound integrations.

pub mod binance;
pub mod coingecko;
pub mod etf_flows;
pub mod market_data;
pub mod notify;
pub mod pmi;

pub use market_data::{IndicatorSeriesProvider, PriceSeriesProvider};
