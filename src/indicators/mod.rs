pub mod trend;
pub mod volatility;
