//! Persistence of daily records and report rendering.

pub mod report;
pub mod writer;

pub use writer::{SignalWriter, WrittenPaths};
