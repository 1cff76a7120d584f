//! Core application primitives (engines, orchestrators)

pub mod pipeline;

pub use pipeline::{DailyPipeline, PipelineContext};
