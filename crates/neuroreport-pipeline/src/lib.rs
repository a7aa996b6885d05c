//! neuroreport-pipeline
//!
//! Turns one report document into an [`ExtractionResult`]: text, metric
//! values, risk tiers, audiogram analysis, narrative, and a comparison with
//! the interpretations the report itself states.
//!
//! [`ExtractionResult`]: neuroreport_core::models::result::ExtractionResult

pub mod error;
pub mod processor;
pub mod qa;

pub use processor::{ProcessorConfig, ReportProcessor};
