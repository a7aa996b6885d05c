//! neuroreport-narrative
//!
//! Renders the "Findings" and "Discussion" sections of a study summary
//! from classified metrics and audiogram analysis. Every sentence comes
//! from a small pure function so each clinical claim can be checked on its
//! own.

pub mod discussion;
pub mod findings;
pub mod grammar;

use std::collections::BTreeMap;

use neuroreport_core::models::audiogram::{AsymmetryReport, AudiogramData, CompatibilityReport};
use neuroreport_core::models::metric::Metric;
use neuroreport_core::models::result::DiscussionMode;
use neuroreport_core::models::tier::RiskTier;

/// Device named in compatibility statements when none is configured.
pub const DEFAULT_DEVICE_NAME: &str = "COGNISION";

/// Sentence used for a study with nothing abnormal.
pub const NORMAL_STUDY: &str =
    "This is a normal study with all measured parameters within expected ranges.";

/// Everything the renderers read.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeInput<'a> {
    pub values: &'a BTreeMap<Metric, f64>,
    pub interpretations: &'a BTreeMap<Metric, RiskTier>,
    pub audiogram: Option<&'a AudiogramData>,
    pub compatibility: Option<&'a CompatibilityReport>,
    pub asymmetry: Option<&'a AsymmetryReport>,
    pub device_name: &'a str,
}

impl<'a> NarrativeInput<'a> {
    pub fn new(
        values: &'a BTreeMap<Metric, f64>,
        interpretations: &'a BTreeMap<Metric, RiskTier>,
    ) -> Self {
        Self {
            values,
            interpretations,
            audiogram: None,
            compatibility: None,
            asymmetry: None,
            device_name: DEFAULT_DEVICE_NAME,
        }
    }

    /// Metrics classified as `tier`, in report order.
    pub fn metrics_with(&self, tier: RiskTier) -> Vec<Metric> {
        self.interpretations
            .iter()
            .filter(|(_, t)| **t == tier)
            .map(|(m, _)| *m)
            .collect()
    }
}

pub fn render_findings(input: &NarrativeInput<'_>) -> String {
    findings::generate_findings(input)
}

pub fn render_discussion(mode: DiscussionMode, input: &NarrativeInput<'_>) -> String {
    match mode {
        DiscussionMode::Itemized => discussion::itemized::generate(input),
        DiscussionMode::Implications => discussion::implications::generate(input),
    }
}
