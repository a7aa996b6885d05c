use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::audiogram::{
    AsymmetryReport, AudiogramData, CompatibilityReport, Ear, HearingSeverity,
};
use crate::models::metric::Metric;
use crate::models::tier::RiskTier;

/// Error text returned when no usable text could be read from a document.
pub const EXTRACTION_FAILED: &str = "Could not extract text from PDF";

/// How the Discussion section is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiscussionMode {
    /// One line per metric with reference values, then audiogram blocks and
    /// per-metric clinical significance.
    #[default]
    Itemized,
    /// Prose paragraph of abnormal findings and their implications.
    Implications,
}

impl fmt::Display for DiscussionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscussionMode::Itemized => f.write_str("itemized"),
            DiscussionMode::Implications => f.write_str("implications"),
        }
    }
}

impl FromStr for DiscussionMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "itemized" => Ok(DiscussionMode::Itemized),
            "implications" => Ok(DiscussionMode::Implications),
            _ => Err(CoreError::UnknownDiscussionMode(s.to_string())),
        }
    }
}

/// A clinician-stated interpretation set against the generated tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretationComparison {
    pub metric: Metric,
    pub stated: String,
    pub generated: Option<RiskTier>,
    pub agrees: bool,
}

/// Everything produced for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtractionResult {
    pub generated_study_findings: String,
    pub generated_study_discussion: String,
    pub extracted_values: BTreeMap<Metric, f64>,
    pub clinical_interpretations: BTreeMap<Metric, RiskTier>,
    pub audiogram_data: Option<AudiogramData>,
    pub audiogram_interpretations: BTreeMap<Ear, BTreeMap<u32, HearingSeverity>>,
    pub compatibility: Option<CompatibilityReport>,
    pub asymmetry_analysis: Option<AsymmetryReport>,
    /// Interpretations stated in the document's own "Study Discussion".
    pub original_interpretations: BTreeMap<Metric, String>,
    pub interpretation_comparisons: Vec<InterpretationComparison>,
}

/// Outcome of processing one document.
///
/// A failure serializes as `{"error": "..."}` and carries nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ProcessOutcome {
    Complete(Box<ExtractionResult>),
    Failed { error: String },
}

impl ProcessOutcome {
    pub fn extraction_failed() -> Self {
        ProcessOutcome::Failed {
            error: EXTRACTION_FAILED.to_string(),
        }
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        match self {
            ProcessOutcome::Complete(result) => Some(result),
            ProcessOutcome::Failed { .. } => None,
        }
    }

    pub fn into_result(self) -> Option<ExtractionResult> {
        match self {
            ProcessOutcome::Complete(result) => Some(*result),
            ProcessOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ProcessOutcome::Failed { .. })
    }
}
