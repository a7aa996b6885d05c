use std::collections::BTreeMap;
use std::path::Path;

use tracing::{info, warn};

use neuroreport_audiology::analyzer::{analyze_asymmetry, check_compatibility, interpret_audiogram};
use neuroreport_audiology::source::{AudiogramSource, mentions_hearing_test};
use neuroreport_core::models::metric::Metric;
use neuroreport_core::models::result::{DiscussionMode, ExtractionResult, ProcessOutcome};
use neuroreport_core::models::tier::RiskTier;
use neuroreport_extract::discussion::{original_discussion, stated_interpretations};
use neuroreport_extract::error::ExtractError;
use neuroreport_extract::source::TextSource;
use neuroreport_extract::values::extract_all_values;
use neuroreport_instruments::classify::classify_metric;
use neuroreport_narrative::{
    DEFAULT_DEVICE_NAME, NarrativeInput, render_discussion, render_findings,
};

use crate::error::PipelineError;
use crate::qa::compare_interpretations;

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorConfig {
    pub discussion_mode: DiscussionMode,
    /// Test device named in hearing-compatibility statements.
    pub device_name: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            discussion_mode: DiscussionMode::default(),
            device_name: DEFAULT_DEVICE_NAME.to_string(),
        }
    }
}

/// Processes report documents. Holds no per-document state, so one
/// processor can serve any number of documents.
pub struct ReportProcessor<T, A> {
    text_source: T,
    audiogram_source: A,
    config: ProcessorConfig,
}

impl<T: TextSource, A: AudiogramSource> ReportProcessor<T, A> {
    pub fn new(text_source: T, audiogram_source: A, config: ProcessorConfig) -> Self {
        Self {
            text_source,
            audiogram_source,
            config,
        }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Read and process the document at `path`.
    pub fn process_file(&self, path: &Path) -> Result<ProcessOutcome, PipelineError> {
        let document = std::fs::read(path)?;
        info!(path = %path.display(), bytes = document.len(), "processing document");
        Ok(self.process(&document))
    }

    /// Process a raw document. Text that cannot be read, or that is blank,
    /// yields [`ProcessOutcome::Failed`] and nothing else.
    pub fn process(&self, document: &[u8]) -> ProcessOutcome {
        match self.read_text(document) {
            Ok(text) => self.process_text(&text),
            Err(e) => {
                warn!(error = %e, "text extraction failed");
                ProcessOutcome::extraction_failed()
            }
        }
    }

    fn read_text(&self, document: &[u8]) -> Result<String, ExtractError> {
        let text = self.text_source.extract_text(document)?;
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyText);
        }
        Ok(text)
    }

    /// Process already-extracted report text.
    pub fn process_text(&self, text: &str) -> ProcessOutcome {
        if text.trim().is_empty() {
            warn!("document has no text");
            return ProcessOutcome::extraction_failed();
        }

        let values = extract_all_values(text);
        let tiers: BTreeMap<Metric, RiskTier> = values
            .iter()
            .map(|(metric, value)| (*metric, classify_metric(*metric, *value)))
            .collect();

        let audiogram = if mentions_hearing_test(text) {
            self.audiogram_source
                .provide(text)
                .filter(|data| !data.is_empty())
        } else {
            None
        };
        let audiogram_interpretations = audiogram
            .as_ref()
            .map(interpret_audiogram)
            .unwrap_or_default();
        let compatibility = audiogram.as_ref().map(check_compatibility);
        let asymmetry = audiogram.as_ref().and_then(analyze_asymmetry);

        let input = NarrativeInput {
            values: &values,
            interpretations: &tiers,
            audiogram: audiogram.as_ref(),
            compatibility: compatibility.as_ref(),
            asymmetry: asymmetry.as_ref(),
            device_name: &self.config.device_name,
        };
        let findings = render_findings(&input);
        let discussion = render_discussion(self.config.discussion_mode, &input);

        let original_interpretations = original_discussion(text)
            .map(stated_interpretations)
            .unwrap_or_default();
        let interpretation_comparisons = compare_interpretations(&original_interpretations, &tiers);

        info!(
            metrics = values.len(),
            abnormal = tiers.values().filter(|t| t.is_abnormal()).count(),
            audiogram = audiogram.is_some(),
            stated = original_interpretations.len(),
            "processed report"
        );

        ProcessOutcome::Complete(Box::new(ExtractionResult {
            generated_study_findings: findings,
            generated_study_discussion: discussion,
            extracted_values: values,
            clinical_interpretations: tiers,
            audiogram_data: audiogram,
            audiogram_interpretations,
            compatibility,
            asymmetry_analysis: asymmetry,
            original_interpretations,
            interpretation_comparisons,
        }))
    }
}
