//! Picks the text and audiogram collaborators for a run.

use std::path::Path;

use neuroreport_audiology::source::{AudiogramSource, EstimatedAudiogram, FixedAudiogram, NoAudiogram};
use neuroreport_extract::source::{PlainTextSource, TextSource, source_for_extension};
use neuroreport_pipeline::error::PipelineError;

use crate::config::AudiogramMode;

/// Text source by file extension, or plain text when `force_text` is set.
pub fn text_source_for(path: &Path, force_text: bool) -> Result<Box<dyn TextSource>, PipelineError> {
    if force_text {
        return Ok(Box::new(PlainTextSource));
    }
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    Ok(source_for_extension(ext)?)
}

/// Audiogram source for a run. An explicit file wins over `disabled`,
/// which wins over the configured mode.
pub fn audiogram_source(
    file: Option<&Path>,
    disabled: bool,
    seed: Option<u64>,
    mode: AudiogramMode,
) -> Result<Box<dyn AudiogramSource>, PipelineError> {
    if let Some(path) = file {
        return Ok(Box::new(FixedAudiogram::from_path(path)?));
    }
    if disabled {
        return Ok(Box::new(NoAudiogram));
    }
    Ok(match (mode, seed) {
        (AudiogramMode::None, _) => Box::new(NoAudiogram),
        (AudiogramMode::Estimated, Some(seed)) => Box::new(EstimatedAudiogram::seeded(seed)),
        (AudiogramMode::Estimated, None) => Box::new(EstimatedAudiogram::new()),
    })
}
