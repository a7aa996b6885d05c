use thiserror::Error;

use neuroreport_audiology::error::AudiologyError;
use neuroreport_extract::error::ExtractError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Audiology(#[from] AudiologyError),
}
