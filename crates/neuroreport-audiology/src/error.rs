use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudiologyError {
    #[error("failed to read audiogram: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid audiogram JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("negative hearing threshold {htl}dB at {frequency}Hz")]
    NegativeThreshold { frequency: u32, htl: f64 },

    #[error("audiogram has no ear data")]
    Empty,
}
