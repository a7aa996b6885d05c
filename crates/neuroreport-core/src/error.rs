use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    #[error("unknown discussion mode: {0}")]
    UnknownDiscussionMode(String),
}
