use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("unsupported document type: {0}")]
    UnsupportedFormat(String),

    #[error("document contains no text")]
    EmptyText,
}
