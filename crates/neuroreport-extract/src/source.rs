//! Document-to-text collaborators.

use std::panic::{self, UnwindSafe};

use tracing::{info, warn};

use crate::error::ExtractError;

/// Turns a document into plain text.
pub trait TextSource: Send + Sync {
    fn extract_text(&self, document: &[u8]) -> Result<String, ExtractError>;
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn extract_text(&self, document: &[u8]) -> Result<String, ExtractError> {
        (**self).extract_text(document)
    }
}

/// PDF text extractor using the pdf-extract crate.
/// Handles digital PDFs with embedded text layers.
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn extract_text(&self, document: &[u8]) -> Result<String, ExtractError> {
        let text = catch_parser_panic(|| {
            pdf_extract::extract_text_from_mem(document)
                .map_err(|e| ExtractError::PdfParsing(e.to_string()))
        })?;
        info!(text_len = text.len(), "pdf text extraction complete");
        Ok(text)
    }
}

/// Run a third-party parser, turning a panic inside it into
/// [`ExtractError::PdfParsing`]. pdf-extract panics on some malformed
/// fonts and encodings instead of returning an error.
pub fn catch_parser_panic<T>(
    parse: impl FnOnce() -> Result<T, ExtractError> + UnwindSafe,
) -> Result<T, ExtractError> {
    panic::catch_unwind(parse).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "parser panicked".to_string());
        warn!(%message, "pdf parser panicked");
        Err(ExtractError::PdfParsing(message))
    })
}

/// Documents that are already text. Invalid UTF-8 is replaced, not rejected.
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn extract_text(&self, document: &[u8]) -> Result<String, ExtractError> {
        Ok(String::from_utf8_lossy(document).into_owned())
    }
}

/// Pick a text source for a file extension.
pub fn source_for_extension(ext: &str) -> Result<Box<dyn TextSource>, ExtractError> {
    match ext.to_lowercase().as_str() {
        "pdf" => Ok(Box::new(PdfTextSource)),
        "txt" | "text" => Ok(Box::new(PlainTextSource)),
        other => Err(ExtractError::UnsupportedFormat(other.to_string())),
    }
}
