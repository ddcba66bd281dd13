//! PDF text extraction wrapper around the `pdf-extract` crate.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::debug;

use super::{DocumentFormat, TextLoader};
use crate::errors::{ParserError, Result};

pub struct PdfLoader;

impl TextLoader for PdfLoader {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    /// Returns whatever text the extractor yields, including an empty string.
    fn load(&self, path: &Path) -> Result<Option<String>> {
        let bytes = std::fs::read(path)?;
        let text = extract_text_from_bytes(&bytes).map_err(|e| {
            ParserError::Pdf(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!(path = %path.display(), chars = text.len(), "PDF text extracted");
        Ok(Some(text))
    }
}

/// Runs `pdf-extract` over raw bytes. The crate panics on some malformed inputs,
/// so the unwind is caught and turned into an error.
///
/// The panic hook is process-global and is left untouched: the default hook still
/// prints the panic message to stderr before the error comes back.
pub fn extract_text_from_bytes(bytes: &[u8]) -> std::result::Result<String, String> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err("extractor aborted on malformed input".to_string()),
    }
}
