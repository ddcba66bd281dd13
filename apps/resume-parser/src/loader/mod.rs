//! Text loaders: format-specific adapters that turn a source document into plain text.
//!
//! Both variants share the `TextLoader` contract. The caller picks the variant;
//! there is no content sniffing.

pub mod docx;
pub mod pdf;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ParserError, Result};

pub use docx::DocxLoader;
pub use pdf::PdfLoader;

/// Produces text from a document on disk.
///
/// `Ok(None)` means the collaborator ran but yielded nothing. Errors are reserved for
/// unreadable or malformed sources; `ResumeDocument` folds both cases into absent text.
pub trait TextLoader: Send + Sync {
    fn format(&self) -> DocumentFormat;

    fn load(&self, path: &Path) -> Result<Option<String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Picks a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse::<DocumentFormat>().map_err(|_| {
            ParserError::UnsupportedFormat(format!(
                "cannot infer format from '{}' (expected .pdf or .docx)",
                path.display()
            ))
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }

    pub fn loader(&self) -> Box<dyn TextLoader> {
        match self {
            DocumentFormat::Pdf => Box::new(PdfLoader),
            DocumentFormat::Docx => Box::new(DocxLoader),
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            other => Err(ParserError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
