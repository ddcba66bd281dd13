use thiserror::Error;

/// Parser-level error type.
///
/// Loaders return these, but `ResumeDocument` never surfaces them from construction:
/// a failed load degrades to absent text and the message is kept for diagnostics.
#[derive(Debug, Error)]
pub enum ParserError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("DOCX extraction error: {0}")]
    Docx(String),

    #[error("Unrecognized skill profile '{0}' (expected 'aws' or 'azure')")]
    UnknownProfile(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
}

impl From<zip::result::ZipError> for ParserError {
    fn from(e: zip::result::ZipError) -> Self {
        ParserError::Docx(e.to_string())
    }
}

impl From<quick_xml::Error> for ParserError {
    fn from(e: quick_xml::Error) -> Self {
        ParserError::Docx(format!("malformed document XML: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
