//! ResumeDocument: the aggregate of loaded text plus every extracted field.
//!
//! Construction never fails. The loader runs first, then the name, phone, year and
//! email extractors in that order. Skills are computed on demand and never stored.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::SkillMatchConfig;
use crate::extract::{
    extract_emails, extract_person_names, extract_phone_numbers, extract_skills, extract_years,
    SkillProfile,
};
use crate::loader::{DocumentFormat, DocxLoader, PdfLoader, TextLoader};
use crate::nlp::NlpToolkit;

/// Read-only snapshot of one parsed resume.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeDocument {
    file_path: PathBuf,
    raw_text: Option<String>,
    person_names: Vec<String>,
    phone_numbers: Vec<String>,
    years: Vec<i32>,
    email_addresses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_error: Option<String>,
}

impl ResumeDocument {
    pub fn from_pdf(path: impl AsRef<Path>, toolkit: &dyn NlpToolkit) -> Self {
        Self::from_loader(path, &PdfLoader, toolkit)
    }

    pub fn from_docx(path: impl AsRef<Path>, toolkit: &dyn NlpToolkit) -> Self {
        Self::from_loader(path, &DocxLoader, toolkit)
    }

    /// Loads with the loader for an explicitly chosen format.
    pub fn load(path: impl AsRef<Path>, format: DocumentFormat, toolkit: &dyn NlpToolkit) -> Self {
        Self::from_loader(path, format.loader().as_ref(), toolkit)
    }

    /// Runs `loader`, then every extractor over the resulting text. A loader error
    /// leaves the text absent and every field empty.
    pub fn from_loader(
        path: impl AsRef<Path>,
        loader: &dyn TextLoader,
        toolkit: &dyn NlpToolkit,
    ) -> Self {
        let file_path = path.as_ref().to_path_buf();

        let (raw_text, load_error) = match loader.load(&file_path) {
            Ok(text) => (text, None),
            Err(e) => {
                warn!(
                    path = %file_path.display(),
                    format = %loader.format(),
                    "Failed to load document: {e}"
                );
                (None, Some(e.to_string()))
            }
        };

        let text = raw_text.as_deref().unwrap_or_default();
        let person_names = extract_person_names(text, toolkit);
        let phone_numbers = extract_phone_numbers(text);
        let years = extract_years(text);
        let email_addresses = extract_emails(text);

        info!(
            path = %file_path.display(),
            loaded = raw_text.is_some(),
            names = person_names.len(),
            phones = phone_numbers.len(),
            years = years.len(),
            emails = email_addresses.len(),
            "Resume parsed"
        );

        Self {
            file_path,
            raw_text,
            person_names,
            phone_numbers,
            years,
            email_addresses,
            load_error,
        }
    }

    /// Matches the text against a profile vocabulary. Returns a fresh set per call.
    pub fn extract_skills(
        &self,
        profile: SkillProfile,
        toolkit: &dyn NlpToolkit,
        config: &SkillMatchConfig,
    ) -> BTreeSet<String> {
        extract_skills(self.text(), profile, toolkit, config)
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }

    /// The loaded text, or `""` when loading failed.
    pub fn text(&self) -> &str {
        self.raw_text.as_deref().unwrap_or_default()
    }

    pub fn person_names(&self) -> &[String] {
        &self.person_names
    }

    pub fn phone_numbers(&self) -> &[String] {
        &self.phone_numbers
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn email_addresses(&self) -> &[String] {
        &self.email_addresses
    }

    /// Why loading failed, when it did. `None` also covers "loaded but empty".
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}
