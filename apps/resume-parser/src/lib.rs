//! Resume field extraction.
//!
//! Pulls person names, phone numbers, email addresses, month-year mentions and
//! profile-specific skills out of PDF and DOCX resumes.
//!
//! ```text
//! file ─► TextLoader (pdf | docx) ─► text ─► extractors ─► ResumeDocument
//!                                                 ▲
//!                                          NlpToolkit (injected)
//! ```
//!
//! ```no_run
//! use resume_parser::{ResumeDocument, RuleBasedToolkit, SkillMatchConfig, SkillProfile};
//!
//! let toolkit = RuleBasedToolkit::new();
//! let resume = ResumeDocument::from_pdf("jane_doe.pdf", &toolkit);
//! println!("{:?} {:?}", resume.person_names(), resume.email_addresses());
//!
//! let skills = resume.extract_skills(SkillProfile::Aws, &toolkit, &SkillMatchConfig::default());
//! println!("{skills:?}");
//! ```

pub mod config;
pub mod document;
pub mod errors;
pub mod extract;
pub mod loader;
pub mod nlp;

pub use config::{Config, SkillMatchConfig};
pub use document::ResumeDocument;
pub use errors::ParserError;
pub use extract::SkillProfile;
pub use loader::{DocumentFormat, DocxLoader, PdfLoader, TextLoader};
pub use nlp::{NlpToolkit, RuleBasedToolkit};
