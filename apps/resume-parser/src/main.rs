use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_parser::{
    Config, DocumentFormat, ResumeDocument, RuleBasedToolkit, SkillProfile,
};

/// Extract names, phone numbers, emails, years and skills from a resume.
#[derive(Debug, Parser)]
#[command(name = "resume-parser")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Resume file (.pdf or .docx)
    file: PathBuf,

    /// Document format; inferred from the file extension when omitted
    #[arg(short, long, value_enum)]
    format: Option<CliFormat>,

    /// Skill profile to match (aws, azure); falls back to RESUME_PARSER_PROFILE
    #[arg(short, long)]
    profile: Option<String>,

    /// Drop stopwords before matching skills; `--filter-stopwords=false` overrides the environment
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    filter_stopwords: Option<bool>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Pdf,
    Docx,
}

impl From<CliFormat> for DocumentFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Pdf => DocumentFormat::Pdf,
            CliFormat::Docx => DocumentFormat::Docx,
        }
    }
}

#[derive(Debug, Serialize)]
struct ParseOutput<'a> {
    #[serde(flatten)]
    resume: &'a ResumeDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<SkillProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skills: Option<BTreeSet<String>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the JSON record.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_parser={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = match cli.format {
        Some(format) => format.into(),
        None => DocumentFormat::from_path(&cli.file)?,
    };
    let profile = match cli.profile.as_deref() {
        Some(key) => Some(
            key.parse::<SkillProfile>()
                .with_context(|| format!("invalid --profile '{key}'"))?,
        ),
        None => config.default_profile()?,
    };
    let mut skill_config = config.skills.clone();
    if let Some(filter) = cli.filter_stopwords {
        skill_config.filter_stopwords = filter;
    }

    info!(
        "Parsing {} as {format} (resume-parser v{})",
        cli.file.display(),
        env!("CARGO_PKG_VERSION")
    );

    let toolkit = RuleBasedToolkit::new();
    let resume = ResumeDocument::load(&cli.file, format, &toolkit);
    let skills = profile.map(|p| resume.extract_skills(p, &toolkit, &skill_config));

    let output = ParseOutput {
        resume: &resume,
        profile,
        skills,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to serialize resume")?
    );

    Ok(())
}
