use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::extract::SkillProfile;

/// Skill-matching settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatchConfig {
    /// Stopword language handed to the NLP toolkit.
    pub language: String,
    /// Drop stopwords before building n-grams. Off by default.
    pub filter_stopwords: bool,
}

impl Default for SkillMatchConfig {
    fn default() -> Self {
        Self {
            language: "english".to_string(),
            filter_stopwords: false,
        }
    }
}

/// Configuration loaded from environment variables (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// Raw `RESUME_PARSER_PROFILE`; validated by `default_profile` only when needed.
    pub profile: Option<String>,
    pub skills: SkillMatchConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = lookup("RESUME_PARSER_PROFILE").filter(|v| !v.trim().is_empty());

        let filter_stopwords = match lookup("RESUME_PARSER_FILTER_STOPWORDS") {
            Some(v) => parse_bool(&v)
                .context("RESUME_PARSER_FILTER_STOPWORDS must be a boolean")?,
            None => false,
        };

        Ok(Config {
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            profile,
            skills: SkillMatchConfig {
                language: lookup("RESUME_PARSER_LANGUAGE")
                    .unwrap_or_else(|| "english".to_string()),
                filter_stopwords,
            },
        })
    }

    /// Parses the environment's profile key. Callers with a CLI override skip this.
    pub fn default_profile(&self) -> Result<Option<SkillProfile>> {
        self.profile
            .as_deref()
            .map(str::parse::<SkillProfile>)
            .transpose()
            .context("RESUME_PARSER_PROFILE must be 'aws' or 'azure'")
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("'{other}' is not a boolean"),
    }
}
