//! Skill matcher: finds vocabulary skills (single words, bigrams, trigrams) in resume text.
//!
//! Algorithm:
//! 1. Word-tokenize the text and keep word tokens (alphanumeric with at least one letter).
//! 2. Optionally drop stopwords (see `SkillMatchConfig::filter_stopwords`).
//! 3. Build every 2- and 3-token n-gram from what remains.
//! 4. Any token or n-gram whose lowercase form is in the profile vocabulary is
//!    reported in its original casing.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SkillMatchConfig;
use crate::errors::ParserError;
use crate::nlp::{everygrams, NlpToolkit};

const AWS_SKILLS: &[&str] = &[
    "aws",
    "kubernetes",
    "eks",
    "containers",
    "docker",
    "s3",
    "rds",
    "vpc",
    "subnet",
    "cloudwatch",
    "cloudtrail",
    "terraform",
    "jenkins",
];

const AZURE_SKILLS: &[&str] = &[
    "Azure",
    "Kubernetes",
    "AKS",
    "Containers",
    "Docker",
    "VNET",
    "Firewall",
    "AppGateway",
    "Application Gateway",
    "Azure Monitor",
    "Monitor",
    "Log Analytics",
    "LogAnalytics",
    "Terraform",
    "Azure DevOps",
];

/// Selects the fixed vocabulary to match against. The set is closed:
/// unknown keys are rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillProfile {
    Aws,
    Azure,
}

impl SkillProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillProfile::Aws => "aws",
            SkillProfile::Azure => "azure",
        }
    }

    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            SkillProfile::Aws => AWS_SKILLS,
            SkillProfile::Azure => AZURE_SKILLS,
        }
    }

    fn lowercase_vocabulary(&self) -> HashSet<String> {
        self.vocabulary().iter().map(|s| s.to_lowercase()).collect()
    }
}

impl FromStr for SkillProfile {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aws" => Ok(SkillProfile::Aws),
            "azure" => Ok(SkillProfile::Azure),
            _ => Err(ParserError::UnknownProfile(s.to_string())),
        }
    }
}

impl fmt::Display for SkillProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the matched skills in their original casing. Stateless: repeated calls
/// with the same inputs give the same set.
pub fn extract_skills(
    text: &str,
    profile: SkillProfile,
    toolkit: &dyn NlpToolkit,
    config: &SkillMatchConfig,
) -> BTreeSet<String> {
    let mut tokens: Vec<String> = toolkit
        .word_tokenize(text)
        .into_iter()
        .filter(|t| is_word_token(t))
        .collect();

    if config.filter_stopwords {
        let stopwords = toolkit.stopwords(&config.language);
        tokens.retain(|t| !stopwords.contains(&t.to_lowercase()));
    }

    let vocabulary = profile.lowercase_vocabulary();
    let mut found = BTreeSet::new();

    for token in &tokens {
        if vocabulary.contains(&token.to_lowercase()) {
            found.insert(token.clone());
        }
    }
    for gram in everygrams(&tokens, 2, 3) {
        let phrase = gram.join(" ");
        if vocabulary.contains(&phrase.to_lowercase()) {
            found.insert(phrase);
        }
    }

    debug!(profile = %profile, tokens = tokens.len(), matched = found.len(), "Skill matching done");
    found
}

/// Alphanumeric with at least one letter: keeps `S3`, drops `2019` and punctuation.
fn is_word_token(token: &str) -> bool {
    token.chars().all(char::is_alphanumeric) && token.chars().any(char::is_alphabetic)
}
