//! NLP toolkit: the injectable collaborator behind name extraction and skill matching.
//!
//! Callers construct a toolkit once and pass it by reference into the extractors.
//! Nothing here initialises global state on load.
//!
//! Default: `RuleBasedToolkit` (pure-Rust, deterministic, no model files).

pub mod rule_based;
pub mod stopwords;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use rule_based::RuleBasedToolkit;

/// A token paired with its part-of-speech tag (Penn Treebank style).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Organization,
    Gpe,
}

/// A contiguous span of tagged tokens grouped under one entity label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityChunk {
    pub label: EntityLabel,
    pub leaves: Vec<TaggedToken>,
}

impl EntityChunk {
    /// Leaf tokens joined with single spaces.
    pub fn joined(&self) -> String {
        self.leaves
            .iter()
            .map(|leaf| leaf.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One node of a chunked sentence: either a bare token or a labelled entity span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChunkNode {
    Token(TaggedToken),
    Entity(EntityChunk),
}

/// The NLP collaborator. Implement this to swap backends without touching the
/// extractors or `ResumeDocument`.
pub trait NlpToolkit: Send + Sync {
    fn sentence_tokenize(&self, text: &str) -> Vec<String>;

    fn word_tokenize(&self, text: &str) -> Vec<String>;

    fn pos_tag(&self, tokens: &[String]) -> Vec<TaggedToken>;

    fn ne_chunk(&self, tagged: Vec<TaggedToken>) -> Vec<ChunkNode>;

    /// Stopwords for `language`. Unsupported languages yield an empty set.
    fn stopwords(&self, language: &str) -> HashSet<String>;
}

/// All contiguous n-grams with `min_n <= n <= max_n`, shortest first.
/// `min_n` of zero is treated as one.
pub fn everygrams(tokens: &[String], min_n: usize, max_n: usize) -> Vec<&[String]> {
    (min_n.max(1)..=max_n)
        .flat_map(|n| tokens.windows(n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_everygrams_bigrams_and_trigrams() {
        let tokens = words("Azure DevOps pipelines");
        let grams: Vec<String> = everygrams(&tokens, 2, 3)
            .into_iter()
            .map(|g| g.join(" "))
            .collect();
        assert_eq!(
            grams,
            vec![
                "Azure DevOps".to_string(),
                "DevOps pipelines".to_string(),
                "Azure DevOps pipelines".to_string(),
            ]
        );
    }

    #[test]
    fn test_everygrams_short_input() {
        let tokens = words("AWS");
        assert!(everygrams(&tokens, 2, 3).is_empty());
        assert!(everygrams(&[], 1, 3).is_empty());
    }

    #[test]
    fn test_everygrams_zero_min_is_unigrams() {
        let tokens = words("a b");
        assert_eq!(everygrams(&tokens, 0, 1).len(), 2);
    }

    #[test]
    fn test_entity_chunk_joined() {
        let chunk = EntityChunk {
            label: EntityLabel::Person,
            leaves: vec![TaggedToken::new("Jane", "NNP"), TaggedToken::new("Doe", "NNP")],
        };
        assert_eq!(chunk.joined(), "Jane Doe");
    }
}
