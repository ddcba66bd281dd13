//! Rule-based NLP toolkit: lexicon and capitalisation heuristics, no trained models.
//!
//! Algorithm:
//! 1. Sentences end at `.`/`!`/`?` followed by whitespace (skipping known abbreviations
//!    and single-letter initials) and at blank lines.
//! 2. Words are alphanumeric runs; `.`, `'`, `-`, `@`, `+`, `_` stay inside a word when
//!    flanked by alphanumerics. Any other non-space char is its own token.
//! 3. Tags come from a closed-class lexicon, then digits → CD, capitalised → NNP, else NN.
//! 4. Runs of NNP tokens are chunked: organisation keyword → ORGANIZATION, known place →
//!    GPE, 2–4 name-shaped tokens → PERSON.

use std::collections::HashSet;

use tracing::warn;

use super::stopwords;
use super::{ChunkNode, EntityChunk, EntityLabel, NlpToolkit, TaggedToken};

const WORD_JOINERS: &[char] = &['.', '\'', '-', '@', '+', '_'];

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "inc", "ltd", "co", "corp", "vs", "etc",
    "e.g", "i.e", "no",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any", "another",
];

const PREPOSITIONS: &[&str] = &[
    "at", "in", "on", "of", "for", "from", "with", "by", "about", "into", "over", "under",
    "between", "through", "during", "before", "after", "since", "until", "within", "without",
    "across", "per", "via", "as", "than", "like",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet"];

const PRONOUNS: &[&str] = &["i", "we", "you", "he", "she", "it", "they", "me", "us", "him", "her", "them"];

const POSSESSIVES: &[&str] = &["my", "our", "your", "his", "its", "their"];

const MODALS: &[&str] = &["can", "could", "will", "would", "shall", "should", "may", "might", "must"];

/// A capitalised token containing one of these makes the whole run an organisation.
const ORGANIZATION_MARKERS: &[&str] = &[
    "inc", "corp", "corporation", "llc", "ltd", "limited", "gmbh", "company", "co", "university",
    "college", "institute", "school", "bank", "group", "technologies", "solutions", "labs",
    "systems", "services", "agency", "foundation", "department",
];

const PLACES: &[&str] = &[
    "london", "paris", "berlin", "seattle", "chicago", "boston", "toronto", "sydney", "dublin",
    "singapore", "bangalore", "india", "canada", "germany", "france", "australia", "ireland",
    "usa", "uk", "america", "europe", "asia",
];

/// Capitalised words that show up next to names in resumes but are never part of one.
const NON_NAME_WORDS: &[&str] = &[
    // section headings and labels
    "resume", "curriculum", "vitae", "contact", "summary", "profile", "objective", "experience",
    "education", "skills", "projects", "certifications", "references", "languages", "interests",
    "achievements", "employment", "history", "work", "professional", "technical", "personal",
    "details", "email", "phone", "mobile", "address", "linkedin", "github", "name",
    // calendar
    "january", "february", "march", "april", "june", "july", "august", "september", "october",
    "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday",
    "sunday",
    // titles and roles
    "mr", "mrs", "ms", "dr", "prof", "engineer", "developer", "manager", "senior", "junior",
    "lead", "architect", "consultant", "intern",
    // technology
    "aws", "azure", "kubernetes", "docker", "terraform", "jenkins", "python", "java", "rust",
    "linux", "sql", "devops", "cloud", "gateway", "monitor", "analytics", "containers",
    // sentence-initial verbs
    "managed", "led", "built", "designed", "developed", "implemented", "worked", "used",
    "deployed", "created", "maintained", "migrated", "responsible",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedToolkit;

impl RuleBasedToolkit {
    pub fn new() -> Self {
        Self
    }
}

impl NlpToolkit for RuleBasedToolkit {
    fn sentence_tokenize(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;

        for (i, &(idx, c)) in chars.iter().enumerate() {
            let next = chars.get(i + 1).map(|&(_, n)| n);
            let boundary = match c {
                '.' => {
                    next.map_or(true, char::is_whitespace)
                        && !ends_with_abbreviation(&text[start..idx])
                }
                '!' | '?' => next.map_or(true, char::is_whitespace),
                '\n' => next == Some('\n'),
                _ => false,
            };
            if boundary {
                let end = idx + c.len_utf8();
                push_trimmed(&mut sentences, &text[start..end]);
                start = end;
            }
        }
        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }

    fn word_tokenize(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            if c.is_alphanumeric() {
                current.push(c);
                continue;
            }
            let joins_word = WORD_JOINERS.contains(&c)
                && !current.is_empty()
                && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
            if joins_word {
                current.push(c);
                continue;
            }
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            if !c.is_whitespace() {
                tokens.push(c.to_string());
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }
        tokens
    }

    fn pos_tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|token| TaggedToken::new(token.clone(), tag_for(token)))
            .collect()
    }

    fn ne_chunk(&self, tagged: Vec<TaggedToken>) -> Vec<ChunkNode> {
        let mut nodes = Vec::new();
        let mut run = Vec::new();

        for token in tagged {
            if token.tag == "NNP" {
                run.push(token);
            } else {
                flush_run(&mut nodes, &mut run);
                nodes.push(ChunkNode::Token(token));
            }
        }
        flush_run(&mut nodes, &mut run);
        nodes
    }

    fn stopwords(&self, language: &str) -> HashSet<String> {
        stopwords::for_language(language).unwrap_or_else(|| {
            warn!(language, "No stopword list for language; nothing will be filtered");
            HashSet::new()
        })
    }
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

fn ends_with_abbreviation(before_period: &str) -> bool {
    let Some(last) = before_period.split_whitespace().last() else {
        return false;
    };
    let mut chars = last.chars();
    let single_initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase());
    single_initial || ABBREVIATIONS.contains(&last.to_lowercase().as_str())
}

fn tag_for(token: &str) -> &'static str {
    if !token.chars().any(char::is_alphanumeric) {
        return match token {
            "." | "!" | "?" => ".",
            "," => ",",
            ":" | ";" => ":",
            "(" => "(",
            ")" => ")",
            _ => "SYM",
        };
    }
    if token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
    {
        return "CD";
    }

    let lower = token.to_lowercase();
    let word = lower.as_str();
    if DETERMINERS.contains(&word) {
        "DT"
    } else if PREPOSITIONS.contains(&word) {
        "IN"
    } else if CONJUNCTIONS.contains(&word) {
        "CC"
    } else if PRONOUNS.contains(&word) {
        "PRP"
    } else if POSSESSIVES.contains(&word) {
        "PRP$"
    } else if word == "to" {
        "TO"
    } else if MODALS.contains(&word) {
        "MD"
    } else if token.chars().next().is_some_and(char::is_uppercase) {
        "NNP"
    } else {
        "NN"
    }
}

/// Title-case, alphabetic (apostrophes and hyphens allowed), and not a known non-name word.
fn is_name_token(word: &str) -> bool {
    let starts_upper = word.chars().next().is_some_and(char::is_uppercase);
    starts_upper
        && word.chars().all(|c| c.is_alphabetic() || c == '\'' || c == '-')
        && word.chars().skip(1).any(char::is_lowercase)
        && !NON_NAME_WORDS.contains(&word.to_lowercase().as_str())
}

fn flush_run(nodes: &mut Vec<ChunkNode>, run: &mut Vec<TaggedToken>) {
    if run.is_empty() {
        return;
    }
    let leaves = std::mem::take(run);
    let lowered: Vec<String> = leaves.iter().map(|t| t.text.to_lowercase()).collect();

    if lowered
        .iter()
        .any(|w| ORGANIZATION_MARKERS.contains(&w.as_str()))
    {
        nodes.push(ChunkNode::Entity(EntityChunk {
            label: EntityLabel::Organization,
            leaves,
        }));
        return;
    }
    if leaves.len() == 1 && PLACES.contains(&lowered[0].as_str()) {
        nodes.push(ChunkNode::Entity(EntityChunk {
            label: EntityLabel::Gpe,
            leaves,
        }));
        return;
    }

    // Split the run into name-shaped segments; everything else stays a bare token.
    let mut segment: Vec<TaggedToken> = Vec::new();
    for token in leaves {
        if is_name_token(&token.text) {
            segment.push(token);
        } else {
            flush_person_segment(nodes, &mut segment);
            nodes.push(ChunkNode::Token(token));
        }
    }
    flush_person_segment(nodes, &mut segment);
}

fn flush_person_segment(nodes: &mut Vec<ChunkNode>, segment: &mut Vec<TaggedToken>) {
    let leaves = std::mem::take(segment);
    if (2..=4).contains(&leaves.len()) {
        nodes.push(ChunkNode::Entity(EntityChunk {
            label: EntityLabel::Person,
            leaves,
        }));
    } else {
        nodes.extend(leaves.into_iter().map(ChunkNode::Token));
    }
}
