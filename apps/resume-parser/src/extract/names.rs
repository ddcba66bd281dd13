use crate::nlp::{ChunkNode, EntityLabel, NlpToolkit};

/// Extracts PERSON entities, sentence by sentence, with leaf tokens joined by spaces.
pub fn extract_person_names(text: &str, toolkit: &dyn NlpToolkit) -> Vec<String> {
    let mut names = Vec::new();
    for sentence in toolkit.sentence_tokenize(text) {
        let tokens = toolkit.word_tokenize(&sentence);
        let tagged = toolkit.pos_tag(&tokens);
        for node in toolkit.ne_chunk(tagged) {
            if let ChunkNode::Entity(chunk) = node {
                if chunk.label == EntityLabel::Person {
                    names.push(chunk.joined());
                }
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::nlp::{EntityChunk, RuleBasedToolkit, TaggedToken};

    /// Chunks every sentence into one entity whose label is taken from the first word.
    struct ScriptedToolkit;

    impl NlpToolkit for ScriptedToolkit {
        fn sentence_tokenize(&self, text: &str) -> Vec<String> {
            text.split('|').map(String::from).collect()
        }

        fn word_tokenize(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(String::from).collect()
        }

        fn pos_tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
            tokens.iter().map(|t| TaggedToken::new(t.clone(), "NNP")).collect()
        }

        fn ne_chunk(&self, tagged: Vec<TaggedToken>) -> Vec<ChunkNode> {
            let Some((head, rest)) = tagged.split_first() else {
                return Vec::new();
            };
            let label = match head.text.as_str() {
                "PERSON" => EntityLabel::Person,
                "ORG" => EntityLabel::Organization,
                _ => return vec![ChunkNode::Token(head.clone())],
            };
            vec![
                ChunkNode::Token(TaggedToken::new(",", ",")),
                ChunkNode::Entity(EntityChunk {
                    label,
                    leaves: rest.to_vec(),
                }),
            ]
        }

        fn stopwords(&self, _language: &str) -> HashSet<String> {
            HashSet::new()
        }
    }

    #[test]
    fn test_only_person_chunks_are_kept_in_sentence_order() {
        let names = extract_person_names(
            "PERSON Ada Lovelace|ORG Acme Corp|PERSON Grace Brewster Hopper|plain words",
            &ScriptedToolkit,
        );
        assert_eq!(names, vec!["Ada Lovelace", "Grace Brewster Hopper"]);
    }

    #[test]
    fn test_empty_text_yields_no_names() {
        assert!(extract_person_names("", &RuleBasedToolkit::new()).is_empty());
    }

    #[test]
    fn test_rule_based_names() {
        let text = "Jane Doe\nSenior Engineer\n\nReferences: John Smith. Worked at Acme Corp.";
        assert_eq!(
            extract_person_names(text, &RuleBasedToolkit::new()),
            vec!["Jane Doe", "John Smith"]
        );
    }
}
