use regex::Regex;

use crate::error::NlpError;
use crate::models::{Entity, EntityKind, Token};
use crate::nlp::{NlpProvider, TokenizeOptions, Tokens};

const PROVIDER: &str = "rule-based";

/// English stop-words dropped when [`TokenizeOptions::skip_stop_words`] is set.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "may", "me", "might", "more", "most", "must", "my", "myself", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shall", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "us", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours", "yourself", "yourselves",
];

const HONORIFICS: &[&str] = &["mr", "mrs", "ms", "miss", "dr", "prof", "sir"];

const ORG_SUFFIXES: &[&str] = &[
    "inc", "llc", "ltd", "limited", "corp", "corporation", "company", "co", "gmbh", "plc",
    "group", "holdings", "technologies", "foundation",
];

/// Regex-driven tokenizer with heuristic entity detection.
///
/// Words are runs of letters, digits, apostrophes and underscores; every other
/// non-space character becomes its own punctuation token, so hyphenated
/// compounds such as "third-party" split into three tokens.
pub struct RuleBasedNlp {
    token_re: Regex,
    name_re: Regex,
}

impl RuleBasedNlp {
    pub fn new() -> Result<Self, NlpError> {
        let token_re = Regex::new(r"[\p{L}\p{N}_']+|[^\s\p{L}\p{N}_']")
            .map_err(|e| NlpError::new(PROVIDER, e.to_string()))?;
        let name_re = Regex::new(r"\p{Lu}[\p{L}\p{N}&']*(?:[ \t]+\p{Lu}[\p{L}\p{N}&']*)*")
            .map_err(|e| NlpError::new(PROVIDER, e.to_string()))?;
        Ok(RuleBasedNlp { token_re, name_re })
    }
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}

pub fn is_punctuation(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| !c.is_alphanumeric())
}

impl NlpProvider for RuleBasedNlp {
    fn tokenize<'a>(
        &'a self,
        text: &'a str,
        options: TokenizeOptions,
    ) -> Result<Tokens<'a>, NlpError> {
        let tokens = self
            .token_re
            .find_iter(text)
            .map(|m| Token::new(m.as_str()))
            .filter(move |t| !(options.skip_punctuation && is_punctuation(t.as_str())))
            .filter(move |t| !(options.skip_stop_words && is_stop_word(t.as_str())));
        Ok(Box::new(tokens))
    }

    fn entities(&self, text: &str) -> Result<Vec<Entity>, NlpError> {
        let mut entities: Vec<Entity> = Vec::new();

        for m in self.name_re.find_iter(text) {
            let mut words: Vec<&str> = m.as_str().split_whitespace().collect();
            let preceded_by_honorific = text[..m.start()]
                .trim_end()
                .trim_end_matches('.')
                .rsplit(|c: char| c.is_whitespace())
                .next()
                .map(|w| HONORIFICS.contains(&w.to_lowercase().as_str()))
                .unwrap_or(false);

            let kind = if preceded_by_honorific {
                Some(EntityKind::Person)
            } else if words.len() > 1 && HONORIFICS.contains(&words[0].to_lowercase().as_str()) {
                words.remove(0);
                Some(EntityKind::Person)
            } else if words.len() > 1
                && words
                    .last()
                    .map(|w| ORG_SUFFIXES.contains(&w.to_lowercase().as_str()))
                    .unwrap_or(false)
            {
                if words[0] == "The" && words.len() > 2 {
                    words.remove(0);
                }
                Some(EntityKind::Organization)
            } else {
                None
            };

            if let Some(kind) = kind {
                let entity = Entity {
                    text: words.join(" "),
                    kind,
                };
                if !entities.contains(&entity) {
                    entities.push(entity);
                }
            }
        }

        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str, options: TokenizeOptions) -> Vec<String> {
        let nlp = RuleBasedNlp::new().unwrap();
        nlp.tokenize(text, options)
            .unwrap()
            .map(|t| t.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_stop_words_sorted() {
        let mut sorted = STOP_WORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, STOP_WORDS);
    }

    #[test]
    fn test_tokenize_lowercases_and_keeps_punctuation() {
        assert_eq!(
            tokens("We Track cookies.", TokenizeOptions::all()),
            vec!["we", "track", "cookies", "."]
        );
    }

    #[test]
    fn test_tokenize_splits_hyphenated_words() {
        assert_eq!(
            tokens("third-party vendors", TokenizeOptions::all()),
            vec!["third", "-", "party", "vendors"]
        );
    }

    #[test]
    fn test_tokenize_content_words() {
        assert_eq!(
            tokens("We may share your data, and sell it!", TokenizeOptions::content_words()),
            vec!["share", "data", "sell"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokens("   \n\t ", TokenizeOptions::all()).is_empty());
    }

    #[test]
    fn test_entities_people_and_organizations() {
        let nlp = RuleBasedNlp::new().unwrap();
        let text = "Contact Dr. Jane Doe at Acme Analytics Inc. or write to \
                    Mr Bob Stone. Data goes to Globex Corporation and Acme Analytics Inc.";
        let entities = nlp.entities(text).unwrap();
        assert_eq!(
            entities,
            vec![
                Entity { text: "Jane Doe".into(), kind: EntityKind::Person },
                Entity { text: "Acme Analytics Inc".into(), kind: EntityKind::Organization },
                Entity { text: "Bob Stone".into(), kind: EntityKind::Person },
                Entity { text: "Globex Corporation".into(), kind: EntityKind::Organization },
            ]
        );
    }

    #[test]
    fn test_entities_ignore_plain_capitalized_words() {
        let nlp = RuleBasedNlp::new().unwrap();
        assert!(nlp.entities("We Collect Data.").unwrap().is_empty());
    }
}
