use crate::models::{AnalysisResult, FrequencyTable};
use crate::nlp::Tokens;

/// Counts each token that contains any keyword of a flat taxonomy.
///
/// The token itself is recorded, not the keyword it matched.
pub struct FlatMatcher {
    keywords: Vec<String>,
}

impl FlatMatcher {
    pub fn new(keywords: &[String]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn is_detected(&self, token: &str) -> bool {
        self.keywords.iter().any(|k| token.contains(k.as_str()))
    }
}

impl super::Matcher for FlatMatcher {
    fn scan(&self, tokens: Tokens<'_>) -> AnalysisResult {
        let mut table = FrequencyTable::new();

        for token in tokens {
            table.tokens_scanned += 1;
            if self.is_detected(token.as_str()) {
                table.increment(token.as_str());
            }
        }

        AnalysisResult::Flat(table)
    }
}
