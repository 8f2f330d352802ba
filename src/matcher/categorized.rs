use crate::models::{AnalysisResult, Category, MatchSet};
use crate::nlp::Tokens;

/// Records every keyword that occurs inside a token under its category.
pub struct CategorizedMatcher<'t> {
    categories: &'t [Category],
    /// Lower-cased keywords, indexed like `categories`.
    keywords: Vec<Vec<String>>,
}

impl<'t> CategorizedMatcher<'t> {
    pub fn new(categories: &'t [Category]) -> Self {
        let keywords = categories
            .iter()
            .map(|c| c.keywords.iter().map(|k| k.to_lowercase()).collect())
            .collect();
        Self {
            categories,
            keywords,
        }
    }
}

impl super::Matcher for CategorizedMatcher<'_> {
    fn scan(&self, tokens: Tokens<'_>) -> AnalysisResult {
        let mut matches = MatchSet::for_categories(self.categories);

        for token in tokens {
            matches.tokens_scanned += 1;
            for (index, keywords) in self.keywords.iter().enumerate() {
                for keyword in keywords {
                    if token.as_str().contains(keyword.as_str()) {
                        log::trace!(
                            "{:?} matched {:?} ({})",
                            token.as_str(),
                            keyword,
                            self.categories[index].name
                        );
                        matches.record(index, keyword);
                    }
                }
            }
        }

        AnalysisResult::Categorized(matches)
    }
}
