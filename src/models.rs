use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// A named group of keyword phrases describing one privacy concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Category {
    /// Build a category; keywords are lower-cased so matching is case-insensitive.
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Category {
            name: name.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }
}

/// The configured set of keyword phrases used for detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordTaxonomy {
    /// Ordered keyword phrases with no category structure.
    Flat(Vec<String>),
    /// Ordered categories, each with its own keyword phrases.
    Categorized(Vec<Category>),
}

impl KeywordTaxonomy {
    pub fn flat<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        KeywordTaxonomy::Flat(
            keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        )
    }

    pub fn categorized(categories: Vec<Category>) -> Self {
        KeywordTaxonomy::Categorized(categories)
    }

    pub fn mode(&self) -> AnalysisMode {
        match self {
            KeywordTaxonomy::Flat(_) => AnalysisMode::Flat,
            KeywordTaxonomy::Categorized(_) => AnalysisMode::Categorized,
        }
    }

    /// Reject malformed taxonomies before any analysis runs.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        match self {
            KeywordTaxonomy::Flat(keywords) => {
                if keywords.is_empty() {
                    return Err(AnalysisError::TaxonomyConfig(
                        "flat taxonomy has no keywords".to_string(),
                    ));
                }
                check_keywords("flat taxonomy", keywords)
            }
            KeywordTaxonomy::Categorized(categories) => {
                if categories.is_empty() {
                    return Err(AnalysisError::TaxonomyConfig(
                        "categorized taxonomy has no categories".to_string(),
                    ));
                }
                let mut seen: Vec<&str> = Vec::new();
                for category in categories {
                    let name = category.name.trim();
                    if name.is_empty() {
                        return Err(AnalysisError::TaxonomyConfig(
                            "category with an empty name".to_string(),
                        ));
                    }
                    if seen.contains(&name) {
                        return Err(AnalysisError::TaxonomyConfig(format!(
                            "category \"{}\" is defined more than once",
                            name
                        )));
                    }
                    seen.push(name);

                    if category.keywords.is_empty() {
                        return Err(AnalysisError::TaxonomyConfig(format!(
                            "category \"{}\" has no keywords",
                            name
                        )));
                    }
                    check_keywords(&format!("category \"{}\"", name), &category.keywords)?;
                }
                Ok(())
            }
        }
    }
}

fn check_keywords(owner: &str, keywords: &[String]) -> Result<(), AnalysisError> {
    // A blank keyword is a substring of every token and would match everything
    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(AnalysisError::TaxonomyConfig(format!(
            "{} contains an empty keyword",
            owner
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Categorized,
    Flat,
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisMode::Categorized => write!(f, "categorized"),
            AnalysisMode::Flat => write!(f, "flat"),
        }
    }
}

/// A normalized (lower-cased) word-level unit of input text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Token(text.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Matched keywords for one category, in match order (duplicates kept).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMatches {
    pub category: String,
    pub keywords: Vec<String>,
}

impl CategoryMatches {
    /// Matched keywords with duplicates removed, first match first.
    pub fn unique_keywords(&self) -> Vec<&str> {
        let mut unique: Vec<&str> = Vec::new();
        for keyword in &self.keywords {
            if !unique.contains(&keyword.as_str()) {
                unique.push(keyword);
            }
        }
        unique
    }
}

/// Per-category matches for one categorized analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSet {
    pub tokens_scanned: usize,
    pub categories: Vec<CategoryMatches>,
}

impl MatchSet {
    /// One empty entry per taxonomy category, in taxonomy order.
    pub fn for_categories(categories: &[Category]) -> Self {
        MatchSet {
            tokens_scanned: 0,
            categories: categories
                .iter()
                .map(|c| CategoryMatches {
                    category: c.name.clone(),
                    keywords: Vec::new(),
                })
                .collect(),
        }
    }

    /// `index` is a position in the category slice this set was built from.
    pub(crate) fn record(&mut self, index: usize, keyword: &str) {
        self.categories[index].keywords.push(keyword.to_string());
    }

    pub fn matched(&self) -> impl Iterator<Item = &CategoryMatches> {
        self.categories.iter().filter(|c| !c.keywords.is_empty())
    }

    pub fn total_matches(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }
}

/// Occurrence count per detected term, remembering first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrequencyTable {
    pub tokens_scanned: usize,
    entries: Vec<TermCount>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, term: &str) {
        match self.index.get(term) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(term.to_string(), self.entries.len());
                self.entries.push(TermCount {
                    term: term.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn count(&self, term: &str) -> usize {
        self.index
            .get(term)
            .map(|&i| self.entries[i].count)
            .unwrap_or(0)
    }

    /// Entries in the order terms were first encountered.
    pub fn entries(&self) -> &[TermCount] {
        &self.entries
    }

    pub fn total_mentions(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Outcome of one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AnalysisResult {
    Categorized(MatchSet),
    Flat(FrequencyTable),
}

impl AnalysisResult {
    pub fn tokens_scanned(&self) -> usize {
        match self {
            AnalysisResult::Categorized(m) => m.tokens_scanned,
            AnalysisResult::Flat(f) => f.tokens_scanned,
        }
    }

    pub fn has_matches(&self) -> bool {
        match self {
            AnalysisResult::Categorized(m) => m.total_matches() > 0,
            AnalysisResult::Flat(f) => !f.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn indicator(&self) -> &'static str {
        match self {
            RiskLevel::Low => "🟢",
            RiskLevel::Moderate => "🟡",
            RiskLevel::High => "🔴",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low Risk"),
            RiskLevel::Moderate => write!(f, "Moderate Risk"),
            RiskLevel::High => write!(f, "High Risk"),
        }
    }
}

/// Non-fatal conditions noticed while analyzing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisWarning {
    /// The input produced no tokens at all.
    NoTokens,
    /// Tokens were scanned but none matched the taxonomy.
    NoMatches,
}

impl std::fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisWarning::NoTokens => write!(f, "input contains no words"),
            AnalysisWarning::NoMatches => write!(f, "no privacy-related terms found"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    #[serde(rename = "PERSON")]
    Person,
    #[serde(rename = "ORGANIZATION")]
    Organization,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Person => write!(f, "PERSON"),
            EntityKind::Organization => write!(f, "ORGANIZATION"),
        }
    }
}

/// Named entity reported by the NLP collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub text: String,
    pub kind: EntityKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(name: &str, keywords: &[&str]) -> Category {
        Category::new(name, keywords.iter().copied())
    }

    #[test]
    fn test_keywords_lowercased() {
        let c = cat("Regulation", &["GDPR", "CCPA"]);
        assert_eq!(c.keywords, vec!["gdpr", "ccpa"]);
        assert_eq!(
            KeywordTaxonomy::flat(["Biometric"]),
            KeywordTaxonomy::Flat(vec!["biometric".to_string()])
        );
    }

    #[test]
    fn test_validate_rejects_empty_keyword_list() {
        let taxonomy = KeywordTaxonomy::categorized(vec![
            cat("Tracking", &["track"]),
            cat("Location", &[]),
        ]);
        let err = taxonomy.validate().unwrap_err();
        assert!(matches!(err, AnalysisError::TaxonomyConfig(_)));
        assert!(err.to_string().contains("Location"));
    }

    #[test]
    fn test_validate_rejects_blank_names_and_keywords() {
        assert!(KeywordTaxonomy::categorized(vec![cat("  ", &["track"])])
            .validate()
            .is_err());
        assert!(KeywordTaxonomy::categorized(vec![cat("Tracking", &["track", " "])])
            .validate()
            .is_err());
        assert!(KeywordTaxonomy::flat(["gdpr", ""]).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_and_duplicate() {
        assert!(KeywordTaxonomy::categorized(Vec::new()).validate().is_err());
        assert!(KeywordTaxonomy::Flat(Vec::new()).validate().is_err());
        assert!(KeywordTaxonomy::categorized(vec![
            cat("Tracking", &["track"]),
            cat("Tracking", &["cookie"]),
        ])
        .validate()
        .is_err());
    }

    #[test]
    fn test_validate_allows_duplicate_keywords() {
        let taxonomy = KeywordTaxonomy::categorized(vec![cat("Tracking", &["track", "track"])]);
        assert!(taxonomy.validate().is_ok());
    }

    #[test]
    fn test_unique_keywords_keep_first_match_order() {
        let m = CategoryMatches {
            category: "Tracking".to_string(),
            keywords: vec!["cookie".into(), "track".into(), "cookie".into()],
        };
        assert_eq!(m.unique_keywords(), vec!["cookie", "track"]);
    }

    #[test]
    fn test_frequency_table_counts_in_first_seen_order() {
        let mut table = FrequencyTable::new();
        for term in ["cookies", "gdpr", "cookies"] {
            table.increment(term);
        }
        assert_eq!(table.count("cookies"), 2);
        assert_eq!(table.count("ccpa"), 0);
        assert_eq!(table.entries()[0].term, "cookies");
        assert_eq!(table.total_mentions(), 3);
    }

    #[test]
    fn test_has_matches() {
        let mut matches = MatchSet::for_categories(&[cat("Tracking", &["track"])]);
        matches.tokens_scanned = 3;
        assert!(!AnalysisResult::Categorized(matches.clone()).has_matches());
        matches.record(0, "track");
        assert!(AnalysisResult::Categorized(matches).has_matches());

        let mut table = FrequencyTable::new();
        assert!(!AnalysisResult::Flat(table.clone()).has_matches());
        table.increment("gdpr");
        assert!(AnalysisResult::Flat(table).has_matches());
    }

    #[test]
    fn test_risk_level_labels() {
        assert_eq!(RiskLevel::Low.to_string(), "Low Risk");
        assert_eq!(RiskLevel::Moderate.to_string(), "Moderate Risk");
        assert_eq!(RiskLevel::High.to_string(), "High Risk");
        assert!(RiskLevel::High > RiskLevel::Moderate);
    }
}
