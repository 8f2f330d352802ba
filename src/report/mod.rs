//! Report shapes built from an [`AnalysisResult`], plus their renderers.
//!
//! - [`terminal`] — colored, tabular output with a summary box; respects `--verbose` / `--quiet`.
//! - [`chart`] — horizontal bar chart PNG of distinct matches per category.
//!
//! Categorized and flat analyses produce different reports on purpose: only the
//! categorized one carries a risk level, while the flat one either lists the
//! detected terms or says nothing was found.

pub mod chart;
pub mod terminal;

use serde::Serialize;

use crate::models::{
    AnalysisResult, AnalysisWarning, Entity, EntityKind, FrequencyTable, MatchSet, RiskLevel,
    TermCount,
};
use crate::risk::scorer;

/// Number of ranked terms kept in a flat report unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    /// Unique matched keywords, first match first.
    pub terms: Vec<String>,
}

impl std::fmt::Display for CategorySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category, self.terms.join(", "))
    }
}

/// One bar of the category breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedReport {
    pub tokens_scanned: usize,
    /// Categories with at least one match, in taxonomy order.
    pub categories: Vec<CategorySummary>,
    pub score: usize,
    pub risk: RiskLevel,
    pub chart: Vec<ChartPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<AnalysisWarning>,
}

impl CategorizedReport {
    pub fn from_matches(matches: &MatchSet) -> Self {
        let categories: Vec<CategorySummary> = matches
            .matched()
            .map(|m| CategorySummary {
                category: m.category.clone(),
                terms: m.unique_keywords().into_iter().map(String::from).collect(),
            })
            .collect();

        let chart = categories
            .iter()
            .map(|c| ChartPoint {
                label: c.category.clone(),
                value: c.terms.len(),
            })
            .collect();

        let score = scorer::score(matches);
        let warning = if matches.tokens_scanned == 0 {
            Some(AnalysisWarning::NoTokens)
        } else if score == 0 {
            Some(AnalysisWarning::NoMatches)
        } else {
            None
        };

        CategorizedReport {
            tokens_scanned: matches.tokens_scanned,
            categories,
            score,
            risk: scorer::classify(score),
            chart,
            warning,
        }
    }

    /// One `"<category>: <terms>"` line per matched category.
    pub fn summary(&self) -> String {
        self.categories
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FlatReport {
    /// No privacy-related terms were found; deliberately not a risk level.
    NoMatches {
        tokens_scanned: usize,
        warning: AnalysisWarning,
    },
    Detected {
        tokens_scanned: usize,
        total_mentions: usize,
        distinct_terms: usize,
        /// Highest counts first; equal counts keep first-encounter order.
        top: Vec<TermCount>,
    },
}

impl FlatReport {
    pub fn from_table(table: &FrequencyTable, top_n: usize) -> Self {
        let total_mentions = table.total_mentions();
        if total_mentions == 0 {
            let warning = if table.tokens_scanned == 0 {
                AnalysisWarning::NoTokens
            } else {
                AnalysisWarning::NoMatches
            };
            return FlatReport::NoMatches {
                tokens_scanned: table.tokens_scanned,
                warning,
            };
        }

        FlatReport::Detected {
            tokens_scanned: table.tokens_scanned,
            total_mentions,
            distinct_terms: table.entries().len(),
            top: rank(table, top_n),
        }
    }
}

/// Top `n` entries by count; `sort_by` is stable so ties stay in first-seen order.
pub fn rank(table: &FrequencyTable, n: usize) -> Vec<TermCount> {
    let mut ranked = table.entries().to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Report {
    Categorized(CategorizedReport),
    Flat(FlatReport),
}

impl Report {
    pub fn build(result: &AnalysisResult, top_n: usize) -> Self {
        match result {
            AnalysisResult::Categorized(m) => Report::Categorized(CategorizedReport::from_matches(m)),
            AnalysisResult::Flat(t) => Report::Flat(FlatReport::from_table(t, top_n)),
        }
    }

    /// Risk level, only defined for categorized reports.
    pub fn risk(&self) -> Option<RiskLevel> {
        match self {
            Report::Categorized(r) => Some(r.risk),
            Report::Flat(_) => None,
        }
    }
}

/// People and organizations named in the document. Never part of the score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Insights {
    pub people: Vec<String>,
    pub organizations: Vec<String>,
}

impl Insights {
    pub fn from_entities(entities: &[Entity]) -> Self {
        let mut insights = Insights::default();
        for entity in entities {
            let bucket = match entity.kind {
                EntityKind::Person => &mut insights.people,
                EntityKind::Organization => &mut insights.organizations,
            };
            if !bucket.contains(&entity.text) {
                bucket.push(entity.text.clone());
            }
        }
        insights
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.organizations.is_empty()
    }
}
