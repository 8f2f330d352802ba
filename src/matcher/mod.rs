//! Keyword matching over a token stream.
//!
//! [`analyze`] dispatches on the [`KeywordTaxonomy`] variant:
//! - [`categorized::CategorizedMatcher`] — records each keyword found inside a
//!   token under its category;
//! - [`flat::FlatMatcher`] — counts every token that contains any keyword.
//!
//! Matching is plain substring containment on lower-cased text, so "tracking123"
//! matches "track" and a multi-word phrase never matches a single token.

pub mod categorized;
pub mod flat;

use crate::error::AnalysisError;
use crate::models::{AnalysisMode, AnalysisResult, KeywordTaxonomy};
use crate::nlp::{NlpProvider, RuleBasedNlp, TokenizeOptions, Tokens};

pub trait Matcher {
    /// Consume the token stream once and aggregate matches.
    fn scan(&self, tokens: Tokens<'_>) -> AnalysisResult;
}

/// Runs the matcher appropriate for a taxonomy on top of an [`NlpProvider`].
pub struct Analyzer<P: NlpProvider> {
    nlp: P,
    options: Option<TokenizeOptions>,
}

impl<P: NlpProvider> Analyzer<P> {
    pub fn new(nlp: P) -> Self {
        Analyzer { nlp, options: None }
    }

    /// Override the per-mode tokenizer defaults.
    pub fn with_options(mut self, options: TokenizeOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn nlp(&self) -> &P {
        &self.nlp
    }

    /// A malformed taxonomy fails with [`AnalysisError::TaxonomyConfig`]
    /// before any text is tokenized.
    pub fn analyze(
        &self,
        text: &str,
        taxonomy: &KeywordTaxonomy,
    ) -> Result<AnalysisResult, AnalysisError> {
        taxonomy.validate()?;
        let mode = taxonomy.mode();
        let options = self.options.unwrap_or_else(|| default_options(mode));
        let tokens = self.nlp.tokenize(text, options)?;

        let result = match taxonomy {
            KeywordTaxonomy::Categorized(categories) => {
                categorized::CategorizedMatcher::new(categories).scan(tokens)
            }
            KeywordTaxonomy::Flat(keywords) => flat::FlatMatcher::new(keywords).scan(tokens),
        };

        log::debug!(
            "{} analysis scanned {} tokens",
            mode,
            result.tokens_scanned()
        );
        if result.tokens_scanned() == 0 {
            log::warn!("input produced no tokens");
        } else if !result.has_matches() {
            log::warn!("no privacy-related terms found in {} tokens", result.tokens_scanned());
        }

        Ok(result)
    }
}

/// Categorized mode sees every token; flat mode only content words.
pub fn default_options(mode: AnalysisMode) -> TokenizeOptions {
    match mode {
        AnalysisMode::Categorized => TokenizeOptions::all(),
        AnalysisMode::Flat => TokenizeOptions::content_words(),
    }
}

/// Analyze `text` with the bundled [`RuleBasedNlp`] provider.
pub fn analyze(text: &str, taxonomy: &KeywordTaxonomy) -> Result<AnalysisResult, AnalysisError> {
    Analyzer::new(RuleBasedNlp::new()?).analyze(text, taxonomy)
}
