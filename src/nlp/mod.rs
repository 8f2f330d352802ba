//! Tokenization and entity extraction behind a collaborator trait.
//!
//! - [`NlpProvider`] — the capability the matcher depends on.
//! - [`rule_based`] — the bundled regex-driven provider used by default.

pub mod rule_based;

use crate::error::NlpError;
use crate::models::{Entity, Token};

pub use rule_based::RuleBasedNlp;

/// Single-pass token stream produced for one analysis.
pub type Tokens<'a> = Box<dyn Iterator<Item = Token> + 'a>;

/// Token filtering applied by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizeOptions {
    pub skip_stop_words: bool,
    pub skip_punctuation: bool,
}

impl TokenizeOptions {
    /// Keep every token.
    pub fn all() -> Self {
        Self::default()
    }

    /// Drop stop-words and punctuation.
    pub fn content_words() -> Self {
        TokenizeOptions {
            skip_stop_words: true,
            skip_punctuation: true,
        }
    }
}

pub trait NlpProvider: Send + Sync {
    /// Lower-case and split `text` into word-level tokens.
    fn tokenize<'a>(&'a self, text: &'a str, options: TokenizeOptions)
        -> Result<Tokens<'a>, NlpError>;

    /// Named entities (people and organizations) found in `text`.
    fn entities(&self, text: &str) -> Result<Vec<Entity>, NlpError>;
}
