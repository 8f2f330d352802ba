use thiserror::Error;

/// Failure reported by an [`NlpProvider`](crate::nlp::NlpProvider).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{provider}: {message}")]
pub struct NlpError {
    pub provider: String,
    pub message: String,
}

impl NlpError {
    pub fn new(provider: impl Into<String>, message: impl Into<String>) -> Self {
        NlpError {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced by the analysis core.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Raw input bytes are not valid UTF-8. No partial analysis is produced.
    #[error("input is not valid UTF-8 text: {0}")]
    InputDecoding(#[from] std::string::FromUtf8Error),

    /// The taxonomy is malformed (empty category, empty keyword list, ...).
    #[error("invalid taxonomy: {0}")]
    TaxonomyConfig(String),

    /// The NLP collaborator failed; propagated unchanged.
    #[error("NLP collaborator failed: {0}")]
    Nlp(#[from] NlpError),
}
