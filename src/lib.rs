//! `privacy-checkr` — scan Terms & Conditions text for privacy keywords and estimate risk.
//!
//! # Flow
//! 1. Decode the document ([`input::decode`]).
//! 2. Tokenize it through an [`nlp::NlpProvider`].
//! 3. Match tokens against a [`models::KeywordTaxonomy`] ([`matcher`]).
//! 4. Score categorized matches ([`risk::scorer`]).
//! 5. Build and render a [`report::Report`].
//!
//! ```no_run
//! use privacy_checkr::{analyze, config::default_categorized_taxonomy, report::Report};
//!
//! let taxonomy = default_categorized_taxonomy();
//! let result = analyze("We track your location.", &taxonomy)?;
//! let report = Report::build(&result, 10);
//! # Ok::<(), privacy_checkr::error::AnalysisError>(())
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod matcher;
pub mod models;
pub mod nlp;
pub mod report;
pub mod risk;

pub use error::AnalysisError;
pub use matcher::{analyze, Analyzer};
