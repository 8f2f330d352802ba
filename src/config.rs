use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::AnalysisError;
use crate::matcher::default_options;
use crate::models::{AnalysisMode, Category, KeywordTaxonomy};
use crate::nlp::TokenizeOptions;
use crate::report::DEFAULT_TOP_N;

/// Root configuration structure, deserialized from `.privacy-checkr/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// How the text is analyzed and reported.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Keyword lists; missing lists fall back to the built-in defaults.
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
}

#[derive(Debug, Deserialize)]
pub struct AnalysisConfig {
    /// `categorized` (risk score) or `flat` (term frequency). Defaults to `categorized`.
    #[serde(default = "default_mode")]
    pub mode: AnalysisMode,
    /// Number of ranked terms shown in flat mode.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Unset means the mode's default (kept in categorized mode, dropped in flat mode).
    pub skip_stop_words: Option<bool>,
    pub skip_punctuation: Option<bool>,
}

fn default_mode() -> AnalysisMode {
    AnalysisMode::Categorized
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            mode: default_mode(),
            top_n: default_top_n(),
            skip_stop_words: None,
            skip_punctuation: None,
        }
    }
}

impl AnalysisConfig {
    /// Tokenizer options for `mode`, with any configured overrides applied.
    pub fn tokenize_options(&self, mode: AnalysisMode) -> TokenizeOptions {
        let defaults = default_options(mode);
        TokenizeOptions {
            skip_stop_words: self.skip_stop_words.unwrap_or(defaults.skip_stop_words),
            skip_punctuation: self.skip_punctuation.unwrap_or(defaults.skip_punctuation),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TaxonomyConfig {
    /// Categorized taxonomy, as `[[taxonomy.categories]]` tables.
    pub categories: Option<Vec<CategoryConfig>>,
    /// Flat taxonomy keyword phrases.
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Config {
    /// The validated taxonomy for `mode`.
    pub fn taxonomy(&self, mode: AnalysisMode) -> Result<KeywordTaxonomy, AnalysisError> {
        let taxonomy = match mode {
            AnalysisMode::Categorized => match &self.taxonomy.categories {
                Some(categories) => KeywordTaxonomy::categorized(
                    categories
                        .iter()
                        .map(|c| Category::new(c.name.trim(), &c.keywords))
                        .collect(),
                ),
                None => default_categorized_taxonomy(),
            },
            AnalysisMode::Flat => match &self.taxonomy.keywords {
                Some(keywords) => KeywordTaxonomy::flat(keywords),
                None => default_flat_taxonomy(),
            },
        };
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// Fail fast on any malformed taxonomy present in the file.
    pub fn validate(&self) -> Result<()> {
        if self.taxonomy.categories.is_some() {
            self.taxonomy(AnalysisMode::Categorized)
                .context("Invalid [[taxonomy.categories]]")?;
        }
        if self.taxonomy.keywords.is_some() {
            self.taxonomy(AnalysisMode::Flat)
                .context("Invalid taxonomy.keywords")?;
        }
        Ok(())
    }
}

/// Built-in categorized taxonomy: seven privacy concerns with their seed keywords.
pub fn default_categorized_taxonomy() -> KeywordTaxonomy {
    KeywordTaxonomy::categorized(vec![
        Category::new("Data Collection", ["collect", "gather", "record", "store", "log"]),
        Category::new("Tracking", ["track", "monitor", "cookie", "beacon"]),
        Category::new("Third-Party Sharing", ["third party", "affiliates", "partners", "vendors"]),
        Category::new("Location", ["location", "gps", "geolocation"]),
        Category::new("Advertising", ["ads", "advertising", "marketing", "promotion"]),
        Category::new("Data Sharing", ["share", "sell", "transfer", "disclose"]),
        Category::new("Personal Info", ["email", "name", "phone", "address", "birthdate"]),
    ])
}

/// Built-in flat taxonomy of regulation and data-practice phrases.
pub fn default_flat_taxonomy() -> KeywordTaxonomy {
    KeywordTaxonomy::flat([
        "personal data",
        "personal information",
        "data collection",
        "third party",
        "third-party",
        "cookie",
        "tracking",
        "location",
        "gdpr",
        "ccpa",
        "biometric",
        "consent",
        "opt-out",
        "data retention",
        "sell",
        "share",
        "advertising",
        "analytics",
        "profiling",
        "ip address",
        "device identifier",
        "data breach",
        "children",
    ])
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<working_dir>/.privacy-checkr/config.toml`
/// 3. `~/.config/privacy-checkr/config.toml`
/// 4. Built-in [`Config::default`]
///
/// Any taxonomy found in the file is validated before returning.
pub fn load_config(working_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = working_dir.join(".privacy-checkr").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("privacy-checkr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    log::debug!("no config file found, using built-in taxonomy");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Rejected config {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomies_are_valid() {
        let KeywordTaxonomy::Categorized(categories) = default_categorized_taxonomy() else {
            unreachable!()
        };
        assert_eq!(categories.len(), 7);
        assert!(categories.iter().all(|c| (3..=5).contains(&c.keywords.len())));

        let KeywordTaxonomy::Flat(keywords) = default_flat_taxonomy() else {
            unreachable!()
        };
        assert_eq!(keywords.len(), 23);

        let config = Config::default();
        assert!(config.taxonomy(AnalysisMode::Categorized).is_ok());
        assert!(config.taxonomy(AnalysisMode::Flat).is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let content = r#"
[analysis]
mode = "flat"
top_n = 5
skip_stop_words = false

[taxonomy]
keywords = ["GDPR", "cookie"]

[[taxonomy.categories]]
name = "Tracking"
keywords = ["track", "Beacon"]

[[taxonomy.categories]]
name = "Location"
keywords = ["gps"]
"#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.analysis.mode, AnalysisMode::Flat);
        assert_eq!(config.analysis.top_n, 5);
        assert_eq!(
            config.analysis.tokenize_options(AnalysisMode::Flat),
            TokenizeOptions { skip_stop_words: false, skip_punctuation: true }
        );
        assert_eq!(
            config.taxonomy(AnalysisMode::Flat).unwrap(),
            KeywordTaxonomy::Flat(vec!["gdpr".into(), "cookie".into()])
        );
        assert_eq!(
            config.taxonomy(AnalysisMode::Categorized).unwrap(),
            KeywordTaxonomy::Categorized(vec![
                Category::new("Tracking", ["track", "beacon"]),
                Category::new("Location", ["gps"]),
            ])
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.analysis.mode, AnalysisMode::Categorized);
        assert_eq!(config.analysis.top_n, DEFAULT_TOP_N);
        assert_eq!(
            config.taxonomy(AnalysisMode::Categorized).unwrap(),
            default_categorized_taxonomy()
        );
    }

    #[test]
    fn test_category_without_keywords_rejected() {
        let content = r#"
[[taxonomy.categories]]
name = "Tracking"
"#;
        let config: Config = toml::from_str(content).unwrap();
        let err = config.validate().unwrap_err();
        let root = err.root_cause().downcast_ref::<AnalysisError>();
        assert!(matches!(root, Some(AnalysisError::TaxonomyConfig(_))));
    }

    #[test]
    fn test_taxonomy_error_is_typed() {
        let config: Config = toml::from_str(r#"[taxonomy]
keywords = ["gdpr", "  "]
"#).unwrap();
        assert!(matches!(
            config.taxonomy(AnalysisMode::Flat),
            Err(AnalysisError::TaxonomyConfig(_))
        ));
        assert!(config.taxonomy(AnalysisMode::Categorized).is_ok());
    }

    #[test]
    fn test_load_config_search_order() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join(".privacy-checkr");
        std::fs::create_dir_all(&project).unwrap();
        std::fs::write(project.join("config.toml"), "[analysis]\nmode = \"flat\"\n").unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.analysis.mode, AnalysisMode::Flat);

        let override_path = dir.path().join("custom.toml");
        std::fs::write(&override_path, "[analysis]\ntop_n = 3\n").unwrap();
        let config = load_config(dir.path(), Some(&override_path)).unwrap();
        assert_eq!(config.analysis.mode, AnalysisMode::Categorized);
        assert_eq!(config.analysis.top_n, 3);
    }

    #[test]
    fn test_load_config_rejects_bad_taxonomy_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[taxonomy]\nkeywords = []\n").unwrap();
        assert!(load_config(dir.path(), Some(&path)).is_err());
    }
}
