use std::path::PathBuf;

use clap::Parser;

use privacy_checkr::models::{AnalysisMode, RiskLevel};

#[derive(Parser, Debug)]
#[command(
    name = "privacy-checkr",
    about = "Scan Terms & Conditions text for privacy keywords and estimate risk exposure",
    version
)]
pub struct Cli {
    /// Text file to analyze; `-` reads from stdin
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Config file [default: ./.privacy-checkr/config.toml, fallback ~/.config/privacy-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Analysis mode; overrides the config file
    #[arg(long, value_name = "MODE")]
    pub mode: Option<ModeArg>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Number of ranked terms in flat mode; overrides the config file
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// PNG chart output path; use without value to default to privacy-chart.png
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "privacy-chart.png")]
    pub chart: Option<PathBuf>,

    /// List people and organizations named in the document
    #[arg(long)]
    pub insights: bool,

    /// Exit with code 1 when the risk level reaches this tier (categorized mode)
    #[arg(long, value_name = "LEVEL")]
    pub fail_on: Option<RiskArg>,

    /// Show token counts and warning details
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ModeArg {
    Categorized,
    Flat,
}

impl From<&ModeArg> for AnalysisMode {
    fn from(arg: &ModeArg) -> Self {
        match arg {
            ModeArg::Categorized => AnalysisMode::Categorized,
            ModeArg::Flat => AnalysisMode::Flat,
        }
    }
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum RiskArg {
    Moderate,
    High,
}

impl From<&RiskArg> for RiskLevel {
    fn from(arg: &RiskArg) -> Self {
        match arg {
            RiskArg::Moderate => RiskLevel::Moderate,
            RiskArg::High => RiskLevel::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["privacy-checkr"]);
        assert_eq!(cli.file, PathBuf::from("-"));
        assert!(cli.mode.is_none());
        assert!(cli.chart.is_none());
        assert!(matches!(cli.report, ReportFormat::Terminal));
    }

    #[test]
    fn test_chart_without_value() {
        let cli = Cli::parse_from(["privacy-checkr", "terms.txt", "--chart"]);
        assert_eq!(cli.chart, Some(PathBuf::from("privacy-chart.png")));
    }

    #[test]
    fn test_mode_and_fail_on() {
        let cli = Cli::parse_from(["privacy-checkr", "terms.txt", "--mode", "flat", "--fail-on", "high"]);
        assert_eq!(cli.mode.as_ref().map(AnalysisMode::from), Some(AnalysisMode::Flat));
        assert_eq!(cli.fail_on.as_ref().map(RiskLevel::from), Some(RiskLevel::High));
    }
}
