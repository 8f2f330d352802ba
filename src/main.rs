//! `privacy-checkr` — command-line front end for the privacy keyword analyzer.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config and taxonomy ([`load_config`]).
//! 3. Read and decode the document ([`input::decode`]).
//! 4. Analyze it ([`Analyzer`]) and optionally extract entities.
//! 5. Render the requested report and chart ([`terminal`], [`chart`]).
//! 6. Exit `0`, or `1` when `--fail-on` is reached.

mod cli;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};

use cli::{Cli, ReportFormat};
use privacy_checkr::config::load_config;
use privacy_checkr::input;
use privacy_checkr::models::{AnalysisMode, RiskLevel};
use privacy_checkr::nlp::{NlpProvider, RuleBasedNlp};
use privacy_checkr::report::{chart, terminal, Insights, Report};
use privacy_checkr::Analyzer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(&working_dir, cli.config.as_deref())?;

    let mode = cli
        .mode
        .as_ref()
        .map(AnalysisMode::from)
        .unwrap_or(config.analysis.mode);
    let taxonomy = config.taxonomy(mode)?;
    let top_n = cli.top.unwrap_or(config.analysis.top_n);

    let (source, bytes) = read_document(&cli.file)?;
    let text = input::decode(bytes).with_context(|| format!("Cannot analyze {}", source))?;

    let spinner = if !cli.quiet && matches!(cli.report, ReportFormat::Terminal) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message(format!("Analyzing ({} mode)...", mode));
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    } else {
        None
    };

    let analyzer = Analyzer::new(RuleBasedNlp::new()?)
        .with_options(config.analysis.tokenize_options(mode));
    let result = analyzer.analyze(&text, &taxonomy)?;
    let insights = if cli.insights {
        Some(Insights::from_entities(&analyzer.nlp().entities(&text)?))
    } else {
        None
    };

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let report = Report::build(&result, top_n);

    match cli.report {
        ReportFormat::Terminal => {
            terminal::render(&report, insights.as_ref(), &source, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            let output = serde_json::json!({
                "source": source,
                "report": report,
                "insights": insights,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    if let Some(chart_path) = &cli.chart {
        write_chart(&report, chart_path, cli.quiet)?;
    }

    // Exit code: 1 if the risk reached the --fail-on tier
    if let (Some(threshold), Some(risk)) = (cli.fail_on.as_ref(), report.risk()) {
        if risk >= RiskLevel::from(threshold) {
            std::process::exit(1);
        }
    }

    Ok(())
}

fn read_document(path: &Path) -> Result<(String, Vec<u8>)> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read document from stdin")?;
        return Ok(("<stdin>".to_string(), bytes));
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read document {}", path.display()))?;
    Ok((path.display().to_string(), bytes))
}

fn write_chart(report: &Report, path: &Path, quiet: bool) -> Result<()> {
    match report {
        Report::Categorized(r) if !r.chart.is_empty() => {
            chart::render(&r.chart, path)?;
            if !quiet {
                eprintln!("  {} chart written to {}", "→".cyan(), path.display());
            }
        }
        Report::Categorized(_) => {
            log::warn!("no matched categories, skipping chart");
        }
        Report::Flat(_) => {
            log::warn!("charts are only drawn for categorized analyses");
        }
    }
    Ok(())
}
