use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::RiskLevel;
use crate::report::{CategorizedReport, FlatReport, Insights, Report};

/// Render a colored terminal report.
pub fn render(
    report: &Report,
    insights: Option<&Insights>,
    source: &str,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    if quiet {
        println!("{}", quiet_line(report));
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "privacy-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Analyzing: {}\n", source);

    match report {
        Report::Categorized(r) => render_categorized(r, verbose),
        Report::Flat(r) => render_flat(r, verbose),
    }

    if let Some(insights) = insights {
        render_insights(insights);
    }

    Ok(())
}

fn quiet_line(report: &Report) -> String {
    match report {
        Report::Categorized(r) => format!(
            "Risk: {} {}  Score: {}  Categories: {}",
            r.risk.indicator(),
            colorize_risk(r.risk),
            r.score,
            r.categories
                .iter()
                .map(|c| c.category.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Report::Flat(FlatReport::NoMatches { .. }) => {
            "No privacy-related terms found".dimmed().to_string()
        }
        Report::Flat(FlatReport::Detected {
            total_mentions,
            distinct_terms,
            ..
        }) => format!(
            "Mentions: {}  Distinct terms: {}",
            total_mentions.to_string().yellow(),
            distinct_terms
        ),
    }
}

fn colorize_risk(risk: RiskLevel) -> ColoredString {
    match risk {
        RiskLevel::Low => risk.to_string().green().bold(),
        RiskLevel::Moderate => risk.to_string().yellow().bold(),
        RiskLevel::High => risk.to_string().red().bold(),
    }
}

fn render_categorized(report: &CategorizedReport, verbose: bool) {
    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Risk level         : {} {}", report.risk.indicator(), report.risk)
    );
    println!(
        " │  {:<48} │",
        format!("Matched categories : {}", report.score)
    );
    if verbose {
        println!(
            " │  {:<48} │",
            format!("Tokens scanned     : {}", report.tokens_scanned)
        );
    }
    println!(" └────────────────────────────────────────────────────┘\n");

    if let Some(warning) = report.warning {
        println!(" {} {}\n", "[NOTE]".dimmed().bold(), warning);
        return;
    }

    println!(" {} Analysis summary:\n", label_for(report.risk));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Matched terms").add_attribute(Attribute::Bold),
            Cell::new("Hits").add_attribute(Attribute::Bold),
        ]);

    for summary in &report.categories {
        table.add_row(vec![
            Cell::new(&summary.category),
            Cell::new(summary.terms.join(", ")).fg(Color::Cyan),
            Cell::new(summary.terms.len()).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
    println!();
}

fn label_for(risk: RiskLevel) -> ColoredString {
    match risk {
        RiskLevel::Low => "[LOW]".green().bold(),
        RiskLevel::Moderate => "[MODERATE]".yellow().bold(),
        RiskLevel::High => "[HIGH]".red().bold(),
    }
}

fn render_flat(report: &FlatReport, verbose: bool) {
    match report {
        FlatReport::NoMatches {
            tokens_scanned,
            warning,
        } => {
            println!(" {} No privacy-related terms found.", "✓".green());
            if verbose {
                println!("   {} ({} tokens scanned)", warning, tokens_scanned);
            }
            println!();
        }
        FlatReport::Detected {
            tokens_scanned,
            total_mentions,
            distinct_terms,
            top,
        } => {
            println!(" ┌────────────────────────────────────────────────────┐");
            println!(" │  {:<48} │", "SUMMARY".bold());
            println!(
                " │  {:<48} │",
                format!("{}  Privacy mentions : {:>4}", "⚠".yellow(), total_mentions)
            );
            println!(
                " │  {:<48} │",
                format!("   Distinct terms   : {:>4}", distinct_terms)
            );
            if verbose {
                println!(
                    " │  {:<48} │",
                    format!("   Tokens scanned   : {:>4}", tokens_scanned)
                );
            }
            println!(" └────────────────────────────────────────────────────┘\n");

            println!(" {} Top {} detected terms:\n", "[TERMS]".yellow().bold(), top.len());

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    Cell::new("#").add_attribute(Attribute::Bold),
                    Cell::new("Term").add_attribute(Attribute::Bold),
                    Cell::new("Count").add_attribute(Attribute::Bold),
                    Cell::new("Share").add_attribute(Attribute::Bold),
                ]);

            for (rank, entry) in top.iter().enumerate() {
                let share = entry.count as f64 * 100.0 / *total_mentions as f64;
                table.add_row(vec![
                    Cell::new(rank + 1).set_alignment(CellAlignment::Right),
                    Cell::new(&entry.term).fg(Color::Yellow),
                    Cell::new(entry.count).set_alignment(CellAlignment::Right),
                    Cell::new(format!("{:.1}%", share)).set_alignment(CellAlignment::Right),
                ]);
            }

            println!("{}", table);
            println!();
        }
    }
}

fn render_insights(insights: &Insights) {
    println!(" {} Advanced insights:\n", "[INFO]".cyan().bold());

    if insights.is_empty() {
        println!("   No people or organizations mentioned.\n");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Entity").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
        ]);

    for person in &insights.people {
        table.add_row(vec![Cell::new(person), Cell::new("PERSON").fg(Color::Green)]);
    }
    for org in &insights.organizations {
        table.add_row(vec![Cell::new(org), Cell::new("ORGANIZATION").fg(Color::Magenta)]);
    }

    println!("{}", table);
    println!();
}
