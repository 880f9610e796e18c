// Colored terminal output for fusion runs.
//
// This module handles all terminal-specific formatting: colors, the
// per-group outcome table, the per-seed evidence report. The fuse and
// inspect commands delegate their display calls here.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::fusion::TermEvidence;
use crate::pipeline::RunSummary;

/// Display the per-group outcome table after a fusion run.
pub fn display_run_summary(summary: &RunSummary) {
    if summary.outcomes.is_empty() {
        println!("No seed groups found. Check the seeds file.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Rank Fusion ({} seed groups) ===", summary.outcomes.len()).bold()
    );
    println!();

    println!(
        "  {:>5}  {:<20} {:>5}  {}",
        "Group".dimmed(),
        "Seed".dimmed(),
        "Kept".dimmed(),
        "Top terms".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for (i, outcome) in summary.outcomes.iter().enumerate() {
        let seed = outcome.canonical_seed.as_deref().unwrap_or("(empty)");
        if let Some(reason) = &outcome.skip_reason {
            println!(
                "  {:>4}.  {:<20} {:>5}  {}",
                i + 1,
                seed,
                "-",
                format!("skipped: {reason}").yellow()
            );
            continue;
        }

        let preview = if outcome.ranking.is_empty() {
            "(no term above threshold)".dimmed().to_string()
        } else {
            top_terms_preview(&outcome.ranking.terms, 3)
        };
        println!(
            "  {:>4}.  {:<20} {:>5}  {}",
            i + 1,
            seed,
            outcome.ranking.len(),
            preview
        );
    }

    println!();

    let skipped = summary
        .outcomes
        .iter()
        .filter(|o| o.skip_reason.is_some())
        .count();
    let empty = summary
        .outcomes
        .iter()
        .filter(|o| o.skip_reason.is_none() && o.ranking.is_empty())
        .count();

    if skipped > 0 {
        println!("  {} {} group(s) skipped", "!".bright_red(), skipped);
    }
    if empty > 0 {
        println!("  {} {} group(s) kept no terms", "~".yellow(), empty);
    }
}

/// Display one canonical seed's joined evidence, best-scored terms first.
pub fn display_seed_evidence(seed: &str, rows: &BTreeMap<String, TermEvidence>) {
    println!(
        "\n{}",
        format!("=== {} ({} terms) ===", seed, rows.len()).bold()
    );

    let mut ordered: Vec<(&String, &TermEvidence)> = rows.iter().collect();
    ordered.sort_by(|a, b| {
        b.1.mrr
            .partial_cmp(&a.1.mrr)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (term, row) in ordered {
        let similarity = match row.similarity_score {
            Some(s) => format!("{s:.3}"),
            None => "-".to_string(),
        };
        println!(
            "  {:<28} mrr {:>6.3}  sim {:>6}  {} docs",
            term,
            row.mrr,
            similarity,
            row.doc_ids.len()
        );
    }
}

fn top_terms_preview(terms: &[String], max: usize) -> String {
    let mut preview: String = terms
        .iter()
        .take(max)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if terms.len() > max {
        preview.push_str(", ...");
    }
    preview
}
