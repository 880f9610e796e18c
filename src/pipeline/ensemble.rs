// Rank-ensemble run: fuse three ranking signals per seed group, then
// rewrite the topic's seed artifacts.
//
// Inputs come from earlier stages of the expansion pipeline: seed-guided
// topic embeddings, PLM representations of the vocabulary, the ranked
// candidate lists of the context-ensemble stage, and its document
// evidence sidecar. Each seed group is fused independently; a group that
// cannot be fused (no seed overlap with a vocabulary) is logged and
// written out as an empty line so downstream stages keep seeing one line
// per group.

use std::collections::{BTreeMap, HashSet};

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use stop_words::{get, LANGUAGE};
use tracing::{info, warn};

use crate::config::{self, Config};
use crate::corpus::candidates::load_candidate_lists;
use crate::corpus::embeddings::load_vectors;
use crate::corpus::evidence::load_evidence;
use crate::corpus::seeds::load_seed_groups;
use crate::fusion::{join_evidence, FusedRanking, FusionConfig, RankFusionEngine, TermEvidence};
use crate::output::format_seeds_line;
use crate::output::writer::atomic_write_text;
use crate::pipeline::{GroupOutcome, RunOptions, RunSummary};

/// Run rank fusion for one topic and write both output artifacts.
pub fn run(config: &Config, options: &RunOptions) -> Result<RunSummary> {
    config.require_data_dir()?;

    let topic_emb_path = config.topic_embedding_path(&options.dataset, &options.topic);
    let plm_emb_path = config.plm_embedding_path(&options.dataset);
    let candidates_path = config.candidates_path(&options.dataset, &options.topic);
    let evidence_path = config.evidence_path(&options.dataset, &options.topic);
    let seeds_path = config.seeds_path(&options.dataset, &options.topic);

    // Report every missing input at once instead of one per run
    let required = [
        (&topic_emb_path, "Topic embeddings"),
        (&plm_emb_path, "PLM representations"),
        (&candidates_path, "Candidate rankings"),
        (&evidence_path, "Evidence store"),
        (&seeds_path, "Seeds file"),
    ];
    let missing: Vec<String> = required
        .iter()
        .filter_map(|(path, what)| {
            config::require_file(path, what).err().map(|e| e.to_string())
        })
        .collect();
    if !missing.is_empty() {
        anyhow::bail!("{}", missing.join("\n"));
    }

    // Step 1: Load the two vector signals
    println!(
        "Loading embeddings for {}/{}...",
        options.dataset, options.topic
    );
    let topic_vectors = load_vectors(&topic_emb_path)?;
    let plm_vectors = load_vectors(&plm_emb_path)?;

    // Step 2: Load the context-ensemble outputs and the seed groups
    let candidate_lists = load_candidate_lists(&candidates_path)?;
    let evidence = load_evidence(&evidence_path)?;
    let seed_groups = load_seed_groups(&seeds_path)?;

    if seed_groups.len() != candidate_lists.len() {
        warn!(
            seed_groups = seed_groups.len(),
            candidate_lists = candidate_lists.len(),
            "Seed group and candidate list counts differ, fusing the shorter prefix"
        );
    }

    // Step 3: Fuse each seed group
    let stop_list = if options.drop_stopwords {
        Some(stop_list_for(&config.stopword_lang)?)
    } else {
        None
    };
    let engine = RankFusionEngine::new(
        &topic_vectors,
        &plm_vectors,
        FusionConfig {
            topk: options.topk,
            threshold: options.threshold,
            stop_list,
        },
    );

    let group_count = seed_groups.len().min(candidate_lists.len());
    let pb = ProgressBar::new(group_count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Fusing [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let mut outcomes = Vec::with_capacity(group_count);
    let mut joined_by_seed: BTreeMap<String, BTreeMap<String, TermEvidence>> = BTreeMap::new();

    for (group, candidates) in seed_groups.iter().zip(candidate_lists.iter()) {
        let canonical = group.canonical().map(str::to_string);
        match engine.fuse_group(&group.terms, candidates) {
            Ok(ranking) => {
                if let Some(seed) = &canonical {
                    if !evidence.has_seed(seed) {
                        warn!(
                            seed = seed.as_str(),
                            "Canonical seed missing from the evidence store, joining empty evidence"
                        );
                    }
                    joined_by_seed.insert(seed.clone(), join_evidence(seed, &ranking, &evidence));
                }
                outcomes.push(GroupOutcome {
                    canonical_seed: canonical,
                    ranking,
                    skip_reason: None,
                });
            }
            Err(e) => {
                warn!(
                    seed = canonical.as_deref().unwrap_or("(empty)"),
                    error = %e,
                    "Skipping seed group"
                );
                outcomes.push(GroupOutcome {
                    canonical_seed: canonical,
                    ranking: FusedRanking::default(),
                    skip_reason: Some(e.to_string()),
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    // Step 4: Write both artifacts atomically
    let seeds_content: String = outcomes
        .iter()
        .map(|outcome| format_seeds_line(&outcome.ranking.terms) + "\n")
        .collect();
    atomic_write_text(&seeds_path, &seeds_content)?;
    println!(
        "  {} Saved ranked terms to {}",
        "✓".green(),
        seeds_path.display()
    );

    let json_path = config.output_json_path(&options.dataset, &options.topic);
    let json = serde_json::to_string(&joined_by_seed)
        .context("Failed to serialize the evidence output")?;
    atomic_write_text(&json_path, &json)?;
    println!(
        "  {} Saved document ids featuring ranked terms to {}",
        "✓".green(),
        json_path.display()
    );

    let skipped = outcomes.iter().filter(|o| o.skip_reason.is_some()).count();
    info!(
        groups = outcomes.len(),
        skipped,
        topk = options.topk,
        threshold = options.threshold,
        "Rank fusion complete"
    );

    Ok(RunSummary {
        outcomes,
        seeds_path,
        json_path,
    })
}

/// Stop list for the configured language, lowercased for case-insensitive
/// matching.
fn stop_list_for(lang: &str) -> Result<HashSet<String>> {
    let language = match lang.to_lowercase().as_str() {
        "english" => LANGUAGE::English,
        "slovene" | "slovenian" => LANGUAGE::Slovenian,
        other => anyhow::bail!(
            "Unsupported stop-word language {:?} (supported: english, slovenian)",
            other
        ),
    };
    Ok(get(language).into_iter().map(|w| w.to_lowercase()).collect())
}
