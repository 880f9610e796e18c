// Topic inspection: shows what each fusion input holds for a topic and,
// once a run has been made, the fused evidence written for it.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;
use crate::corpus::candidates::load_candidate_lists;
use crate::corpus::embeddings::load_vectors;
use crate::corpus::evidence::load_evidence;
use crate::corpus::seeds::{load_seed_groups, SeedGroup};
use crate::fusion::TermEvidence;
use crate::output::terminal;

/// Report the state of one topic's fusion inputs and outputs.
///
/// Missing files are reported, not fatal; the point of this command is to
/// see how far along a topic's dataset layout is.
pub fn report(config: &Config, dataset: &str, topic: &str) -> Result<()> {
    println!("{}", format!("=== {dataset}/{topic} ===").bold());

    let topic_emb_path = config.topic_embedding_path(dataset, topic);
    if topic_emb_path.is_file() {
        let vectors = load_vectors(&topic_emb_path)?;
        println!("Topic embeddings: {} terms", vectors.len());
    } else {
        println!(
            "Topic embeddings: not found at {}",
            topic_emb_path.display()
        );
    }

    let plm_path = config.plm_embedding_path(dataset);
    if plm_path.is_file() {
        let vectors = load_vectors(&plm_path)?;
        println!("PLM representations: {} terms", vectors.len());
    } else {
        println!("PLM representations: not found at {}", plm_path.display());
    }

    let candidates_path = config.candidates_path(dataset, topic);
    if candidates_path.is_file() {
        let lists = load_candidate_lists(&candidates_path)?;
        let longest = lists.iter().map(Vec::len).max().unwrap_or(0);
        println!(
            "Candidate lists: {} (longest holds {} terms)",
            lists.len(),
            longest
        );
    } else {
        println!(
            "Candidate lists: not found at {}",
            candidates_path.display()
        );
    }

    let seeds_path = config.seeds_path(dataset, topic);
    let groups = if seeds_path.is_file() {
        let groups = load_seed_groups(&seeds_path)?;
        println!("Seed groups: {}", groups.len());
        Some(groups)
    } else {
        println!("Seed groups: not found at {}", seeds_path.display());
        None
    };

    let evidence_path = config.evidence_path(dataset, topic);
    if evidence_path.is_file() {
        let evidence = load_evidence(&evidence_path)?;
        match &groups {
            Some(groups) => {
                let canonical: Vec<&str> =
                    groups.iter().filter_map(SeedGroup::canonical).collect();
                let covered = canonical
                    .iter()
                    .filter(|seed| evidence.has_seed(seed))
                    .count();
                println!(
                    "Evidence: {} seeds on record, covering {} of {} canonical seeds",
                    evidence.seed_count(),
                    covered,
                    canonical.len()
                );
            }
            None => println!("Evidence: {} seeds on record", evidence.seed_count()),
        }
    } else {
        println!("Evidence: not found at {}", evidence_path.display());
    }

    let json_path = config.output_json_path(dataset, topic);
    if !json_path.is_file() {
        println!("Fused output: not yet written");
        println!("  Run `ballot fuse --dataset {dataset} --topic {topic}` to produce it");
        return Ok(());
    }

    let file = File::open(&json_path)
        .with_context(|| format!("Failed to open {}", json_path.display()))?;
    let joined: BTreeMap<String, BTreeMap<String, TermEvidence>> =
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse {}", json_path.display()))?;

    if joined.is_empty() {
        println!("Fused output: written, but no group kept any term");
        return Ok(());
    }
    for (seed, rows) in &joined {
        terminal::display_seed_evidence(seed, rows);
    }

    Ok(())
}
