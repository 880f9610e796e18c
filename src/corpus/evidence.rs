// Document evidence sidecar written by the context-ensemble stage:
// one JSON object, canonical seed -> term -> {similarity_score, doc_ids}.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Evidence the upstream stage attached to one (seed, term) pair.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvidenceRecord {
    #[serde(default)]
    pub similarity_score: Option<f64>,
    #[serde(default)]
    pub doc_ids: Vec<String>,
}

/// Read-only seed -> term -> evidence mapping.
///
/// A canonical seed absent from the store behaves as if it had an empty
/// term map: lookups return `None`, they never fail.
#[derive(Debug, Default)]
pub struct EvidenceStore {
    by_seed: HashMap<String, HashMap<String, EvidenceRecord>>,
}

impl EvidenceStore {
    /// Build a store from an already-deserialized mapping.
    pub fn from_map(by_seed: HashMap<String, HashMap<String, EvidenceRecord>>) -> Self {
        Self { by_seed }
    }

    pub fn record(&self, seed: &str, term: &str) -> Option<&EvidenceRecord> {
        self.by_seed.get(seed)?.get(term)
    }

    pub fn has_seed(&self, seed: &str) -> bool {
        self.by_seed.contains_key(seed)
    }

    pub fn seed_count(&self) -> usize {
        self.by_seed.len()
    }
}

pub fn load_evidence(path: &Path) -> Result<EvidenceStore> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open evidence file {}", path.display()))?;
    let reader = BufReader::new(file);

    let by_seed: HashMap<String, HashMap<String, EvidenceRecord>> =
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse evidence JSON {}", path.display()))?;

    info!(file = %path.display(), seeds = by_seed.len(), "Loaded evidence store");
    Ok(EvidenceStore::from_map(by_seed))
}
