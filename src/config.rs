use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// All knobs that describe *where the data lives* come from env vars (the
/// .env file is loaded automatically at startup via dotenvy); the knobs
/// that describe *one run* (dataset, topic, topk, threshold) come from the
/// CLI and are passed alongside this struct.
pub struct Config {
    /// Root directory containing one subdirectory per dataset
    /// (BALLOT_DATA_DIR, defaults to ./datasets).
    pub data_dir: PathBuf,
    /// Suffix of the PLM representation file, e.g. "sloberta" for a file
    /// named `<dataset>_sloberta` (BALLOT_PLM_NAME).
    pub plm_name: String,
    /// Language of the stop-word list used by `--drop-stopwords`
    /// (BALLOT_STOPWORD_LANG, defaults to "english").
    pub stopword_lang: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a default; validation that the paths actually
    /// exist happens in `require_data_dir` / the loaders, so that `--help`
    /// and friends work without a data tree.
    pub fn load() -> Result<Self> {
        Ok(Self {
            data_dir: env::var("BALLOT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("datasets")),
            plm_name: env::var("BALLOT_PLM_NAME").unwrap_or_else(|_| "sloberta".to_string()),
            stopword_lang: env::var("BALLOT_STOPWORD_LANG")
                .unwrap_or_else(|_| "english".to_string()),
        })
    }

    /// Check that the data root exists.
    /// Call this before any operation that reads the dataset tree.
    pub fn require_data_dir(&self) -> Result<()> {
        if !self.data_dir.is_dir() {
            anyhow::bail!(
                "Data directory not found: {}\n\
                 Set BALLOT_DATA_DIR in your .env file or create the directory.",
                self.data_dir.display()
            );
        }
        Ok(())
    }

    /// Directory of one dataset, e.g. `datasets/nyt`.
    pub fn dataset_dir(&self, dataset: &str) -> PathBuf {
        self.data_dir.join(dataset)
    }

    /// Directory of one topic inside a dataset, e.g. `datasets/nyt/topics/topic_0`.
    pub fn topic_dir(&self, dataset: &str, topic: &str) -> PathBuf {
        self.dataset_dir(dataset).join("topics").join(topic)
    }

    /// Seed-guided topic embeddings: `<topic_dir>/emb_<topic>_w.txt`.
    pub fn topic_embedding_path(&self, dataset: &str, topic: &str) -> PathBuf {
        self.topic_dir(dataset, topic).join(format!("emb_{topic}_w.txt"))
    }

    /// PLM representations of the dataset vocabulary: `<dataset_dir>/<dataset>_<plm>`.
    pub fn plm_embedding_path(&self, dataset: &str) -> PathBuf {
        self.dataset_dir(dataset).join(format!("{dataset}_{}", self.plm_name))
    }

    /// Ranked candidate lists from the context-ensemble stage:
    /// `<topic_dir>/intermediate_2.txt`.
    pub fn candidates_path(&self, dataset: &str, topic: &str) -> PathBuf {
        self.topic_dir(dataset, topic).join("intermediate_2.txt")
    }

    /// Document evidence for the candidate terms:
    /// `<topic_dir>/intermediate_2_doc_ids.json`.
    pub fn evidence_path(&self, dataset: &str, topic: &str) -> PathBuf {
        self.topic_dir(dataset, topic).join("intermediate_2_doc_ids.json")
    }

    /// Seed groups, one line per group: `<topic_dir>/<topic>_seeds.txt`.
    /// This file is both input and output; the fused ranking overwrites it
    /// (atomically) at the end of a run.
    pub fn seeds_path(&self, dataset: &str, topic: &str) -> PathBuf {
        self.topic_dir(dataset, topic).join(format!("{topic}_seeds.txt"))
    }

    /// Output JSON with per-term evidence: `<topic_dir>/<topic>_seeds_doc_ids.json`.
    pub fn output_json_path(&self, dataset: &str, topic: &str) -> PathBuf {
        self.topic_dir(dataset, topic)
            .join(format!("{topic}_seeds_doc_ids.json"))
    }
}

/// Check that a single expected input file exists, with a readable error.
///
/// The loaders would fail on open anyway, but checking up front lets `fuse`
/// report every missing piece of the dataset layout before doing any work.
pub fn require_file(path: &Path, what: &str) -> Result<()> {
    if !path.is_file() {
        anyhow::bail!("{} not found: {}", what, path.display());
    }
    Ok(())
}
