// Pipeline orchestration: wiring the loaders, the fusion engine, and the
// artifact writers into one run.

use std::path::PathBuf;

pub mod ensemble;
pub mod inspect;

use crate::fusion::FusedRanking;

/// One fusion run, as selected on the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub dataset: String,
    pub topic: String,
    /// Truncation depth per signal.
    pub topk: usize,
    /// Strict lower bound on the fused score.
    pub threshold: f64,
    /// Drop stop words from the surviving terms.
    pub drop_stopwords: bool,
}

/// Outcome for one seed group, in input order.
///
/// Skipped groups stay in the list so line positions survive into the
/// rewritten seeds file; their ranking is empty and `skip_reason` says
/// why.
#[derive(Debug)]
pub struct GroupOutcome {
    pub canonical_seed: Option<String>,
    pub ranking: FusedRanking,
    pub skip_reason: Option<String>,
}

/// Everything one run produced, for display and tests.
#[derive(Debug)]
pub struct RunSummary {
    pub outcomes: Vec<GroupOutcome>,
    pub seeds_path: PathBuf,
    pub json_path: PathBuf,
}
