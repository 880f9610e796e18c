// Rank fusion core.
//
// Three independent signals each rank the vocabulary for a seed group:
// seed-guided topic embeddings, PLM representations, and the precomputed
// context-ensemble list. Each signal casts reciprocal-rank votes (1/rank)
// into a tally, the fused scores are threshold-filtered and sorted, and
// the survivors are joined against the document evidence store.

use std::fmt;

use thiserror::Error;

pub mod engine;
pub mod join;
pub mod similarity;
pub mod voting;

pub use engine::{FusedRanking, FusionConfig, RankFusionEngine};
pub use join::{join_evidence, TermEvidence};
pub use voting::VoteTally;

/// A vector-similarity ranking signal. The precomputed context-ensemble
/// round cannot fail, so errors only ever name these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Seed-guided embeddings trained on the topic corpus.
    TopicEmbedding,
    /// Pretrained language-model representations of the vocabulary.
    PlmRepresentation,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::TopicEmbedding => write!(f, "topic embedding"),
            Signal::PlmRepresentation => write!(f, "PLM representation"),
        }
    }
}

/// Per-group failures of the fusion computation.
///
/// These are data problems scoped to a single seed group. The pipeline
/// logs them and moves on to the next group instead of aborting the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FusionError {
    /// None of the group's seeds appear in a signal's vocabulary, so a
    /// mean similarity to the seeds cannot be computed. An empty seed
    /// group fails the same way with `seed_count` 0.
    #[error("no overlap between {seed_count} seed(s) and the {signal} vocabulary")]
    NoSeedOverlap { signal: Signal, seed_count: usize },
}
