// Three-signal rank fusion for one seed group.
//
// The two similarity signals gate each other: a term ranked by the topic
// embeddings only earns a vote if the PLM vocabulary also knows it, and
// vice versa. The precomputed context-ensemble round votes unfiltered.
// Fused scores below the threshold are dropped, surviving terms are
// de-spaced, and the result is ordered by descending score.

use std::collections::HashSet;

use crate::corpus::TermVectorMap;
use crate::fusion::similarity::rank_by_seed_similarity;
use crate::fusion::voting::{cast_votes, VoteTally};
use crate::fusion::{FusionError, Signal};

/// Tuning knobs for one fusion run.
#[derive(Debug, Clone)]
pub struct FusionConfig {
    /// Truncation depth per signal (default 20).
    pub topk: usize,
    /// Strict lower bound a fused score must exceed to survive
    /// (default 0.3, just below a lone third-place vote of 1/3).
    pub threshold: f64,
    /// Optional stop list; surviving terms found in it are dropped.
    pub stop_list: Option<HashSet<String>>,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            topk: 20,
            threshold: 0.3,
            stop_list: None,
        }
    }
}

/// Fused result for one seed group: terms in descending-score order with
/// their parallel scores.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FusedRanking {
    pub terms: Vec<String>,
    pub scores: Vec<f64>,
}

impl FusedRanking {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// (term, score) pairs in result order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.terms
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }
}

/// Fuses the three ranking signals for seed groups of one topic.
///
/// Holds only borrowed, immutable inputs; every `fuse_group` call builds
/// its own tally, so repeated calls with the same inputs give the same
/// answer.
pub struct RankFusionEngine<'a> {
    topic_vectors: &'a TermVectorMap,
    plm_vectors: &'a TermVectorMap,
    config: FusionConfig,
}

impl<'a> RankFusionEngine<'a> {
    pub fn new(
        topic_vectors: &'a TermVectorMap,
        plm_vectors: &'a TermVectorMap,
        config: FusionConfig,
    ) -> Self {
        Self {
            topic_vectors,
            plm_vectors,
            config,
        }
    }

    /// Fuse the three signals for one seed group.
    ///
    /// `precomputed` is the group's context-ensemble ranking; empty
    /// entries in it consume ranks but can never survive the output
    /// filter.
    pub fn fuse_group(
        &self,
        seeds: &[String],
        precomputed: &[String],
    ) -> Result<FusedRanking, FusionError> {
        let mut tally = VoteTally::new();

        // Step 1: topic-embedding similarity round, keeping only terms
        // the PLM vocabulary also knows.
        let topic_ranked = rank_by_seed_similarity(
            self.topic_vectors,
            seeds,
            self.config.topk,
            Signal::TopicEmbedding,
        )?;
        cast_votes(&mut tally, &topic_ranked, Some(self.plm_vectors));

        // Step 2: PLM similarity round, gated the other way around.
        let plm_ranked = rank_by_seed_similarity(
            self.plm_vectors,
            seeds,
            self.config.topk,
            Signal::PlmRepresentation,
        )?;
        cast_votes(&mut tally, &plm_ranked, Some(self.topic_vectors));

        // Step 3: context-ensemble round, unfiltered.
        let ensemble: Vec<&str> = precomputed
            .iter()
            .take(self.config.topk)
            .map(String::as_str)
            .collect();
        cast_votes(&mut tally, &ensemble, None);

        // Step 4: sort by fused score, keep strict-threshold survivors,
        // strip inner spaces so multiword terms stay single output tokens.
        let mut result = FusedRanking::default();
        for (term, score) in tally.into_ranked() {
            if score <= self.config.threshold {
                continue;
            }
            let cleaned = term.replace(' ', "");
            if cleaned.is_empty() {
                continue;
            }
            if let Some(stop_list) = &self.config.stop_list {
                if stop_list.contains(&cleaned.to_lowercase()) {
                    continue;
                }
            }
            result.terms.push(cleaned);
            result.scores.push(score);
        }

        Ok(result)
    }
}
