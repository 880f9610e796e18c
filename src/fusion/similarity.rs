// Seed-similarity ranking for one vector signal.
//
// Every vocabulary term is scored by its mean dot product against the
// seed vectors, then the vocabulary is sorted by that score and cut to
// the top k. Seeds the map does not know are skipped; a group whose
// seeds are all unknown cannot be ranked at all and surfaces as a
// typed error rather than a silent zero score.

use std::cmp::Ordering;

use crate::corpus::TermVectorMap;
use crate::fusion::{FusionError, Signal};

/// Rank a signal's vocabulary by mean dot-product similarity to the seeds.
///
/// Returns at most `topk` terms in descending-similarity order. Ties keep
/// the vocabulary's file order (the sort is stable).
pub fn rank_by_seed_similarity<'a>(
    vectors: &'a TermVectorMap,
    seeds: &[String],
    topk: usize,
    signal: Signal,
) -> Result<Vec<&'a str>, FusionError> {
    let seed_vectors: Vec<&[f64]> = seeds.iter().filter_map(|s| vectors.get(s)).collect();
    if seed_vectors.is_empty() {
        return Err(FusionError::NoSeedOverlap {
            signal,
            seed_count: seeds.len(),
        });
    }

    let mut scored: Vec<(&str, f64)> = vectors
        .iter()
        .map(|(term, vector)| (term, mean_seed_similarity(vector, &seed_vectors)))
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(topk);

    Ok(scored.into_iter().map(|(term, _)| term).collect())
}

/// Mean dot product between one term vector and each seed vector.
fn mean_seed_similarity(vector: &[f64], seed_vectors: &[&[f64]]) -> f64 {
    let total: f64 = seed_vectors.iter().map(|seed| dot(vector, seed)).sum();
    total / seed_vectors.len() as f64
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
