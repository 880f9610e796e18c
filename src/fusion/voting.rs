// Reciprocal-rank vote accumulation.
//
// Each signal walks its ranked list and awards 1/rank to every term it
// keeps. The rank counter advances only over kept terms, so an entry a
// vocabulary filter rejects does not consume a rank. The tally remembers
// first-vote order because the final sort breaks score ties by it.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::corpus::TermVectorMap;

/// Accumulated fused scores for one seed group.
///
/// A fresh tally is built per group; nothing carries over between groups.
#[derive(Debug, Default)]
pub struct VoteTally {
    order: Vec<String>,
    scores: HashMap<String, f64>,
}

impl VoteTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vote for a term. Unseen terms start from zero.
    pub fn add(&mut self, term: &str, vote: f64) {
        match self.scores.get_mut(term) {
            Some(score) => *score += vote,
            None => {
                self.order.push(term.to_string());
                self.scores.insert(term.to_string(), vote);
            }
        }
    }

    pub fn score(&self, term: &str) -> f64 {
        self.scores.get(term).copied().unwrap_or(0.0)
    }

    /// Consume the tally into (term, score) pairs in descending-score
    /// order. Ties keep first-vote order (the sort is stable).
    pub fn into_ranked(mut self) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .order
            .drain(..)
            .map(|term| {
                let score = self.scores.get(&term).copied().unwrap_or(0.0);
                (term, score)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }
}

/// Cast one signal's reciprocal-rank votes into the tally.
///
/// When `keep` is given, terms absent from that vocabulary are dropped
/// without consuming a rank; `None` votes for the list as-is.
pub fn cast_votes(tally: &mut VoteTally, ranked: &[&str], keep: Option<&TermVectorMap>) {
    let mut rank = 1.0_f64;
    for term in ranked {
        if let Some(vocabulary) = keep {
            if !vocabulary.contains(term) {
                continue;
            }
        }
        tally.add(term, 1.0 / rank);
        rank += 1.0;
    }
}
