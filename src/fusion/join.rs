// Evidence join for the surviving terms of one seed group.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::corpus::EvidenceStore;
use crate::fusion::FusedRanking;

/// Output row for one surviving term: its fused score plus whatever
/// document evidence the upstream stage recorded for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermEvidence {
    pub mrr: f64,
    pub similarity_score: Option<f64>,
    pub doc_ids: Vec<String>,
}

/// Attach document evidence to every surviving term of one seed group.
///
/// Evidence lives under the group's canonical seed. A term with no entry
/// there gets `similarity_score: null` and no doc ids, never an error;
/// the similarity score is also withheld when the entry lists no
/// documents. Keys come back sorted, which keeps the serialized output
/// byte-stable across runs.
pub fn join_evidence(
    canonical_seed: &str,
    ranking: &FusedRanking,
    store: &EvidenceStore,
) -> BTreeMap<String, TermEvidence> {
    let mut joined = BTreeMap::new();
    for (term, mrr) in ranking.iter() {
        let evidence = match store.record(canonical_seed, term) {
            Some(record) => TermEvidence {
                mrr,
                similarity_score: if record.doc_ids.is_empty() {
                    None
                } else {
                    record.similarity_score
                },
                doc_ids: record.doc_ids.clone(),
            },
            None => TermEvidence {
                mrr,
                similarity_score: None,
                doc_ids: Vec::new(),
            },
        };
        joined.insert(term.to_string(), evidence);
    }
    joined
}
