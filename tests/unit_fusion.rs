// Unit tests for the rank-fusion core.
//
// Tests the pure fusion pieces through the library API: reciprocal-rank
// vote accumulation, cross-signal gating, the threshold filter, and the
// evidence join. No filesystem access anywhere in this file.

use std::collections::HashSet;

use ballot::corpus::{EvidenceStore, TermVectorMap};
use ballot::fusion::voting::cast_votes;
use ballot::fusion::{
    join_evidence, FusedRanking, FusionConfig, FusionError, RankFusionEngine, Signal, VoteTally,
};

fn map_of(entries: &[(&str, &[f64])]) -> TermVectorMap {
    let mut map = TermVectorMap::new();
    for (term, vector) in entries {
        map.insert(term.to_string(), vector.to_vec());
    }
    map
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================
// VoteTally / cast_votes: vote arithmetic
// ============================================================

#[test]
fn one_round_never_awards_more_than_one() {
    let mut tally = VoteTally::new();
    let terms: Vec<String> = (0..20).map(|i| format!("term{i}")).collect();
    let refs: Vec<&str> = terms.iter().map(String::as_str).collect();
    cast_votes(&mut tally, &refs, None);

    for term in &terms {
        assert!(
            tally.score(term) <= 1.0,
            "A single round must contribute at most 1/1 = 1.0"
        );
    }
}

#[test]
fn one_round_sums_to_the_harmonic_number() {
    let mut tally = VoteTally::new();
    let terms: Vec<String> = (0..20).map(|i| format!("term{i}")).collect();
    let refs: Vec<&str> = terms.iter().map(String::as_str).collect();
    cast_votes(&mut tally, &refs, None);

    let total: f64 = terms.iter().map(|t| tally.score(t)).sum();
    let harmonic_20: f64 = (1..=20).map(|r| 1.0 / r as f64).sum();
    assert!(
        (total - harmonic_20).abs() < 1e-9,
        "Round total should be H(20) ≈ {harmonic_20}, got {total}"
    );
}

#[test]
fn gated_round_reranks_survivors() {
    // The vocabulary filter drops "b"; "c" must inherit rank 2
    let vocabulary = map_of(&[("a", &[0.0]), ("c", &[0.0])]);
    let mut tally = VoteTally::new();
    cast_votes(&mut tally, &["a", "b", "c"], Some(&vocabulary));

    assert!((tally.score("a") - 1.0).abs() < 1e-12);
    assert_eq!(tally.score("b"), 0.0, "Filtered term gets no vote");
    assert!(
        (tally.score("c") - 0.5).abs() < 1e-12,
        "Filtered-out entries must not consume ranks"
    );
}

#[test]
fn three_rounds_accumulate_votes_per_term() {
    let mut tally = VoteTally::new();
    cast_votes(&mut tally, &["a", "b"], None);
    cast_votes(&mut tally, &["b", "a"], None);
    cast_votes(&mut tally, &["a"], None);

    assert!((tally.score("a") - 2.5).abs() < 1e-12);
    assert!((tally.score("b") - 1.5).abs() < 1e-12);
}

// ============================================================
// RankFusionEngine: fusion semantics
// ============================================================

#[test]
fn term_present_everywhere_collects_three_full_votes() {
    // Both maps know "a", "b", and the seed; "a" sits on top of every
    // signal, so its fused score is exactly 1/1 + 1/1 + 1/1
    let topic = map_of(&[("a", &[1.0, 0.0]), ("b", &[0.0, 1.0]), ("seed", &[1.0, 0.0])]);
    let plm = map_of(&[("a", &[1.0, 0.0]), ("b", &[0.0, 1.0]), ("seed", &[1.0, 0.0])]);
    let engine = RankFusionEngine::new(
        &topic,
        &plm,
        FusionConfig {
            topk: 5,
            threshold: 0.0,
            stop_list: None,
        },
    );

    let fused = engine
        .fuse_group(&strings(&["seed"]), &strings(&["a", "b"]))
        .unwrap();

    let terms: Vec<&str> = fused.terms.iter().map(String::as_str).collect();
    assert_eq!(terms, vec!["a", "b", "seed"]);
    assert!((fused.scores[0] - 3.0).abs() < 1e-12, "got {}", fused.scores[0]);
    // b: 1/3 (topic) + 1/3 (plm) + 1/2 (precomputed) = 7/6
    assert!((fused.scores[1] - 7.0 / 6.0).abs() < 1e-12);
    // seed: 1/2 + 1/2 from the similarity rounds
    assert!((fused.scores[2] - 1.0).abs() < 1e-12);
}

#[test]
fn survivors_need_strictly_more_than_the_threshold() {
    // "fringe" appears only in the precomputed list at rank 2: exactly
    // 0.5, which a 0.5 threshold must reject
    let topic = map_of(&[("core", &[1.0]), ("seed", &[1.0])]);
    let plm = map_of(&[("core", &[1.0]), ("seed", &[1.0])]);
    let engine = RankFusionEngine::new(
        &topic,
        &plm,
        FusionConfig {
            topk: 5,
            threshold: 0.5,
            stop_list: None,
        },
    );

    let fused = engine
        .fuse_group(&strings(&["seed"]), &strings(&["core", "fringe"]))
        .unwrap();

    assert!(fused.terms.contains(&"core".to_string()));
    assert!(
        !fused.terms.contains(&"fringe".to_string()),
        "Score equal to the threshold must not survive"
    );
}

#[test]
fn a_lone_third_place_vote_clears_the_default_threshold() {
    // The 0.3 default sits just below 1/3: a term whose only vote is a
    // third-place finish in the precomputed round stays in
    let topic = map_of(&[("seed", &[1.0])]);
    let plm = map_of(&[("seed", &[1.0])]);
    let engine = RankFusionEngine::new(&topic, &plm, FusionConfig::default());

    let fused = engine
        .fuse_group(&strings(&["seed"]), &strings(&["seed", "middle", "fringe"]))
        .unwrap();

    let fringe_idx = fused
        .terms
        .iter()
        .position(|t| t == "fringe")
        .expect("1/3 is strictly above the default threshold");
    assert!((fused.scores[fringe_idx] - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn all_terms_below_threshold_is_a_valid_empty_result() {
    let topic = map_of(&[("a", &[1.0]), ("seed", &[1.0])]);
    let plm = map_of(&[("a", &[1.0]), ("seed", &[1.0])]);
    let engine = RankFusionEngine::new(
        &topic,
        &plm,
        FusionConfig {
            topk: 5,
            threshold: 10.0,
            stop_list: None,
        },
    );

    let fused = engine.fuse_group(&strings(&["seed"]), &[]).unwrap();
    assert!(fused.is_empty(), "High threshold empties the result, no error");
}

#[test]
fn empty_seed_group_errors_instead_of_dividing_by_zero() {
    let topic = map_of(&[("a", &[1.0])]);
    let plm = map_of(&[("a", &[1.0])]);
    let engine = RankFusionEngine::new(&topic, &plm, FusionConfig::default());

    let err = engine.fuse_group(&[], &[]).unwrap_err();
    assert_eq!(
        err,
        FusionError::NoSeedOverlap {
            signal: Signal::TopicEmbedding,
            seed_count: 0,
        }
    );
}

#[test]
fn unknown_seeds_error_names_the_failing_signal() {
    // Seeds known to the topic map but not the PLM map fail on the
    // second signal
    let topic = map_of(&[("seed", &[1.0]), ("a", &[0.5])]);
    let plm = map_of(&[("a", &[1.0])]);
    let engine = RankFusionEngine::new(&topic, &plm, FusionConfig::default());

    let err = engine.fuse_group(&strings(&["seed"]), &[]).unwrap_err();
    assert_eq!(
        err,
        FusionError::NoSeedOverlap {
            signal: Signal::PlmRepresentation,
            seed_count: 1,
        }
    );
    assert!(err.to_string().contains("PLM representation"));
}

#[test]
fn stop_listed_terms_are_dropped_after_fusion() {
    let topic = map_of(&[("The", &[2.0]), ("news", &[1.0]), ("seed", &[1.0])]);
    let plm = map_of(&[("The", &[2.0]), ("news", &[1.0]), ("seed", &[1.0])]);
    let stop_list: HashSet<String> = ["the".to_string()].into_iter().collect();
    let engine = RankFusionEngine::new(
        &topic,
        &plm,
        FusionConfig {
            topk: 5,
            threshold: 0.0,
            stop_list: Some(stop_list),
        },
    );

    let fused = engine.fuse_group(&strings(&["seed"]), &[]).unwrap();
    assert!(!fused.terms.contains(&"The".to_string()));
    assert!(fused.terms.contains(&"news".to_string()));
}

// ============================================================
// join_evidence: lookup defaults
// ============================================================

fn store_from_json(json: &str) -> EvidenceStore {
    EvidenceStore::from_map(serde_json::from_str(json).unwrap())
}

#[test]
fn join_never_fails_on_missing_evidence() {
    let store = store_from_json(r#"{}"#);
    let ranking = FusedRanking {
        terms: strings(&["a", "b"]),
        scores: vec![2.0, 1.0],
    };

    let joined = join_evidence("nobody", &ranking, &store);
    assert_eq!(joined.len(), 2);
    for row in joined.values() {
        assert_eq!(row.similarity_score, None);
        assert!(row.doc_ids.is_empty());
    }
}

#[test]
fn join_carries_mrr_through_unchanged() {
    let store = store_from_json(
        r#"{"seed": {"a": {"similarity_score": 0.7, "doc_ids": ["d1"]}}}"#,
    );
    let ranking = FusedRanking {
        terms: strings(&["a"]),
        scores: vec![2.75],
    };

    let joined = join_evidence("seed", &ranking, &store);
    assert!((joined["a"].mrr - 2.75).abs() < 1e-12);
    assert_eq!(joined["a"].similarity_score, Some(0.7));
    assert_eq!(joined["a"].doc_ids, vec!["d1"]);
}

#[test]
fn join_withholds_similarity_when_no_documents_back_it() {
    let store = store_from_json(
        r#"{"seed": {"a": {"similarity_score": 0.7, "doc_ids": []}}}"#,
    );
    let ranking = FusedRanking {
        terms: strings(&["a"]),
        scores: vec![1.0],
    };

    let joined = join_evidence("seed", &ranking, &store);
    assert_eq!(joined["a"].similarity_score, None);
    assert!(joined["a"].doc_ids.is_empty());
}
