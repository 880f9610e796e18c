// Term→vector maps loaded from word2vec-style text files.
//
// Both similarity signals (the seed-guided topic embeddings and the PLM
// representations) arrive in the same format: an optional `<count> <dim>`
// header line, then one `term v1 v2 ... vd` line per term. The map remembers
// file order because the similarity ranking breaks score ties by it.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

/// A term→vector mapping that preserves the order terms appeared in.
///
/// Lookups go through a HashMap; `terms()` iterates in file order, which is
/// what makes the downstream stable sort deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct TermVectorMap {
    order: Vec<String>,
    vectors: HashMap<String, Vec<f64>>,
}

impl TermVectorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term. A repeated term keeps its first position but takes
    /// the newest vector (last line wins, like rebuilding a dict).
    pub fn insert(&mut self, term: String, vector: Vec<f64>) {
        if !self.vectors.contains_key(&term) {
            self.order.push(term.clone());
        }
        self.vectors.insert(term, vector);
    }

    pub fn get(&self, term: &str) -> Option<&[f64]> {
        self.vectors.get(term).map(Vec::as_slice)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.vectors.contains_key(term)
    }

    /// All terms, in the order they first appeared in the source file.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// (term, vector) pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.order
            .iter()
            .filter_map(|term| self.vectors.get(term).map(|v| (term.as_str(), v.as_slice())))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Load a term→vector map from a whitespace-separated text file.
///
/// Accepts the common word2vec text layout: if the first line is exactly
/// two integers it is treated as a `<count> <dim>` header and skipped.
/// Every vector line must have the same dimensionality and finite
/// components; anything else is a data error worth failing loudly on.
pub fn load_vectors(path: &Path) -> Result<TermVectorMap> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open embedding file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut map = TermVectorMap::new();
    let mut dim: Option<usize> = None;
    let mut duplicates = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line
            .with_context(|| format!("Failed to read {} at line {}", path.display(), idx + 1))?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        // Header line: exactly two integer tokens, only valid as line 1
        if idx == 0 && is_count_header(line) {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(term) = tokens.next() else {
            continue;
        };
        let vector = tokens
            .map(|t| {
                let v: f64 = t.parse().map_err(|_| {
                    anyhow::anyhow!(
                        "Bad vector component {:?} in {} at line {}",
                        t,
                        path.display(),
                        idx + 1
                    )
                })?;
                if !v.is_finite() {
                    anyhow::bail!(
                        "Non-finite vector component in {} at line {}",
                        path.display(),
                        idx + 1
                    );
                }
                Ok(v)
            })
            .collect::<Result<Vec<f64>>>()?;

        if vector.is_empty() {
            anyhow::bail!(
                "Term {:?} has no vector components in {} at line {}",
                term,
                path.display(),
                idx + 1
            );
        }
        match dim {
            None => dim = Some(vector.len()),
            Some(d) if d != vector.len() => {
                anyhow::bail!(
                    "Inconsistent vector dimension in {} at line {}: expected {}, got {}",
                    path.display(),
                    idx + 1,
                    d,
                    vector.len()
                );
            }
            Some(_) => {}
        }

        if map.contains(term) {
            duplicates += 1;
        }
        map.insert(term.to_string(), vector);
    }

    if map.is_empty() {
        anyhow::bail!("Embedding file {} contains no vectors", path.display());
    }
    if duplicates > 0 {
        warn!(
            file = %path.display(),
            duplicates,
            "Duplicate terms in embedding file, keeping the last vector for each"
        );
    }
    info!(
        file = %path.display(),
        terms = map.len(),
        dim = dim.unwrap_or(0),
        "Loaded term vectors"
    );

    Ok(map)
}

/// True when a line looks like a word2vec `<count> <dim>` header.
fn is_count_header(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    tokens.len() == 2 && tokens.iter().all(|t| t.parse::<u64>().is_ok())
}
