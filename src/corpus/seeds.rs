// Seed groups: the per-line seed terms steering each fusion round.
//
// One line per group, whitespace-separated. The first seed on a line is
// the group's canonical identifier: it keys the evidence store and the
// output JSON. Line positions matter (group N is paired with candidate
// line N), so blank lines are kept as empty groups rather than dropped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// An ordered group of seed terms for one topic subcategory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedGroup {
    pub terms: Vec<String>,
}

impl SeedGroup {
    /// Parse one seeds-file line. Blank lines produce an empty group.
    pub fn parse(line: &str) -> Self {
        Self {
            terms: line.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// The canonical seed, the first term of the group. `None` only for
    /// an empty group, which no fusion round ever gets past.
    pub fn canonical(&self) -> Option<&str> {
        self.terms.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Load all seed groups from a seeds file, one group per line.
pub fn load_seed_groups(path: &Path) -> Result<Vec<SeedGroup>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open seeds file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut groups = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line
            .with_context(|| format!("Failed to read {} at line {}", path.display(), idx + 1))?;
        groups.push(SeedGroup::parse(&line));
    }

    info!(file = %path.display(), groups = groups.len(), "Loaded seed groups");
    Ok(groups)
}
