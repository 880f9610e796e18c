// Ranked candidate lists from the context-ensemble stage.
//
// One line per seed group: `label:term1,term2,...`. Only the part after the
// first colon carries data; any further colons inside the remainder are
// delimiter noise from the upstream writer and are deleted (the segments
// are concatenated), matching how the stage that wrote the file reads it
// back. The comma-split is taken literally, so empty segments survive:
// they hold a rank position and get filtered at output time, not here.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Parse one candidate line into its ranked term list.
///
/// A line without a colon has no data part and yields a single empty
/// entry, same as `label:` would.
pub fn parse_candidate_line(line: &str) -> Vec<String> {
    let mut parts = line.trim().split(':');
    let _label = parts.next();
    let rest: String = parts.collect();
    rest.split(',').map(str::to_string).collect()
}

/// Load the per-group candidate rankings, one line per seed group.
pub fn load_candidate_lists(path: &Path) -> Result<Vec<Vec<String>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open candidate file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut lists = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line
            .with_context(|| format!("Failed to read {} at line {}", path.display(), idx + 1))?;
        lists.push(parse_candidate_line(&line));
    }

    info!(file = %path.display(), lists = lists.len(), "Loaded candidate rankings");
    Ok(lists)
}
