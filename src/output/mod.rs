// Output formatting: terminal display and artifact writing.

pub mod terminal;
pub mod writer;

/// Format one seeds-file line: surviving terms space-joined, with any
/// colon characters removed from the serialized line.
pub fn format_seeds_line(terms: &[String]) -> String {
    terms.join(" ").replace(':', "")
}
