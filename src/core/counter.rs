use regex::Regex;
use std::sync::OnceLock;

/// The keyword this whole service exists to count.
pub const KEYWORD: &str = "gLumi";

fn keyword_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)gLumi").expect("keyword regex must compile"))
}

/// Counts non-overlapping, case-insensitive keyword matches. Plain
/// substring semantics: occurrences inside larger words count too.
pub fn count_mentions(text: &str) -> usize {
    keyword_re().find_iter(text).count()
}

/// Coarse estimate of how many discrete items a corpus represents.
/// An acknowledged heuristic, not an accurate item count.
pub fn estimate_item_count(text: &str) -> usize {
    std::cmp::max(1, text.len() / 100)
}
