//! Launcher search filter.
//!
//! Binary match only: entries are either shown or hidden, never ranked.

/// Does `query` match `candidate`?
///
/// Case-insensitive. Matches when the query is a substring of the candidate or a
/// prefix of one of its whitespace-separated words. An empty query matches everything.
pub fn matches(candidate: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let haystack = candidate.to_lowercase();
    let needle = query.to_lowercase();

    haystack.contains(&needle)
        || haystack
            .split_whitespace()
            .any(|word| word.starts_with(&needle))
}
