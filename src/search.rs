//! Entry search.
//!
//! A pure filter over the in-memory entries, matching the query against the
//! text fields an entry carries. Like the statistics functions this does no
//! I/O and never mutates its input.

use crate::model::{Entry, SearchResult};

/// Returns the entries matching `query`, projected to result rows.
///
/// The query is trimmed and matched case-insensitively as a substring of the
/// title, content, location, and category. A blank query matches nothing.
/// Results keep the entries' stored (newest-first) order.
pub fn search_entries(entries: &[Entry], query: &str) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    entries
        .iter()
        .filter(|entry| matches(entry, &needle))
        .map(SearchResult::from)
        .collect()
}

fn matches(entry: &Entry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle)
        || entry.content.to_lowercase().contains(needle)
        || entry
            .location
            .as_deref()
            .is_some_and(|location| location.to_lowercase().contains(needle))
        || entry.category.to_lowercase().contains(needle)
}
