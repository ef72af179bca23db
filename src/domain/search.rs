//! Substring matching for note search.

/// Returns true if `query` occurs in `content`, ignoring case.
///
/// Matches against the full note body. An empty query matches every note.
pub fn matches_query(content: &str, query: &str) -> bool {
    content.to_lowercase().contains(&query.to_lowercase())
}
