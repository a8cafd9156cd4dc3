//! Ordered-token search predicate
//!
//! The listing screens all share one free-text filter: every word of the
//! query must occur, in query order, as a substring of the searched text.
//! This module provides that predicate as a pure function with no state.

/// Checks whether a free-text query matches a set of searchable fields.
///
/// The fields are joined with single spaces into one haystack and both sides
/// are lowercased, so matching is case-insensitive and may cross word
/// boundaries. The query is split on runs of whitespace into tokens; each
/// token must be found at or after the end of the previous token's match
/// (leftmost occurrence, forward-only cursor). Tokens therefore have to occur
/// in query order, and a repeated token needs a second, non-overlapping
/// occurrence.
///
/// An empty or whitespace-only query matches everything (no filter).
///
/// # Arguments
///
/// * `query` - Raw user input from the search box
/// * `fields` - The searchable fields of one catalog entry
///
/// # Examples
///
/// ```
/// use be_shared::utils::search::matches;
///
/// assert!(matches("wed decor", &["Wedding Decoration"]));
/// assert!(!matches("decor wed", &["Wedding Decoration"]));
/// assert!(matches("", &["anything at all"]));
/// ```
pub fn matches(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    let haystack = fields.join(" ").to_lowercase();

    // Forward-only cursor: each token must match at or after the end of the
    // previous token's match.
    let mut pos = 0;
    for token in query.split_whitespace() {
        match haystack[pos..].find(token) {
            Some(offset) => pos += offset + token.len(),
            None => return false,
        }
    }
    true
}
