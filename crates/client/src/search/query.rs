//! Query normalization.
//!
//! The only query processing this crate does: make sure the server always
//! receives a top-level search rather than a bare filter expression. The
//! query language itself is never parsed or validated.

use super::error::SearchError;

/// Keyword that starts a top-level search.
pub const SEARCH_KEYWORD: &str = "search";

/// Normalize a user query before submission.
///
/// If the trimmed query starts with neither `search` (case-sensitive) nor
/// `|`, `"search "` is prepended to the original, untrimmed text. Queries
/// that are empty after trimming are rejected.
pub fn normalize_query(query: &str) -> Result<String, SearchError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    if trimmed.starts_with(SEARCH_KEYWORD) || trimmed.starts_with('|') {
        Ok(query.to_string())
    } else {
        Ok(format!("{} {}", SEARCH_KEYWORD, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bare_filter_gets_keyword() {
        assert_eq!(normalize_query("error").unwrap(), "search error");
        assert_eq!(
            normalize_query("index=main status=500").unwrap(),
            "search index=main status=500"
        );
    }

    #[test]
    fn test_pipe_prefixed_query_is_unchanged() {
        assert_eq!(normalize_query("| stats count").unwrap(), "| stats count");
    }

    #[test]
    fn test_search_prefixed_query_is_unchanged() {
        assert_eq!(
            normalize_query("search index=_internal").unwrap(),
            "search index=_internal"
        );
    }

    #[test]
    fn test_original_whitespace_is_kept() {
        assert_eq!(normalize_query("  error ").unwrap(), "search   error ");
        assert_eq!(normalize_query("  | tstats count").unwrap(), "  | tstats count");
    }

    #[test]
    fn test_keyword_match_is_case_sensitive() {
        assert_eq!(normalize_query("SEARCH foo").unwrap(), "search SEARCH foo");
    }

    #[test]
    fn test_empty_and_blank_rejected() {
        assert!(matches!(normalize_query(""), Err(SearchError::EmptyQuery)));
        assert!(matches!(normalize_query(" \t\n"), Err(SearchError::EmptyQuery)));
    }

    proptest! {
        #[test]
        fn prop_normalization_is_idempotent(query in ".*[^\\s].*") {
            let once = normalize_query(&query).unwrap();
            let twice = normalize_query(&once).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_bare_queries_get_single_space_prefix(query in "[a-zA-Z0-9=_\\-]{1,40}") {
            prop_assume!(!query.starts_with(SEARCH_KEYWORD));
            let normalized = normalize_query(&query).unwrap();
            prop_assert_eq!(normalized, format!("search {}", query));
        }

        #[test]
        fn prop_prefixed_queries_are_unchanged(
            rest in "[ a-z0-9=|]{0,40}",
            prefix in prop_oneof![Just("search"), Just("|")],
        ) {
            let query = format!("{}{}", prefix, rest);
            prop_assert_eq!(normalize_query(&query).unwrap(), query);
        }
    }
}
