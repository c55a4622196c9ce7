//! In-process search delegate built on the ripgrep core crates.
//!
//! Drop-in replacement for the external `grep` process: same file-order,
//! last-`limit` contract, no child process. Useful where spawning is
//! unwelcome or the tool is absent.

use crate::error::{Result, RevtailError};
use crate::search::{retain_last, LineMatcher};
use async_trait::async_trait;
use grep_matcher::Matcher;
use grep_regex::RegexMatcherBuilder;
use grep_searcher::sinks::UTF8;
use grep_searcher::SearcherBuilder;
use std::collections::VecDeque;
use std::path::Path;

/// Matcher that scans the file in-process with `grep-searcher`.
///
/// The token is compiled as a literal, case-insensitive pattern, so it keeps
/// plain substring semantics even when it contains regex metacharacters.
#[derive(Debug, Default, Clone, Copy)]
pub struct RipgrepMatcher;

impl RipgrepMatcher {
    pub fn new() -> Self {
        Self
    }
}

/// Collect matching lines in file order, retaining only the last `limit`.
fn collect_file_order<M: Matcher>(
    matcher: M,
    path: &Path,
    limit: Option<u64>,
) -> std::io::Result<Vec<String>> {
    let mut kept: VecDeque<String> = VecDeque::new();
    // The UTF8 sink insists on line numbers being tracked.
    let mut searcher = SearcherBuilder::new().line_number(true).build();

    searcher.search_path(
        matcher,
        path,
        UTF8(|_line_number, line| {
            let line = line.strip_suffix('\n').unwrap_or(line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            retain_last(&mut kept, line.to_string(), limit);
            Ok(true)
        }),
    )?;

    Ok(kept.into())
}

#[async_trait]
impl LineMatcher for RipgrepMatcher {
    async fn matching_lines(
        &self,
        path: &Path,
        token: &str,
        limit: Option<u64>,
    ) -> Result<Vec<String>> {
        let matcher = RegexMatcherBuilder::new()
            .case_insensitive(true)
            .fixed_strings(true)
            .build(token)
            .map_err(|e| {
                RevtailError::search_unavailable(format!("failed to compile search token: {e}"))
            })?;

        collect_file_order(&matcher, path, limit).map_err(|e| {
            RevtailError::search_unavailable(format!("search over {} failed: {e}", path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write test content");
        file.flush().expect("Failed to flush test file");
        file
    }

    #[tokio::test]
    async fn test_matches_case_insensitively_in_file_order() {
        let file = create_test_file("ERROR one\nfine\nerror two\nwarn\nError three\n");

        let lines = RipgrepMatcher::new()
            .matching_lines(file.path(), "error", None)
            .await
            .unwrap();
        assert_eq!(lines, vec!["ERROR one", "error two", "Error three"]);
    }

    #[tokio::test]
    async fn test_limit_keeps_last_matches() {
        let file = create_test_file("err 1\nok\nerr 2\nok\nerr 3\n");

        let lines = RipgrepMatcher::new()
            .matching_lines(file.path(), "err", Some(2))
            .await
            .unwrap();
        assert_eq!(lines, vec!["err 2", "err 3"]);
    }

    #[tokio::test]
    async fn test_token_is_a_literal_not_a_regex() {
        let file = create_test_file("a.b matches\naxb does not\n");

        let lines = RipgrepMatcher::new()
            .matching_lines(file.path(), "a.b", None)
            .await
            .unwrap();
        assert_eq!(lines, vec!["a.b matches"]);
    }

    #[tokio::test]
    async fn test_unreadable_target_is_search_unavailable() {
        let err = RipgrepMatcher::new()
            .matching_lines(Path::new("/this/file/does/not/exist.log"), "x", None)
            .await
            .unwrap_err();
        assert!(matches!(err, RevtailError::SearchUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_no_matches_is_empty_not_error() {
        let file = create_test_file("nothing to see\n");

        let lines = RipgrepMatcher::new()
            .matching_lines(file.path(), "absent", None)
            .await
            .unwrap();
        assert!(lines.is_empty());
    }
}
