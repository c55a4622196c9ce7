//! Substring search over a single log file.
//!
//! The matching itself is a pluggable capability behind [`LineMatcher`]: the
//! default delegates to an external `grep` process, and an in-process
//! implementation built on the ripgrep core crates can be swapped in without
//! changing the ordering or limiting contract enforced by the engine.

pub mod external;
pub mod ripgrep;

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub use external::GrepMatcher;
pub use ripgrep::RipgrepMatcher;

/// Line-oriented, case-insensitive substring search over exactly one file.
///
/// Implementations report matching lines in file (forward) order. When a
/// limit is given, only the last `limit` matches are retained, under a
/// buffer bounded by the limit; the caller reverses the list to obtain
/// most-recent-first ordering.
///
/// A matcher that cannot run (missing tool, file unreadable mid-search) must
/// fail with `SearchUnavailable` rather than report an empty result.
#[async_trait]
pub trait LineMatcher: Send + Sync {
    async fn matching_lines(
        &self,
        path: &Path,
        token: &str,
        limit: Option<u64>,
    ) -> Result<Vec<String>>;
}

/// Push `line`, dropping the oldest retained match once `limit` is exceeded.
pub(crate) fn retain_last(
    kept: &mut std::collections::VecDeque<String>,
    line: String,
    limit: Option<u64>,
) {
    kept.push_back(line);
    if let Some(limit) = limit {
        if kept.len() as u64 > limit {
            kept.pop_front();
        }
    }
}
