//! The retrieval operations exposed to transport layers.
//!
//! `LogEngine` ties the validity gate, the backward scanner, and the search
//! delegate together. It holds no per-file state: each operation validates
//! its path, opens the file for the duration of that one call, and returns
//! lines most-recent-first.

use crate::error::{Result, RevtailError};
use crate::file_handler::{scan_window, ByteSource, PathValidator, TextFileValidator};
use crate::page::page_window;
use crate::search::{GrepMatcher, LineMatcher};
use std::path::Path;

/// Retrieval engine over log files on the local filesystem.
///
/// Construction wires in the default collaborators; both are injectable so a
/// transport layer can swap the text classification or the match backend
/// without touching the ordering and limiting contract.
pub struct LogEngine {
    validator: Box<dyn PathValidator>,
    matcher: Box<dyn LineMatcher>,
}

impl LogEngine {
    /// Engine with the default validator and the external `grep` delegate.
    pub fn new() -> Self {
        Self {
            validator: Box::new(TextFileValidator),
            matcher: Box::new(GrepMatcher::new()),
        }
    }

    /// Replace the validity gate.
    pub fn with_validator(mut self, validator: Box<dyn PathValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Replace the search delegate.
    pub fn with_matcher(mut self, matcher: Box<dyn LineMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Fetch one page of lines, most recent first.
    ///
    /// `page` is 1-based; the window covers reverse-order offsets
    /// `[(page-1)*size, page*size)`. A page lying entirely past the file's
    /// line count returns an empty list, not an error.
    pub async fn retrieve_page(&self, path: &Path, page: u64, size: u64) -> Result<Vec<String>> {
        let window = page_window(page, size)?;
        self.validator.validate(path)?;

        log::debug!(
            "retrieving page {page} (size {size}) of {}",
            path.display()
        );

        let source = ByteSource::open(path)?;
        Ok(scan_window(source.as_bytes(), window.start, window.end))
    }

    /// Fetch the entire file in reverse order, equivalent to page 1 with an
    /// unbounded size.
    pub async fn retrieve_tail(&self, path: &Path) -> Result<Vec<String>> {
        self.validator.validate(path)?;

        log::debug!("retrieving full tail of {}", path.display());

        let source = ByteSource::open(path)?;
        Ok(scan_window(source.as_bytes(), 0, u64::MAX))
    }

    /// Case-insensitive substring search, most recent match first, capped at
    /// `limit` lines when a limit is given.
    pub async fn search_file(
        &self,
        path: &Path,
        token: &str,
        limit: Option<u64>,
    ) -> Result<Vec<String>> {
        if token.is_empty() {
            return Err(RevtailError::invalid_argument(
                "search token must not be empty",
            ));
        }
        if limit == Some(0) {
            return Err(RevtailError::invalid_argument(
                "search limit must be positive",
            ));
        }
        self.validator.validate(path)?;

        log::debug!(
            "searching {} for {token:?} (limit {limit:?})",
            path.display()
        );

        // The delegate reports matches in file order, already capped to the
        // last `limit`; reversing restores the most-recent-first contract.
        let mut matches = self.matcher.matching_lines(path, token, limit).await?;
        matches.reverse();
        Ok(matches)
    }
}

impl Default for LogEngine {
    fn default() -> Self {
        Self::new()
    }
}
