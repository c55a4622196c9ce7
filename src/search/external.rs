//! Search delegate that shells out to `grep`.
//!
//! A line-oriented external matcher is already near-optimal for a single-pass
//! substring scan over an arbitrarily large file; this module only wraps it
//! in the crate's error and limiting contract.

use crate::error::{Result, RevtailError};
use crate::search::{retain_last, LineMatcher};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;

/// Matcher that spawns `grep -iF -- <token> <path>` and reads its output.
///
/// Standard error is drained alongside standard output so the process never
/// blocks on a full pipe; diagnostics on a successful run are logged and
/// ignored instead of polluting the result. Spawn failures and abnormal
/// exits surface as `SearchUnavailable`. The child is scoped to the call: it
/// has exited by the time this returns.
#[derive(Debug, Clone)]
pub struct GrepMatcher {
    program: OsString,
}

impl GrepMatcher {
    pub fn new() -> Self {
        Self {
            program: OsString::from("grep"),
        }
    }

    /// Use a different grep-compatible executable.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GrepMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineMatcher for GrepMatcher {
    async fn matching_lines(
        &self,
        path: &Path,
        token: &str,
        limit: Option<u64>,
    ) -> Result<Vec<String>> {
        let mut child = Command::new(&self.program)
            .arg("-iF")
            .arg("--")
            .arg(token)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                RevtailError::search_unavailable(format!(
                    "failed to start {}: {e}",
                    self.program.to_string_lossy()
                ))
            })?;

        let stdout = child.stdout.take().ok_or_else(|| {
            RevtailError::search_unavailable("search process exposed no stdout")
        })?;
        let stderr = child.stderr.take();

        // Drain stderr concurrently so a chatty tool cannot deadlock on a
        // full pipe while we are still reading matches.
        let diagnostics = tokio::spawn(async move {
            let mut buf = String::new();
            if let Some(mut stderr) = stderr {
                let _ = stderr.read_to_string(&mut buf).await;
            }
            buf
        });

        let mut kept: VecDeque<String> = VecDeque::new();
        let mut lines = BufReader::new(stdout).lines();
        loop {
            let line = lines.next_line().await.map_err(|e| {
                RevtailError::search_unavailable(format!("failed to read search output: {e}"))
            })?;
            match line {
                Some(line) => retain_last(&mut kept, line, limit),
                None => break,
            }
        }

        let status = child.wait().await.map_err(|e| {
            RevtailError::search_unavailable(format!("failed to wait for search process: {e}"))
        })?;
        let diagnostics = diagnostics.await.unwrap_or_default();

        // grep reports "no matches" through exit status 1; anything above
        // that is a real failure.
        if !status.success() && status.code() != Some(1) {
            return Err(RevtailError::search_unavailable(format!(
                "search process exited with {status}: {}",
                diagnostics.trim()
            )));
        }

        if !diagnostics.trim().is_empty() {
            log::warn!(
                "ignoring search diagnostics for {}: {}",
                path.display(),
                diagnostics.trim()
            );
        }

        Ok(kept.into())
    }
}
