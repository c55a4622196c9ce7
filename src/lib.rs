//! # revtail - Reverse-Chronological Log Retrieval
//!
//! revtail exposes log files on a host filesystem for remote viewing: fetch
//! the most recent lines, page backward through a large file, and search for
//! a substring, always returning the line physically last in the file first.
//!
//! ## Features
//!
//! - **Tail without indexing**: lines are reconstructed by scanning bytes
//!   backward from the end of the file, so the first page of a multi-gigabyte
//!   log costs one page worth of reads
//! - **Stable pagination**: 1-based fixed-size windows over the
//!   reverse-ordered line sequence
//! - **Capped substring search**: case-insensitive, most recent match first,
//!   delegated to `grep` or to an in-process ripgrep matcher
//!
//! ## Architecture
//!
//! The library is organized into focused modules following modern Rust patterns:
//!
//! - [`error`] - Centralized error types and handling
//! - [`file_handler`] - Per-request file access, validation, and backward
//!   line traversal
//! - [`page`] - Pagination arithmetic
//! - [`search`] - Pluggable substring matchers
//! - [`engine`] - The retrieval operations exposed to transport layers
//!
//! Nothing is cached between requests: every call opens the target file,
//! scans just enough of it, and releases the handle on every exit path.

// Core modules
pub mod error;
pub mod file_handler;
pub mod page;

// Retrieval operations and search delegates
pub mod engine;
pub mod search;

// Re-export commonly used types for convenience
pub use error::{Result, RevtailError};

// Public API surface for external usage
pub use engine::LogEngine;
pub use file_handler::{ByteSource, PathValidator, TextFileValidator};
pub use search::{GrepMatcher, LineMatcher, RipgrepMatcher};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
