//! File access for a single retrieval request.
//!
//! This module bundles everything that touches the filesystem: the validity
//! checks run before any scan, the per-request byte source (in-memory or
//! memory-mapped), and the backward line traversal over those bytes.
//!
//! Nothing here outlives one operation. A `ByteSource` is opened at the start
//! of a request and dropped on every exit path, including errors.

pub mod reverse;
pub mod source;
pub mod validation;

pub use reverse::{scan_window, ReverseLines};
pub use source::ByteSource;
pub use validation::{PathValidator, TextFileValidator};
