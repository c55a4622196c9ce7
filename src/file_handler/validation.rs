//! Path validation ahead of any scan.
//!
//! Every retrieval operation runs its path through a validator before a file
//! handle is opened for scanning. The default validator accepts existing
//! regular files that are classified as text, either by extension or by a
//! content probe.

use crate::error::{Result, RevtailError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Decides whether a path may be handed to the retrieval engine.
///
/// Implementations return the structured error describing why a path was
/// rejected, so transport layers can report it verbatim.
pub trait PathValidator: Send + Sync {
    fn validate(&self, path: &Path) -> Result<()>;
}

/// Extensions accepted as text without looking at file content.
const TEXT_EXTENSIONS: &[&str] = &["log", "out", "txt"];

/// How many leading bytes to probe when the extension is unknown.
const PROBE_LEN: usize = 8192;

/// Default validator: the path must exist, be a regular file, and either
/// carry a known text extension or survive a content probe for binary data.
///
/// Empty files pass: an empty log is valid and yields an empty result.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFileValidator;

impl PathValidator for TextFileValidator {
    fn validate(&self, path: &Path) -> Result<()> {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RevtailError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(RevtailError::io("Failed to read file metadata", e)),
        };

        if !metadata.is_file() {
            return Err(RevtailError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        if has_text_extension(path) {
            return Ok(());
        }

        if probe_is_binary(path)? {
            return Err(RevtailError::NotText {
                path: path.to_path_buf(),
            });
        }

        Ok(())
    }
}

fn has_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TEXT_EXTENSIONS.iter().any(|t| ext.eq_ignore_ascii_case(t)))
        .unwrap_or(false)
}

/// A NUL byte in the leading bytes marks the file as binary.
fn probe_is_binary(path: &Path) -> Result<bool> {
    let mut file = File::open(path)
        .map_err(|e| RevtailError::io(format!("Failed to open file: {}", path.display()), e))?;

    let mut buf = [0u8; PROBE_LEN];
    let n = file
        .read(&mut buf)
        .map_err(|e| RevtailError::io("Failed to probe file content", e))?;

    Ok(buf[..n].contains(&0))
}
