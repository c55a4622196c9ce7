//! Per-request byte access to a log file.
//!
//! A `ByteSource` holds the bytes of one open file for the duration of a
//! single retrieval operation and is dropped when the operation returns,
//! releasing the handle on every exit path.

use crate::error::{Result, RevtailError};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes of one open file.
///
/// Small files are read into memory; larger files are memory mapped so a
/// backward scan of the tail only faults in the pages it touches. The length
/// is fixed at open time: writers appending concurrently are tolerated, bytes
/// past the observed end are simply not seen by this request.
#[derive(Debug)]
pub enum ByteSource {
    /// Content loaded entirely into memory
    InMemory(Vec<u8>),
    /// Content accessed via memory mapping
    MemoryMapped(Mmap),
}

impl ByteSource {
    /// Files below this size are read into memory instead of mapped.
    const MEMORY_THRESHOLD: u64 = 50 * 1024 * 1024; // 50MB

    /// Open `path` for the duration of one request.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| RevtailError::io(format!("Failed to open file: {}", path.display()), e))?;

        let file_size = file
            .metadata()
            .map_err(|e| RevtailError::io("Failed to read file metadata", e))?
            .len();

        // Zero-length mappings are platform-dependent; an empty file is a
        // valid log with no lines.
        if file_size == 0 {
            return Ok(ByteSource::InMemory(Vec::new()));
        }

        if file_size < Self::MEMORY_THRESHOLD {
            let mut content = Vec::with_capacity(file_size as usize);
            let mut file = file;
            file.read_to_end(&mut content)
                .map_err(|e| RevtailError::io("Failed to read file", e))?;
            Ok(ByteSource::InMemory(content))
        } else {
            let mmap = unsafe {
                Mmap::map(&file).map_err(|e| {
                    RevtailError::io(format!("Failed to memory map file: {}", path.display()), e)
                })?
            };
            Ok(ByteSource::MemoryMapped(mmap))
        }
    }

    /// The underlying bytes regardless of storage strategy.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ByteSource::InMemory(vec) => vec.as_slice(),
            ByteSource::MemoryMapped(mmap) => &mmap[..],
        }
    }

    pub fn len(&self) -> u64 {
        self.as_bytes().len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}
