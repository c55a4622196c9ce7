//! Pagination arithmetic over the reverse-ordered line sequence.
//!
//! A page is a 1-based, fixed-size window counted from the last line of the
//! file. This module is a pure coordinate transform consumed by the backward
//! scanner; it carries no state.

use crate::error::{Result, RevtailError};

/// Half-open window `[start, end)` of 0-based offsets into the
/// reverse-ordered line sequence (offset 0 is the last line of the file).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: u64,
    pub end: u64,
}

impl PageWindow {
    /// Number of lines the window can hold.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Map a 1-based page number and page size onto reverse-order line offsets.
///
/// Fails with `InvalidArgument` when either value is zero. A window reaching
/// past the end of the file is not an error; the scan just comes back short.
pub fn page_window(page: u64, size: u64) -> Result<PageWindow> {
    if page < 1 {
        return Err(RevtailError::invalid_argument("page must be positive"));
    }
    if size < 1 {
        return Err(RevtailError::invalid_argument("size must be positive"));
    }

    let start = (page - 1).saturating_mul(size);
    let end = start.saturating_add(size);
    Ok(PageWindow { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let window = page_window(1, 25).unwrap();
        assert_eq!(window, PageWindow { start: 0, end: 25 });
        assert_eq!(window.len(), 25);
        assert!(!window.is_empty());
    }

    #[test]
    fn test_later_pages_are_contiguous() {
        let size = 10;
        for page in 1..20 {
            let current = page_window(page, size).unwrap();
            let next = page_window(page + 1, size).unwrap();
            assert_eq!(current.end, next.start);
            assert_eq!(current.len(), size);
        }
    }

    #[test]
    fn test_zero_page_rejected() {
        let err = page_window(0, 10).unwrap_err();
        assert!(matches!(err, RevtailError::InvalidArgument { .. }));
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = page_window(3, 0).unwrap_err();
        assert!(matches!(err, RevtailError::InvalidArgument { .. }));
    }

    #[test]
    fn test_huge_page_saturates() {
        let window = page_window(u64::MAX, u64::MAX).unwrap();
        assert_eq!(window.start, u64::MAX);
        assert_eq!(window.end, u64::MAX);
        assert!(window.is_empty());
    }
}
