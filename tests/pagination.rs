//! Property tests for the pagination arithmetic and the backward scanner.

use proptest::prelude::*;
use revtail::file_handler::scan_window;
use revtail::page::page_window;

/// Lines without newlines, so joining them reconstructs a well-formed file.
fn line_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-zA-Z0-9 .:-]{0,16}", 0..60)
}

proptest! {
    #[test]
    fn paging_round_trip_reproduces_the_input(lines in line_strategy(), size in 1u64..12) {
        // A file holding exactly one empty line is indistinguishable from an
        // empty file once the trailing terminator is written.
        prop_assume!(lines != vec![String::new()]);

        let mut content = lines.join("\n");
        if !lines.is_empty() {
            content.push('\n');
        }
        let bytes = content.as_bytes();

        let mut collected = Vec::new();
        let mut page = 1u64;
        loop {
            let window = page_window(page, size).unwrap();
            let chunk = scan_window(bytes, window.start, window.end);
            if chunk.is_empty() {
                break;
            }
            prop_assert!(chunk.len() as u64 <= size);
            collected.extend(chunk);
            page += 1;
        }

        collected.reverse();
        prop_assert_eq!(collected, lines);
    }

    #[test]
    fn consecutive_windows_are_disjoint_and_contiguous(page in 1u64..1000, size in 1u64..1000) {
        let current = page_window(page, size).unwrap();
        let next = page_window(page + 1, size).unwrap();

        prop_assert_eq!(current.end, next.start);
        prop_assert_eq!(current.len(), size);
    }

    #[test]
    fn trailing_newline_never_changes_the_result(lines in line_strategy(), size in 1u64..12) {
        prop_assume!(lines.last().map(|l| !l.is_empty()).unwrap_or(true));

        let without = lines.join("\n");
        let mut with = without.clone();
        if !lines.is_empty() {
            with.push('\n');
        }

        let window = page_window(1, size).unwrap();
        prop_assert_eq!(
            scan_window(without.as_bytes(), window.start, window.end),
            scan_window(with.as_bytes(), window.start, window.end)
        );
    }

    #[test]
    fn window_past_the_end_is_empty(lines in line_strategy(), size in 1u64..12) {
        let mut content = lines.join("\n");
        if !lines.is_empty() {
            content.push('\n');
        }

        // First page whose start offset lies at or past the line count.
        let first_empty_page = lines.len() as u64 / size + 2;
        let window = page_window(first_empty_page, size).unwrap();
        let chunk = scan_window(content.as_bytes(), window.start, window.end);
        prop_assert!(chunk.is_empty());
    }
}
