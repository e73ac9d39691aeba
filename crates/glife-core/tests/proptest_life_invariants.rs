//! Property-based invariant tests for the stepping engine.
//!
//! Invariants verified for arbitrary inputs:
//!
//! 1. Dead regions are stable: all-blank content steps to the empty region,
//!    for any row/column dimensions.
//! 2. Growth bound: stepping never adds more than one row.
//! 3. Trimming is idempotent at both row and region granularity.
//! 4. Stepping is deterministic: equal seeds produce equal generations.
//! 5. Scanning never panics and never leaves a trailing blank slot.

use glife_core::{GlyphAttrs, Region, Row, ScanConfig};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn blank_line_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just(' '), Just('\t')], 0..40)
        .prop_map(|chars| chars.into_iter().collect())
}

fn text_line_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just(' '),
            Just('\t'),
            Just('#'),
            Just('a'),
            Just('日'),
            Just('*'),
        ],
        0..30,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn text_block_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(text_line_strategy(), 0..12).prop_map(|lines| lines.join("\n"))
}

fn scan(text: &str) -> Region {
    Region::from_text(text, GlyphAttrs::empty(), &ScanConfig::default())
}

// ── 1. Dead regions are stable ──────────────────────────────────────────

proptest! {
    #[test]
    fn dead_region_steps_to_empty(lines in proptest::collection::vec(blank_line_strategy(), 0..16)) {
        let region = scan(&lines.join("\n"));
        prop_assert!(region.is_empty(), "blank content must trim to empty");
        prop_assert!(region.step().is_empty());
    }
}

// ── 2. Growth bound ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn step_adds_at_most_one_row(text in text_block_strategy()) {
        let region = scan(&text);
        let next = region.step();
        prop_assert!(
            next.height() <= region.height() + 1,
            "height {} -> {}",
            region.height(),
            next.height()
        );
    }
}

// ── 3. Trimming idempotence ─────────────────────────────────────────────

proptest! {
    #[test]
    fn region_trim_is_idempotent(text in text_block_strategy()) {
        let mut region = scan(&text);
        let height = region.height();
        region.trim();
        prop_assert_eq!(region.height(), height);
    }

    #[test]
    fn row_trim_is_idempotent(line in text_line_strategy()) {
        let mut row = Row::scan(&line, GlyphAttrs::empty(), &ScanConfig::default());
        let width = row.width();
        row.trim();
        prop_assert_eq!(row.width(), width);
    }

    #[test]
    fn stepped_rows_end_at_a_live_cell(text in text_block_strategy()) {
        let next = scan(&text).step();
        for row in next.rows() {
            if !row.is_blank() {
                prop_assert!(row.get(row.width() - 1).is_some());
            }
        }
    }
}

// ── 4. Determinism ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn stepping_is_deterministic(text in text_block_strategy()) {
        let a = scan(&text).step();
        let b = scan(&text).step();
        prop_assert_eq!(a.to_text(), b.to_text());
    }
}

// ── 5. Scanning totality ────────────────────────────────────────────────

proptest! {
    #[test]
    fn scan_never_panics_and_trims(line in any::<String>()) {
        // Strip newlines: the scanner is a single-line operation.
        let line: String = line.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let row = Row::scan(&line, GlyphAttrs::empty(), &ScanConfig::default());
        if !row.is_blank() {
            prop_assert!(row.get(row.width() - 1).is_some());
        }
    }
}
