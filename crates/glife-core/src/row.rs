#![forbid(unsafe_code)]

//! Ragged sparse rows and the source-text scanner.
//!
//! A [`Row`] is an ordered sequence of optional glyph slots, one per column,
//! with an always-blank sentinel slot representing column −1. The sentinel
//! exists only so the stepping window never special-cases the left edge.
//! Trailing blank slots are never materialized: after any mutation a row is
//! trimmed back to its last occupied slot, and a fully blank row holds the
//! sentinel alone.
//!
//! [`Row::scan`] converts one line of source text into a row: spaces become
//! blank slots, tabs expand to the next tab stop, and every other grapheme
//! cluster becomes an occupied slot carrying its own [`GlyphToken`]. A
//! cluster wider than one column leaves blank continuation slots so later
//! glyphs stay column-aligned.

use unicode_segmentation::UnicodeSegmentation;

use crate::glyph::{Glyph, GlyphAttrs, GlyphToken};

/// One column position: blank, or occupied by a shared glyph token.
pub type Slot = Option<GlyphToken>;

/// Scanner configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Columns per tab stop. Zero is treated as 1.
    pub tab_width: u16,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { tab_width: 8 }
    }
}

/// One row of cells, indexed by column, with a blank sentinel at column −1.
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// `slots[0]` is the sentinel and is always `None`; column `c` lives at
    /// `slots[c + 1]`.
    slots: Vec<Slot>,
}

impl Row {
    /// Create an empty row (sentinel only).
    pub fn new() -> Self {
        Self { slots: vec![None] }
    }

    /// Scan one line of source text into a row.
    ///
    /// Equivalent to [`Row::scan_offset`] with a start column of zero.
    pub fn scan(line: &str, attrs: GlyphAttrs, config: &ScanConfig) -> Self {
        Self::scan_offset(line, 0, attrs, config)
    }

    /// Scan one line of source text, placing its first glyph at `start_col`.
    ///
    /// Columns before `start_col` are blank. Total over any input; a line of
    /// pure whitespace yields the empty row.
    pub fn scan_offset(
        line: &str,
        start_col: usize,
        attrs: GlyphAttrs,
        config: &ScanConfig,
    ) -> Self {
        let mut row = Self::new();
        for _ in 0..start_col {
            row.push_blank();
        }
        row.scan_span(line, attrs, config);
        row.trim();
        row
    }

    /// Scan a line made of styled spans, each with its own attributes.
    pub fn scan_styled(spans: &[(&str, GlyphAttrs)], config: &ScanConfig) -> Self {
        let mut row = Self::new();
        for (text, attrs) in spans {
            row.scan_span(text, *attrs, config);
        }
        row.trim();
        row
    }

    /// Build a row directly from column slots (no sentinel in the input).
    pub fn from_slots(slots: impl IntoIterator<Item = Slot>) -> Self {
        let mut row = Self::new();
        for slot in slots {
            row.slots.push(slot);
        }
        row.trim();
        row
    }

    fn scan_span(&mut self, text: &str, attrs: GlyphAttrs, config: &ScanConfig) {
        let tab = config.tab_width.max(1) as usize;
        for cluster in text.graphemes(true) {
            match cluster {
                " " => self.push_blank(),
                "\t" => {
                    let stop = (self.width() / tab + 1) * tab;
                    while self.width() < stop {
                        self.push_blank();
                    }
                }
                _ => {
                    let token = Glyph::token(cluster, attrs);
                    let width = token.width();
                    self.push_token(token);
                    // Continuation columns under a wide cluster stay blank.
                    for _ in 1..width {
                        self.push_blank();
                    }
                }
            }
        }
    }

    /// Number of columns, excluding the sentinel. Equals one plus the column
    /// of the last occupied slot, or zero for a blank row.
    #[inline]
    pub fn width(&self) -> usize {
        self.slots.len() - 1
    }

    /// Whether the row has no occupied slot.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.width() == 0
    }

    /// The token at column `col`, if occupied.
    pub fn get(&self, col: usize) -> Option<&GlyphToken> {
        self.slots.get(col + 1).and_then(Option::as_ref)
    }

    /// Number of occupied slots.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Iterate column slots left to right (sentinel excluded).
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots[1..].iter()
    }

    /// Backing slots including the sentinel, for the stepping cursors.
    #[inline]
    pub(crate) fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub(crate) fn push_blank(&mut self) {
        self.slots.push(None);
    }

    pub(crate) fn push_token(&mut self, token: GlyphToken) {
        self.slots.push(Some(token));
    }

    /// Drop trailing blank slots. The sentinel is never removed. Idempotent.
    pub fn trim(&mut self) {
        while self.slots.len() > 1 && self.slots.last().is_some_and(Option::is_none) {
            self.slots.pop();
        }
    }

    /// Render as plain text: blanks become spaces, no trailing spaces.
    ///
    /// The blank continuation columns following a wide glyph are folded into
    /// the glyph's own width rather than rendered as extra spaces.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let mut skip = 0usize;
        for slot in self.iter() {
            match slot {
                Some(token) => {
                    out.push_str(token.symbol());
                    skip = token.width().saturating_sub(1);
                }
                None => {
                    if skip > 0 {
                        skip -= 1;
                    } else {
                        out.push(' ');
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn cfg() -> ScanConfig {
        ScanConfig::default()
    }

    #[test]
    fn empty_line_yields_sentinel_only() {
        let row = Row::scan("", GlyphAttrs::empty(), &cfg());
        assert!(row.is_blank());
        assert_eq!(row.width(), 0);
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        let row = Row::scan("   \t  ", GlyphAttrs::empty(), &cfg());
        assert!(row.is_blank());
    }

    #[test]
    fn trailing_blanks_are_trimmed() {
        let row = Row::scan("ab   ", GlyphAttrs::empty(), &cfg());
        assert_eq!(row.width(), 2);
        assert!(row.get(0).is_some());
        assert!(row.get(1).is_some());
    }

    #[test]
    fn interior_blanks_are_kept() {
        let row = Row::scan("a b", GlyphAttrs::empty(), &cfg());
        assert_eq!(row.width(), 3);
        assert!(row.get(0).is_some());
        assert!(row.get(1).is_none());
        assert!(row.get(2).is_some());
    }

    #[test]
    fn tab_expands_to_next_stop() {
        let row = Row::scan("a\tb", GlyphAttrs::empty(), &cfg());
        // 'a' at column 0, tab fills to column 8, 'b' at column 8.
        assert_eq!(row.width(), 9);
        assert!(row.get(8).is_some());
        for col in 1..8 {
            assert!(row.get(col).is_none(), "column {col} should be blank");
        }
    }

    #[test]
    fn tab_at_stop_boundary_advances_full_stop() {
        let config = ScanConfig { tab_width: 4 };
        let row = Row::scan("abcd\te", GlyphAttrs::empty(), &config);
        assert!(row.get(7).is_none());
        assert!(row.get(8).is_some());
    }

    #[test]
    fn zero_tab_width_is_clamped() {
        let config = ScanConfig { tab_width: 0 };
        let row = Row::scan("\tx", GlyphAttrs::empty(), &config);
        assert!(row.get(1).is_some());
    }

    #[test]
    fn wide_glyph_leaves_continuation_blank() {
        let row = Row::scan("日x", GlyphAttrs::empty(), &cfg());
        assert!(row.get(0).is_some());
        assert!(row.get(1).is_none());
        assert!(row.get(2).is_some());
        assert_eq!(row.get(2).unwrap().symbol(), "x");
    }

    #[test]
    fn scan_offset_pads_leading_blanks() {
        let row = Row::scan_offset("x", 3, GlyphAttrs::empty(), &cfg());
        assert_eq!(row.width(), 4);
        assert!(row.get(2).is_none());
        assert!(row.get(3).is_some());
    }

    #[test]
    fn scan_styled_keeps_per_span_attrs() {
        let row = Row::scan_styled(
            &[("a", GlyphAttrs::BOLD), ("b", GlyphAttrs::ITALIC)],
            &cfg(),
        );
        assert_eq!(row.get(0).unwrap().attrs(), GlyphAttrs::BOLD);
        assert_eq!(row.get(1).unwrap().attrs(), GlyphAttrs::ITALIC);
    }

    #[test]
    fn grapheme_cluster_is_one_slot() {
        // 'e' + combining acute is a single cluster, hence a single cell.
        let row = Row::scan("e\u{0301}x", GlyphAttrs::empty(), &cfg());
        assert_eq!(row.get(0).unwrap().symbol(), "e\u{0301}");
        assert_eq!(row.get(1).unwrap().symbol(), "x");
    }

    #[test]
    fn trim_is_idempotent() {
        let mut row = Row::from_slots(vec![
            Some(Glyph::token("a", GlyphAttrs::empty())),
            None,
            None,
        ]);
        assert_eq!(row.width(), 1);
        row.trim();
        assert_eq!(row.width(), 1);
    }

    #[test]
    fn from_slots_preserves_tokens() {
        let token = Glyph::token("z", GlyphAttrs::empty());
        let row = Row::from_slots(vec![None, Some(Rc::clone(&token))]);
        assert!(Rc::ptr_eq(row.get(1).unwrap(), &token));
    }

    #[test]
    fn to_text_round_trips_simple_content() {
        let row = Row::scan("a b  c", GlyphAttrs::empty(), &cfg());
        assert_eq!(row.to_text(), "a b  c");
    }

    #[test]
    fn to_text_folds_wide_glyph_continuation() {
        let row = Row::scan("日x", GlyphAttrs::empty(), &cfg());
        assert_eq!(row.to_text(), "日x");
    }
}
