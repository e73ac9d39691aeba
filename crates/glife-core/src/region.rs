#![forbid(unsafe_code)]

//! Rectangular regions and whole-region stepping.
//!
//! A [`Region`] is a top-to-bottom sequence of [`Row`]s: one viewport's
//! visible text or a sub-range of a larger body. Stepping a region computes
//! every row's next generation plus one synthetic row below the last line,
//! because births can spill one row down; fully blank trailing rows are then
//! trimmed, mirroring the per-row column trim.

use crate::glyph::GlyphAttrs;
use crate::row::{Row, ScanConfig};
use crate::step::step_row;

/// A rectangular sequence of rows stepped together.
#[derive(Debug, Clone, Default)]
pub struct Region {
    rows: Vec<Row>,
}

impl Region {
    /// Create an empty region.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build a region from rows, trimming blank trailing rows.
    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        let mut region = Self {
            rows: rows.into_iter().collect(),
        };
        region.trim();
        region
    }

    /// Scan a block of plain text, one row per line.
    pub fn from_text(text: &str, attrs: GlyphAttrs, config: &ScanConfig) -> Self {
        Self::from_rows(text.lines().map(|line| Row::scan(line, attrs, config)))
    }

    /// Number of rows (blank tail already trimmed).
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the region holds no live cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total live cells across all rows.
    pub fn live_count(&self) -> usize {
        self.rows.iter().map(Row::live_count).sum()
    }

    /// The row at `index`, if within the trimmed height.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Drop fully blank trailing rows. Idempotent.
    pub fn trim(&mut self) {
        while self.rows.last().is_some_and(Row::is_blank) {
            self.rows.pop();
        }
    }

    /// Compute the next generation of the whole region.
    ///
    /// The result has between `height()` and `height() + 1` rows before its
    /// own trim: one extra row is always computed below the last line so
    /// bottom-edge births are not lost. A region with no live cells steps to
    /// the empty region.
    pub fn step(&self) -> Self {
        if self.rows.is_empty() {
            return Self::new();
        }

        let boundary = Row::new();
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        for index in 0..=self.rows.len() {
            let prev = match index {
                0 => &boundary,
                _ => &self.rows[index - 1],
            };
            let curr = self.rows.get(index).unwrap_or(&boundary);
            let next = self.rows.get(index + 1).unwrap_or(&boundary);
            rows.push(step_row(prev, curr, next));
        }
        Self::from_rows(rows)
    }

    /// Render as plain text, one line per row, no trailing blank lines.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&row.to_text());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn region(text: &str) -> Region {
        Region::from_text(text, GlyphAttrs::empty(), &ScanConfig::default())
    }

    #[test]
    fn empty_region_steps_to_empty() {
        assert!(region("").step().is_empty());
    }

    #[test]
    fn blank_text_trims_to_empty() {
        let r = region("   \n\t\n  ");
        assert!(r.is_empty());
        assert!(r.step().is_empty());
    }

    #[test]
    fn block_is_a_fixed_point() {
        let r = region("##\n##");
        let next = r.step();
        assert_eq!(next.height(), 2);
        for row_idx in 0..2 {
            for col in 0..2 {
                let before = r.row(row_idx).unwrap().get(col).unwrap();
                let after = next.row(row_idx).unwrap().get(col).unwrap();
                assert!(
                    Rc::ptr_eq(before, after),
                    "block cell ({row_idx},{col}) should survive in place"
                );
            }
        }
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = region("\n###");
        let vertical = horizontal.step();
        assert_eq!(vertical.to_text(), " #\n #\n #");
        let back = vertical.step();
        assert_eq!(back.to_text(), "\n###");
    }

    #[test]
    fn glider_translates_down_right_after_four_steps() {
        let glider = region(" #\n  #\n###");
        let mut current = glider.clone();
        for _ in 0..4 {
            current = current.step();
        }
        // Same shape, shifted one row down and one column right.
        assert_eq!(current.to_text(), "\n  #\n   #\n ###");
    }

    #[test]
    fn bottom_edge_birth_lands_in_the_extra_row() {
        // A horizontal triple on the last row births one cell below it.
        let r = region("###");
        let next = r.step();
        assert_eq!(next.height(), 2);
        assert!(next.row(1).unwrap().get(1).is_some());
    }

    #[test]
    fn growth_is_bounded_to_one_row() {
        for seed in ["###", "##\n##", " #\n  #\n###", "#\n#\n#"] {
            let r = region(seed);
            let next = r.step();
            assert!(
                next.height() <= r.height() + 1,
                "seed {seed:?} grew more than one row"
            );
        }
    }

    #[test]
    fn surviving_tokens_are_reference_identical() {
        let r = region("##\n##");
        let next = r.step();
        let before = r.row(0).unwrap().get(0).unwrap();
        let after = next.row(0).unwrap().get(0).unwrap();
        assert!(Rc::ptr_eq(before, after));
    }

    #[test]
    fn trim_is_idempotent_at_row_granularity() {
        let mut r = Region::from_rows(vec![
            Row::scan("x", GlyphAttrs::empty(), &ScanConfig::default()),
            Row::new(),
            Row::new(),
        ]);
        assert_eq!(r.height(), 1);
        r.trim();
        assert_eq!(r.height(), 1);
    }

    #[test]
    fn to_text_preserves_leading_blank_rows() {
        let r = region("\n##\n##");
        assert_eq!(r.to_text(), "\n##\n##");
    }
}
