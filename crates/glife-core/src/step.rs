#![forbid(unsafe_code)]

//! Single-row generation stepping.
//!
//! [`step_row`] computes the next generation of one row from the three rows
//! immediately above, at, and below it. Each input row is walked by a
//! forward-only [`SlotCursor`] exposing a three-slot window (one behind, at,
//! and one ahead of the cursor); the three cursors advance in lockstep, so
//! every column sees its full 3×3 neighborhood without random access or a
//! dense grid. Row-boundary inputs are the empty row, which reads as
//! all-blank.
//!
//! Rule: fixed B3/S23. A live cell with 2 or 3 live neighbors survives and
//! keeps its exact token; a dead cell with exactly 3 live neighbors is born
//! and clones the token of its first live neighbor in a fixed priority
//! order: upper-left, upper, upper-right, left, right, lower-left, lower,
//! lower-right. The order is cosmetic but deterministic, so identical seeds
//! always animate identically.

use std::rc::Rc;

use crate::glyph::GlyphToken;
use crate::row::{Row, Slot};

/// Forward-only window cursor over one row's slots.
///
/// Starts positioned at column 0, with the sentinel slot behind it. Out of
/// range lookups on either side read as blank.
struct SlotCursor<'a> {
    slots: &'a [Slot],
    /// Index of the center slot; column `c` is index `c + 1`.
    pos: usize,
}

impl<'a> SlotCursor<'a> {
    fn new(row: &'a Row) -> Self {
        Self {
            slots: row.slots(),
            pos: 1,
        }
    }

    #[inline]
    fn at(&self, idx: usize) -> Option<&'a GlyphToken> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    /// Slot one column left of the cursor.
    #[inline]
    fn behind(&self) -> Option<&'a GlyphToken> {
        self.at(self.pos - 1)
    }

    /// Slot at the cursor.
    #[inline]
    fn center(&self) -> Option<&'a GlyphToken> {
        self.at(self.pos)
    }

    /// Slot one column right of the cursor.
    #[inline]
    fn ahead(&self) -> Option<&'a GlyphToken> {
        self.at(self.pos + 1)
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    /// True once the whole window is past the last materialized slot.
    #[inline]
    fn is_exhausted(&self) -> bool {
        self.pos > self.slots.len()
    }
}

/// Compute the next generation of `curr` given its neighbor rows.
///
/// `prev` and `next` may be empty rows at a region boundary. The output is
/// trimmed, so it ends at its last live cell. Total over any inputs.
pub fn step_row(prev: &Row, curr: &Row, next: &Row) -> Row {
    let mut above = SlotCursor::new(prev);
    let mut here = SlotCursor::new(curr);
    let mut below = SlotCursor::new(next);
    let mut out = Row::new();

    while !(above.is_exhausted() && here.is_exhausted() && below.is_exhausted()) {
        // Donor priority order doubles as the neighbor enumeration.
        let neighbors = [
            above.behind(),
            above.center(),
            above.ahead(),
            here.behind(),
            here.ahead(),
            below.behind(),
            below.center(),
            below.ahead(),
        ];
        let live = neighbors.iter().filter(|n| n.is_some()).count();

        match here.center() {
            Some(token) if (2..=3).contains(&live) => out.push_token(Rc::clone(token)),
            None if live == 3 => {
                let donor = neighbors.into_iter().flatten().next();
                match donor {
                    Some(token) => out.push_token(Rc::clone(token)),
                    // Unreachable with live == 3; keep the row total anyway.
                    None => out.push_blank(),
                }
            }
            _ => out.push_blank(),
        }

        above.advance();
        here.advance();
        below.advance();
    }

    out.trim();
    out
}
