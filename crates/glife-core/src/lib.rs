#![forbid(unsafe_code)]

//! Core stepping engine for GlyphLife.
//!
//! Animates Conway's Game of Life (fixed B3/S23 rule) over rectangular text
//! content. Every non-blank glyph is a live cell; blanks and everything past
//! a row's last glyph are dead. Rows are ragged and sparse: a [`Row`] ends at
//! its last occupied column, and a [`Region`] ends at its last non-blank row,
//! so arbitrarily large or irregular text never costs a dense grid.
//!
//! The pipeline:
//!
//! 1. [`Row::scan`] converts one line of source text into slots
//!    (tab expansion, wide-glyph continuation columns, trailing trim).
//! 2. [`step_row`] computes one row of the next generation from the three
//!    rows above/at/below it, using forward-only cursors.
//! 3. [`Region::step`] drives [`step_row`] over a whole region, including
//!    one synthetic growth row below the last line.
//!
//! Glyph identity is preserved across generations: a surviving cell's
//! [`GlyphToken`] is the same `Rc` as in the previous generation, and a
//! newly born cell clones the token of one live neighbor.

pub mod glyph;
pub mod region;
pub mod row;
pub mod step;

pub use glyph::{Glyph, GlyphAttrs, GlyphToken};
pub use region::Region;
pub use row::{Row, ScanConfig, Slot};
pub use step::step_row;
