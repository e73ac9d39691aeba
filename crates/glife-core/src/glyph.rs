#![forbid(unsafe_code)]

//! Glyph tokens: the opaque display units that live cells carry.
//!
//! A [`Glyph`] is one grapheme cluster plus its display attributes. The
//! stepping engine never inspects the symbol; it only moves tokens around.
//! Token identity is pointer identity: a cell that survives a generation
//! keeps the exact same [`GlyphToken`] (`Rc`), not a copy, so attribute-rich
//! hosts can round-trip their own data through the simulation untouched.

use std::fmt;
use std::rc::Rc;

use bitflags::bitflags;
use unicode_width::UnicodeWidthStr;

bitflags! {
    /// Display attributes carried opaquely alongside a glyph's symbol.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GlyphAttrs: u8 {
        /// Bold / increased intensity.
        const BOLD      = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM       = 0b0000_0010;
        /// Italic.
        const ITALIC    = 0b0000_0100;
        /// Underline.
        const UNDERLINE = 0b0000_1000;
        /// Reverse video.
        const REVERSE   = 0b0001_0000;
    }
}

/// One displayed grapheme cluster plus its attributes.
///
/// The display width is computed once at construction so hosts and the
/// scanner never re-measure. Zero-width clusters are clamped to width 1;
/// they still occupy a column when displayed standalone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    symbol: String,
    attrs: GlyphAttrs,
    width: u8,
}

/// Shared handle to a [`Glyph`].
///
/// The engine is single-threaded, so `Rc` rather than `Arc`. Compare
/// identity with [`Rc::ptr_eq`].
pub type GlyphToken = Rc<Glyph>;

impl Glyph {
    /// Create a glyph from a grapheme cluster and attributes.
    pub fn new(symbol: impl Into<String>, attrs: GlyphAttrs) -> Self {
        let symbol = symbol.into();
        let width = symbol.width().clamp(1, u8::MAX as usize) as u8;
        Self {
            symbol,
            attrs,
            width,
        }
    }

    /// Create a shared token directly.
    pub fn token(symbol: impl Into<String>, attrs: GlyphAttrs) -> GlyphToken {
        Rc::new(Self::new(symbol, attrs))
    }

    /// The grapheme cluster this glyph displays.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Display attributes.
    #[inline]
    pub fn attrs(&self) -> GlyphAttrs {
        self.attrs
    }

    /// Display width in columns (at least 1).
    #[inline]
    pub fn width(&self) -> usize {
        self.width as usize
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_glyph_has_width_one() {
        let g = Glyph::new("x", GlyphAttrs::empty());
        assert_eq!(g.symbol(), "x");
        assert_eq!(g.width(), 1);
    }

    #[test]
    fn wide_glyph_has_width_two() {
        let g = Glyph::new("日", GlyphAttrs::empty());
        assert_eq!(g.width(), 2);
    }

    #[test]
    fn zero_width_cluster_clamped_to_one() {
        // Combining acute accent alone measures zero columns.
        let g = Glyph::new("\u{0301}", GlyphAttrs::empty());
        assert_eq!(g.width(), 1);
    }

    #[test]
    fn attrs_round_trip() {
        let g = Glyph::new("a", GlyphAttrs::BOLD | GlyphAttrs::UNDERLINE);
        assert!(g.attrs().contains(GlyphAttrs::BOLD));
        assert!(g.attrs().contains(GlyphAttrs::UNDERLINE));
        assert!(!g.attrs().contains(GlyphAttrs::ITALIC));
    }

    #[test]
    fn token_identity_is_pointer_identity() {
        let a = Glyph::token("x", GlyphAttrs::empty());
        let b = Glyph::token("x", GlyphAttrs::empty());
        assert_eq!(*a, *b);
        assert!(!Rc::ptr_eq(&a, &b));
        assert!(Rc::ptr_eq(&a, &a.clone()));
    }
}
