//! # Planar Tile Patterns
//!
//! An 8×8 pattern is 32 bytes: eight scanlines of four bit-planes each.
//! Bit 7 of every plane byte is the leftmost pixel, and a pixel's colour
//! index is assembled from one bit in each plane (plane 0 = bit 0).
//!
//! Colour index 0 is "no ink": compositing treats it as transparent.

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// Bytes per pattern.
pub const PATTERN_BYTES: usize = 32;

/// Bit-planes per scanline.
pub const PLANES: usize = 4;

/// Scanlines per pattern.
pub const PATTERN_LINES: usize = 8;

/// One 8×8, 16-colour planar pattern.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Pattern(pub [u8; PATTERN_BYTES]);

impl Pattern {
    /// The all-transparent pattern.
    pub const BLANK: Self = Self([0; PATTERN_BYTES]);

    /// Creates a pattern filled with one colour.
    #[must_use]
    pub const fn solid(colour: u8) -> Self {
        let mut bytes = [0u8; PATTERN_BYTES];
        let mut i = 0;
        while i < PATTERN_BYTES {
            let plane = i % PLANES;
            if colour & (1 << plane) != 0 {
                bytes[i] = 0xff;
            }
            i += 1;
        }
        Self(bytes)
    }

    /// Returns the four plane bytes of a scanline.
    #[inline]
    #[must_use]
    pub fn line(&self, y: usize) -> [u8; PLANES] {
        let at = y * PLANES;
        [self.0[at], self.0[at + 1], self.0[at + 2], self.0[at + 3]]
    }

    /// Replaces the four plane bytes of a scanline.
    #[inline]
    pub fn set_line(&mut self, y: usize, planes: [u8; PLANES]) {
        let at = y * PLANES;
        self.0[at..at + PLANES].copy_from_slice(&planes);
    }

    /// Copies `count` scanlines from `src`, starting at `src_line`, to `dst_line`.
    pub fn copy_lines(&mut self, dst_line: usize, src: &Self, src_line: usize, count: usize) {
        let dst = dst_line * PLANES;
        let from = src_line * PLANES;
        let len = count * PLANES;
        self.0[dst..dst + len].copy_from_slice(&src.0[from..from + len]);
    }

    /// Returns the pixels of a scanline that carry ink (non-zero colour).
    #[inline]
    #[must_use]
    pub fn ink_mask(&self, y: usize) -> u8 {
        let [a, b, c, d] = self.line(y);
        a | b | c | d
    }

    /// Returns true if no pixel carries ink.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Returns true if every pixel carries ink.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        (0..PATTERN_LINES).all(|y| self.ink_mask(y) == 0xff)
    }

    /// Returns the colour index of a pixel.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        let bit = 7 - x;
        self.line(y)
            .iter()
            .enumerate()
            .fold(0, |acc, (plane, byte)| acc | (((byte >> bit) & 1) << plane))
    }

    /// Sets the colour index of a pixel.
    pub fn set_pixel(&mut self, x: usize, y: usize, colour: u8) {
        let bit = 1u8 << (7 - x);
        let mut planes = self.line(y);
        for (plane, byte) in planes.iter_mut().enumerate() {
            if colour & (1 << plane) != 0 {
                *byte |= bit;
            } else {
                *byte &= !bit;
            }
        }
        self.set_line(y, planes);
    }

    /// Paints `mask` pixels of a scanline in `colour`, leaving the rest untouched.
    ///
    /// Every plane is cleared under the mask, then only the planes selected by
    /// the colour index are set again.
    pub fn stamp(&mut self, y: usize, mask: u8, colour: u8) {
        let mut planes = self.line(y);
        for (plane, byte) in planes.iter_mut().enumerate() {
            *byte &= !mask;
            if colour & (1 << plane) != 0 {
                *byte |= mask;
            }
        }
        self.set_line(y, planes);
    }

    /// Fills the transparent pixels of `self` from `background`.
    ///
    /// Ink already present in `self` is never modified.
    pub fn fill_transparent_from(&mut self, background: &Self) {
        for y in 0..PATTERN_LINES {
            let mask = !self.ink_mask(y);
            let under = background.line(y);
            let mut planes = self.line(y);
            for (byte, bg) in planes.iter_mut().zip(under) {
                *byte |= bg & mask;
            }
            self.set_line(y, planes);
        }
    }

    /// Raw bytes, as uploaded to pattern memory.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pattern [")?;
        for y in 0..PATTERN_LINES {
            write!(f, "  ")?;
            for x in 0..8 {
                write!(f, "{:x}", self.pixel(x, y))?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}

/// A tile-map entry: pattern index in the low nine bits plus attribute flags.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct TileEntry(pub u16);

impl TileEntry {
    /// Entry pointing at the blank pattern.
    pub const BLANK: Self = Self(0);

    const INDEX_MASK: u16 = 0x01ff;

    /// Flip horizontally.
    pub const FLIP_X: u16 = 0x0200;

    /// Use the sprite palette.
    pub const SPRITE_PALETTE: u16 = 0x0800;

    /// Creates an entry for a pattern index.
    #[inline]
    #[must_use]
    pub const fn new(pattern: u16) -> Self {
        Self(pattern & Self::INDEX_MASK)
    }

    /// Returns the pattern index.
    #[inline]
    #[must_use]
    pub const fn pattern(self) -> u16 {
        self.0 & Self::INDEX_MASK
    }

    /// Returns the entry with attribute bits added.
    #[inline]
    #[must_use]
    pub const fn with_flags(self, flags: u16) -> Self {
        Self(self.0 | (flags & !Self::INDEX_MASK))
    }
}
