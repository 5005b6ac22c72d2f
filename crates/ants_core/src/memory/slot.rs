//! # Slot Ranges
//!
//! A contiguous run of physical pattern indices.

/// A reserved run of `len` pattern indices starting at `base`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotRange {
    base: u16,
    len: u16,
}

impl SlotRange {
    /// Creates a range.
    #[inline]
    #[must_use]
    pub const fn new(base: u16, len: u16) -> Self {
        Self { base, len }
    }

    /// First pattern index.
    #[inline]
    #[must_use]
    pub const fn base(self) -> u16 {
        self.base
    }

    /// Number of patterns in the range.
    #[inline]
    #[must_use]
    pub const fn len(self) -> u16 {
        self.len
    }

    /// Returns true for a zero-length range.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// One past the last pattern index.
    #[inline]
    #[must_use]
    pub const fn end(self) -> u16 {
        self.base + self.len
    }

    /// Physical index of the `offset`-th pattern of the range.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `offset` is outside the range.
    #[inline]
    #[must_use]
    pub fn at(self, offset: usize) -> u16 {
        debug_assert!(offset < self.len as usize, "offset {offset} outside {self:?}");
        self.base + offset as u16
    }

    /// Returns true if the physical index belongs to this range.
    #[inline]
    #[must_use]
    pub const fn contains(self, index: u16) -> bool {
        index >= self.base && index < self.end()
    }

    /// Returns true if the two ranges share any index.
    #[inline]
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        self.base < other.end() && other.base < self.end()
    }

    /// Sub-range of `len` patterns starting `offset` patterns in.
    ///
    /// # Panics
    ///
    /// Panics if the sub-range does not fit.
    #[must_use]
    pub fn slice(self, offset: u16, len: u16) -> Self {
        assert!(offset + len <= self.len, "slice {offset}+{len} outside {self:?}");
        Self::new(self.base + offset, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let r = SlotRange::new(49, 24);
        assert_eq!(r.end(), 73);
        assert!(r.contains(49));
        assert!(r.contains(72));
        assert!(!r.contains(73));
        assert_eq!(r.at(23), 72);
    }

    #[test]
    fn test_overlap() {
        let a = SlotRange::new(0, 10);
        assert!(a.overlaps(SlotRange::new(9, 1)));
        assert!(!a.overlaps(SlotRange::new(10, 5)));
        assert!(!a.overlaps(SlotRange::new(20, 0)));
    }

    #[test]
    fn test_slice() {
        let r = SlotRange::new(297, 30);
        assert_eq!(r.slice(5, 5), SlotRange::new(302, 5));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_slice_out_of_range_panics() {
        let _ = SlotRange::new(0, 4).slice(2, 3);
    }
}
