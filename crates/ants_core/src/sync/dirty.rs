//! Fixed-capacity dirty bitset.
//!
//! ## Performance
//!
//! - Mark dirty: O(1)
//! - Clear all: O(WORDS)
//! - Iterate dirty: O(WORDS + dirty count)

/// Bitset tracking up to `WORDS * 64` dirty indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirtySet<const WORDS: usize> {
    bits: [u64; WORDS],
    count: usize,
}

impl<const WORDS: usize> Default for DirtySet<WORDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const WORDS: usize> DirtySet<WORDS> {
    /// Number of indices the set can track.
    pub const CAPACITY: usize = WORDS * 64;

    /// Creates a clean set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bits: [0; WORDS],
            count: 0,
        }
    }

    /// Marks an index dirty.
    #[inline]
    pub fn mark(&mut self, index: usize) {
        debug_assert!(index < Self::CAPACITY, "dirty index {index} out of bounds");
        let Some(word) = self.bits.get_mut(index / 64) else {
            return;
        };
        let mask = 1u64 << (index % 64);
        if *word & mask == 0 {
            *word |= mask;
            self.count += 1;
        }
    }

    /// Marks `start..end` dirty.
    #[inline]
    pub fn mark_range(&mut self, start: usize, end: usize) {
        for i in start..end.min(Self::CAPACITY) {
            self.mark(i);
        }
    }

    /// Checks if an index is dirty.
    #[inline]
    #[must_use]
    pub fn is_dirty(&self, index: usize) -> bool {
        self.bits
            .get(index / 64)
            .is_some_and(|w| (w >> (index % 64)) & 1 == 1)
    }

    /// Clears every flag.
    pub fn clear(&mut self) {
        self.bits = [0; WORDS];
        self.count = 0;
    }

    /// Number of dirty indices.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Checks if anything is dirty.
    #[inline]
    #[must_use]
    pub const fn has_dirty(&self) -> bool {
        self.count > 0
    }

    /// Iterates dirty indices in ascending order.
    ///
    /// Uses `trailing_zeros` to skip clean words.
    #[must_use]
    pub fn iter(&self) -> DirtyIter<'_> {
        DirtyIter {
            bits: &self.bits,
            word_idx: 0,
            current: self.bits.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over dirty indices.
pub struct DirtyIter<'a> {
    bits: &'a [u64],
    word_idx: usize,
    current: u64,
}

impl Iterator for DirtyIter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_idx * 64 + bit);
            }
            self.word_idx += 1;
            self.current = *self.bits.get(self.word_idx)?;
        }
    }
}
