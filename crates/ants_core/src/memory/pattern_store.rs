//! # Pattern Store
//!
//! Fixed set of slot ranges, each remembering which content key was last
//! uploaded into it.
//!
//! ## Performance
//!
//! - Hit: O(1), no transfer
//! - Miss: one upload callback covering the whole range
//!
//! The store never touches pattern memory itself. The caller passes an upload
//! closure that performs the transfer; the store only records the resident key
//! once the closure has returned.

use crate::memory::slot::SlotRange;

/// One slot range and the content key resident in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheEntry<K> {
    /// Physical patterns owned by this entry.
    pub range: SlotRange,
    /// Content currently uploaded, `None` before the first upload.
    pub resident: Option<K>,
}

/// Outcome of [`PatternStore::ensure_resident`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Residency<K> {
    /// The key was already resident. Nothing was uploaded.
    Hit,
    /// The key was uploaded, replacing `evicted`.
    Uploaded {
        /// Key that occupied the range before.
        evicted: Option<K>,
    },
}

impl<K> Residency<K> {
    /// Returns true if an upload happened.
    #[inline]
    #[must_use]
    pub const fn uploaded(&self) -> bool {
        matches!(self, Self::Uploaded { .. })
    }
}

/// Hit/upload counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Requests satisfied without an upload.
    pub hits: u64,
    /// Uploads performed.
    pub uploads: u64,
    /// Uploads that replaced an existing key.
    pub evictions: u64,
}

impl StoreStats {
    /// Hit ratio (0.0 to 1.0).
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_ratio(&self) -> f32 {
        let total = self.hits + self.uploads;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }
}

/// `N` slot ranges with resident-key tracking.
///
/// ## Usage
///
/// ```rust,ignore
/// let mut store: PatternStore<CardFace, 10> = PatternStore::new(ranges);
///
/// let residency = store.ensure_resident(slot, face, |range| {
///     vdp.upload_patterns(range.base(), &patterns);
/// });
/// ```
#[derive(Debug)]
pub struct PatternStore<K, const N: usize> {
    entries: [CacheEntry<K>; N],
    stats: StoreStats,
}

impl<K: Copy + Eq, const N: usize> PatternStore<K, N> {
    /// Creates a store over the given ranges. Every entry starts empty.
    ///
    /// # Panics
    ///
    /// Panics if any two ranges overlap.
    #[must_use]
    pub fn new(ranges: [SlotRange; N]) -> Self {
        for (i, a) in ranges.iter().enumerate() {
            for b in &ranges[i + 1..] {
                assert!(!a.overlaps(*b), "slot ranges {a:?} and {b:?} overlap");
            }
        }
        Self {
            entries: ranges.map(|range| CacheEntry {
                range,
                resident: None,
            }),
            stats: StoreStats::default(),
        }
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true if the store has no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Makes `key` resident in entry `slot`, calling `upload` on a miss.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= N`.
    pub fn ensure_resident<F>(&mut self, slot: usize, key: K, upload: F) -> Residency<K>
    where
        F: FnOnce(SlotRange),
    {
        let entry = &mut self.entries[slot];
        if entry.resident == Some(key) {
            self.stats.hits += 1;
            return Residency::Hit;
        }

        upload(entry.range);

        let evicted = entry.resident.replace(key);
        self.stats.uploads += 1;
        if evicted.is_some() {
            self.stats.evictions += 1;
        }
        Residency::Uploaded { evicted }
    }

    /// Key resident in entry `slot`.
    #[inline]
    #[must_use]
    pub fn resident(&self, slot: usize) -> Option<K> {
        self.entries.get(slot).and_then(|e| e.resident)
    }

    /// Range owned by entry `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= N`.
    #[inline]
    #[must_use]
    pub fn range(&self, slot: usize) -> SlotRange {
        self.entries[slot].range
    }

    /// First entry holding `key`.
    #[must_use]
    pub fn find(&self, key: K) -> Option<usize> {
        self.entries.iter().position(|e| e.resident == Some(key))
    }

    /// Forgets what entry `slot` holds, forcing the next request to upload.
    pub fn invalidate(&mut self, slot: usize) {
        if let Some(entry) = self.entries.get_mut(slot) {
            entry.resident = None;
        }
    }

    /// Forgets every entry.
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.resident = None;
        }
    }

    /// All entries in slot order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[CacheEntry<K>; N] {
        &self.entries
    }

    /// Counters since construction.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        self.stats
    }
}
