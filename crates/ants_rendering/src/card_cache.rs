//! # Card Pattern Cache
//!
//! Ten 24-pattern slots: hand positions 0-7, the discard pile (8) and the
//! card back (9), plus a separate range for the sliding sprite.
//!
//! ```text
//!   slot:   0    1    2    3    4    5    6    7    8        9
//!         [hand][hand][hand][hand][hand][hand][hand][hand][discard][back]
//!          49   73   97   ...                          241       25
//! ```
//!
//! A slot is only re-uploaded when the face it must show differs from the
//! face already resident. The back lives in its own slot, so hand churn never
//! evicts it.

use ants_core::{PatternStore, Residency, SlotRange, StoreStats};
use ants_shared::constants::{
    CARD_BUFFER_SLOTS, CARD_COLUMNS, CARD_FRAGMENTS, PATTERN_CARD_BACK, PATTERN_CARD_BUFFER,
    PATTERN_CARD_SPRITE,
};
use ants_shared::{CardFace, Pattern, TileEntry};

use crate::assets::{AssetProvider, PatternAsset, DISCARD_OVERLAY_FRAGMENTS};
use crate::vdp::Vdp;

/// Slot holding the discard pile.
pub const DISCARD_SLOT: usize = 8;

/// Slot pinned to the card back.
pub const BACK_SLOT: usize = 9;

/// Slots in the cache.
pub const CACHE_SLOTS: usize = CARD_BUFFER_SLOTS + 1;

/// First fragment touched by the discard overlay.
const OVERLAY_START: usize = CARD_FRAGMENTS - DISCARD_OVERLAY_FRAGMENTS;

/// Scanlines of the card kept above the overlay in the blended row.
const OVERLAY_KEEP_LINES: usize = 3;

/// Where a card position's patterns live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPatterns {
    /// Nothing to show: every tile points at the blank pattern.
    Blank,
    /// 24 patterns, row-major, 4 wide.
    Range(SlotRange),
}

impl CardPatterns {
    /// Tile map entry for one fragment.
    #[inline]
    #[must_use]
    pub fn entry(self, fragment: usize) -> TileEntry {
        match self {
            Self::Blank => TileEntry::BLANK,
            Self::Range(range) => TileEntry::new(range.at(fragment)),
        }
    }

    /// Pattern index for one fragment, for sprite use.
    #[inline]
    #[must_use]
    pub fn pattern(self, fragment: usize) -> u16 {
        self.entry(fragment).pattern()
    }
}

/// Builds the 24 patterns shown for `face`.
///
/// A discarded card keeps fragments 0-15, blends card lines 0-2 with overlay
/// lines 3-7 in fragments 16-19, and shows the overlay alone in 20-23. The
/// overlay is chosen by the card's group.
#[must_use]
pub fn compose_face<A: AssetProvider + ?Sized>(assets: &A, face: CardFace) -> [Pattern; CARD_FRAGMENTS] {
    let mut out = [Pattern::BLANK; CARD_FRAGMENTS];
    match face {
        CardFace::Empty => {}
        CardFace::Back => out.copy_from_slice(assets.patterns(PatternAsset::CardBack)),
        CardFace::Card(card) => out.copy_from_slice(assets.patterns(PatternAsset::CardFace(card))),
        CardFace::Discarded(card) => {
            out.copy_from_slice(assets.patterns(PatternAsset::CardFace(card)));
            let overlay = assets.patterns(PatternAsset::DiscardOverlay(card.card_type()));
            for (i, pattern) in out.iter_mut().enumerate().skip(OVERLAY_START) {
                let over = &overlay[i - OVERLAY_START];
                if i < OVERLAY_START + CARD_COLUMNS {
                    pattern.copy_lines(
                        OVERLAY_KEEP_LINES,
                        over,
                        OVERLAY_KEEP_LINES,
                        8 - OVERLAY_KEEP_LINES,
                    );
                } else {
                    *pattern = *over;
                }
            }
        }
    }
    out
}

/// Resident-face tracking for the card pattern buffers.
#[derive(Debug)]
pub struct CardBufferCache {
    slots: PatternStore<CardFace, CACHE_SLOTS>,
    sprite: PatternStore<CardFace, 1>,
}

impl Default for CardBufferCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CardBufferCache {
    /// Creates an empty cache over the card pattern ranges.
    #[must_use]
    pub fn new() -> Self {
        let ranges = std::array::from_fn(|slot| {
            if slot == BACK_SLOT {
                SlotRange::new(PATTERN_CARD_BACK, CARD_FRAGMENTS as u16)
            } else {
                SlotRange::new(
                    PATTERN_CARD_BUFFER + (slot * CARD_FRAGMENTS) as u16,
                    CARD_FRAGMENTS as u16,
                )
            }
        });
        Self {
            slots: PatternStore::new(ranges),
            sprite: PatternStore::new([SlotRange::new(PATTERN_CARD_SPRITE, CARD_FRAGMENTS as u16)]),
        }
    }

    /// Makes `face` resident for card position `slot` (hand 0-7 or discard 8).
    ///
    /// Backs are served from the pinned back slot and empty positions need no
    /// patterns at all.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not a hand or discard position.
    pub fn ensure_resident<A: AssetProvider + ?Sized>(
        &mut self,
        vdp: &mut Vdp,
        assets: &A,
        slot: usize,
        face: CardFace,
    ) -> CardPatterns {
        assert!(slot <= DISCARD_SLOT, "card slot {slot} is not a hand or discard position");
        let slot = match face {
            CardFace::Empty => return CardPatterns::Blank,
            CardFace::Back => BACK_SLOT,
            CardFace::Card(_) | CardFace::Discarded(_) => slot,
        };

        let residency = self.slots.ensure_resident(slot, face, |range| {
            vdp.upload_patterns(range.base(), &compose_face(assets, face));
        });
        if let Residency::Uploaded { evicted } = residency {
            tracing::debug!(slot, ?face, ?evicted, "card patterns uploaded");
        }
        CardPatterns::Range(self.slots.range(slot))
    }

    /// Makes `face` resident and points the 4×6 tile block at `(x, y)` at it.
    pub fn draw<A: AssetProvider + ?Sized>(
        &mut self,
        vdp: &mut Vdp,
        assets: &A,
        slot: usize,
        face: CardFace,
        x: usize,
        y: usize,
    ) -> CardPatterns {
        let patterns = self.ensure_resident(vdp, assets, slot, face);
        for fragment in 0..CARD_FRAGMENTS {
            vdp.set_tile(
                x + fragment % CARD_COLUMNS,
                y + fragment / CARD_COLUMNS,
                patterns.entry(fragment),
            );
        }
        patterns
    }

    /// Makes `face` resident in the sprite range.
    pub fn ensure_sprite<A: AssetProvider + ?Sized>(
        &mut self,
        vdp: &mut Vdp,
        assets: &A,
        face: CardFace,
    ) -> CardPatterns {
        if face == CardFace::Empty {
            return CardPatterns::Blank;
        }
        self.sprite.ensure_resident(0, face, |range| {
            vdp.upload_patterns(range.base(), &compose_face(assets, face));
        });
        CardPatterns::Range(self.sprite.range(0))
    }

    /// Face resident in a slot.
    #[must_use]
    pub fn resident(&self, slot: usize) -> Option<CardFace> {
        self.slots.resident(slot)
    }

    /// Counters for the slot buffers (sprite range excluded).
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        self.slots.stats()
    }

    /// Forgets every resident face. Used when a new game starts.
    pub fn reset(&mut self) {
        self.slots.reset();
        self.sprite.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetBank;
    use ants_shared::{Card, CardType};

    fn setup() -> (Vdp, AssetBank, CardBufferCache) {
        (Vdp::new(), AssetBank::procedural().unwrap(), CardBufferCache::new())
    }

    #[test]
    fn test_ensure_twice_uploads_once() {
        let (mut vdp, assets, mut cache) = setup();
        cache.ensure_resident(&mut vdp, &assets, 2, CardFace::Card(Card::Fort));
        cache.ensure_resident(&mut vdp, &assets, 2, CardFace::Card(Card::Fort));
        assert_eq!(vdp.stats().pattern_uploads, CARD_FRAGMENTS as u64);
        assert_eq!(cache.stats().uploads, 1);
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_ninth_card_evicts_only_its_slot() {
        let (mut vdp, assets, mut cache) = setup();
        for slot in 0..8 {
            cache.ensure_resident(&mut vdp, &assets, slot, CardFace::Card(Card::ALL[slot]));
        }
        let before = vdp.stats().pattern_uploads;

        cache.ensure_resident(&mut vdp, &assets, 3, CardFace::Card(Card::Dragon));
        assert_eq!(vdp.stats().pattern_uploads, before + CARD_FRAGMENTS as u64);
        assert_eq!(cache.stats().evictions, 1);

        let after = vdp.stats().pattern_uploads;
        for slot in (0..8).filter(|&s| s != 3) {
            cache.ensure_resident(&mut vdp, &assets, slot, CardFace::Card(Card::ALL[slot]));
            assert_eq!(cache.resident(slot), Some(CardFace::Card(Card::ALL[slot])));
        }
        assert_eq!(vdp.stats().pattern_uploads, after);
    }

    #[test]
    fn test_back_is_pinned() {
        let (mut vdp, assets, mut cache) = setup();
        let back = cache.ensure_resident(&mut vdp, &assets, 0, CardFace::Back);
        assert_eq!(back, CardPatterns::Range(SlotRange::new(PATTERN_CARD_BACK, 24)));
        for slot in 0..=DISCARD_SLOT {
            cache.ensure_resident(&mut vdp, &assets, slot, CardFace::Card(Card::ALL[slot + 10]));
        }
        let uploads = cache.stats().uploads;
        cache.ensure_resident(&mut vdp, &assets, 5, CardFace::Back);
        assert_eq!(cache.stats().uploads, uploads);
        assert_eq!(cache.resident(BACK_SLOT), Some(CardFace::Back));
    }

    #[test]
    fn test_empty_needs_no_patterns() {
        let (mut vdp, assets, mut cache) = setup();
        let p = cache.draw(&mut vdp, &assets, 1, CardFace::Empty, 4, 18);
        assert_eq!(p, CardPatterns::Blank);
        assert_eq!(vdp.stats().pattern_uploads, 0);
        assert_eq!(vdp.back().tile(7, 23), TileEntry::BLANK);
    }

    #[test]
    fn test_discard_composite_layout() {
        let assets = AssetBank::procedural().unwrap();
        let cases = [
            (Card::Wall, CardType::Building),
            (Card::Attack, CardType::Army),
            (Card::Curse, CardType::Magic),
        ];
        for (card, group) in cases {
            let plain = assets.patterns(PatternAsset::CardFace(card));
            let overlay = assets.patterns(PatternAsset::DiscardOverlay(group));
            let out = compose_face(&assets, CardFace::Discarded(card));

            assert_eq!(&out[..16], &plain[..16]);
            for i in 16..20 {
                for y in 0..3 {
                    assert_eq!(out[i].line(y), plain[i].line(y));
                }
                for y in 3..8 {
                    assert_eq!(out[i].line(y), overlay[i - 16].line(y));
                }
            }
            assert_eq!(&out[20..], &overlay[4..]);
        }
    }

    #[test]
    fn test_overlay_band_follows_group() {
        let assets = AssetBank::procedural().unwrap();
        let a = compose_face(&assets, CardFace::Discarded(Card::Babylon));
        let b = compose_face(&assets, CardFace::Discarded(Card::Wall));
        let c = compose_face(&assets, CardFace::Discarded(Card::Archer));
        assert_eq!(a[23], b[23]);
        assert_ne!(a[23], c[23]);
    }

    #[test]
    fn test_overlay_band_edges() {
        let assets = AssetBank::procedural().unwrap();
        // Ids 0-9 building, 10-19 army, 20-29 magic.
        let cases = [
            (Card::Wall, CardType::Building),
            (Card::Babylon, CardType::Building),
            (Card::Archer, CardType::Army),
            (Card::Banshee, CardType::Army),
            (Card::ConjureBricks, CardType::Magic),
            (Card::Curse, CardType::Magic),
        ];
        for (card, group) in cases {
            let overlay = assets.patterns(PatternAsset::DiscardOverlay(group));
            let out = compose_face(&assets, CardFace::Discarded(card));
            assert_eq!(&out[20..], &overlay[4..], "{card:?}");
        }

        let army = compose_face(&assets, CardFace::Discarded(Card::Banshee));
        let magic = compose_face(&assets, CardFace::Discarded(Card::ConjureBricks));
        assert_ne!(army[23], magic[23]);
    }

    #[test]
    fn test_draw_writes_block() {
        let (mut vdp, assets, mut cache) = setup();
        cache.draw(&mut vdp, &assets, DISCARD_SLOT, CardFace::Card(Card::Wain), 16, 0);
        let base = PATTERN_CARD_BUFFER + 8 * 24;
        assert_eq!(vdp.back().tile(16, 0).pattern(), base);
        assert_eq!(vdp.back().tile(19, 5).pattern(), base + 23);
    }

    #[test]
    fn test_sprite_range_separate_from_slots() {
        let (mut vdp, assets, mut cache) = setup();
        let sprite = cache.ensure_sprite(&mut vdp, &assets, CardFace::Card(Card::Knight));
        assert_eq!(sprite.pattern(0), PATTERN_CARD_SPRITE);
        assert_eq!(cache.stats().uploads, 0);
        assert_eq!(
            vdp.back().patterns(PATTERN_CARD_SPRITE, 24),
            assets.patterns(PatternAsset::CardFace(Card::Knight))
        );
    }

    #[test]
    #[should_panic(expected = "not a hand or discard")]
    fn test_back_slot_not_addressable() {
        let (mut vdp, assets, mut cache) = setup();
        cache.ensure_resident(&mut vdp, &assets, BACK_SLOT, CardFace::Card(Card::Wall));
    }
}
