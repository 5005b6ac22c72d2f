//! Video memory image: pattern table, tile map and sprite attribute table.

use ants_core::{DirtySet, DirtySync};
use ants_shared::constants::{MAP_COLUMNS, MAP_ROWS, PATTERN_CAPACITY, SPRITE_CAPACITY};
use ants_shared::{Pattern, TileEntry, PATTERN_BYTES};

/// Sprite Y value that hides a sprite (and, on hardware, every later one).
pub const SPRITE_TERMINATOR: u8 = 0xd0;

/// Bytes moved when the sprite table is re-submitted.
pub const SPRITE_TABLE_BYTES: usize = SPRITE_CAPACITY * 3;

/// Bytes per tile map entry.
pub const TILE_ENTRY_BYTES: usize = 2;

const PATTERN_WORDS: usize = PATTERN_CAPACITY.div_ceil(64);
const TILEMAP_WORDS: usize = (MAP_COLUMNS * MAP_ROWS).div_ceil(64);

/// One sprite attribute entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteEntry {
    /// Screen X.
    pub x: u8,
    /// Screen Y, or [`SPRITE_TERMINATOR`].
    pub y: u8,
    /// Pattern index (sprites address the first 256 patterns).
    pub pattern: u8,
}

impl SpriteEntry {
    /// A sprite that is not drawn.
    pub const HIDDEN: Self = Self {
        x: 0,
        y: SPRITE_TERMINATOR,
        pattern: 0,
    };

    /// Returns true if the sprite is drawn.
    #[inline]
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.y != SPRITE_TERMINATOR
    }
}

/// A complete VRAM image with per-region dirty tracking.
#[derive(Clone, Debug)]
pub struct Vram {
    patterns: [Pattern; PATTERN_CAPACITY],
    tilemap: [TileEntry; MAP_COLUMNS * MAP_ROWS],
    sprites: [SpriteEntry; SPRITE_CAPACITY],
    dirty_patterns: DirtySet<PATTERN_WORDS>,
    dirty_tiles: DirtySet<TILEMAP_WORDS>,
    sprites_dirty: bool,
}

impl Default for Vram {
    fn default() -> Self {
        Self::new()
    }
}

impl Vram {
    /// Cleared VRAM: blank patterns, blank map, hidden sprites.
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: [Pattern::BLANK; PATTERN_CAPACITY],
            tilemap: [TileEntry::BLANK; MAP_COLUMNS * MAP_ROWS],
            sprites: [SpriteEntry::HIDDEN; SPRITE_CAPACITY],
            dirty_patterns: DirtySet::new(),
            dirty_tiles: DirtySet::new(),
            sprites_dirty: false,
        }
    }

    /// Pattern at a physical index.
    #[inline]
    #[must_use]
    pub fn pattern(&self, index: u16) -> &Pattern {
        &self.patterns[index as usize]
    }

    /// Patterns `base..base + len`.
    #[must_use]
    pub fn patterns(&self, base: u16, len: usize) -> &[Pattern] {
        &self.patterns[base as usize..base as usize + len]
    }

    /// Tile map entry at a tile coordinate.
    #[inline]
    #[must_use]
    pub fn tile(&self, x: usize, y: usize) -> TileEntry {
        self.tilemap[y * MAP_COLUMNS + x]
    }

    /// Sprite attribute entry.
    #[inline]
    #[must_use]
    pub fn sprite(&self, index: usize) -> SpriteEntry {
        self.sprites[index]
    }

    /// Number of sprites drawn.
    #[must_use]
    pub fn visible_sprites(&self) -> usize {
        self.sprites.iter().take_while(|s| s.is_visible()).count()
    }

    /// Colour index at a screen pixel, as the background layer shows it.
    #[must_use]
    pub fn background_pixel(&self, x: usize, y: usize) -> u8 {
        let entry = self.tile(x / 8, y / 8);
        let px = if entry.0 & TileEntry::FLIP_X != 0 {
            7 - x % 8
        } else {
            x % 8
        };
        self.pattern(entry.pattern()).pixel(px, y % 8)
    }

    pub(crate) fn write_patterns(&mut self, base: u16, patterns: &[Pattern]) {
        let start = base as usize;
        assert!(
            start + patterns.len() <= PATTERN_CAPACITY,
            "pattern upload {start}+{} past end of pattern memory",
            patterns.len()
        );
        self.patterns[start..start + patterns.len()].copy_from_slice(patterns);
        self.dirty_patterns.mark_range(start, start + patterns.len());
    }

    pub(crate) fn write_tile(&mut self, x: usize, y: usize, entry: TileEntry) {
        assert!(x < MAP_COLUMNS && y < MAP_ROWS, "tile ({x}, {y}) off the map");
        let index = y * MAP_COLUMNS + x;
        self.tilemap[index] = entry;
        self.dirty_tiles.mark(index);
    }

    pub(crate) fn write_sprite(&mut self, index: usize, entry: SpriteEntry) {
        self.sprites[index] = entry;
        self.sprites_dirty = true;
    }

    /// Number of patterns waiting for the next present.
    #[must_use]
    pub fn pending_patterns(&self) -> usize {
        self.dirty_patterns.count()
    }

    /// Number of tile map entries waiting for the next present.
    #[must_use]
    pub fn pending_tiles(&self) -> usize {
        self.dirty_tiles.count()
    }

    /// Returns true if the sprite table changed since the last present.
    #[must_use]
    pub fn sprites_pending(&self) -> bool {
        self.sprites_dirty
    }

    /// Bytes the next present will transfer.
    #[must_use]
    pub fn pending_bytes(&self) -> usize {
        self.pending_patterns() * PATTERN_BYTES
            + self.pending_tiles() * TILE_ENTRY_BYTES
            + if self.sprites_dirty { SPRITE_TABLE_BYTES } else { 0 }
    }
}

impl DirtySync for Vram {
    fn sync_dirty_into(&mut self, front: &mut Self) -> usize {
        let bytes = self.pending_bytes();

        for i in self.dirty_patterns.iter() {
            front.patterns[i] = self.patterns[i];
        }
        for i in self.dirty_tiles.iter() {
            front.tilemap[i] = self.tilemap[i];
        }
        if self.sprites_dirty {
            front.sprites = self.sprites;
        }

        self.dirty_patterns.clear();
        self.dirty_tiles.clear();
        self.sprites_dirty = false;
        bytes
    }
}
