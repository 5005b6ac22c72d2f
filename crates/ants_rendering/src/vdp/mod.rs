//! # Video Display Processor
//!
//! Every renderer writes into the back VRAM image through [`Vdp`]. Nothing is
//! visible until [`Vdp::wait_for_vblank`], which presents the dirty regions to
//! the front image in one step. Hosts observe the front image through a
//! [`FrontReader`].
//!
//! ```text
//!   renderers ──write──▶ back Vram ──wait_for_vblank()──▶ front Vram ──▶ host
//! ```

mod stats;
mod vram;

pub use stats::VramStats;
pub use vram::{SpriteEntry, Vram, SPRITE_TABLE_BYTES, SPRITE_TERMINATOR, TILE_ENTRY_BYTES};

use ants_core::{DoubleBuffer, FrontReader};
use ants_shared::constants::{SPRITE_CAPACITY, VBLANK_TRANSFER_BUDGET};
use ants_shared::{Pattern, TileEntry};

/// Single writer for video memory.
#[derive(Debug)]
pub struct Vdp {
    frame: DoubleBuffer<Vram>,
    stats: VramStats,
    display_enabled: bool,
}

impl Default for Vdp {
    fn default() -> Self {
        Self::new()
    }
}

impl Vdp {
    /// Cleared VRAM with the display off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame: DoubleBuffer::new(Vram::new()),
            stats: VramStats::default(),
            display_enabled: false,
        }
    }

    /// Turns the display on or off.
    ///
    /// With the display off, bulk loads are free of the vertical-blank budget.
    pub fn set_display(&mut self, enabled: bool) {
        self.display_enabled = enabled;
    }

    /// Returns true if the display is on.
    #[inline]
    #[must_use]
    pub fn display_enabled(&self) -> bool {
        self.display_enabled
    }

    /// Copies `patterns` into pattern memory starting at `base`.
    ///
    /// # Panics
    ///
    /// Panics if the upload runs past the end of pattern memory.
    pub fn upload_patterns(&mut self, base: u16, patterns: &[Pattern]) {
        self.frame.back_mut().write_patterns(base, patterns);
        self.stats.pattern_uploads += patterns.len() as u64;
    }

    /// Writes one tile map entry.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is off the map.
    pub fn set_tile(&mut self, x: usize, y: usize, entry: TileEntry) {
        self.frame.back_mut().write_tile(x, y, entry);
        self.stats.tilemap_writes += 1;
    }

    /// Writes a `width`-wide block of tile map entries, row-major, with its
    /// top-left corner at `(x, y)`.
    pub fn set_tile_area(&mut self, x: usize, y: usize, width: usize, entries: &[TileEntry]) {
        for (i, entry) in entries.iter().enumerate() {
            self.set_tile(x + i % width, y + i / width, *entry);
        }
    }

    /// Writes one sprite attribute entry.
    pub fn set_sprite(&mut self, index: usize, sprite: SpriteEntry) {
        self.frame.back_mut().write_sprite(index, sprite);
    }

    /// Hides every sprite.
    pub fn clear_sprites(&mut self) {
        for i in 0..SPRITE_CAPACITY {
            self.set_sprite(i, SpriteEntry::HIDDEN);
        }
    }

    /// Blocks until the next vertical blank and presents pending writes.
    ///
    /// Returns the number of bytes transferred.
    pub fn wait_for_vblank(&mut self) -> usize {
        let sprites = self.frame.back().sprites_pending();
        let bytes = self.frame.present();

        self.stats.frames += 1;
        self.stats.frame_bytes = bytes;
        self.stats.worst_frame_bytes = self.stats.worst_frame_bytes.max(bytes);
        if sprites {
            self.stats.sprite_commits += 1;
        }
        if self.display_enabled && bytes > VBLANK_TRANSFER_BUDGET {
            self.stats.overruns += 1;
            tracing::warn!(
                bytes,
                budget = VBLANK_TRANSFER_BUDGET,
                frame = self.stats.frames,
                "VRAM transfer exceeded the vertical blank"
            );
        }
        bytes
    }

    /// Waits `frames` vertical blanks.
    pub fn delay_frames(&mut self, frames: u32) {
        for _ in 0..frames {
            self.wait_for_vblank();
        }
    }

    /// State as written, including what has not been presented yet.
    #[inline]
    #[must_use]
    pub fn back(&self) -> &Vram {
        self.frame.back()
    }

    /// Handle on the presented state.
    #[must_use]
    pub fn reader(&self) -> FrontReader<Vram> {
        self.frame.reader()
    }

    /// Transfer counters.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> VramStats {
        self.stats
    }
}
