//! # Structure Renderer
//!
//! Turns a height (0-100) into a fortification or barrier drawn from a
//! handful of patterns per column.
//!
//! ## Line Model
//!
//! A structure `rows` tiles high is `8 * rows` scanlines, top to bottom:
//!
//! ```text
//!   peak_offset   transparent, background shows through
//!   peak          bottom lines of the two stacked peak tiles
//!   body          `height * 4 / 5` lines, repeating every 8
//!   ground        footing lines, then transparent grass lines
//! ```
//!
//! Peak and ground always add up to 16 lines, so
//! `rows = 2 + ceil(pixels / 8)` and `peak_offset = (8 - pixels % 8) % 8`.
//!
//! ## Fragments
//!
//! Tiles holding peak lines get their own pattern. Every full body tile
//! shares one pattern. The last tile, when it holds no peak, is the base.
//! At height 0 there is no body, and every tile counts as peak.
//! Transparent pixels of every pattern are filled from the background tile
//! at the pattern's first screen position.

use ants_shared::constants::{
    BARRIER_COLUMNS, BARRIER_FRAGMENTS, BARRIER_X_TILE, FORTIFICATION_COLUMNS,
    FORTIFICATION_FRAGMENTS, FORTIFICATION_X_TILE, PATTERN_BARRIER_BUFFER,
    PATTERN_FORTIFICATION_BUFFER, STRUCTURE_ROWS, STRUCTURE_TOP_ROW,
};
use ants_core::SlotRange;
use ants_shared::tile::PATTERN_LINES;
use ants_shared::{Pattern, Player, TileEntry};

use crate::assets::{AssetProvider, StructureArt, StructureAsset};
use crate::vdp::Vdp;

/// Heights above this are drawn at this height.
pub const MAX_STRUCTURE_HEIGHT: u16 = 100;

/// Peak plus ground lines, for every kind.
const FIXED_LINES: usize = 16;

const MAX_PATTERNS: usize = FORTIFICATION_COLUMNS * FORTIFICATION_FRAGMENTS;
const MAX_MAP: usize = FORTIFICATION_COLUMNS * STRUCTURE_ROWS;

/// Which structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StructureKind {
    /// Six columns wide, tracks the castle counter.
    Fortification,
    /// One column wide, tracks the fence counter.
    Barrier,
}

impl StructureKind {
    /// Scanlines of peak art.
    #[inline]
    #[must_use]
    pub const fn peak_lines(self) -> usize {
        match self {
            Self::Fortification => 13,
            Self::Barrier => 8,
        }
    }

    /// Scanlines under the body: footing plus grass.
    #[inline]
    #[must_use]
    pub const fn ground_lines(self) -> usize {
        FIXED_LINES - self.peak_lines()
    }

    /// Ground scanlines drawn from the footing art. The rest are grass.
    #[inline]
    #[must_use]
    pub const fn footing_lines(self) -> usize {
        match self {
            Self::Fortification => 0,
            Self::Barrier => 5,
        }
    }

    /// Tile columns.
    #[inline]
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Fortification => FORTIFICATION_COLUMNS,
            Self::Barrier => BARRIER_COLUMNS,
        }
    }

    /// Pattern budget per column.
    #[inline]
    #[must_use]
    pub const fn fragments(self) -> usize {
        match self {
            Self::Fortification => FORTIFICATION_FRAGMENTS,
            Self::Barrier => BARRIER_FRAGMENTS,
        }
    }

    /// Leftmost screen column for a player.
    #[inline]
    #[must_use]
    pub const fn x_tile(self, player: Player) -> usize {
        match self {
            Self::Fortification => FORTIFICATION_X_TILE[player.index()],
            Self::Barrier => BARRIER_X_TILE[player.index()],
        }
    }

    /// Pattern range reserved for a player.
    #[must_use]
    pub const fn buffer(self, player: Player) -> SlotRange {
        let len = (self.columns() * self.fragments()) as u16;
        let base = match self {
            Self::Fortification => PATTERN_FORTIFICATION_BUFFER,
            Self::Barrier => PATTERN_BARRIER_BUFFER,
        };
        SlotRange::new(base + player.index() as u16 * len, len)
    }

    fn art_id(self, player: Player, column: usize) -> StructureAsset {
        match self {
            Self::Fortification => StructureAsset::Fortification { player, column },
            Self::Barrier => StructureAsset::Barrier(player),
        }
    }
}

/// Geometry of a structure at one height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructureDescriptor {
    /// Height after clamping.
    pub height: u16,
    /// Body scanlines.
    pub pixels: usize,
    /// Tile rows spanned.
    pub rows: usize,
    /// First scanline of the peak, within the top tile.
    pub peak_offset: usize,
    /// Tiles holding peak lines.
    pub peak_tiles: usize,
    /// Full body tiles, all sharing one pattern.
    pub body_rows: usize,
    /// Whether the last tile is a base tile.
    pub base: bool,
    /// Body scanlines in the base tile.
    pub base_body_lines: usize,
    /// Distinct patterns per column.
    pub fragments: usize,
}

impl StructureDescriptor {
    /// Derives the geometry for `height`, clamped to 100.
    #[must_use]
    pub fn new(kind: StructureKind, height: u16) -> Self {
        let height = height.min(MAX_STRUCTURE_HEIGHT);
        let pixels = height as usize * 4 / 5;
        let rows = 2 + pixels.div_ceil(8);
        let peak_offset = (8 - pixels % 8) % 8;
        // With no body every tile carries peak art, so there is no base.
        let peak_tiles = if pixels == 0 {
            rows
        } else {
            (peak_offset + kind.peak_lines()).div_ceil(8)
        };

        let rest = rows - peak_tiles;
        let base = rest > 0;
        let body_rows = rest.saturating_sub(1);
        let fragments = peak_tiles + usize::from(body_rows > 0) + usize::from(base);

        Self {
            height,
            pixels,
            rows,
            peak_offset,
            peak_tiles,
            body_rows,
            base,
            base_body_lines: if base { 8 - kind.ground_lines() } else { 0 },
            fragments,
        }
    }

    /// Pattern slot, within the column, used by tile `t` (0 = top).
    #[must_use]
    pub fn fragment_of(&self, tile: usize) -> usize {
        if tile < self.peak_tiles {
            tile
        } else if self.base && tile == self.rows - 1 {
            self.peak_tiles + usize::from(self.body_rows > 0)
        } else {
            self.peak_tiles
        }
    }

    /// Screen row of the top tile.
    #[inline]
    #[must_use]
    pub fn top_row(&self) -> usize {
        STRUCTURE_TOP_ROW + STRUCTURE_ROWS - self.rows
    }
}

/// Patterns and tile map for one player's structure.
#[derive(Clone, Debug)]
pub struct StructureImage {
    kind: StructureKind,
    player: Player,
    descriptor: StructureDescriptor,
    patterns: [Pattern; MAX_PATTERNS],
    map: [TileEntry; MAX_MAP],
}

impl StructureImage {
    /// Composes the structure for `height`.
    #[must_use]
    pub fn compose<A: AssetProvider + ?Sized>(
        assets: &A,
        kind: StructureKind,
        player: Player,
        height: u16,
    ) -> Self {
        let descriptor = StructureDescriptor::new(kind, height);
        let buffer = kind.buffer(player);
        let columns = kind.columns();
        let x0 = kind.x_tile(player);
        let first_row = STRUCTURE_ROWS - descriptor.rows;

        let mut patterns = [Pattern::BLANK; MAX_PATTERNS];
        let mut map = [TileEntry::BLANK; MAX_MAP];

        for col in 0..columns {
            let art = assets.structure(kind.art_id(player, col));
            let x = x0 + col;
            let column_patterns = &mut patterns[col * kind.fragments()..(col + 1) * kind.fragments()];
            let mut composed = [false; FORTIFICATION_FRAGMENTS];

            for row in 0..STRUCTURE_ROWS {
                let y = STRUCTURE_TOP_ROW + row;
                map[row * columns + col] = if row < first_row {
                    assets.background_entry(x, y)
                } else {
                    let tile = row - first_row;
                    let fragment = descriptor.fragment_of(tile);
                    if !composed[fragment] {
                        let pattern = &mut column_patterns[fragment];
                        draw_tile(pattern, kind, &descriptor, art, tile);
                        pattern.fill_transparent_from(&assets.background_pattern(x, y));
                        composed[fragment] = true;
                    }
                    TileEntry::new(buffer.at(col * kind.fragments() + fragment))
                };
            }
        }

        Self {
            kind,
            player,
            descriptor,
            patterns,
            map,
        }
    }

    /// Geometry used.
    #[inline]
    #[must_use]
    pub fn descriptor(&self) -> &StructureDescriptor {
        &self.descriptor
    }

    /// Pattern payload, column-major, unused fragments blank.
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns[..self.kind.columns() * self.kind.fragments()]
    }

    /// Tile map block, row-major, `columns` wide and 12 rows high.
    #[must_use]
    pub fn map(&self) -> &[TileEntry] {
        &self.map[..self.kind.columns() * STRUCTURE_ROWS]
    }

    /// Writes patterns and map into VRAM.
    pub fn write(&self, vdp: &mut Vdp) {
        vdp.set_tile_area(
            self.kind.x_tile(self.player),
            STRUCTURE_TOP_ROW,
            self.kind.columns(),
            self.map(),
        );
        vdp.upload_patterns(self.kind.buffer(self.player).base(), self.patterns());
    }
}

/// Draws the opaque part of tile `tile`; transparent lines stay zero.
fn draw_tile(
    pattern: &mut Pattern,
    kind: StructureKind,
    d: &StructureDescriptor,
    art: &StructureArt,
    tile: usize,
) {
    let peak_end = d.peak_offset + kind.peak_lines();
    let body_end = peak_end + d.pixels;
    let peak_source = FIXED_LINES - kind.peak_lines();

    for y in 0..PATTERN_LINES {
        let line = tile * PATTERN_LINES + y;
        let planes = if line < d.peak_offset {
            None
        } else if line < peak_end {
            let s = peak_source + line - d.peak_offset;
            Some(art.peak[s / PATTERN_LINES].line(s % PATTERN_LINES))
        } else if line < body_end {
            Some(art.body.line(line % PATTERN_LINES))
        } else if line - body_end < kind.footing_lines() {
            Some(art.footing.line(line - body_end))
        } else {
            None
        };
        if let Some(planes) = planes {
            pattern.set_line(y, planes);
        }
    }
}

/// Change-detected structure renderer for both players.
#[derive(Debug)]
pub struct StructureRenderer {
    kind: StructureKind,
    committed: [Option<u16>; 2],
}

impl StructureRenderer {
    /// Creates a renderer that has drawn nothing yet.
    #[must_use]
    pub const fn new(kind: StructureKind) -> Self {
        Self {
            kind,
            committed: [None, None],
        }
    }

    /// Structure drawn by this renderer.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> StructureKind {
        self.kind
    }

    /// Height currently on screen for a player.
    #[inline]
    #[must_use]
    pub fn committed(&self, player: Player) -> Option<u16> {
        self.committed[player.index()]
    }

    /// Draws `height` for `player` unless it is already on screen.
    ///
    /// The structure gets a vertical blank of its own: pending writes are
    /// flushed first, then the new patterns and map are presented together.
    /// Returns true if anything was drawn.
    pub fn render<A: AssetProvider + ?Sized>(
        &mut self,
        vdp: &mut Vdp,
        assets: &A,
        player: Player,
        height: u16,
    ) -> bool {
        let height = height.min(MAX_STRUCTURE_HEIGHT);
        if self.committed[player.index()] == Some(height) {
            return false;
        }

        let image = StructureImage::compose(assets, self.kind, player, height);
        if vdp.back().pending_bytes() > 0 {
            vdp.wait_for_vblank();
        }
        image.write(vdp);
        vdp.wait_for_vblank();

        tracing::debug!(
            kind = ?self.kind,
            ?player,
            height,
            rows = image.descriptor().rows,
            fragments = image.descriptor().fragments,
            "structure rendered"
        );
        self.committed[player.index()] = Some(height);
        true
    }

    /// Renders both players. Returns how many were drawn.
    pub fn render_all<A: AssetProvider + ?Sized>(
        &mut self,
        vdp: &mut Vdp,
        assets: &A,
        heights: [u16; 2],
    ) -> usize {
        Player::ALL
            .iter()
            .filter(|&&p| self.render(vdp, assets, p, heights[p.index()]))
            .count()
    }

    /// Forgets what is on screen, forcing the next render.
    pub fn reset(&mut self) {
        self.committed = [None, None];
    }
}
