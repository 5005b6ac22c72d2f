//! # Asset Provider
//!
//! Read-only art tables consumed by id.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      ASSET PROVIDER                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  PatternAsset  →  card faces, back, overlays, static set │
//! │  MapAsset      →  background, side panels, indicator     │
//! │  StructureAsset → fortification columns, barriers        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Static patterns live at [`STATIC_PATTERNS_START`] for the whole game. Map
//! entries reference them by physical index, so the same entry can go
//! straight into the tile map.

mod bank;
mod procedural;

pub use bank::{AssetBank, AssetParts};
pub use procedural::ProceduralArt;

use ants_shared::constants::{
    BACKGROUND_COLUMNS, BACKGROUND_ROWS, BACKGROUND_X_TILE, BACKGROUND_Y_TILE, STATIC_PATTERNS_START,
};
use ants_shared::{Card, CardType, Pattern, Player, TileEntry};

/// Fragments in one discard overlay band (the bottom two card rows).
pub const DISCARD_OVERLAY_FRAGMENTS: usize = 8;

/// Tiles in the active player indicator.
pub const INDICATOR_TILES: usize = 2;

/// Pattern tables addressable by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternAsset {
    /// The 24 fragments of a card face.
    CardFace(Card),
    /// The 24 fragments of the card back.
    CardBack,
    /// Discard overlay for one card group.
    DiscardOverlay(CardType),
    /// Background, panel and indicator patterns, loaded once.
    Static,
}

/// Tile maps addressable by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapAsset {
    /// The playfield image, `BACKGROUND_COLUMNS × BACKGROUND_ROWS`.
    Background,
    /// A side panel, `PANEL_COLUMNS × PANEL_ROWS`.
    Panel(Player),
    /// The active player marker.
    Indicator,
}

/// Structure art addressable by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StructureAsset {
    /// One column of a player's fortification.
    Fortification {
        /// Owner.
        player: Player,
        /// Column, left to right.
        column: usize,
    },
    /// A player's barrier.
    Barrier(Player),
}

/// Source art for one structure column.
///
/// The peak is read from the bottom of the two stacked `peak` tiles, the body
/// repeats every 8 lines, and the footing sits under the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructureArt {
    /// Two stacked tiles holding the peak in their bottom lines.
    pub peak: [Pattern; 2],
    /// Repeating body tile. Must be fully opaque.
    pub body: Pattern,
    /// Lines drawn between the body and the ground.
    pub footing: Pattern,
}

/// Source of every read-only table the renderers need.
pub trait AssetProvider {
    /// Pattern table by id.
    fn patterns(&self, id: PatternAsset) -> &[Pattern];

    /// Tile map by id.
    fn map(&self, id: MapAsset) -> &[TileEntry];

    /// Structure art by id.
    fn structure(&self, id: StructureAsset) -> &StructureArt;

    /// Pattern loaded at a physical index of the static region, blank for
    /// anything else.
    fn static_pattern(&self, index: u16) -> Pattern {
        index
            .checked_sub(STATIC_PATTERNS_START)
            .and_then(|i| self.patterns(PatternAsset::Static).get(i as usize))
            .copied()
            .unwrap_or(Pattern::BLANK)
    }

    /// Background map entry at a screen tile, blank outside the playfield.
    fn background_entry(&self, x: usize, y: usize) -> TileEntry {
        let (Some(bx), Some(by)) = (x.checked_sub(BACKGROUND_X_TILE), y.checked_sub(BACKGROUND_Y_TILE))
        else {
            return TileEntry::BLANK;
        };
        if bx >= BACKGROUND_COLUMNS || by >= BACKGROUND_ROWS {
            return TileEntry::BLANK;
        }
        self.map(MapAsset::Background)
            .get(by * BACKGROUND_COLUMNS + bx)
            .copied()
            .unwrap_or(TileEntry::BLANK)
    }

    /// Background pattern shown at a screen tile.
    fn background_pattern(&self, x: usize, y: usize) -> Pattern {
        self.static_pattern(self.background_entry(x, y).pattern())
    }
}
