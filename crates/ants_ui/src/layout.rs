//! Where cards sit on the table.
//!
//! Every card position has a tile-map home (the 4×6 block drawn into the
//! background) and a pixel position used while the card slides as sprites.

use ants_rendering::DISCARD_SLOT;
use ants_shared::constants::{
    CARD_COLUMNS, CARD_ROWS, DISCARD_X_TILE, DISCARD_Y_TILE, DRAW_X_TILE, DRAW_Y_TILE,
    HAND_SIZE, HAND_Y_TILE,
};

/// Pixels per tile side.
pub const TILE_PIXELS: u16 = 8;

/// A point in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// X position (left edge).
    pub x: u16,
    /// Y position (top edge).
    pub y: u16,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Top-left pixel of a tile.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_tile(x: usize, y: usize) -> Self {
        Self {
            x: x as u16 * TILE_PIXELS,
            y: y as u16 * TILE_PIXELS,
        }
    }
}

/// A place a card can be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardPosition {
    /// One of the eight hand slots along the bottom.
    Hand(usize),
    /// The draw pile, always face down.
    Draw,
    /// The discard pile, showing the last card played or discarded.
    Discard,
}

impl CardPosition {
    /// Every hand slot, left to right.
    #[must_use]
    pub fn hand() -> impl Iterator<Item = Self> {
        (0..HAND_SIZE).map(Self::Hand)
    }

    /// Top-left tile of the card block.
    ///
    /// # Panics
    ///
    /// Panics if a hand slot is outside the hand.
    #[must_use]
    pub fn tile(self) -> (usize, usize) {
        match self {
            Self::Hand(slot) => {
                assert!(slot < HAND_SIZE, "hand slot {slot} outside the hand");
                (slot * CARD_COLUMNS, HAND_Y_TILE)
            }
            Self::Draw => (DRAW_X_TILE, DRAW_Y_TILE),
            Self::Discard => (DISCARD_X_TILE, DISCARD_Y_TILE),
        }
    }

    /// Top-left pixel of the card.
    #[must_use]
    pub fn point(self) -> Point {
        let (x, y) = self.tile();
        Point::from_tile(x, y)
    }

    /// Card buffer slot backing this position.
    ///
    /// The draw pile only ever shows the card back, which has a buffer of
    /// its own, so it borrows slot 0.
    #[must_use]
    pub fn cache_slot(self) -> usize {
        match self {
            Self::Hand(slot) => slot,
            Self::Draw => 0,
            Self::Discard => DISCARD_SLOT,
        }
    }

    /// Size of a card in pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn card_size() -> (u16, u16) {
        (CARD_COLUMNS as u16 * TILE_PIXELS, CARD_ROWS as u16 * TILE_PIXELS)
    }
}
