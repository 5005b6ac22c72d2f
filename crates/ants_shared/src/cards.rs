//! # Card Catalogue
//!
//! Thirty cards in three groups of ten. The group a card belongs to is also
//! its art band: discard overlays are drawn per group.

use serde::{Deserialize, Serialize};

use crate::player::Field;

/// Number of distinct cards.
pub const CARD_COUNT: usize = 30;

/// Cards per group (building, army, magic).
pub const CARDS_PER_GROUP: usize = 10;

/// Card group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// Paid in bricks.
    Building,
    /// Paid in weapons.
    Army,
    /// Paid in crystals.
    Magic,
}

impl CardType {
    /// The resource that pays for cards of this group.
    #[inline]
    #[must_use]
    pub const fn cost_unit(self) -> Field {
        match self {
            Self::Building => Field::Bricks,
            Self::Army => Field::Weapons,
            Self::Magic => Field::Crystals,
        }
    }

    /// Art band index (0..3).
    #[inline]
    #[must_use]
    pub const fn band(self) -> usize {
        self as usize
    }
}

/// A playable card.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Card {
    Wall = 0,
    Base,
    Defence,
    Reserve,
    Tower,
    School,
    Wain,
    Fence,
    Fort,
    Babylon,

    Archer,
    Knight,
    Rider,
    Platoon,
    Recruit,
    Attack,
    Saboteur,
    Thief,
    Swat,
    Banshee,

    ConjureBricks,
    CrushBricks,
    ConjureWeapons,
    CrushWeapons,
    ConjureCrystals,
    CrushCrystals,
    Sorcerer,
    Dragon,
    Pixies,
    Curse,
}

const COSTS: [u8; CARD_COUNT] = [
    1, 1, 3, 3, 5, 8, 10, 12, 18, 39, // building
    1, 2, 2, 4, 8, 10, 12, 15, 18, 28, // army
    4, 4, 4, 4, 4, 4, 8, 21, 22, 25, // magic
];

impl Card {
    /// Every card in id order.
    pub const ALL: [Self; CARD_COUNT] = [
        Self::Wall,
        Self::Base,
        Self::Defence,
        Self::Reserve,
        Self::Tower,
        Self::School,
        Self::Wain,
        Self::Fence,
        Self::Fort,
        Self::Babylon,
        Self::Archer,
        Self::Knight,
        Self::Rider,
        Self::Platoon,
        Self::Recruit,
        Self::Attack,
        Self::Saboteur,
        Self::Thief,
        Self::Swat,
        Self::Banshee,
        Self::ConjureBricks,
        Self::CrushBricks,
        Self::ConjureWeapons,
        Self::CrushWeapons,
        Self::ConjureCrystals,
        Self::CrushCrystals,
        Self::Sorcerer,
        Self::Dragon,
        Self::Pixies,
        Self::Curse,
    ];

    /// Looks a card up by id.
    #[inline]
    #[must_use]
    pub const fn from_index(id: usize) -> Option<Self> {
        if id < CARD_COUNT {
            Some(Self::ALL[id])
        } else {
            None
        }
    }

    /// Card id (0..30).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Group of the card.
    #[inline]
    #[must_use]
    pub const fn card_type(self) -> CardType {
        match self.index() / CARDS_PER_GROUP {
            0 => CardType::Building,
            1 => CardType::Army,
            _ => CardType::Magic,
        }
    }

    /// Resource spent to play the card.
    #[inline]
    #[must_use]
    pub const fn cost_unit(self) -> Field {
        self.card_type().cost_unit()
    }

    /// Amount spent to play the card.
    #[inline]
    #[must_use]
    pub const fn cost(self) -> u16 {
        COSTS[self.index()] as u16
    }

    /// Cards that raise a production field.
    #[inline]
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::School | Self::Recruit | Self::Sorcerer)
    }
}

/// What a card position shows.
///
/// This is the content identifier of the card pattern cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardFace {
    /// A card face.
    Card(Card),
    /// A card face dimmed by the discard overlay.
    Discarded(Card),
    /// The card back.
    Back,
    /// Nothing: the position shows blank tiles.
    Empty,
}

impl CardFace {
    /// Returns the card, if this face shows one.
    #[must_use]
    pub const fn card(self) -> Option<Card> {
        match self {
            Self::Card(card) | Self::Discarded(card) => Some(card),
            Self::Back | Self::Empty => None,
        }
    }
}
