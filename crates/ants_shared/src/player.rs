//! Players and per-player resource fields.

use serde::{Deserialize, Serialize};

/// Resource fields per player.
pub const FIELD_COUNT: usize = 8;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    /// Left side of the table, moves first.
    One,
    /// Right side of the table.
    Two,
}

impl Player {
    /// Both players in seating order.
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    /// Seat index (0 or 1).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// The opponent.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// A resource counter shown on a side panel.
///
/// Fields come in producer/stock pairs, followed by the two structures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Produces bricks.
    Builders,
    /// Pays for building cards.
    Bricks,
    /// Produces weapons.
    Soldiers,
    /// Pays for army cards.
    Weapons,
    /// Produces crystals.
    Magi,
    /// Pays for magic cards.
    Crystals,
    /// Fortification height.
    Castle,
    /// Barrier height.
    Fence,
}

impl Field {
    /// Every field in panel order.
    pub const ALL: [Self; FIELD_COUNT] = [
        Self::Builders,
        Self::Bricks,
        Self::Soldiers,
        Self::Weapons,
        Self::Magi,
        Self::Crystals,
        Self::Castle,
        Self::Fence,
    ];

    /// Panel index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Producer fields are drawn in their own colour class.
    #[inline]
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Builders | Self::Soldiers | Self::Magi)
    }

    /// The stock a producer feeds, if any.
    #[must_use]
    pub const fn produces(self) -> Option<Self> {
        match self {
            Self::Builders => Some(Self::Bricks),
            Self::Soldiers => Some(Self::Weapons),
            Self::Magi => Some(Self::Crystals),
            _ => None,
        }
    }
}
