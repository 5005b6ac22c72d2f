//! # Ants Shared
//!
//! Common types used by every crate in the workspace.
//!
//! ## CRITICAL RULE
//!
//! This crate holds data, not behaviour:
//! - screen geometry and the pattern-memory map (`constants`)
//! - the 8×8 planar `Pattern` and tile-map entries (`tile`)
//! - players and resource fields (`player`)
//! - the card catalogue (`cards`)
//! - turn pacing and slide speed (`pacing`)
//!
//! If you need to *draw* something, put it in `ants_rendering`.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod cards;
pub mod constants;
pub mod pacing;
pub mod player;
pub mod tile;

pub use cards::{Card, CardFace, CardType, CARD_COUNT};
pub use constants::{MAP_COLUMNS, MAP_ROWS, PATTERN_CAPACITY, SPRITE_CAPACITY};
pub use pacing::SlideSpeed;
pub use player::{Field, Player, FIELD_COUNT};
pub use tile::{Pattern, TileEntry, PATTERN_BYTES};
