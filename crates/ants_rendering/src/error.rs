//! Error types for the asset bank.
//!
//! The render path itself never fails. Only building an [`AssetBank`] can.
//!
//! [`AssetBank`]: crate::assets::AssetBank

use thiserror::Error;

use crate::assets::StructureAsset;

/// Errors detected while validating asset data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// More static patterns than the static region holds.
    #[error("static patterns overflow: {count} patterns, region holds {capacity}")]
    StaticOverflow {
        /// Patterns supplied.
        count: usize,
        /// Region capacity.
        capacity: usize,
    },

    /// Card art does not cover the whole catalogue.
    #[error("card art covers {found} cards, expected {expected}")]
    CardCount {
        /// Faces supplied.
        found: usize,
        /// Cards in the catalogue.
        expected: usize,
    },

    /// A map has the wrong number of entries.
    #[error("map {map} has {found} entries, expected {expected}")]
    MapSize {
        /// Map name.
        map: &'static str,
        /// Entries supplied.
        found: usize,
        /// Entries required.
        expected: usize,
    },

    /// A map entry references a pattern that the bank does not load.
    #[error("map {map} entry {index} references pattern {pattern} outside the static bank")]
    PatternOutOfBank {
        /// Map name.
        map: &'static str,
        /// Entry index in the map.
        index: usize,
        /// Referenced pattern index.
        pattern: u16,
    },

    /// Structure body art lets the background show through. Body rows share
    /// one pattern, so the gaps would repeat the wrong background.
    #[error("{0:?} body art has transparent pixels")]
    TranslucentBody(StructureAsset),
}

/// Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;
