//! In-memory asset bank.

use ants_shared::constants::{
    BACKGROUND_COLUMNS, BACKGROUND_ROWS, CARD_FRAGMENTS, FORTIFICATION_COLUMNS, PANEL_COLUMNS,
    PANEL_ROWS, STATIC_PATTERNS_CAPACITY, STATIC_PATTERNS_START,
};
use ants_shared::{Pattern, Player, TileEntry, CARD_COUNT};

use super::{
    AssetProvider, MapAsset, PatternAsset, ProceduralArt, StructureArt, StructureAsset,
    DISCARD_OVERLAY_FRAGMENTS, INDICATOR_TILES,
};
use crate::error::{AssetError, AssetResult};

/// Raw tables, before validation.
#[derive(Clone, Debug)]
pub struct AssetParts {
    /// One face per card, in id order.
    pub card_faces: Vec<[Pattern; CARD_FRAGMENTS]>,
    /// Card back.
    pub card_back: [Pattern; CARD_FRAGMENTS],
    /// Discard overlays per card group.
    pub discard_overlays: [[Pattern; DISCARD_OVERLAY_FRAGMENTS]; 3],
    /// Patterns loaded at the static region.
    pub static_patterns: Vec<Pattern>,
    /// Playfield map.
    pub background: Vec<TileEntry>,
    /// Side panel maps, one per player.
    pub panels: [Vec<TileEntry>; 2],
    /// Active player marker.
    pub indicator: Vec<TileEntry>,
    /// Fortification art per player and column.
    pub fortifications: [[StructureArt; FORTIFICATION_COLUMNS]; 2],
    /// Barrier art per player.
    pub barriers: [StructureArt; 2],
}

/// Validated asset tables.
#[derive(Clone, Debug)]
pub struct AssetBank {
    parts: AssetParts,
}

impl AssetBank {
    /// Validates `parts` and wraps them.
    ///
    /// # Errors
    ///
    /// Returns an error if a table has the wrong size, the static patterns
    /// do not fit their region, a map references a pattern the bank does
    /// not load, or a structure body is not fully opaque.
    pub fn from_parts(parts: AssetParts) -> AssetResult<Self> {
        if parts.static_patterns.len() > STATIC_PATTERNS_CAPACITY {
            return Err(AssetError::StaticOverflow {
                count: parts.static_patterns.len(),
                capacity: STATIC_PATTERNS_CAPACITY,
            });
        }
        if parts.card_faces.len() != CARD_COUNT {
            return Err(AssetError::CardCount {
                found: parts.card_faces.len(),
                expected: CARD_COUNT,
            });
        }

        let loaded = parts.static_patterns.len() as u16;
        let maps: [(&'static str, &[TileEntry], usize); 4] = [
            ("background", &parts.background, BACKGROUND_COLUMNS * BACKGROUND_ROWS),
            ("panel one", &parts.panels[0], PANEL_COLUMNS * PANEL_ROWS),
            ("panel two", &parts.panels[1], PANEL_COLUMNS * PANEL_ROWS),
            ("indicator", &parts.indicator, INDICATOR_TILES),
        ];
        for (map, entries, expected) in maps {
            if entries.len() != expected {
                return Err(AssetError::MapSize {
                    map,
                    found: entries.len(),
                    expected,
                });
            }
            for (index, entry) in entries.iter().enumerate() {
                let pattern = entry.pattern();
                let in_bank = (STATIC_PATTERNS_START..STATIC_PATTERNS_START + loaded).contains(&pattern);
                if pattern != 0 && !in_bank {
                    return Err(AssetError::PatternOutOfBank {
                        map,
                        index,
                        pattern,
                    });
                }
            }
        }

        for player in Player::ALL {
            let p = player.index();
            let fortifications = parts.fortifications[p]
                .iter()
                .enumerate()
                .map(|(column, art)| (StructureAsset::Fortification { player, column }, art));
            let barrier = std::iter::once((StructureAsset::Barrier(player), &parts.barriers[p]));
            for (asset, art) in fortifications.chain(barrier) {
                if !art.body.is_opaque() {
                    return Err(AssetError::TranslucentBody(asset));
                }
            }
        }

        Ok(Self { parts })
    }

    /// The built-in procedural art.
    ///
    /// # Errors
    ///
    /// Propagates validation errors; the built-in art is expected to pass.
    pub fn procedural() -> AssetResult<Self> {
        Self::from_parts(ProceduralArt::parts())
    }

    /// Patterns to load at [`STATIC_PATTERNS_START`].
    #[must_use]
    pub fn static_patterns(&self) -> &[Pattern] {
        &self.parts.static_patterns
    }
}

impl AssetProvider for AssetBank {
    fn patterns(&self, id: PatternAsset) -> &[Pattern] {
        match id {
            PatternAsset::CardFace(card) => &self.parts.card_faces[card.index()],
            PatternAsset::CardBack => &self.parts.card_back,
            PatternAsset::DiscardOverlay(group) => &self.parts.discard_overlays[group.band()],
            PatternAsset::Static => &self.parts.static_patterns,
        }
    }

    fn map(&self, id: MapAsset) -> &[TileEntry] {
        match id {
            MapAsset::Background => &self.parts.background,
            MapAsset::Panel(player) => &self.parts.panels[player.index()],
            MapAsset::Indicator => &self.parts.indicator,
        }
    }

    fn structure(&self, id: StructureAsset) -> &StructureArt {
        match id {
            StructureAsset::Fortification { player, column } => {
                &self.parts.fortifications[player.index()][column]
            }
            StructureAsset::Barrier(player) => &self.parts.barriers[player.index()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ants_shared::Card;

    #[test]
    fn test_procedural_bank_validates() {
        let bank = AssetBank::procedural().unwrap();
        assert_eq!(bank.patterns(PatternAsset::CardFace(Card::Curse)).len(), CARD_FRAGMENTS);
        assert_eq!(bank.map(MapAsset::Panel(Player::Two)).len(), PANEL_COLUMNS * PANEL_ROWS);
    }

    #[test]
    fn test_static_overflow_rejected() {
        let mut parts = ProceduralArt::parts();
        parts.static_patterns = vec![Pattern::BLANK; STATIC_PATTERNS_CAPACITY + 1];
        assert!(matches!(
            AssetBank::from_parts(parts),
            Err(AssetError::StaticOverflow { .. })
        ));
    }

    #[test]
    fn test_missing_card_rejected() {
        let mut parts = ProceduralArt::parts();
        parts.card_faces.pop();
        assert_eq!(
            AssetBank::from_parts(parts).unwrap_err(),
            AssetError::CardCount {
                found: CARD_COUNT - 1,
                expected: CARD_COUNT
            }
        );
    }

    #[test]
    fn test_map_entry_outside_bank_rejected() {
        let mut parts = ProceduralArt::parts();
        parts.background[5] = TileEntry::new(STATIC_PATTERNS_START - 1);
        assert_eq!(
            AssetBank::from_parts(parts).unwrap_err(),
            AssetError::PatternOutOfBank {
                map: "background",
                index: 5,
                pattern: STATIC_PATTERNS_START - 1
            }
        );
    }

    #[test]
    fn test_wrong_map_size_rejected() {
        let mut parts = ProceduralArt::parts();
        parts.indicator.push(TileEntry::BLANK);
        assert!(matches!(
            AssetBank::from_parts(parts),
            Err(AssetError::MapSize { map: "indicator", .. })
        ));
    }

    #[test]
    fn test_translucent_structure_body_rejected() {
        let mut parts = ProceduralArt::parts();
        parts.fortifications[1][4].body.set_pixel(3, 6, 0);
        assert_eq!(
            AssetBank::from_parts(parts).unwrap_err(),
            AssetError::TranslucentBody(StructureAsset::Fortification {
                player: Player::Two,
                column: 4
            })
        );

        let mut parts = ProceduralArt::parts();
        parts.barriers[0].body = Pattern::BLANK;
        assert_eq!(
            AssetBank::from_parts(parts).unwrap_err(),
            AssetError::TranslucentBody(StructureAsset::Barrier(Player::One))
        );
    }

    #[test]
    fn test_translucent_footing_accepted() {
        let mut parts = ProceduralArt::parts();
        parts.barriers[1].footing = Pattern::BLANK;
        assert!(AssetBank::from_parts(parts).is_ok());
    }

    #[test]
    fn test_background_lookup_outside_playfield_is_blank() {
        let bank = AssetBank::procedural().unwrap();
        assert_eq!(bank.background_entry(0, 0), TileEntry::BLANK);
        assert_eq!(bank.background_entry(10, 20), TileEntry::BLANK);
        assert_ne!(bank.background_entry(10, 10), TileEntry::BLANK);
    }
}
