//! Procedural Art - "Data as Art"
//!
//! Every table the game needs, built from loops and a fixed hash. The
//! output is identical on every run, so tests can assert on exact pixels.

use ants_shared::constants::{
    BACKGROUND_COLUMNS, BACKGROUND_ROWS, CARD_COLUMNS, CARD_FRAGMENTS, DIGIT_BOX_PANEL_INDEX,
    FORTIFICATION_COLUMNS, PANEL_COLUMNS, PANEL_ROWS, STATIC_PATTERNS_START,
};
use ants_shared::{Card, CardType, Pattern, TileEntry};

use super::{AssetParts, StructureArt, DISCARD_OVERLAY_FRAGMENTS};

/// Colour indices used by the built-in art.
pub mod colours {
    /// Window and gap pixels: shows whatever lies behind.
    pub const CLEAR: u8 = 0;
    /// Card borders, barrier tops, clouds.
    pub const WHITE: u8 = 1;
    /// Production counters.
    pub const YELLOW: u8 = 2;
    /// Grass.
    pub const GRASS: u8 = 3;
    /// Sky.
    pub const SKY: u8 = 4;
    /// Barrier footing.
    pub const EARTH: u8 = 5;
    /// Mortar lines.
    pub const MORTAR: u8 = 7;
    /// Panel background.
    pub const PANEL: u8 = 8;
    /// Hills.
    pub const HILL: u8 = 10;
    /// Digit box background.
    pub const DIGIT_BOX: u8 = 11;
    /// Card glyph ink.
    pub const INK: u8 = 15;
    /// Fortification wall per player.
    pub const WALL: [u8; 2] = [6, 9];
    /// Barrier body per player.
    pub const FENCE: [u8; 2] = [12, 13];
    /// Card fill per group.
    pub const CARD_FILL: [u8; 3] = [6, 10, 12];
    /// Discard overlay per group.
    pub const OVERLAY: [u8; 3] = [14, 14, 13];
}

// Static pattern slots, relative to STATIC_PATTERNS_START.
const SKY: u16 = 0;
const CLOUD: u16 = 1;
const HILL_TOP: u16 = 2;
const HILL: u16 = 3;
const GRASS: u16 = 4;
const PANEL_FRAME: u16 = 5;
const PANEL_FILL: u16 = 6;
const DIGIT_BOX: u16 = 7;
const ICON_BUILDING: u16 = 8;
const ICON_ARMY: u16 = 9;
const ICON_MAGIC: u16 = 10;
const INDICATOR_LEFT: u16 = 11;
const INDICATOR_RIGHT: u16 = 12;

/// Built-in art generator.
pub struct ProceduralArt;

impl ProceduralArt {
    /// Every table, ready for [`AssetBank::from_parts`](super::AssetBank::from_parts).
    #[must_use]
    pub fn parts() -> AssetParts {
        AssetParts {
            card_faces: Card::ALL.iter().map(|&c| Self::card_face(c)).collect(),
            card_back: Self::card_back(),
            discard_overlays: [
                Self::discard_overlay(CardType::Building),
                Self::discard_overlay(CardType::Army),
                Self::discard_overlay(CardType::Magic),
            ],
            static_patterns: Self::static_patterns(),
            background: Self::background_map(),
            panels: [Self::panel_map(), Self::panel_map()],
            indicator: vec![entry(INDICATOR_LEFT), entry(INDICATOR_RIGHT)],
            fortifications: [
                std::array::from_fn(|col| Self::fortification(0, col)),
                std::array::from_fn(|col| Self::fortification(1, col)),
            ],
            barriers: [Self::barrier(0), Self::barrier(1)],
        }
    }

    /// Face art: a white border around the group colour, with hashed ink in
    /// the picture area and the card id marked in fragment 5.
    #[must_use]
    pub fn card_face(card: Card) -> [Pattern; CARD_FRAGMENTS] {
        let fill = colours::CARD_FILL[card.card_type().band()];
        let mut face = [Pattern::solid(fill); CARD_FRAGMENTS];
        for (f, pattern) in face.iter_mut().enumerate() {
            draw_card_border(pattern, f);
            let row = f / CARD_COLUMNS;
            if (1..4).contains(&row) {
                for y in 0..8 {
                    let bits = hash((card.index() * CARD_FRAGMENTS + f) as u32 * 8 + y as u32) as u8;
                    pattern.stamp(y, bits & 0x7e, colours::INK);
                }
            }
        }
        face[5].stamp(0, card.index() as u8 + 1, colours::WHITE);
        face
    }

    /// Checkered card back.
    #[must_use]
    pub fn card_back() -> [Pattern; CARD_FRAGMENTS] {
        let mut back = [Pattern::solid(colours::WALL[1]); CARD_FRAGMENTS];
        for (f, pattern) in back.iter_mut().enumerate() {
            for y in 0..8 {
                let mask = if (y / 2) % 2 == 0 { 0xcc } else { 0x33 };
                pattern.stamp(y, mask, colours::WHITE);
            }
            draw_card_border(pattern, f);
        }
        back
    }

    /// Diagonal hatching in the group's overlay colour.
    #[must_use]
    pub fn discard_overlay(group: CardType) -> [Pattern; DISCARD_OVERLAY_FRAGMENTS] {
        let colour = colours::OVERLAY[group.band()];
        let mut overlay = [Pattern::solid(colour); DISCARD_OVERLAY_FRAGMENTS];
        for (f, pattern) in overlay.iter_mut().enumerate() {
            for y in 0..8 {
                pattern.stamp(y, 0x81u8.rotate_right((y + f) as u32), colours::MORTAR);
            }
            draw_card_border(pattern, f + 16);
        }
        overlay
    }

    /// Patterns loaded at the static region.
    #[must_use]
    pub fn static_patterns() -> Vec<Pattern> {
        let mut cloud = Pattern::solid(colours::SKY);
        for (y, mask) in [(2, 0x18), (3, 0x7e), (4, 0xff), (5, 0x7e)] {
            cloud.stamp(y, mask, colours::WHITE);
        }

        let mut hill_top = Pattern::solid(colours::SKY);
        for (y, mask) in [(3, 0x18), (4, 0x3c), (5, 0x7e), (6, 0xff), (7, 0xff)] {
            hill_top.stamp(y, mask, colours::HILL);
        }

        let mut grass = Pattern::solid(colours::SKY);
        for y in 5..8 {
            grass.stamp(y, 0xff, colours::GRASS);
        }
        grass.stamp(4, 0x24, colours::GRASS);

        let mut frame = Pattern::solid(colours::PANEL);
        frame.stamp(0, 0xff, colours::WHITE);
        frame.stamp(7, 0xff, colours::WHITE);

        let icon = |colour: u8| {
            let mut p = Pattern::solid(colours::PANEL);
            for y in 1..7 {
                p.stamp(y, 0x3c, colour);
            }
            p
        };

        let mut indicator_left = Pattern::BLANK;
        let mut indicator_right = Pattern::BLANK;
        for y in 0..4 {
            let mask = 0xffu8 >> (4 + y);
            indicator_left.stamp(y * 2, mask.reverse_bits(), colours::YELLOW);
            indicator_left.stamp(y * 2 + 1, mask.reverse_bits(), colours::YELLOW);
            indicator_right.stamp(y * 2, mask, colours::YELLOW);
            indicator_right.stamp(y * 2 + 1, mask, colours::YELLOW);
        }

        vec![
            Pattern::solid(colours::SKY),
            cloud,
            hill_top,
            Pattern::solid(colours::HILL),
            grass,
            frame,
            Pattern::solid(colours::PANEL),
            Pattern::solid(colours::DIGIT_BOX),
            icon(colours::CARD_FILL[0]),
            icon(colours::CARD_FILL[1]),
            icon(colours::CARD_FILL[2]),
            indicator_left,
            indicator_right,
        ]
    }

    /// Sky with clouds, rolling hills and a strip of grass at the bottom.
    #[must_use]
    pub fn background_map() -> Vec<TileEntry> {
        let mut map = Vec::with_capacity(BACKGROUND_COLUMNS * BACKGROUND_ROWS);
        for row in 0..BACKGROUND_ROWS {
            for col in 0..BACKGROUND_COLUMNS {
                let hill_height = 1 + hash(col as u32 / 3) as usize % 3;
                let slot = match row {
                    r if r == BACKGROUND_ROWS - 1 => GRASS,
                    r if r + hill_height == BACKGROUND_ROWS - 1 => HILL_TOP,
                    r if r + hill_height > BACKGROUND_ROWS - 1 => HILL,
                    r if (1..6).contains(&r) && (col + r * 5) % 11 == 0 => CLOUD,
                    _ => SKY,
                };
                map.push(entry(slot));
            }
        }
        map
    }

    /// Panel with a frame row at each end, icons and two-tile digit boxes.
    #[must_use]
    pub fn panel_map() -> Vec<TileEntry> {
        let mut map = vec![entry(PANEL_FILL); PANEL_COLUMNS * PANEL_ROWS];
        for col in 0..PANEL_COLUMNS {
            map[col] = entry(PANEL_FRAME);
            map[(PANEL_ROWS - 1) * PANEL_COLUMNS + col] = entry(PANEL_FRAME);
        }
        for (field, &index) in DIGIT_BOX_PANEL_INDEX.iter().enumerate() {
            map[index] = entry(DIGIT_BOX);
            map[index + 1] = entry(DIGIT_BOX);
            if field % 2 == 0 {
                let icon = match field / 2 {
                    0 => ICON_BUILDING,
                    1 => ICON_ARMY,
                    2 => ICON_MAGIC,
                    _ => ICON_BUILDING,
                };
                map[index - 1] = entry(icon);
            }
        }
        map
    }

    /// Fortification column: crenellated peak with a window, brick body.
    #[must_use]
    pub fn fortification(player: usize, column: usize) -> StructureArt {
        let wall = colours::WALL[player];
        let tooth = if column == 0 || column == FORTIFICATION_COLUMNS - 1 {
            0xe7
        } else {
            0xc3
        };

        let mut upper = Pattern::BLANK;
        for y in 3..7 {
            upper.stamp(y, tooth, wall);
        }
        upper.stamp(7, 0xff, wall);

        let mut lower = Pattern::solid(wall);
        for y in 2..6 {
            lower.stamp(y, 0x18, colours::CLEAR);
        }

        StructureArt {
            peak: [upper, lower],
            body: brick(wall, column),
            footing: Pattern::BLANK,
        }
    }

    /// Barrier: white cap, striped body, earth footing.
    #[must_use]
    pub fn barrier(player: usize) -> StructureArt {
        let fence = colours::FENCE[player];

        let mut cap = Pattern::BLANK;
        for y in 0..3 {
            cap.stamp(y, 0x7e, colours::WHITE);
        }
        for y in 3..8 {
            cap.stamp(y, 0xff, fence);
        }

        let mut body = Pattern::solid(fence);
        body.stamp(4, 0xff, colours::MORTAR);

        StructureArt {
            peak: [Pattern::BLANK, cap],
            body,
            footing: Pattern::solid(colours::EARTH),
        }
    }
}

fn entry(slot: u16) -> TileEntry {
    TileEntry::new(STATIC_PATTERNS_START + slot)
}

fn brick(wall: u8, column: usize) -> Pattern {
    let mut p = Pattern::solid(wall);
    p.stamp(3, 0xff, colours::MORTAR);
    p.stamp(7, 0xff, colours::MORTAR);
    let joint = 0x80u8 >> (column * 3 % 8);
    for y in 0..3 {
        p.stamp(y, joint, colours::MORTAR);
    }
    for y in 4..7 {
        p.stamp(y, joint.rotate_right(4), colours::MORTAR);
    }
    p
}

fn draw_card_border(pattern: &mut Pattern, fragment: usize) {
    let row = fragment / CARD_COLUMNS;
    let col = fragment % CARD_COLUMNS;
    let rows = CARD_FRAGMENTS / CARD_COLUMNS;
    if row == 0 {
        pattern.stamp(0, 0xff, colours::WHITE);
    }
    if row == rows - 1 {
        pattern.stamp(7, 0xff, colours::WHITE);
    }
    for y in 0..8 {
        if col == 0 {
            pattern.stamp(y, 0x80, colours::WHITE);
        }
        if col == CARD_COLUMNS - 1 {
            pattern.stamp(y, 0x01, colours::WHITE);
        }
    }
}

/// Integer hash (lowbias32).
fn hash(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x7feb_352d);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846c_a68b);
    x ^= x >> 16;
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_card_faces_are_distinct() {
        let faces: HashSet<_> = Card::ALL.iter().map(|&c| ProceduralArt::card_face(c)).collect();
        assert_eq!(faces.len(), Card::ALL.len());
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(
            ProceduralArt::card_face(Card::Dragon),
            ProceduralArt::card_face(Card::Dragon)
        );
        assert_eq!(ProceduralArt::background_map(), ProceduralArt::background_map());
    }

    #[test]
    fn test_structure_bodies_are_opaque() {
        for player in 0..2 {
            for col in 0..FORTIFICATION_COLUMNS {
                assert!(ProceduralArt::fortification(player, col).body.is_opaque());
            }
            assert!(ProceduralArt::barrier(player).body.is_opaque());
        }
    }

    #[test]
    fn test_bottom_background_row_is_grass() {
        let map = ProceduralArt::background_map();
        let last = &map[(BACKGROUND_ROWS - 1) * BACKGROUND_COLUMNS..];
        assert!(last.iter().all(|e| *e == entry(GRASS)));
    }

    #[test]
    fn test_digit_boxes_use_box_background() {
        let map = ProceduralArt::panel_map();
        for index in DIGIT_BOX_PANEL_INDEX {
            assert_eq!(map[index], entry(DIGIT_BOX));
            assert_eq!(map[index + 1], entry(DIGIT_BOX));
        }
    }
}
