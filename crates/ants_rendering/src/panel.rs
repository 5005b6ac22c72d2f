//! # Side Panels
//!
//! Each player's panel shows eight counters (0-999) in two-tile digit boxes.
//! A counter is redrawn only when its value differs from the cached one.
//!
//! ## Digit Packing
//!
//! Glyphs are 3 pixels wide in the high three bits of a nibble. Across the
//! 16 pixels of a box:
//!
//! ```text
//!   1 digit:   left = d0
//!   2 digits:  left = d1 << 2 | d0 >> 2     right = d0 << 6
//!   3 digits:  left = d2 << 4 | d1          right = d0 << 4
//! ```

use ants_shared::constants::{
    DIGIT_BOX_PANEL_INDEX, DIGIT_BOX_X_TILE, DIGIT_BOX_Y_TILE, INDICATOR_Y_TILE, PANEL_COLUMNS,
    PANEL_DIGIT_PATTERNS_PER_PLAYER, PANEL_ROWS, PANEL_X_TILE, PANEL_Y_TILE, PATTERN_PANEL_DIGITS,
};
use ants_shared::{Field, Pattern, Player, TileEntry, FIELD_COUNT};

use crate::assets::{AssetProvider, MapAsset, INDICATOR_TILES};
use crate::vdp::Vdp;

/// Largest value a counter shows.
pub const MAX_PANEL_VALUE: u16 = 999;

/// Scanlines per glyph.
pub const FONT_LINES: usize = 5;

/// Digit glyphs, 3 pixels wide in bits 3-1.
pub const DIGIT_FONT: [[u8; FONT_LINES]; 10] = [
    [0xe, 0xa, 0xa, 0xa, 0xe],
    [0x4, 0xc, 0x4, 0x4, 0xe],
    [0xe, 0x2, 0xe, 0x8, 0xe],
    [0xe, 0x2, 0xe, 0x2, 0xe],
    [0xa, 0xa, 0xe, 0x2, 0x2],
    [0xe, 0x8, 0xe, 0x2, 0xe],
    [0xe, 0x8, 0xe, 0xa, 0xe],
    [0xe, 0x2, 0x2, 0x2, 0x2],
    [0xe, 0xa, 0xe, 0xa, 0xe],
    [0xe, 0xa, 0xe, 0x2, 0xe],
];

/// Colour of ordinary counters.
pub const COLOUR_WHITE: u8 = 1;

/// Colour of production counters.
pub const COLOUR_YELLOW: u8 = 2;

/// Every counter for both players.
pub type PanelValues = [[u16; FIELD_COUNT]; 2];

/// Colour class of a counter.
#[inline]
#[must_use]
pub const fn digit_colour(field: Field) -> u8 {
    if field.is_production() {
        COLOUR_YELLOW
    } else {
        COLOUR_WHITE
    }
}

/// First glyph scanline within the box.
#[inline]
#[must_use]
pub const fn digit_y_offset(field: Field) -> usize {
    if field.index() % 2 == 1 {
        2
    } else {
        1
    }
}

/// First of the two patterns reserved for a counter.
#[inline]
#[must_use]
pub const fn digit_slot(player: Player, field: Field) -> u16 {
    PATTERN_PANEL_DIGITS
        + player.index() as u16 * PANEL_DIGIT_PATTERNS_PER_PLAYER
        + field.index() as u16 * 2
}

/// Ink masks `(left, right)` for each glyph scanline of `value`.
#[must_use]
pub fn pack_digits(value: u16) -> [(u8, u8); FONT_LINES] {
    let value = value.min(MAX_PANEL_VALUE);
    let d0 = (value % 10) as usize;
    let d1 = (value % 100 / 10) as usize;
    let d2 = (value / 100) as usize;

    std::array::from_fn(|line| {
        let glyph = |d: usize| DIGIT_FONT[d][line];
        if value >= 100 {
            ((glyph(d2) << 4) | glyph(d1), glyph(d0) << 4)
        } else if value >= 10 {
            ((glyph(d1) << 2) | (glyph(d0) >> 2), glyph(d0) << 6)
        } else {
            (glyph(d0), 0)
        }
    })
}

/// Builds the two box patterns for a counter over its background art.
#[must_use]
pub fn compose_digits<A: AssetProvider + ?Sized>(
    assets: &A,
    player: Player,
    field: Field,
    value: u16,
) -> [Pattern; 2] {
    let panel = assets.map(MapAsset::Panel(player));
    let index = DIGIT_BOX_PANEL_INDEX[field.index()];
    let mut out = [
        assets.static_pattern(panel[index].pattern()),
        assets.static_pattern(panel[index + 1].pattern()),
    ];

    let colour = digit_colour(field);
    let y0 = digit_y_offset(field);
    for (line, (left, right)) in pack_digits(value).into_iter().enumerate() {
        out[0].stamp(y0 + line, left, colour);
        out[1].stamp(y0 + line, right, colour);
    }
    out
}

/// Change-detected counter renderer.
#[derive(Debug, Default)]
pub struct PanelRenderer {
    cache: [[Option<u16>; FIELD_COUNT]; 2],
    active: Option<Player>,
}

impl PanelRenderer {
    /// Creates a renderer with nothing drawn.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws both panel maps, pointing each digit box at its reserved
    /// patterns. Every counter is redrawn on the next update.
    pub fn draw_panels<A: AssetProvider + ?Sized>(&mut self, vdp: &mut Vdp, assets: &A) {
        for player in Player::ALL {
            let mut map = [TileEntry::BLANK; PANEL_COLUMNS * PANEL_ROWS];
            map.copy_from_slice(assets.map(MapAsset::Panel(player)));
            for field in Field::ALL {
                let index = DIGIT_BOX_PANEL_INDEX[field.index()];
                let slot = digit_slot(player, field);
                map[index] = TileEntry::new(slot);
                map[index + 1] = TileEntry::new(slot + 1);
            }
            vdp.set_tile_area(PANEL_X_TILE[player.index()], PANEL_Y_TILE, PANEL_COLUMNS, &map);
        }
        self.cache = [[None; FIELD_COUNT]; 2];
        self.active = None;
    }

    /// Redraws one counter if its value changed. Returns true if drawn.
    pub fn update<A: AssetProvider + ?Sized>(
        &mut self,
        vdp: &mut Vdp,
        assets: &A,
        player: Player,
        field: Field,
        value: u16,
    ) -> bool {
        let value = value.min(MAX_PANEL_VALUE);
        let cached = &mut self.cache[player.index()][field.index()];
        if *cached == Some(value) {
            return false;
        }
        let patterns = compose_digits(assets, player, field, value);
        vdp.upload_patterns(digit_slot(player, field), &patterns);
        *cached = Some(value);
        true
    }

    /// Redraws every changed counter, then refreshes the whole cache from
    /// `values`. Returns how many counters were drawn.
    pub fn update_all<A: AssetProvider + ?Sized>(
        &mut self,
        vdp: &mut Vdp,
        assets: &A,
        values: &PanelValues,
    ) -> usize {
        let mut drawn = 0;
        for player in Player::ALL {
            for field in Field::ALL {
                if self.update(vdp, assets, player, field, values[player.index()][field.index()]) {
                    drawn += 1;
                }
            }
        }
        for (cache, row) in self.cache.iter_mut().zip(values) {
            for (slot, &value) in cache.iter_mut().zip(row) {
                *slot = Some(value.min(MAX_PANEL_VALUE));
            }
        }
        if drawn > 0 {
            tracing::debug!(drawn, "panel counters updated");
        }
        drawn
    }

    /// Moves the indicator above the active player's panel.
    pub fn set_active_player<A: AssetProvider + ?Sized>(
        &mut self,
        vdp: &mut Vdp,
        assets: &A,
        player: Player,
    ) {
        if self.active == Some(player) {
            return;
        }
        let indicator = assets.map(MapAsset::Indicator);
        for p in Player::ALL {
            let x = PANEL_X_TILE[p.index()] + 1;
            for i in 0..INDICATOR_TILES {
                let entry = if p == player {
                    indicator[i]
                } else {
                    TileEntry::BLANK
                };
                vdp.set_tile(x + i, INDICATOR_Y_TILE, entry);
            }
        }
        self.active = Some(player);
    }

    /// Value on screen for a counter.
    #[must_use]
    pub fn cached(&self, player: Player, field: Field) -> Option<u16> {
        self.cache[player.index()][field.index()]
    }

    /// Screen position of a counter's digit box.
    #[must_use]
    pub fn box_position(player: Player, field: Field) -> (usize, usize) {
        (DIGIT_BOX_X_TILE[player.index()], DIGIT_BOX_Y_TILE[field.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetBank;

    /// Reads a value back from composed box patterns, trying every layout.
    fn decode(patterns: &[Pattern; 2], field: Field) -> Vec<u16> {
        let colour = digit_colour(field);
        let y0 = digit_y_offset(field);
        let words: Vec<u16> = (0..FONT_LINES)
            .map(|line| {
                (0..16).fold(0u16, |w, x| {
                    let p = &patterns[x / 8];
                    let bit = u16::from(p.pixel(x % 8, y0 + line) == colour);
                    w | (bit << (15 - x))
                })
            })
            .collect();

        let layouts: [&[u32]; 3] = [&[8], &[10, 6], &[12, 8, 4]];
        let mut found = Vec::new();
        'layout: for shifts in layouts {
            let union: u16 = shifts.iter().map(|s| 0xfu16 << s).fold(0, |a, b| a | b);
            if words.iter().any(|w| w & !union != 0) {
                continue;
            }
            let mut value = 0u16;
            for &s in shifts {
                let glyph: Vec<u8> = words.iter().map(|w| ((w >> s) & 0xf) as u8).collect();
                let Some(d) = DIGIT_FONT.iter().position(|g| g[..] == glyph[..]) else {
                    continue 'layout;
                };
                value = value * 10 + d as u16;
            }
            found.push(value);
        }
        found
    }

    #[test]
    fn test_every_value_decodes_back() {
        let assets = AssetBank::procedural().unwrap();
        for field in [Field::Bricks, Field::Magi] {
            for v in 0..=MAX_PANEL_VALUE {
                let patterns = compose_digits(&assets, Player::One, field, v);
                assert_eq!(decode(&patterns, field), vec![v], "value {v}");
            }
        }
    }

    #[test]
    fn test_packing_boundaries() {
        assert_eq!(pack_digits(9)[0], (DIGIT_FONT[9][0], 0));
        assert_eq!(pack_digits(10)[0], ((DIGIT_FONT[1][0] << 2) | (DIGIT_FONT[0][0] >> 2), DIGIT_FONT[0][0] << 6));
        assert_eq!(pack_digits(100)[4], ((DIGIT_FONT[1][4] << 4) | DIGIT_FONT[0][4], DIGIT_FONT[0][4] << 4));
        assert_eq!(pack_digits(5000), pack_digits(999));
    }

    #[test]
    fn test_colour_classes() {
        assert_eq!(digit_colour(Field::Builders), COLOUR_YELLOW);
        assert_eq!(digit_colour(Field::Soldiers), COLOUR_YELLOW);
        assert_eq!(digit_colour(Field::Castle), COLOUR_WHITE);
        assert_eq!(digit_y_offset(Field::Bricks), 2);
        assert_eq!(digit_y_offset(Field::Builders), 1);
    }

    #[test]
    fn test_digit_slots() {
        assert_eq!(digit_slot(Player::One, Field::Builders), PATTERN_PANEL_DIGITS);
        assert_eq!(digit_slot(Player::Two, Field::Fence), PATTERN_PANEL_DIGITS + 16 + 14);
    }

    #[test]
    fn test_unchanged_value_writes_nothing() {
        let assets = AssetBank::procedural().unwrap();
        let mut vdp = Vdp::new();
        let mut panel = PanelRenderer::new();
        assert!(panel.update(&mut vdp, &assets, Player::Two, Field::Castle, 30));
        let uploads = vdp.stats().pattern_uploads;
        assert!(!panel.update(&mut vdp, &assets, Player::Two, Field::Castle, 30));
        assert_eq!(vdp.stats().pattern_uploads, uploads);
        assert_eq!(panel.cached(Player::Two, Field::Castle), Some(30));
    }

    #[test]
    fn test_update_all_draws_changes_only() {
        let assets = AssetBank::procedural().unwrap();
        let mut vdp = Vdp::new();
        let mut panel = PanelRenderer::new();
        let mut values: PanelValues = [[2, 5, 2, 5, 2, 5, 30, 10]; 2];
        assert_eq!(panel.update_all(&mut vdp, &assets, &values), 16);
        values[1][Field::Fence.index()] = 1200;
        assert_eq!(panel.update_all(&mut vdp, &assets, &values), 1);
        assert_eq!(panel.cached(Player::Two, Field::Fence), Some(999));
        assert_eq!(panel.update_all(&mut vdp, &assets, &values), 0);
    }

    #[test]
    fn test_draw_panels_points_boxes_at_slots() {
        let assets = AssetBank::procedural().unwrap();
        let mut vdp = Vdp::new();
        let mut panel = PanelRenderer::new();
        panel.draw_panels(&mut vdp, &assets);
        let (x, y) = PanelRenderer::box_position(Player::Two, Field::Crystals);
        let slot = digit_slot(Player::Two, Field::Crystals);
        assert_eq!(vdp.back().tile(x, y).pattern(), slot);
        assert_eq!(vdp.back().tile(x + 1, y).pattern(), slot + 1);
        assert_eq!(vdp.back().tile(28, 3), assets.map(MapAsset::Panel(Player::Two))[0]);
    }

    #[test]
    fn test_indicator_follows_active_player() {
        let assets = AssetBank::procedural().unwrap();
        let mut vdp = Vdp::new();
        let mut panel = PanelRenderer::new();
        panel.set_active_player(&mut vdp, &assets, Player::One);
        let indicator = assets.map(MapAsset::Indicator);
        assert_eq!(vdp.back().tile(1, INDICATOR_Y_TILE), indicator[0]);
        assert_eq!(vdp.back().tile(29, INDICATOR_Y_TILE), TileEntry::BLANK);

        panel.set_active_player(&mut vdp, &assets, Player::Two);
        assert_eq!(vdp.back().tile(1, INDICATOR_Y_TILE), TileEntry::BLANK);
        assert_eq!(vdp.back().tile(30, INDICATOR_Y_TILE), indicator[1]);
    }
}
