//! Integration tests for a complete table screen.
//!
//! Builds the screen the way a game does: static art with the display off,
//! then panels, cards and structures one vertical blank at a time.

use ants_rendering::{
    draw_background, load_static_assets, AssetBank, CardBufferCache, PanelRenderer,
    StructureKind, StructureRenderer, Vdp, DISCARD_SLOT,
};
use ants_shared::constants::{
    DISCARD_X_TILE, DISCARD_Y_TILE, HAND_SIZE, HAND_Y_TILE, PANEL_X_TILE,
    STRUCTURE_ROWS, STRUCTURE_TOP_ROW,
};
use ants_shared::{Card, CardFace, Player, TileEntry};

fn boot() -> (Vdp, AssetBank, PanelRenderer) {
    let assets = AssetBank::procedural().unwrap();
    let mut vdp = Vdp::new();
    load_static_assets(&mut vdp, &assets);
    draw_background(&mut vdp, &assets);
    let mut panel = PanelRenderer::new();
    panel.draw_panels(&mut vdp, &assets);
    vdp.wait_for_vblank();
    vdp.set_display(true);
    (vdp, assets, panel)
}

#[test]
fn test_full_table_fits_every_vblank() {
    let (mut vdp, assets, mut panel) = boot();
    let mut cards = CardBufferCache::new();
    let mut fortifications = StructureRenderer::new(StructureKind::Fortification);
    let mut barriers = StructureRenderer::new(StructureKind::Barrier);

    panel.update_all(&mut vdp, &assets, &[[2, 5, 2, 5, 2, 5, 30, 10]; 2]);
    panel.set_active_player(&mut vdp, &assets, Player::One);
    vdp.wait_for_vblank();

    for slot in 0..HAND_SIZE {
        let face = CardFace::Card(Card::ALL[slot * 3]);
        cards.draw(&mut vdp, &assets, slot, face, slot * 4, HAND_Y_TILE);
        vdp.wait_for_vblank();
    }
    cards.draw(
        &mut vdp,
        &assets,
        DISCARD_SLOT,
        CardFace::Discarded(Card::Curse),
        DISCARD_X_TILE,
        DISCARD_Y_TILE,
    );
    vdp.wait_for_vblank();

    assert_eq!(fortifications.render_all(&mut vdp, &assets, [100, 30]), 2);
    assert_eq!(barriers.render_all(&mut vdp, &assets, [10, 100]), 2);

    let stats = vdp.stats();
    assert_eq!(stats.overruns, 0, "{stats}");
    assert!(stats.within_budget());
}

#[test]
fn test_presented_screen_matches_writes() {
    let (mut vdp, assets, mut panel) = boot();
    let mut cards = CardBufferCache::new();
    let reader = vdp.reader();

    let patterns = cards.draw(&mut vdp, &assets, 3, CardFace::Card(Card::Tower), 12, HAND_Y_TILE);
    panel.set_active_player(&mut vdp, &assets, Player::Two);
    assert_ne!(reader.read().tile(12, HAND_Y_TILE), patterns.entry(0));

    vdp.wait_for_vblank();
    let front = reader.read();
    assert_eq!(front.tile(12, HAND_Y_TILE), patterns.entry(0));
    assert_eq!(front.tile(15, HAND_Y_TILE + 5), patterns.entry(23));
    assert_eq!(front.tile(PANEL_X_TILE[0] + 1, 2), TileEntry::BLANK);
    assert_ne!(front.tile(PANEL_X_TILE[1] + 1, 2), TileEntry::BLANK);
}

#[test]
fn test_structure_only_touches_its_columns() {
    let (mut vdp, assets, _) = boot();
    let before: Vec<TileEntry> = (0..STRUCTURE_ROWS)
        .map(|row| vdp.back().tile(5, STRUCTURE_TOP_ROW + row))
        .collect();

    let mut fortifications = StructureRenderer::new(StructureKind::Fortification);
    fortifications.render(&mut vdp, &assets, Player::One, 100);

    let after: Vec<TileEntry> = (0..STRUCTURE_ROWS)
        .map(|row| vdp.back().tile(5, STRUCTURE_TOP_ROW + row))
        .collect();
    assert_eq!(before, after);
    assert_ne!(
        vdp.back().tile(6, STRUCTURE_TOP_ROW + STRUCTURE_ROWS - 1),
        TileEntry::BLANK
    );
}

#[test]
fn test_replaying_a_hand_reuses_buffers() {
    let (mut vdp, assets, _) = boot();
    let mut cards = CardBufferCache::new();

    for _ in 0..3 {
        for slot in 0..HAND_SIZE {
            cards.draw(&mut vdp, &assets, slot, CardFace::Card(Card::ALL[slot]), slot * 4, HAND_Y_TILE);
        }
        vdp.wait_for_vblank();
    }

    let stats = cards.stats();
    assert_eq!(stats.uploads, HAND_SIZE as u64);
    assert_eq!(stats.hits, 2 * HAND_SIZE as u64);
}
