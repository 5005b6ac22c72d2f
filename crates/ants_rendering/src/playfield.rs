//! Static playfield: art loaded once, background drawn once per game.

use ants_shared::constants::{
    BACKGROUND_COLUMNS, BACKGROUND_X_TILE, BACKGROUND_Y_TILE, STATIC_PATTERNS_START,
};

use crate::assets::{AssetBank, AssetProvider, MapAsset};
use crate::vdp::Vdp;

/// Uploads the static patterns with the display blanked.
///
/// The load is far larger than one vertical blank, so it is only done while
/// nothing is shown. The display state is restored afterwards.
pub fn load_static_assets(vdp: &mut Vdp, assets: &AssetBank) {
    let was_enabled = vdp.display_enabled();
    vdp.set_display(false);
    vdp.upload_patterns(STATIC_PATTERNS_START, assets.static_patterns());
    vdp.wait_for_vblank();
    vdp.set_display(was_enabled);
    tracing::debug!(patterns = assets.static_patterns().len(), "static art loaded");
}

/// Writes the playfield map into the tile map.
pub fn draw_background<A: AssetProvider + ?Sized>(vdp: &mut Vdp, assets: &A) {
    vdp.set_tile_area(
        BACKGROUND_X_TILE,
        BACKGROUND_Y_TILE,
        BACKGROUND_COLUMNS,
        assets.map(MapAsset::Background),
    );
}
