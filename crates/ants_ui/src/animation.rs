//! Card slides.
//!
//! A sliding card is 24 sprites (4×6) showing patterns from the sprite
//! range. Each frame moves it by a constant step in fixed point, so a slide
//! lands exactly on its target after `1 << shift` frames:
//!
//! ```text
//!   x₀ = start << shift
//!   xₙ = x₀ + n · (end - start)        screen x = xₙ >> shift
//! ```
//!
//! The sprite table is re-submitted once per frame at the vertical blank.

use ants_rendering::{AssetProvider, CardBufferCache, CardPatterns, SpriteEntry, Vdp};
use ants_shared::constants::{CARD_COLUMNS, CARD_FRAGMENTS};
use ants_shared::{CardFace, SlideSpeed};

use crate::layout::{Point, TILE_PIXELS};

/// Points sprites 0..24 at a card's patterns with the card's top-left at
/// `at`. Sprites beyond the card are left as they are.
#[allow(clippy::cast_possible_truncation)]
pub fn place_card_sprites(vdp: &mut Vdp, patterns: CardPatterns, at: Point) {
    for fragment in 0..CARD_FRAGMENTS {
        let column = (fragment % CARD_COLUMNS) as u16;
        let row = (fragment / CARD_COLUMNS) as u16;
        vdp.set_sprite(
            fragment,
            SpriteEntry {
                x: (at.x + column * TILE_PIXELS) as u8,
                y: (at.y + row * TILE_PIXELS) as u8,
                pattern: patterns.pattern(fragment) as u8,
            },
        );
    }
}

#[derive(Debug, Clone, Copy)]
struct Slide {
    face: CardFace,
    patterns: CardPatterns,
    position: Point,
}

/// Moves one card at a time across the screen as sprites.
#[derive(Debug, Clone, Default)]
pub struct SlideAnimator {
    speed: SlideSpeed,
    active: Option<Slide>,
}

impl SlideAnimator {
    /// Creates an idle animator.
    #[must_use]
    pub fn new(speed: SlideSpeed) -> Self {
        Self {
            speed,
            active: None,
        }
    }

    /// Frames per slide.
    #[inline]
    #[must_use]
    pub fn speed(&self) -> SlideSpeed {
        self.speed
    }

    /// Returns true between [`begin`](Self::begin) and [`finish`](Self::finish).
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Where the sliding card currently is.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.active.map(|slide| slide.position)
    }

    /// Loads `face` into the sprite range and shows it at `start`.
    ///
    /// Costs one vertical blank.
    pub fn begin<A: AssetProvider + ?Sized>(
        &mut self,
        vdp: &mut Vdp,
        cache: &mut CardBufferCache,
        assets: &A,
        start: Point,
        face: CardFace,
    ) {
        let patterns = cache.ensure_sprite(vdp, assets, face);
        vdp.clear_sprites();
        place_card_sprites(vdp, patterns, start);
        vdp.wait_for_vblank();

        self.active = Some(Slide {
            face,
            patterns,
            position: start,
        });
    }

    /// Slides the card to `target`, one step per frame.
    ///
    /// Returns the number of frames taken.
    ///
    /// # Panics
    ///
    /// Panics if no slide has begun.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn advance(&mut self, vdp: &mut Vdp, target: Point) -> u32 {
        let Some(slide) = self.active.as_mut() else {
            panic!("slide advanced before it began");
        };

        let shift = self.speed.shift();
        let start = slide.position;
        let step_x = i32::from(target.x) - i32::from(start.x);
        let step_y = i32::from(target.y) - i32::from(start.y);
        let mut x = i32::from(start.x) << shift;
        let mut y = i32::from(start.y) << shift;

        let frames = self.speed.frames();
        for _ in 0..frames {
            x += step_x;
            y += step_y;
            slide.position = Point::new((x >> shift) as u16, (y >> shift) as u16);
            place_card_sprites(vdp, slide.patterns, slide.position);
            vdp.wait_for_vblank();
        }

        tracing::debug!(face = ?slide.face, from = ?start, to = ?target, frames, "card slid");
        frames
    }

    /// Hides the card. The sprites disappear at the next vertical blank,
    /// together with whatever the caller draws in their place.
    pub fn finish(&mut self, vdp: &mut Vdp) {
        vdp.clear_sprites();
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::CardPosition;
    use ants_rendering::AssetBank;
    use ants_shared::constants::{PATTERN_CARD_SPRITE, SPRITE_CAPACITY};
    use ants_shared::Card;

    fn setup() -> (Vdp, AssetBank, CardBufferCache) {
        let mut vdp = Vdp::new();
        vdp.set_display(true);
        (vdp, AssetBank::procedural().unwrap(), CardBufferCache::new())
    }

    fn sprite_origin(vdp: &Vdp) -> Point {
        let front = vdp.reader().read().sprite(0);
        Point::new(u16::from(front.x), u16::from(front.y))
    }

    #[test]
    fn test_begin_shows_card_at_start() {
        let (mut vdp, assets, mut cache) = setup();
        let mut slide = SlideAnimator::new(SlideSpeed::Fast);
        let start = CardPosition::Draw.point();

        slide.begin(&mut vdp, &mut cache, &assets, start, CardFace::Card(Card::Fort));

        let front = vdp.reader();
        let front = front.read();
        assert_eq!(front.visible_sprites(), CARD_FRAGMENTS);
        for fragment in 0..CARD_FRAGMENTS {
            let sprite = front.sprite(fragment);
            assert_eq!(u16::from(sprite.pattern), PATTERN_CARD_SPRITE + fragment as u16);
        }
        let last = front.sprite(CARD_FRAGMENTS - 1);
        assert_eq!((last.x, last.y), (96 + 24, 40));
        assert!(slide.is_active());
    }

    #[test]
    fn test_fast_slide_lands_on_target() {
        let (mut vdp, assets, mut cache) = setup();
        let mut slide = SlideAnimator::new(SlideSpeed::Fast);
        let target = CardPosition::Hand(7).point();

        slide.begin(&mut vdp, &mut cache, &assets, CardPosition::Draw.point(), CardFace::Back);
        let before = vdp.stats().frames;
        assert_eq!(slide.advance(&mut vdp, target), 16);

        assert_eq!(vdp.stats().frames - before, 16);
        assert_eq!(sprite_origin(&vdp), target);
        assert_eq!(slide.position(), Some(target));
    }

    #[test]
    fn test_slow_slide_moves_monotonically() {
        let (mut vdp, assets, mut cache) = setup();
        let mut slide = SlideAnimator::new(SlideSpeed::Slow);
        let start = CardPosition::Hand(7).point();
        let target = CardPosition::Discard.point();

        slide.begin(&mut vdp, &mut cache, &assets, start, CardFace::Card(Card::Curse));
        assert_eq!(slide.advance(&mut vdp, target), 32);
        assert_eq!(sprite_origin(&vdp), target);
        assert_eq!(vdp.stats().sprite_commits, 1 + 32);
    }

    #[test]
    fn test_finish_hides_sprites_at_next_vblank() {
        let (mut vdp, assets, mut cache) = setup();
        let mut slide = SlideAnimator::new(SlideSpeed::Fast);

        slide.begin(&mut vdp, &mut cache, &assets, Point::new(0, 0), CardFace::Back);
        slide.finish(&mut vdp);
        assert!(!slide.is_active());
        assert_eq!(vdp.reader().read().visible_sprites(), CARD_FRAGMENTS);

        vdp.wait_for_vblank();
        let front = vdp.reader();
        let front = front.read();
        assert_eq!(front.visible_sprites(), 0);
        assert!((0..SPRITE_CAPACITY).all(|i| !front.sprite(i).is_visible()));
    }

    #[test]
    fn test_same_face_uploads_once() {
        let (mut vdp, assets, mut cache) = setup();
        let mut slide = SlideAnimator::new(SlideSpeed::Fast);
        let face = CardFace::Card(Card::Knight);

        slide.begin(&mut vdp, &mut cache, &assets, Point::new(0, 0), face);
        slide.finish(&mut vdp);
        let uploads = vdp.stats().pattern_uploads;
        slide.begin(&mut vdp, &mut cache, &assets, Point::new(0, 0), face);

        assert_eq!(vdp.stats().pattern_uploads, uploads);
    }

    #[test]
    fn test_slides_fit_the_vblank() {
        let (mut vdp, assets, mut cache) = setup();
        let mut slide = SlideAnimator::new(SlideSpeed::Fast);
        for (i, card) in Card::ALL.iter().take(8).enumerate() {
            slide.begin(
                &mut vdp,
                &mut cache,
                &assets,
                CardPosition::Draw.point(),
                CardFace::Card(*card),
            );
            slide.advance(&mut vdp, CardPosition::Hand(i).point());
            slide.finish(&mut vdp);
        }
        assert_eq!(vdp.stats().overruns, 0);
    }

    #[test]
    #[should_panic(expected = "before it began")]
    fn test_advance_requires_begin() {
        let (mut vdp, _, _) = setup();
        SlideAnimator::new(SlideSpeed::Fast).advance(&mut vdp, Point::new(8, 8));
    }
}
