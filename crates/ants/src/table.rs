//! # The Table
//!
//! Owns the screen and the game and runs them in lock step. Every rules
//! step is followed by the drawing that shows it:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          ONE TURN                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │  set_player ──▶ produce ──▶ panels ──▶ delay                 │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  choose move (computer or pad) ──▶ apply ──▶ slide to discard│
//! │       │                                                      │
//! │       ▼                                                      │
//! │  structures + panels ──▶ delay ──▶ draw card ──▶ delay       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reset requests are checked between phases and between input frames,
//! never inside a render step.

use ants_core::ResetLatch;
use ants_rendering::{
    draw_background, load_static_assets, AssetBank, CardBufferCache, PanelRenderer,
    StructureKind, StructureRenderer, Vdp, VramStats,
};
use ants_rules::{
    ai, Dealer, GameConfig, GameResult, GameState, Move, MoveRecord, Seat, Settings,
    SettingsStore,
};
use ants_shared::constants::{HAND_SIZE, HAND_Y_SPRITE};
use ants_shared::{CardFace, Player};
use ants_ui::{
    place_card_sprites, CardPosition, HandAction, HandCursor, InputState, PadSource, Point,
    ScriptedPads, SlideAnimator,
};

use crate::error::{TableError, TableResult};
use crate::events::{EventBus, EventReceiver, EventSender, TableEvent};

/// Pixels the selected card is lifted out of the hand.
pub const CURSOR_LIFT: u16 = 8;

/// What a call to [`Table::take_turn`] ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game goes on.
    Continue,
    /// The game is over.
    Finished(GameResult),
    /// A reset was requested. The game is abandoned.
    Reset,
}

/// Screen, game and players.
pub struct Table {
    vdp: Vdp,
    assets: AssetBank,
    cards: CardBufferCache,
    panel: PanelRenderer,
    castles: StructureRenderer,
    fences: StructureRenderer,
    slide: SlideAnimator,
    input: InputState,
    pads: Box<dyn PadSource>,
    config: GameConfig,
    dealer: Dealer,
    game: GameState,
    store: Box<dyn SettingsStore>,
    settings: Settings,
    bus: EventBus,
    events: EventSender,
    games: u32,
}

impl Table {
    /// Creates a table. Nothing is drawn until [`start_game`](Self::start_game).
    ///
    /// A corrupt settings blob is replaced by defaults.
    pub fn new(
        config: GameConfig,
        assets: AssetBank,
        mut store: Box<dyn SettingsStore>,
    ) -> TableResult<Self> {
        config.validate()?;
        let settings = Settings::load_or_default(store.as_mut())?;
        let bus = EventBus::default();
        let events = bus.sender();

        Ok(Self {
            vdp: Vdp::new(),
            assets,
            cards: CardBufferCache::new(),
            panel: PanelRenderer::new(),
            castles: StructureRenderer::new(StructureKind::Fortification),
            fences: StructureRenderer::new(StructureKind::Barrier),
            slide: SlideAnimator::new(config.pacing.slide_speed),
            input: InputState::new(),
            pads: Box::<ScriptedPads>::default(),
            dealer: Dealer::new(config.seed),
            game: GameState::new(&config),
            config,
            store,
            settings,
            bus,
            events,
            games: 0,
        })
    }

    /// Replaces the controller source used for human seats.
    pub fn set_pads(&mut self, pads: Box<dyn PadSource>) {
        self.pads = pads;
    }

    /// Receiver for table events.
    #[must_use]
    pub fn events(&self) -> EventReceiver {
        self.bus.receiver()
    }

    /// Raises the reset request, as the console's reset button would.
    pub fn request_reset(&self) {
        self.input.reset_latch().raise();
    }

    /// Handle for raising resets from another thread.
    #[must_use]
    pub fn reset_latch(&self) -> ResetLatch {
        self.input.reset_latch()
    }

    /// The video chip.
    #[inline]
    #[must_use]
    pub fn vdp(&self) -> &Vdp {
        &self.vdp
    }

    /// Transfer statistics so far.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> VramStats {
        self.vdp.stats()
    }

    /// The game in progress.
    #[inline]
    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Win counts.
    #[inline]
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Card buffer cache, for inspecting upload counts.
    #[inline]
    #[must_use]
    pub fn cards(&self) -> &CardBufferCache {
        &self.cards
    }

    /// Sets up the screen and deals both hands.
    pub fn start_game(&mut self) {
        self.games += 1;
        self.game = GameState::new(&self.config);
        self.cards.reset();
        self.castles.reset();
        self.fences.reset();
        self.slide.finish(&mut self.vdp);
        // A stale request would abandon the new game at once.
        self.input.take_reset();
        self.events.send(TableEvent::GameStarted { game: self.games });

        self.vdp.set_display(false);
        load_static_assets(&mut self.vdp, &self.assets);
        draw_background(&mut self.vdp, &self.assets);
        self.panel.draw_panels(&mut self.vdp, &self.assets);
        self.panel
            .update_all(&mut self.vdp, &self.assets, &self.game.panel_values());
        self.panel
            .set_active_player(&mut self.vdp, &self.assets, Player::One);
        self.draw_at(CardPosition::Draw, CardFace::Back);
        self.draw_at(CardPosition::Discard, CardFace::Empty);
        for position in CardPosition::hand() {
            self.draw_at(position, CardFace::Empty);
        }
        self.refresh_structures();
        self.vdp.wait_for_vblank();
        self.vdp.set_display(true);
        tracing::info!(game = self.games, seed = self.config.seed, "game started");

        for player in Player::ALL {
            self.panel
                .set_active_player(&mut self.vdp, &self.assets, player);
            for slot in 0..HAND_SIZE {
                let card = self.dealer.deal();
                self.game.deal(player, slot, card);
                self.animate_draw(player, slot);
                self.events.send(TableEvent::CardDealt { player, slot, card });
            }
            self.vdp.delay_frames(self.config.pacing.deal_delay);
        }
    }

    /// Plays one turn for the player whose turn is next.
    pub fn take_turn(&mut self) -> TableResult<TurnOutcome> {
        if let Some(result) = self.game.result() {
            return Ok(TurnOutcome::Finished(result));
        }
        if self.reset_requested() {
            return Ok(TurnOutcome::Reset);
        }

        let first = self.game.turn() == 0;
        let player = if first {
            Player::One
        } else {
            self.game.active().other()
        };
        self.set_player(player);
        self.game.begin_turn(player, !first);
        self.refresh_counters();
        self.events.send(TableEvent::TurnStarted {
            player,
            turn: self.game.turn(),
            produced: !first,
        });
        self.vdp.delay_frames(self.config.pacing.turn_start_delay);
        if self.reset_requested() {
            return Ok(TurnOutcome::Reset);
        }

        let action = match self.config.players.seat(player) {
            Seat::Ai => ai::choose_move(&self.game, player).ok_or(TableError::EmptyHand(player))?,
            Seat::Human => match self.human_move(player)? {
                Some(action) => action,
                None => {
                    self.events.send(TableEvent::Reset);
                    return Ok(TurnOutcome::Reset);
                }
            },
        };
        let record = self.game.apply_move(action)?;
        self.events.send(TableEvent::MovePlayed(record));
        self.animate_move(record);
        self.refresh_structures();
        self.refresh_counters();
        self.vdp.delay_frames(self.config.pacing.move_delay);

        if let Some(result) = self.game.result() {
            self.finish(result)?;
            return Ok(TurnOutcome::Finished(result));
        }

        let card = self.dealer.deal();
        if let Some(slot) = self.game.fill_empty_slot(card) {
            self.animate_draw(player, slot);
            self.events.send(TableEvent::CardDealt { player, slot, card });
        }
        self.vdp.delay_frames(self.config.pacing.draw_delay);

        self.game.end_turn();
        if let Some(result) = self.game.result() {
            self.finish(result)?;
            return Ok(TurnOutcome::Finished(result));
        }
        if self.reset_requested() {
            return Ok(TurnOutcome::Reset);
        }
        Ok(TurnOutcome::Continue)
    }

    /// Starts a game and plays it to the end or to a reset.
    ///
    /// Returns `None` if the game was reset.
    pub fn play_game(&mut self) -> TableResult<Option<GameResult>> {
        self.start_game();
        loop {
            match self.take_turn()? {
                TurnOutcome::Continue => {}
                TurnOutcome::Finished(result) => return Ok(Some(result)),
                TurnOutcome::Reset => return Ok(None),
            }
        }
    }

    fn reset_requested(&mut self) -> bool {
        if self.input.take_reset() {
            tracing::info!(turn = self.game.turn(), "reset requested");
            self.events.send(TableEvent::Reset);
            return true;
        }
        false
    }

    fn finish(&mut self, result: GameResult) -> TableResult<()> {
        if let GameResult::Won(winner) = result {
            self.settings.record_win(winner);
            self.settings.save(self.store.as_mut())?;
        }
        tracing::info!(
            ?result,
            turns = self.game.turn(),
            wins_one = self.settings.wins(Player::One),
            wins_two = self.settings.wins(Player::Two),
            "game over"
        );
        self.events.send(TableEvent::GameOver(result));
        Ok(())
    }

    /// Whether a player's cards are shown face down.
    ///
    /// Computer hands are hidden from a human opponent. With two computers
    /// the second hand is hidden so the table looks like a one-player game.
    fn hand_hidden(&self, player: Player) -> bool {
        let players = &self.config.players;
        players.seat(player) == Seat::Ai
            && (players.seat(player.other()) == Seat::Human || player == Player::Two)
    }

    fn face_in_hand(&self, player: Player, slot: usize) -> CardFace {
        match self.game.hand(player)[slot] {
            None => CardFace::Empty,
            Some(_) if self.hand_hidden(player) => CardFace::Back,
            Some(card) => CardFace::Card(card),
        }
    }

    /// Moves the indicator and shows `player`'s hand.
    fn set_player(&mut self, player: Player) {
        self.panel
            .set_active_player(&mut self.vdp, &self.assets, player);
        for slot in 0..HAND_SIZE {
            let face = self.face_in_hand(player, slot);
            self.draw_at(CardPosition::Hand(slot), face);
            // One card upload per vertical blank.
            if self.vdp.back().pending_patterns() > 0 {
                self.vdp.wait_for_vblank();
            }
        }
        self.vdp.wait_for_vblank();
    }

    fn draw_at(&mut self, position: CardPosition, face: CardFace) {
        let (x, y) = position.tile();
        self.cards.draw(
            &mut self.vdp,
            &self.assets,
            position.cache_slot(),
            face,
            x,
            y,
        );
    }

    fn animate_draw(&mut self, player: Player, slot: usize) {
        let face = self.face_in_hand(player, slot);
        let target = CardPosition::Hand(slot);
        self.slide.begin(
            &mut self.vdp,
            &mut self.cards,
            &self.assets,
            CardPosition::Draw.point(),
            face,
        );
        self.slide.advance(&mut self.vdp, target.point());
        self.draw_at(target, face);
        self.slide.finish(&mut self.vdp);
        self.vdp.wait_for_vblank();
    }

    fn animate_move(&mut self, record: MoveRecord) {
        let face = match record.action {
            Move::Play(_) => CardFace::Card(record.card),
            Move::Discard(_) => CardFace::Discarded(record.card),
        };
        self.slide.begin(
            &mut self.vdp,
            &mut self.cards,
            &self.assets,
            CardPosition::Hand(record.action.slot()).point(),
            face,
        );
        self.draw_at(CardPosition::Hand(record.action.slot()), CardFace::Empty);
        self.slide
            .advance(&mut self.vdp, CardPosition::Discard.point());
        self.draw_at(CardPosition::Discard, face);
        self.slide.finish(&mut self.vdp);
        self.vdp.wait_for_vblank();
    }

    fn refresh_counters(&mut self) {
        let drawn = self
            .panel
            .update_all(&mut self.vdp, &self.assets, &self.game.panel_values());
        if drawn > 0 {
            self.vdp.wait_for_vblank();
        }
    }

    fn refresh_structures(&mut self) {
        let (castles, fences) = self.game.structure_heights();
        self.castles
            .render_all(&mut self.vdp, &self.assets, castles);
        self.fences.render_all(&mut self.vdp, &self.assets, fences);
    }

    /// Waits for a human move, showing the selected card lifted out of the
    /// hand. Returns `None` on reset.
    ///
    /// A pad source that runs dry can never produce the move, so that is an
    /// error rather than an endless wait.
    fn human_move(&mut self, player: Player) -> TableResult<Option<Move>> {
        let mut cursor = HandCursor::new();
        self.lift(player, cursor.slot());
        loop {
            self.vdp.wait_for_vblank();
            if self.input.take_reset() {
                tracing::info!(turn = self.game.turn(), "reset requested");
                self.vdp.clear_sprites();
                return Ok(None);
            }
            let Some(sample) = self.pads.poll() else {
                self.vdp.clear_sprites();
                return Err(TableError::PadsExhausted(player));
            };
            self.input.begin_frame(sample);

            let before = cursor.slot();
            let action = match cursor.apply(self.input.controller(player)) {
                Some(HandAction::Play(slot)) => Move::Play(slot),
                Some(HandAction::Discard(slot)) => Move::Discard(slot),
                None => {
                    if cursor.slot() != before {
                        self.lift(player, cursor.slot());
                    }
                    continue;
                }
            };
            match self.game.validate(action) {
                Ok(_) => {
                    self.vdp.clear_sprites();
                    return Ok(Some(action));
                }
                Err(err) => tracing::debug!(?action, %err, "move refused"),
            }
        }
    }

    fn lift(&mut self, player: Player, slot: usize) {
        self.vdp.clear_sprites();
        let face = self.face_in_hand(player, slot);
        let patterns = self.cards.ensure_sprite(&mut self.vdp, &self.assets, face);
        let at = CardPosition::Hand(slot).point();
        place_card_sprites(
            &mut self.vdp,
            patterns,
            Point::new(at.x, HAND_Y_SPRITE - CURSOR_LIFT),
        );
    }
}
