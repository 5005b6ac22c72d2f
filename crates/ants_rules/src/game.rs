//! # Game State
//!
//! Both players' counters and hands, whose turn it is, and whether the game
//! has been decided. Nothing here draws; the table reads this state after
//! every change and renders what moved.
//!
//! ## Turn Shape
//!
//! ```text
//! begin_turn(player, produce) → apply_move(move) → fill_empty_slot(card) → end_turn()
//! ```

use ants_shared::constants::HAND_SIZE;
use ants_shared::{Card, Field, Player, FIELD_COUNT};

use crate::config::GameConfig;
use crate::effects;
use crate::error::{RulesError, RulesResult};
use crate::resources::Resources;

/// A hand, slot by slot.
pub type Hand = [Option<Card>; HAND_SIZE];

/// What to do with one hand card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Pay for the card and apply its effect.
    Play(usize),
    /// Throw the card away for free.
    Discard(usize),
}

impl Move {
    /// Hand slot the move uses.
    #[inline]
    #[must_use]
    pub const fn slot(self) -> usize {
        match self {
            Self::Play(slot) | Self::Discard(slot) => slot,
        }
    }
}

/// A move that was carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    /// Who moved.
    pub player: Player,
    /// The move.
    pub action: Move,
    /// The card that left the hand.
    pub card: Card,
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A player met a victory condition.
    Won(Player),
    /// Nobody won before the turn limit.
    TurnLimit,
}

/// Complete rules state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    resources: [Resources; 2],
    hands: [Hand; 2],
    active: Player,
    turn: u32,
    empty_slot: Option<usize>,
    victory_castle: u16,
    turn_limit: u32,
    result: Option<GameResult>,
}

impl GameState {
    /// A fresh game: starting counters, empty hands, player one to move.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let start = config.starting.resources();
        Self {
            resources: [start; 2],
            hands: [[None; HAND_SIZE]; 2],
            active: Player::One,
            turn: 0,
            empty_slot: None,
            victory_castle: config.victory.castle,
            turn_limit: config.turn_limit,
            result: None,
        }
    }

    /// A player's counters.
    #[inline]
    #[must_use]
    pub fn resources(&self, player: Player) -> &Resources {
        &self.resources[player.index()]
    }

    /// Every counter, as the side panels show them.
    #[must_use]
    pub fn panel_values(&self) -> [[u16; FIELD_COUNT]; 2] {
        self.resources.map(|r| r.values())
    }

    /// Structure heights, `(castles, fences)`, per player.
    #[must_use]
    pub fn structure_heights(&self) -> ([u16; 2], [u16; 2]) {
        (
            self.resources.map(|r| r[Field::Castle]),
            self.resources.map(|r| r[Field::Fence]),
        )
    }

    /// A player's hand.
    #[inline]
    #[must_use]
    pub fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    /// Player whose turn it is.
    #[inline]
    #[must_use]
    pub fn active(&self) -> Player {
        self.active
    }

    /// Turns started so far.
    #[inline]
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Slot emptied by the last move, waiting for a card.
    #[inline]
    #[must_use]
    pub fn empty_slot(&self) -> Option<usize> {
        self.empty_slot
    }

    /// How the game ended, once it has.
    #[inline]
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true once the game is decided.
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns true if `player` holds enough of the card's cost unit.
    #[must_use]
    pub fn can_afford(&self, player: Player, card: Card) -> bool {
        self.resources(player)[card.cost_unit()] >= card.cost()
    }

    /// Puts a dealt card into a hand slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot is outside the hand.
    pub fn deal(&mut self, player: Player, slot: usize, card: Card) {
        self.hands[player.index()][slot] = Some(card);
    }

    /// Hands the active player a card for the slot their last move emptied.
    /// Returns the slot, or `None` if no slot is waiting.
    pub fn fill_empty_slot(&mut self, card: Card) -> Option<usize> {
        let slot = self.empty_slot.take()?;
        self.deal(self.active, slot, card);
        Some(slot)
    }

    /// Starts `player`'s turn, adding production first if `produce` is set.
    pub fn begin_turn(&mut self, player: Player, produce: bool) {
        self.active = player;
        self.turn += 1;
        if produce {
            self.resources[player.index()].produce();
        }
    }

    /// Checks a move for the active player without carrying it out.
    pub fn validate(&self, action: Move) -> RulesResult<Card> {
        if self.is_over() {
            return Err(RulesError::GameOver);
        }
        let slot = action.slot();
        let card = self
            .hand(self.active)
            .get(slot)
            .copied()
            .ok_or(RulesError::NoSuchSlot(slot))?
            .ok_or(RulesError::EmptySlot(slot))?;
        if let Move::Play(_) = action {
            if !self.can_afford(self.active, card) {
                let unit = card.cost_unit();
                return Err(RulesError::Unaffordable {
                    card,
                    unit,
                    needed: card.cost(),
                    available: self.resources(self.active)[unit],
                });
            }
        }
        Ok(card)
    }

    /// Carries out a move for the active player.
    pub fn apply_move(&mut self, action: Move) -> RulesResult<MoveRecord> {
        let card = self.validate(action)?;
        let player = self.active;
        let slot = action.slot();

        if let Move::Play(_) = action {
            let (own, enemy) = self.split_mut(player);
            own.subtract(card.cost_unit(), card.cost());
            effects::apply(card, own, enemy);
        }
        self.hands[player.index()][slot] = None;
        self.empty_slot = Some(slot);
        self.result = self.victor().map(GameResult::Won);

        tracing::debug!(?player, ?action, ?card, turn = self.turn, "move applied");
        Ok(MoveRecord {
            player,
            action,
            card,
        })
    }

    /// Closes the turn, ending the game at the turn limit.
    pub fn end_turn(&mut self) {
        if self.result.is_none() && self.turn >= self.turn_limit {
            self.result = Some(GameResult::TurnLimit);
        }
    }

    fn victor(&self) -> Option<Player> {
        let wins = |p: Player| {
            self.resources(p)[Field::Castle] >= self.victory_castle
                || self.resources(p.other())[Field::Castle] == 0
        };
        [self.active, self.active.other()].into_iter().find(|&p| wins(p))
    }

    fn split_mut(&mut self, player: Player) -> (&mut Resources, &mut Resources) {
        let [one, two] = &mut self.resources;
        match player {
            Player::One => (one, two),
            Player::Two => (two, one),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameState {
        GameState::new(&GameConfig::default())
    }

    #[test]
    fn test_new_game() {
        let g = game();
        assert_eq!(g.active(), Player::One);
        assert_eq!(g.panel_values(), [[2, 5, 2, 5, 2, 5, 30, 10]; 2]);
        assert!(g.hand(Player::Two).iter().all(Option::is_none));
        assert_eq!(g.structure_heights(), ([30, 30], [10, 10]));
    }

    #[test]
    fn test_play_pays_and_applies() {
        let mut g = game();
        g.begin_turn(Player::One, false);
        g.deal(Player::One, 3, Card::Tower);

        let record = g.apply_move(Move::Play(3)).unwrap();
        assert_eq!(record.card, Card::Tower);
        assert_eq!(g.resources(Player::One)[Field::Bricks], 0);
        assert_eq!(g.resources(Player::One)[Field::Castle], 35);
        assert_eq!(g.hand(Player::One)[3], None);
        assert_eq!(g.empty_slot(), Some(3));
    }

    #[test]
    fn test_discard_is_free() {
        let mut g = game();
        g.begin_turn(Player::One, false);
        g.deal(Player::One, 0, Card::Babylon);
        g.apply_move(Move::Discard(0)).unwrap();
        assert_eq!(g.panel_values()[0], [2, 5, 2, 5, 2, 5, 30, 10]);
    }

    #[test]
    fn test_rejects_bad_moves() {
        let mut g = game();
        g.begin_turn(Player::One, false);
        g.deal(Player::One, 0, Card::Babylon);

        assert!(matches!(
            g.apply_move(Move::Play(0)),
            Err(RulesError::Unaffordable { needed: 39, available: 5, .. })
        ));
        assert_eq!(g.apply_move(Move::Play(1)), Err(RulesError::EmptySlot(1)));
        assert_eq!(g.apply_move(Move::Discard(8)), Err(RulesError::NoSuchSlot(8)));
        assert_eq!(g.hand(Player::One)[0], Some(Card::Babylon));
    }

    #[test]
    fn test_fill_empty_slot() {
        let mut g = game();
        g.begin_turn(Player::Two, false);
        g.deal(Player::Two, 6, Card::Wall);
        assert_eq!(g.fill_empty_slot(Card::Knight), None);

        g.apply_move(Move::Play(6)).unwrap();
        assert_eq!(g.fill_empty_slot(Card::Knight), Some(6));
        assert_eq!(g.hand(Player::Two)[6], Some(Card::Knight));
        assert_eq!(g.empty_slot(), None);
    }

    #[test]
    fn test_production_at_turn_start() {
        let mut g = game();
        g.begin_turn(Player::Two, true);
        assert_eq!(g.resources(Player::Two).values(), [2, 7, 2, 7, 2, 7, 30, 10]);
        assert_eq!(g.resources(Player::One).values(), [2, 5, 2, 5, 2, 5, 30, 10]);
    }

    #[test]
    fn test_castle_victory() {
        let config = GameConfig {
            victory: crate::config::VictoryConfig { castle: 35 },
            ..GameConfig::default()
        };
        let mut g = GameState::new(&config);
        g.begin_turn(Player::One, false);
        g.deal(Player::One, 0, Card::Tower);
        g.apply_move(Move::Play(0)).unwrap();

        assert_eq!(g.result(), Some(GameResult::Won(Player::One)));
        assert_eq!(g.apply_move(Move::Discard(1)), Err(RulesError::GameOver));
    }

    #[test]
    fn test_destroying_the_enemy_castle_wins() {
        let mut config = GameConfig::default();
        config.starting.castle = 5;
        config.starting.fence = 0;
        let mut g = GameState::new(&config);
        g.begin_turn(Player::Two, false);
        g.deal(Player::Two, 0, Card::Platoon);
        g.apply_move(Move::Play(0)).unwrap();

        assert_eq!(g.resources(Player::One)[Field::Castle], 0);
        assert_eq!(g.result(), Some(GameResult::Won(Player::Two)));
    }

    #[test]
    fn test_turn_limit() {
        let config = GameConfig {
            turn_limit: 2,
            ..GameConfig::default()
        };
        let mut g = GameState::new(&config);
        g.begin_turn(Player::One, false);
        g.end_turn();
        assert!(!g.is_over());
        g.begin_turn(Player::Two, true);
        g.end_turn();
        assert_eq!(g.result(), Some(GameResult::TurnLimit));
    }
}
