//! Computer opponent.
//!
//! Greedy, one move deep: play the affordable card that scores highest,
//! where production cards always score above everything else and other cards
//! score their cost. With nothing affordable, throw away the most expensive
//! card. Ties go to the leftmost slot.

use ants_shared::{Card, Player};

use crate::game::{GameState, Move};

/// Score of every production card.
const PRODUCTION_SCORE: u16 = 100;

/// How much the computer wants to play `card`.
#[inline]
#[must_use]
pub fn score(card: Card) -> u16 {
    if card.is_production() {
        PRODUCTION_SCORE
    } else {
        card.cost()
    }
}

/// Chooses `player`'s move. Returns `None` only for an empty hand.
#[must_use]
pub fn choose_move(state: &GameState, player: Player) -> Option<Move> {
    let cards = || {
        state
            .hand(player)
            .iter()
            .enumerate()
            .filter_map(|(slot, card)| card.map(|card| (slot, card)))
    };

    let best_play = cards()
        .filter(|&(_, card)| state.can_afford(player, card))
        .fold(None, |best: Option<(usize, u16)>, (slot, card)| {
            let s = score(card);
            match best {
                Some((_, top)) if top >= s => best,
                _ => Some((slot, s)),
            }
        });
    if let Some((slot, _)) = best_play {
        return Some(Move::Play(slot));
    }

    cards()
        .fold(None, |best: Option<(usize, u16)>, (slot, card)| match best {
            Some((_, top)) if top >= card.cost() => best,
            _ => Some((slot, card.cost())),
        })
        .map(|(slot, _)| Move::Discard(slot))
}
