//! Seeded card dealer.

use ants_shared::{Card, CARD_COUNT};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deals cards uniformly from an infinite deck. Equal seeds deal equal
/// sequences on every platform.
#[derive(Clone, Debug)]
pub struct Dealer {
    rng: ChaCha8Rng,
}

impl Dealer {
    /// Creates a dealer from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Deals one card.
    pub fn deal(&mut self) -> Card {
        Card::ALL[self.rng.gen_range(0..CARD_COUNT)]
    }
}
