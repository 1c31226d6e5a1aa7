//! Deck construction and shuffling.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Creates the 52 distinct cards in a fixed order.
///
/// Suits follow [`Suit::ALL`] and ranks follow [`Rank::ALL`]. Aces start
/// indeterminate; assigning them a value is the evaluator's job.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Creates a fresh deck shuffled with the provided RNG.
#[must_use]
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = standard_deck();
    cards.shuffle(rng);
    cards
}

/// Creates a fresh deck shuffled deterministically from the given seed.
#[must_use]
pub fn seeded_deck(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    shuffled_deck(&mut rng)
}

/// Creates a fresh deck shuffled with the thread-local RNG.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn new_shuffled_deck() -> Vec<Card> {
    shuffled_deck(&mut rand::rng())
}
