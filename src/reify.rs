//! Ace reification: expanding indeterminate aces into concrete values.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{AceValue, Card, Rank, Suit};

/// Iterator over every reification of a hand's indeterminate aces.
///
/// Produced by [`reify_aces`]. Yields `2^k` hand variants for `k`
/// indeterminate aces; with no indeterminate aces the single variant is the
/// input hand itself.
#[derive(Debug, Clone)]
pub struct Reifications {
    /// Cards that need no resolution, in input order.
    resolved: Vec<Card>,
    /// Suits of the indeterminate aces awaiting a value.
    aces: Vec<Suit>,
    /// Next assignment mask, one bit per ace.
    next: usize,
}

impl Reifications {
    fn variants(&self) -> usize {
        1 << self.aces.len()
    }
}

impl Iterator for Reifications {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.next >= self.variants() {
            return None;
        }
        let mut hand = self.resolved.clone();
        for (bit, &suit) in self.aces.iter().enumerate() {
            let value = if self.next >> bit & 1 == 0 {
                AceValue::Low
            } else {
                AceValue::High
            };
            hand.push(Card::new(Rank::Ace(value), suit));
        }
        self.next += 1;
        Some(hand)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.variants() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Reifications {}

/// Enumerates every way the indeterminate aces in `cards` can be assigned a
/// concrete value, independently per ace.
///
/// Each yielded hand has the same cardinality as the input: non-ace cards
/// and already-concrete aces pass through unchanged, and each indeterminate
/// ace is replaced by a new card of the same suit with its rank fixed low or
/// high. The function is pure; calling it again replays the same sequence.
///
/// The input is expected to be a set — no duplicate cards — so at most four
/// aces are ever unresolved and the variant count is bounded by 16.
#[must_use]
pub fn reify_aces(cards: &[Card]) -> Reifications {
    let mut resolved = Vec::with_capacity(cards.len());
    let mut aces = Vec::new();
    for card in cards {
        match card.rank {
            Rank::Ace(AceValue::Indeterminate) => aces.push(card.suit),
            _ => resolved.push(*card),
        }
    }
    Reifications {
        resolved,
        aces,
        next: 0,
    }
}
