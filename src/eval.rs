//! Flush, straight, and best-hand evaluation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{AceOrdering, Card, Suit};
use crate::error::EvalError;

/// Number of cards in a complete poker hand.
pub const HAND_SIZE: usize = 5;

/// Bitmask of the rank ordering values present in `cards`.
///
/// Identity-equal ranks collapse onto the same bit.
fn rank_mask(cards: &[Card], ordering: AceOrdering) -> u16 {
    cards
        .iter()
        .fold(0, |mask, card| mask | 1 << card.rank.order_value(ordering))
}

/// Whether the set bits of a non-zero mask form one contiguous run.
const fn is_run(mask: u16) -> bool {
    let run = mask >> mask.trailing_zeros();
    run & (run + 1) == 0
}

/// Returns whether all cards share one suit.
///
/// The empty set is vacuously a flush, and a single card trivially is.
#[must_use]
pub fn is_flush(cards: &[Card]) -> bool {
    match cards.split_first() {
        Some((first, rest)) => rest.iter().all(|card| card.suit == first.suit),
        None => true,
    }
}

/// Returns whether the cards form a straight under either ace ordering.
///
/// The rank identities must be pairwise distinct (a pair disqualifies the
/// hand) and consecutive under the ace-low or the ace-high ordering, which
/// admits both the wheel (A-2-3-4-5) and broadway (T-J-Q-K-A) but not a
/// wrap-around like Q-K-A-2-3. Intended for five-card hands; the empty set
/// is defined not to be a straight.
#[must_use]
pub fn is_straight(cards: &[Card]) -> bool {
    if cards.is_empty() {
        return false;
    }
    let high = rank_mask(cards, AceOrdering::High);
    if high.count_ones() as usize != cards.len() {
        return false;
    }
    is_run(high) || is_run(rank_mask(cards, AceOrdering::Low))
}

/// Selects the five highest cards of the most frequent suit.
///
/// Ties between equally frequent suits break deterministically in
/// [`Suit::ALL`] order; a legal hand of at most seven cards cannot reach
/// five cards in two suits. Selection ranks aces high, but the returned
/// cards keep their original rank values, so an indeterminate ace comes
/// back indeterminate rather than high.
///
/// Returns `Ok(None)` when no suit has five cards; that is not an error.
///
/// # Errors
///
/// Returns [`EvalError::InsufficientCards`] when fewer than five cards are
/// supplied.
pub fn best_flush(cards: &[Card]) -> Result<Option<Vec<Card>>, EvalError> {
    if cards.len() < HAND_SIZE {
        return Err(EvalError::InsufficientCards);
    }

    let mut counts = [0usize; 4];
    for card in cards {
        counts[card.suit as usize] += 1;
    }
    let mut best = Suit::Hearts;
    for suit in Suit::ALL {
        if counts[suit as usize] > counts[best as usize] {
            best = suit;
        }
    }
    if counts[best as usize] < HAND_SIZE {
        return Ok(None);
    }

    let mut matching: Vec<Card> = cards
        .iter()
        .filter(|card| card.suit == best)
        .copied()
        .collect();
    matching.sort_by(|a, b| b.rank.cmp_under(a.rank, AceOrdering::High));
    matching.truncate(HAND_SIZE);
    Ok(Some(matching))
}

/// Finds the highest five-card straight in the cards.
///
/// Repeated ranks are tolerated; the first card seen of each rank stands
/// in, since suits are irrelevant to a straight. Both ace orderings are
/// scanned, ace-high first, so a hand admitting both the wheel and a higher
/// straight yields the higher one.
///
/// Returns `Ok(None)` when no straight is present.
///
/// # Errors
///
/// Returns [`EvalError::InsufficientCards`] when fewer than five cards are
/// supplied.
pub fn best_straight(cards: &[Card]) -> Result<Option<Vec<Card>>, EvalError> {
    if cards.len() < HAND_SIZE {
        return Err(EvalError::InsufficientCards);
    }
    for ordering in [AceOrdering::High, AceOrdering::Low] {
        if let Some(run) = highest_run(cards, ordering) {
            return Ok(Some(run));
        }
    }
    Ok(None)
}

/// Scans every five-wide window of ordering values from the top down and
/// collects one card per rank for the first complete window.
fn highest_run(cards: &[Card], ordering: AceOrdering) -> Option<Vec<Card>> {
    const WINDOW: u16 = (1 << HAND_SIZE) - 1;
    let mask = rank_mask(cards, ordering);
    let bottoms = match ordering {
        AceOrdering::High => 2..=10u8,
        AceOrdering::Low => 1..=9u8,
    };
    for bottom in bottoms.rev() {
        let window = WINDOW << bottom;
        if mask & window == window {
            return (bottom..bottom + HAND_SIZE as u8)
                .map(|value| {
                    cards
                        .iter()
                        .copied()
                        .find(|card| card.rank.order_value(ordering) == value)
                })
                .collect();
        }
    }
    None
}

/// Hand categories the evaluator can rank, weakest first.
///
/// Categories below a straight (pairs, trips, and so on) are an extension
/// point this crate does not rank; [`best_hand`] reports them as no hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandCategory {
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Five consecutive ranks of one suit.
    StraightFlush,
}

/// The best qualifying five-card hand found in a card set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestHand {
    /// The category of the hand.
    pub category: HandCategory,
    /// The five cards forming the hand.
    pub cards: Vec<Card>,
}

/// Selects the best five-card hand by category: straight flush, then flush,
/// then straight.
///
/// The straight-flush test is the best flush tested for being a straight.
/// Hands whose best category is below a straight yield `Ok(None)`; ranking
/// them is out of scope.
///
/// # Errors
///
/// Returns [`EvalError::InsufficientCards`] when fewer than five cards are
/// supplied.
pub fn best_hand(cards: &[Card]) -> Result<Option<BestHand>, EvalError> {
    if let Some(flush) = best_flush(cards)? {
        let category = if is_straight(&flush) {
            HandCategory::StraightFlush
        } else {
            HandCategory::Flush
        };
        return Ok(Some(BestHand {
            category,
            cards: flush,
        }));
    }
    if let Some(straight) = best_straight(cards)? {
        return Ok(Some(BestHand {
            category: HandCategory::Straight,
            cards: straight,
        }));
    }
    Ok(None)
}
