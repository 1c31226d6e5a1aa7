//! A poker hand evaluator with optional `no_std` support.
//!
//! The crate models a standard 52-card deck whose aces are dual-valued:
//! an ace is dealt indeterminate and only counts as low (1) or high (14)
//! once a context resolves it. [`reify_aces`] enumerates the concrete
//! resolutions of a hand, and the [`eval`] functions classify flushes,
//! straights, and straight flushes while handling the wheel (A-2-3-4-5)
//! and broadway (T-J-Q-K-A) correctly.
//!
//! # Example
//!
//! ```
//! use pkrs::{Card, HandCategory, best_hand};
//!
//! let cards = Card::parse("Ah Kh Qh Jh Th 9c 8d").unwrap();
//! let best = best_hand(&cards).unwrap().unwrap();
//! assert_eq!(best.category, HandCategory::StraightFlush);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod eval;
pub mod reify;

// Re-export main types
pub use card::{AceOrdering, AceValue, Card, Color, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use deck::new_shuffled_deck;
pub use deck::{seeded_deck, shuffled_deck, standard_deck};
pub use error::{CardError, EvalError};
pub use eval::{
    BestHand, HAND_SIZE, HandCategory, best_flush, best_hand, best_straight, is_flush, is_straight,
};
pub use reify::{Reifications, reify_aces};
