//! Card, rank, and suit types.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::CardError;

/// Suit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red (hearts and diamonds).
    Red,
    /// Black (clubs and spades).
    Black,
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in enumeration order.
    ///
    /// This order is the deterministic tie-break used by
    /// [`best_flush`](crate::eval::best_flush) when two suits are equally
    /// frequent.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
            Self::Spades => 's',
        };
        write!(f, "{symbol}")
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(symbol: char) -> Result<Self, CardError> {
        match symbol {
            'h' => Ok(Self::Hearts),
            'd' => Ok(Self::Diamonds),
            'c' => Ok(Self::Clubs),
            's' => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

/// Concrete value assigned to an ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AceValue {
    /// No value assigned yet.
    Indeterminate,
    /// The ace counts as 1.
    Low,
    /// The ace counts as 14.
    High,
}

/// Ace interpretation that a comparison runs under.
///
/// Ranks have no ambient ordering; every comparison states its
/// interpretation explicitly via [`Rank::cmp_under`] or
/// [`Rank::order_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AceOrdering {
    /// The ace orders below the two (value 1).
    Low,
    /// The ace orders above the king (value 14).
    High,
}

/// Card rank.
///
/// An ace carries an [`AceValue`] tag: it is dealt indeterminate and only
/// becomes low (1) or high (14) once a context resolves it, always by
/// constructing a new card. Equality and hashing are by display identity,
/// so all three ace variants compare equal to each other.
#[derive(Debug, Clone, Copy)]
pub enum Rank {
    /// An ace, low or high or not yet resolved.
    Ace(AceValue),
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen rank identities, in ace-high order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace(AceValue::Indeterminate),
    ];

    /// Creates a rank from its numeric value.
    ///
    /// 1 yields a low ace and 14 a high ace; 2 through 13 yield the pip and
    /// court ranks.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] for values outside `1..=14`.
    pub const fn from_value(value: u8) -> Result<Self, CardError> {
        match value {
            1 => Ok(Self::Ace(AceValue::Low)),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            8 => Ok(Self::Eight),
            9 => Ok(Self::Nine),
            10 => Ok(Self::Ten),
            11 => Ok(Self::Jack),
            12 => Ok(Self::Queen),
            13 => Ok(Self::King),
            14 => Ok(Self::Ace(AceValue::High)),
            _ => Err(CardError::InvalidRank),
        }
    }

    /// Returns the concrete numeric value, if one is assigned.
    ///
    /// An indeterminate ace has no value and must not be ranked until it is
    /// resolved; see [`reify_aces`](crate::reify::reify_aces).
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Self::Ace(AceValue::Indeterminate) => None,
            Self::Ace(AceValue::Low) => Some(1),
            rank => Some(rank.order_value(AceOrdering::High)),
        }
    }

    /// Returns the ordering value of the rank under the given ace
    /// interpretation.
    ///
    /// Any ace maps to 1 (low) or 14 (high) regardless of its tag, since
    /// ordering is a property of the display identity.
    #[must_use]
    pub const fn order_value(self, ordering: AceOrdering) -> u8 {
        match self {
            Self::Ace(_) => match ordering {
                AceOrdering::Low => 1,
                AceOrdering::High => 14,
            },
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
        }
    }

    /// Compares two ranks under the given ace interpretation.
    #[must_use]
    pub fn cmp_under(self, other: Self, ordering: AceOrdering) -> Ordering {
        self.order_value(ordering).cmp(&other.order_value(ordering))
    }

    /// Returns whether the rank is an ace, regardless of its assigned value.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace(_))
    }

    /// Display identity, shared by all three ace variants.
    const fn identity(self) -> u8 {
        self.order_value(AceOrdering::High)
    }
}

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Rank {}

impl Hash for Rank {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Ace(_) => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        };
        write!(f, "{symbol}")
    }
}

impl TryFrom<char> for Rank {
    type Error = CardError;

    fn try_from(symbol: char) -> Result<Self, CardError> {
        match symbol {
            'A' => Ok(Self::Ace(AceValue::Indeterminate)),
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            '4' => Ok(Self::Four),
            '5' => Ok(Self::Five),
            '6' => Ok(Self::Six),
            '7' => Ok(Self::Seven),
            '8' => Ok(Self::Eight),
            '9' => Ok(Self::Nine),
            'T' => Ok(Self::Ten),
            'J' => Ok(Self::Jack),
            'Q' => Ok(Self::Queen),
            'K' => Ok(Self::King),
            _ => Err(CardError::InvalidRank),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Compares two cards under the given ace interpretation, by rank first
    /// and suit second.
    #[must_use]
    pub fn cmp_under(self, other: Self, ordering: AceOrdering) -> Ordering {
        self.rank
            .cmp_under(other.rank, ordering)
            .then(self.suit.cmp(&other.suit))
    }

    /// Parses a whitespace-separated list of two-character card notations,
    /// e.g. `"Ah Kh Qh Jh Th"`.
    ///
    /// # Errors
    ///
    /// Returns an error if any notation fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, CardError> {
        s.split_whitespace().map(Self::try_from).collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl TryFrom<&str> for Card {
    type Error = CardError;

    fn try_from(s: &str) -> Result<Self, CardError> {
        let mut symbols = s.chars();
        let (Some(rank), Some(suit), None) = (symbols.next(), symbols.next(), symbols.next())
        else {
            return Err(CardError::InvalidNotation);
        };
        Ok(Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
