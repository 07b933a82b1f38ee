//! Card types and display tables.

use core::fmt;

/// Card suit.
///
/// Suits carry no poker strength; the declaration order only gives cards a
/// consistent total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in construction order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the display name of the suit.
    #[must_use]
    pub fn name(self) -> &'static str {
        SUIT_NAMES[self as usize]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank.
///
/// The discriminant is the rank value used by the evaluator, with the Ace
/// ranking above the King (14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two.
    Two = 2,
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
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending value order.
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
        Self::Ace,
    ];

    /// Returns the numeric value of the rank (2..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given numeric value (2..=14).
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            2..=14 => Some(Self::ALL[(value - 2) as usize]),
            _ => None,
        }
    }

    /// Returns the position of the rank in the display table.
    ///
    /// The display table lists the Ace first, so the Ace maps to 1 and every
    /// other rank maps to its value.
    ///
    /// ```
    /// use holdem_deal::Rank;
    ///
    /// assert_eq!(Rank::Ace.table_position(), 1);
    /// assert_eq!(Rank::King.table_position(), 13);
    /// ```
    #[must_use]
    pub const fn table_position(self) -> u8 {
        match self {
            Self::Ace => 1,
            rank => rank.value(),
        }
    }

    /// Returns the rank at the given display table position (1..=13).
    #[must_use]
    pub const fn from_table_position(position: u8) -> Option<Self> {
        match position {
            1 => Some(Self::Ace),
            2..=13 => Self::from_value(position),
            _ => None,
        }
    }

    /// Returns the display name of the rank.
    #[must_use]
    pub fn name(self) -> &'static str {
        RANK_NAMES[(self.table_position() - 1) as usize]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Suit names, indexed by [`Suit`] discriminant.
pub static SUIT_NAMES: [&str; 4] = ["Clubs", "Diamonds", "Hearts", "Spades"];

/// Rank names, indexed by display table position minus one (Ace first).
pub static RANK_NAMES: [&str; 13] = [
    "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
];

/// A playing card.
///
/// Cards order by suit first and rank second. The order is only used to
/// normalize card collections, never to compare poker strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
