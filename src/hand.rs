//! Hole cards and community board representations.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::DealError;

/// Number of community cards on a complete board.
pub const BOARD_SIZE: usize = 5;

/// How far the community board has been dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    /// No community cards yet.
    Preflop,
    /// The first three community cards.
    Flop,
    /// The fourth community card.
    Turn,
    /// The fifth community card.
    River,
}

impl Street {
    /// Returns the street that follows this one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Preflop => Some(Self::Flop),
            Self::Flop => Some(Self::Turn),
            Self::Turn => Some(Self::River),
            Self::River => None,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Preflop => "preflop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
        };
        f.write_str(name)
    }
}

/// A player's two hole cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards([Card; 2]);

impl HoleCards {
    /// Creates hole cards from two cards.
    #[must_use]
    pub const fn new(first: Card, second: Card) -> Self {
        Self([first, second])
    }

    /// Returns the cards in the order they were dealt.
    #[must_use]
    pub const fn cards(&self) -> &[Card; 2] {
        &self.0
    }
}

/// The community cards.
///
/// Slots are filled in order (flop, turn, river) and never change once
/// written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the community cards dealt so far.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the last street dealt.
    #[must_use]
    pub fn street(&self) -> Street {
        match self.cards.len() {
            0..=2 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }

    /// Returns whether all five community cards have been dealt.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == BOARD_SIZE
    }

    /// Returns the number of community cards dealt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no community cards have been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the seven in-play cards (hole cards and the complete board),
    /// sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has not been dealt through the river.
    pub fn in_play(&self, hole: &HoleCards) -> Result<Vec<Card>, DealError> {
        if !self.is_complete() {
            return Err(DealError::IncompleteBoard(self.street()));
        }

        let mut cards: Vec<Card> = hole.cards().iter().chain(&self.cards).copied().collect();
        cards.sort_unstable();
        Ok(cards)
    }

    /// Writes the next street's cards onto the board.
    pub(crate) fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }
}
