//! The deck and its dealing sequence.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DealError, DeckError};
use crate::hand::{Board, HoleCards, Street};

/// Number of shuffles applied when none is specified.
pub const DEFAULT_SHUFFLES: u32 = 7;

/// A deck of cards dealt from the front.
///
/// A deck deals the hole cards once, then the community cards in order
/// (flop, turn, river). Dealt cards never return to the deck.
///
/// # Example
///
/// ```
/// use holdem_deal::Deck;
///
/// let mut deck = Deck::new();
/// deck.shuffle(7);
///
/// let hole = deck.deal_hand()?;
/// deck.flop()?;
/// deck.turn()?;
/// deck.river()?;
///
/// assert_eq!(deck.len(), 45);
/// assert_eq!(deck.board().in_play(&hole)?.len(), 7);
/// # Ok::<(), holdem_deal::DealError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Undealt cards, next card first.
    cards: VecDeque<Card>,
    /// Number of cards the deck started with.
    initial: usize,
    /// Whether the hole cards have been dealt.
    hole_dealt: bool,
    /// Community cards dealt so far.
    board: Board,
}

impl Deck {
    /// Creates an ordered 52-card deck.
    ///
    /// Cards are grouped by suit, and each suit runs from Two up to Ace.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }

        Self::from_queue(cards)
    }

    /// Creates a deck that deals the given cards in order, first card first.
    ///
    /// # Errors
    ///
    /// Returns an error if a card appears more than once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(card) = cards.iter().find(|card| !seen.insert(**card)) {
            return Err(DeckError::DuplicateCard(*card));
        }

        Ok(Self::from_queue(cards.into()))
    }

    fn from_queue(cards: VecDeque<Card>) -> Self {
        Self {
            initial: cards.len(),
            cards,
            hole_dealt: false,
            board: Board::new(),
        }
    }

    /// Shuffles the remaining cards `iterations` times.
    ///
    /// Every iteration seeds a fresh generator from `rng`, so the outcome is
    /// reproducible for a seeded `rng` and uniform for any iteration count
    /// above zero.
    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R, iterations: u32) {
        for _ in 0..iterations {
            let mut shuffle_rng = ChaCha8Rng::from_rng(rng);
            self.cards.make_contiguous().shuffle(&mut shuffle_rng);
        }

        debug!(iterations, remaining = self.cards.len(), "shuffled deck");
    }

    /// Shuffles the remaining cards `iterations` times, seeding from the
    /// thread-local generator.
    #[cfg(feature = "std")]
    pub fn shuffle(&mut self, iterations: u32) {
        self.shuffle_with(&mut rand::rng(), iterations);
    }

    /// Deals the two hole cards from the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the hole cards were already dealt or fewer than
    /// two cards remain.
    pub fn deal_hand(&mut self) -> Result<HoleCards, DealError> {
        if self.hole_dealt {
            return Err(DealError::HandAlreadyDealt);
        }

        let [first, second] = self.draw::<2>()?;
        self.hole_dealt = true;

        debug!(remaining = self.cards.len(), "dealt hole cards");
        Ok(HoleCards::new(first, second))
    }

    /// Deals the three flop cards onto the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the hole cards have not been dealt, the flop was
    /// already dealt, or fewer than three cards remain.
    pub fn flop(&mut self) -> Result<[Card; 3], DealError> {
        self.check_street(Street::Flop)?;
        let cards = self.draw::<3>()?;
        self.board.extend(cards);

        debug!(remaining = self.cards.len(), "dealt flop");
        Ok(cards)
    }

    /// Deals the turn card onto the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the flop has not been dealt, the turn was already
    /// dealt, or the deck is empty.
    pub fn turn(&mut self) -> Result<Card, DealError> {
        self.check_street(Street::Turn)?;
        let [card] = self.draw::<1>()?;
        self.board.extend([card]);

        debug!(remaining = self.cards.len(), "dealt turn");
        Ok(card)
    }

    /// Deals the river card onto the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn has not been dealt, the river was already
    /// dealt, or the deck is empty.
    pub fn river(&mut self) -> Result<Card, DealError> {
        self.check_street(Street::River)?;
        let [card] = self.draw::<1>()?;
        self.board.extend([card]);

        debug!(remaining = self.cards.len(), "dealt river");
        Ok(card)
    }

    /// Fails unless `street` is the next street to deal.
    fn check_street(&self, street: Street) -> Result<(), DealError> {
        if !self.hole_dealt {
            return Err(DealError::HoleCardsNotDealt);
        }

        if self.board.street().next() == Some(street) {
            Ok(())
        } else {
            Err(DealError::OutOfOrder(street))
        }
    }

    /// Removes the next `N` cards from the front of the deck.
    fn draw<const N: usize>(&mut self) -> Result<[Card; N], DealError> {
        let remaining = self.cards.len();
        if remaining < N {
            return Err(DealError::InsufficientCards {
                needed: N,
                remaining,
            });
        }

        let cards = core::array::from_fn(|i| self.cards[i]);
        self.cards.drain(..N);
        Ok(cards)
    }

    /// Returns the community cards dealt so far.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whether the hole cards have been dealt.
    #[must_use]
    pub const fn is_hand_dealt(&self) -> bool {
        self.hole_dealt
    }

    /// Returns an iterator over the remaining cards, next card first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards dealt from this deck.
    #[must_use]
    pub fn dealt(&self) -> usize {
        self.initial - self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
