//! Seven-card hand category evaluation.
//!
//! The evaluator classifies the seven in-play cards into one of ten
//! [`HandRank`] categories. It decides the category from four facts only:
//! whether a flush is present, whether a straight is present, how many
//! distinct ranks there are, and whether some rank appears three or four
//! times. Kickers are never computed.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::{HashMap, HashSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};
use tracing::trace;

use crate::card::{Card, Rank, Suit};
use crate::error::EvalError;
use crate::options::TableOptions;

/// Number of cards the evaluator accepts.
pub const IN_PLAY_SIZE: usize = 7;

/// Hand categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// No other category applies.
    HighCard,
    /// Four distinct ranks among seven cards.
    OnePair,
    /// Three distinct ranks, none appearing three times.
    TwoPair,
    /// Three distinct ranks, one appearing three times.
    ThreeOfAKind,
    /// Five consecutive rank values.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Two distinct ranks, none appearing four times.
    FullHouse,
    /// Two distinct ranks, one appearing four times.
    FourOfAKind,
    /// A flush and a straight.
    StraightFlush,
    /// A flush and a straight with Ten, Jack, Queen, King and Ace present.
    RoyalFlush,
}

impl HandRank {
    /// All categories in ascending strength.
    pub const ALL: [Self; 10] = [
        Self::HighCard,
        Self::OnePair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
        Self::RoyalFlush,
    ];

    /// Returns the display label of the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Occurrences of each rank among a set of cards.
pub type RankCounts = HashMap<Rank, usize>;

/// Counts how many times each rank appears.
#[must_use]
pub fn rank_counts(cards: &[Card]) -> RankCounts {
    let mut counts = RankCounts::with_capacity(cards.len());
    for card in cards {
        *counts.entry(card.rank).or_insert(0) += 1;
    }
    counts
}

/// Returns whether any suit appears at least five times.
#[must_use]
pub fn is_flush(cards: &[Card]) -> bool {
    let mut counts = [0usize; Suit::ALL.len()];
    for card in cards {
        counts[card.suit as usize] += 1;
    }
    counts.iter().any(|&count| count >= 5)
}

/// Returns whether the cards contain five consecutive rank values.
///
/// The Ace only ranks high, so A-2-3-4-5 is not a straight. Use
/// [`is_straight_with`] to also accept it.
#[must_use]
pub fn is_straight(cards: &[Card]) -> bool {
    is_straight_with(cards, false)
}

/// Returns whether the cards contain five consecutive rank values, also
/// counting the Ace as one when `wheel` is set.
#[must_use]
pub fn is_straight_with(cards: &[Card], wheel: bool) -> bool {
    let mut values: Vec<u8> = cards.iter().map(|card| card.rank.value()).collect();
    if wheel && values.contains(&Rank::Ace.value()) {
        values.push(1);
    }

    values.sort_unstable();
    values.dedup();

    let mut run = 1;
    for pair in values.windows(2) {
        if pair[1] == pair[0] + 1 {
            run += 1;
            if run >= 5 {
                return true;
            }
        } else {
            run = 1;
        }
    }
    false
}

/// Evaluates the category of the seven in-play cards.
///
/// # Errors
///
/// Returns an error if `cards` does not hold exactly seven distinct cards.
///
/// # Example
///
/// ```
/// use holdem_deal::{Card, HandRank, Rank, Suit, evaluate_hand};
///
/// let cards = [
///     Card::new(Suit::Hearts, Rank::Ten),
///     Card::new(Suit::Hearts, Rank::Jack),
///     Card::new(Suit::Hearts, Rank::Queen),
///     Card::new(Suit::Hearts, Rank::King),
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Two),
///     Card::new(Suit::Spades, Rank::Seven),
/// ];
///
/// assert_eq!(evaluate_hand(&cards)?, HandRank::RoyalFlush);
/// # Ok::<(), holdem_deal::EvalError>(())
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Result<HandRank, EvalError> {
    evaluate_hand_with(cards, &TableOptions::default())
}

/// Evaluates the category of the seven in-play cards using the given rules.
///
/// # Errors
///
/// Returns an error if `cards` does not hold exactly seven distinct cards.
pub fn evaluate_hand_with(cards: &[Card], options: &TableOptions) -> Result<HandRank, EvalError> {
    if cards.len() != IN_PLAY_SIZE {
        return Err(EvalError::InvalidCardCount(cards.len()));
    }

    let mut seen = HashSet::with_capacity(IN_PLAY_SIZE);
    if let Some(card) = cards.iter().find(|card| !seen.insert(**card)) {
        return Err(EvalError::DuplicateCard(*card));
    }

    Ok(classify(cards, options.wheel_straights))
}

fn classify(cards: &[Card], wheel: bool) -> HandRank {
    let counts = rank_counts(cards);
    let flush = is_flush(cards);
    let straight = is_straight_with(cards, wheel);
    let has_count = |n: usize| counts.values().any(|&count| count == n);

    trace!(flush, straight, distinct = counts.len(), "classifying hand");

    if flush && straight {
        let royal = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
            .iter()
            .all(|rank| counts.contains_key(rank));
        return if royal {
            HandRank::RoyalFlush
        } else {
            HandRank::StraightFlush
        };
    }

    match counts.len() {
        2 if has_count(4) => HandRank::FourOfAKind,
        2 => HandRank::FullHouse,
        3 if has_count(3) => HandRank::ThreeOfAKind,
        3 => HandRank::TwoPair,
        4 => HandRank::OnePair,
        _ if flush => HandRank::Flush,
        _ if straight => HandRank::Straight,
        _ => HandRank::HighCard,
    }
}
