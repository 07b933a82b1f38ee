//! Error types for dealing and evaluation.

use thiserror::Error;

use crate::card::Card;
use crate::hand::Street;

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer cards remain than the deal requires.
    #[error("not enough cards in the deck: need {needed}, {remaining} remaining")]
    InsufficientCards {
        /// Cards required by the deal.
        needed: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
    /// The hole cards were already dealt from this deck.
    #[error("hole cards already dealt from this deck")]
    HandAlreadyDealt,
    /// The board cannot be dealt before the hole cards.
    #[error("hole cards must be dealt before the board")]
    HoleCardsNotDealt,
    /// The street cannot be dealt at this point.
    #[error("cannot deal the {0} at this point")]
    OutOfOrder(Street),
    /// The board has not been dealt through the river.
    #[error("board is incomplete, dealt up to the {0}")]
    IncompleteBoard(Street),
}

/// Errors that can occur when building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card appears more than once.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur when evaluating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The evaluator needs exactly seven cards.
    #[error("expected 7 cards to evaluate, got {0}")]
    InvalidCardCount(usize),
    /// The same card appears more than once.
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
}

/// Errors that abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Evaluation failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
