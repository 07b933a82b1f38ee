//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::eval::HandRank;
use crate::hand::{Board, HoleCards};

/// Result of a completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The round number at the table, starting at zero.
    pub round: usize,
    /// The player's hole cards.
    pub hole_cards: HoleCards,
    /// The complete community board.
    pub board: Board,
    /// The seven in-play cards, sorted.
    pub in_play: Vec<Card>,
    /// The category of the in-play cards.
    pub rank: HandRank,
    /// Cards left in the deck after the river.
    pub remaining: usize,
}
