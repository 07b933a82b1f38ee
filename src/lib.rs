//! A Texas hold'em deck, dealer, and hand category evaluator with optional
//! `no_std` support.
//!
//! The crate deals a single hand in isolation: a [`Deck`] deals two hole cards
//! and a five-card board, and [`evaluate_hand`] classifies the seven in-play
//! cards into a [`HandRank`]. A [`Table`] drives that sequence as one round.
//!
//! # Example
//!
//! ```
//! use holdem_deal::{Table, TableOptions};
//!
//! let table = Table::new(TableOptions::default(), 42);
//! let result = table.play_round()?;
//! println!("{}", result.rank);
//! # Ok::<(), holdem_deal::RoundError>(())
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
pub mod hand;
pub mod options;
pub mod result;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANK_NAMES, Rank, SUIT_NAMES, Suit};
pub use deck::{DEFAULT_SHUFFLES, Deck};
pub use error::{DealError, DeckError, EvalError, RoundError};
pub use eval::{
    HandRank, IN_PLAY_SIZE, RankCounts, evaluate_hand, evaluate_hand_with, is_flush, is_straight,
    is_straight_with, rank_counts,
};
pub use hand::{BOARD_SIZE, Board, HoleCards, Street};
pub use options::TableOptions;
pub use result::RoundResult;
pub use table::Table;
