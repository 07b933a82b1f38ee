//! Round driver.

use core::sync::atomic::{AtomicUsize, Ordering};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::eval::evaluate_hand_with;
use crate::options::TableOptions;
use crate::result::RoundResult;
use crate::sync::Mutex;

/// A table that plays single-hand rounds.
///
/// Each round builds its own deck, deals the hole cards and the board, and
/// evaluates the seven in-play cards. The random generator is the only state
/// shared between rounds, so a `&Table` can drive rounds from several threads.
///
/// # Example
///
/// ```
/// use holdem_deal::{Table, TableOptions};
///
/// let table = Table::new(TableOptions::default(), 42);
/// let result = table.play_round()?;
///
/// assert_eq!(result.in_play.len(), 7);
/// assert_eq!(result.remaining, 45);
/// # Ok::<(), holdem_deal::RoundError>(())
/// ```
pub struct Table {
    /// Table options.
    pub options: TableOptions,
    /// Random number generator used to seed deck shuffles.
    rng: Mutex<ChaCha8Rng>,
    /// Number of rounds started.
    rounds: AtomicUsize,
}

impl Table {
    /// Creates a new table with the given seed.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            options,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            rounds: AtomicUsize::new(0),
        }
    }

    /// Plays a round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if dealing or evaluation fails. A standard deck always
    /// holds enough cards, so this only fails on a broken invariant.
    pub fn play_round(&self) -> Result<RoundResult, RoundError> {
        let mut deck = Deck::new();
        deck.shuffle_with(&mut *self.rng.lock(), self.options.shuffles);
        self.play_round_with_deck(deck)
    }

    /// Plays a round with the given deck, dealing from its current order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out of cards, has already been dealt
    /// from, or the in-play cards cannot be evaluated. The round is abandoned
    /// on the first error.
    pub fn play_round_with_deck(&self, mut deck: Deck) -> Result<RoundResult, RoundError> {
        let round = self.rounds.fetch_add(1, Ordering::SeqCst);
        debug!(round, cards = deck.len(), "starting round");

        let hole_cards = deck.deal_hand()?;
        deck.flop()?;
        deck.turn()?;
        deck.river()?;

        let in_play = deck.board().in_play(&hole_cards)?;
        let rank = evaluate_hand_with(&in_play, &self.options)?;

        debug!(round, %rank, remaining = deck.len(), "round complete");

        Ok(RoundResult {
            round,
            hole_cards,
            board: deck.board().clone(),
            in_play,
            rank,
            remaining: deck.len(),
        })
    }

    /// Returns the number of rounds started at this table.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds.load(Ordering::SeqCst)
    }
}
