//! Table configuration options.

use crate::deck::DEFAULT_SHUFFLES;

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use holdem_deal::TableOptions;
///
/// let options = TableOptions::default()
///     .with_shuffles(3)
///     .with_wheel_straights(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Number of shuffles applied to each new deck.
    pub shuffles: u32,
    /// Whether the Ace also ranks low, making A-2-3-4-5 a straight.
    pub wheel_straights: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            shuffles: DEFAULT_SHUFFLES,
            wheel_straights: false,
        }
    }
}

impl TableOptions {
    /// Sets the number of shuffles applied to each new deck.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_deal::TableOptions;
    ///
    /// let options = TableOptions::default().with_shuffles(1);
    /// assert_eq!(options.shuffles, 1);
    /// ```
    #[must_use]
    pub const fn with_shuffles(mut self, shuffles: u32) -> Self {
        self.shuffles = shuffles;
        self
    }

    /// Sets whether A-2-3-4-5 counts as a straight.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_deal::TableOptions;
    ///
    /// let options = TableOptions::default().with_wheel_straights(true);
    /// assert!(options.wheel_straights);
    /// ```
    #[must_use]
    pub const fn with_wheel_straights(mut self, enabled: bool) -> Self {
        self.wheel_straights = enabled;
        self
    }
}
