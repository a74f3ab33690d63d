//! Game configuration options.

/// How the shoe produces cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ShoeMode {
    /// Every draw is independent and uniform over all 52 faces, with
    /// replacement. Duplicate cards can appear in the same round.
    #[default]
    Infinite,
    /// A shuffled shoe of real decks, rebuilt and reshuffled when empty.
    Finite {
        /// Number of 52-card decks in the shoe (at least one is used).
        decks: u8,
    },
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use starjack::{GameOptions, ShoeMode};
///
/// let options = GameOptions::default()
///     .with_initial_bankroll(500)
///     .with_dealer_stands_on(17)
///     .with_shoe(ShoeMode::Finite { decks: 6 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Bankroll the ledger starts with and returns to on reset.
    pub initial_bankroll: usize,
    /// The dealer keeps drawing while their score is below this value.
    pub dealer_stands_on: u8,
    /// Card source behavior.
    pub shoe: ShoeMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_bankroll: 1000,
            dealer_stands_on: 17,
            shoe: ShoeMode::Infinite,
        }
    }
}

impl GameOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use starjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_bankroll(250);
    /// assert_eq!(options.initial_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_initial_bankroll(mut self, bankroll: usize) -> Self {
        self.initial_bankroll = bankroll;
        self
    }

    /// Sets the score the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use starjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets the shoe mode.
    ///
    /// # Example
    ///
    /// ```
    /// use starjack::{GameOptions, ShoeMode};
    ///
    /// let options = GameOptions::default().with_shoe(ShoeMode::Finite { decks: 2 });
    /// assert_eq!(options.shoe, ShoeMode::Finite { decks: 2 });
    /// ```
    #[must_use]
    pub const fn with_shoe(mut self, shoe: ShoeMode) -> Self {
        self.shoe = shoe;
        self
    }
}
