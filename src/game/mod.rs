//! Game engine and round state management.

use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::{DealerHand, Hand};
use crate::ledger::Ledger;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;
use crate::snapshot::{DealerCard, LedgerSnapshot, RoundSnapshot};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

const WELCOME: &str = "Welcome! Place your bet to start.";

/// A single-player blackjack game.
///
/// The game owns the shoe, the ledger and both hands. Every operation runs
/// to completion and either returns a snapshot of the new state or an error,
/// in which case nothing has changed.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Card source.
    shoe: Shoe,
    /// Bankroll, bet and win/loss counters.
    ledger: Ledger,
    /// Player's hand for the round in progress.
    player_hand: Hand,
    /// Dealer's hand for the round in progress.
    dealer_hand: DealerHand,
    /// The most recently settled round, kept for display until the next deal.
    last_result: Option<RoundResult>,
    /// Status line for the presentation layer.
    message: String,
}

impl Game {
    /// Creates a new game whose shoe is seeded with the given value.
    ///
    /// The same options and seed always deal the same cards.
    ///
    /// # Example
    ///
    /// ```
    /// use starjack::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.ledger().bankroll(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_shoe(options, Shoe::new(options.shoe, seed))
    }

    /// Creates a new game seeded from the operating system's entropy source.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(options: GameOptions) -> Self {
        Self::with_shoe(options, Shoe::from_entropy(options.shoe))
    }

    fn with_shoe(options: GameOptions, shoe: Shoe) -> Self {
        Self {
            options,
            state: GameState::Betting,
            shoe,
            ledger: Ledger::new(options.initial_bankroll),
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            last_result: None,
            message: String::from(WELCOME),
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the player's hand for the round in progress.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand for the round in progress.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the most recently settled round, if it has not been cleared
    /// by a new deal or a reset.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the current status message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the shoe, e.g. to stack scripted cards.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns whether [`Game::deal`] would currently succeed.
    #[must_use]
    pub const fn can_deal(&self) -> bool {
        !self.state.is_round_active() && self.ledger.current_bet() > 0
    }

    /// Restores the initial bankroll, zeroes the counters and the bet,
    /// discards both hands and returns to betting. Available in any state.
    pub fn reset(&mut self) -> LedgerSnapshot {
        self.ledger.reset();
        self.clear_hands();
        self.last_result = None;
        self.state = GameState::Betting;
        self.message = String::from(WELCOME);

        tracing::debug!(bankroll = self.ledger.bankroll(), "game reset");

        self.ledger.snapshot()
    }

    /// Builds a snapshot of the table as the player sees it.
    ///
    /// While betting, the last settled round (if any) is shown fully face up.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        let ledger = self.ledger.snapshot();
        let message = self.message.clone();

        if !self.state.is_round_active() {
            return match &self.last_result {
                Some(result) => RoundSnapshot {
                    state: self.state,
                    player_cards: result.player_cards.clone(),
                    dealer_cards: result
                        .dealer_cards
                        .iter()
                        .copied()
                        .map(DealerCard::Revealed)
                        .collect(),
                    player_score: result.player_score,
                    dealer_score: result.dealer_score,
                    dealer_score_partial: false,
                    outcome: Some(result.outcome),
                    ledger,
                    message,
                },
                None => RoundSnapshot {
                    state: self.state,
                    player_cards: Vec::new(),
                    dealer_cards: Vec::new(),
                    player_score: 0,
                    dealer_score: 0,
                    dealer_score_partial: false,
                    outcome: None,
                    ledger,
                    message,
                },
            };
        }

        let hole_hidden = !self.dealer_hand.is_hole_revealed();
        let hidden = self
            .dealer_hand
            .hole_card()
            .filter(|_| hole_hidden)
            .map(|_| DealerCard::Hidden);
        let dealer_cards = hidden
            .into_iter()
            .chain(
                self.dealer_hand
                    .visible_cards()
                    .iter()
                    .copied()
                    .map(DealerCard::Revealed),
            )
            .collect();

        RoundSnapshot {
            state: self.state,
            player_cards: self.player_hand.cards().to_vec(),
            dealer_cards,
            player_score: self.player_hand.value(),
            dealer_score: self.dealer_hand.visible_value(),
            dealer_score_partial: hole_hidden,
            outcome: None,
            ledger,
            message,
        }
    }

    fn clear_hands(&mut self) {
        self.player_hand.clear();
        self.dealer_hand.clear();
    }
}
