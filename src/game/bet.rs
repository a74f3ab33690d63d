use alloc::format;

use crate::error::{BetError, DealError};
use crate::snapshot::{LedgerSnapshot, RoundSnapshot};

use super::{Game, GameState};

impl Game {
    /// Adds `amount` to the current bet, taking it from the bankroll.
    ///
    /// Repeated calls accumulate, like stacking chips.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the amount is zero, or the
    /// bankroll cannot cover it or could not hold the winnings. The ledger is
    /// unchanged on error.
    pub fn place_bet(&mut self, amount: usize) -> Result<LedgerSnapshot, BetError> {
        if self.state.is_round_active() {
            tracing::debug!(amount, "bet rejected: round in progress");
            return Err(BetError::RoundInProgress);
        }

        self.ledger
            .place(amount)
            .inspect_err(|err| tracing::debug!(amount, %err, "bet rejected"))?;

        let bet = self.ledger.current_bet();
        self.message = format!("Bet placed: ${bet}. Deal to start!");
        tracing::debug!(
            amount,
            bet,
            bankroll = self.ledger.bankroll(),
            "bet placed"
        );

        Ok(self.ledger.snapshot())
    }

    /// Returns the whole current bet to the bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or there is no bet to clear.
    pub fn clear_bet(&mut self) -> Result<LedgerSnapshot, BetError> {
        if self.state.is_round_active() {
            return Err(BetError::RoundInProgress);
        }

        let returned = self
            .ledger
            .clear()
            .inspect_err(|err| tracing::debug!(%err, "clear rejected"))?;

        self.message = format!("Bet of ${returned} cleared.");
        tracing::debug!(returned, "bet cleared");

        Ok(self.ledger.snapshot())
    }

    /// Deals two cards each to the player and the dealer and starts the
    /// player's turn.
    ///
    /// Cards go player, dealer (hole), player, dealer. The dealer's hole card
    /// stays face down until the player stands.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or no bet has been
    /// placed.
    pub fn deal(&mut self) -> Result<RoundSnapshot, DealError> {
        if self.state.is_round_active() {
            return Err(DealError::RoundInProgress);
        }

        if self.ledger.current_bet() == 0 {
            tracing::debug!("deal rejected: no bet");
            return Err(DealError::NoBet);
        }

        self.last_result = None;
        self.clear_hands();

        for _ in 0..2 {
            self.player_hand.add_card(self.shoe.draw());
            self.dealer_hand.add_card(self.shoe.draw());
        }

        let player_score = self.player_hand.value();
        self.state = GameState::PlayerTurn;
        self.message = format!("Game started! Your score: {player_score}. Hit or Stand?");

        tracing::debug!(
            bet = self.ledger.current_bet(),
            player_score,
            dealer_showing = self.dealer_hand.visible_value(),
            "cards dealt"
        );

        Ok(self.snapshot())
    }
}
