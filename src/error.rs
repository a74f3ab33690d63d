//! Error types for game operations.
//!
//! Every error is recoverable: a rejected call leaves the game untouched.

use thiserror::Error;

/// Errors that can occur while placing or clearing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount must be positive")]
    ZeroBet,
    /// The bet exceeds the bankroll.
    #[error("bet of {amount} exceeds bankroll of {bankroll}")]
    InsufficientFunds {
        /// The amount requested.
        amount: usize,
        /// The bankroll available at the time.
        bankroll: usize,
    },
    /// Winning the bet would pay out more than the bankroll can hold.
    #[error("bet of {amount} is too large to be paid out")]
    PayoutOverflow {
        /// The amount requested.
        amount: usize,
    },
    /// There is no bet to clear.
    #[error("no active bet to clear")]
    NoActiveBet,
    /// Bets cannot change while a round is in progress.
    #[error("bets are closed while a round is in progress")]
    RoundInProgress,
}

impl BetError {
    /// Returns whether the bet amount itself was rejected rather than the
    /// timing of the call.
    #[must_use]
    pub const fn is_invalid_bet(&self) -> bool {
        matches!(
            self,
            Self::ZeroBet | Self::InsufficientFunds { .. } | Self::PayoutOverflow { .. }
        )
    }
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No bet has been placed.
    #[error("place a bet before dealing")]
    NoBet,
    /// A round is already in progress.
    #[error("a round is already in progress")]
    RoundInProgress,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Hit or stand was requested outside the player's turn.
    #[error("not the player's turn")]
    NotPlayerTurn,
}
