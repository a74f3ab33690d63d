//! Round outcome types and the settlement policy.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::BLACKJACK;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    /// Dealer busted or the player finished higher. Pays the stake doubled.
    Win,
    /// Dealer finished higher. The stake is forfeited.
    Lose,
    /// Equal scores. The stake is returned.
    Push,
    /// The player went over 21. The stake is forfeited and the dealer never draws.
    Bust,
}

impl RoundOutcome {
    /// Decides the outcome of a standing hand against the dealer's final score.
    ///
    /// The player's score is expected to be 21 or less; a busted player
    /// never reaches the dealer's turn.
    #[must_use]
    pub const fn decide(player_score: u8, dealer_score: u8) -> Self {
        if player_score > BLACKJACK {
            Self::Bust
        } else if dealer_score > BLACKJACK || player_score > dealer_score {
            Self::Win
        } else if player_score < dealer_score {
            Self::Lose
        } else {
            Self::Push
        }
    }

    /// Returns whether the round counts as a loss in the ledger.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Lose | Self::Bust)
    }

    /// Returns the outcome message shown to the player.
    #[must_use]
    pub fn message(self, player_score: u8, dealer_score: u8) -> String {
        match self {
            Self::Win => format!("You win! Dealer: {dealer_score}, You: {player_score}"),
            Self::Lose => format!("Dealer wins! Dealer: {dealer_score}, You: {player_score}"),
            Self::Push => format!("Push! Dealer: {dealer_score}, You: {player_score}"),
            Self::Bust => String::from("Bust! You went over 21. You lose!"),
        }
    }
}

/// The final state of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// The outcome for the player.
    pub outcome: RoundOutcome,
    /// The player's final cards.
    pub player_cards: Vec<Card>,
    /// The dealer's final cards, all face up.
    pub dealer_cards: Vec<Card>,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// The amount that was wagered.
    pub bet: usize,
    /// The amount credited back to the bankroll (0 on a loss).
    pub payout: usize,
}

impl RoundResult {
    /// Net change to the player's money over the round.
    ///
    /// Widened to `i128` so any `usize` bet and payout fit.
    #[must_use]
    pub const fn net(&self) -> i128 {
        self.payout as i128 - self.bet as i128
    }

    /// Returns the outcome message shown to the player.
    #[must_use]
    pub fn message(&self) -> String {
        self.outcome.message(self.player_score, self.dealer_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settlement_policy() {
        assert_eq!(RoundOutcome::decide(18, 22), RoundOutcome::Win);
        assert_eq!(RoundOutcome::decide(12, 26), RoundOutcome::Win);
        assert_eq!(RoundOutcome::decide(20, 19), RoundOutcome::Win);
        assert_eq!(RoundOutcome::decide(17, 20), RoundOutcome::Lose);
        assert_eq!(RoundOutcome::decide(19, 19), RoundOutcome::Push);
        assert_eq!(RoundOutcome::decide(21, 21), RoundOutcome::Push);
        assert_eq!(RoundOutcome::decide(23, 17), RoundOutcome::Bust);
    }

    #[test]
    fn messages_name_both_scores() {
        assert_eq!(
            RoundOutcome::Win.message(20, 23),
            "You win! Dealer: 23, You: 20"
        );
        assert_eq!(
            RoundOutcome::Lose.message(17, 20),
            "Dealer wins! Dealer: 20, You: 17"
        );
        assert_eq!(RoundOutcome::Push.message(18, 18), "Push! Dealer: 18, You: 18");
        assert_eq!(
            RoundOutcome::Bust.message(25, 10),
            "Bust! You went over 21. You lose!"
        );
    }

    #[test]
    fn net_reflects_payout() {
        let result = RoundResult {
            outcome: RoundOutcome::Win,
            player_cards: Vec::new(),
            dealer_cards: Vec::new(),
            player_score: 20,
            dealer_score: 22,
            bet: 100,
            payout: 200,
        };
        assert_eq!(result.net(), 100);
        assert!(!result.outcome.is_loss());
        assert!(RoundOutcome::Bust.is_loss());
    }

    #[test]
    fn net_of_huge_stakes_does_not_wrap() {
        let half = usize::MAX / 2;
        let mut result = RoundResult {
            outcome: RoundOutcome::Win,
            player_cards: Vec::new(),
            dealer_cards: Vec::new(),
            player_score: 20,
            dealer_score: 18,
            bet: half,
            payout: half * 2,
        };
        assert_eq!(result.net(), half as i128);

        result.outcome = RoundOutcome::Lose;
        result.bet = usize::MAX;
        result.payout = 0;
        assert_eq!(result.net(), -(usize::MAX as i128));
    }
}
