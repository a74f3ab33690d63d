//! Read-only views of the game handed to the presentation layer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameState;
use crate::result::RoundOutcome;

/// The ledger's public figures at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LedgerSnapshot {
    /// Money not currently wagered.
    pub bankroll: usize,
    /// Money wagered on the current or next round.
    pub current_bet: usize,
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
}

/// A dealer card as the player sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DealerCard {
    /// The face-down hole card.
    Hidden,
    /// A face-up card.
    Revealed(Card),
}

impl DealerCard {
    /// Returns the card if it is face up.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::Hidden => None,
            Self::Revealed(card) => Some(*card),
        }
    }

    /// Returns whether the card is face down.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Everything the presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSnapshot {
    /// The state the game is in after the operation.
    pub state: GameState,
    /// The player's cards.
    pub player_cards: Vec<Card>,
    /// The dealer's cards, with the hole card hidden during the player's turn.
    pub dealer_cards: Vec<DealerCard>,
    /// The player's score.
    pub player_score: u8,
    /// The dealer's score over the face-up cards only.
    pub dealer_score: u8,
    /// Whether [`RoundSnapshot::dealer_score`] is partial because the hole card is down.
    pub dealer_score_partial: bool,
    /// Outcome of the round just settled, if any.
    pub outcome: Option<RoundOutcome>,
    /// The ledger after the operation.
    pub ledger: LedgerSnapshot,
    /// Human-readable status line.
    pub message: String,
}
