//! Game state types.

/// Where the round state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// Accepting bets; resting state between rounds.
    #[default]
    Betting,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand and the ledger is settled.
    ///
    /// Only held inside a single `stand` call; callers never observe it.
    Settling,
}

impl GameState {
    /// Returns whether a round is underway (cards are on the table).
    #[must_use]
    pub const fn is_round_active(self) -> bool {
        !matches!(self, Self::Betting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_betting_is_between_rounds() {
        assert!(!GameState::Betting.is_round_active());
        assert!(GameState::PlayerTurn.is_round_active());
        assert!(GameState::Settling.is_round_active());
        assert!(!GameState::default().is_round_active());
    }
}
