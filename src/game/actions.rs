use alloc::format;

use crate::error::ActionError;
use crate::result::RoundOutcome;
use crate::snapshot::RoundSnapshot;

use super::{Game, GameState};

impl Game {
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if matches!(self.state, GameState::PlayerTurn) {
            Ok(())
        } else {
            Err(ActionError::NotPlayerTurn)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round on the spot as a loss; the dealer does
    /// not draw and the game returns to betting.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<RoundSnapshot, ActionError> {
        self.ensure_player_turn()
            .inspect_err(|err| tracing::debug!(%err, "hit rejected"))?;

        let card = self.shoe.draw();
        self.player_hand.add_card(card);

        let player_score = self.player_hand.value();
        tracing::debug!(rank = card.rank, player_score, "player hits");

        if self.player_hand.is_bust() {
            self.state = GameState::Settling;
            self.dealer_hand.reveal_hole();
            self.settle(RoundOutcome::Bust);
        } else {
            self.message = format!("Score: {player_score}. Hit again or Stand?");
        }

        Ok(self.snapshot())
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// Reveals the dealer's hole card, plays out the dealer's hand and
    /// settles the round.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<RoundSnapshot, ActionError> {
        self.ensure_player_turn()
            .inspect_err(|err| tracing::debug!(%err, "stand rejected"))?;

        tracing::debug!(player_score = self.player_hand.value(), "player stands");

        self.state = GameState::Settling;
        self.dealer_hand.reveal_hole();
        let drawn = self.dealer_play();
        tracing::debug!(drawn, "dealer turn over");

        let outcome = RoundOutcome::decide(self.player_hand.value(), self.dealer_hand.value());
        self.settle(outcome);

        Ok(self.snapshot())
    }
}
