use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Dealer draws until reaching the stand value (17 by default) or busting.
    ///
    /// The dealer stands on any 17, soft or hard. Returns the number of
    /// cards drawn.
    pub(super) fn dealer_play(&mut self) -> usize {
        let mut drawn = 0;

        while self.dealer_hand.value() < self.options.dealer_stands_on
            && !self.dealer_hand.is_bust()
        {
            self.dealer_hand.add_card(self.shoe.draw());
            drawn += 1;
        }

        tracing::debug!(
            drawn,
            dealer_score = self.dealer_hand.value(),
            "dealer stands"
        );

        drawn
    }

    /// Pays out the round, records it as the last result and returns to betting.
    pub(super) fn settle(&mut self, outcome: RoundOutcome) {
        debug_assert_eq!(self.state, GameState::Settling);

        let bet = self.ledger.current_bet();
        let payout = match outcome {
            RoundOutcome::Win => self.ledger.settle_win(),
            RoundOutcome::Push => self.ledger.settle_push(),
            RoundOutcome::Lose | RoundOutcome::Bust => {
                self.ledger.settle_loss();
                0
            }
        };

        let result = RoundResult {
            outcome,
            player_cards: self.player_hand.cards().to_vec(),
            dealer_cards: self.dealer_hand.cards().to_vec(),
            player_score: self.player_hand.value(),
            dealer_score: self.dealer_hand.value(),
            bet,
            payout,
        };

        tracing::info!(
            ?outcome,
            player_score = result.player_score,
            dealer_score = result.dealer_score,
            bet,
            payout,
            bankroll = self.ledger.bankroll(),
            "round settled"
        );

        self.message = result.message();
        self.last_result = Some(result);
        self.clear_hands();
        self.state = GameState::Betting;
    }
}
