//! Bankroll and wager bookkeeping.

use crate::error::BetError;
use crate::snapshot::LedgerSnapshot;

/// Tracks the player's money across rounds.
///
/// Placing a bet moves money from the bankroll into the current bet, so
/// `bankroll + current_bet` only changes when a round pays out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    initial_bankroll: usize,
    bankroll: usize,
    current_bet: usize,
    wins: u32,
    losses: u32,
}

impl Ledger {
    /// Creates a ledger holding the initial bankroll.
    #[must_use]
    pub const fn new(initial_bankroll: usize) -> Self {
        Self {
            initial_bankroll,
            bankroll: initial_bankroll,
            current_bet: 0,
            wins: 0,
            losses: 0,
        }
    }

    /// Returns the money not currently wagered.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the amount wagered on the next or current round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the number of rounds won.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Returns the number of rounds lost.
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    /// Returns the bankroll restored by [`Ledger::reset`].
    #[must_use]
    pub const fn initial_bankroll(&self) -> usize {
        self.initial_bankroll
    }

    /// Moves `amount` from the bankroll onto the current bet.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::ZeroBet`] for a zero amount and
    /// [`BetError::InsufficientFunds`] when the bankroll cannot cover it.
    /// Returns [`BetError::PayoutOverflow`] when a win on the resulting bet
    /// could not be credited without overflowing the bankroll.
    pub const fn place(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds {
                amount,
                bankroll: self.bankroll,
            });
        }

        let bankroll = self.bankroll - amount;
        let bet = self.current_bet + amount;
        let payout_fits = matches!(
            bet.checked_mul(2),
            Some(payout) if bankroll.checked_add(payout).is_some()
        );
        if !payout_fits {
            return Err(BetError::PayoutOverflow { amount });
        }

        self.bankroll = bankroll;
        self.current_bet = bet;
        Ok(())
    }

    /// Returns the whole current bet to the bankroll.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NoActiveBet`] when nothing is wagered.
    pub const fn clear(&mut self) -> Result<usize, BetError> {
        if self.current_bet == 0 {
            return Err(BetError::NoActiveBet);
        }

        let returned = self.current_bet;
        self.bankroll += returned;
        self.current_bet = 0;
        Ok(returned)
    }

    /// Settles a win: the stake comes back doubled.
    ///
    /// Returns the amount credited to the bankroll.
    pub const fn settle_win(&mut self) -> usize {
        let payout = self.current_bet * 2;
        self.bankroll += payout;
        self.current_bet = 0;
        self.wins += 1;
        payout
    }

    /// Settles a loss: the stake was already debited, so it is simply dropped.
    pub const fn settle_loss(&mut self) {
        self.current_bet = 0;
        self.losses += 1;
    }

    /// Settles a push: the stake is returned with no gain.
    ///
    /// Returns the amount credited to the bankroll.
    pub const fn settle_push(&mut self) -> usize {
        let payout = self.current_bet;
        self.bankroll += payout;
        self.current_bet = 0;
        payout
    }

    /// Restores the initial bankroll and zeroes the bet and counters.
    pub const fn reset(&mut self) {
        *self = Self::new(self.initial_bankroll);
    }

    /// Returns a copy of the ledger's public figures.
    #[must_use]
    pub const fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            bankroll: self.bankroll,
            current_bet: self.current_bet,
            wins: self.wins,
            losses: self.losses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bets_accumulate_and_conserve_money() {
        let mut ledger = Ledger::new(1000);
        ledger.place(50).unwrap();
        ledger.place(25).unwrap();

        assert_eq!(ledger.bankroll(), 925);
        assert_eq!(ledger.current_bet(), 75);
        assert_eq!(ledger.bankroll() + ledger.current_bet(), 1000);
    }

    #[test]
    fn invalid_bets_leave_ledger_untouched() {
        let mut ledger = Ledger::new(100);
        let before = ledger.clone();

        assert_eq!(ledger.place(0), Err(BetError::ZeroBet));
        assert_eq!(
            ledger.place(101),
            Err(BetError::InsufficientFunds {
                amount: 101,
                bankroll: 100
            })
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn whole_bankroll_can_be_wagered() {
        let mut ledger = Ledger::new(100);
        ledger.place(100).unwrap();
        assert_eq!(ledger.bankroll(), 0);
    }

    #[test]
    fn clear_returns_stake() {
        let mut ledger = Ledger::new(1000);
        assert_eq!(ledger.clear(), Err(BetError::NoActiveBet));

        ledger.place(50).unwrap();
        assert_eq!(ledger.clear(), Ok(50));
        assert_eq!(ledger.bankroll(), 1000);
        assert_eq!(ledger.current_bet(), 0);
    }

    #[test]
    fn settlement_paths() {
        let mut ledger = Ledger::new(1000);

        ledger.place(100).unwrap();
        assert_eq!(ledger.settle_win(), 200);
        assert_eq!(ledger.bankroll(), 1100);
        assert_eq!(ledger.wins(), 1);

        ledger.place(100).unwrap();
        ledger.settle_loss();
        assert_eq!(ledger.bankroll(), 1000);
        assert_eq!(ledger.losses(), 1);

        ledger.place(100).unwrap();
        assert_eq!(ledger.settle_push(), 100);
        assert_eq!(ledger.bankroll(), 1000);
        assert_eq!((ledger.wins(), ledger.losses()), (1, 1));
        assert_eq!(ledger.current_bet(), 0);
    }

    #[test]
    fn bets_whose_win_cannot_be_credited_are_refused() {
        let mut ledger = Ledger::new(usize::MAX);
        let before = ledger.clone();

        assert_eq!(
            ledger.place(usize::MAX),
            Err(BetError::PayoutOverflow { amount: usize::MAX })
        );
        assert_eq!(ledger.place(1), Err(BetError::PayoutOverflow { amount: 1 }));
        assert!(BetError::PayoutOverflow { amount: 1 }.is_invalid_bet());
        assert_eq!(ledger, before);
    }

    #[test]
    fn largest_creditable_bet_settles_without_overflow() {
        let half = usize::MAX / 2;
        let mut ledger = Ledger::new(half);
        ledger.place(half).unwrap();

        assert_eq!(ledger.settle_win(), half * 2);
        assert_eq!(ledger.bankroll(), usize::MAX - 1);

        // near the ceiling only small bets can still be paid
        assert!(matches!(
            ledger.place(ledger.bankroll()),
            Err(BetError::PayoutOverflow { .. })
        ));
        ledger.place(1).unwrap();
        assert_eq!(ledger.settle_push(), 1);
        assert_eq!(ledger.bankroll(), usize::MAX - 1);
    }

    #[test]
    fn reset_restores_initial_stake() {
        let mut ledger = Ledger::new(500);
        ledger.place(200).unwrap();
        ledger.settle_loss();
        ledger.reset();

        assert_eq!(ledger, Ledger::new(500));
        assert_eq!(ledger.initial_bankroll(), 500);
    }
}
