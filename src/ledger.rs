//! Bankroll and wager bookkeeping.

use crate::error::{ActionError, BetError};
use crate::options::RoundingMode;
use crate::result::Outcome;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> u64 {
    match mode {
        RoundingMode::Up => amount.ceil() as u64,
        RoundingMode::Down => amount.floor() as u64,
        RoundingMode::Nearest => amount.round() as u64,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> u64 {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as u64,
        RoundingMode::Down => libm::floor(amount) as u64,
        RoundingMode::Nearest => libm::round(amount) as u64,
    }
}

/// The player's funds and the wager currently on the table.
///
/// Money only moves between the two when a bet is placed or doubled; it only
/// enters the bankroll from outside through [`Ledger::resolve_payout`]. A
/// lost wager stays with the house, a pushed wager comes back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    bankroll: u64,
    bet: u64,
    natural_payout: f64,
    rounding_natural: RoundingMode,
}

impl Ledger {
    /// Creates a ledger holding `bankroll` with nothing wagered.
    #[must_use]
    pub const fn new(bankroll: u64, natural_payout: f64, rounding_natural: RoundingMode) -> Self {
        Self {
            bankroll,
            bet: 0,
            natural_payout,
            rounding_natural,
        }
    }

    /// Returns the funds not currently wagered.
    #[must_use]
    pub const fn bankroll(&self) -> u64 {
        self.bankroll
    }

    /// Returns the outstanding wager.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Bankroll plus outstanding wager.
    #[must_use]
    pub const fn funds(&self) -> u64 {
        self.bankroll.saturating_add(self.bet)
    }

    /// Moves `amount` from the bankroll onto the wager.
    ///
    /// Successive bets accumulate.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if `amount` exceeds the
    /// bankroll. Nothing changes in that case.
    pub const fn place_bet(&mut self, amount: u64) -> Result<(), BetError> {
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        self.bankroll -= amount;
        self.bet += amount;
        Ok(())
    }

    /// Matches the outstanding wager from the bankroll.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InsufficientFunds`] if the bankroll is smaller
    /// than the wager. Nothing changes in that case.
    pub const fn double(&mut self) -> Result<(), ActionError> {
        if self.bankroll < self.bet {
            return Err(ActionError::InsufficientFunds);
        }

        self.bankroll -= self.bet;
        self.bet *= 2;
        Ok(())
    }

    /// Amount returned to the bankroll for `outcome` on the current wager.
    #[must_use]
    pub fn payout_for(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Win => self.bet.saturating_mul(2),
            Outcome::Blackjack => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let amount = (self.bet as f64) * self.natural_payout;
                round_amount(amount, self.rounding_natural)
            }
            Outcome::Push => self.bet,
            Outcome::Lose => 0,
        }
    }

    /// Credits the payout for `outcome` and clears the wager.
    ///
    /// Returns the amount credited.
    pub fn resolve_payout(&mut self, outcome: Outcome) -> u64 {
        let payout = self.payout_for(outcome);
        self.bankroll = self.bankroll.saturating_add(payout);
        self.bet = 0;
        payout
    }

    /// Restores `bankroll` and drops any outstanding wager.
    pub const fn reset(&mut self, bankroll: u64) {
        self.bankroll = bankroll;
        self.bet = 0;
    }
}
