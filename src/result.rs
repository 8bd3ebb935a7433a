//! Round result types for showdown.

use crate::hand::Hand;

/// How the player's wager settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player wins with a natural blackjack.
    Blackjack,
    /// Player loses (player busts, dealer natural, or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Returns whether the player won the round.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack)
    }
}

/// The showdown rule that decided a round.
///
/// Rules are checked in declaration order and exactly one fires per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21 and the player did not.
    DealerBust,
    /// Both hands are naturals.
    NaturalPush,
    /// Only the player has a natural.
    PlayerNatural,
    /// Only the dealer has a natural.
    DealerNatural,
    /// Player total beats the dealer total.
    PlayerHigher,
    /// Dealer total beats the player total.
    DealerHigher,
    /// Totals are equal.
    TotalsTied,
}

impl Resolution {
    /// Applies the showdown rules to the final hands.
    #[must_use]
    pub fn evaluate(player: &Hand, dealer: &Hand) -> Self {
        let player_total = player.total();
        let dealer_total = dealer.total();

        if player.is_bust() {
            return Self::PlayerBust;
        }
        if dealer.is_bust() {
            return Self::DealerBust;
        }

        match (player.is_natural_blackjack(), dealer.is_natural_blackjack()) {
            (true, true) => return Self::NaturalPush,
            (true, false) => return Self::PlayerNatural,
            (false, true) => return Self::DealerNatural,
            (false, false) => {}
        }

        match player_total.cmp(&dealer_total) {
            core::cmp::Ordering::Greater => Self::PlayerHigher,
            core::cmp::Ordering::Less => Self::DealerHigher,
            core::cmp::Ordering::Equal => Self::TotalsTied,
        }
    }

    /// Settlement for the player's wager.
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            Self::DealerBust | Self::PlayerHigher => Outcome::Win,
            Self::PlayerNatural => Outcome::Blackjack,
            Self::PlayerBust | Self::DealerNatural | Self::DealerHigher => Outcome::Lose,
            Self::NaturalPush | Self::TotalsTied => Outcome::Push,
        }
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// One-based index of the round within the session.
    pub round: u32,
    /// The rule that decided the round.
    pub resolution: Resolution,
    /// Settlement of the wager.
    pub outcome: Outcome,
    /// The wager at showdown (doubled if the player doubled down).
    pub bet: u64,
    /// Amount credited back to the bankroll.
    pub payout: u64,
    /// Net result (positive = profit, negative = loss).
    pub net: i64,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Bankroll after the payout.
    pub bankroll: u64,
}
