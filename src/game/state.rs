//! Game phase types.

/// The turn flag. Exactly one phase is active and it alone decides which
/// operations are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Accepting bets for the next round.
    Betting,
    /// Waiting for the player to hit, stand, or double down.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and is waiting to be resolved.
    RoundOver,
    /// Out of funds or out of rounds; only a reset leaves this phase.
    GameOver,
    /// The last bet exceeded the bankroll; a smaller bet may follow.
    BetRejected,
}

impl Phase {
    /// Whether wagers may be placed.
    #[must_use]
    pub const fn accepts_bets(self) -> bool {
        matches!(self, Self::Betting | Self::BetRejected)
    }

    /// Whether hit, stand, and double down are legal.
    #[must_use]
    pub const fn is_player_turn(self) -> bool {
        matches!(self, Self::PlayerTurn)
    }
}

/// Which player actions are currently legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegalActions {
    /// Hit is legal.
    pub hit: bool,
    /// Stand is legal.
    pub stand: bool,
    /// Double down is legal.
    pub double_down: bool,
}
