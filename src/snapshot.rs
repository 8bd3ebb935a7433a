//! Read-only view of the game for presentation layers.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Phase;

/// Everything a presentation layer needs to draw the table.
///
/// Totals are always the true totals. Hiding the dealer's hole card while
/// the player is deciding is up to the consumer; see
/// [`Snapshot::conceals_dealer`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Player cards in deal order.
    pub player_cards: Vec<Card>,
    /// Dealer cards in deal order; the second card is the hole card.
    pub dealer_cards: Vec<Card>,
    /// Player total.
    pub player_total: u8,
    /// Dealer total, hole card included.
    pub dealer_total: u8,
    /// Funds not currently wagered.
    pub bankroll: u64,
    /// Outstanding wager.
    pub bet: u64,
    /// Current phase.
    pub phase: Phase,
    /// Rounds resolved so far this session.
    pub rounds_played: u32,
}

impl Snapshot {
    /// Player card codes.
    #[must_use]
    pub fn player_codes(&self) -> Vec<String> {
        self.player_cards.iter().map(Card::code).collect()
    }

    /// Dealer card codes.
    #[must_use]
    pub fn dealer_codes(&self) -> Vec<String> {
        self.dealer_cards.iter().map(Card::code).collect()
    }

    /// Whether the dealer's hole card and total should be hidden.
    #[must_use]
    pub const fn conceals_dealer(&self) -> bool {
        matches!(self.phase, Phase::PlayerTurn)
    }
}
