//! Game configuration options.

use crate::hand::BLACKJACK;

/// Rounding mode for payouts that are not whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    #[default]
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_bankroll(1000)
///     .with_round_cap(10)
///     .with_natural_payout(2.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Bankroll at the start of a session and after a reset.
    pub starting_bankroll: u64,
    /// Dealer stands once their total reaches this value. Anything above
    /// 21 is treated as 21.
    pub dealer_stands_on: u8,
    /// Number of rounds after which the session ends.
    pub round_cap: u32,
    /// Total returned for a natural blackjack, as a multiple of the bet
    /// (stake included).
    pub natural_payout: f64,
    /// Rounding mode for natural blackjack payouts.
    pub rounding_natural: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 2500,
            dealer_stands_on: 17,
            round_cap: 5,
            natural_payout: 2.0,
            rounding_natural: RoundingMode::Down,
        }
    }
}

impl GameOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(500);
    /// assert_eq!(options.starting_bankroll, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: u64) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the total at which the dealer stands.
    ///
    /// Values above 21 are clamped to 21.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(30);
    /// assert_eq!(options.dealer_stands_on, 21);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = if total > BLACKJACK { BLACKJACK } else { total };
        self
    }

    /// Sets the number of rounds in a session.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_round_cap(3);
    /// assert_eq!(options.round_cap, 3);
    /// ```
    #[must_use]
    pub const fn with_round_cap(mut self, rounds: u32) -> Self {
        self.round_cap = rounds;
        self
    }

    /// Sets the natural blackjack payout multiplier.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_natural_payout(2.5);
    /// assert_eq!(options.natural_payout, 2.5);
    /// ```
    #[must_use]
    pub const fn with_natural_payout(mut self, multiplier: f64) -> Self {
        self.natural_payout = multiplier;
        self
    }

    /// Sets the rounding mode for natural blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_natural(RoundingMode::Up);
    /// assert_eq!(options.rounding_natural, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_natural(mut self, mode: RoundingMode) -> Self {
        self.rounding_natural = mode;
        self
    }
}
