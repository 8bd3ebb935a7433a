//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The session is over; reset it before betting again.
    #[error("game over")]
    GameOver,
    /// Bets can only be changed between rounds.
    #[error("invalid game state for betting")]
    InvalidState,
    /// The wager exceeds the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The session is over; reset it before dealing again.
    #[error("game over")]
    GameOver,
    /// A round is already in progress or awaiting resolution.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No wager has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// The supplied deck is missing cards.
    #[error("deck has {0} cards, a round needs a full deck")]
    IncompleteDeck(usize),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Doubling is only possible on the first two cards.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Bankroll does not cover doubling the wager.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that can occur during the dealer turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for this step.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Errors that can occur when resetting a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResetError {
    /// A dealt round has not been resolved yet.
    #[error("a round is in progress")]
    RoundInProgress,
}

/// Errors that can occur while building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The card was requested more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}
