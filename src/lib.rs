//! A single-deck, single-player blackjack rules engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that runs a bounded session of rounds:
//! betting, the initial deal, hit/stand/double down, dealer play, and
//! showdown with payout.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Game, GameOptions, Phase};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(100).unwrap();
//! game.deal().unwrap();
//!
//! if game.phase() == Phase::PlayerTurn {
//!     game.stand().unwrap();
//!     game.dealer_play().unwrap();
//! }
//!
//! let result = game.resolve().unwrap();
//! assert_eq!(game.bet(), 0);
//! assert_eq!(result.round, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod history;
pub mod ledger;
pub mod options;
pub mod result;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, DeckError, ResetError, ShowdownError};
pub use game::{Game, LegalActions, Phase};
pub use hand::{BLACKJACK, Hand};
pub use history::{Leaderboard, RoundRecord, ScoreEntry, ScoreStore};
pub use ledger::Ledger;
pub use options::{GameOptions, RoundingMode};
pub use result::{Outcome, Resolution, RoundResult};
pub use snapshot::Snapshot;
