//! Game engine and session management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::history::RoundRecord;
use crate::ledger::Ledger;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::snapshot::Snapshot;

mod actions;
mod bet;
mod dealer;
mod session;
pub mod state;

pub use state::{LegalActions, Phase};

/// A single-player blackjack session.
///
/// The game owns the deck, both hands, the phase, and the player's
/// [`Ledger`]. Every operation checks the phase before touching anything,
/// so a rejected call leaves the game exactly as it was.
///
/// A round runs: [`Game::place_bet`] → [`Game::deal`] → player actions →
/// [`Game::dealer_play`] → [`Game::resolve`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Bankroll and outstanding wager.
    ledger: Ledger,
    /// Cards left in this round's deck.
    deck: Deck,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand. The second card is the hole card.
    dealer: Hand,
    /// Current phase.
    phase: Phase,
    /// Rounds resolved since the session started.
    rounds_played: u32,
    /// Result of the most recently resolved round.
    last_result: Option<RoundResult>,
    /// Every resolved round, oldest first.
    history: Vec<RoundRecord>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Betting);
    /// assert_eq!(game.bankroll(), 2500);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let ledger = Ledger::new(
            options.starting_bankroll,
            options.natural_payout,
            options.rounding_natural,
        );

        let mut game = Self {
            options,
            ledger,
            deck: Deck::build(),
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::Betting,
            rounds_played: 0,
            last_result: None,
            history: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.check_game_over();
        game
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the funds not currently wagered.
    #[must_use]
    pub const fn bankroll(&self) -> u64 {
        self.ledger.bankroll()
    }

    /// Returns the outstanding wager.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.ledger.bet()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the cards not yet drawn this round.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in this round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the result of the most recently resolved round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns every resolved round, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Returns a view of the table for presentation.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player_cards: self.player.cards().to_vec(),
            dealer_cards: self.dealer.cards().to_vec(),
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
            bankroll: self.ledger.bankroll(),
            bet: self.ledger.bet(),
            phase: self.phase,
            rounds_played: self.rounds_played,
        }
    }

    /// Draws a card from the round's deck.
    ///
    /// A round uses at most a couple dozen cards, so running out of a fresh
    /// 52-card deck means the engine itself is broken.
    fn draw(&mut self) -> Card {
        self.deck
            .draw()
            .expect("a single round cannot exhaust a full deck")
    }
}
