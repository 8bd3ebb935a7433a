use tracing::{debug, warn};

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::error::{BetError, DealError};
use crate::hand::BLACKJACK;

use super::{Game, Phase};

impl Game {
    /// Adds `amount` to the wager for the next round.
    ///
    /// Bets accumulate until the round is dealt, so several chips can be
    /// placed one after another. A bet larger than the bankroll moves the
    /// game to [`Phase::BetRejected`] and changes nothing else; the next
    /// accepted bet returns it to [`Phase::Betting`].
    ///
    /// # Errors
    ///
    /// Returns an error if the session is over, a round is in progress, or
    /// the player lacks funds.
    pub fn place_bet(&mut self, amount: u64) -> Result<(), BetError> {
        match self.phase {
            Phase::GameOver => return Err(BetError::GameOver),
            phase if !phase.accepts_bets() => return Err(BetError::InvalidState),
            _ => {}
        }

        if let Err(err) = self.ledger.place_bet(amount) {
            warn!(
                amount,
                bankroll = self.ledger.bankroll(),
                "bet exceeds bankroll"
            );
            self.phase = Phase::BetRejected;
            return Err(err);
        }

        self.phase = Phase::Betting;
        Ok(())
    }

    /// Deals a new round from a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is over, a round is in progress, or
    /// no bet has been placed.
    pub fn deal(&mut self) -> Result<(), DealError> {
        self.ensure_can_deal()?;
        let deck = Deck::shuffled(&mut self.rng);
        self.start_round(deck);
        Ok(())
    }

    /// Deals a new round from `deck` instead of a shuffled one.
    ///
    /// Cards are dealt player, dealer, player, dealer from the top of the
    /// deck; build a deck with [`Deck::stacked`] to replay a known round.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is over, a round is in progress, no
    /// bet has been placed, or cards have already been drawn from `deck`.
    pub fn deal_from(&mut self, deck: Deck) -> Result<(), DealError> {
        self.ensure_can_deal()?;
        if deck.len() != DECK_SIZE {
            return Err(DealError::IncompleteDeck(deck.len()));
        }
        self.start_round(deck);
        Ok(())
    }

    fn ensure_can_deal(&mut self) -> Result<(), DealError> {
        if self.check_game_over() {
            return Err(DealError::GameOver);
        }
        if !self.phase.accepts_bets() {
            return Err(DealError::InvalidState);
        }
        if self.ledger.bet() == 0 {
            return Err(DealError::NoBet);
        }
        Ok(())
    }

    fn start_round(&mut self, deck: Deck) {
        self.deck = deck;
        self.player.clear();
        self.dealer.clear();
        self.last_result = None;

        for _ in 0..2 {
            let card = self.draw();
            self.player.add_card(card);
            let card = self.draw();
            self.dealer.add_card(card);
        }

        let player_total = self.player.total();
        let dealer_total = self.dealer.total();
        debug!(player_total, dealer_total, bet = self.ledger.bet(), "dealt");

        // A dealer natural is only revealed at showdown unless the player
        // also holds 21.
        self.phase = if player_total == BLACKJACK {
            Phase::RoundOver
        } else {
            Phase::PlayerTurn
        };
    }
}
