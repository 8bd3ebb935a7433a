use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;

use super::{Game, LegalActions, Phase};

impl Game {
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if !self.phase.is_player_turn() {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Draws a card into the player's hand and ends the turn at 21 or more.
    fn player_draw(&mut self) -> Card {
        let card = self.draw();
        self.player.add_card(card);

        let total = self.player.total();
        debug!(%card, total, "player draws");

        // Neither a bust nor 21 can be changed by the dealer drawing.
        if total >= BLACKJACK {
            self.phase = Phase::RoundOver;
        }
        card
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching 21 or going bust ends the round without a dealer turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;
        Ok(self.player_draw())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        debug!(total = self.player.total(), "player stands");
        self.phase = Phase::DealerTurn;
        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand does not
    /// hold exactly two cards, or the bankroll cannot match the wager.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        if self.player.len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        self.ledger.double()?;
        debug!(bet = self.ledger.bet(), "player doubles down");

        let card = self.player_draw();
        if self.phase == Phase::PlayerTurn {
            self.phase = Phase::DealerTurn;
        }

        Ok(card)
    }

    /// Returns which player actions are legal right now.
    #[must_use]
    pub fn legal_actions(&self) -> LegalActions {
        if !self.phase.is_player_turn() {
            return LegalActions::default();
        }

        LegalActions {
            hit: true,
            stand: true,
            double_down: self.player.len() == 2 && self.ledger.bankroll() >= self.ledger.bet(),
        }
    }
}
