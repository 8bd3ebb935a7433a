use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::BLACKJACK;
use crate::history::RoundRecord;
use crate::result::{Resolution, RoundResult};

use super::{Game, Phase};

impl Game {
    /// Performs one step of the dealer's turn.
    ///
    /// Below the stand threshold the dealer draws a card, which is returned.
    /// Once the threshold is reached the dealer stands and the round moves
    /// to [`Phase::RoundOver`]. A presentation layer can call this
    /// repeatedly to pace the dealer's draws.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, ShowdownError> {
        if self.phase != Phase::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let stands_on = self.options.dealer_stands_on.min(BLACKJACK);
        if self.dealer.total() >= stands_on {
            debug!(total = self.dealer.total(), "dealer stands");
            self.phase = Phase::RoundOver;
            return Ok(None);
        }

        let card = self.draw();
        self.dealer.add_card(card);
        let total = self.dealer.total();
        debug!(%card, total, "dealer draws");

        if total >= stands_on {
            self.phase = Phase::RoundOver;
        }
        Ok(Some(card))
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws until reaching the stand threshold (17 by default,
    /// soft totals included). Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.phase != Phase::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        while self.phase == Phase::DealerTurn {
            if let Some(card) = self.dealer_step()? {
                drawn_cards.push(card);
            }
        }

        Ok(drawn_cards)
    }

    /// Performs the showdown and settles the wager.
    ///
    /// This function:
    /// 1. Picks the deciding rule (busts, then naturals, then totals)
    /// 2. Pays out through the ledger and clears the wager
    /// 3. Counts the round and appends it to the history
    /// 4. Ends the session if funds or rounds have run out
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state. A round can
    /// therefore only be resolved once.
    pub fn resolve(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.phase != Phase::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let resolution = Resolution::evaluate(&self.player, &self.dealer);
        let outcome = resolution.outcome();
        let bet = self.ledger.bet();
        let payout = self.ledger.resolve_payout(outcome);
        self.rounds_played += 1;

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in i64")]
        let net = payout as i64 - bet as i64;

        let result = RoundResult {
            round: self.rounds_played,
            resolution,
            outcome,
            bet,
            payout,
            net,
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
            bankroll: self.ledger.bankroll(),
        };

        info!(
            round = result.round,
            ?resolution,
            ?outcome,
            bet,
            payout,
            bankroll = result.bankroll,
            "round resolved"
        );

        self.history.push(RoundRecord::from(&result));
        self.last_result = Some(result);

        self.phase = Phase::Betting;
        self.check_game_over();

        Ok(result)
    }
}
