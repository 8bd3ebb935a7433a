use tracing::info;

use crate::error::ResetError;

use super::{Game, Phase};

impl Game {
    /// Ends the session if the player is out of funds or out of rounds.
    ///
    /// Only takes effect between rounds; a round in progress always runs to
    /// its resolution. Returns whether the session is over.
    pub fn check_game_over(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return true;
        }
        if !self.phase.accepts_bets() {
            return false;
        }

        let broke = self.ledger.funds() == 0;
        let out_of_rounds = self.rounds_played >= self.options.round_cap;
        if broke || out_of_rounds {
            info!(
                rounds_played = self.rounds_played,
                bankroll = self.ledger.bankroll(),
                broke,
                out_of_rounds,
                "game over"
            );
            self.phase = Phase::GameOver;
            return true;
        }
        false
    }

    /// Returns whether the session is over.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Returns the number of resolved rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns how many more rounds may be dealt.
    #[must_use]
    pub const fn rounds_remaining(&self) -> u32 {
        self.options.round_cap.saturating_sub(self.rounds_played)
    }

    /// Starts a new session: restores the starting bankroll, drops any
    /// wager, clears the table, and zeroes the round counter.
    ///
    /// The round history is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ResetError::RoundInProgress`] between the deal and the
    /// resolution of a round. The game is left untouched.
    pub fn reset(&mut self) -> Result<(), ResetError> {
        if !self.phase.accepts_bets() && self.phase != Phase::GameOver {
            return Err(ResetError::RoundInProgress);
        }

        self.ledger.reset(self.options.starting_bankroll);
        self.player.clear();
        self.dealer.clear();
        self.rounds_played = 0;
        self.last_result = None;
        self.phase = Phase::Betting;
        self.check_game_over();
        Ok(())
    }
}
