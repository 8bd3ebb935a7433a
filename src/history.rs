//! Round history and leaderboard records.
//!
//! The engine appends a [`RoundRecord`] after every resolved round. Storing
//! and ranking scores across sessions is left to a [`ScoreStore`]; the
//! in-memory [`Leaderboard`] is enough for a single process.

use alloc::string::String;
use alloc::vec::Vec;

use crate::result::{Outcome, RoundResult};

/// One resolved round as kept in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRecord {
    /// One-based round index.
    pub round: u32,
    /// Settlement of the wager.
    pub outcome: Outcome,
    /// The wager at showdown.
    pub bet: u64,
    /// Amount credited back.
    pub payout: u64,
    /// Bankroll after the payout.
    pub bankroll: u64,
}

impl From<&RoundResult> for RoundRecord {
    fn from(result: &RoundResult) -> Self {
        Self {
            round: result.round,
            outcome: result.outcome,
            bet: result.bet,
            payout: result.payout,
            bankroll: result.bankroll,
        }
    }
}

/// A leaderboard submission.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreEntry {
    /// Player name.
    pub name: String,
    /// Bankroll change since the start of the session.
    #[cfg_attr(feature = "serde", serde(rename = "moneyWon"))]
    pub net: i64,
    /// Whether the submitted round was won.
    #[cfg_attr(feature = "serde", serde(with = "win_flag"))]
    pub win: bool,
}

impl ScoreEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(name: impl Into<String>, net: i64, win: bool) -> Self {
        Self {
            name: name.into(),
            net,
            win,
        }
    }
}

impl RoundResult {
    /// Builds the leaderboard entry for this round.
    #[must_use]
    pub fn score_entry(&self, name: impl Into<String>, starting_bankroll: u64) -> ScoreEntry {
        #[expect(clippy::cast_possible_wrap, reason = "bankroll values fit in i64")]
        let net = self.bankroll as i64 - starting_bankroll as i64;
        ScoreEntry::new(name, net, self.outcome.is_win())
    }
}

/// Append-only score storage.
pub trait ScoreStore {
    /// Stores a finished-round entry.
    fn submit(&mut self, entry: ScoreEntry);

    /// Returns every entry, highest net first.
    fn ranked(&self) -> Vec<ScoreEntry>;
}

/// In-memory [`ScoreStore`].
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing has been submitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ScoreStore for Leaderboard {
    fn submit(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
    }

    fn ranked(&self) -> Vec<ScoreEntry> {
        let mut ranked = self.entries.clone();
        // Stable: equal scores keep submission order.
        ranked.sort_by(|a, b| b.net.cmp(&a.net));
        ranked
    }
}

// The score endpoint sends the win flag as 0/1.
#[cfg(feature = "serde")]
mod win_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(win: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*win))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(u8::deserialize(deserializer)? != 0)
    }
}
