//! Win record types shared by the store and the HTTP layer.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Outcome of a single finished game round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Winner {
    /// The human player won.
    #[strum(serialize = "Player")]
    Player,
    /// The computer opponent won.
    #[strum(serialize = "AI")]
    Ai,
    /// Board filled with no winner.
    #[strum(serialize = "Tie")]
    Tie,
}

impl Winner {
    /// All recognized winners.
    pub const ALL: [Winner; 3] = [Winner::Player, Winner::Ai, Winner::Tie];

    /// Parse a winner label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::from_str(label).ok()
    }
}

/// Running tally of game outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WinRecord {
    /// Games won by the player.
    pub player_wins: u64,
    /// Games won by the AI.
    pub ai_wins: u64,
    /// Games ending in a tie.
    pub ties: u64,
}

impl WinRecord {
    /// Total number of recorded games.
    pub fn total(&self) -> u64 {
        self.player_wins
            .saturating_add(self.ai_wins)
            .saturating_add(self.ties)
    }

    /// Count for a single winner.
    pub fn count(&self, winner: Winner) -> u64 {
        match winner {
            Winner::Player => self.player_wins,
            Winner::Ai => self.ai_wins,
            Winner::Tie => self.ties,
        }
    }

    /// Bump the counter for `winner` by one.
    pub(crate) fn increment(&mut self, winner: Winner) {
        let slot = match winner {
            Winner::Player => &mut self.player_wins,
            Winner::Ai => &mut self.ai_wins,
            Winner::Tie => &mut self.ties,
        };
        *slot = slot.saturating_add(1);
    }
}
