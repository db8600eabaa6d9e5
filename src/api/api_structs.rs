use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::model::structures::match_outcome::MatchOutcome;

/// A player as delivered by the backend. Ranks are recomputed locally by
/// `model::leaderboard::assign_ranks` and may be absent in the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: i32,
    pub discord_id: Option<String>,
    pub player_name: Option<String>,
    pub current_rating: Option<f64>,
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub losses: i32,
    #[serde(default)]
    pub draws: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub active_rank: Option<i32>,
    #[serde(default)]
    pub all_time_rank: Option<i32>
}

impl PlayerRecord {
    /// Name shown in tables and exports. Falls back to the external id so a
    /// half-populated record still renders something identifiable.
    pub fn display_name(&self) -> &str {
        match &self.player_name {
            Some(name) => name.as_str(),
            None => self.discord_id.as_deref().unwrap_or("<unknown>")
        }
    }
}

/// A reported (or pending) match. Team membership is a comma-delimited list
/// of external participant ids; either side may be missing entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: i32,
    pub match_id: Option<i32>,
    pub blue_team: Option<String>,
    pub red_team: Option<String>,
    pub winning_score: Option<i32>,
    pub losing_score: Option<i32>,
    pub map: Option<String>,
    pub server: Option<String>,
    // None = unreported. When unreported, both stored scores are ignored.
    pub match_outcome: Option<MatchOutcome>,
    pub stats_url: Option<String>,
    pub created_at: DateTime<FixedOffset>
}

/// One historical rating snapshot for a player.
///
/// `sequence_id` is authoritative for display order: corrections can be
/// backfilled with an earlier `created_at` but a later sequence id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingEvent {
    pub sequence_id: i32,
    pub rating: f64,
    pub created_at: DateTime<FixedOffset>,
    pub match_id: Option<i32>
}
