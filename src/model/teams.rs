use indexmap::IndexMap;

use crate::{
    api::api_structs::{MatchRecord, PlayerRecord},
    model::structures::{match_outcome::MatchOutcome, resolved_outcome::ResolvedOutcome, side::Side}
};

/// Player lookup keyed by external (discord) id, in backend delivery order.
pub struct Roster {
    players: IndexMap<String, PlayerRecord>
}

impl Roster {
    pub fn from_players(players: &[PlayerRecord]) -> Roster {
        let mut map = IndexMap::new();
        for player in players {
            if let Some(discord_id) = &player.discord_id {
                map.insert(discord_id.clone(), player.clone());
            }
        }

        Roster { players: map }
    }

    pub fn get(&self, discord_id: &str) -> Option<&PlayerRecord> {
        self.players.get(discord_id)
    }

    /// Resolves an external id to a display name, falling back to the raw id
    /// when no matching player record exists.
    pub fn display_name<'a>(&'a self, discord_id: &'a str) -> &'a str {
        match self.players.get(discord_id) {
            Some(player) => player.display_name(),
            None => discord_id
        }
    }
}

/// Splits a delimited membership list into trimmed participant ids.
pub fn team_members(list: Option<&str>) -> Vec<String> {
    match list {
        Some(list) => list
            .split(',')
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .map(|id| id.to_string())
            .collect(),
        None => Vec::new()
    }
}

/// Projects a membership list through the roster for display.
pub fn team_display_names(list: Option<&str>, roster: &Roster) -> Vec<String> {
    team_members(list)
        .iter()
        .map(|id| roster.display_name(id).to_string())
        .collect()
}

/// Determines which side a participant played on by membership containment.
/// An absent or unresolvable participant is `Unknown`, never attributed to
/// a side by default.
pub fn resolve_side(m: &MatchRecord, participant_id: Option<&str>) -> Side {
    let participant_id = match participant_id {
        Some(id) => id,
        None => return Side::Unknown
    };

    if team_members(m.blue_team.as_deref()).iter().any(|id| id == participant_id) {
        return Side::Blue;
    }
    if team_members(m.red_team.as_deref()).iter().any(|id| id == participant_id) {
        return Side::Red;
    }

    Side::Unknown
}

/// Labels a match result relative to one side. A decided outcome cannot be
/// attributed to an unknown side, so it reads as unreported rather than as a
/// fabricated loss.
pub fn resolve_outcome(outcome: Option<MatchOutcome>, side: Side) -> ResolvedOutcome {
    match (outcome, side) {
        (None, _) => ResolvedOutcome::Unreported,
        (Some(MatchOutcome::Draw), _) => ResolvedOutcome::Draw,
        (Some(MatchOutcome::BlueWin), Side::Blue) => ResolvedOutcome::Win,
        (Some(MatchOutcome::RedWin), Side::Red) => ResolvedOutcome::Win,
        (Some(_), Side::Unknown) => ResolvedOutcome::Unreported,
        (Some(_), _) => ResolvedOutcome::Loss
    }
}

/// Attributes the stored winning/losing scores to (blue, red).
///
/// The winning code decides which side receives `winning_score`; this is
/// independent of any focal participant. An unreported match yields no
/// scores regardless of what is stored.
pub fn resolve_scores(m: &MatchRecord) -> (Option<i32>, Option<i32>) {
    match m.match_outcome {
        None => (None, None),
        Some(MatchOutcome::BlueWin) => (m.winning_score, m.losing_score),
        Some(MatchOutcome::RedWin) => (m.losing_score, m.winning_score),
        // A reported draw carries equal scores; both sides read losing_score
        Some(MatchOutcome::Draw) => (m.losing_score, m.losing_score)
    }
}
