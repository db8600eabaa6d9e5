use chrono::{DateTime, FixedOffset};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    api::api_structs::{MatchRecord, PlayerRecord, RatingEvent},
    model::structures::match_outcome::MatchOutcome
};

pub fn generate_player(
    id: i32,
    discord_id: &str,
    player_name: &str,
    current_rating: Option<f64>,
    wins: i32,
    losses: i32,
    draws: i32,
    is_active: bool
) -> PlayerRecord {
    PlayerRecord {
        id,
        discord_id: Some(discord_id.to_string()),
        player_name: Some(player_name.to_string()),
        current_rating,
        wins,
        losses,
        draws,
        is_active,
        active_rank: None,
        all_time_rank: None
    }
}

/// Deterministic bulk player fixture. Ratings and records come from a seeded
/// RNG so tests are reproducible.
pub fn generate_players(n: i32) -> Vec<PlayerRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    (1..=n)
        .map(|i| {
            let wins = rng.random_range(0..50);
            let losses = rng.random_range(0..50);
            generate_player(
                i,
                &(1000 + i).to_string(),
                &format!("player_{}", i),
                Some(rng.random_range(600.0..1800.0)),
                wins,
                losses,
                rng.random_range(0..10),
                i % 4 != 0
            )
        })
        .collect()
}

pub fn generate_match(
    id: i32,
    blue_team: Option<&str>,
    red_team: Option<&str>,
    outcome: Option<MatchOutcome>
) -> MatchRecord {
    let mut m = generate_match_on(id, "2024-09-01T00:00:00+00:00", outcome);
    m.blue_team = blue_team.map(|t| t.to_string());
    m.red_team = red_team.map(|t| t.to_string());
    m
}

pub fn generate_match_on(id: i32, created_at: &str, outcome: Option<MatchOutcome>) -> MatchRecord {
    MatchRecord {
        id,
        match_id: Some(id),
        blue_team: None,
        red_team: None,
        winning_score: None,
        losing_score: None,
        map: None,
        server: None,
        match_outcome: outcome,
        stats_url: None,
        created_at: parse_timestamp(created_at)
    }
}

pub fn generate_rating_event(
    sequence_id: i32,
    rating: f64,
    created_at: &str,
    match_id: Option<i32>
) -> RatingEvent {
    RatingEvent {
        sequence_id,
        rating,
        created_at: parse_timestamp(created_at),
        match_id
    }
}

fn parse_timestamp(s: &str) -> DateTime<FixedOffset> {
    s.parse().expect("Expected a valid RFC 3339 timestamp in test fixture")
}
