use std::cmp::Ordering;

use crate::api::api_structs::PlayerRecord;

/// Orders players by rating descending and assigns both rank populations:
/// `all_time_rank` over every player and `active_rank` over active players
/// only. Inactive players keep `active_rank = None`.
///
/// Ranks are dense and 1-based within their population. Players without a
/// rating sink below every rated player.
pub fn assign_ranks(players: &mut [PlayerRecord]) {
    players.sort_by(|a, b| compare_ratings_desc(a.current_rating, b.current_rating));

    let mut all_time_rank = 1;
    let mut active_rank = 1;
    for player in players.iter_mut() {
        player.all_time_rank = Some(all_time_rank);
        all_time_rank += 1;

        if player.is_active {
            player.active_rank = Some(active_rank);
            active_rank += 1;
        } else {
            player.active_rank = None;
        }
    }
}

fn compare_ratings_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal
    }
}
