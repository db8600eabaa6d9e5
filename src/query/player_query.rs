use strum_macros::{Display, EnumIter};

use crate::{
    api::api_structs::PlayerRecord,
    model::metrics::win_percentage,
    query::{sort_state::SortState, sort_value::SortValue, Predicate, QuerySpec, Sort}
};

/// Sortable leaderboard columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PlayerSortField {
    ActiveRank,
    AllTimeRank,
    PlayerName,
    CurrentRating,
    Wins,
    Losses,
    Draws,
    WinPercentage
}

/// Projects one player to the sort key for a column. Derived columns (win
/// percentage) are computed here, once per record, not per comparison.
pub fn sort_value(player: &PlayerRecord, field: PlayerSortField) -> SortValue {
    match field {
        PlayerSortField::ActiveRank => rank_value(player.active_rank),
        PlayerSortField::AllTimeRank => rank_value(player.all_time_rank),
        PlayerSortField::PlayerName => SortValue::text(player.display_name()),
        PlayerSortField::CurrentRating => match player.current_rating {
            Some(rating) => SortValue::Number(rating),
            None => SortValue::Missing
        },
        PlayerSortField::Wins => SortValue::Number(player.wins as f64),
        PlayerSortField::Losses => SortValue::Number(player.losses as f64),
        PlayerSortField::Draws => SortValue::Number(player.draws as f64),
        PlayerSortField::WinPercentage => SortValue::Number(win_percentage(player.wins, player.losses))
    }
}

fn rank_value(rank: Option<i32>) -> SortValue {
    match rank {
        Some(rank) => SortValue::Number(rank as f64),
        None => SortValue::Missing
    }
}

/// Builds the leaderboard view's spec: optional active-only filter plus the
/// current sort state.
pub fn leaderboard_spec<'a>(
    show_inactive: bool,
    sort_state: SortState<PlayerSortField>
) -> QuerySpec<'a, PlayerRecord> {
    let mut predicates: Vec<Predicate<'a, PlayerRecord>> = Vec::new();
    if !show_inactive {
        predicates.push(Box::new(|player: &PlayerRecord| player.is_active));
    }

    QuerySpec {
        predicates,
        sort: Some(Sort {
            key: Box::new(move |player: &PlayerRecord| sort_value(player, sort_state.key)),
            direction: sort_state.direction
        }),
        page: None
    }
}
