use std::{fs, path::Path};

use clap::Parser;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use pug_leaderboard::{
    api::{
        api_structs::{MatchRecord, PlayerRecord, RatingEvent},
        decode_collection
    },
    args::Args,
    export::{match_history_columns, to_delimited_text},
    model::{
        history::build_series,
        leaderboard::assign_ranks,
        metrics::win_percentage,
        structures::side::Side,
        teams::{resolve_side, Roster},
        tiers
    },
    query::{
        match_query::{history_spec, MatchFilter, MatchSortField},
        player_query::{leaderboard_spec, PlayerSortField},
        run,
        sort_state::{SortDirection, SortState},
        PageRequest, Predicate, QuerySpec
    }
};

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .init();

    let mut players: Vec<PlayerRecord> = load_records(&args.players);
    assign_ranks(&mut players);

    print_leaderboard(&players, &args);

    if let Some(player_name) = &args.player {
        let matches_path = args
            .matches
            .as_ref()
            .expect("Expected --matches when a focal player is given");
        let matches: Vec<MatchRecord> = load_records(matches_path);

        print_player_view(&players, &matches, player_name);

        if let Some(history_path) = &args.history {
            let events: Vec<RatingEvent> = load_records(history_path);
            print_rating_summary(&events);
        }
    }
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let payload = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Expected readable payload at {}: {}", path.display(), e));

    decode_collection(&payload).expect("Expected a JSON array payload")
}

fn print_leaderboard(players: &[PlayerRecord], args: &Args) {
    let sort_state = SortState::new(
        PlayerSortField::CurrentRating,
        SortDirection::Descending,
        SortDirection::Descending
    );

    let mut spec = leaderboard_spec(args.show_inactive, sort_state);
    spec.page = Some(PageRequest::new(args.page, args.per_page));
    let result = run(players, &spec);

    println!(
        "Leaderboard — page {}/{} ({} players)",
        args.page, result.total_pages, result.total
    );
    println!(
        "{:<6} {:<6} {:<20} {:>8} {:>12} {:>4} {:>4} {:>4} {:>7}",
        "Active", "Rank", "Player", "Rating", "Tier", "W", "L", "D", "Win %"
    );
    for player in &result.results {
        let tier = player.current_rating.map(tiers::classify);
        println!(
            "{:<6} {:<6} {:<20} {:>8} {:>12} {:>4} {:>4} {:>4} {:>6.1}%",
            format_rank(player.active_rank),
            format_rank(player.all_time_rank),
            player.display_name(),
            player
                .current_rating
                .map(|r| format!("{:.0}", r))
                .unwrap_or_else(|| "-".to_string()),
            tier.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string()),
            player.wins,
            player.losses,
            player.draws,
            win_percentage(player.wins, player.losses)
        );
    }
}

fn format_rank(rank: Option<i32>) -> String {
    rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string())
}

fn print_player_view(players: &[PlayerRecord], matches: &[MatchRecord], player_name: &str) {
    let focal = players
        .iter()
        .find(|p| p.display_name().eq_ignore_ascii_case(player_name))
        .unwrap_or_else(|| panic!("Expected a player named {}", player_name));
    let focal_id = focal.discord_id.as_deref();

    let roster = Roster::from_players(players);
    let filter = MatchFilter::default();
    let sort_state = SortState::new(MatchSortField::CreatedAt, SortDirection::Descending, SortDirection::Ascending);

    let mut spec: QuerySpec<MatchRecord> = history_spec(&filter, &roster, sort_state, None);
    spec.predicates
        .push(Box::new(move |m: &MatchRecord| resolve_side(m, focal_id) != Side::Unknown)
            as Predicate<MatchRecord>);
    let result = run(matches, &spec);

    println!();
    println!("Match history for {} ({} matches)", focal.display_name(), result.total);

    let columns = match_history_columns(focal_id, &roster);
    println!("{}", to_delimited_text(&result.results, &columns, ','));
}

fn print_rating_summary(events: &[RatingEvent]) {
    let series = build_series(events);

    println!();
    match series.average {
        Some(average) => {
            println!("Rating history: {} events, average {:.1}", series.points.len(), average);
            if let (Some(first), Some(last)) = (series.points.first(), series.points.last()) {
                println!(
                    "First {:.0} ({}), latest {:.0} ({})",
                    first.rating, first.timestamp_label, last.rating, last.timestamp_label
                );
            }
        }
        None => println!("Rating history: no events recorded")
    }
}
