use pug_leaderboard::{
    api::decode_collection,
    api::api_structs::{MatchRecord, PlayerRecord},
    export::{match_history_columns, to_delimited_text},
    model::{
        leaderboard::assign_ranks,
        structures::match_outcome::MatchOutcome,
        teams::Roster,
        tiers::{classify, RankTier}
    },
    query::{
        match_query::{history_spec, MatchFilter, MatchSortField},
        player_query::{leaderboard_spec, PlayerSortField},
        run,
        sort_state::{SortDirection, SortState},
        PageRequest
    },
    utils::test_utils::{generate_match_on, generate_players}
};

/// Full presentation flow: payload decode -> rank assignment -> leaderboard
/// query -> match history -> CSV export.
#[test]
fn test_full_leaderboard_flow() {
    // Round-trip through JSON so the wire schema is exercised, not just the
    // in-memory structs
    let generated = generate_players(125);
    let payload = serde_json::to_string(&generated).unwrap();
    let mut players: Vec<PlayerRecord> = decode_collection(&payload).unwrap();
    assert_eq!(players.len(), 125);

    assign_ranks(&mut players);
    assert!(players.iter().all(|p| p.all_time_rank.is_some()));
    assert!(players.iter().all(|p| p.active_rank.is_some() == p.is_active));

    // Default view: rating descending, active players only, 50 per page
    let sort_state = SortState::new(
        PlayerSortField::CurrentRating,
        SortDirection::Descending,
        SortDirection::Descending
    );
    let mut spec = leaderboard_spec(false, sort_state);
    spec.page = Some(PageRequest::new(1, 50));
    let page = run(&players, &spec);

    assert_eq!(page.results.len(), 50);
    assert!(page.results.iter().all(|p| p.is_active));

    // Ratings weakly decrease down the page
    let ratings: Vec<f64> = page.results.iter().filter_map(|p| p.current_rating).collect();
    assert!(ratings.windows(2).all(|w| w[0] >= w[1]));

    // Concatenating every page reproduces the filtered collection exactly once
    let mut collected = Vec::new();
    for page_number in 1..=page.total_pages {
        spec.page = Some(PageRequest::new(page_number, 50));
        collected.extend(run(&players, &spec).results);
    }
    assert_eq!(collected.len(), page.total);

    // Every rated player classifies into exactly one tier
    for player in &players {
        let tier = classify(player.current_rating.unwrap());
        match tier {
            RankTier::Numbered(n) => assert!(n >= 1),
            RankTier::Legend => {}
        }
    }
}

#[test]
fn test_match_history_to_csv_flow() {
    let mut players = generate_players(8);
    assign_ranks(&mut players);
    let roster = Roster::from_players(&players);

    // player_1 has discord id 1001 (see generate_players)
    let focal = players.iter().find(|p| p.display_name() == "player_1").unwrap();
    let focal_id = focal.discord_id.clone();

    let mut m1 = generate_match_on(1, "2024-09-01T18:00:00+00:00", Some(MatchOutcome::BlueWin));
    m1.blue_team = Some("1001,1002".to_string());
    m1.red_team = Some("1003,1004".to_string());
    m1.winning_score = Some(15);
    m1.losing_score = Some(11);
    m1.map = Some("Dust".to_string());

    let mut m2 = generate_match_on(2, "2024-09-03T18:00:00+00:00", Some(MatchOutcome::RedWin));
    m2.blue_team = Some("1001,1003".to_string());
    m2.red_team = Some("1002,1004".to_string());
    m2.winning_score = Some(15);
    m2.losing_score = Some(4);
    m2.map = Some("Aztec".to_string());

    let matches: Vec<MatchRecord> = vec![m1, m2];

    let filter = MatchFilter {
        map: Some("Dust".to_string()),
        ..Default::default()
    };
    let sort_state = SortState::new(MatchSortField::CreatedAt, SortDirection::Ascending, SortDirection::Ascending);
    let spec = history_spec(&filter, &roster, sort_state, None);
    let filtered = run(&matches, &spec);
    assert_eq!(filtered.total, 1);

    let columns = match_history_columns(focal_id.as_deref(), &roster);
    let csv = to_delimited_text(&filtered.results, &columns, ',');

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "Match ID,Date Played,Map,Server,Team,Blue Score,Red Score,Outcome"
    );
    // Focal player was on blue, blue won
    assert!(lines[1].ends_with("Blue,15,11,Win"));
}
