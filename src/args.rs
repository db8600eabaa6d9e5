use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Clone)]
#[command(
    display_name = "PUG Leaderboard",
    long_about = "Derives leaderboard rankings, match history views, and CSV exports \
    from PUG match and player payloads"
)]
pub struct Args {
    /// JSON array of player records
    #[arg(long, env = "PLAYERS_FILE", help = "Path to the players payload")]
    pub players: PathBuf,

    /// JSON array of match records
    #[arg(long, env = "MATCHES_FILE", help = "Path to the matches payload")]
    pub matches: Option<PathBuf>,

    /// JSON array of rating events for the focal player
    #[arg(long, env = "RATING_HISTORY_FILE", help = "Path to the rating history payload")]
    pub history: Option<PathBuf>,

    /// Focal player name; enables the match-history view and CSV export
    #[arg(short, long, help = "Player name for match history and export")]
    pub player: Option<String>,

    /// Include inactive players on the leaderboard
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub show_inactive: bool,

    #[arg(long, default_value_t = 1, help = "Leaderboard page to display (1-based)")]
    pub page: usize,

    #[arg(long, default_value_t = 50, help = "Records per leaderboard page")]
    pub per_page: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
