pub mod constants;
pub mod history;
pub mod leaderboard;
pub mod metrics;
pub mod structures;
pub mod teams;
pub mod tiers;
