/// `wins / (wins + losses) * 100`, floored to 0 when the player has no
/// decided games so fresh accounts show 0% instead of NaN. Draws are
/// excluded from the denominator; they neither help nor hurt.
pub fn win_percentage(wins: i32, losses: i32) -> f64 {
    let decided = wins + losses;
    if decided <= 0 {
        return 0.0;
    }

    wins as f64 / decided as f64 * 100.0
}

pub fn games_played(wins: i32, losses: i32, draws: i32) -> i32 {
    wins + losses + draws
}
