// Rating tier boundaries, ascending. A rating at or below boundary i belongs
// to tier i + 1 (boundaries are inclusive ceilings); a rating above the last
// boundary earns the distinguished top tier.
pub const TIER_BOUNDARIES: [f64; 7] = [700.0, 850.0, 1000.0, 1150.0, 1300.0, 1450.0, 1600.0];
pub const TIER_COUNT: usize = TIER_BOUNDARIES.len();
// Outcome codes as stored on match records
pub const BLUE_TEAM_ID: i32 = 1;
pub const RED_TEAM_ID: i32 = 2;
pub const DRAW_ID: i32 = 0;
// Rendered for fields with no data
pub const EMPTY_FIELD: &str = "-";
pub const NO_MATCH_LABEL: &str = "No associated match";
