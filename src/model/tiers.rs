use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::model::constants::{TIER_BOUNDARIES, TIER_COUNT};

/// Discrete tier label derived from a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankTier {
    /// 1-based tier index, lowest ratings first
    Numbered(usize),
    /// Above every boundary
    Legend
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankTier::Numbered(n) => write!(f, "Tier {}", n),
            RankTier::Legend => write!(f, "Legend")
        }
    }
}

lazy_static! {
    static ref DISPLAY_CLASSES: HashMap<RankTier, &'static str> = {
        let mut map = HashMap::new();
        map.insert(RankTier::Numbered(1), "tier-bronze");
        map.insert(RankTier::Numbered(2), "tier-silver");
        map.insert(RankTier::Numbered(3), "tier-gold");
        map.insert(RankTier::Numbered(4), "tier-platinum");
        map.insert(RankTier::Numbered(5), "tier-diamond");
        map.insert(RankTier::Numbered(6), "tier-master");
        map.insert(RankTier::Numbered(7), "tier-grandmaster");
        map.insert(RankTier::Legend, "tier-legend");
        map
    };
}

/// Maps a rating to its tier. Scans the boundary table from the lowest value;
/// equality with a boundary belongs to the lower tier.
pub fn classify(rating: f64) -> RankTier {
    for (i, boundary) in TIER_BOUNDARIES.iter().enumerate() {
        if rating <= *boundary {
            return RankTier::Numbered(i + 1);
        }
    }

    RankTier::Legend
}

/// Styling class for a tier, with a fallback for tiers outside the known set.
pub fn display_class(tier: RankTier) -> &'static str {
    DISPLAY_CLASSES.get(&tier).copied().unwrap_or("tier-default")
}
