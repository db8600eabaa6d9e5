use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};

use super::sort_state::SortDirection;

/// A sort key projected from a record, computed once per record before
/// comparison. `Missing` stands in for null/absent data.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Case-insensitive text; projections lowercase before wrapping
    Text(String),
    Number(f64),
    Time(DateTime<FixedOffset>),
    Missing
}

impl SortValue {
    pub fn text(s: &str) -> SortValue {
        SortValue::Text(s.to_lowercase())
    }

    fn variant_rank(&self) -> u8 {
        match self {
            SortValue::Text(_) => 0,
            SortValue::Number(_) => 1,
            SortValue::Time(_) => 2,
            SortValue::Missing => 3
        }
    }
}

impl Eq for SortValue {}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
            (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
            // Missing is the largest possible value under ascending order
            (SortValue::Missing, _) => Ordering::Greater,
            (_, SortValue::Missing) => Ordering::Less,
            // A single sort key projects one variant; mixed comparisons only
            // happen on malformed projections and fall back to variant order
            (a, b) => a.variant_rank().cmp(&b.variant_rank())
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Direction-aware comparison. Missing values sink to the end under BOTH
/// directions; unset data never bubbles to the top of a descending view.
pub fn compare_directed(a: &SortValue, b: &SortValue, direction: SortDirection) -> Ordering {
    if *a == SortValue::Missing || *b == SortValue::Missing {
        return a.cmp(b);
    }

    match direction {
        SortDirection::Ascending => a.cmp(b),
        SortDirection::Descending => b.cmp(a)
    }
}
