use itertools::Itertools;

use crate::{api::api_structs::RatingEvent, model::constants::NO_MATCH_LABEL};

/// One chart point. `ordinal` is the 1-based position within the ordered
/// sequence, giving uniform x-spacing regardless of real time gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub ordinal: usize,
    pub rating: f64,
    pub timestamp_label: String,
    pub match_label: String
}

/// Chart-ready rating history with an overall-average reference line.
/// `average` is `None` for an empty history, the explicit empty state
/// consumed by the display layer instead of a chart with undefined bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSeries {
    pub points: Vec<SeriesPoint>,
    pub average: Option<f64>
}

impl RatingSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Shapes a player's rating-event log for charting.
///
/// Events are ordered by `sequence_id`, not by timestamp; corrections can be
/// backfilled with an earlier timestamp but the sequence id stays
/// authoritative for display order.
pub fn build_series(events: &[RatingEvent]) -> RatingSeries {
    if events.is_empty() {
        return RatingSeries {
            points: Vec::new(),
            average: None
        };
    }

    let ordered: Vec<&RatingEvent> = events.iter().sorted_by_key(|e| e.sequence_id).collect();

    let sum: f64 = ordered.iter().map(|e| e.rating).sum();
    let average = sum / ordered.len() as f64;

    let points = ordered
        .iter()
        .enumerate()
        .map(|(i, event)| SeriesPoint {
            ordinal: i + 1,
            rating: event.rating,
            timestamp_label: event.created_at.format("%Y-%m-%d %H:%M").to_string(),
            match_label: match event.match_id {
                Some(match_id) => format!("Match #{}", match_id),
                None => NO_MATCH_LABEL.to_string()
            }
        })
        .collect();

    RatingSeries {
        points,
        average: Some(average)
    }
}
