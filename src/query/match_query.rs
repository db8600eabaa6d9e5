use chrono::{DateTime, FixedOffset};
use itertools::Itertools;
use strum_macros::{Display, EnumIter};

use crate::{
    api::api_structs::MatchRecord,
    model::teams::{team_display_names, Roster},
    query::{sort_state::SortState, sort_value::SortValue, PageRequest, Predicate, QuerySpec, Sort}
};

/// Sortable match-history columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum MatchSortField {
    CreatedAt,
    Map
}

pub fn sort_value(m: &MatchRecord, field: MatchSortField) -> SortValue {
    match field {
        MatchSortField::CreatedAt => SortValue::Time(m.created_at),
        MatchSortField::Map => match &m.map {
            Some(map) => SortValue::text(map),
            None => SortValue::Missing
        }
    }
}

/// Compound match filter. Every populated dimension must hold for a record
/// to pass; unset dimensions pass everything.
#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub map: Option<String>,
    pub server: Option<String>,
    /// Inclusive lower bound on `created_at`
    pub date_from: Option<DateTime<FixedOffset>>,
    /// Inclusive upper bound on `created_at`
    pub date_to: Option<DateTime<FixedOffset>>,
    /// Case-insensitive substring matched against the roster-resolved names
    /// of every participant on either side
    pub participant_name: Option<String>
}

impl MatchFilter {
    pub fn to_predicates<'a>(&'a self, roster: &'a Roster) -> Vec<Predicate<'a, MatchRecord>> {
        let mut predicates: Vec<Predicate<'a, MatchRecord>> = Vec::new();

        if let Some(map) = &self.map {
            predicates.push(Box::new(move |m: &MatchRecord| m.map.as_deref() == Some(map.as_str())));
        }
        if let Some(server) = &self.server {
            predicates.push(Box::new(move |m: &MatchRecord| {
                m.server.as_deref() == Some(server.as_str())
            }));
        }
        if let Some(from) = self.date_from {
            predicates.push(Box::new(move |m: &MatchRecord| m.created_at >= from));
        }
        if let Some(to) = self.date_to {
            predicates.push(Box::new(move |m: &MatchRecord| m.created_at <= to));
        }
        if let Some(name) = &self.participant_name {
            let needle = name.to_lowercase();
            predicates.push(Box::new(move |m: &MatchRecord| {
                participant_names(m, roster)
                    .iter()
                    .any(|candidate| candidate.to_lowercase().contains(&needle))
            }));
        }

        predicates
    }
}

fn participant_names(m: &MatchRecord, roster: &Roster) -> Vec<String> {
    let mut names = team_display_names(m.blue_team.as_deref(), roster);
    names.extend(team_display_names(m.red_team.as_deref(), roster));
    names
}

/// Builds the match-history view's spec from the current filter, sort state,
/// and page request.
pub fn history_spec<'a>(
    filter: &'a MatchFilter,
    roster: &'a Roster,
    sort_state: SortState<MatchSortField>,
    page: Option<PageRequest>
) -> QuerySpec<'a, MatchRecord> {
    QuerySpec {
        predicates: filter.to_predicates(roster),
        sort: Some(Sort {
            key: Box::new(move |m: &MatchRecord| sort_value(m, sort_state.key)),
            direction: sort_state.direction
        }),
        page
    }
}

/// Unique non-null map names in first-seen order (filter dropdowns).
pub fn distinct_maps(matches: &[MatchRecord]) -> Vec<String> {
    matches.iter().filter_map(|m| m.map.clone()).unique().collect()
}

/// Unique non-null server names in first-seen order.
pub fn distinct_servers(matches: &[MatchRecord]) -> Vec<String> {
    matches.iter().filter_map(|m| m.server.clone()).unique().collect()
}
