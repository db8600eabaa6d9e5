pub mod match_query;
pub mod player_query;
pub mod sort_state;
pub mod sort_value;

use crate::query::{
    sort_state::SortDirection,
    sort_value::{compare_directed, SortValue}
};

pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

pub struct Sort<'a, T> {
    pub key: Box<dyn Fn(&T) -> SortValue + 'a>,
    pub direction: SortDirection
}

/// One view's data selection: predicates ANDed together, at most one sort
/// key, optional pagination. Fully determined by its field values; there is
/// no hidden history.
pub struct QuerySpec<'a, T> {
    pub predicates: Vec<Predicate<'a, T>>,
    pub sort: Option<Sort<'a, T>>,
    pub page: Option<PageRequest>
}

impl<'a, T> Default for QuerySpec<'a, T> {
    fn default() -> Self {
        QuerySpec {
            predicates: Vec::new(),
            sort: None,
            page: None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize
}

impl PageRequest {
    /// Page and size are both 1-based minimums; `per_page` may equal the
    /// collection size to request everything in one page.
    pub fn new(page: usize, per_page: usize) -> PageRequest {
        PageRequest {
            page: page.max(1),
            per_page: per_page.max(1)
        }
    }
}

/// A page of results plus the counts the display layer needs for paging
/// controls. `total` counts the filtered collection before slicing.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedResult<T> {
    pub results: Vec<T>,
    pub total: usize,
    pub total_pages: usize
}

/// Runs the filter -> sort -> paginate pipeline over a collection.
///
/// A record passes only if it satisfies every predicate. Sort keys are
/// projected once per record, then compared with missing values sinking to
/// the end under both directions. The sort is stable, so repeated runs over
/// an unchanged collection yield identical output. Requesting a page beyond
/// the end returns an empty page, not an error.
pub fn run<'a, T: Clone>(records: &[T], spec: &QuerySpec<'a, T>) -> PagedResult<T> {
    let mut filtered: Vec<&T> = records
        .iter()
        .filter(|record| spec.predicates.iter().all(|predicate| predicate(record)))
        .collect();

    if let Some(sort) = &spec.sort {
        let mut decorated: Vec<(SortValue, &T)> =
            filtered.into_iter().map(|record| ((sort.key)(record), record)).collect();
        decorated.sort_by(|(a, _), (b, _)| compare_directed(a, b, sort.direction));
        filtered = decorated.into_iter().map(|(_, record)| record).collect();
    }

    let total = filtered.len();
    let (slice, total_pages) = match spec.page {
        Some(page_request) => {
            let total_pages = total.div_ceil(page_request.per_page);
            let start = (page_request.page - 1) * page_request.per_page;
            let end = (start + page_request.per_page).min(total);
            if start >= total {
                (&filtered[0..0], total_pages)
            } else {
                (&filtered[start..end], total_pages)
            }
        }
        None => (&filtered[..], 1)
    };

    tracing::debug!(
        "query returned {} of {} records across {} pages",
        slice.len(),
        total,
        total_pages
    );

    PagedResult {
        results: slice.iter().map(|record| (*record).clone()).collect(),
        total,
        total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_spec<'a>(direction: SortDirection, page: Option<PageRequest>) -> QuerySpec<'a, Option<i32>> {
        QuerySpec {
            predicates: Vec::new(),
            sort: Some(Sort {
                key: Box::new(|v: &Option<i32>| match v {
                    Some(n) => SortValue::Number(*n as f64),
                    None => SortValue::Missing
                }),
                direction
            }),
            page
        }
    }

    #[test]
    fn test_filter_is_logical_and() {
        let records: Vec<i32> = (1..=20).collect();
        let spec = QuerySpec {
            predicates: vec![
                Box::new(|n: &i32| n % 2 == 0) as Predicate<i32>,
                Box::new(|n: &i32| *n > 10) as Predicate<i32>,
            ],
            sort: None,
            page: None
        };

        let result = run(&records, &spec);
        assert_eq!(result.results, vec![12, 14, 16, 18, 20]);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let records: Vec<Option<i32>> = vec![Some(3), None, Some(1), Some(2), None];
        let spec = number_spec(SortDirection::Ascending, None);

        let first = run(&records, &spec);
        let second = run(&records, &spec);
        assert_eq!(first, second);
    }

    #[test]
    fn test_nulls_sink_under_both_directions() {
        let records: Vec<Option<i32>> = vec![None, Some(2), Some(1), None, Some(3)];

        let ascending = run(&records, &number_spec(SortDirection::Ascending, None));
        assert_eq!(ascending.results, vec![Some(1), Some(2), Some(3), None, None]);

        // Nulls sink under descending too; they do not lead the view
        let descending = run(&records, &number_spec(SortDirection::Descending, None));
        assert_eq!(descending.results, vec![Some(3), Some(2), Some(1), None, None]);
    }

    #[test]
    fn test_pagination_scenario() {
        // 125 records at 50 per page: 3 pages, page 3 holds 25, page 4 empty
        let records: Vec<Option<i32>> = (1..=125).map(Some).collect();

        let page1 = run(&records, &number_spec(SortDirection::Ascending, Some(PageRequest::new(1, 50))));
        assert_eq!(page1.results.len(), 50);
        assert_eq!(page1.total, 125);
        assert_eq!(page1.total_pages, 3);

        let page3 = run(&records, &number_spec(SortDirection::Ascending, Some(PageRequest::new(3, 50))));
        assert_eq!(page3.results.len(), 25);

        let page4 = run(&records, &number_spec(SortDirection::Ascending, Some(PageRequest::new(4, 50))));
        assert!(page4.results.is_empty());
        assert_eq!(page4.total, 125);
        assert_eq!(page4.total_pages, 3);
    }

    #[test]
    fn test_pagination_completeness() {
        let records: Vec<Option<i32>> = (1..=97).map(Some).collect();
        let per_page = 10;

        let first = run(&records, &number_spec(SortDirection::Ascending, Some(PageRequest::new(1, per_page))));
        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let result = run(
                &records,
                &number_spec(SortDirection::Ascending, Some(PageRequest::new(page, per_page)))
            );
            seen.extend(result.results);
        }

        // Every record exactly once, in the sorted order
        assert_eq!(seen, (1..=97).map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn test_per_page_may_equal_total() {
        let records: Vec<Option<i32>> = (1..=25).map(Some).collect();

        let result = run(&records, &number_spec(SortDirection::Ascending, Some(PageRequest::new(1, 25))));
        assert_eq!(result.results.len(), 25);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_empty_collection() {
        let records: Vec<Option<i32>> = Vec::new();

        let result = run(&records, &number_spec(SortDirection::Ascending, Some(PageRequest::new(1, 10))));
        assert!(result.results.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
    }
}
