//! View state and the filter → sort → paginate pipeline behind
//! [`DataTable`](super::DataTable).
//!
//! Everything here is a pure function of the data and the [`ViewState`],
//! so it can be recomputed on every input event and tested without a
//! renderer.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;
use types::{PageSize, QuickFilter, Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Transient interaction state of one table instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    search_query: String,
    current_page: usize,
    page_size: PageSize,
    sort: Option<SortConfig>,
    active_filter: String,
    column_filters: BTreeMap<String, String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PageSize::DEFAULT)
    }
}

impl ViewState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            search_query: String::new(),
            current_page: 1,
            page_size,
            sort: None,
            active_filter: QuickFilter::ALL.to_string(),
            column_filters: BTreeMap::new(),
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn sort(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn column_filters(&self) -> &BTreeMap<String, String> {
        &self.column_filters
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    pub fn set_quick_filter(&mut self, tag: impl Into<String>) {
        self.active_filter = tag.into();
        self.current_page = 1;
    }

    /// An empty value removes the filter for that column.
    pub fn set_column_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let (key, value) = (key.into(), value.into());
        if value.is_empty() {
            self.column_filters.remove(&key);
        } else {
            self.column_filters.insert(key, value);
        }
        self.current_page = 1;
    }

    pub fn clear_column_filters(&mut self) {
        self.column_filters.clear();
        self.current_page = 1;
    }

    /// Changing the page size keeps the current page; the clamp applied on
    /// the next derivation pulls it back into range if needed.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = PageSize::clamped(size);
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.current_page < total_pages {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn clamp_page(&mut self, total_pages: usize) {
        let clamped = self.current_page.clamp(1, total_pages.max(1));
        if clamped != self.current_page {
            debug!(from = self.current_page, to = clamped, "clamped table page");
            self.current_page = clamped;
        }
    }

    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        self.sort = sort;
    }

    /// Same column cycles unsorted → ascending → descending → unsorted;
    /// a different column starts again at ascending.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = match self.sort.take() {
            Some(SortConfig {
                key: current,
                direction: SortDirection::Asc,
            }) if current == key => Some(SortConfig::desc(current)),
            Some(SortConfig {
                key: current,
                direction: SortDirection::Desc,
            }) if current == key => None,
            _ => Some(SortConfig::asc(key)),
        };
        debug!(key, sort = ?self.sort, "toggled table sort");
    }
}

/// The visible slice of a table plus the counts needed for status text
/// and pager controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    /// Indices into the data slice, in display order.
    pub rows: Vec<usize>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub total_pages: usize,
    /// The page actually shown, clamped to `1..=total_pages`.
    pub current_page: usize,
    /// 1-based bounds for "Showing X to Y"; both zero when nothing matched.
    pub range_start: usize,
    pub range_end: usize,
}

pub fn total_pages(filtered_count: usize, page_size: PageSize) -> usize {
    filtered_count.div_ceil(page_size.get()).max(1)
}

/// Run the full pipeline over `data`.
pub fn derive(data: &[Record], state: &ViewState, quick_filters: &[QuickFilter]) -> TableView {
    let ordered = filter_and_sort(data, state, quick_filters);

    let filtered_count = ordered.len();
    let size = state.page_size.get();
    let total_pages = total_pages(filtered_count, state.page_size);
    let current_page = state.current_page.clamp(1, total_pages);

    let start = ((current_page - 1) * size).min(filtered_count);
    let end = (start + size).min(filtered_count);

    TableView {
        rows: ordered[start..end].to_vec(),
        filtered_count,
        total_count: data.len(),
        total_pages,
        current_page,
        range_start: if filtered_count == 0 { 0 } else { start + 1 },
        range_end: end,
    }
}

/// Indices of every record surviving the filters, in sorted order.
pub fn filter_and_sort(
    data: &[Record],
    state: &ViewState,
    quick_filters: &[QuickFilter],
) -> Vec<usize> {
    let query = state.search_query.to_lowercase();
    let quick = quick_filters.iter().find(|f| f.tag == state.active_filter);

    let mut rows: Vec<usize> = data
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_search(record, &query))
        .filter(|(_, record)| quick.is_none_or(|f| f.matches(record)))
        .filter(|(_, record)| matches_columns(record, &state.column_filters))
        .map(|(index, _)| index)
        .collect();

    if let Some(sort) = &state.sort {
        // `sort_by` is stable, so ties keep their filtered order in both
        // directions.
        rows.sort_by(|&a, &b| {
            let ord = compare_field(&data[a], &data[b], &sort.key);
            match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    rows
}

/// `query` must already be lowercase. An empty query matches everything.
pub fn matches_search(record: &Record, query: &str) -> bool {
    query.is_empty()
        || record
            .values()
            .any(|v| v.to_text().to_lowercase().contains(query))
}

fn matches_columns(record: &Record, filters: &BTreeMap<String, String>) -> bool {
    filters
        .iter()
        .all(|(key, value)| value.is_empty() || record.text(key) == *value)
}

fn compare_field(a: &Record, b: &Record, key: &str) -> Ordering {
    let empty = Value::Text(String::new());
    a.get(key)
        .unwrap_or(&empty)
        .compare(b.get(key).unwrap_or(&empty))
}

/// Sorted distinct texts of one field, for filter dropdowns.
pub fn distinct_values(data: &[Record], key: &str) -> Vec<String> {
    data.iter()
        .filter_map(|r| r.get(key).map(Value::to_text))
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(size: usize) -> PageSize {
        PageSize::new(size).unwrap()
    }

    fn numbered(n: usize) -> Vec<Record> {
        (0..n).map(|i| Record::new().with("n", i)).collect()
    }

    fn status_data() -> Vec<Record> {
        vec![
            Record::new().with("id", 1).with("status", "Active"),
            Record::new().with("id", 2).with("status", "Inactive"),
            Record::new().with("id", 3).with("status", "Active"),
        ]
    }

    #[test]
    fn quick_filter_active() {
        let data = status_data();
        let mut state = ViewState::new(page(2));
        state.set_quick_filter("active");

        let view = derive(&data, &state, &QuickFilter::defaults());
        assert_eq!(view.rows, vec![0, 2]);
        assert_eq!(view.filtered_count, 2);
        assert_eq!(view.total_count, 3);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn unknown_quick_filter_keeps_everything() {
        let data = status_data();
        let mut state = ViewState::new(page(10));
        state.set_quick_filter("archived");

        let view = derive(&data, &state, &QuickFilter::defaults());
        assert_eq!(view.filtered_count, 3);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let data = numbered(25);
        let mut state = ViewState::new(page(10));
        state.set_page(3);

        let view = derive(&data, &state, &[]);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.rows, (20..25).collect::<Vec<_>>());
        assert_eq!((view.range_start, view.range_end), (21, 25));
    }

    #[test]
    fn empty_result_has_one_page() {
        let data = numbered(5);
        let mut state = ViewState::new(page(10));
        state.set_search("no such value");

        let view = derive(&data, &state, &[]);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
        assert_eq!((view.range_start, view.range_end), (0, 0));
    }

    #[test]
    fn numeric_sort_both_directions() {
        let data: Vec<Record> = [30, 5, 100]
            .into_iter()
            .map(|n| Record::new().with("stock", n))
            .collect();
        let mut state = ViewState::new(page(10));

        state.toggle_sort("stock");
        let asc: Vec<String> = derive(&data, &state, &[])
            .rows
            .iter()
            .map(|&i| data[i].text("stock"))
            .collect();
        assert_eq!(asc, ["5", "30", "100"]);

        state.toggle_sort("stock");
        let desc: Vec<String> = derive(&data, &state, &[])
            .rows
            .iter()
            .map(|&i| data[i].text("stock"))
            .collect();
        assert_eq!(desc, ["100", "30", "5"]);
    }

    #[test]
    fn sort_cycle_returns_to_unsorted() {
        let mut state = ViewState::default();
        state.toggle_sort("name");
        assert_eq!(state.sort(), Some(&SortConfig::asc("name")));
        state.toggle_sort("name");
        assert_eq!(state.sort(), Some(&SortConfig::desc("name")));
        state.toggle_sort("name");
        assert_eq!(state.sort(), None);
    }

    #[test]
    fn new_column_starts_ascending() {
        let mut state = ViewState::default();
        state.toggle_sort("name");
        state.toggle_sort("name");
        state.toggle_sort("email");
        assert_eq!(state.sort(), Some(&SortConfig::asc("email")));
    }

    #[test]
    fn ties_keep_filtered_order() {
        let data = vec![
            Record::new().with("id", "a").with("role", "User"),
            Record::new().with("id", "b").with("role", "Admin"),
            Record::new().with("id", "c").with("role", "User"),
            Record::new().with("id", "d").with("role", "Admin"),
        ];
        let mut state = ViewState::default();

        state.set_sort(Some(SortConfig::asc("role")));
        assert_eq!(derive(&data, &state, &[]).rows, vec![1, 3, 0, 2]);

        state.set_sort(Some(SortConfig::desc("role")));
        assert_eq!(derive(&data, &state, &[]).rows, vec![0, 2, 1, 3]);
    }

    #[test]
    fn missing_fields_sort_first() {
        let data = vec![
            Record::new().with("name", "Bob"),
            Record::new(),
            Record::new().with("name", "Alice"),
        ];
        let mut state = ViewState::default();
        state.set_sort(Some(SortConfig::asc("name")));
        assert_eq!(derive(&data, &state, &[]).rows, vec![1, 2, 0]);
    }

    #[test]
    fn search_resets_page() {
        let mut state = ViewState::new(page(5));
        state.set_page(3);
        state.set_search("1");
        assert_eq!(state.current_page(), 1);

        state.set_page(2);
        state.set_quick_filter("active");
        assert_eq!(state.current_page(), 1);

        state.set_page(2);
        state.set_column_filter("status", "Active");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn page_size_change_keeps_page_until_clamped() {
        let data = numbered(25);
        let mut state = ViewState::new(page(5));
        state.set_page(5);

        state.set_page_size(20);
        assert_eq!(state.current_page(), 5);

        let view = derive(&data, &state, &[]);
        assert_eq!(view.current_page, 2);
        assert_eq!(view.rows, (20..25).collect::<Vec<_>>());

        state.clamp_page(view.total_pages);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn page_size_zero_is_clamped() {
        let mut state = ViewState::default();
        state.set_page_size(0);
        assert_eq!(state.page_size().get(), 1);
    }

    #[test]
    fn paging_stays_in_range() {
        let mut state = ViewState::default();
        state.prev_page();
        assert_eq!(state.current_page(), 1);
        state.next_page(2);
        state.next_page(2);
        assert_eq!(state.current_page(), 2);
        state.set_page(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn column_filters_match_exact_text() {
        let data = vec![
            Record::new().with("category", "Electronics"),
            Record::new().with("category", "Audio"),
            Record::new().with("category", "Electronics"),
        ];
        let mut state = ViewState::default();
        state.set_column_filter("category", "Electronics");
        assert_eq!(derive(&data, &state, &[]).rows, vec![0, 2]);

        state.set_column_filter("category", "");
        assert!(state.column_filters().is_empty());
        assert_eq!(derive(&data, &state, &[]).filtered_count, 3);
    }

    #[test]
    fn search_is_case_insensitive_over_all_fields() {
        let data = vec![
            Record::new().with("name", "John Doe").with("role", "Admin"),
            Record::new().with("name", "Jane Smith").with("rating", 4.8),
        ];
        let mut state = ViewState::default();

        state.set_search("JOHN");
        assert_eq!(derive(&data, &state, &[]).rows, vec![0]);

        state.set_search("4.8");
        assert_eq!(derive(&data, &state, &[]).rows, vec![1]);
    }

    #[test]
    fn derive_does_not_touch_data() {
        let data = numbered(12);
        let before = data.clone();
        let mut state = ViewState::new(page(5));
        state.set_sort(Some(SortConfig::desc("n")));

        let first = derive(&data, &state, &[]);
        let second = derive(&data, &state, &[]);
        assert_eq!(first, second);
        assert_eq!(data, before);
    }

    #[test]
    fn distinct_values_are_sorted_and_unique() {
        let data = vec![
            Record::new().with("status", "Pending"),
            Record::new().with("status", "Completed"),
            Record::new().with("status", "Pending"),
            Record::new(),
        ];
        assert_eq!(distinct_values(&data, "status"), ["Completed", "Pending"]);
    }
}
