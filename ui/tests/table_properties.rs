//! Property tests for the table pipeline.

use proptest::prelude::*;
use types::{PageSize, QuickFilter, Record, Value};
use ui::table::view::{self, ViewState, filter_and_sort, total_pages};

fn record_strategy() -> impl Strategy<Value = (String, i32, bool)> {
    ("[a-zA-Z ]{0,8}", -50i32..50, any::<bool>())
}

fn records(rows: Vec<(String, i32, bool)>) -> Vec<Record> {
    rows.into_iter()
        .enumerate()
        .map(|(i, (name, score, flag))| {
            Record::new()
                .with("id", i)
                .with("name", name)
                .with("score", score)
                .with("flag", flag)
                .with("status", if flag { "Active" } else { "Inactive" })
        })
        .collect()
}

fn state_with_page_size(size: usize) -> ViewState {
    ViewState::new(PageSize::clamped(size))
}

proptest! {
    #[test]
    fn search_keeps_exactly_the_matching_records(
        rows in prop::collection::vec(record_strategy(), 0..40),
        query in "[a-zA-Z]{0,3}",
    ) {
        let data = records(rows);
        let mut state = state_with_page_size(1000);
        state.set_search(query.clone());
        let kept = filter_and_sort(&data, &state, &[]);

        let needle = query.to_lowercase();
        for (i, record) in data.iter().enumerate() {
            let matches = record
                .values()
                .any(|v| v.to_text().to_lowercase().contains(&needle));
            prop_assert_eq!(kept.contains(&i), matches);
        }
    }

    #[test]
    fn total_pages_is_ceiling_with_floor_of_one(filtered in 0usize..500, size in 1usize..60) {
        let expected = std::cmp::max(1, filtered.div_ceil(size));
        prop_assert_eq!(total_pages(filtered, PageSize::clamped(size)), expected);
    }

    #[test]
    fn page_bounds_hold(
        rows in prop::collection::vec(record_strategy(), 0..60),
        size in 1usize..15,
        page in 0usize..20,
    ) {
        let data = records(rows);
        let mut state = state_with_page_size(size);
        state.set_page(page);
        let v = view::derive(&data, &state, &QuickFilter::defaults());

        prop_assert!(v.current_page >= 1 && v.current_page <= v.total_pages);
        prop_assert!(v.rows.len() <= size);
        prop_assert!(v.range_end <= v.filtered_count);
        prop_assert_eq!(v.total_count, data.len());
        if v.filtered_count > 0 {
            prop_assert_eq!(v.range_end - v.range_start + 1, v.rows.len());
        }
    }

    #[test]
    fn three_toggles_restore_the_unsorted_order(
        rows in prop::collection::vec(record_strategy(), 0..30),
        key in prop::sample::select(vec!["name", "score", "flag", "missing"]),
    ) {
        let data = records(rows);
        let mut state = state_with_page_size(1000);
        let before = filter_and_sort(&data, &state, &[]);
        for _ in 0..3 {
            state.toggle_sort(key);
        }
        prop_assert!(state.sort().is_none());
        prop_assert_eq!(filter_and_sort(&data, &state, &[]), before);
    }

    #[test]
    fn search_always_resets_the_page(page in 1usize..100, query in ".{0,6}") {
        let mut state = state_with_page_size(5);
        state.set_page(page);
        state.set_search(query);
        prop_assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn derivation_is_idempotent(
        rows in prop::collection::vec(record_strategy(), 0..40),
        query in "[a-z]{0,2}",
        tag in prop::sample::select(vec!["all", "active", "inactive"]),
    ) {
        let data = records(rows);
        let before = data.clone();
        let mut state = state_with_page_size(7);
        state.set_search(query);
        state.set_quick_filter(tag);
        state.toggle_sort("score");
        let filters = QuickFilter::defaults();

        let first = view::derive(&data, &state, &filters);
        let second = view::derive(&data, &state, &filters);
        prop_assert_eq!(first, second);
        prop_assert_eq!(data, before);
    }

    #[test]
    fn equal_keys_keep_their_filtered_order(
        rows in prop::collection::vec(record_strategy(), 0..40),
        descending in any::<bool>(),
    ) {
        let data = records(rows);
        let mut state = state_with_page_size(1000);
        state.toggle_sort("flag");
        if descending {
            state.toggle_sort("flag");
        }
        let sorted = filter_and_sort(&data, &state, &[]);

        for flag in [false, true] {
            let group: Vec<usize> = sorted
                .iter()
                .copied()
                .filter(|&i| data[i].get("flag") == Some(&Value::Bool(flag)))
                .collect();
            let mut ascending = group.clone();
            ascending.sort_unstable();
            prop_assert_eq!(group, ascending);
        }
    }
}
