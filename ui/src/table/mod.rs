mod cell;
pub mod view;

pub use cell::{ActionKind, CellDisplay, CellRenderer, RowAction, Tone};
pub use view::{SortConfig, SortDirection, TableView, ViewState};

use cell::Cell;
use dioxus::prelude::*;
use types::{Column, ColumnFilter, PageSize, QuickFilter, Record, config::TableDefaults};

use crate::filter::{FilterField, FilterKind, FilterPanel};
use crate::pagination::Pagination;
use crate::search::SearchInput;

/// Feature switches and paging defaults for a [`DataTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub searchable: bool,
    pub filterable: bool,
    pub sortable: bool,
    pub pagination: bool,
    pub page_size: PageSize,
    pub show_page_size_selector: bool,
    pub page_size_options: Vec<usize>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            searchable: true,
            filterable: true,
            sortable: true,
            pagination: true,
            page_size: PageSize::DEFAULT,
            show_page_size_selector: true,
            page_size_options: vec![5, 10, 20, 50],
        }
    }
}

impl TableOptions {
    pub fn from_defaults(defaults: &TableDefaults) -> Self {
        Self {
            page_size: defaults.page_size,
            page_size_options: defaults.page_size_options.clone(),
            ..Self::default()
        }
    }
}

/// The visible slice of `data`. With pagination off every filtered row
/// lands on a single page.
pub fn derive_view(
    data: &[Record],
    state: &ViewState,
    quick_filters: &[QuickFilter],
    paginate: bool,
) -> TableView {
    if paginate {
        return view::derive(data, state, quick_filters);
    }
    let mut all = state.clone();
    all.set_page_size(data.len());
    all.set_page(1);
    view::derive(data, &all, quick_filters)
}

/// Filter panel input for a filterable column. Select inputs offer the
/// distinct values found in `data`.
pub fn filter_field(column: &Column, data: &[Record]) -> FilterField {
    let (key, label) = (column.key.clone(), column.label.clone());
    let kind = match column.filter {
        ColumnFilter::Select => {
            return FilterField::select(key, label, view::distinct_values(data, &column.key));
        }
        ColumnFilter::Text => FilterKind::Text,
        ColumnFilter::Number => FilterKind::Number,
        ColumnFilter::Date => FilterKind::Date,
    };
    FilterField::new(key, label, kind)
}

/// Searchable, filterable, sortable, paginated table over in-memory records.
///
/// The table never mutates `data`. Row actions are reported with the index
/// of the record in `data` so the host can edit or remove it.
#[component]
pub fn DataTable(
    #[props(into, default)] title: String,
    data: ReadSignal<Vec<Record>>,
    columns: Vec<Column>,
    #[props(default)] options: TableOptions,
    #[props(default = QuickFilter::defaults())] quick_filters: Vec<QuickFilter>,
    #[props(default)] cells: CellRenderer,
    #[props(default)] on_action: EventHandler<RowAction>,
) -> Element {
    let initial_page_size = options.page_size;
    let mut state = use_signal(move || ViewState::new(initial_page_size));

    let filters = quick_filters.clone();
    let paginate = options.pagination;
    let derived = use_memo(use_reactive!(|(filters, paginate)| {
        derive_view(&data.read(), &state.read(), &filters, paginate)
    }));

    // Keep the stored page inside the range the data allows.
    use_effect(move || {
        let total = derived.read().total_pages;
        if state.peek().current_page() > total {
            state.write().clamp_page(total);
        }
    });

    let view = derived();
    let data_ref = data.read();
    let current = state.read().clone();
    let colspan = columns.len().max(1);

    let filter_fields: Vec<FilterField> = columns
        .iter()
        .filter(|c| c.filterable)
        .map(|c| filter_field(c, &data_ref))
        .collect();
    let show_filter_panel = options.filterable && !filter_fields.is_empty();
    let show_quick_filters = options.filterable && quick_filters.len() > 1;

    let summary = format!(
        "Showing {} to {} of {} results",
        view.range_start, view.range_end, view.filtered_count
    );

    rsx! {
        div { class: "card data-table",
            div { class: "card-header data-table-header",
                div {
                    if !title.is_empty() {
                        h2 { class: "card-title", "{title}" }
                    }
                    p { class: "text-muted text-sm",
                        "Showing {view.filtered_count} of {view.total_count} total records"
                    }
                }
            }
            div { class: "data-table-toolbar",
                if options.searchable {
                    SearchInput {
                        value: current.search_query().to_string(),
                        on_change: move |query: String| state.write().set_search(query),
                    }
                }
                if show_quick_filters {
                    div { class: "quick-filters",
                        for filter in quick_filters.iter().cloned() {
                            {
                                let count = filter.count(&data_ref);
                                let active = filter.tag == current.active_filter();
                                let tag = filter.tag.clone();
                                rsx! {
                                    button {
                                        key: "{filter.tag}",
                                        class: if active { "btn btn-sm btn-primary" } else { "btn btn-sm btn-secondary" },
                                        onclick: move |_| state.write().set_quick_filter(tag.clone()),
                                        "{filter.label} ({count})"
                                    }
                                }
                            }
                        }
                    }
                }
                if show_filter_panel {
                    FilterPanel {
                        fields: filter_fields,
                        values: current.column_filters().clone(),
                        on_change: move |(key, value): (String, String)| state.write().set_column_filter(key, value),
                        on_clear: move |_| state.write().clear_column_filters(),
                    }
                }
            }
            div { class: "table-container",
                table {
                    thead {
                        tr {
                            for column in columns.iter().cloned() {
                                {
                                    let sortable = options.sortable && column.sortable;
                                    let indicator = match current.sort() {
                                        Some(sort) if sort.key == column.key => match sort.direction {
                                            SortDirection::Asc => "↑",
                                            SortDirection::Desc => "↓",
                                        },
                                        _ => "↕",
                                    };
                                    let key = column.key.clone();
                                    rsx! {
                                        th {
                                            key: "{column.key}",
                                            class: if sortable { "sortable" },
                                            style: column.width.as_ref().map(|w| format!("width: {w}")),
                                            onclick: move |_| {
                                                if sortable {
                                                    state.write().toggle_sort(&key);
                                                }
                                            },
                                            "{column.label}"
                                            if sortable {
                                                span { class: "sort-indicator", "{indicator}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    tbody {
                        if view.rows.is_empty() {
                            tr {
                                td { class: "table-empty", colspan: "{colspan}", "No data found" }
                            }
                        }
                        for index in view.rows.iter().copied() {
                            tr { key: "{index}",
                                for column in columns.iter() {
                                    td { key: "{column.key}",
                                        Cell {
                                            display: cells.display(&column.key, data_ref[index].get(&column.key)),
                                            on_action: move |kind: ActionKind| on_action.call(RowAction { index, kind }),
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if options.pagination {
                div { class: "card-footer",
                    Pagination {
                        current_page: view.current_page,
                        total_pages: view.total_pages,
                        summary,
                        on_page_change: move |page: usize| state.write().set_page(page),
                        show_page_size_selector: options.show_page_size_selector,
                        page_size: current.page_size().get(),
                        page_size_options: options.page_size_options.clone(),
                        on_page_size_change: move |size: usize| state.write().set_page_size(size),
                    }
                }
            }
        }
    }
}
