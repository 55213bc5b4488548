use dioxus::prelude::*;

/// One slot of the numbered pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Pages to show as buttons: the first and last page, every page within
/// two of `current`, and an ellipsis for any gap in between.
pub fn visible_pages(current: usize, total: usize) -> Vec<PageItem> {
    const DELTA: usize = 2;

    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut items = vec![PageItem::Page(1)];
    if current > DELTA + 2 {
        items.push(PageItem::Ellipsis);
    }

    let lo = current.saturating_sub(DELTA).max(2);
    let hi = (current + DELTA).min(total - 1);
    items.extend((lo..=hi).map(PageItem::Page));

    if current + DELTA + 1 < total {
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    } else if total > 1 {
        items.push(PageItem::Page(total));
    }

    items
}

#[component]
pub fn Pagination(
    current_page: usize,
    total_pages: usize,
    on_page_change: EventHandler<usize>,
    summary: Option<String>,
    #[props(default)] show_page_size_selector: bool,
    #[props(default = 10)] page_size: usize,
    #[props(default = vec![5, 10, 20, 50])] page_size_options: Vec<usize>,
    #[props(default)] on_page_size_change: EventHandler<usize>,
) -> Element {
    let pages = visible_pages(current_page, total_pages);
    let summary = summary.unwrap_or_else(|| format!("Page {} of {}", current_page, total_pages));

    rsx! {
        div { class: "pagination",
            div { class: "pagination-summary text-muted text-sm", "{summary}" }
            div { class: "pagination-controls",
                if show_page_size_selector {
                    div { class: "page-size-selector",
                        span { class: "text-muted text-sm", "Show:" }
                        select {
                            class: "form-input form-input-sm",
                            value: "{page_size}",
                            onchange: move |e| {
                                if let Ok(size) = e.value().parse() {
                                    on_page_size_change.call(size);
                                }
                            },
                            for size in page_size_options {
                                option { key: "{size}", value: "{size}", selected: size == page_size, "{size}" }
                            }
                        }
                    }
                }
                button {
                    class: "btn btn-sm btn-secondary pager-btn",
                    title: "Previous page",
                    disabled: current_page <= 1,
                    onclick: move |_| on_page_change.call(current_page.saturating_sub(1).max(1)),
                    "‹"
                }
                for (i, item) in pages.into_iter().enumerate() {
                    {match item {
                        PageItem::Page(page) => rsx! {
                            button {
                                key: "{i}",
                                class: if page == current_page { "btn btn-sm btn-primary pager-btn" } else { "btn btn-sm btn-secondary pager-btn" },
                                onclick: move |_| on_page_change.call(page),
                                "{page}"
                            }
                        },
                        PageItem::Ellipsis => rsx! {
                            span { key: "{i}", class: "pager-ellipsis", "…" }
                        },
                    }}
                }
                button {
                    class: "btn btn-sm btn-secondary pager-btn",
                    title: "Next page",
                    disabled: current_page >= total_pages,
                    onclick: move |_| on_page_change.call(current_page + 1),
                    "›"
                }
            }
        }
    }
}
