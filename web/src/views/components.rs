use dioxus::prelude::*;
use tracing::info;
use types::{Column, QuickFilter, Record};
use ui::{ActionKind, CellRenderer, DataTable, Modal, ModalSize, RowAction, TableOptions, Tone};

use crate::data::remove_record;
use crate::use_app;

#[component]
pub fn PageHeader(
    #[props(into)] title: String,
    #[props(into)] subtitle: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        div { class: "page-header",
            div { class: "page-header-content",
                h1 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }
            }
            div { class: "page-header-actions", {children} }
        }
    }
}

/// Badge colours shared by every dashboard table.
pub fn standard_cells() -> CellRenderer {
    CellRenderer::new()
        .badge("status", "Completed", Tone::Green)
        .badge("status", "Active", Tone::Green)
        .badge("status", "In Stock", Tone::Green)
        .badge("status", "Available", Tone::Green)
        .badge("status", "Pending", Tone::Yellow)
        .badge("status", "Low Stock", Tone::Yellow)
        .badge("status", "Processing", Tone::Yellow)
        .badge("status", "Shipped", Tone::Blue)
        .badge("status", "Cancelled", Tone::Red)
        .badge("status", "Inactive", Tone::Red)
        .badge("status", "Out of Stock", Tone::Red)
        .badge("role", "Admin", Tone::Red)
        .badge("role", "Moderator", Tone::Blue)
        .badge_fallback("role", Tone::Gray)
        .actions("actions")
}

/// A [`DataTable`] whose row actions open a details dialog or delete the
/// record from `data`.
#[component]
pub fn RecordTable(
    #[props(into)] title: String,
    #[props(into)] noun: String,
    data: Signal<Vec<Record>>,
    columns: Vec<Column>,
    #[props(default)] quick_filters: Option<Vec<QuickFilter>>,
) -> Element {
    let app = use_app();
    let mut data = data;
    let mut editing = use_signal(|| None::<usize>);
    let mut deleting = use_signal(|| None::<usize>);

    let options = TableOptions::from_defaults(&app.config.read().table);
    let quick_filters = quick_filters.unwrap_or_else(|| vec![QuickFilter::all()]);
    let detail_columns: Vec<Column> = columns.iter().filter(|c| c.key != "actions").cloned().collect();

    let editing_record = editing().and_then(|i| data.read().get(i).cloned());
    let deleting_name = deleting().and_then(|i| data.read().get(i).map(display_name));

    rsx! {
        DataTable {
            title,
            data,
            columns,
            options,
            quick_filters,
            cells: standard_cells(),
            on_action: move |action: RowAction| match action.kind {
                ActionKind::Edit => editing.set(Some(action.index)),
                ActionKind::Delete => deleting.set(Some(action.index)),
            },
        }

        if let Some(record) = editing_record {
            RecordDetailsModal {
                title: format!("{} details", capitalize(&noun)),
                record,
                columns: detail_columns,
                on_close: move |_| editing.set(None),
            }
        }

        if let Some(name) = deleting_name {
            DeleteConfirmModal {
                noun: noun.clone(),
                item_name: name,
                on_close: move |_| deleting.set(None),
                on_confirm: move |_| {
                    if let Some(index) = deleting.take() {
                        if let Some(removed) = remove_record(&mut data.write(), index) {
                            info!(id = %removed.text("id"), "deleted record");
                        }
                    }
                },
            }
        }
    }
}

/// The record's name, or its id when it has none.
fn display_name(record: &Record) -> String {
    match record.text("name") {
        name if name.is_empty() => record.text("id"),
        name => name,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
fn RecordDetailsModal(
    title: String,
    record: Record,
    columns: Vec<Column>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            title,
            on_close,
            footer: rsx! {
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            },
            dl { class: "details-list",
                for column in columns {
                    div { key: "{column.key}", class: "details-row",
                        dt { class: "details-label", "{column.label}" }
                        dd { class: "details-value", "{record.text(&column.key)}" }
                    }
                }
            }
        }
    }
}

#[component]
fn DeleteConfirmModal(
    noun: String,
    item_name: String,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    let title = format!("Delete {}", capitalize(&noun));

    rsx! {
        Modal {
            title,
            size: ModalSize::Sm,
            on_close,
            footer: rsx! {
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_confirm.call(()),
                    "Delete"
                }
            },
            p { "Are you sure you want to delete " strong { "{item_name}" } "?" }
            p { class: "text-muted", "This action cannot be undone." }
        }
    }
}
