use dioxus::prelude::*;

use crate::table::SortDirection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOption {
    pub key: String,
    pub label: String,
}

impl SortOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// "Sort by" field picker with a direction toggle.
#[component]
pub fn SortSelect(
    options: Vec<SortOption>,
    value: Option<String>,
    #[props(default = SortDirection::Asc)] direction: SortDirection,
    on_value_change: EventHandler<String>,
    on_direction_change: EventHandler<SortDirection>,
    #[props(default)] disabled: bool,
) -> Element {
    let selected = value.clone().unwrap_or_default();
    let (arrow, title) = match direction {
        SortDirection::Asc => ("↑", "Sort descending"),
        SortDirection::Desc => ("↓", "Sort ascending"),
    };

    rsx! {
        div { class: "sort-select",
            span { class: "text-muted text-sm", "Sort by:" }
            select {
                class: "form-input form-input-sm",
                disabled,
                value: "{selected}",
                onchange: move |e| on_value_change.call(e.value()),
                option { value: "", disabled: true, selected: selected.is_empty(), "Select field" }
                for opt in options {
                    option {
                        key: "{opt.key}",
                        value: "{opt.key}",
                        selected: opt.key == selected,
                        "{opt.label}"
                    }
                }
            }
            if value.is_some() {
                button {
                    class: "btn btn-sm btn-secondary",
                    title,
                    disabled,
                    onclick: move |_| on_direction_change.call(direction.toggled()),
                    "{arrow}"
                }
            }
        }
    }
}
