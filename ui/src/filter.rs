use std::collections::BTreeMap;

use dioxus::prelude::*;

/// Input kind of one filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind {
    Text,
    Number,
    Date,
    Select(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterField {
    pub key: String,
    pub label: String,
    pub kind: FilterKind,
}

impl FilterField {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
        }
    }

    pub fn select(key: impl Into<String>, label: impl Into<String>, options: Vec<String>) -> Self {
        Self::new(key, label, FilterKind::Select(options))
    }

    fn placeholder_text(&self) -> String {
        match self.kind {
            FilterKind::Select(_) => format!("Select {}", self.label.to_lowercase()),
            _ => format!("Enter {}", self.label.to_lowercase()),
        }
    }
}

pub fn has_active_filters(values: &BTreeMap<String, String>) -> bool {
    values.values().any(|v| !v.is_empty())
}

/// Collapsible panel of filter inputs.
///
/// The panel does not own the values: every edit is reported through
/// `on_change` as `(key, value)` and an empty value means "no filter".
#[component]
pub fn FilterPanel(
    fields: Vec<FilterField>,
    values: BTreeMap<String, String>,
    on_change: EventHandler<(String, String)>,
    on_clear: EventHandler<()>,
    #[props(default = true)] show_clear_button: bool,
    #[props(default)] disabled: bool,
) -> Element {
    let mut expanded = use_signal(|| false);
    let active = has_active_filters(&values);

    rsx! {
        div { class: "filter-panel",
            div { class: "filter-toolbar",
                button {
                    class: "btn btn-sm btn-secondary",
                    disabled,
                    onclick: move |_| expanded.toggle(),
                    "Filters"
                    if active {
                        span { class: "filter-dot" }
                    }
                }
                if show_clear_button && active {
                    button {
                        class: "btn btn-sm btn-link",
                        disabled,
                        onclick: move |_| {
                            on_clear.call(());
                            expanded.set(false);
                        },
                        "× Clear"
                    }
                }
            }
            if expanded() {
                div { class: "filter-body",
                    div { class: "filter-grid",
                        for field in fields {
                            {
                                let current = values.get(&field.key).cloned().unwrap_or_default();
                                let key = field.key.clone();
                                let label = field.label.clone();
                                rsx! {
                                    div { key: "{key}", class: "form-group",
                                        label { class: "form-label", r#for: "filter-{key}", "{label}" }
                                        FilterInput { field, value: current, on_change, disabled }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "filter-footer",
                        button {
                            class: "btn btn-sm btn-secondary",
                            onclick: move |_| expanded.set(false),
                            "Close"
                        }
                        if active {
                            button {
                                class: "btn btn-sm btn-primary",
                                onclick: move |_| {
                                    on_clear.call(());
                                    expanded.set(false);
                                },
                                "Clear All"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterInput(
    field: FilterField,
    value: String,
    on_change: EventHandler<(String, String)>,
    disabled: bool,
) -> Element {
    let id = format!("filter-{}", field.key);
    let placeholder = field.placeholder_text();
    let key = field.key.clone();
    let emit = move |v: String| on_change.call((key.clone(), v));

    match field.kind {
        FilterKind::Select(options) => rsx! {
            select {
                id,
                class: "form-input form-input-sm",
                disabled,
                value: "{value}",
                onchange: move |e| emit(e.value()),
                option { value: "", "{placeholder}" }
                for opt in options {
                    option { key: "{opt}", value: "{opt}", selected: opt == value, "{opt}" }
                }
            }
        },
        kind => {
            let input_type = match kind {
                FilterKind::Number => "number",
                FilterKind::Date => "date",
                _ => "text",
            };
            rsx! {
                input {
                    id,
                    class: "form-input form-input-sm",
                    r#type: input_type,
                    placeholder: "{placeholder}",
                    disabled,
                    value: "{value}",
                    oninput: move |e| emit(e.value()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_not_active() {
        let mut values = BTreeMap::new();
        assert!(!has_active_filters(&values));
        values.insert("status".to_string(), String::new());
        assert!(!has_active_filters(&values));
        values.insert("category".to_string(), "Audio".to_string());
        assert!(has_active_filters(&values));
    }

    #[test]
    fn placeholders_follow_the_kind() {
        let select = FilterField::select("status", "Status", vec![]);
        assert_eq!(select.placeholder_text(), "Select status");
        let text = FilterField::new("email", "Email", FilterKind::Text);
        assert_eq!(text.placeholder_text(), "Enter email");
        let date = FilterField::new("date", "Order Date", FilterKind::Date);
        assert_eq!(date.placeholder_text(), "Enter order date");
    }
}
