use std::collections::HashMap;

use dioxus::prelude::*;
use types::Value;

/// Badge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Yellow,
    Blue,
    Red,
    Gray,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Green => "badge badge-green",
            Tone::Yellow => "badge badge-yellow",
            Tone::Blue => "badge badge-blue",
            Tone::Red => "badge badge-red",
            Tone::Gray => "badge badge-gray",
        }
    }
}

/// How a single cell should be drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum CellDisplay {
    Text(String),
    Badge { text: String, tone: Tone },
    Actions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Edit,
    Delete,
}

/// An action triggered from a row's actions cell. `index` is the record's
/// position in the table data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAction {
    pub index: usize,
    pub kind: ActionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ColumnRender {
    Badges {
        tones: HashMap<String, Tone>,
        fallback: Option<Tone>,
    },
    Actions,
}

impl ColumnRender {
    fn badges() -> Self {
        ColumnRender::Badges {
            tones: HashMap::new(),
            fallback: None,
        }
    }
}

/// Caller-supplied mapping from `(column key, value)` to a [`CellDisplay`].
///
/// Columns without an entry render their value as plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellRenderer {
    columns: HashMap<String, ColumnRender>,
}

impl CellRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `value` in `column` as a badge of the given tone.
    pub fn badge(mut self, column: &str, value: &str, tone: Tone) -> Self {
        if let ColumnRender::Badges { tones, .. } = self.badge_column(column) {
            tones.insert(value.to_string(), tone);
        }
        self
    }

    /// Tone for values of `column` with no explicit mapping.
    pub fn badge_fallback(mut self, column: &str, tone: Tone) -> Self {
        if let ColumnRender::Badges { fallback, .. } = self.badge_column(column) {
            *fallback = Some(tone);
        }
        self
    }

    /// Render `column` as edit/delete buttons.
    pub fn actions(mut self, column: &str) -> Self {
        self.columns.insert(column.to_string(), ColumnRender::Actions);
        self
    }

    fn badge_column(&mut self, column: &str) -> &mut ColumnRender {
        let entry = self
            .columns
            .entry(column.to_string())
            .or_insert_with(ColumnRender::badges);
        if *entry == ColumnRender::Actions {
            *entry = ColumnRender::badges();
        }
        entry
    }

    pub fn display(&self, column: &str, value: Option<&Value>) -> CellDisplay {
        let text = value.map(Value::to_text).unwrap_or_default();
        match self.columns.get(column) {
            Some(ColumnRender::Actions) => CellDisplay::Actions,
            Some(ColumnRender::Badges { tones, fallback }) => {
                match tones.get(&text).copied().or(*fallback) {
                    Some(tone) => CellDisplay::Badge { text, tone },
                    None => CellDisplay::Text(text),
                }
            }
            None => CellDisplay::Text(text),
        }
    }
}

#[component]
pub(crate) fn Cell(display: CellDisplay, on_action: EventHandler<ActionKind>) -> Element {
    match display {
        CellDisplay::Text(text) => rsx! {
            span { class: "cell-text", "{text}" }
        },
        CellDisplay::Badge { text, tone } => rsx! {
            span { class: tone.class(),
                span { class: "badge-dot" }
                "{text}"
            }
        },
        CellDisplay::Actions => rsx! {
            div { class: "cell-actions",
                button {
                    class: "btn btn-sm btn-secondary",
                    onclick: move |_| on_action.call(ActionKind::Edit),
                    "Edit"
                }
                button {
                    class: "btn btn-sm btn-danger-outline",
                    onclick: move |_| on_action.call(ActionKind::Delete),
                    "Delete"
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> CellRenderer {
        CellRenderer::new()
            .badge("status", "Active", Tone::Green)
            .badge("status", "Inactive", Tone::Red)
            .badge("role", "Admin", Tone::Red)
            .badge_fallback("role", Tone::Gray)
            .actions("actions")
    }

    #[test]
    fn mapped_values_become_badges() {
        let display = renderer().display("status", Some(&Value::from("Active")));
        assert_eq!(
            display,
            CellDisplay::Badge {
                text: "Active".to_string(),
                tone: Tone::Green
            }
        );
    }

    #[test]
    fn unmapped_values_use_fallback_or_text() {
        let r = renderer();
        assert_eq!(
            r.display("role", Some(&Value::from("User"))),
            CellDisplay::Badge {
                text: "User".to_string(),
                tone: Tone::Gray
            }
        );
        assert_eq!(
            r.display("status", Some(&Value::from("Archived"))),
            CellDisplay::Text("Archived".to_string())
        );
    }

    #[test]
    fn other_columns_render_text() {
        let r = renderer();
        assert_eq!(
            r.display("stock", Some(&Value::from(45))),
            CellDisplay::Text("45".to_string())
        );
        assert_eq!(r.display("email", None), CellDisplay::Text(String::new()));
        assert_eq!(r.display("actions", None), CellDisplay::Actions);
    }
}
