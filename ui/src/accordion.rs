use std::collections::BTreeSet;

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl AccordionItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccordionMode {
    #[default]
    Single,
    Multiple,
}

/// Which items are open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    mode: AccordionMode,
    open: BTreeSet<String>,
}

impl AccordionState {
    pub fn new(mode: AccordionMode) -> Self {
        Self {
            mode,
            open: BTreeSet::new(),
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// In single mode opening an item closes every other one.
    pub fn toggle(&mut self, id: &str) {
        if self.open.remove(id) {
            return;
        }
        if self.mode == AccordionMode::Single {
            self.open.clear();
        }
        self.open.insert(id.to_string());
    }
}

#[component]
pub fn Accordion(items: Vec<AccordionItem>, #[props(default)] mode: AccordionMode) -> Element {
    let mut state = use_signal(|| AccordionState::new(mode));

    rsx! {
        div { class: "accordion",
            for item in items {
                {
                    let is_open = state.read().is_open(&item.id);
                    let id = item.id.clone();
                    rsx! {
                        div { key: "{item.id}", class: if is_open { "accordion-item open" } else { "accordion-item" },
                            button {
                                class: "accordion-trigger",
                                onclick: move |_| state.write().toggle(&id),
                                span { "{item.title}" }
                                span { class: "accordion-chevron", if is_open { "▴" } else { "▾" } }
                            }
                            if is_open {
                                div { class: "accordion-content", "{item.content}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
