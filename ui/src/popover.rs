use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PopoverAlign {
    #[default]
    Start,
    End,
}

/// A trigger button that toggles a floating content panel.
#[component]
pub fn Popover(
    trigger: Element,
    #[props(default)] align: PopoverAlign,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let mut open = use_signal(|| false);
    let panel_class = match align {
        PopoverAlign::Start => "popover-content",
        PopoverAlign::End => "popover-content popover-end",
    };

    rsx! {
        div { class: "popover {class}",
            button {
                class: "popover-trigger",
                aria_expanded: "{open}",
                onclick: move |_| open.toggle(),
                {trigger}
            }
            if open() {
                div { class: "popover-backdrop", onclick: move |_| open.set(false) }
                div { class: panel_class, {children} }
            }
        }
    }
}
