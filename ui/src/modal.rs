use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ModalSize {
    fn class(self) -> &'static str {
        match self {
            ModalSize::Sm => "modal modal-sm",
            ModalSize::Md => "modal",
            ModalSize::Lg => "modal modal-lg",
        }
    }
}

/// Dialog over a dimmed overlay.
///
/// Clicking the overlay or the close button calls `on_close` unless
/// `dismissible` is false.
#[component]
pub fn Modal(
    #[props(into)] title: String,
    on_close: EventHandler<()>,
    #[props(default = true)] dismissible: bool,
    #[props(default)] size: ModalSize,
    footer: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if dismissible { on_close.call(()) },
            div { class: size.class(),
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    if dismissible {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                div { class: "modal-body", {children} }
                if let Some(footer) = footer {
                    div { class: "modal-footer", {footer} }
                }
            }
        }
    }
}
