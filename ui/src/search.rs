use dioxus::prelude::*;

/// A controlled search box with a clear button.
///
/// `on_change` fires on every keystroke; `on_search`, when given, fires on
/// Enter and from the explicit search button.
#[component]
pub fn SearchInput(
    value: String,
    on_change: EventHandler<String>,
    on_search: Option<EventHandler<String>>,
    #[props(into, default = "Search...".to_string())] placeholder: String,
    #[props(default = true)] show_clear_button: bool,
    #[props(default)] disabled: bool,
) -> Element {
    let has_value = !value.is_empty();
    let submit = {
        let value = value.clone();
        move || {
            if let Some(handler) = on_search {
                handler.call(value.clone());
            }
        }
    };
    let submit_on_enter = submit.clone();
    let submit_on_click = submit;

    rsx! {
        div { class: "search",
            div { class: "search-field",
                span { class: "search-icon", "⌕" }
                input {
                    class: "form-input search-input",
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    disabled,
                    oninput: move |e| on_change.call(e.value()),
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            submit_on_enter();
                        }
                    },
                }
                if show_clear_button && has_value {
                    button {
                        class: "search-clear",
                        title: "Clear search",
                        onclick: move |_| on_change.call(String::new()),
                        "×"
                    }
                }
            }
            if on_search.is_some() {
                button {
                    class: "btn btn-primary search-submit",
                    disabled: disabled || !has_value,
                    onclick: move |_| submit_on_click(),
                    "Search"
                }
            }
        }
    }
}
