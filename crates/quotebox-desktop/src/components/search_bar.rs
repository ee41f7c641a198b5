//! Search input and trigger

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::ThemePalette;

fn run_search(mut state: AppState) {
    let notification = state.widget.write().run_search();
    if let Some(notification) = notification {
        state.notify(notification);
    }
}

/// Typing only updates the term; results refresh on "Search" or Enter.
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = state.theme().palette();
    let search_term = state.widget.read().search_term().to_string();

    rsx! {
        div {
            style: "margin-top: 32px;",

            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search by word or author...",
                value: "{search_term}",
                oninput: move |evt: Event<FormData>| {
                    state.widget.write().set_search_term(evt.value());
                },
                onkeydown: move |evt: Event<KeyboardData>| {
                    if evt.key() == Key::Enter {
                        run_search(state);
                    }
                },
                style: "
                    box-sizing: border-box;
                    width: 100%;
                    padding: 8px 16px;
                    margin: 8px 0 16px 0;
                    border: 1px solid {colors.input_border};
                    border-radius: 6px;
                    font-size: 14px;
                    background: {colors.input_bg};
                    color: {colors.input_text};
                    outline: none;
                ",
            }

            button {
                class: "action-button search-button",
                onclick: move |_| run_search(state),
                style: "
                    width: 100%;
                    padding: 8px 16px;
                    border: none;
                    border-radius: 6px;
                    font-size: 14px;
                    font-weight: 500;
                    background: {colors.search_bg};
                    color: {colors.search_text};
                ",
                "Search"
            }
        }
    }
}
