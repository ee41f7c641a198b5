//! "New Quote" and "Copy" buttons

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::ThemePalette;

#[component]
pub fn QuoteActions() -> Element {
    let mut state = use_context::<AppState>();
    let colors = state.theme().palette();

    let new_quote = move |_| {
        let result = state.widget.write().request_new_quote();
        match result {
            Ok(notification) => state.notify(notification),
            Err(e) => tracing::error!("Failed to save new quote: {}", e),
        }
    };

    let copy_quote = move |_| {
        let notification = state
            .widget
            .read()
            .copy_current_quote(&mut *state.clipboard.write());
        if let Some(notification) = notification {
            state.notify(notification);
        }
    };

    let button_style = format!(
        "
            padding: 8px 20px;
            border: none;
            border-radius: 6px;
            font-size: 14px;
            font-weight: 500;
            background: {};
            color: {};
        ",
        colors.action_bg, colors.action_text
    );

    rsx! {
        div {
            style: "
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                gap: 16px;
                margin-top: 16px;
            ",

            button {
                class: "action-button",
                style: "{button_style}",
                onclick: new_quote,
                "New Quote"
            }

            button {
                class: "action-button",
                style: "{button_style}",
                onclick: copy_quote,
                "Copy"
            }
        }
    }
}
