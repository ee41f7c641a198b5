//! The current quote

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::ThemePalette;

/// Renders nothing until a quote has been shown.
#[component]
pub fn QuoteDisplay() -> Element {
    let state = use_context::<AppState>();
    let colors = state.theme().palette();
    let quote = state.widget.read().current_quote().cloned();

    rsx! {
        {quote.map(|quote| rsx! {
            blockquote {
                style: "margin: 0 0 24px 0;",

                p {
                    style: "
                        margin: 0;
                        font-size: 28px;
                        font-weight: 700;
                        text-align: center;
                        color: {colors.quote_text};
                    ",
                    "“{quote.text}”"
                }
                cite {
                    style: "
                        display: block;
                        margin-top: 16px;
                        font-size: 18px;
                        font-weight: 500;
                        font-style: normal;
                        text-align: center;
                        color: {colors.quote_text};
                    ",
                    "— {quote.author}"
                }
            }
        })}
    }
}
