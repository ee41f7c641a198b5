//! Search result cards

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::ThemePalette;

/// Hidden while the last search produced nothing.
#[component]
pub fn SearchResults() -> Element {
    let state = use_context::<AppState>();
    let colors = state.theme().palette();
    let results = state.widget.read().search_results().to_vec();

    if results.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "margin-top: 24px; text-align: left; display: flex; flex-direction: column; gap: 16px;",

            h3 {
                style: "margin: 0; font-size: 20px; font-weight: 600;",
                "Search Results:"
            }

            for (index, quote) in results.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: "result-card",
                    style: "
                        padding: 16px;
                        border: 1px solid {colors.result_border};
                        border-radius: 12px;
                        background: {colors.result_bg};
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    ",

                    p {
                        style: "margin: 0; font-weight: 600; color: {colors.result_text};",
                        "\"{quote.text}\""
                    }
                    p {
                        style: "margin: 4px 0 0 0; font-size: 13px; color: {colors.result_muted};",
                        "— {quote.author}"
                    }
                }
            }
        }
    }
}
