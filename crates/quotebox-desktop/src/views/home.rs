//! Home view - the quote page

use dioxus::prelude::*;

use crate::components::{Header, QuoteActions, QuoteDisplay, SearchBar, SearchResults};
use crate::state::AppState;
use crate::theme::ThemePalette;

/// Header, quote card, and footer over an animated gradient
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let colors = state.theme().palette();

    rsx! {
        // Animated background
        div {
            class: "page-background",
            style: "
                position: absolute;
                inset: 0;
                z-index: 0;
                background: {colors.page_background};
            ",
        }

        div {
            class: "home-container",
            style: "
                position: relative;
                z-index: 10;
                display: flex;
                flex-direction: column;
                flex-grow: 1;
                min-height: 100vh;
            ",

            Header {}

            main {
                style: "
                    flex-grow: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 40px 16px;
                ",

                div {
                    class: "quote-card",
                    style: "
                        width: 100%;
                        max-width: 672px;
                        padding: 32px;
                        border-radius: 16px;
                        border: 1px solid {colors.card_border};
                        background: {colors.card_bg};
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        text-align: center;
                    ",

                    QuoteDisplay {}
                    QuoteActions {}
                    SearchBar {}
                    SearchResults {}
                }
            }

            footer {
                style: "
                    padding: 16px;
                    text-align: center;
                    font-size: 14px;
                    font-weight: 600;
                    letter-spacing: 0.05em;
                    background: {colors.footer_bg};
                    color: {colors.footer_text};
                ",
                "🚀 Crafted with precision & passion — Quotes that spark greatness."
            }
        }
    }
}
