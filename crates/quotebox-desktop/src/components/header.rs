//! Page header with the theme toggle

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::ThemePalette;

#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let theme = state.theme();
    let colors = theme.palette();

    let toggle_theme = move |_| {
        let result = state.widget.write().toggle_theme();
        match result {
            Ok(mode) => tracing::info!("Theme set to {}", mode),
            Err(e) => tracing::error!("Failed to save theme: {}", e),
        }
    };

    let (icon, label) = if theme.is_dark() {
        ("☀", "Switch to light theme")
    } else {
        ("🌙", "Switch to dark theme")
    };

    rsx! {
        header {
            style: "
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 16px;
                background: {colors.header_bg};
                box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
            ",

            h1 {
                style: "
                    margin: 0;
                    font-size: 26px;
                    font-weight: 700;
                    letter-spacing: 0.025em;
                    color: {colors.header_text};
                ",
                "My Custom Quote App"
            }

            button {
                class: "theme-toggle",
                title: "{label}",
                "aria-label": "{label}",
                onclick: toggle_theme,
                style: "
                    background: transparent;
                    border: 1px solid {colors.header_text};
                    border-radius: 9999px;
                    width: 36px;
                    height: 36px;
                    font-size: 18px;
                    cursor: pointer;
                    color: {colors.header_text};
                ",
                "{icon}"
            }
        }
    }
}
