//! Main application component

use dioxus::prelude::*;

use crate::components::ToastStack;
use crate::services::{open_store, DesktopClipboard, DesktopWidget};
use crate::state::{AppState, ToastQueue};
use crate::styles::GLOBAL_CSS;
use crate::theme::ThemePalette;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // Restored once per session from the durable store
    let widget = use_signal(|| {
        let store = open_store();
        if !store.is_durable() {
            tracing::warn!("Quote and theme changes will be lost when the window closes");
        }
        DesktopWidget::load(store)
    });
    let clipboard = use_signal(DesktopClipboard::new);
    let toasts = use_signal(ToastQueue::new);

    let state = use_context_provider(|| AppState {
        widget,
        clipboard,
        toasts,
    });

    let current_theme = state.theme();
    let colors = current_theme.palette();
    let theme_attr = current_theme.as_str();

    rsx! {
        style { "{GLOBAL_CSS}" }

        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                position: relative;
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                overflow: hidden;
                font-family: system-ui, -apple-system, sans-serif;
                color: {colors.page_text};
                transition: color 0.3s;
            ",
            Home {}
            ToastStack {}
        }
    }
}
