//! Transient notifications

use dioxus::prelude::*;

use quotebox_core::NotificationKind;

use crate::state::AppState;
use crate::theme::{ColorPalette, ThemePalette};

/// Stack of toasts in the top-right corner. Click one to dismiss it early.
#[component]
pub fn ToastStack() -> Element {
    let mut state = use_context::<AppState>();
    let colors = state.theme().palette();
    let toasts: Vec<(u64, String, &'static str)> = state
        .toasts
        .read()
        .toasts()
        .iter()
        .map(|toast| {
            let accent = accent_for(toast.notification.kind, colors);
            (toast.id, toast.notification.message.clone(), accent)
        })
        .collect();

    rsx! {
        div {
            class: "toast-stack",
            style: "
                position: fixed;
                top: 16px;
                right: 16px;
                z-index: 50;
                display: flex;
                flex-direction: column;
                gap: 8px;
            ",

            for (id, message, accent) in toasts {
                div {
                    key: "{id}",
                    class: "toast",
                    "role": "status",
                    onclick: move |_| state.dismiss(id),
                    style: "
                        min-width: 220px;
                        padding: 12px 16px;
                        border-radius: 8px;
                        border-left: 4px solid {accent};
                        background: {colors.card_bg};
                        color: {colors.page_text};
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                        cursor: pointer;
                        font-size: 14px;
                    ",
                    "{message}"
                }
            }
        }
    }
}

const fn accent_for(kind: NotificationKind, colors: &'static ColorPalette) -> &'static str {
    match kind {
        NotificationKind::Success => colors.success,
        NotificationKind::Error => colors.error,
    }
}
