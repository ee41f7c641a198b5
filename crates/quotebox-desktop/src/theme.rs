//! Theme configuration for the desktop app

pub use quotebox_core::ThemeMode;

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub page_background: &'static str,
    pub page_text: &'static str,
    pub header_bg: &'static str,
    pub header_text: &'static str,
    pub card_bg: &'static str,
    pub card_border: &'static str,
    pub quote_text: &'static str,
    pub input_bg: &'static str,
    pub input_border: &'static str,
    pub input_text: &'static str,
    pub action_bg: &'static str,
    pub action_text: &'static str,
    pub search_bg: &'static str,
    pub search_text: &'static str,
    pub result_bg: &'static str,
    pub result_border: &'static str,
    pub result_text: &'static str,
    pub result_muted: &'static str,
    pub footer_bg: &'static str,
    pub footer_text: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    page_background: "linear-gradient(135deg, #fbcfe8, #dbeafe, #fef9c3)",
    page_text: "#111827",
    header_bg: "#111827",
    header_text: "#ffffff",
    card_bg: "#ffffff",
    card_border: "#e5e7eb",
    quote_text: "#000000",
    input_bg: "#dbeafe",
    input_border: "#93c5fd",
    input_text: "#000000",
    action_bg: "#000000",
    action_text: "#ffffff",
    search_bg: "#2563eb",
    search_text: "#000000",
    result_bg: "#ffffff",
    result_border: "#a3e635",
    result_text: "#1f2937",
    result_muted: "#4b5563",
    footer_bg: "#000000",
    footer_text: "#ffffff",
    success: "#16a34a",
    error: "#dc2626",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    page_background: "linear-gradient(135deg, #1f2937, #111827, #000000)",
    page_text: "#ffffff",
    header_bg: "#111827",
    header_text: "#ffffff",
    card_bg: "#1f2937",
    card_border: "#374151",
    quote_text: "#ffffff",
    input_bg: "#1e3a8a",
    input_border: "#2563eb",
    input_text: "#ffffff",
    action_bg: "#000000",
    action_text: "#ffffff",
    search_bg: "#2563eb",
    search_text: "#000000",
    result_bg: "#111827",
    result_border: "#a3e635",
    result_text: "#ffffff",
    result_muted: "#d1d5db",
    footer_bg: "#000000",
    footer_text: "#ffffff",
    success: "#4ade80",
    error: "#f87171",
};

/// Palette lookup for a theme mode
pub trait ThemePalette {
    fn palette(self) -> &'static ColorPalette;
}

impl ThemePalette for ThemeMode {
    fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}
